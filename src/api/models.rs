#[derive(Debug, Default)]
pub struct ViewsQuery {
    pub url: Option<String>,
}

impl ViewsQuery {
    /// Keeps the first `url` value; later repeats are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let url = pairs
            .into_iter()
            .find(|(key, _)| key == "url")
            .map(|(_, value)| value);

        ViewsQuery { url }
    }

    /// The requested page, treating an empty parameter the same as a missing one.
    pub fn page_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_url_wins_when_repeated() {
        let query = ViewsQuery::from_pairs(pairs(&[("url", "http://a/watch"), ("url", "other")]));
        assert_eq!(query.page_url(), Some("http://a/watch"));
    }

    #[test]
    fn other_keys_are_ignored() {
        let query = ViewsQuery::from_pairs(pairs(&[("v", "abc"), ("url", "http://a/watch")]));
        assert_eq!(query.page_url(), Some("http://a/watch"));
    }

    #[test]
    fn empty_or_absent_url_is_missing() {
        assert_eq!(ViewsQuery::from_pairs(pairs(&[("url", "")])).page_url(), None);
        assert_eq!(ViewsQuery::from_pairs(Vec::new()).page_url(), None);
    }
}
