//! URL query helpers

use url::Url;

/// Query-string helpers on parsed URLs
pub trait UrlExt {
    /// Copy of the URL with `parameters` appended after any existing query
    /// items, in iteration order
    fn adding_query_parameters<I, K, V>(&self, parameters: I) -> Url
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>;

    /// Decoded value of the first query item named `key`
    fn query_parameter(&self, key: &str) -> Option<String>;
}

impl UrlExt for Url {
    fn adding_query_parameters<I, K, V>(&self, parameters: I) -> Url
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut url = self.clone();
        url.query_pairs_mut().extend_pairs(parameters);
        url
    }

    fn query_parameter(&self, key: &str) -> Option<String> {
        self.query_pairs()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.into_owned())
    }
}
