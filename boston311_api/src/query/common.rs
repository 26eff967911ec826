//! Shared query infrastructure: the [`Query`] trait.

use std::collections::BTreeMap;

use url::Url;

/// Trait implemented by query builders. A query is a flat mapping of
/// parameter names to already-encoded string values.
pub trait Query {
    /// Returns the parameters to send. Absent criteria produce no key at all.
    fn params(&self) -> BTreeMap<&'static str, String>;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let params = self.params();
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params.iter() {
                pairs.append_pair(key, value);
            }
        }
        url
    }
}
