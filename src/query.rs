use std::iter::FromIterator;

/// Query string arguments sent along with a request.
///
/// Arguments keep the order in which they were first set. Setting a key that is already present
/// replaces its value in place, so merging defaults with caller-supplied arguments lets the
/// latter win without reordering the query string.
///
/// ```
/// # use pexels::query::QueryArgs;
/// let args = QueryArgs::new()
///     .arg("size", 1)
///     .arg("page", "1")
///     .merge(QueryArgs::new().arg("page", 4).arg("orientation", "square"));
///
/// assert_eq!(args.get("page"), Some("4"));
/// assert_eq!(args.to_string(), "size=1&page=4&orientation=square");
/// ```
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct QueryArgs {
    pairs: Vec<(String, String)>,
}

impl QueryArgs {
    /// Create an empty set of arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any previous value for `key`.
    pub fn arg<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.set(key, value);
        self
    }

    /// In-place version of [`Self::arg`].
    pub fn set<K: Into<String>, V: ToString>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.to_string();

        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Apply every argument of `overrides` on top of `self`.
    pub fn merge(mut self, overrides: QueryArgs) -> Self {
        for (k, v) in overrides.pairs {
            self.set(k, v);
        }
        self
    }

    /// Value currently set for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the arguments, in query string order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = QueryArgs::new();
        for (k, v) in iter {
            args.set(k, v);
        }
        args
    }
}

/// Form-urlencoded representation, as sent on the wire.
impl std::fmt::Display for QueryArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish();

        f.write_str(&encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_values_win() {
        let args = QueryArgs::new()
            .arg("query", "cats")
            .arg("size", 1)
            .arg("query", "dogs");

        assert_eq!(
            args.iter().collect::<Vec<_>>(),
            vec![("query", "dogs"), ("size", "1")]
        );
    }

    #[test]
    fn merge_keeps_default_order() {
        let defaults = QueryArgs::new()
            .arg("size", 1)
            .arg("page", "1")
            .arg("per_page", "20");
        let overrides: QueryArgs = vec![("color", "red"), ("per_page", "80")]
            .into_iter()
            .collect();

        assert_eq!(
            defaults.merge(overrides).to_string(),
            "size=1&page=1&per_page=80&color=red"
        );
    }

    #[test]
    fn encoding_decodes_back() {
        let args = QueryArgs::new()
            .arg("query", "black & white")
            .arg("locale", "pt-BR")
            .arg("note", "100% = done?")
            .arg("emoji", "ねこ");

        let encoded = args.to_string();
        assert_eq!(
            encoded,
            "query=black+%26+white&locale=pt-BR&note=100%25+%3D+done%3F&emoji=%E3%81%AD%E3%81%93"
        );

        let decoded: QueryArgs = url::form_urlencoded::parse(encoded.as_bytes()).collect();
        assert_eq!(decoded, args);
    }

    #[test]
    fn empty() {
        let args = QueryArgs::new();

        assert!(args.is_empty());
        assert_eq!(args.get("page"), None);
        assert_eq!(args.to_string(), "");
    }
}
