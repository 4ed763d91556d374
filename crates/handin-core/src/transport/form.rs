//! Form payload built fresh for every request.

use url::form_urlencoded;

/// Ordered field list sent as `application/x-www-form-urlencoded`.
///
/// Field order is insertion order; setting an existing key replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// UTF-8 percent-encode every key and value and join with `&`.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.fields {
            serializer.append_pair(k, v);
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_joins_pairs_in_order() {
        let p = FormPayload::new().with("h", "dc1").with("auID", "au123456");
        assert_eq!(p.encode(), "h=dc1&auID=au123456");
    }

    #[test]
    fn encode_escapes_source_text() {
        let p = FormPayload::new().with("die", "int x = a + b;\n// æøå & more");
        assert_eq!(
            p.encode(),
            "die=int+x+%3D+a+%2B+b%3B%0A%2F%2F+%C3%A6%C3%B8%C3%A5+%26+more"
        );
    }

    #[test]
    fn insert_replaces_existing_key() {
        let mut p = FormPayload::new().with("code", "1");
        p.insert("code", "2");
        assert_eq!(p.len(), 1);
        assert_eq!(p.get("code"), Some("2"));
    }

    #[test]
    fn empty_payload_encodes_to_empty_body() {
        assert!(FormPayload::new().is_empty());
        assert_eq!(FormPayload::new().encode(), "");
    }
}
