//! Ordered key-value ContextObject for OpenURL serialization.
//!
//! OpenURL KEV data is an ordered sequence of pairs in which the same key
//! may legitimately repeat (one `rft.au` per additional author), so the
//! container is a list of pairs rather than a map.

use url::form_urlencoded;

/// An ordered collection of OpenURL (key, value) pairs.
///
/// Built fresh per item and discarded after serialization. Insertion order
/// is preserved in the encoded output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextObject {
    pairs: Vec<(String, String)>,
}

impl ContextObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair. Duplicate keys are allowed.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// All pairs, in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// First value stored under `key`, if any.
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

    /// Serialize as an `application/x-www-form-urlencoded` query string.
    ///
    /// Repeated keys serialize as repeated bare keys, which is what the
    /// COinS wire format expects for multi-valued fields.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}
