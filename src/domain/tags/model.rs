//! Relational entities of the tag store

use super::parser;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tag row. Identity is the full name text; fully specified machine tag
/// names (`namespace:predicate=value`) are decomposed into their components
/// at creation time, everything else is a plain label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    pub namespace: Option<String>,
    pub predicate: Option<String>,
    pub value: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Tag {
    /// Create a tag, decomposing the name when it is a full machine tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use mtag::domain::tags::Tag;
    ///
    /// let tag = Tag::new(1, "url:lang=ruby");
    /// assert_eq!(tag.namespace.as_deref(), Some("url"));
    /// assert_eq!(tag.predicate.as_deref(), Some("lang"));
    /// assert_eq!(tag.value.as_deref(), Some("ruby"));
    ///
    /// let plain = Tag::new(2, "red");
    /// assert!(plain.namespace.is_none());
    /// ```
    pub fn new(id: u64, name: &str) -> Self {
        let (namespace, predicate, value) = match parser::split_machine_tag(name) {
            Some((ns, pred, val)) => (
                Some(ns.to_string()),
                Some(pred.to_string()),
                Some(val.to_string()),
            ),
            None => (None, None, None),
        };

        Tag {
            id,
            name: name.to_string(),
            namespace,
            predicate,
            value,
            created_at: Utc::now(),
        }
    }

    /// Whether this tag carries machine tag components.
    pub fn is_machine_tag(&self) -> bool {
        self.namespace.is_some()
    }
}

/// Join row associating one tag with one taggable record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tagging {
    pub id: u64,
    pub tag_id: u64,
    pub taggable_id: u64,
    pub taggable_type: String,
    pub created_at: DateTime<Utc>,
}

impl Tagging {
    pub fn new(id: u64, tag_id: u64, taggable_id: u64, taggable_type: &str) -> Self {
        Tagging {
            id,
            tag_id,
            taggable_id,
            taggable_type: taggable_type.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_tag_decomposition() {
        let tag = Tag::new(1, "testing:color=red");
        assert_eq!(tag.name, "testing:color=red");
        assert_eq!(tag.namespace.as_deref(), Some("testing"));
        assert_eq!(tag.predicate.as_deref(), Some("color"));
        assert_eq!(tag.value.as_deref(), Some("red"));
        assert!(tag.is_machine_tag());
    }

    #[test]
    fn test_plain_tag_has_no_components() {
        let tag = Tag::new(1, "red");
        assert_eq!(tag.name, "red");
        assert_eq!(tag.namespace, None);
        assert_eq!(tag.predicate, None);
        assert_eq!(tag.value, None);
        assert!(!tag.is_machine_tag());
    }

    #[test]
    fn test_partial_forms_stay_plain() {
        // Wildcard syntax is query-side; a stored name only decomposes
        // when fully specified.
        for name in ["url:", "lang=", "=ruby", "url.ruby", "url:lang"] {
            let tag = Tag::new(1, name);
            assert!(!tag.is_machine_tag(), "{} should stay plain", name);
            assert_eq!(tag.name, name);
        }
    }

    #[test]
    fn test_tagging_scopes_type() {
        let tagging = Tagging::new(1, 7, 42, "Record");
        assert_eq!(tagging.tag_id, 7);
        assert_eq!(tagging.taggable_id, 42);
        assert_eq!(tagging.taggable_type, "Record");
    }
}
