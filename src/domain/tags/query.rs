//! Tag query construction
//!
//! Builds a structured predicate over the tag relation from a list of raw
//! tag tokens and finder flags. Each token is either a wildcard machine tag
//! (matched structurally, field by field) or a plain tag (matched by exact
//! name); the flags select OR, match-all, or exclude set semantics.
//!
//! # Examples
//!
//! ```
//! use mtag::domain::tags::{build_query_spec, FinderOptions, TagList};
//!
//! let tags = TagList::parse("red, clear", ",");
//! let spec = build_query_spec(&tags, &FinderOptions::default()).unwrap();
//! assert!(!spec.exclude);
//! assert!(spec.required_matches.is_none());
//! ```

use super::model::Tag;
use super::parser::{MachineTagPattern, TagList};

/// Columns of the tag relation a predicate can constrain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    Name,
    Namespace,
    Predicate,
    Value,
}

impl TagField {
    /// Column name in the tag relation
    pub fn column(&self) -> &'static str {
        match self {
            TagField::Name => "name",
            TagField::Namespace => "namespace",
            TagField::Predicate => "predicate",
            TagField::Value => "value",
        }
    }
}

/// Predicate tree over tag rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagPredicate {
    /// Exact, case-sensitive equality on one field
    Equals(TagField, String),
    /// Every sub-predicate must match
    And(Vec<TagPredicate>),
    /// At least one sub-predicate must match
    Or(Vec<TagPredicate>),
}

impl TagPredicate {
    /// Build the predicate for a single raw tag token.
    ///
    /// Wildcard machine tags constrain their bound fields; anything else
    /// is exact name equality.
    ///
    /// # Examples
    ///
    /// ```
    /// use mtag::domain::tags::{Tag, TagPredicate};
    ///
    /// let pred = TagPredicate::for_token("url:");
    /// assert!(pred.matches(&Tag::new(1, "url:lang=ruby")));
    /// assert!(!pred.matches(&Tag::new(2, "orl:lang=ruby")));
    /// ```
    pub fn for_token(token: &str) -> TagPredicate {
        match MachineTagPattern::parse(token) {
            Some(pattern) => Self::from_pattern(&pattern),
            None => TagPredicate::Equals(TagField::Name, token.to_string()),
        }
    }

    fn from_pattern(pattern: &MachineTagPattern) -> TagPredicate {
        let mut parts = Vec::new();
        if let Some(ns) = &pattern.namespace {
            parts.push(TagPredicate::Equals(TagField::Namespace, ns.clone()));
        }
        if let Some(pred) = &pattern.predicate {
            parts.push(TagPredicate::Equals(TagField::Predicate, pred.clone()));
        }
        if let Some(value) = &pattern.value {
            parts.push(TagPredicate::Equals(TagField::Value, value.clone()));
        }

        if parts.len() == 1 {
            parts.remove(0)
        } else {
            TagPredicate::And(parts)
        }
    }

    /// Evaluate this predicate against a tag row.
    pub fn matches(&self, tag: &Tag) -> bool {
        match self {
            TagPredicate::Equals(field, want) => field_value(tag, *field) == Some(want.as_str()),
            TagPredicate::And(parts) => parts.iter().all(|p| p.matches(tag)),
            TagPredicate::Or(parts) => parts.iter().any(|p| p.matches(tag)),
        }
    }
}

fn field_value(tag: &Tag, field: TagField) -> Option<&str> {
    match field {
        TagField::Name => Some(tag.name.as_str()),
        TagField::Namespace => tag.namespace.as_deref(),
        TagField::Predicate => tag.predicate.as_deref(),
        TagField::Value => tag.value.as_deref(),
    }
}

/// Finder flags accepted by tagged-with queries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinderOptions {
    /// Extra filter expression, AND-ed into the final query
    pub conditions: Option<String>,
    /// Complement semantics: keep records with no tagging matching any
    /// input tag. Disables `match_all`.
    pub exclude: bool,
    /// Conjunction semantics: every input tag must be matched by some
    /// tagging of the record. The grouping count is unreliable with
    /// wildcard machine tags; only exact tags are supported here.
    pub match_all: bool,
}

/// The builder's output: a self-contained query description for the
/// storage layer. Rebuilt on every call; holds no references to its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    /// Disjunction over all input tags
    pub predicate: TagPredicate,
    /// Select records NOT in the matching set instead
    pub exclude: bool,
    /// Matching-tagging count each record must reach (match-all
    /// arithmetic); equals the input tag count, duplicates included
    pub required_matches: Option<usize>,
    /// Extra filter expression, interpreted by the storage layer
    pub conditions: Option<String>,
}

/// Build the query spec for a tag list and finder flags.
///
/// Returns `None` for an empty tag list: an empty tag filter selects
/// nothing, never everything, and callers must short-circuit to an empty
/// result set.
///
/// # Examples
///
/// ```
/// use mtag::domain::tags::{build_query_spec, FinderOptions, TagList};
///
/// let options = FinderOptions {
///     match_all: true,
///     ..Default::default()
/// };
/// let spec = build_query_spec(&TagList::parse("red, clear", ","), &options).unwrap();
/// assert_eq!(spec.required_matches, Some(2));
///
/// assert!(build_query_spec(&TagList::parse("", ","), &options).is_none());
/// ```
pub fn build_query_spec(tags: &TagList, options: &FinderOptions) -> Option<QuerySpec> {
    if tags.is_empty() {
        return None;
    }

    let mut per_tag: Vec<TagPredicate> = tags.iter().map(TagPredicate::for_token).collect();
    let predicate = if per_tag.len() == 1 {
        per_tag.remove(0)
    } else {
        TagPredicate::Or(per_tag)
    };

    // Exclude takes precedence; match-all is disabled in that mode.
    let required_matches = if !options.exclude && options.match_all {
        Some(tags.len())
    } else {
        None
    };

    Some(QuerySpec {
        predicate,
        exclude: options.exclude,
        required_matches,
        conditions: options.conditions.clone(),
    })
}
