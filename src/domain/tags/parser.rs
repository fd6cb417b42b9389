//! Tag token parsing: tag lists and wildcard machine tag patterns

use super::model::Tag;
use regex::Regex;
use std::sync::OnceLock;

/// Regex for wildcard machine tag tokens (tokens containing `:` or `=`).
/// Namespace and predicate are word-shaped; the value may not contain
/// another delimiter. Every component is optional.
fn wildcard_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"^(?:([A-Za-z0-9_][A-Za-z0-9_-]*):)?([A-Za-z0-9_][A-Za-z0-9_-]*)?(?:=([^:=]*))?$",
        )
        .unwrap()
    })
}

/// Regex for the two-part dotted shorthand `namespace.value`.
fn dotted_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9_][A-Za-z0-9_-]*)\.([A-Za-z0-9_][A-Za-z0-9_-]*)$").unwrap()
    })
}

/// Regex for fully specified machine tag names `namespace:predicate=value`.
fn full_form_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9_][A-Za-z0-9_-]*):([A-Za-z0-9_][A-Za-z0-9_-]*)=([^:=]+)$")
            .unwrap()
    })
}

/// Split a stored tag name into (namespace, predicate, value) components.
///
/// Only fully specified machine tag names decompose; partial forms such as
/// `url:` or `lang=` remain plain labels when stored as tag names.
pub(crate) fn split_machine_tag(name: &str) -> Option<(&str, &str, &str)> {
    full_form_regex().captures(name).map(|caps| {
        let part = |i| caps.get(i).map_or("", |m| m.as_str());
        (part(1), part(2), part(3))
    })
}

/// An ordered list of raw tag tokens.
///
/// Parsed from a delimited string: tokens are trimmed and empty tokens
/// dropped. Duplicates are preserved; match-all queries count input slots,
/// so the list must not deduplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList {
    tags: Vec<String>,
}

impl TagList {
    /// Parse a delimited string into a tag list.
    ///
    /// # Examples
    ///
    /// ```
    /// use mtag::domain::tags::TagList;
    ///
    /// let tags = TagList::parse("red, clear, red", ",");
    /// assert_eq!(tags.len(), 3);
    /// assert_eq!(tags.iter().next(), Some("red"));
    /// ```
    pub fn parse(input: &str, delimiter: &str) -> Self {
        let tags = input
            .split(delimiter)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        TagList { tags }
    }

    /// Build a tag list from individual tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TagList {
            tags: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Iterate over the raw tokens in input order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

/// Structural decomposition of one wildcard machine tag token.
///
/// An absent field matches any value for that field. At least one field is
/// always bound; a token that would bind none is a plain tag instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineTagPattern {
    pub namespace: Option<String>,
    pub predicate: Option<String>,
    pub value: Option<String>,
}

impl MachineTagPattern {
    /// Parse a raw tag token into a machine tag pattern.
    ///
    /// Recognized forms:
    /// `ns:pred=val`, `ns:pred`, `ns:=val`, `ns:`, `pred=val`, `pred=`,
    /// `=val`, and the dotted shorthand `ns.val`.
    ///
    /// Returns `None` for plain tags and for malformed tokens (multiple
    /// `=`, stray delimiters); parsing never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use mtag::domain::tags::MachineTagPattern;
    ///
    /// let pattern = MachineTagPattern::parse("url:lang=ruby").unwrap();
    /// assert_eq!(pattern.namespace.as_deref(), Some("url"));
    /// assert_eq!(pattern.predicate.as_deref(), Some("lang"));
    /// assert_eq!(pattern.value.as_deref(), Some("ruby"));
    ///
    /// assert!(MachineTagPattern::parse("square").is_none());
    /// ```
    pub fn parse(token: &str) -> Option<Self> {
        if token.contains(':') || token.contains('=') {
            let caps = wildcard_regex().captures(token)?;
            let pattern = MachineTagPattern {
                namespace: caps.get(1).map(|m| m.as_str().to_string()),
                predicate: caps.get(2).map(|m| m.as_str().to_string()),
                value: caps
                    .get(3)
                    .map(|m| m.as_str())
                    .filter(|v| !v.is_empty())
                    .map(str::to_string),
            };
            return pattern.is_bound().then_some(pattern);
        }

        if token.contains('.') {
            let caps = dotted_regex().captures(token)?;
            return Some(MachineTagPattern {
                namespace: caps.get(1).map(|m| m.as_str().to_string()),
                predicate: None,
                value: caps.get(2).map(|m| m.as_str().to_string()),
            });
        }

        None
    }

    /// A candidate tag matches when every bound field equals the tag's
    /// corresponding field exactly; unbound fields impose no constraint.
    pub fn matches(&self, tag: &Tag) -> bool {
        field_matches(self.namespace.as_deref(), tag.namespace.as_deref())
            && field_matches(self.predicate.as_deref(), tag.predicate.as_deref())
            && field_matches(self.value.as_deref(), tag.value.as_deref())
    }

    fn is_bound(&self) -> bool {
        self.namespace.is_some() || self.predicate.is_some() || self.value.is_some()
    }
}

fn field_matches(bound: Option<&str>, actual: Option<&str>) -> bool {
    match bound {
        None => true,
        Some(want) => actual == Some(want),
    }
}
