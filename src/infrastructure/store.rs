//! In-memory relational tag store
//!
//! Holds the records, tags, and taggings tables and executes query specs
//! with the finder's set semantics. The whole store serializes to a TOML
//! document; the repository handles reading and writing it.

use crate::domain::tags::{QuerySpec, Tag, TagList, TagPredicate, Tagging};
use crate::error::{MtagError, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::OnceLock;

/// A taggable record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Free-form fields the conditions filter can reference
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

/// The relational store backing tagged-with queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagStore {
    pub taggable_type: String,
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub taggings: Vec<Tagging>,
}

impl TagStore {
    /// Create an empty store for the given taggable type
    pub fn new(taggable_type: &str) -> Self {
        TagStore {
            taggable_type: taggable_type.to_string(),
            records: Vec::new(),
            tags: Vec::new(),
            taggings: Vec::new(),
        }
    }

    /// Find a record by exact name
    pub fn find_record(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Find a record by name, creating it if missing. Returns its id.
    pub fn find_or_create_record(&mut self, name: &str) -> u64 {
        if let Some(record) = self.find_record(name) {
            return record.id;
        }

        let id = next_id(self.records.iter().map(|r| r.id));
        self.records.push(Record {
            id,
            name: name.to_string(),
            attributes: BTreeMap::new(),
            created_at: Utc::now(),
        });
        id
    }

    /// Set an attribute on a record
    pub fn set_attribute(&mut self, record_id: u64, key: &str, value: &str) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| MtagError::RecordNotFound(format!("record id {}", record_id)))?;

        record.attributes.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Replace a record's tag associations with the given tag list.
    ///
    /// Tags are found or created by exact name; the record's previous
    /// taggings are deleted and fresh ones inserted. The stored association
    /// is deduplicated (a record carries each tag at most once), while the
    /// input list itself may contain duplicates.
    pub fn set_tag_list(&mut self, record_id: u64, tags: &TagList) -> Result<()> {
        if !self.records.iter().any(|r| r.id == record_id) {
            return Err(MtagError::RecordNotFound(format!(
                "record id {}",
                record_id
            )));
        }

        self.taggings.retain(|t| t.taggable_id != record_id);

        let mut seen = BTreeSet::new();
        for token in tags.iter() {
            if !seen.insert(token.to_string()) {
                continue;
            }
            let tag_id = self.find_or_create_tag(token);
            let tagging_id = next_id(self.taggings.iter().map(|t| t.id));
            let taggable_type = self.taggable_type.clone();
            self.taggings
                .push(Tagging::new(tagging_id, tag_id, record_id, &taggable_type));
        }

        Ok(())
    }

    /// Tag names of one record, in tagging insertion order
    pub fn tag_list(&self, record_id: u64) -> Vec<String> {
        self.taggings
            .iter()
            .filter(|t| t.taggable_id == record_id)
            .filter_map(|t| self.tags.iter().find(|tag| tag.id == t.tag_id))
            .map(|tag| tag.name.clone())
            .collect()
    }

    /// All distinct tag names in the store, sorted
    pub fn tag_names(&self) -> Vec<String> {
        let names: BTreeSet<String> = self.tags.iter().map(|t| t.name.clone()).collect();
        names.into_iter().collect()
    }

    /// Execute a query spec against the store.
    ///
    /// Results keep record insertion order and are distinct by
    /// construction. The spec's conditions expression is interpreted here
    /// (a single `field = 'value'` / `field != 'value'` comparison);
    /// anything else is rejected.
    pub fn execute(&self, spec: &QuerySpec) -> Result<Vec<&Record>> {
        let counts = self.match_counts(&spec.predicate);
        let condition = match &spec.conditions {
            Some(expr) => Some(Condition::parse(expr)?),
            None => None,
        };

        let selected = self
            .records
            .iter()
            .filter(|record| {
                let count = counts.get(&record.id).copied().unwrap_or(0);
                let tag_match = if spec.exclude {
                    count == 0
                } else if let Some(required) = spec.required_matches {
                    count == required
                } else {
                    count > 0
                };

                tag_match
                    && condition
                        .as_ref()
                        .map_or(true, |cond| cond.matches(record))
            })
            .collect();

        Ok(selected)
    }

    fn find_or_create_tag(&mut self, name: &str) -> u64 {
        if let Some(tag) = self.tags.iter().find(|t| t.name == name) {
            return tag.id;
        }

        let id = next_id(self.tags.iter().map(|t| t.id));
        self.tags.push(Tag::new(id, name));
        id
    }

    /// Count, per record, the taggings whose tag satisfies the predicate
    fn match_counts(&self, predicate: &TagPredicate) -> HashMap<u64, usize> {
        let mut counts = HashMap::new();

        for tagging in &self.taggings {
            if tagging.taggable_type != self.taggable_type {
                continue;
            }
            if let Some(tag) = self.tags.iter().find(|t| t.id == tagging.tag_id) {
                if predicate.matches(tag) {
                    *counts.entry(tagging.taggable_id).or_insert(0) += 1;
                }
            }
        }

        counts
    }
}

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().unwrap_or(0) + 1
}

fn condition_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*(!=|=)\s*'([^']*)'\s*$").unwrap()
    })
}

/// A single parsed conditions comparison over record fields
#[derive(Debug, Clone, PartialEq, Eq)]
struct Condition {
    field: String,
    value: String,
    negated: bool,
}

impl Condition {
    fn parse(expr: &str) -> Result<Self> {
        let caps = condition_regex()
            .captures(expr)
            .ok_or_else(|| MtagError::InvalidCondition(expr.to_string()))?;

        let part = |i: usize| caps.get(i).map_or("", |m| m.as_str());
        Ok(Condition {
            field: part(1).to_string(),
            value: part(3).to_string(),
            negated: part(2) == "!=",
        })
    }

    fn matches(&self, record: &Record) -> bool {
        let actual = if self.field == "name" {
            Some(record.name.as_str())
        } else {
            record.attributes.get(&self.field).map(String::as_str)
        };

        let equal = actual == Some(self.value.as_str());
        if self.negated {
            !equal
        } else {
            equal
        }
    }
}
