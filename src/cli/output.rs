//! Output formatting utilities

use crate::infrastructure::Record;

/// Format a list of found records for display
pub fn format_record_list(records: &[Record]) -> String {
    if records.is_empty() {
        return "No records found".to_string();
    }

    let mut output = String::new();
    for record in records {
        output.push_str(&format!("{}\n", record.name));
    }
    output
}

/// Format a list of tag names for display.
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("{}\n", tag));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn record(name: &str) -> Record {
        Record {
            id: 1,
            name: name.to_string(),
            attributes: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_format_empty_record_list() {
        let output = format_record_list(&[]);
        assert_eq!(output, "No records found");
    }

    #[test]
    fn test_format_record_list() {
        let records = vec![record("ruby"), record("garnet")];
        let output = format_record_list(&records);
        assert_eq!(output, "ruby\ngarnet\n");
    }

    #[test]
    fn test_format_empty_tag_list() {
        let output = format_tag_list(&[]);
        assert_eq!(output, "No tags found");
    }

    #[test]
    fn test_format_tag_list() {
        let tags = vec!["red".to_string(), "url:lang=ruby".to_string()];
        let output = format_tag_list(&tags);
        assert_eq!(output, "red\nurl:lang=ruby\n");
    }
}
