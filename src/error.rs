//! Error types for mtag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the mtag application
#[derive(Debug, Error)]
pub enum MtagError {
    #[error("Not an mtag store: {0}")]
    NotStoreDirectory(PathBuf),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Invalid condition: {0}")]
    InvalidCondition(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MtagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MtagError::NotStoreDirectory(_) => 2,
            MtagError::RecordNotFound(_) => 3,
            MtagError::InvalidCondition(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MtagError::NotStoreDirectory(path) => {
                format!(
                    "Not an mtag store: {}\n\n\
                    Suggestions:\n\
                    • Run 'mtag init' in this directory to create a new store\n\
                    • Navigate to an existing mtag store\n\
                    • Set MTAG_ROOT environment variable to your store path",
                    path.display()
                )
            }
            MtagError::RecordNotFound(name) => {
                format!(
                    "Record not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'mtag add {} --tags ...' to create it\n\
                    • Record names are matched exactly (case-sensitive)",
                    name, name
                )
            }
            MtagError::InvalidCondition(expr) => {
                format!(
                    "Invalid condition: '{}'\n\n\
                    Supported condition syntax:\n\
                    • field = 'value'\n\
                    • field != 'value'\n\n\
                    The field is 'name' or any attribute set with --set.\n\
                    Example: mtag find \"url:tags=funny\" --conditions \"title = 'so limiting'\"",
                    expr
                )
            }
            MtagError::Config(msg) => {
                if msg.contains("config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: taggable_type, delimiter, created\n\
                        Example: mtag config delimiter ';'",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MtagError
pub type Result<T> = std::result::Result<T, MtagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_store_directory_suggestion() {
        let err = MtagError::NotStoreDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("mtag init"));
        assert!(msg.contains("MTAG_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_record_not_found_suggestions() {
        let err = MtagError::RecordNotFound("ruby".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("mtag add ruby"));
        assert!(msg.contains("case-sensitive"));
    }

    #[test]
    fn test_invalid_condition_suggestions() {
        let err = MtagError::InvalidCondition("title LIKE '%x%'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("field = 'value'"));
        assert!(msg.contains("field != 'value'"));
        assert!(msg.contains("--conditions"));
    }

    #[test]
    fn test_config_key_suggestions() {
        let err = MtagError::Config("Unknown config key: 'mode'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("taggable_type, delimiter, created"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            MtagError::NotStoreDirectory(PathBuf::from(".")).exit_code(),
            2
        );
        assert_eq!(MtagError::RecordNotFound("x".to_string()).exit_code(), 3);
        assert_eq!(MtagError::InvalidCondition("x".to_string()).exit_code(), 4);
        assert_eq!(MtagError::Config("x".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = MtagError::Config("bad delimiter".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "bad delimiter");
    }
}
