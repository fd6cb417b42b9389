//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mtag")]
#[command(about = "Machine-tag record finder", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new tag store
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Taggable type recorded on every tagging
        #[arg(long, default_value = "Record")]
        taggable_type: String,

        /// Tag list delimiter
        #[arg(long, default_value = ",")]
        delimiter: String,
    },

    /// Add a record or replace its tag list
    Add {
        /// Record name
        name: String,

        /// Tag list (delimited; tokens may be machine tags like ns:pred=val)
        #[arg(short, long, default_value = "")]
        tags: String,

        /// Record attribute as key=value (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },

    /// Find records tagged with the given tags
    Find {
        /// Tag list; each token may be a wildcard machine tag
        tags: String,

        /// Require every tag to match (exact tags only)
        #[arg(long)]
        match_all: bool,

        /// Find records NOT tagged with any of the tags
        #[arg(long)]
        exclude: bool,

        /// Extra filter, e.g. "title = 'so limiting'"
        #[arg(long)]
        conditions: Option<String>,
    },

    /// List all tags in the store
    Tags,

    /// Print the SQL a find query would run against a relational backend
    Sql {
        /// Tag list; each token may be a wildcard machine tag
        tags: String,

        /// Require every tag to match (exact tags only)
        #[arg(long)]
        match_all: bool,

        /// Compile the complement query instead
        #[arg(long)]
        exclude: bool,

        /// Extra filter, spliced into the WHERE clause verbatim
        #[arg(long)]
        conditions: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
