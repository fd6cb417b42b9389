//! SQL compilation of query specs
//!
//! Renders a [`QuerySpec`] into a single SELECT over the records, taggings,
//! and tags tables. All table names, the primary key, and the taggable type
//! are explicit [`SqlNaming`] configuration; nothing is inferred from
//! ambient conventions. String literals are quoted with `''` escaping.
//!
//! # Examples
//!
//! ```
//! use mtag::domain::tags::{build_query_spec, FinderOptions, SqlCompiler, SqlNaming, TagList};
//!
//! let tags = TagList::parse("url:", ",");
//! let spec = build_query_spec(&tags, &FinderOptions::default()).unwrap();
//!
//! let compiler = SqlCompiler::new(SqlNaming::for_type("records", "Record"));
//! let sql = compiler.compile(&spec);
//! assert!(sql.starts_with("SELECT DISTINCT records.*"));
//! assert!(sql.contains("records_tags.namespace = 'url'"));
//! ```

use super::query::{QuerySpec, TagPredicate};

/// Explicit table and type naming for SQL compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlNaming {
    pub records_table: String,
    pub tags_table: String,
    pub taggings_table: String,
    pub primary_key: String,
    pub taggable_type: String,
}

impl SqlNaming {
    /// Naming for a records table and taggable type, with the standard
    /// `tags`/`taggings` relation and an `id` primary key.
    pub fn for_type(records_table: &str, taggable_type: &str) -> Self {
        SqlNaming {
            records_table: records_table.to_string(),
            tags_table: "tags".to_string(),
            taggings_table: "taggings".to_string(),
            primary_key: "id".to_string(),
            taggable_type: taggable_type.to_string(),
        }
    }

    /// Alias for the joined taggings table
    pub fn taggings_alias(&self) -> String {
        format!("{}_taggings", self.records_table)
    }

    /// Alias for the joined tags table
    pub fn tags_alias(&self) -> String {
        format!("{}_tags", self.records_table)
    }
}

/// Compiles query specs to SQL SELECT statements
pub struct SqlCompiler {
    naming: SqlNaming,
}

impl SqlCompiler {
    pub fn new(naming: SqlNaming) -> Self {
        SqlCompiler { naming }
    }

    /// Render the full SELECT for a query spec.
    ///
    /// The projection is always `DISTINCT <records>.*` and both joins are
    /// outer joins, so records with zero taggings remain candidates for
    /// the exclude path.
    pub fn compile(&self, spec: &QuerySpec) -> String {
        let naming = &self.naming;
        let taggings_alias = naming.taggings_alias();
        let tags_alias = naming.tags_alias();

        let mut where_parts = Vec::new();
        if let Some(extra) = &spec.conditions {
            where_parts.push(format!("({})", extra));
        }
        where_parts.push(self.tag_condition(spec, &tags_alias));

        let mut sql = format!(
            "SELECT DISTINCT {records}.* FROM {records} \
             LEFT OUTER JOIN {taggings} {ta} ON {ta}.taggable_id = {records}.{pk} \
             AND {ta}.taggable_type = {scope} \
             LEFT OUTER JOIN {tags} {tga} ON {tga}.id = {ta}.tag_id \
             WHERE {cond}",
            records = naming.records_table,
            taggings = naming.taggings_table,
            ta = taggings_alias,
            pk = naming.primary_key,
            scope = quote_str(&naming.taggable_type),
            tags = naming.tags_table,
            tga = tags_alias,
            cond = where_parts.join(" AND "),
        );

        if let Some(required) = spec.required_matches {
            sql.push_str(&format!(
                " GROUP BY {ta}.taggable_id HAVING COUNT({ta}.taggable_id) = {required}",
                ta = taggings_alias,
                required = required,
            ));
        }

        sql
    }

    fn tag_condition(&self, spec: &QuerySpec, tags_alias: &str) -> String {
        let naming = &self.naming;

        if spec.exclude {
            // Sub-query runs over the unaliased tables and re-scopes the
            // taggable type itself.
            format!(
                "{records}.{pk} NOT IN (SELECT {taggings}.taggable_id FROM {taggings} \
                 LEFT OUTER JOIN {tags} ON {taggings}.tag_id = {tags}.id \
                 WHERE ({pred}) AND {taggings}.taggable_type = {scope})",
                records = naming.records_table,
                pk = naming.primary_key,
                taggings = naming.taggings_table,
                tags = naming.tags_table,
                pred = self.predicate_sql(&spec.predicate, &naming.tags_table),
                scope = quote_str(&naming.taggable_type),
            )
        } else {
            format!("({})", self.predicate_sql(&spec.predicate, tags_alias))
        }
    }

    fn predicate_sql(&self, predicate: &TagPredicate, alias: &str) -> String {
        match predicate {
            TagPredicate::Equals(field, value) => {
                format!("{}.{} = {}", alias, field.column(), quote_str(value))
            }
            TagPredicate::And(parts) => parts
                .iter()
                .map(|p| self.predicate_sql(p, alias))
                .collect::<Vec<_>>()
                .join(" AND "),
            TagPredicate::Or(parts) => parts
                .iter()
                .map(|p| format!("({})", self.predicate_sql(p, alias)))
                .collect::<Vec<_>>()
                .join(" OR "),
        }
    }
}

fn quote_str(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
