//! Database schema definitions

/// SQL to create the bugs table
///
/// `other_fields_json` holds the full re-encoded bug, named fields included.
pub const CREATE_BUGS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS bugs (
    id INTEGER PRIMARY KEY,
    creation_time TEXT,
    creator TEXT,
    summary TEXT,
    other_fields_json TEXT
)
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_BUGS_TABLE]
}
