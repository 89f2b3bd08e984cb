//! Bug record - the sole entity loaded by Bugz
//!
//! A bug file is a JSON object with four well-known keys (`id`,
//! `creation_time`, `creator`, `summary`). Every other key is kept in
//! `other_fields` so that re-encoding a decoded `Bug` reproduces the
//! whole original object.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single bug report.
///
/// Missing or `null` string fields decode to empty strings; `id` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bug {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub creation_time: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub creator: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub summary: String,
    /// Any key not mapped to a named column, in source order
    #[serde(flatten)]
    pub other_fields: Map<String, Value>,
}

impl Bug {
    /// Create a bug with no extra fields
    pub fn new(
        id: i64,
        creation_time: impl Into<String>,
        creator: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id,
            creation_time: creation_time.into(),
            creator: creator.into(),
            summary: summary.into(),
            other_fields: Map::new(),
        }
    }

    /// Decode a bug from raw JSON bytes.
    ///
    /// The bytes go through a `Value` first so a repeated key keeps its
    /// last occurrence instead of failing the decode.
    pub fn from_json_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        serde_json::from_value(value)
    }

    /// Encode the whole record, named fields included, as JSON text.
    ///
    /// This is what lands in the catch-all column.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_named_fields() {
        let bug = Bug::from_json_slice(
            br#"{"id":7,"creation_time":"2024-01-01","creator":"alice","summary":"crash on start"}"#,
        )
        .unwrap();

        assert_eq!(bug, Bug::new(7, "2024-01-01", "alice", "crash on start"));
        assert!(bug.other_fields.is_empty());
    }

    #[test]
    fn test_extra_fields_survive_reencoding() {
        let bug = Bug::from_json_slice(
            br#"{"id":1,"creation_time":"2024-01-01","creator":"a","summary":"s","priority":"high","tags":["ui","p1"]}"#,
        )
        .unwrap();
        assert_eq!(bug.other_fields["priority"], "high");

        let encoded: Value = serde_json::from_str(&bug.to_json_string().unwrap()).unwrap();
        assert_eq!(encoded["id"], 1);
        assert_eq!(encoded["creator"], "a");
        assert_eq!(encoded["priority"], "high");
        assert_eq!(encoded["tags"][1], "p1");
    }

    #[test]
    fn test_extra_field_order_is_preserved() {
        let bug = Bug::from_json_slice(
            br#"{"zeta":1,"id":3,"alpha":2,"creation_time":"t","creator":"c","summary":"s"}"#,
        )
        .unwrap();

        assert_eq!(
            bug.to_json_string().unwrap(),
            r#"{"id":3,"creation_time":"t","creator":"c","summary":"s","zeta":1,"alpha":2}"#
        );
    }

    #[test]
    fn test_missing_strings_default_to_empty() {
        let bug = Bug::from_json_slice(br#"{"id":9}"#).unwrap();
        assert_eq!(bug.creation_time, "");
        assert_eq!(bug.creator, "");
        assert_eq!(bug.summary, "");
    }

    #[test]
    fn test_null_strings_decode_to_empty() {
        let bug = Bug::from_json_slice(
            br#"{"id":1,"creation_time":null,"creator":null,"summary":null,"priority":null}"#,
        )
        .unwrap();
        assert_eq!(bug, Bug {
            other_fields: bug.other_fields.clone(),
            ..Bug::new(1, "", "", "")
        });
        assert_eq!(bug.other_fields["priority"], Value::Null);
    }

    #[test]
    fn test_repeated_key_keeps_last_value() {
        let bug = Bug::from_json_slice(br#"{"id":1,"summary":"old","id":2,"summary":"new","x":1,"x":2}"#)
            .unwrap();
        assert_eq!(bug.id, 2);
        assert_eq!(bug.summary, "new");
        assert_eq!(bug.other_fields["x"], 2);
        assert_eq!(bug.other_fields.len(), 1);
    }

    #[test]
    fn test_shape_errors() {
        // missing id
        assert!(Bug::from_json_slice(br#"{"summary":"s"}"#).is_err());
        // wrong types
        assert!(Bug::from_json_slice(br#"{"id":"1"}"#).is_err());
        assert!(Bug::from_json_slice(br#"{"id":1,"creator":42}"#).is_err());
        // not an object
        assert!(Bug::from_json_slice(br#"[1,2,3]"#).is_err());
        // not JSON at all
        assert!(Bug::from_json_slice(b"{id: 1").is_err());
    }
}
