//! Shared types for the NoteKeeper HTTP API and its clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod timestamp;

/// Note identifiers as they appear on the wire.
pub type NoteId = i64;

// =====================================================
// Domain Types
// =====================================================

/// A titled text note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /api/notes` and `PUT /api/notes/{id}`.
///
/// Both fields are optional on the wire so that a missing field is reported
/// as a validation error rather than a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl NoteInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }
}

// =====================================================
// Response Types
// =====================================================

/// Body returned by `DELETE /api/notes/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteNoteResponse {
    pub message: String,
    pub id: NoteId,
}

impl DeleteNoteResponse {
    pub fn deleted(id: NoteId) -> Self {
        Self {
            message: "Note deleted successfully".to_string(),
            id,
        }
    }
}

/// Error body shared by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

/// Body of `GET /`, describing the available endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    pub endpoints: BTreeMap<String, String>,
}

impl ApiInfo {
    pub fn notekeeper() -> Self {
        let endpoints = [
            ("getNotes", "GET /api/notes"),
            ("getNote", "GET /api/notes/:id"),
            ("createNote", "POST /api/notes"),
            ("updateNote", "PUT /api/notes/:id"),
            ("deleteNote", "DELETE /api/notes/:id"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            message: "NoteKeeper API is running".to_string(),
            endpoints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_note_serializes_camel_case_with_millis() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
        let note = Note {
            id: 4,
            title: "A".to_string(),
            content: "B".to_string(),
            created_at: at,
            updated_at: at,
        };

        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["createdAt"], "2026-10-19T08:30:00.000Z");
        assert_eq!(json["updatedAt"], "2026-10-19T08:30:00.000Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_note_input_missing_fields() {
        let input: NoteInput = serde_json::from_str(r#"{"title":"only"}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("only"));
        assert!(input.content.is_none());

        let input: NoteInput = serde_json::from_str("{}").unwrap();
        assert!(input.title.is_none());
    }

    #[test]
    fn test_note_input_rejects_non_string_title() {
        let result = serde_json::from_str::<NoteInput>(r#"{"title":42,"content":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_api_info_lists_all_endpoints() {
        let info = ApiInfo::notekeeper();
        assert_eq!(info.endpoints.len(), 5);
        assert_eq!(info.endpoints["deleteNote"], "DELETE /api/notes/:id");
    }
}
