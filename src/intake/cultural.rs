use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A cultural or communication preference recorded during intake.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CulturalPreference {
    pub id: Uuid,
    pub area: String,
    pub detail: String,
}

impl CulturalPreference {
    pub fn new(area: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            area: area.into(),
            detail: detail.into(),
        }
    }
}

/// Slice persisted by the cultural step.
///
/// `spoken_languages` is a multi-select independent of the single
/// `primary_language` field; the same language may legitimately appear in
/// both.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CulturalPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_language: Option<String>,
    pub spoken_languages: Vec<String>,
    pub interpreter_required: bool,
    pub preferences: Vec<CulturalPreference>,
}
