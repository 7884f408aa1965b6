use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A document attached to the client record during intake.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub id: Uuid,
    pub name: String,
    pub kind: DocumentKind,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
    pub status: DocumentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Document {
    pub fn new(name: impl Into<String>, kind: DocumentKind, size_bytes: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            size_bytes,
            uploaded_at: Utc::now(),
            status: DocumentStatus::Uploaded,
            notes: None,
        }
    }
}

/// Supported document classifications.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DocumentKind {
    Plan,
    MedicalReport,
    Assessment,
    ConsentForm,
    Identification,
    Other,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 6] = [
        DocumentKind::Plan,
        DocumentKind::MedicalReport,
        DocumentKind::Assessment,
        DocumentKind::ConsentForm,
        DocumentKind::Identification,
        DocumentKind::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Plan => "Plan",
            DocumentKind::MedicalReport => "Medical report",
            DocumentKind::Assessment => "Assessment",
            DocumentKind::ConsentForm => "Consent form",
            DocumentKind::Identification => "Identification",
            DocumentKind::Other => "Other",
        }
    }
}

/// Processing states for an attached document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DocumentStatus {
    Uploaded,
    Verified,
    Rejected,
}

/// Formats a byte count for display with two decimal places.
///
/// Display only. No size limit is enforced when attaching a document.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

/// Slice persisted by the documents step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentsPayload {
    pub documents: Vec<Document>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_each_unit() {
        assert_eq!(format_file_size(512), "512.00 B");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.00 GB");
    }

    #[test]
    fn formats_fractional_sizes() {
        assert_eq!(format_file_size(1536), "1.50 KB");
    }

    #[test]
    fn huge_sizes_stay_in_gigabytes() {
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048.00 GB");
    }

    #[test]
    fn new_document_is_uploaded() {
        let doc = Document::new("plan.pdf", DocumentKind::Plan, 1024);
        assert_eq!(doc.status, DocumentStatus::Uploaded);
        assert!(doc.notes.is_none());
    }
}
