use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One consent declaration presented during intake.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsentItem {
    pub id: Uuid,
    pub label: String,
    pub required: bool,
    pub consented: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consented_at: Option<DateTime<Utc>>,
}

impl ConsentItem {
    pub fn new(label: impl Into<String>, required: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            required,
            consented: false,
            consented_at: None,
        }
    }

    /// Grants consent, stamping the completion time.
    pub fn grant(&mut self) {
        self.consented = true;
        self.consented_at = Some(Utc::now());
    }

    /// Withdraws consent and clears the stamp.
    pub fn revoke(&mut self) {
        self.consented = false;
        self.consented_at = None;
    }
}

/// Guardian or nominee details, collected only when the client has one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Guardian {
    pub name: String,
    pub relationship: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Slice persisted by the consent step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsentPayload {
    pub items: Vec<ConsentItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian: Option<Guardian>,
}

/// The standard declarations shown to every new client.
pub fn standard_items() -> Vec<ConsentItem> {
    vec![
        ConsentItem::new("Collection and storage of personal information", true),
        ConsentItem::new("Sharing information with my support coordinators", true),
        ConsentItem::new("Contacting my nominated emergency contacts", true),
        ConsentItem::new("Participation in service quality surveys", false),
        ConsentItem::new("Use of anonymised data for service improvement", false),
    ]
}
