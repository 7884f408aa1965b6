use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A diagnosed condition recorded during intake.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicalCondition {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MedicalCondition {
    pub fn new(name: impl Into<String>, notes: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            notes,
        }
    }
}

/// A current medication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Medication {
    pub id: Uuid,
    pub name: String,
    pub dosage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

impl Medication {
    pub fn new(name: impl Into<String>, dosage: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            dosage: dosage.into(),
            frequency: None,
        }
    }
}

/// Mobility aids a client may rely on.
///
/// `None` is mutually exclusive with every other value; the exclusivity rule
/// itself lives in the health panel, which owns the selected set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MobilityAid {
    None,
    Wheelchair,
    Walker,
    Cane,
    Crutches,
    MobilityScooter,
    Other,
}

impl MobilityAid {
    pub const ALL: [MobilityAid; 7] = [
        MobilityAid::None,
        MobilityAid::Wheelchair,
        MobilityAid::Walker,
        MobilityAid::Cane,
        MobilityAid::Crutches,
        MobilityAid::MobilityScooter,
        MobilityAid::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MobilityAid::None => "None",
            MobilityAid::Wheelchair => "Wheelchair",
            MobilityAid::Walker => "Walker",
            MobilityAid::Cane => "Cane",
            MobilityAid::Crutches => "Crutches",
            MobilityAid::MobilityScooter => "Mobility scooter",
            MobilityAid::Other => "Other",
        }
    }
}

/// Slice persisted by the health step. Every field is optional; the panel
/// applies no gating before save.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthPayload {
    pub conditions: Vec<MedicalCondition>,
    pub medications: Vec<Medication>,
    pub mobility_aids: Vec<MobilityAid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
