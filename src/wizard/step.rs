use std::fmt;

use serde::{Deserialize, Serialize};

use crate::intake::{
    BudgetsPayload, ConsentPayload, CulturalPayload, DocumentsPayload, GoalsPayload, HealthPayload,
};

/// Stable identifier for one wizard step.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    Goals,
    Documents,
    Budgets,
    Health,
    Consent,
    Cultural,
}

impl StepId {
    /// Wizard step order, fixed for the session.
    pub const ALL: [StepId; 6] = [
        StepId::Goals,
        StepId::Documents,
        StepId::Budgets,
        StepId::Health,
        StepId::Consent,
        StepId::Cultural,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            StepId::Goals => "goals",
            StepId::Documents => "documents",
            StepId::Budgets => "budgets",
            StepId::Health => "health",
            StepId::Consent => "consent",
            StepId::Cultural => "cultural",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Static display metadata for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    pub id: StepId,
    pub title: &'static str,
    pub description: &'static str,
}

impl StepInfo {
    /// The six intake steps in presentation order.
    pub fn default_steps() -> Vec<StepInfo> {
        vec![
            StepInfo {
                id: StepId::Goals,
                title: "Goals",
                description: "Support goals the client wants to work towards",
            },
            StepInfo {
                id: StepId::Documents,
                title: "Documents",
                description: "Plans, reports, and identification on file",
            },
            StepInfo {
                id: StepId::Budgets,
                title: "Budgets",
                description: "Funding categories and allocated amounts",
            },
            StepInfo {
                id: StepId::Health,
                title: "Health",
                description: "Conditions, medications, and mobility aids",
            },
            StepInfo {
                id: StepId::Consent,
                title: "Consent",
                description: "Privacy and information-sharing declarations",
            },
            StepInfo {
                id: StepId::Cultural,
                title: "Cultural",
                description: "Languages and cultural preferences",
            },
        ]
    }
}

/// A saved step slice, tagged by the step that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum StepPayload {
    Goals(GoalsPayload),
    Documents(DocumentsPayload),
    Budgets(BudgetsPayload),
    Health(HealthPayload),
    Consent(ConsentPayload),
    Cultural(CulturalPayload),
}

impl StepPayload {
    pub fn step_id(&self) -> StepId {
        match self {
            StepPayload::Goals(_) => StepId::Goals,
            StepPayload::Documents(_) => StepId::Documents,
            StepPayload::Budgets(_) => StepId::Budgets,
            StepPayload::Health(_) => StepId::Health,
            StepPayload::Consent(_) => StepId::Consent,
            StepPayload::Cultural(_) => StepId::Cultural,
        }
    }
}

/// Session-scoped accumulation of saved step slices.
///
/// One statically typed slot per step. Saving a step replaces its own slot
/// and never disturbs another; nothing here ever removes a slice, so later
/// steps can read what earlier steps saved.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Accumulator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<GoalsPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<DocumentsPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budgets: Option<BudgetsPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<HealthPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent: Option<ConsentPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural: Option<CulturalPayload>,
}

impl Accumulator {
    /// Stores a slice in the slot matching its step id.
    pub fn insert(&mut self, payload: StepPayload) {
        match payload {
            StepPayload::Goals(slice) => self.goals = Some(slice),
            StepPayload::Documents(slice) => self.documents = Some(slice),
            StepPayload::Budgets(slice) => self.budgets = Some(slice),
            StepPayload::Health(slice) => self.health = Some(slice),
            StepPayload::Consent(slice) => self.consent = Some(slice),
            StepPayload::Cultural(slice) => self.cultural = Some(slice),
        }
    }

    /// Retrieves a step's saved slice, if any, as a tagged payload.
    pub fn get(&self, id: StepId) -> Option<StepPayload> {
        match id {
            StepId::Goals => self.goals.clone().map(StepPayload::Goals),
            StepId::Documents => self.documents.clone().map(StepPayload::Documents),
            StepId::Budgets => self.budgets.clone().map(StepPayload::Budgets),
            StepId::Health => self.health.clone().map(StepPayload::Health),
            StepId::Consent => self.consent.clone().map(StepPayload::Consent),
            StepId::Cultural => self.cultural.clone().map(StepPayload::Cultural),
        }
    }

    pub fn contains(&self, id: StepId) -> bool {
        self.get(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        StepId::ALL.iter().all(|id| !self.contains(*id))
    }
}
