//! Step panels: one per intake step.
//!
//! A panel owns the editable state for its slice of the client record. It is
//! created from the accumulator's slot for that step (resume semantics),
//! gates its list-item "add" flows and its primary action behind boolean
//! predicates, and packages its entire state as a tagged payload on save.
//! Invalid states are unreachable rather than reported: a gated action is
//! simply unavailable until its required fields are filled.

mod budgets;
mod consent;
mod cultural;
mod documents;
mod goals;
mod health;

pub use budgets::{BudgetDraft, BudgetsPanel};
pub use consent::{ConsentPanel, GuardianDraft};
pub use cultural::{CulturalPanel, PreferenceDraft};
pub use documents::{DocumentDraft, DocumentsPanel, SelectedFile};
pub use goals::{GoalDraft, GoalsPanel};
pub use health::{ConditionDraft, HealthPanel, MedicationDraft};

use crate::wizard::{StepId, StepPayload};

/// Common contract every step panel fulfils for the wizard host.
pub trait StepPanel {
    fn step_id(&self) -> StepId;

    /// Whether the primary "Save & Continue" action is currently enabled.
    fn can_continue(&self) -> bool;

    /// Packages the panel's entire current state as this step's payload.
    fn payload(&self) -> StepPayload;
}
