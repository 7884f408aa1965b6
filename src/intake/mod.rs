//! Domain entities collected by the client intake wizard.
//!
//! Each submodule covers one step's slice of the client record: plain value
//! records with generated identifiers and a serde representation. Referential
//! integrity between slices is not enforced here; the wizard accumulates and
//! persists each slice independently.

pub mod budgets;
pub mod consent;
pub mod cultural;
pub mod documents;
pub mod goals;
pub mod health;

pub use budgets::{BudgetCategory, BudgetsPayload};
pub use consent::{ConsentItem, ConsentPayload, Guardian};
pub use cultural::{CulturalPayload, CulturalPreference};
pub use documents::{format_file_size, Document, DocumentKind, DocumentStatus, DocumentsPayload};
pub use goals::{Goal, GoalPriority, GoalStatus, GoalsPayload};
pub use health::{HealthPayload, MedicalCondition, Medication, MobilityAid};
