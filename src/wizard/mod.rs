//! Multi-step intake wizard: step identity, the session accumulator, and the
//! controller that sequences the six panels.

mod controller;
mod step;

pub use controller::{WizardController, WizardEvent};
pub use step::{Accumulator, StepId, StepInfo, StepPayload};
