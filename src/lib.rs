#![doc(test(attr(deny(warnings))))]

//! Intake Core offers the multi-step client intake wizard, step panels, and
//! record persistence that power care-management onboarding workflows and
//! CLIs.

pub mod cli;
pub mod config;
pub mod errors;
pub mod intake;
pub mod notify;
pub mod panels;
pub mod storage;
pub mod utils;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Intake Core tracing initialized.");
    });
}
