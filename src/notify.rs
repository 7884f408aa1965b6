//! Transient notification sink used by the wizard for user feedback.

use crate::cli::output;

/// How prominently a notification should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Side-effecting sink for transient, non-blocking messages.
///
/// The wizard only ever pushes into this; it never queries it back.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, description: &str, severity: Severity);
}

/// Routes notifications through the shared CLI output helpers.
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&self, title: &str, description: &str, severity: Severity) {
        let message = format!("{}: {}", title, description);
        match severity {
            Severity::Info => output::info(message),
            Severity::Success => output::success(message),
            Severity::Warning => output::warning(message),
            Severity::Error => output::error(message),
        }
    }
}

/// Discards every notification. Useful in tests and non-interactive runs.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _title: &str, _description: &str, _severity: Severity) {}
}
