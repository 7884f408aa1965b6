use std::collections::BTreeSet;
use std::sync::Arc;

use uuid::Uuid;

use crate::errors::IntakeError;
use crate::notify::{Notifier, Severity};
use crate::storage::RecordStore;
use crate::wizard::step::{Accumulator, StepId, StepInfo, StepPayload};

/// Outcome of a navigation or save operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    /// The current step index changed.
    Moved,
    /// Nothing changed (back at the first step, jump to the current index).
    Stayed,
    /// Advancing from the last step: the wizard session is over.
    Completed,
}

/// Sequences the intake steps for one client and accumulates saved slices.
///
/// The controller never validates step content; each panel gates its own
/// save. Navigation is deliberately free-form: any step is reachable at any
/// time, completion of earlier steps is not required.
pub struct WizardController {
    client_id: Uuid,
    steps: Vec<StepInfo>,
    index: usize,
    accumulator: Accumulator,
    completed: BTreeSet<StepId>,
    store: Arc<dyn RecordStore>,
    notifier: Arc<dyn Notifier>,
}

impl WizardController {
    /// Builds a wizard over the six standard intake steps.
    pub fn new(client_id: Uuid, store: Arc<dyn RecordStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_steps(client_id, StepInfo::default_steps(), store, notifier)
    }

    pub fn with_steps(
        client_id: Uuid,
        steps: Vec<StepInfo>,
        store: Arc<dyn RecordStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        debug_assert!(!steps.is_empty());
        Self {
            client_id,
            steps,
            index: 0,
            accumulator: Accumulator::default(),
            completed: BTreeSet::new(),
            store,
            notifier,
        }
    }

    pub fn client_id(&self) -> Uuid {
        self.client_id
    }

    pub fn steps(&self) -> &[StepInfo] {
        &self.steps
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn current_step(&self) -> &StepInfo {
        &self.steps[self.index]
    }

    /// Progress as `(current position, total)`, one-based for display.
    pub fn progress(&self) -> (usize, usize) {
        (self.index + 1, self.steps.len())
    }

    pub fn progress_label(&self) -> String {
        let (position, total) = self.progress();
        format!("Step {} of {}", position, total)
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    /// The previously saved slice for a step, used for resume semantics.
    pub fn saved_payload(&self, id: StepId) -> Option<StepPayload> {
        self.accumulator.get(id)
    }

    pub fn completed_steps(&self) -> &BTreeSet<StepId> {
        &self.completed
    }

    pub fn is_completed(&self, id: StepId) -> bool {
        self.completed.contains(&id)
    }

    /// Advances to the next step, or signals completion from the last one.
    ///
    /// The index never moves past `steps.len() - 1`; completion is detected
    /// by equality, not by overrunning the list.
    pub fn go_next(&mut self) -> WizardEvent {
        if self.index == self.steps.len() - 1 {
            tracing::info!(client = %self.client_id, "intake wizard completed");
            WizardEvent::Completed
        } else {
            self.index += 1;
            WizardEvent::Moved
        }
    }

    /// Steps back, or stays put at the first step.
    pub fn go_back(&mut self) -> WizardEvent {
        if self.index > 0 {
            self.index -= 1;
            WizardEvent::Moved
        } else {
            WizardEvent::Stayed
        }
    }

    /// Jumps straight to a step by index (sidebar navigation).
    ///
    /// Only the bounds are checked; earlier steps do not have to be saved.
    pub fn go_to_step(&mut self, index: usize) -> Result<WizardEvent, IntakeError> {
        if index >= self.steps.len() {
            return Err(IntakeError::StepOutOfRange {
                index,
                total: self.steps.len(),
            });
        }
        if index == self.index {
            return Ok(WizardEvent::Stayed);
        }
        self.index = index;
        Ok(WizardEvent::Moved)
    }

    /// Persists a step's slice, records it in the accumulator, and advances.
    ///
    /// Persistence is acknowledged before anything else happens: when the
    /// store rejects the slice the wizard stays on the current step, the
    /// accumulator and completed set are untouched, and the failure is
    /// surfaced through the notifier as well as the returned error.
    pub fn save_step(&mut self, payload: StepPayload) -> Result<WizardEvent, IntakeError> {
        let step = payload.step_id();
        if let Err(err) = self.store.save_slice(self.client_id, &payload) {
            tracing::warn!(client = %self.client_id, %step, error = %err, "step save rejected");
            self.notifier.notify(
                "Save failed",
                &format!("Could not save the {} step: {}", step, err),
                Severity::Error,
            );
            return Err(err);
        }

        let title = self
            .steps
            .iter()
            .find(|info| info.id == step)
            .map(|info| info.title)
            .unwrap_or("Step");
        self.accumulator.insert(payload);
        self.completed.insert(step);
        tracing::debug!(client = %self.client_id, %step, "step slice saved");
        self.notifier.notify(
            &format!("{} saved", title),
            "Your changes have been recorded.",
            Severity::Success,
        );
        Ok(self.go_next())
    }

    /// Advances without saving. The accumulator and completed set are left
    /// exactly as they were; anything typed but not saved is discarded.
    pub fn skip_step(&mut self) -> WizardEvent {
        let title = self.current_step().title;
        self.notifier.notify(
            &format!("{} skipped", title),
            "You can come back to this step at any time.",
            Severity::Info,
        );
        self.go_next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{Goal, GoalsPayload, HealthPayload};
    use crate::notify::NullNotifier;
    use crate::storage::MemoryStore;

    fn controller() -> WizardController {
        WizardController::new(
            Uuid::new_v4(),
            Arc::new(MemoryStore::new()),
            Arc::new(NullNotifier),
        )
    }

    #[test]
    fn back_at_first_step_is_a_no_op() {
        let mut wizard = controller();
        assert_eq!(wizard.go_back(), WizardEvent::Stayed);
        assert_eq!(wizard.current_index(), 0);
    }

    #[test]
    fn next_walks_all_steps_then_completes() {
        let mut wizard = controller();
        for expected in 1..6 {
            assert_eq!(wizard.go_next(), WizardEvent::Moved);
            assert_eq!(wizard.current_index(), expected);
        }
        assert_eq!(wizard.go_next(), WizardEvent::Completed);
        assert_eq!(wizard.current_index(), 5);
    }

    #[test]
    fn jump_is_idempotent() {
        let mut wizard = controller();
        assert_eq!(wizard.go_to_step(3).unwrap(), WizardEvent::Moved);
        let before = wizard.accumulator().clone();
        assert_eq!(wizard.go_to_step(3).unwrap(), WizardEvent::Stayed);
        assert_eq!(wizard.current_index(), 3);
        assert_eq!(wizard.accumulator(), &before);
    }

    #[test]
    fn jump_out_of_range_is_rejected() {
        let mut wizard = controller();
        let err = wizard.go_to_step(6).unwrap_err();
        assert!(matches!(
            err,
            IntakeError::StepOutOfRange { index: 6, total: 6 }
        ));
        assert_eq!(wizard.current_index(), 0);
    }

    #[test]
    fn save_records_completion_and_advances() {
        let mut wizard = controller();
        let payload = StepPayload::Goals(GoalsPayload {
            goals: vec![Goal::new("t", "d", "c")],
        });
        let event = wizard.save_step(payload.clone()).unwrap();
        assert_eq!(event, WizardEvent::Moved);
        assert_eq!(wizard.current_index(), 1);
        assert!(wizard.is_completed(StepId::Goals));
        assert_eq!(wizard.saved_payload(StepId::Goals), Some(payload));
    }

    #[test]
    fn skip_leaves_state_untouched() {
        let mut wizard = controller();
        assert_eq!(wizard.go_to_step(1).unwrap(), WizardEvent::Moved);
        assert_eq!(wizard.skip_step(), WizardEvent::Moved);
        assert!(!wizard.is_completed(StepId::Documents));
        assert!(wizard.saved_payload(StepId::Documents).is_none());
    }

    #[test]
    fn failed_save_gates_advancement() {
        let store = Arc::new(MemoryStore::new());
        store.set_failing(true);
        let mut wizard =
            WizardController::new(Uuid::new_v4(), store.clone(), Arc::new(NullNotifier));
        let result = wizard.save_step(StepPayload::Health(HealthPayload::default()));
        assert!(result.is_err());
        assert_eq!(wizard.current_index(), 0);
        assert!(!wizard.is_completed(StepId::Health));
        assert!(wizard.accumulator().is_empty());

        store.set_failing(false);
        let event = wizard
            .save_step(StepPayload::Health(HealthPayload::default()))
            .unwrap();
        assert_eq!(event, WizardEvent::Moved);
    }

    #[test]
    fn completing_from_last_step_after_saves() {
        let mut wizard = controller();
        wizard.go_to_step(5).unwrap();
        let event = wizard
            .save_step(StepPayload::Cultural(Default::default()))
            .unwrap();
        assert_eq!(event, WizardEvent::Completed);
        assert!(wizard.is_completed(StepId::Cultural));
    }
}
