//! End-to-end wizard flows against the in-memory store.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use intake_core::intake::{BudgetsPayload, DocumentsPayload, GoalsPayload};
use intake_core::notify::{Notifier, Severity};
use intake_core::panels::{
    BudgetsPanel, ConsentPanel, CulturalPanel, DocumentsPanel, GoalsPanel, HealthPanel,
    SelectedFile, StepPanel,
};
use intake_core::intake::DocumentKind;
use intake_core::storage::{MemoryStore, RecordStore};
use intake_core::wizard::{StepId, StepPayload, WizardController, WizardEvent};

/// Captures notifications so assertions can inspect what the user saw.
#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<(String, Severity)>>,
}

impl RecordingNotifier {
    fn titles_with(&self, severity: Severity) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, s)| *s == severity)
            .map(|(title, _)| title.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, _description: &str, severity: Severity) {
        self.messages
            .lock()
            .unwrap()
            .push((title.to_string(), severity));
    }
}

fn wizard_with(
    store: Arc<MemoryStore>,
    notifier: Arc<RecordingNotifier>,
) -> WizardController {
    WizardController::new(Uuid::new_v4(), store, notifier)
}

#[test]
fn goals_step_from_empty_to_saved() {
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let mut wizard = wizard_with(store.clone(), notifier.clone());

    let mut panel = GoalsPanel::new(None);
    assert!(!panel.can_add());
    assert!(!panel.can_continue());

    panel.draft.title = "Improve mobility".into();
    panel.draft.description = "Walk 10 min daily".into();
    panel.draft.category = "Health & Wellbeing".into();
    assert!(panel.can_add());
    panel.add_goal().unwrap();
    assert!(panel.can_continue());

    let event = wizard.save_step(panel.payload()).unwrap();
    assert_eq!(event, WizardEvent::Moved);
    assert_eq!(wizard.current_index(), 1);
    assert!(wizard.is_completed(StepId::Goals));
    assert_eq!(notifier.titles_with(Severity::Success), vec!["Goals saved"]);
}

#[test]
fn resume_shows_the_saved_slice_unchanged() {
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let mut wizard = wizard_with(store, notifier);

    let mut panel = GoalsPanel::new(None);
    panel.draft.title = "t".into();
    panel.draft.description = "d".into();
    panel.draft.category = "c".into();
    panel.add_goal().unwrap();
    let payload = panel.payload();

    wizard.save_step(payload.clone()).unwrap();
    wizard.go_back();

    let restored = wizard.saved_payload(StepId::Goals);
    assert_eq!(restored, Some(payload));

    let StepPayload::Goals(slice) = restored.unwrap() else {
        panic!("wrong payload variant");
    };
    let reopened = GoalsPanel::new(Some(&slice));
    assert_eq!(reopened.goals().len(), 1);
    assert_eq!(reopened.goals()[0].title, "t");
}

#[test]
fn skipping_documents_leaves_no_trace() {
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let mut wizard = wizard_with(store, notifier.clone());

    wizard.go_to_step(1).unwrap();
    assert_eq!(wizard.current_step().id, StepId::Documents);
    wizard.skip_step();

    assert!(!wizard.is_completed(StepId::Documents));
    assert!(wizard.saved_payload(StepId::Documents).is_none());
    assert_eq!(
        notifier.titles_with(Severity::Info),
        vec!["Documents skipped"]
    );
}

#[test]
fn full_run_through_all_six_steps() {
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let client = Uuid::new_v4();
    let mut wizard = WizardController::new(client, store.clone(), notifier);

    let mut goals = GoalsPanel::new(None);
    goals.draft.title = "t".into();
    goals.draft.description = "d".into();
    goals.draft.category = "c".into();
    goals.add_goal().unwrap();
    assert_eq!(wizard.save_step(goals.payload()).unwrap(), WizardEvent::Moved);

    let mut documents = DocumentsPanel::new(None);
    documents.draft.file = Some(SelectedFile {
        name: "plan.pdf".into(),
        size_bytes: 2048,
    });
    documents.draft.kind = Some(DocumentKind::Plan);
    documents.upload().unwrap();
    wizard.save_step(documents.payload()).unwrap();

    let mut budgets = BudgetsPanel::new(None);
    budgets.draft.name = "Core Supports".into();
    budgets.draft.allocated = Some(5000.0);
    budgets.add_category().unwrap();
    wizard.save_step(budgets.payload()).unwrap();

    wizard.save_step(HealthPanel::new(None).payload()).unwrap();

    let mut consent = ConsentPanel::new(None);
    let required: Vec<Uuid> = consent
        .items()
        .iter()
        .filter(|item| item.required)
        .map(|item| item.id)
        .collect();
    for id in required {
        consent.set_consent(id, true);
    }
    assert!(consent.can_continue());
    wizard.save_step(consent.payload()).unwrap();

    let event = wizard.save_step(CulturalPanel::new(None).payload()).unwrap();
    assert_eq!(event, WizardEvent::Completed);
    assert_eq!(wizard.completed_steps().len(), 6);

    let record = store.load_record(client).unwrap();
    for id in StepId::ALL {
        assert!(record.slices.contains(id), "missing slice for {}", id);
    }
}

#[test]
fn failed_save_notifies_and_stays() {
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    store.set_failing(true);
    let mut wizard = wizard_with(store.clone(), notifier.clone());

    let result = wizard.save_step(StepPayload::Documents(DocumentsPayload::default()));
    assert!(result.is_err());
    assert_eq!(wizard.current_index(), 0);
    assert!(wizard.accumulator().is_empty());
    assert_eq!(notifier.titles_with(Severity::Error), vec!["Save failed"]);
    assert_eq!(store.record_count(), 0);
}

#[test]
fn navigation_walks_and_completes_exactly_once() {
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let mut wizard = wizard_with(store, notifier);

    assert_eq!(wizard.go_back(), WizardEvent::Stayed);
    assert_eq!(wizard.current_index(), 0);

    let mut completions = 0;
    for _ in 0..6 {
        if wizard.go_next() == WizardEvent::Completed {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);
    assert_eq!(wizard.current_index(), 5);
}

#[test]
fn budgets_edit_keeps_spent_untouched() {
    let mut panel = BudgetsPanel::new(None);
    panel.draft.name = "Core Supports".into();
    panel.draft.allocated = Some(5000.0);
    let id = panel.add_category().unwrap();

    assert_eq!(panel.categories()[0].remaining, 5000.0);
    panel.set_allocated(id, 6000.0);
    assert_eq!(panel.categories()[0].remaining, 6000.0);
    assert_eq!(panel.categories()[0].spent, 0.0);

    let StepPayload::Budgets(BudgetsPayload { categories }) = panel.payload() else {
        panic!("wrong payload variant");
    };
    assert_eq!(categories[0].allocated, 6000.0);
}

#[test]
fn saved_goals_are_readable_by_a_later_step() {
    // Budgets may read Goals: the accumulator keeps earlier slices available.
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let mut wizard = wizard_with(store, notifier);

    let mut goals = GoalsPanel::new(None);
    goals.draft.title = "t".into();
    goals.draft.description = "d".into();
    goals.draft.category = "c".into();
    goals.add_goal().unwrap();
    wizard.save_step(goals.payload()).unwrap();

    wizard.go_to_step(2).unwrap();
    let Some(StepPayload::Goals(GoalsPayload { goals })) = wizard.saved_payload(StepId::Goals)
    else {
        panic!("goals slice should still be available");
    };
    assert_eq!(goals.len(), 1);
}
