//! Interactive drivers for the six step panels.
//!
//! Each driver owns one panel for the duration of a visit to its step: it
//! renders the slice's current state, exposes the add/remove flows, and maps
//! menu selections onto a [`PanelOutcome`] for the shell to hand to the
//! wizard controller. Gated actions are simply absent from the menu until
//! their predicate holds.

use dialoguer::theme::ColorfulTheme;

use crate::cli::{io, output};
use crate::errors::IntakeError;
use crate::intake::{format_file_size, DocumentKind, GoalPriority, MobilityAid};
use crate::panels::{
    BudgetsPanel, ConsentPanel, CulturalPanel, DocumentsPanel, GoalsPanel, HealthPanel,
    SelectedFile, StepPanel,
};
use crate::wizard::{StepId, StepPayload};

/// What the user chose to do with the current step.
pub enum PanelOutcome {
    Save(StepPayload),
    Skip,
    Back,
    Jump,
    Quit,
}

/// Runs the interactive driver for one step, resuming from the saved slice.
pub fn run_panel(
    theme: &ColorfulTheme,
    step: StepId,
    prior: Option<StepPayload>,
) -> Result<PanelOutcome, IntakeError> {
    match step {
        StepId::Goals => {
            let prior = match prior {
                Some(StepPayload::Goals(p)) => Some(p),
                _ => None,
            };
            run_goals(theme, GoalsPanel::new(prior.as_ref()))
        }
        StepId::Documents => {
            let prior = match prior {
                Some(StepPayload::Documents(p)) => Some(p),
                _ => None,
            };
            run_documents(theme, DocumentsPanel::new(prior.as_ref()))
        }
        StepId::Budgets => {
            let prior = match prior {
                Some(StepPayload::Budgets(p)) => Some(p),
                _ => None,
            };
            run_budgets(theme, BudgetsPanel::new(prior.as_ref()))
        }
        StepId::Health => {
            let prior = match prior {
                Some(StepPayload::Health(p)) => Some(p),
                _ => None,
            };
            run_health(theme, HealthPanel::new(prior.as_ref()))
        }
        StepId::Consent => {
            let prior = match prior {
                Some(StepPayload::Consent(p)) => Some(p),
                _ => None,
            };
            run_consent(theme, ConsentPanel::new(prior.as_ref()))
        }
        StepId::Cultural => {
            let prior = match prior {
                Some(StepPayload::Cultural(p)) => Some(p),
                _ => None,
            };
            run_cultural(theme, CulturalPanel::new(prior.as_ref()))
        }
    }
}

enum Choice {
    Local(usize),
    Save,
    Skip,
    Back,
    Jump,
    Quit,
}

/// Builds the shared tail of every step menu and runs the selection.
fn step_menu(
    theme: &ColorfulTheme,
    local_actions: &[&str],
    can_save: bool,
) -> Result<Choice, IntakeError> {
    let mut labels: Vec<String> = local_actions.iter().map(|s| s.to_string()).collect();
    let mut choices: Vec<Choice> = (0..local_actions.len()).map(Choice::Local).collect();
    if can_save {
        labels.push("Save & continue".into());
        choices.push(Choice::Save);
    }
    labels.push("Skip this step".into());
    choices.push(Choice::Skip);
    labels.push("Previous step".into());
    choices.push(Choice::Back);
    labels.push("Go to step…".into());
    choices.push(Choice::Jump);
    labels.push("Leave the wizard".into());
    choices.push(Choice::Quit);

    let index = io::select_index(theme, "What next?", &labels, 0)?;
    Ok(choices.swap_remove(index))
}

fn run_goals(theme: &ColorfulTheme, mut panel: GoalsPanel) -> Result<PanelOutcome, IntakeError> {
    loop {
        if panel.goals().is_empty() {
            output::detail("No goals recorded yet. At least one is needed to save this step.");
        }
        for goal in panel.goals() {
            output::detail(format!(
                "{} [{} / {}] {}",
                goal.title,
                goal.category,
                goal.priority.label(),
                goal.status.label()
            ));
        }

        let mut actions = vec!["Add goal"];
        if !panel.goals().is_empty() {
            actions.push("Remove goal");
        }
        match step_menu(theme, &actions, panel.can_continue())? {
            Choice::Local(0) => {
                panel.draft.title = io::prompt_text(theme, "Goal title")?;
                panel.draft.description = io::prompt_text(theme, "Description")?;
                panel.draft.category = io::prompt_text(theme, "Category")?;
                let priorities: Vec<String> = [GoalPriority::Low, GoalPriority::Medium, GoalPriority::High]
                    .iter()
                    .map(|p| p.label().to_string())
                    .collect();
                let picked = io::select_index(theme, "Priority", &priorities, 1)?;
                panel.draft.priority = [GoalPriority::Low, GoalPriority::Medium, GoalPriority::High][picked];
                panel.draft.target_date = io::prompt_optional_date(theme, "Target date")?;
                if panel.add_goal().is_none() {
                    output::warning("Title, description, and category are all required.");
                }
            }
            Choice::Local(_) => {
                let labels: Vec<String> =
                    panel.goals().iter().map(|g| g.title.clone()).collect();
                let picked = io::select_index(theme, "Remove which goal?", &labels, 0)?;
                let id = panel.goals()[picked].id;
                panel.remove_goal(id);
            }
            Choice::Save => return Ok(PanelOutcome::Save(panel.payload())),
            Choice::Skip => return Ok(PanelOutcome::Skip),
            Choice::Back => return Ok(PanelOutcome::Back),
            Choice::Jump => return Ok(PanelOutcome::Jump),
            Choice::Quit => return Ok(PanelOutcome::Quit),
        }
    }
}

fn run_documents(
    theme: &ColorfulTheme,
    mut panel: DocumentsPanel,
) -> Result<PanelOutcome, IntakeError> {
    loop {
        for doc in panel.documents() {
            output::detail(format!(
                "{} ({}, {})",
                doc.name,
                doc.kind.label(),
                format_file_size(doc.size_bytes)
            ));
        }

        let mut actions = vec!["Attach document"];
        if !panel.documents().is_empty() {
            actions.push("Remove document");
        }
        match step_menu(theme, &actions, panel.can_continue())? {
            Choice::Local(0) => {
                let name = io::prompt_text(theme, "File name")?;
                let size_bytes = io::prompt_bytes(theme, "File size in bytes")?;
                let kinds: Vec<String> = DocumentKind::ALL
                    .iter()
                    .map(|k| k.label().to_string())
                    .collect();
                let picked = io::select_index(theme, "Document type", &kinds, 0)?;
                panel.draft.file = Some(SelectedFile { name, size_bytes });
                panel.draft.kind = Some(DocumentKind::ALL[picked]);
                panel.draft.notes = io::prompt_optional_text(theme, "Notes")?.unwrap_or_default();
                panel.upload();
            }
            Choice::Local(_) => {
                let labels: Vec<String> =
                    panel.documents().iter().map(|d| d.name.clone()).collect();
                let picked = io::select_index(theme, "Remove which document?", &labels, 0)?;
                let id = panel.documents()[picked].id;
                panel.remove_document(id);
            }
            Choice::Save => return Ok(PanelOutcome::Save(panel.payload())),
            Choice::Skip => return Ok(PanelOutcome::Skip),
            Choice::Back => return Ok(PanelOutcome::Back),
            Choice::Jump => return Ok(PanelOutcome::Jump),
            Choice::Quit => return Ok(PanelOutcome::Quit),
        }
    }
}

fn run_budgets(
    theme: &ColorfulTheme,
    mut panel: BudgetsPanel,
) -> Result<PanelOutcome, IntakeError> {
    loop {
        for category in panel.categories() {
            output::detail(format!(
                "{}: allocated {:.2}, spent {:.2}, remaining {:.2}",
                category.name, category.allocated, category.spent, category.remaining
            ));
        }
        if !panel.categories().is_empty() {
            output::detail(format!("Total allocated: {:.2}", panel.total_allocated()));
        }

        let mut actions = vec!["Add category"];
        if !panel.categories().is_empty() {
            actions.push("Edit allocation");
            actions.push("Remove category");
        }
        match step_menu(theme, &actions, panel.can_continue())? {
            Choice::Local(0) => {
                panel.draft.name = io::prompt_text(theme, "Category name")?;
                panel.draft.allocated = Some(io::prompt_amount(theme, "Allocated amount")?);
                panel.add_category();
            }
            Choice::Local(1) => {
                let labels: Vec<String> =
                    panel.categories().iter().map(|c| c.name.clone()).collect();
                let picked = io::select_index(theme, "Which category?", &labels, 0)?;
                let id = panel.categories()[picked].id;
                let amount = io::prompt_amount(theme, "New allocated amount")?;
                panel.set_allocated(id, amount);
            }
            Choice::Local(_) => {
                let labels: Vec<String> =
                    panel.categories().iter().map(|c| c.name.clone()).collect();
                let picked = io::select_index(theme, "Remove which category?", &labels, 0)?;
                let id = panel.categories()[picked].id;
                panel.remove_category(id);
            }
            Choice::Save => return Ok(PanelOutcome::Save(panel.payload())),
            Choice::Skip => return Ok(PanelOutcome::Skip),
            Choice::Back => return Ok(PanelOutcome::Back),
            Choice::Jump => return Ok(PanelOutcome::Jump),
            Choice::Quit => return Ok(PanelOutcome::Quit),
        }
    }
}

fn run_health(theme: &ColorfulTheme, mut panel: HealthPanel) -> Result<PanelOutcome, IntakeError> {
    loop {
        for condition in panel.conditions() {
            output::detail(format!("Condition: {}", condition.name));
        }
        for medication in panel.medications() {
            output::detail(format!(
                "Medication: {} ({})",
                medication.name, medication.dosage
            ));
        }
        if !panel.mobility_aids().is_empty() {
            let aids: Vec<&str> = panel.mobility_aids().iter().map(|a| a.label()).collect();
            output::detail(format!("Mobility aids: {}", aids.join(", ")));
        }

        let actions = vec![
            "Add condition",
            "Add medication",
            "Toggle mobility aid",
            "Set allergies",
            "Set notes",
            "Remove an entry",
        ];
        match step_menu(theme, &actions, panel.can_continue())? {
            Choice::Local(0) => {
                panel.condition_draft.name = io::prompt_text(theme, "Condition name")?;
                panel.condition_draft.notes =
                    io::prompt_optional_text(theme, "Notes")?.unwrap_or_default();
                panel.add_condition();
            }
            Choice::Local(1) => {
                panel.medication_draft.name = io::prompt_text(theme, "Medication name")?;
                panel.medication_draft.dosage = io::prompt_text(theme, "Dosage")?;
                panel.medication_draft.frequency =
                    io::prompt_optional_text(theme, "Frequency")?.unwrap_or_default();
                panel.add_medication();
            }
            Choice::Local(2) => {
                let labels: Vec<String> = MobilityAid::ALL
                    .iter()
                    .map(|aid| {
                        if panel.is_aid_selected(*aid) {
                            format!("[x] {}", aid.label())
                        } else {
                            format!("[ ] {}", aid.label())
                        }
                    })
                    .collect();
                let picked = io::select_index(theme, "Mobility aid", &labels, 0)?;
                panel.toggle_aid(MobilityAid::ALL[picked]);
            }
            Choice::Local(3) => {
                panel.allergies = io::prompt_optional_text(theme, "Allergies")?.unwrap_or_default();
            }
            Choice::Local(4) => {
                panel.notes = io::prompt_optional_text(theme, "Notes")?.unwrap_or_default();
            }
            Choice::Local(_) => {
                remove_health_entry(theme, &mut panel)?;
            }
            Choice::Save => return Ok(PanelOutcome::Save(panel.payload())),
            Choice::Skip => return Ok(PanelOutcome::Skip),
            Choice::Back => return Ok(PanelOutcome::Back),
            Choice::Jump => return Ok(PanelOutcome::Jump),
            Choice::Quit => return Ok(PanelOutcome::Quit),
        }
    }
}

fn remove_health_entry(
    theme: &ColorfulTheme,
    panel: &mut HealthPanel,
) -> Result<(), IntakeError> {
    let mut labels = Vec::new();
    let mut entries = Vec::new();
    for condition in panel.conditions() {
        labels.push(format!("Condition: {}", condition.name));
        entries.push((true, condition.id));
    }
    for medication in panel.medications() {
        labels.push(format!("Medication: {}", medication.name));
        entries.push((false, medication.id));
    }
    if labels.is_empty() {
        output::info("Nothing to remove.");
        return Ok(());
    }
    let picked = io::select_index(theme, "Remove which entry?", &labels, 0)?;
    let (is_condition, id) = entries[picked];
    if is_condition {
        panel.remove_condition(id);
    } else {
        panel.remove_medication(id);
    }
    Ok(())
}

fn run_consent(
    theme: &ColorfulTheme,
    mut panel: ConsentPanel,
) -> Result<PanelOutcome, IntakeError> {
    loop {
        for item in panel.items() {
            let mark = if item.consented { "[x]" } else { "[ ]" };
            let tag = if item.required { " (required)" } else { "" };
            output::detail(format!("{} {}{}", mark, item.label, tag));
        }
        if !panel.can_continue() {
            output::detail("All required declarations must be consented to before saving.");
        }

        let actions = vec!["Toggle a declaration", "Guardian details"];
        match step_menu(theme, &actions, panel.can_continue())? {
            Choice::Local(0) => {
                let labels: Vec<String> =
                    panel.items().iter().map(|i| i.label.clone()).collect();
                let picked = io::select_index(theme, "Which declaration?", &labels, 0)?;
                let id = panel.items()[picked].id;
                panel.toggle(id);
            }
            Choice::Local(_) => {
                panel.has_guardian =
                    io::confirm_action(theme, "Does the client have a guardian or nominee?", panel.has_guardian)?;
                if panel.has_guardian {
                    panel.guardian.name = io::prompt_text(theme, "Guardian name")?;
                    panel.guardian.relationship = io::prompt_text(theme, "Relationship")?;
                    panel.guardian.phone =
                        io::prompt_optional_text(theme, "Phone")?.unwrap_or_default();
                }
            }
            Choice::Save => return Ok(PanelOutcome::Save(panel.payload())),
            Choice::Skip => return Ok(PanelOutcome::Skip),
            Choice::Back => return Ok(PanelOutcome::Back),
            Choice::Jump => return Ok(PanelOutcome::Jump),
            Choice::Quit => return Ok(PanelOutcome::Quit),
        }
    }
}

fn run_cultural(
    theme: &ColorfulTheme,
    mut panel: CulturalPanel,
) -> Result<PanelOutcome, IntakeError> {
    loop {
        if let Some(language) = &panel.primary_language {
            output::detail(format!("Primary language: {}", language));
        }
        if !panel.spoken_languages().is_empty() {
            output::detail(format!("Languages: {}", panel.spoken_languages().join(", ")));
        }
        for preference in panel.preferences() {
            output::detail(format!("{}: {}", preference.area, preference.detail));
        }

        let mut actions = vec![
            "Set primary language",
            "Toggle spoken language",
            "Interpreter required",
            "Add preference",
        ];
        if !panel.preferences().is_empty() {
            actions.push("Remove preference");
        }
        match step_menu(theme, &actions, panel.can_continue())? {
            Choice::Local(0) => {
                panel.primary_language = io::prompt_optional_text(theme, "Primary language")?;
            }
            Choice::Local(1) => {
                let language = io::prompt_text(theme, "Language")?;
                panel.toggle_language(&language);
            }
            Choice::Local(2) => {
                panel.interpreter_required = io::confirm_action(
                    theme,
                    "Is an interpreter required?",
                    panel.interpreter_required,
                )?;
            }
            Choice::Local(3) => {
                panel.draft.area = io::prompt_text(theme, "Preference area")?;
                panel.draft.detail = io::prompt_text(theme, "Detail")?;
                panel.add_preference();
            }
            Choice::Local(_) => {
                let labels: Vec<String> =
                    panel.preferences().iter().map(|p| p.area.clone()).collect();
                let picked = io::select_index(theme, "Remove which preference?", &labels, 0)?;
                let id = panel.preferences()[picked].id;
                panel.remove_preference(id);
            }
            Choice::Save => return Ok(PanelOutcome::Save(panel.payload())),
            Choice::Skip => return Ok(PanelOutcome::Skip),
            Choice::Back => return Ok(PanelOutcome::Back),
            Choice::Jump => return Ok(PanelOutcome::Jump),
            Choice::Quit => return Ok(PanelOutcome::Quit),
        }
    }
}
