use std::sync::Arc;

use dialoguer::theme::ColorfulTheme;
use uuid::Uuid;

use crate::cli::panels::{run_panel, PanelOutcome};
use crate::cli::{io, output};
use crate::config::{Config, ConfigManager};
use crate::errors::IntakeError;
use crate::notify::TermNotifier;
use crate::storage::{JsonStore, RecordStore};
use crate::wizard::{WizardController, WizardEvent};

/// Runs the interactive intake wizard for one client record.
pub fn run_cli() -> Result<(), IntakeError> {
    crate::init();

    let theme = ColorfulTheme::default();
    let store = Arc::new(JsonStore::new_default()?);
    let config_manager = ConfigManager::new()?;
    let mut config = config_manager.load()?;

    output::section("Client intake");
    let client_id = choose_client(&theme, store.as_ref(), &config)?;
    config.last_client = Some(client_id);
    config_manager.save(&config)?;
    output::info(format!("Setting up client {}", client_id));

    let mut wizard = WizardController::new(client_id, store.clone(), Arc::new(TermNotifier));

    loop {
        let step = *wizard.current_step();
        output::section(format!("{}: {}", wizard.progress_label(), step.title));
        output::info(step.description);
        render_sidebar(&wizard);

        match run_panel(&theme, step.id, wizard.saved_payload(step.id))? {
            PanelOutcome::Save(payload) => match wizard.save_step(payload) {
                Ok(WizardEvent::Completed) => {
                    finish(&wizard, store.as_ref());
                    break;
                }
                Ok(_) => {}
                // The notifier already reported the failure; stay on the step.
                Err(err) => tracing::debug!(error = %err, "staying on current step"),
            },
            PanelOutcome::Skip => {
                if wizard.skip_step() == WizardEvent::Completed {
                    finish(&wizard, store.as_ref());
                    break;
                }
            }
            PanelOutcome::Back => {
                wizard.go_back();
            }
            PanelOutcome::Jump => {
                let labels: Vec<String> = wizard
                    .steps()
                    .iter()
                    .map(|info| info.title.to_string())
                    .collect();
                let picked =
                    io::select_index(&theme, "Go to step", &labels, wizard.current_index())?;
                // In range by construction: the menu offers only real steps.
                let _ = wizard.go_to_step(picked);
            }
            PanelOutcome::Quit => {
                output::info("Leaving the intake wizard. Saved steps are kept on file.");
                break;
            }
        }
    }

    Ok(())
}

fn choose_client(
    theme: &ColorfulTheme,
    store: &JsonStore,
    config: &Config,
) -> Result<Uuid, IntakeError> {
    let existing = store.list_clients()?;
    if existing.is_empty() {
        return Ok(Uuid::new_v4());
    }

    let options = vec![
        "Start a new client".to_string(),
        "Continue an existing client".to_string(),
    ];
    if io::select_index(theme, "Which client?", &options, 0)? == 0 {
        return Ok(Uuid::new_v4());
    }

    let labels: Vec<String> = existing.iter().map(|id| id.to_string()).collect();
    let default = config
        .last_client
        .and_then(|last| existing.iter().position(|id| *id == last))
        .unwrap_or(0);
    let picked = io::select_index(theme, "Client record", &labels, default)?;
    Ok(existing[picked])
}

fn render_sidebar(wizard: &WizardController) {
    for (index, info) in wizard.steps().iter().enumerate() {
        let marker = if wizard.is_completed(info.id) {
            "[✓]"
        } else {
            "[ ]"
        };
        let pointer = if index == wizard.current_index() {
            "→"
        } else {
            " "
        };
        output::detail(format!("{} {} {}", pointer, marker, info.title));
    }
}

/// The terminal transition: summarise the record in place of the profile
/// detail view a full front-end would navigate to.
fn finish(wizard: &WizardController, store: &JsonStore) {
    output::section("Intake complete");
    output::success(format!("Client {} is set up.", wizard.client_id()));
    for info in wizard.steps() {
        let state = if wizard.is_completed(info.id) {
            "saved"
        } else {
            "skipped"
        };
        output::detail(format!("{}: {}", info.title, state));
    }
    if let Some(budgets) = &wizard.accumulator().budgets {
        output::detail(format!("Total allocated: {:.2}", budgets.total_allocated()));
    }
    output::info(format!(
        "Record stored at {}",
        store.record_path(wizard.client_id()).display()
    ));
}
