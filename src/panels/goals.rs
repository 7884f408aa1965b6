use chrono::NaiveDate;
use uuid::Uuid;

use crate::intake::{Goal, GoalPriority, GoalsPayload};
use crate::wizard::{StepId, StepPayload};

use super::StepPanel;

/// In-progress entry for a single goal.
///
/// Title, description, and category are required before the add action
/// unlocks; priority defaults to Medium and the target date is optional.
#[derive(Debug, Clone, Default)]
pub struct GoalDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: GoalPriority,
    pub target_date: Option<NaiveDate>,
}

impl GoalDraft {
    fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.description.trim().is_empty()
            && !self.category.trim().is_empty()
    }
}

/// Editable state for the goals step.
pub struct GoalsPanel {
    goals: Vec<Goal>,
    pub draft: GoalDraft,
}

impl GoalsPanel {
    /// Starts from the previously saved slice when the step is re-entered.
    pub fn new(prior: Option<&GoalsPayload>) -> Self {
        Self {
            goals: prior.map(|p| p.goals.clone()).unwrap_or_default(),
            draft: GoalDraft::default(),
        }
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn can_add(&self) -> bool {
        self.draft.is_complete()
    }

    /// Appends the drafted goal and resets the draft. Unavailable until the
    /// required fields are filled.
    pub fn add_goal(&mut self) -> Option<Uuid> {
        if !self.can_add() {
            return None;
        }
        let draft = std::mem::take(&mut self.draft);
        let mut goal = Goal::new(
            draft.title.trim(),
            draft.description.trim(),
            draft.category.trim(),
        );
        goal.priority = draft.priority;
        goal.target_date = draft.target_date;
        let id = goal.id;
        self.goals.push(goal);
        Some(id)
    }

    /// Removes a goal immediately, no confirmation step.
    pub fn remove_goal(&mut self, id: Uuid) -> bool {
        let before = self.goals.len();
        self.goals.retain(|goal| goal.id != id);
        self.goals.len() != before
    }
}

impl StepPanel for GoalsPanel {
    fn step_id(&self) -> StepId {
        StepId::Goals
    }

    fn can_continue(&self) -> bool {
        !self.goals.is_empty()
    }

    fn payload(&self) -> StepPayload {
        StepPayload::Goals(GoalsPayload {
            goals: self.goals.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::GoalStatus;

    #[test]
    fn add_is_gated_on_required_fields() {
        let mut panel = GoalsPanel::new(None);
        assert!(!panel.can_add());
        assert!(panel.add_goal().is_none());

        panel.draft.title = "Improve mobility".into();
        panel.draft.description = "Walk 10 min daily".into();
        assert!(!panel.can_add());

        panel.draft.category = "Health & Wellbeing".into();
        assert!(panel.can_add());
    }

    #[test]
    fn added_goal_gets_defaults_and_resets_draft() {
        let mut panel = GoalsPanel::new(None);
        panel.draft.title = "Improve mobility".into();
        panel.draft.description = "Walk 10 min daily".into();
        panel.draft.category = "Health & Wellbeing".into();

        let id = panel.add_goal().expect("draft was complete");
        let goal = &panel.goals()[0];
        assert_eq!(goal.id, id);
        assert_eq!(goal.priority, GoalPriority::Medium);
        assert_eq!(goal.status, GoalStatus::NotStarted);
        assert!(panel.draft.title.is_empty());
    }

    #[test]
    fn continue_requires_at_least_one_goal() {
        let mut panel = GoalsPanel::new(None);
        assert!(!panel.can_continue());

        panel.draft.title = "t".into();
        panel.draft.description = "d".into();
        panel.draft.category = "c".into();
        panel.add_goal();
        assert!(panel.can_continue());

        let id = panel.goals()[0].id;
        assert!(panel.remove_goal(id));
        assert!(!panel.can_continue());
    }

    #[test]
    fn resumes_from_saved_slice() {
        let saved = GoalsPayload {
            goals: vec![Goal::new("t", "d", "c")],
        };
        let panel = GoalsPanel::new(Some(&saved));
        assert_eq!(panel.payload(), StepPayload::Goals(saved));
    }
}
