use uuid::Uuid;

use crate::intake::{BudgetCategory, BudgetsPayload};
use crate::wizard::{StepId, StepPayload};

use super::StepPanel;

/// In-progress entry for a funding category. A name and a numeric allocated
/// amount are required before the add action unlocks.
#[derive(Debug, Clone, Default)]
pub struct BudgetDraft {
    pub name: String,
    pub allocated: Option<f64>,
}

/// Editable state for the budgets step.
pub struct BudgetsPanel {
    categories: Vec<BudgetCategory>,
    pub draft: BudgetDraft,
}

impl BudgetsPanel {
    pub fn new(prior: Option<&BudgetsPayload>) -> Self {
        Self {
            categories: prior.map(|p| p.categories.clone()).unwrap_or_default(),
            draft: BudgetDraft::default(),
        }
    }

    pub fn categories(&self) -> &[BudgetCategory] {
        &self.categories
    }

    pub fn can_add(&self) -> bool {
        !self.draft.name.trim().is_empty() && self.draft.allocated.is_some()
    }

    /// Adds the drafted category with nothing spent yet.
    pub fn add_category(&mut self) -> Option<Uuid> {
        if !self.can_add() {
            return None;
        }
        let draft = std::mem::take(&mut self.draft);
        let Some(allocated) = draft.allocated else {
            return None;
        };
        let category = BudgetCategory::new(draft.name.trim(), allocated);
        let id = category.id;
        self.categories.push(category);
        Some(id)
    }

    pub fn remove_category(&mut self, id: Uuid) -> bool {
        let before = self.categories.len();
        self.categories.retain(|category| category.id != id);
        self.categories.len() != before
    }

    /// Edits a category's allocation, keeping `remaining` consistent.
    pub fn set_allocated(&mut self, id: Uuid, allocated: f64) -> bool {
        match self.categories.iter_mut().find(|c| c.id == id) {
            Some(category) => {
                category.set_allocated(allocated);
                true
            }
            None => false,
        }
    }

    pub fn record_spending(&mut self, id: Uuid, amount: f64) -> bool {
        match self.categories.iter_mut().find(|c| c.id == id) {
            Some(category) => {
                category.record_spending(amount);
                true
            }
            None => false,
        }
    }

    /// Running total across categories. Displayed, never validated against
    /// any plan-level cap.
    pub fn total_allocated(&self) -> f64 {
        self.categories.iter().map(|c| c.allocated).sum()
    }
}

impl StepPanel for BudgetsPanel {
    fn step_id(&self) -> StepId {
        StepId::Budgets
    }

    fn can_continue(&self) -> bool {
        true
    }

    fn payload(&self) -> StepPayload {
        StepPayload::Budgets(BudgetsPayload {
            categories: self.categories.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_requires_name_and_amount() {
        let mut panel = BudgetsPanel::new(None);
        assert!(!panel.can_add());
        panel.draft.name = "Core Supports".into();
        assert!(!panel.can_add());
        panel.draft.allocated = Some(5000.0);
        assert!(panel.can_add());
    }

    #[test]
    fn new_category_starts_unspent() {
        let mut panel = BudgetsPanel::new(None);
        panel.draft.name = "Core Supports".into();
        panel.draft.allocated = Some(5000.0);
        panel.add_category().unwrap();

        let category = &panel.categories()[0];
        assert_eq!(category.allocated, 5000.0);
        assert_eq!(category.spent, 0.0);
        assert_eq!(category.remaining, 5000.0);
    }

    #[test]
    fn reallocating_updates_remaining_only() {
        let mut panel = BudgetsPanel::new(None);
        panel.draft.name = "Core Supports".into();
        panel.draft.allocated = Some(5000.0);
        let id = panel.add_category().unwrap();

        assert!(panel.set_allocated(id, 6000.0));
        let category = &panel.categories()[0];
        assert_eq!(category.remaining, 6000.0);
        assert_eq!(category.spent, 0.0);
    }

    #[test]
    fn total_is_a_running_sum() {
        let mut panel = BudgetsPanel::new(None);
        panel.draft.name = "Core Supports".into();
        panel.draft.allocated = Some(5000.0);
        panel.add_category().unwrap();
        panel.draft.name = "Transport".into();
        panel.draft.allocated = Some(1500.0);
        panel.add_category().unwrap();
        assert_eq!(panel.total_allocated(), 6500.0);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut panel = BudgetsPanel::new(None);
        assert!(!panel.set_allocated(Uuid::new_v4(), 10.0));
        assert!(!panel.record_spending(Uuid::new_v4(), 10.0));
        assert!(!panel.remove_category(Uuid::new_v4()));
    }
}
