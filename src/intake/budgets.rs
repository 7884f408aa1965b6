use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One funding category in the client's support budget.
///
/// `remaining` is derived state: every mutation goes through a method that
/// re-establishes `remaining == allocated - spent`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetCategory {
    pub id: Uuid,
    pub name: String,
    pub allocated: f64,
    pub spent: f64,
    pub remaining: f64,
}

impl BudgetCategory {
    /// New categories start with nothing spent.
    pub fn new(name: impl Into<String>, allocated: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            allocated,
            spent: 0.0,
            remaining: allocated,
        }
    }

    /// Re-allocates the category, leaving `spent` untouched.
    pub fn set_allocated(&mut self, allocated: f64) {
        self.allocated = allocated;
        self.recompute();
    }

    /// Records additional spending against the category.
    pub fn record_spending(&mut self, amount: f64) {
        self.spent += amount;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.remaining = self.allocated - self.spent;
    }
}

/// Slice persisted by the budgets step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BudgetsPayload {
    pub categories: Vec<BudgetCategory>,
}

impl BudgetsPayload {
    /// Running total across categories. Displayed, never capped.
    pub fn total_allocated(&self) -> f64 {
        self.categories.iter().map(|c| c.allocated).sum()
    }
}
