use uuid::Uuid;

use crate::intake::consent::{standard_items, ConsentItem, ConsentPayload, Guardian};
use crate::wizard::{StepId, StepPayload};

use super::StepPanel;

/// Guardian details, only collected while the guardian flag is set.
#[derive(Debug, Clone, Default)]
pub struct GuardianDraft {
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

impl GuardianDraft {
    fn from_guardian(guardian: &Guardian) -> Self {
        Self {
            name: guardian.name.clone(),
            relationship: guardian.relationship.clone(),
            phone: guardian.phone.clone().unwrap_or_default(),
        }
    }

    fn to_guardian(&self) -> Guardian {
        let phone = self.phone.trim();
        Guardian {
            name: self.name.trim().to_string(),
            relationship: self.relationship.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
        }
    }
}

/// Editable state for the consent step.
///
/// "Save & Continue" stays locked until every required declaration has been
/// consented to; optional declarations never block.
pub struct ConsentPanel {
    items: Vec<ConsentItem>,
    pub has_guardian: bool,
    pub guardian: GuardianDraft,
}

impl ConsentPanel {
    /// Starts from the saved slice, or from the standard declaration set for
    /// a fresh step.
    pub fn new(prior: Option<&ConsentPayload>) -> Self {
        match prior {
            Some(payload) => Self {
                items: payload.items.clone(),
                has_guardian: payload.guardian.is_some(),
                guardian: payload
                    .guardian
                    .as_ref()
                    .map(GuardianDraft::from_guardian)
                    .unwrap_or_default(),
            },
            None => Self {
                items: standard_items(),
                has_guardian: false,
                guardian: GuardianDraft::default(),
            },
        }
    }

    pub fn items(&self) -> &[ConsentItem] {
        &self.items
    }

    /// Grants or withdraws one declaration. Granting stamps the completion
    /// time; withdrawing clears it.
    pub fn set_consent(&mut self, id: Uuid, consented: bool) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                if consented {
                    item.grant();
                } else {
                    item.revoke();
                }
                true
            }
            None => false,
        }
    }

    pub fn toggle(&mut self, id: Uuid) -> bool {
        let target = self.items.iter().find(|item| item.id == id).map(|item| {
            !item.consented
        });
        match target {
            Some(consented) => self.set_consent(id, consented),
            None => false,
        }
    }
}

impl StepPanel for ConsentPanel {
    fn step_id(&self) -> StepId {
        StepId::Consent
    }

    fn can_continue(&self) -> bool {
        self.items
            .iter()
            .filter(|item| item.required)
            .all(|item| item.consented)
    }

    fn payload(&self) -> StepPayload {
        StepPayload::Consent(ConsentPayload {
            items: self.items.clone(),
            guardian: self.has_guardian.then(|| self.guardian.to_guardian()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required_ids(panel: &ConsentPanel) -> Vec<Uuid> {
        panel
            .items()
            .iter()
            .filter(|item| item.required)
            .map(|item| item.id)
            .collect()
    }

    #[test]
    fn all_required_items_gate_continue() {
        let mut panel = ConsentPanel::new(None);
        let required = required_ids(&panel);
        assert!(required.len() >= 2);
        assert!(!panel.can_continue());

        for id in &required[..required.len() - 1] {
            panel.set_consent(*id, true);
            assert!(!panel.can_continue());
        }
        panel.set_consent(*required.last().unwrap(), true);
        assert!(panel.can_continue());
    }

    #[test]
    fn withdrawing_any_required_item_relocks() {
        let mut panel = ConsentPanel::new(None);
        let required = required_ids(&panel);
        for id in &required {
            panel.set_consent(*id, true);
        }
        assert!(panel.can_continue());
        panel.set_consent(required[0], false);
        assert!(!panel.can_continue());
    }

    #[test]
    fn consent_stamps_and_clears_timestamps() {
        let mut panel = ConsentPanel::new(None);
        let id = panel.items()[0].id;
        panel.set_consent(id, true);
        assert!(panel.items()[0].consented_at.is_some());
        panel.set_consent(id, false);
        assert!(panel.items()[0].consented_at.is_none());
    }

    #[test]
    fn optional_items_never_block() {
        let mut panel = ConsentPanel::new(None);
        for id in required_ids(&panel) {
            panel.set_consent(id, true);
        }
        // Optional items stay unconsented.
        assert!(panel.can_continue());
    }

    #[test]
    fn guardian_is_only_emitted_when_flagged() {
        let mut panel = ConsentPanel::new(None);
        panel.guardian.name = "Alex Doe".into();
        panel.guardian.relationship = "Parent".into();

        match panel.payload() {
            StepPayload::Consent(payload) => assert!(payload.guardian.is_none()),
            other => panic!("unexpected payload: {:?}", other),
        }

        panel.has_guardian = true;
        match panel.payload() {
            StepPayload::Consent(payload) => {
                let guardian = payload.guardian.unwrap();
                assert_eq!(guardian.name, "Alex Doe");
                assert!(guardian.phone.is_none());
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn resumes_prior_consents_and_guardian() {
        let mut first = ConsentPanel::new(None);
        let id = first.items()[0].id;
        first.set_consent(id, true);
        first.has_guardian = true;
        first.guardian.name = "Alex Doe".into();
        first.guardian.relationship = "Parent".into();

        let StepPayload::Consent(saved) = first.payload() else {
            panic!("wrong payload variant");
        };
        let resumed = ConsentPanel::new(Some(&saved));
        assert!(resumed.items()[0].consented);
        assert!(resumed.has_guardian);
        assert_eq!(resumed.guardian.name, "Alex Doe");
    }
}
