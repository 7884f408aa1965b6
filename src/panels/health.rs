use uuid::Uuid;

use crate::intake::{HealthPayload, MedicalCondition, Medication, MobilityAid};
use crate::wizard::{StepId, StepPayload};

use super::StepPanel;

/// In-progress entry for a medical condition. Only the name is required.
#[derive(Debug, Clone, Default)]
pub struct ConditionDraft {
    pub name: String,
    pub notes: String,
}

/// In-progress entry for a medication. Name and dosage are required.
#[derive(Debug, Clone, Default)]
pub struct MedicationDraft {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

/// Editable state for the health step. Everything is optional; the panel
/// never blocks "Save & Continue".
pub struct HealthPanel {
    conditions: Vec<MedicalCondition>,
    medications: Vec<Medication>,
    mobility_aids: Vec<MobilityAid>,
    pub allergies: String,
    pub notes: String,
    pub condition_draft: ConditionDraft,
    pub medication_draft: MedicationDraft,
}

impl HealthPanel {
    pub fn new(prior: Option<&HealthPayload>) -> Self {
        let (conditions, medications, mobility_aids, allergies, notes) = match prior {
            Some(p) => (
                p.conditions.clone(),
                p.medications.clone(),
                p.mobility_aids.clone(),
                p.allergies.clone().unwrap_or_default(),
                p.notes.clone().unwrap_or_default(),
            ),
            None => Default::default(),
        };
        Self {
            conditions,
            medications,
            mobility_aids,
            allergies,
            notes,
            condition_draft: ConditionDraft::default(),
            medication_draft: MedicationDraft::default(),
        }
    }

    pub fn conditions(&self) -> &[MedicalCondition] {
        &self.conditions
    }

    pub fn medications(&self) -> &[Medication] {
        &self.medications
    }

    pub fn mobility_aids(&self) -> &[MobilityAid] {
        &self.mobility_aids
    }

    pub fn can_add_condition(&self) -> bool {
        !self.condition_draft.name.trim().is_empty()
    }

    pub fn add_condition(&mut self) -> Option<Uuid> {
        if !self.can_add_condition() {
            return None;
        }
        let draft = std::mem::take(&mut self.condition_draft);
        let notes = draft.notes.trim();
        let condition = MedicalCondition::new(
            draft.name.trim(),
            (!notes.is_empty()).then(|| notes.to_string()),
        );
        let id = condition.id;
        self.conditions.push(condition);
        Some(id)
    }

    pub fn remove_condition(&mut self, id: Uuid) -> bool {
        let before = self.conditions.len();
        self.conditions.retain(|c| c.id != id);
        self.conditions.len() != before
    }

    pub fn can_add_medication(&self) -> bool {
        !self.medication_draft.name.trim().is_empty()
            && !self.medication_draft.dosage.trim().is_empty()
    }

    pub fn add_medication(&mut self) -> Option<Uuid> {
        if !self.can_add_medication() {
            return None;
        }
        let draft = std::mem::take(&mut self.medication_draft);
        let mut medication = Medication::new(draft.name.trim(), draft.dosage.trim());
        let frequency = draft.frequency.trim();
        if !frequency.is_empty() {
            medication.frequency = Some(frequency.to_string());
        }
        let id = medication.id;
        self.medications.push(medication);
        Some(id)
    }

    pub fn remove_medication(&mut self, id: Uuid) -> bool {
        let before = self.medications.len();
        self.medications.retain(|m| m.id != id);
        self.medications.len() != before
    }

    pub fn is_aid_selected(&self, aid: MobilityAid) -> bool {
        self.mobility_aids.contains(&aid)
    }

    /// Toggles a mobility aid, keeping `None` mutually exclusive with every
    /// other aid: selecting `None` clears the rest, selecting anything else
    /// clears `None`.
    pub fn toggle_aid(&mut self, aid: MobilityAid) {
        if self.is_aid_selected(aid) {
            self.mobility_aids.retain(|candidate| *candidate != aid);
            return;
        }
        if aid == MobilityAid::None {
            self.mobility_aids.clear();
        } else {
            self.mobility_aids
                .retain(|candidate| *candidate != MobilityAid::None);
        }
        self.mobility_aids.push(aid);
    }
}

impl StepPanel for HealthPanel {
    fn step_id(&self) -> StepId {
        StepId::Health
    }

    fn can_continue(&self) -> bool {
        true
    }

    fn payload(&self) -> StepPayload {
        let allergies = self.allergies.trim();
        let notes = self.notes.trim();
        StepPayload::Health(HealthPayload {
            conditions: self.conditions.clone(),
            medications: self.medications.clone(),
            mobility_aids: self.mobility_aids.clone(),
            allergies: (!allergies.is_empty()).then(|| allergies.to_string()),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}
