use uuid::Uuid;

use crate::intake::{CulturalPayload, CulturalPreference};
use crate::wizard::{StepId, StepPayload};

use super::StepPanel;

/// In-progress entry for a cultural preference. Area and detail are both
/// required before the add action unlocks.
#[derive(Debug, Clone, Default)]
pub struct PreferenceDraft {
    pub area: String,
    pub detail: String,
}

/// Editable state for the cultural step. No gating: the slice can be saved
/// in any state.
pub struct CulturalPanel {
    pub primary_language: Option<String>,
    spoken_languages: Vec<String>,
    pub interpreter_required: bool,
    preferences: Vec<CulturalPreference>,
    pub draft: PreferenceDraft,
}

impl CulturalPanel {
    pub fn new(prior: Option<&CulturalPayload>) -> Self {
        let (primary_language, spoken_languages, interpreter_required, preferences) = match prior {
            Some(p) => (
                p.primary_language.clone(),
                p.spoken_languages.clone(),
                p.interpreter_required,
                p.preferences.clone(),
            ),
            None => Default::default(),
        };
        Self {
            primary_language,
            spoken_languages,
            interpreter_required,
            preferences,
            draft: PreferenceDraft::default(),
        }
    }

    pub fn spoken_languages(&self) -> &[String] {
        &self.spoken_languages
    }

    pub fn preferences(&self) -> &[CulturalPreference] {
        &self.preferences
    }

    pub fn speaks(&self, language: &str) -> bool {
        self.spoken_languages
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(language))
    }

    /// Adds or removes a language from the multi-select checklist. The
    /// single-select primary language field is independent of this list.
    pub fn toggle_language(&mut self, language: &str) {
        if self.speaks(language) {
            self.spoken_languages
                .retain(|candidate| !candidate.eq_ignore_ascii_case(language));
        } else {
            self.spoken_languages.push(language.to_string());
        }
    }

    pub fn can_add_preference(&self) -> bool {
        !self.draft.area.trim().is_empty() && !self.draft.detail.trim().is_empty()
    }

    pub fn add_preference(&mut self) -> Option<Uuid> {
        if !self.can_add_preference() {
            return None;
        }
        let draft = std::mem::take(&mut self.draft);
        let preference = CulturalPreference::new(draft.area.trim(), draft.detail.trim());
        let id = preference.id;
        self.preferences.push(preference);
        Some(id)
    }

    pub fn remove_preference(&mut self, id: Uuid) -> bool {
        let before = self.preferences.len();
        self.preferences.retain(|p| p.id != id);
        self.preferences.len() != before
    }
}

impl StepPanel for CulturalPanel {
    fn step_id(&self) -> StepId {
        StepId::Cultural
    }

    fn can_continue(&self) -> bool {
        true
    }

    fn payload(&self) -> StepPayload {
        StepPayload::Cultural(CulturalPayload {
            primary_language: self.primary_language.clone(),
            spoken_languages: self.spoken_languages.clone(),
            interpreter_required: self.interpreter_required,
            preferences: self.preferences.clone(),
        })
    }
}
