use uuid::Uuid;

use crate::intake::{Document, DocumentKind, DocumentsPayload};
use crate::wizard::{StepId, StepPayload};

use super::StepPanel;

/// A file picked for upload, before it becomes a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
}

/// In-progress upload entry. Both a file and a document type must be chosen
/// before the upload action unlocks; notes stay optional.
#[derive(Debug, Clone, Default)]
pub struct DocumentDraft {
    pub file: Option<SelectedFile>,
    pub kind: Option<DocumentKind>,
    pub notes: String,
}

/// Editable state for the documents step.
pub struct DocumentsPanel {
    documents: Vec<Document>,
    pub draft: DocumentDraft,
}

impl DocumentsPanel {
    pub fn new(prior: Option<&DocumentsPayload>) -> Self {
        Self {
            documents: prior.map(|p| p.documents.clone()).unwrap_or_default(),
            draft: DocumentDraft::default(),
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn can_upload(&self) -> bool {
        self.draft.file.is_some() && self.draft.kind.is_some()
    }

    /// Attaches the drafted upload. No size limit is enforced here; sizes
    /// are only formatted for display.
    pub fn upload(&mut self) -> Option<Uuid> {
        if !self.can_upload() {
            return None;
        }
        let draft = std::mem::take(&mut self.draft);
        let (Some(file), Some(kind)) = (draft.file, draft.kind) else {
            return None;
        };
        let mut document = Document::new(file.name, kind, file.size_bytes);
        let notes = draft.notes.trim();
        if !notes.is_empty() {
            document.notes = Some(notes.to_string());
        }
        let id = document.id;
        self.documents.push(document);
        Some(id)
    }

    pub fn remove_document(&mut self, id: Uuid) -> bool {
        let before = self.documents.len();
        self.documents.retain(|doc| doc.id != id);
        self.documents.len() != before
    }
}

impl StepPanel for DocumentsPanel {
    fn step_id(&self) -> StepId {
        StepId::Documents
    }

    fn can_continue(&self) -> bool {
        true
    }

    fn payload(&self) -> StepPayload {
        StepPayload::Documents(DocumentsPayload {
            documents: self.documents.clone(),
        })
    }
}
