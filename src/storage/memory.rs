use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use uuid::Uuid;

use crate::errors::IntakeError;
use crate::wizard::StepPayload;

use super::{ClientRecord, RecordStore, Result};

/// In-memory record store for tests and demo sessions.
///
/// Clones share the same underlying map, so a test can keep a handle while
/// the wizard owns another. `set_failing` makes every subsequent save fail,
/// which exercises the wizard's gated-advance branch.
#[derive(Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<HashMap<Uuid, ClientRecord>>>,
    failing: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().map(|map| map.len()).unwrap_or(0)
    }
}

impl RecordStore for MemoryStore {
    fn save_slice(&self, client_id: Uuid, payload: &StepPayload) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(IntakeError::SliceRejected {
                step: payload.step_id(),
                reason: "store unavailable".into(),
            });
        }
        let mut records = self
            .records
            .lock()
            .map_err(|_| IntakeError::SliceRejected {
                step: payload.step_id(),
                reason: "store poisoned".into(),
            })?;
        let record = records
            .entry(client_id)
            .or_insert_with(|| ClientRecord::new(client_id));
        record.slices.insert(payload.clone());
        record.updated_at = chrono::Utc::now();
        Ok(())
    }

    fn load_record(&self, client_id: Uuid) -> Result<ClientRecord> {
        self.records
            .lock()
            .ok()
            .and_then(|records| records.get(&client_id).cloned())
            .ok_or(IntakeError::UnknownClient(client_id))
    }

    fn list_clients(&self) -> Result<Vec<Uuid>> {
        let mut clients: Vec<Uuid> = self
            .records
            .lock()
            .map(|records| records.keys().copied().collect())
            .unwrap_or_default();
        clients.sort();
        Ok(clients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::GoalsPayload;
    use crate::wizard::StepId;

    #[test]
    fn clones_share_state() {
        let store = MemoryStore::new();
        let handle = store.clone();
        let client = Uuid::new_v4();
        store
            .save_slice(client, &StepPayload::Goals(GoalsPayload::default()))
            .unwrap();
        let record = handle.load_record(client).unwrap();
        assert!(record.slices.contains(StepId::Goals));
    }

    #[test]
    fn failing_mode_rejects_saves() {
        let store = MemoryStore::new();
        store.set_failing(true);
        let err = store
            .save_slice(Uuid::new_v4(), &StepPayload::Goals(GoalsPayload::default()))
            .unwrap_err();
        assert!(matches!(err, IntakeError::SliceRejected { .. }));
        assert_eq!(store.record_count(), 0);
    }
}
