use std::{
    fs,
    path::{Path, PathBuf},
};

use uuid::Uuid;

use crate::errors::IntakeError;
use crate::utils::{app_data_dir, ensure_dir, records_dir_in, write_atomic};
use crate::wizard::StepPayload;

use super::{ClientRecord, RecordStore, Result};

const RECORD_EXTENSION: &str = "json";

/// File-backed store keeping one JSON document per client record.
#[derive(Clone)]
pub struct JsonStore {
    records_dir: PathBuf,
}

impl JsonStore {
    /// Opens a store rooted at the given directory, or the default app data
    /// directory when `root` is `None`.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let base = root.unwrap_or_else(app_data_dir);
        ensure_dir(&base)?;
        let records_dir = records_dir_in(&base);
        ensure_dir(&records_dir)?;
        Ok(Self { records_dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn record_path(&self, client_id: Uuid) -> PathBuf {
        self.records_dir
            .join(format!("{}.{}", client_id, RECORD_EXTENSION))
    }

    fn read_record(&self, path: &Path, client_id: Uuid) -> Result<ClientRecord> {
        let data = fs::read_to_string(path)?;
        let record: ClientRecord = serde_json::from_str(&data)?;
        if record.client_id != client_id {
            return Err(IntakeError::UnknownClient(client_id));
        }
        Ok(record)
    }
}

impl RecordStore for JsonStore {
    fn save_slice(&self, client_id: Uuid, payload: &StepPayload) -> Result<()> {
        let path = self.record_path(client_id);
        let mut record = if path.exists() {
            self.read_record(&path, client_id)?
        } else {
            ClientRecord::new(client_id)
        };
        record.slices.insert(payload.clone());
        record.updated_at = chrono::Utc::now();
        let data = serde_json::to_string_pretty(&record)?;
        write_atomic(&path, &data)?;
        tracing::debug!(client = %client_id, step = %payload.step_id(), "slice written");
        Ok(())
    }

    fn load_record(&self, client_id: Uuid) -> Result<ClientRecord> {
        let path = self.record_path(client_id);
        if !path.exists() {
            return Err(IntakeError::UnknownClient(client_id));
        }
        self.read_record(&path, client_id)
    }

    fn list_clients(&self) -> Result<Vec<Uuid>> {
        let mut clients = Vec::new();
        for entry in fs::read_dir(&self.records_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                if let Ok(id) = stem.parse::<Uuid>() {
                    clients.push(id);
                }
            }
        }
        clients.sort();
        Ok(clients)
    }
}
