pub mod json_backend;
mod memory;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::IntakeError;
use crate::wizard::{Accumulator, StepPayload};

pub type Result<T> = std::result::Result<T, IntakeError>;

/// The durable shape of one client's intake record: every slice saved so
/// far, plus when it was last touched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientRecord {
    pub client_id: Uuid,
    pub slices: Accumulator,
    pub updated_at: DateTime<Utc>,
}

impl ClientRecord {
    pub fn new(client_id: Uuid) -> Self {
        Self {
            client_id,
            slices: Accumulator::default(),
            updated_at: Utc::now(),
        }
    }
}

/// Abstraction over persistence backends for intake records.
///
/// The wizard only depends on the success or failure of `save_slice`; the
/// storage schema and transport are this trait's business.
pub trait RecordStore: Send + Sync {
    /// Durably stores one step's slice for a client, merging it into any
    /// record already on file.
    fn save_slice(&self, client_id: Uuid, payload: &StepPayload) -> Result<()>;

    /// Loads a client's full record.
    fn load_record(&self, client_id: Uuid) -> Result<ClientRecord>;

    /// Lists every client with a record on file.
    fn list_clients(&self) -> Result<Vec<Uuid>>;
}

pub use json_backend::JsonStore;
pub use memory::MemoryStore;
