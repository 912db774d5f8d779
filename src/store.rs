use crate::types::{AppointmentDraft, Slot, SlotDraft};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage connection failed: {0}")]
    Connection(String),

    #[error("storage query failed: {0}")]
    Query(String),

    #[error("no slot record with id {0}")]
    SlotNotFound(Uuid),
}

/// Persistence boundary shared by the availability manager and the
/// booking gateway.
///
/// The store is a dumb record collection: it enforces none of the
/// calendar invariants (one record per (date, time), no bookable past
/// dates). Those are the callers' job.
pub trait SlotStore: Clone + Send + Sync + 'static {
    /// Full scan of every slot record, all dates. Callers filter in
    /// memory; see the scaling note in DESIGN.md.
    fn list_slots(&self) -> Result<Vec<Slot>, StoreError>;

    /// Persists a new slot record and returns its storage id.
    fn create_slot(&self, draft: SlotDraft) -> Result<Uuid, StoreError>;

    /// Flips the `bookable` flag of an existing record.
    fn update_slot(&self, id: Uuid, bookable: bool) -> Result<(), StoreError>;

    /// Persists a new appointment with status `pending` and returns
    /// its id. A single atomic create; no slot record is touched.
    fn create_appointment(&self, draft: AppointmentDraft) -> Result<Uuid, StoreError>;
}
