use crate::store::{SlotStore, StoreError};
use crate::types::{Appointment, AppointmentDraft, AppointmentStatus, Slot, SlotDraft};
use chrono::Utc;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use uuid::Uuid;

/// In-memory slot store. Used when no `DATABASE_URL` is configured and
/// throughout the test suite.
#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    inner: Arc<Mutex<LocalStoreInner>>,
}

#[derive(Debug, Default)]
struct LocalStoreInner {
    slots: HashMap<Uuid, Slot>,
    appointments: HashMap<Uuid, Appointment>,
}

impl SlotStore for LocalStore {
    fn list_slots(&self) -> Result<Vec<Slot>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.slots.values().cloned().collect())
    }

    fn create_slot(&self, draft: SlotDraft) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let mut inner = self.inner.lock().unwrap();
        inner.slots.insert(
            id,
            Slot {
                id,
                date: draft.date,
                time: draft.time,
                bookable: draft.bookable,
            },
        );
        Ok(id)
    }

    fn update_slot(&self, id: Uuid, bookable: bool) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.slots.get_mut(&id) {
            Some(slot) => {
                slot.bookable = bookable;
                Ok(())
            }
            None => Err(StoreError::SlotNotFound(id)),
        }
    }

    fn create_appointment(&self, draft: AppointmentDraft) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let mut inner = self.inner.lock().unwrap();
        inner.appointments.insert(
            id,
            Appointment {
                id,
                name: draft.name,
                email: draft.email,
                phone: draft.phone,
                date: draft.date,
                time: draft.time,
                notes: draft.notes,
                status: AppointmentStatus::Pending,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }
}
