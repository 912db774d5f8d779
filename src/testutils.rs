use crate::configuration::Configuration;
use crate::store::{SlotStore, StoreError};
use crate::types::{AppointmentDraft, Slot, SlotDraft};
use chrono::NaiveDate;
use std::{
    collections::HashMap,
    ops::RangeInclusive,
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc, Mutex,
    },
};
use uuid::Uuid;

pub struct MockSlotStoreInner {
    pub success: AtomicBool,
    /// Number of writes allowed before every further write fails.
    /// `u64::MAX` means never fail.
    pub fail_after_writes: AtomicU64,
    pub writes: AtomicU64,
    pub calls_to_list_slots: AtomicU64,
    pub calls_to_create_slot: AtomicU64,
    pub calls_to_update_slot: AtomicU64,
    pub calls_to_create_appointment: AtomicU64,
    pub slots: Mutex<HashMap<Uuid, Slot>>,
}

/// Counting slot store: behaves like a real in-memory store so
/// multi-step flows work, while every call is tallied so tests can
/// assert exactly which writes an operation issued.
#[derive(Clone)]
pub struct MockSlotStore(pub Arc<MockSlotStoreInner>);

impl MockSlotStore {
    pub fn new() -> Self {
        Self(Arc::new(MockSlotStoreInner {
            success: AtomicBool::new(true),
            fail_after_writes: AtomicU64::new(u64::MAX),
            writes: AtomicU64::default(),
            calls_to_list_slots: AtomicU64::default(),
            calls_to_create_slot: AtomicU64::default(),
            calls_to_update_slot: AtomicU64::default(),
            calls_to_create_appointment: AtomicU64::default(),
            slots: Mutex::default(),
        }))
    }

    pub fn slots(&self) -> Vec<Slot> {
        self.0.slots.lock().unwrap().values().cloned().collect()
    }

    pub fn seed_slot(&self, date: NaiveDate, time: &str, bookable: bool) {
        let id = Uuid::new_v4();
        self.0.slots.lock().unwrap().insert(
            id,
            Slot {
                id,
                date,
                time: time.into(),
                bookable,
            },
        );
    }

    fn check(&self) -> Result<(), StoreError> {
        match self.0.success.load(Ordering::SeqCst) {
            true => Ok(()),
            false => Err(StoreError::Query("supposed to fail".into())),
        }
    }

    fn check_write(&self) -> Result<(), StoreError> {
        self.check()?;
        let done = self.0.writes.fetch_add(1, Ordering::SeqCst);
        if done >= self.0.fail_after_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Query("write budget exhausted".into()));
        }
        Ok(())
    }
}

impl SlotStore for MockSlotStore {
    fn list_slots(&self) -> Result<Vec<Slot>, StoreError> {
        self.0.calls_to_list_slots.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.slots())
    }

    fn create_slot(&self, draft: SlotDraft) -> Result<Uuid, StoreError> {
        self.0.calls_to_create_slot.fetch_add(1, Ordering::SeqCst);
        self.check_write()?;
        let id = Uuid::new_v4();
        self.0.slots.lock().unwrap().insert(
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
        self.0.calls_to_update_slot.fetch_add(1, Ordering::SeqCst);
        self.check_write()?;
        match self.0.slots.lock().unwrap().get_mut(&id) {
            Some(slot) => {
                slot.bookable = bookable;
                Ok(())
            }
            None => Err(StoreError::SlotNotFound(id)),
        }
    }

    fn create_appointment(&self, _draft: AppointmentDraft) -> Result<Uuid, StoreError> {
        self.0
            .calls_to_create_appointment
            .fetch_add(1, Ordering::SeqCst);
        self.check_write()?;
        Ok(Uuid::new_v4())
    }
}

#[derive(Clone)]
pub struct TestConfiguration;

impl Configuration for TestConfiguration {
    fn admin_password(&self) -> String {
        "123".into()
    }

    fn port(&self) -> u16 {
        0
    }

    fn database_url(&self) -> Option<String> {
        None
    }

    fn working_hours(&self) -> RangeInclusive<u32> {
        9..=17
    }
}
