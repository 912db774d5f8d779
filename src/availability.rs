use crate::error::Error;
use crate::store::SlotStore;
use crate::types::{hour_to_time, Slot, SlotDraft};
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::ops::RangeInclusive;

/// Admin-facing reconciliation of a date's bookable hours.
#[derive(Debug, Clone)]
pub struct AvailabilityManager<T: SlotStore> {
    store: T,
    working_hours: RangeInclusive<u32>,
}

impl<T: SlotStore> AvailabilityManager<T> {
    pub fn new(store: T, working_hours: RangeInclusive<u32>) -> Self {
        Self {
            store,
            working_hours,
        }
    }

    /// Makes the stored slots for `date` match `desired_hours` exactly.
    ///
    /// Walks every hour of the working range in ascending order and
    /// issues at most one create or update per hour; hours that are
    /// already correct cause no write, so the operation is idempotent.
    /// Hours missing from `desired_hours` are disabled in place, never
    /// deleted, and no record is created for an hour that was never
    /// bookable.
    ///
    /// A storage failure aborts the walk; hours already written stay
    /// applied and a retry converges on the same final state. Slots of
    /// other dates are never touched.
    pub fn reconcile(&self, date: NaiveDate, desired_hours: &[u32]) -> Result<(), Error> {
        let desired: HashSet<u32> = desired_hours.iter().copied().collect();
        for &hour in &desired {
            if !self.working_hours.contains(&hour) {
                return Err(Error::HourOutOfRange {
                    hour,
                    min: *self.working_hours.start(),
                    max: *self.working_hours.end(),
                });
            }
        }

        // One full scan up front; each hour then decides locally.
        let existing: HashMap<String, Slot> = self
            .store
            .list_slots()?
            .into_iter()
            .filter(|slot| slot.date == date)
            .map(|slot| (slot.time.clone(), slot))
            .collect();

        let (mut created, mut enabled, mut disabled) = (0u32, 0u32, 0u32);
        for hour in self.working_hours.clone() {
            let time = hour_to_time(hour);
            let wanted = desired.contains(&hour);
            match existing.get(&time) {
                None if wanted => {
                    self.store.create_slot(SlotDraft {
                        date,
                        time,
                        bookable: true,
                    })?;
                    created += 1;
                }
                Some(slot) if wanted && !slot.bookable => {
                    self.store.update_slot(slot.id, true)?;
                    enabled += 1;
                }
                Some(slot) if !wanted && slot.bookable => {
                    self.store.update_slot(slot.id, false)?;
                    disabled += 1;
                }
                _ => {}
            }
        }

        if created + enabled + disabled == 0 {
            tracing::debug!(%date, "availability already in sync");
        } else {
            tracing::info!(%date, created, enabled, disabled, "availability reconciled");
        }
        Ok(())
    }
}
