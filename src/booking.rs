use crate::error::Error;
use crate::store::SlotStore;
use crate::types::{time_to_hour, AppointmentDraft};
use chrono::{Local, NaiveDate};
use uuid::Uuid;

/// Customer-facing view of the calendar: which hours can still be
/// booked, and the act of booking one.
#[derive(Debug, Clone)]
pub struct BookingGateway<T: SlotStore> {
    store: T,
}

impl<T: SlotStore> BookingGateway<T> {
    pub fn new(store: T) -> Self {
        Self { store }
    }

    /// The bookable hours of `date`, ascending and deduplicated.
    /// Dates that have already passed yield an empty list.
    pub fn list_bookable_hours(&self, date: NaiveDate) -> Result<Vec<u32>, Error> {
        self.bookable_hours_on(date, Local::now().date_naive())
    }

    /// Same as [`list_bookable_hours`](Self::list_bookable_hours) with
    /// "today" injected, so callers and tests control the clock. The
    /// current day itself still counts as bookable.
    pub fn bookable_hours_on(&self, date: NaiveDate, today: NaiveDate) -> Result<Vec<u32>, Error> {
        if date < today {
            return Ok(Vec::new());
        }

        let mut hours: Vec<u32> = self
            .store
            .list_slots()?
            .into_iter()
            .filter(|slot| slot.date == date && slot.bookable)
            .filter_map(|slot| time_to_hour(&slot.time))
            .collect();
        hours.sort_unstable();
        hours.dedup();
        Ok(hours)
    }

    /// Creates a pending appointment for the given contact and
    /// (date, time) pair and returns its id.
    ///
    /// The slot itself is left untouched: booking does not consume
    /// availability, so two customers can book the same hour and an
    /// admin resolves the conflict out of band. The caller is trusted
    /// to have picked the time from a fresh
    /// [`list_bookable_hours`](Self::list_bookable_hours) result.
    pub fn book(&self, draft: AppointmentDraft) -> Result<Uuid, Error> {
        if time_to_hour(&draft.time).is_none() {
            return Err(Error::InvalidTime(draft.time.clone()));
        }

        let id = self.store.create_appointment(draft)?;
        tracing::info!(%id, "appointment created");
        Ok(id)
    }
}
