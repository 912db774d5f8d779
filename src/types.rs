use chrono::{DateTime, NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

lazy_static! {
    /// Times are exchanged as full-hour strings, e.g. "09:00".
    pub static ref TIME_RE: Regex = Regex::new(r"^([01][0-9]|2[0-3]):00$").unwrap();
}

/// A persisted availability record for one (date, hour) pair.
///
/// The (date, time) pair is the natural key; `id` only addresses the
/// record in storage. Disabling sets `bookable = false`, the record is
/// never deleted through the normal flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub bookable: bool,
}

/// An unpersisted slot payload. Only ever handed to `create_slot`;
/// never conflated with a stored [`Slot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotDraft {
    pub date: NaiveDate,
    pub time: String,
    pub bookable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

/// Customer-supplied booking data, before persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: String,
    pub notes: Option<String>,
}

/// A persisted appointment. This core only ever creates them with
/// status `pending`; confirmation and cancellation happen in admin
/// tooling elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: String,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub fn hour_to_time(hour: u32) -> String {
    format!("{hour:02}:00")
}

pub fn time_to_hour(time: &str) -> Option<u32> {
    if !TIME_RE.is_match(time) {
        return None;
    }
    time[..2].parse().ok()
}
