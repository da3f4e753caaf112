use crate::{
    billing::periods_elapsed,
    shared::entity::{Entity, ID},
};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// An extended-stay `Guest` that is currently checked in and
/// billed per day.
#[derive(Debug, Clone, PartialEq)]
pub struct Guest {
    pub id: ID,
    /// Full name of the guest
    pub name: String,
    /// Room the guest is staying in. Free-form, e.g. "12B"
    pub room: String,
    /// Rate per day in minor currency units
    pub daily_rate: i64,
    /// Start of the stay. Billing periods are counted from here
    pub check_in: DateTime<Utc>,
    /// Email or phone number of the guest
    pub contact: String,
}

impl Guest {
    pub fn new(
        name: String,
        room: String,
        daily_rate: i64,
        check_in: DateTime<Utc>,
        contact: String,
    ) -> Self {
        Self {
            id: Default::default(),
            name,
            room,
            daily_rate,
            check_in,
            contact,
        }
    }

    /// Complete billing periods the guest has stayed as of `now`
    pub fn weeks_stayed(&self, now: DateTime<Utc>) -> i64 {
        periods_elapsed(self.check_in, now)
    }
}

impl Entity<ID> for Guest {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// A stored guest record that could not be decoded into a `Guest`
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Guest record `{}` is malformed: {}", .guest_id.as_deref().unwrap_or("<unknown>"), .reason)]
pub struct MalformedGuest {
    pub guest_id: Option<String>,
    pub reason: String,
}
