use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use staywatch_domain::{Guest, ID};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GuestDTO {
    pub id: ID,
    pub name: String,
    pub room: String,
    pub daily_rate: i64,
    pub check_in: DateTime<Utc>,
    pub contact: String,
    pub weeks_stayed: i64,
}

impl GuestDTO {
    pub fn new(guest: Guest, now: DateTime<Utc>) -> Self {
        Self {
            weeks_stayed: guest.weeks_stayed(now),
            id: guest.id,
            name: guest.name,
            room: guest.room,
            daily_rate: guest.daily_rate,
            check_in: guest.check_in,
            contact: guest.contact,
        }
    }
}
