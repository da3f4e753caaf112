use crate::dtos::GuestDTO;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use staywatch_domain::{Guest, ID};

#[derive(Debug, Deserialize, Serialize)]
pub struct GuestResponse {
    pub guest: GuestDTO,
}

impl GuestResponse {
    pub fn new(guest: Guest, now: DateTime<Utc>) -> Self {
        Self {
            guest: GuestDTO::new(guest, now),
        }
    }
}

pub mod create_guest {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub name: String,
        pub room: String,
        pub daily_rate: i64,
        /// Date on the form `YYYY-MM-DD`
        pub check_in_date: String,
        pub contact: String,
    }

    pub type APIResponse = GuestResponse;
}

pub mod get_guests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub guests: Vec<GuestDTO>,
    }

    impl APIResponse {
        pub fn new(guests: Vec<Guest>, now: DateTime<Utc>) -> Self {
            Self {
                guests: guests.into_iter().map(|g| GuestDTO::new(g, now)).collect(),
            }
        }
    }
}

pub mod delete_guest {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub guest_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub guest_id: ID,
        /// `None` if the stored record of the guest was unreadable
        pub guest: Option<GuestDTO>,
    }

    impl APIResponse {
        pub fn new(guest_id: ID, guest: Option<Guest>, now: DateTime<Utc>) -> Self {
            Self {
                guest_id,
                guest: guest.map(|g| GuestDTO::new(g, now)),
            }
        }
    }
}
