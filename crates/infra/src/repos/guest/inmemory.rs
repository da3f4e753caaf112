use super::IGuestRepo;
use crate::repos::shared::inmemory_repo::*;
use staywatch_domain::{Guest, MalformedGuest, ID};
use std::sync::Mutex;

pub struct InMemoryGuestRepo {
    guests: Mutex<Vec<Guest>>,
}

impl InMemoryGuestRepo {
    pub fn new() -> Self {
        Self {
            guests: Mutex::new(Vec::new()),
        }
    }

    pub fn exists(&self, guest_id: &ID) -> bool {
        self.guests
            .lock()
            .unwrap()
            .iter()
            .any(|guest| guest.id == *guest_id)
    }
}

impl Default for InMemoryGuestRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IGuestRepo for InMemoryGuestRepo {
    async fn insert(&self, guest: &Guest) -> anyhow::Result<()> {
        insert(guest, &self.guests);
        Ok(())
    }

    async fn find(&self, guest_id: &ID) -> Option<Guest> {
        find(guest_id, &self.guests)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Result<Guest, MalformedGuest>>> {
        Ok(find_all(&self.guests).into_iter().map(Ok).collect())
    }

    async fn delete(&self, guest_id: &ID) -> anyhow::Result<Option<Result<Guest, MalformedGuest>>> {
        Ok(delete(guest_id, &self.guests).map(Ok))
    }
}
