use super::IGuestNotificationRepo;
use crate::repos::guest::InMemoryGuestRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use staywatch_domain::{GuestNotification, ID};
use std::sync::{Arc, Mutex};

pub struct InMemoryGuestNotificationRepo {
    notifications: Mutex<Vec<GuestNotification>>,
    guests: Arc<InMemoryGuestRepo>,
}

impl InMemoryGuestNotificationRepo {
    pub fn new(guests: Arc<InMemoryGuestRepo>) -> Self {
        Self {
            notifications: Mutex::new(Vec::new()),
            guests,
        }
    }
}

#[async_trait::async_trait]
impl IGuestNotificationRepo for InMemoryGuestNotificationRepo {
    async fn reserve(&self, notification: &GuestNotification) -> anyhow::Result<bool> {
        let mut notifications = self.notifications.lock().unwrap();
        // Under the lock, so a guest being deleted cannot get a reservation left behind
        if !self.guests.exists(&notification.guest_id) {
            return Err(anyhow::Error::msg(format!(
                "Guest {} does not exist",
                notification.guest_id
            )));
        }
        if notifications
            .iter()
            .any(|n| n.guest_id == notification.guest_id && n.period == notification.period)
        {
            return Ok(false);
        }
        notifications.push(notification.clone());
        Ok(true)
    }

    async fn find_by_guest(&self, guest_id: &ID) -> anyhow::Result<Vec<GuestNotification>> {
        let mut notifications = find_by(&self.notifications, |n| n.guest_id == *guest_id);
        notifications.sort_by_key(|n| n.period);
        Ok(notifications)
    }

    async fn delete_by_guest(&self, guest_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.notifications, |n| n.guest_id == *guest_id))
    }
}
