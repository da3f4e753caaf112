use crate::{billing::format_minor_units, guest::Guest, shared::entity::ID};
use chrono::{DateTime, Utc};

/// A `GuestNotification` is the proof that the billing reminder for the
/// given `period` of a `Guest` has been claimed by a dispatch cycle.
///
/// There is at most one `GuestNotification` per (`guest_id`, `period`) and
/// it is never updated. It is removed together with its `Guest`.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestNotification {
    pub guest_id: ID,
    /// Complete billing periods the guest had stayed when it was created
    pub period: i64,
    pub sent_at: DateTime<Utc>,
}

impl GuestNotification {
    pub fn new(guest_id: ID, period: i64, sent_at: DateTime<Utc>) -> Self {
        Self {
            guest_id,
            period,
            sent_at,
        }
    }
}

/// The message sent to the manager when a `Guest` enters a new billing period
#[derive(Debug, Clone, PartialEq)]
pub struct BillingReminder {
    pub subject: String,
    pub body: String,
}

impl BillingReminder {
    pub const SUBJECT: &'static str = "Extended-Stay Guest Billing Reminder";

    pub fn new(guest: &Guest, period: i64) -> Self {
        let body = format!(
            "Weekly Billing Reminder for: \n{}\n\nRoom: {}\nWeeks Stayed: {}\nDaily Rate: ${}\nContact Information: {}\n",
            guest.name,
            guest.room,
            period,
            format_minor_units(guest.daily_rate),
            guest.contact,
        );

        Self {
            subject: Self::SUBJECT.to_string(),
            body,
        }
    }
}
