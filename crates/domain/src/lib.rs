mod billing;
mod date;
mod guest;
mod reminder;
mod shared;

pub use billing::{format_minor_units, periods_elapsed, BILLING_PERIOD_DAYS};
pub use date::{format_date, parse_check_in_date};
pub use guest::{Guest, MalformedGuest};
pub use reminder::{BillingReminder, GuestNotification};
pub use shared::entity::{Entity, InvalidIDError, ID};
