pub mod send_billing_reminders;
