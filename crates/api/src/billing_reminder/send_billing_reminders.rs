use crate::shared::usecase::UseCase;
use chrono::{DateTime, Utc};
use staywatch_domain::{periods_elapsed, BillingReminder, Guest, GuestNotification, ID};
use staywatch_infra::StaywatchContext;
use tracing::{error, info, warn};

/// Sends the billing reminder of the current billing period to every
/// `Guest` that has not been notified for that period yet.
///
/// The (guest, period) pair is reserved in the store before the reminder is
/// sent. Whoever creates the reservation is the only one sending, so this
/// use case can run any number of times, also concurrently, without a
/// reminder being sent twice. A reservation is never released, not even when
/// sending fails, which means a failed reminder is not retried.
///
/// Only the current period of a guest is considered. Periods that were
/// passed entirely between two cycles are not back-filled.
#[derive(Debug)]
pub struct SendBillingRemindersUseCase {
    pub trigger: SendBillingRemindersTrigger,
}

#[derive(Debug)]
pub enum SendBillingRemindersTrigger {
    /// Periodic run by the billing reminders job scheduler
    JobScheduler,
    /// A `Guest` with the given id was just registered
    GuestCreated(ID),
}

/// Outcome of one dispatch cycle
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// Reminders that were reserved and sent in this cycle
    pub notified: usize,
    /// Guests with no period completed yet or which were already notified
    pub skipped: usize,
    /// Reminders that were reserved but could not be sent, or could not be reserved
    pub failed: usize,
    /// Guest records that could not be read
    pub malformed: usize,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[derive(Debug, PartialEq)]
enum GuestOutcome {
    NotDue,
    AlreadyNotified,
    Notified,
    Failed,
}

async fn send_guest_reminder(
    guest: &Guest,
    now: DateTime<Utc>,
    ctx: &StaywatchContext,
) -> GuestOutcome {
    let period = periods_elapsed(guest.check_in, now);
    if period < 1 {
        return GuestOutcome::NotDue;
    }

    let notification = GuestNotification::new(guest.id.clone(), period, now);
    match ctx.repos.guest_notifications.reserve(&notification).await {
        Ok(true) => (),
        Ok(false) => return GuestOutcome::AlreadyNotified,
        Err(e) => {
            error!(
                "Unable to reserve billing reminder for guest {} period {}: {:?}",
                guest.id, period, e
            );
            return GuestOutcome::Failed;
        }
    }

    let reminder = BillingReminder::new(guest, period);
    let send = ctx.notifier.send(&reminder.subject, &reminder.body);
    match tokio::time::timeout(ctx.config.notification_timeout, send).await {
        Ok(Ok(())) => GuestOutcome::Notified,
        Ok(Err(e)) => {
            error!(
                "Billing reminder for guest {} period {} failed to send: {:?}",
                guest.id, period, e
            );
            GuestOutcome::Failed
        }
        Err(_) => {
            error!(
                "Billing reminder for guest {} period {} timed out after {:?}",
                guest.id, period, ctx.config.notification_timeout
            );
            GuestOutcome::Failed
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendBillingRemindersUseCase {
    type Response = CycleReport;

    type Error = UseCaseError;

    const NAME: &'static str = "SendBillingReminders";

    async fn execute(&mut self, ctx: &StaywatchContext) -> Result<Self::Response, Self::Error> {
        if let SendBillingRemindersTrigger::GuestCreated(guest_id) = &self.trigger {
            info!("Running billing reminders cycle for new guest {}", guest_id);
        }

        // Every guest in this cycle is judged against the same instant
        let now = ctx.sys.get_datetime();

        let guests = ctx.repos.guests.find_all().await.map_err(|e| {
            error!("Unable to list guests, skipping billing reminders cycle: {:?}", e);
            UseCaseError::StorageError
        })?;

        let mut report = CycleReport::default();
        for guest in guests {
            let guest = match guest {
                Ok(guest) => guest,
                Err(e) => {
                    warn!("Skipping guest: {}", e);
                    report.malformed += 1;
                    continue;
                }
            };

            match send_guest_reminder(&guest, now, ctx).await {
                GuestOutcome::Notified => report.notified += 1,
                GuestOutcome::NotDue | GuestOutcome::AlreadyNotified => report.skipped += 1,
                GuestOutcome::Failed => report.failed += 1,
            }
        }

        info!(
            "Billing reminders cycle ({:?}) done: {} notified, {} skipped, {} failed, {} malformed",
            self.trigger, report.notified, report.skipped, report.failed, report.malformed
        );
        Ok(report)
    }
}
