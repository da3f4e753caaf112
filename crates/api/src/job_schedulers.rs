use crate::{
    billing_reminder::send_billing_reminders::{
        CycleReport, SendBillingRemindersTrigger, SendBillingRemindersUseCase, UseCaseError,
    },
    shared::usecase::execute,
};
use staywatch_infra::StaywatchContext;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

/// Runs a billing reminders cycle on a fixed interval for as long as it
/// is not stopped. The first cycle runs right after `start`.
#[derive(Clone)]
pub struct BillingReminderScheduler {
    ctx: StaywatchContext,
    shutdown: Arc<Notify>,
}

impl BillingReminderScheduler {
    pub fn new(ctx: StaywatchContext) -> Self {
        Self {
            ctx,
            shutdown: Arc::new(Notify::new()),
        }
    }

    pub fn start(&self) -> JoinHandle<()> {
        let scheduler = self.clone();
        let period = self
            .ctx
            .config
            .billing_reminders_interval
            .max(Duration::from_secs(1));

        actix_web::rt::spawn(async move {
            let mut interval = interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = scheduler.shutdown.notified() => break,
                    _ = interval.tick() => (),
                }
                // Not raced against shutdown so that a started cycle always completes
                let _ = scheduler.run_cycle().await;
            }
            info!("Billing reminders job scheduler stopped");
        })
    }

    /// Runs one cycle right away, independent of the interval
    pub async fn run_cycle(&self) -> Result<CycleReport, UseCaseError> {
        let usecase = SendBillingRemindersUseCase {
            trigger: SendBillingRemindersTrigger::JobScheduler,
        };
        execute(usecase, &self.ctx).await
    }

    /// Stops waiting for the next tick. A cycle that is in progress is finished
    /// before the task returned by `start` completes.
    pub fn stop(&self) {
        self.shutdown.notify_one();
    }
}
