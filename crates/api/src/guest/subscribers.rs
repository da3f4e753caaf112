use super::create_guest::CreateGuestUseCase;
use crate::billing_reminder::send_billing_reminders::{
    SendBillingRemindersTrigger, SendBillingRemindersUseCase,
};
use crate::shared::usecase::{execute, Subscriber};
use staywatch_domain::Guest;
use staywatch_infra::StaywatchContext;

pub struct SendBillingRemindersOnGuestCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateGuestUseCase> for SendBillingRemindersOnGuestCreated {
    async fn notify(&self, guest: &Guest, ctx: &StaywatchContext) {
        let send_billing_reminders = SendBillingRemindersUseCase {
            trigger: SendBillingRemindersTrigger::GuestCreated(guest.id.clone()),
        };

        // Sideeffect, ignore result
        let _ = execute(send_billing_reminders, ctx).await;
    }
}
