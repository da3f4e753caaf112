use staywatch_api::{Application, BillingReminderScheduler};
use staywatch_infra::{Config, INotifier, StaywatchContext};
use staywatch_sdk::StaywatchSDK;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Notification channel that keeps every message in memory
#[derive(Default)]
pub struct InMemoryNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
}

impl InMemoryNotifier {
    pub fn bodies(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(_, body)| body.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl INotifier for InMemoryNotifier {
    async fn send(&self, subject: &str, body: &str) -> anyhow::Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((subject.to_string(), body.to_string()));
        Ok(())
    }
}

pub struct TestApp {
    pub notifier: Arc<InMemoryNotifier>,
    pub scheduler: BillingReminderScheduler,
}

fn test_config() -> Config {
    Config {
        port: 0, // Random port
        database_url: None,
        billing_reminders_interval: Duration::from_secs(60 * 60),
        notification_timeout: Duration::from_secs(5),
        email: None,
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, StaywatchSDK, String) {
    let notifier = Arc::new(InMemoryNotifier::default());
    let ctx = StaywatchContext::create_inmemory(test_config(), notifier.clone());

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");
    let scheduler = application.scheduler();

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp {
        notifier,
        scheduler,
    };
    let sdk = StaywatchSDK::new(address.clone());
    (app, sdk, address)
}
