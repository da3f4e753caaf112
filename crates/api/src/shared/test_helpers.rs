use chrono::{DateTime, Duration, TimeZone, Utc};
use staywatch_domain::Guest;
use staywatch_infra::{Config, INotifier, ISys, StaywatchContext};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

/// Sun Feb 21 2021 00:00:00 UTC
pub const NOW_MILLIS: i64 = 1613865600000;

pub struct StaticTimeSys(pub i64);
impl ISys for StaticTimeSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.0
    }
}

pub fn now() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(NOW_MILLIS).unwrap()
}

/// Remembers every message and fails on demand
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
    pub failing: AtomicBool,
}

impl RecordingNotifier {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

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
impl INotifier for RecordingNotifier {
    async fn send(&self, subject: &str, body: &str) -> anyhow::Result<()> {
        // Give concurrently running cycles the chance to interleave
        tokio::task::yield_now().await;
        if self.failing.load(Ordering::SeqCst) {
            return Err(anyhow::Error::msg("channel unavailable"));
        }
        self.sent
            .lock()
            .unwrap()
            .push((subject.to_string(), body.to_string()));
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        port: 0,
        database_url: None,
        billing_reminders_interval: std::time::Duration::from_secs(60 * 60),
        notification_timeout: std::time::Duration::from_secs(5),
        email: None,
    }
}

pub fn setup_context(notifier: Arc<dyn INotifier>) -> StaywatchContext {
    let mut ctx = StaywatchContext::create_inmemory(test_config(), notifier);
    ctx.sys = Arc::new(StaticTimeSys(NOW_MILLIS));
    ctx
}

pub fn guest_checked_in_days_ago(name: &str, days: i64) -> Guest {
    Guest::new(
        name.into(),
        "12B".into(),
        8950,
        now() - Duration::days(days),
        format!("{}@example.com", name.to_lowercase()),
    )
}
