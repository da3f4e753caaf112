mod brevo;

pub use brevo::BrevoEmailNotifier;

/// Channel delivering a message to the manager.
///
/// A call may be slow or fail transiently, callers decide how long to wait
/// and whether to retry.
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    async fn send(&self, subject: &str, body: &str) -> anyhow::Result<()>;
}

/// Used when no channel is configured, every send fails
pub struct DisabledNotifier {
    pub reason: String,
}

#[async_trait::async_trait]
impl INotifier for DisabledNotifier {
    async fn send(&self, _subject: &str, _body: &str) -> anyhow::Result<()> {
        Err(anyhow::Error::msg(self.reason.clone()))
    }
}
