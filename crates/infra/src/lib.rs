mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, EmailConfig};
pub use repos::{DeleteResult, IGuestNotificationRepo, IGuestRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys};
use tracing::error;

#[derive(Clone)]
pub struct StaywatchContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifier: Arc<dyn INotifier>,
}

impl StaywatchContext {
    async fn create(config: Config) -> Self {
        let repos = match &config.database_url {
            Some(connection_string) => Repos::create_postgres(connection_string)
                .await
                .expect("Postgres credentials must be valid"),
            None => Repos::create_inmemory(),
        };
        let notifier = create_notifier(&config);
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            notifier,
        }
    }

    /// Context with in-memory repos that is useful for testing
    pub fn create_inmemory(config: Config, notifier: Arc<dyn INotifier>) -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config,
            sys: Arc::new(RealSys {}),
            notifier,
        }
    }
}

fn create_notifier(config: &Config) -> Arc<dyn INotifier> {
    let reason = match &config.email {
        Some(email) => match BrevoEmailNotifier::new(email.clone(), config.notification_timeout) {
            Ok(notifier) => return Arc::new(notifier),
            Err(e) => {
                error!("Unable to create the email client: {:?}", e);
                format!("email client could not be created: {}", e)
            }
        },
        None => "email channel is not configured".to_string(),
    };
    Arc::new(DisabledNotifier { reason })
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> StaywatchContext {
    StaywatchContext::create(Config::new()).await
}
