mod guest;
mod guest_notification;
mod shared;

pub use guest::IGuestRepo;
use guest::{InMemoryGuestRepo, PostgresGuestRepo};
pub use guest_notification::IGuestNotificationRepo;
use guest_notification::{InMemoryGuestNotificationRepo, PostgresGuestNotificationRepo};
pub use shared::repo::DeleteResult;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub guests: Arc<dyn IGuestRepo>,
    pub guest_notifications: Arc<dyn IGuestNotificationRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        info!("DB EXECUTING MIGRATION ...");
        sqlx::migrate!().run(&pool).await?;
        info!("DB EXECUTING MIGRATION ... [done]");

        Ok(Self {
            guests: Arc::new(PostgresGuestRepo::new(pool.clone())),
            guest_notifications: Arc::new(PostgresGuestNotificationRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        let guests = Arc::new(InMemoryGuestRepo::new());
        Self {
            guest_notifications: Arc::new(InMemoryGuestNotificationRepo::new(guests.clone())),
            guests,
        }
    }
}
