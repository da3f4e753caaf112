use super::IGuestNotificationRepo;
use crate::repos::shared::repo::DeleteResult;
use chrono::{DateTime, Utc};
use sqlx::{types::Uuid, FromRow, PgPool};
use staywatch_domain::{GuestNotification, ID};

pub struct PostgresGuestNotificationRepo {
    pool: PgPool,
}

impl PostgresGuestNotificationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GuestNotificationRaw {
    guest_uid: Uuid,
    period: i64,
    sent_at: DateTime<Utc>,
}

impl From<GuestNotificationRaw> for GuestNotification {
    fn from(raw: GuestNotificationRaw) -> Self {
        GuestNotification {
            guest_id: raw.guest_uid.into(),
            period: raw.period,
            sent_at: raw.sent_at,
        }
    }
}

#[async_trait::async_trait]
impl IGuestNotificationRepo for PostgresGuestNotificationRepo {
    async fn reserve(&self, notification: &GuestNotification) -> anyhow::Result<bool> {
        // The primary key on (guest_uid, period) makes the losing writer a no-op
        let res = sqlx::query(
            r#"
            INSERT INTO guest_notifications(guest_uid, period, sent_at)
            VALUES($1, $2, $3)
            ON CONFLICT (guest_uid, period) DO NOTHING
            "#,
        )
        .bind(notification.guest_id.inner_ref())
        .bind(notification.period)
        .bind(notification.sent_at)
        .execute(&self.pool)
        .await?;

        Ok(res.rows_affected() == 1)
    }

    async fn find_by_guest(&self, guest_id: &ID) -> anyhow::Result<Vec<GuestNotification>> {
        let notifications: Vec<GuestNotificationRaw> = sqlx::query_as(
            r#"
            SELECT * FROM guest_notifications AS n
            WHERE n.guest_uid = $1
            ORDER BY n.period
            "#,
        )
        .bind(guest_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications.into_iter().map(|n| n.into()).collect())
    }

    async fn delete_by_guest(&self, guest_id: &ID) -> anyhow::Result<DeleteResult> {
        let res = sqlx::query(
            r#"
            DELETE FROM guest_notifications AS n
            WHERE n.guest_uid = $1
            "#,
        )
        .bind(guest_id.inner_ref())
        .execute(&self.pool)
        .await?;

        Ok(DeleteResult {
            deleted_count: res.rows_affected() as i64,
        })
    }
}
