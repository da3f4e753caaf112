use super::IGuestRepo;
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, types::Uuid, FromRow, PgPool, Row};
use staywatch_domain::{Guest, MalformedGuest, ID};
use std::convert::TryFrom;
use tracing::error;

pub struct PostgresGuestRepo {
    pool: PgPool,
}

impl PostgresGuestRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GuestRaw {
    guest_uid: Uuid,
    name: String,
    room: String,
    daily_rate: i64,
    check_in: DateTime<Utc>,
    contact: String,
}

impl TryFrom<GuestRaw> for Guest {
    type Error = MalformedGuest;

    fn try_from(raw: GuestRaw) -> Result<Self, Self::Error> {
        if raw.daily_rate < 0 {
            return Err(MalformedGuest {
                guest_id: Some(raw.guest_uid.to_string()),
                reason: format!("negative daily rate: {}", raw.daily_rate),
            });
        }

        Ok(Guest {
            id: raw.guest_uid.into(),
            name: raw.name,
            room: raw.room,
            daily_rate: raw.daily_rate,
            check_in: raw.check_in,
            contact: raw.contact,
        })
    }
}

/// Decodes a single row so that one bad row only affects itself
fn decode_guest_row(row: &PgRow) -> Result<Guest, MalformedGuest> {
    match GuestRaw::from_row(row) {
        Ok(raw) => Guest::try_from(raw),
        Err(e) => Err(MalformedGuest {
            guest_id: row
                .try_get::<Uuid, _>("guest_uid")
                .ok()
                .map(|id| id.to_string()),
            reason: e.to_string(),
        }),
    }
}

#[async_trait::async_trait]
impl IGuestRepo for PostgresGuestRepo {
    async fn insert(&self, guest: &Guest) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO guests(guest_uid, name, room, daily_rate, check_in, contact)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(guest.id.inner_ref())
        .bind(&guest.name)
        .bind(&guest.room)
        .bind(guest.daily_rate)
        .bind(guest.check_in)
        .bind(&guest.contact)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, guest_id: &ID) -> Option<Guest> {
        let row = match sqlx::query(
            r#"
            SELECT * FROM guests AS g
            WHERE g.guest_uid = $1
            "#,
        )
        .bind(guest_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        {
            Ok(row) => row?,
            Err(e) => {
                error!("Unable to find guest {}: {:?}", guest_id, e);
                return None;
            }
        };
        decode_guest_row(&row).ok()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Result<Guest, MalformedGuest>>> {
        let rows = sqlx::query(
            r#"
            SELECT * FROM guests AS g
            ORDER BY g.check_in
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(decode_guest_row).collect())
    }

    async fn delete(&self, guest_id: &ID) -> anyhow::Result<Option<Result<Guest, MalformedGuest>>> {
        let row = sqlx::query(
            r#"
            DELETE FROM guests AS g
            WHERE g.guest_uid = $1
            RETURNING *
            "#,
        )
        .bind(guest_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| decode_guest_row(&row)))
    }
}
