mod inmemory;
mod postgres;

pub use inmemory::InMemoryGuestRepo;
pub use postgres::PostgresGuestRepo;
use staywatch_domain::{Guest, MalformedGuest, ID};

#[async_trait::async_trait]
pub trait IGuestRepo: Send + Sync {
    async fn insert(&self, guest: &Guest) -> anyhow::Result<()>;
    async fn find(&self, guest_id: &ID) -> Option<Guest>;
    /// Every guest currently checked in.
    ///
    /// A stored record that cannot be decoded is returned as `Err(MalformedGuest)`
    /// in its slot instead of failing the whole listing.
    async fn find_all(&self) -> anyhow::Result<Vec<Result<Guest, MalformedGuest>>>;
    /// Removes the guest and hands back the record as it was stored.
    ///
    /// `Ok(None)` means there was no such guest. A record that is removed but
    /// cannot be decoded is returned as `Err(MalformedGuest)`.
    async fn delete(&self, guest_id: &ID) -> anyhow::Result<Option<Result<Guest, MalformedGuest>>>;
}

#[cfg(test)]
mod tests {
    use crate::repos::Repos;
    use chrono::{TimeZone, Utc};
    use staywatch_domain::Guest;

    fn guest_factory(name: &str) -> Guest {
        Guest::new(
            name.into(),
            "12B".into(),
            8950,
            Utc.with_ymd_and_hms(2021, 2, 21, 0, 0, 0).unwrap(),
            "guest@example.com".into(),
        )
    }

    async fn insert_find_and_delete(repos: Repos) {
        let guest = guest_factory("Ada");
        repos.guests.insert(&guest).await.expect("To insert guest");

        let found = repos.guests.find(&guest.id).await.expect("To find guest");
        assert_eq!(found, guest);

        let all = repos.guests.find_all().await.expect("To list guests");
        assert!(all
            .iter()
            .any(|g| matches!(g, Ok(g) if g.id == guest.id)));

        let deleted = repos
            .guests
            .delete(&guest.id)
            .await
            .expect("To delete")
            .expect("Guest to exist")
            .expect("Guest to decode");
        assert_eq!(deleted.id, guest.id);
        assert!(repos.guests.find(&guest.id).await.is_none());
        assert!(repos.guests.delete(&guest.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_inmemory_guest_repo() {
        insert_find_and_delete(Repos::create_inmemory()).await;
    }

    #[tokio::test]
    #[ignore = "requires a postgres database at DATABASE_URL"]
    async fn test_postgres_guest_repo() {
        let connection_string = std::env::var("DATABASE_URL").expect("DATABASE_URL to be set");
        let repos = Repos::create_postgres(&connection_string)
            .await
            .expect("To connect to postgres");
        insert_find_and_delete(repos).await;
    }
}
