mod inmemory;
mod postgres;

use crate::repos::shared::repo::DeleteResult;
pub use inmemory::InMemoryGuestNotificationRepo;
pub use postgres::PostgresGuestNotificationRepo;
use staywatch_domain::{GuestNotification, ID};

#[async_trait::async_trait]
pub trait IGuestNotificationRepo: Send + Sync {
    /// Claims the (`guest_id`, `period`) pair of the given `GuestNotification`.
    ///
    /// Returns `true` if this call created the record and `false` if a record for
    /// the pair already existed. Only one of any number of concurrent callers
    /// for the same pair can observe `true`.
    async fn reserve(&self, notification: &GuestNotification) -> anyhow::Result<bool>;
    async fn find_by_guest(&self, guest_id: &ID) -> anyhow::Result<Vec<GuestNotification>>;
    async fn delete_by_guest(&self, guest_id: &ID) -> anyhow::Result<DeleteResult>;
}

#[cfg(test)]
mod tests {
    use crate::repos::Repos;
    use chrono::{TimeZone, Utc};
    use futures::future::join_all;
    use staywatch_domain::{Guest, GuestNotification};

    async fn insert_guest(repos: &Repos) -> Guest {
        let guest = Guest::new(
            "Ada".into(),
            "12B".into(),
            8950,
            Utc.with_ymd_and_hms(2021, 2, 21, 0, 0, 0).unwrap(),
            "guest@example.com".into(),
        );
        repos.guests.insert(&guest).await.expect("To insert guest");
        guest
    }

    async fn reserve_is_unique_per_guest_and_period(repos: Repos) {
        let guest = insert_guest(&repos).await;
        let now = Utc::now();

        let week1 = GuestNotification::new(guest.id.clone(), 1, now);
        assert!(repos.guest_notifications.reserve(&week1).await.unwrap());
        assert!(!repos.guest_notifications.reserve(&week1).await.unwrap());

        let week2 = GuestNotification::new(guest.id.clone(), 2, now);
        assert!(repos.guest_notifications.reserve(&week2).await.unwrap());

        let periods = repos
            .guest_notifications
            .find_by_guest(&guest.id)
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.period)
            .collect::<Vec<_>>();
        assert_eq!(periods, vec![1, 2]);

        let res = repos
            .guest_notifications
            .delete_by_guest(&guest.id)
            .await
            .unwrap();
        assert_eq!(res.deleted_count, 2);
        assert!(repos
            .guest_notifications
            .find_by_guest(&guest.id)
            .await
            .unwrap()
            .is_empty());
    }

    async fn concurrent_reservations_have_one_winner(repos: Repos) {
        let guest = insert_guest(&repos).await;
        let notification = GuestNotification::new(guest.id.clone(), 3, Utc::now());

        let attempts = (0..8)
            .map(|_| repos.guest_notifications.reserve(&notification))
            .collect::<Vec<_>>();
        let winners = join_all(attempts)
            .await
            .into_iter()
            .filter(|res| matches!(res, Ok(true)))
            .count();
        assert_eq!(winners, 1);
    }

    async fn reserve_for_deleted_guest_is_refused(repos: Repos) {
        let guest = insert_guest(&repos).await;
        repos.guests.delete(&guest.id).await.expect("To delete guest");

        let notification = GuestNotification::new(guest.id.clone(), 1, Utc::now());
        assert!(repos.guest_notifications.reserve(&notification).await.is_err());
        assert!(repos
            .guest_notifications
            .find_by_guest(&guest.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_inmemory_reservations() {
        reserve_is_unique_per_guest_and_period(Repos::create_inmemory()).await;
        concurrent_reservations_have_one_winner(Repos::create_inmemory()).await;
        reserve_for_deleted_guest_is_refused(Repos::create_inmemory()).await;
    }

    async fn postgres_repos() -> Repos {
        let connection_string = std::env::var("DATABASE_URL").expect("DATABASE_URL to be set");
        Repos::create_postgres(&connection_string)
            .await
            .expect("To connect to postgres")
    }

    #[tokio::test]
    #[ignore = "requires a postgres database at DATABASE_URL"]
    async fn test_postgres_reservations() {
        reserve_is_unique_per_guest_and_period(postgres_repos().await).await;
        concurrent_reservations_have_one_winner(postgres_repos().await).await;
        reserve_for_deleted_guest_is_refused(postgres_repos().await).await;
    }

    #[tokio::test]
    #[ignore = "requires a postgres database at DATABASE_URL"]
    async fn test_postgres_deleting_guest_cascades_to_notifications() {
        let repos = postgres_repos().await;
        let guest = insert_guest(&repos).await;
        let notification = GuestNotification::new(guest.id.clone(), 1, Utc::now());
        assert!(repos.guest_notifications.reserve(&notification).await.unwrap());

        let deleted = repos.guests.delete(&guest.id).await.expect("To delete guest");
        assert!(deleted.is_some());
        assert!(repos
            .guest_notifications
            .find_by_guest(&guest.id)
            .await
            .unwrap()
            .is_empty());
    }
}
