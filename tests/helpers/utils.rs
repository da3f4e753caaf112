use chrono::{DateTime, Duration, Utc};
use staywatch_sdk::{CreateGuestInput, Guest};

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    // https://docs.rs/chrono/0.4.19/chrono/format/strftime/index.html
    // 2001-07-08
    dt.format("%F").to_string()
}

pub fn guest_input(name: &str, days_ago: i64) -> CreateGuestInput {
    CreateGuestInput {
        name: name.into(),
        room: "12B".into(),
        daily_rate: 8950,
        check_in_date: format_datetime(&(Utc::now() - Duration::days(days_ago))),
        contact: format!("{}@example.com", name.to_lowercase()),
    }
}

pub fn assert_equal_guest_lists(guests1: &[Guest], guests2: &[Guest]) {
    assert_eq!(guests1.len(), guests2.len());
    let mut guests1 = guests1.to_vec();
    guests1.sort_by_key(|g| g.id.to_string());
    let mut guests2 = guests2.to_vec();
    guests2.sort_by_key(|g| g.id.to_string());
    for (guest1, guest2) in guests1.iter().zip(guests2) {
        assert_eq!(guest1.id, guest2.id);
    }
}
