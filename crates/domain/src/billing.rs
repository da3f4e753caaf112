use chrono::{DateTime, Utc};

/// Number of days in one billing period
pub const BILLING_PERIOD_DAYS: i64 = 7;

/// Number of complete billing periods between `check_in` and `now`.
///
/// Partial days are truncated, so a guest who checked in 6 days and 23 hours
/// ago has not completed a period yet. A `now` before `check_in` yields 0.
pub fn periods_elapsed(check_in: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    if now < check_in {
        return 0;
    }

    let whole_days = now.signed_duration_since(check_in).num_days();
    whole_days / BILLING_PERIOD_DAYS
}

/// Formats an amount in minor currency units, e.g. `12050` as `120.50`
pub fn format_minor_units(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let amount = amount.abs();
    format!("{}{}.{:02}", sign, amount / 100, amount % 100)
}
