use chrono::prelude::*;

/// Parses a check-in date on the form `YYYY-MM-DD` and returns
/// midnight UTC of that day.
pub fn parse_check_in_date(datestr: &str) -> anyhow::Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(datestr.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::Error::msg(datestr.to_string()))?;

    if !(1970..=2100).contains(&date.year()) {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }

    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow::Error::msg(datestr.to_string()))?;
    Ok(Utc.from_utc_datetime(&midnight))
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%F").to_string()
}
