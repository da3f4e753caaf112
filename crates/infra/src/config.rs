use std::time::Duration;
use tracing::{info, warn};

/// Settings for the transactional email API used to deliver
/// billing reminders to the manager
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Secret key sent in the `api-key` header
    pub api_key: String,
    /// Endpoint that accepts the email payload
    pub api_url: String,
    /// Sender address
    pub from: String,
    /// Address of the manager receiving the reminders
    pub to: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Postgres connection string. The in-memory store is used when absent
    pub database_url: Option<String>,
    /// How often the billing reminders job runs a dispatch cycle
    pub billing_reminders_interval: Duration,
    /// Upper bound for a single call to the notification channel.
    /// A call that takes longer is treated as a failed send.
    pub notification_timeout: Duration,
    /// Email channel settings, `None` if not fully configured
    pub email: Option<EmailConfig>,
}

const DEFAULT_BREVO_API_URL: &str = "https://api.brevo.com/v3/smtp/email";

fn parse_env_or_default<T: std::str::FromStr>(key: &str, default: T) -> T
where
    T: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => match value.parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    key, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn new() -> Self {
        let port = parse_env_or_default("PORT", 5000usize);
        let billing_reminders_interval = Duration::from_secs(parse_env_or_default(
            "BILLING_REMINDERS_INTERVAL_SECS",
            60 * 60 * 24,
        ));
        let notification_timeout =
            Duration::from_secs(parse_env_or_default("NOTIFICATION_TIMEOUT_SECS", 10));

        let database_url = non_empty_env("DATABASE_URL");
        if database_url.is_none() {
            warn!("Did not find DATABASE_URL environment variable. Guests will only be stored in memory.");
        }

        Self {
            port,
            database_url,
            billing_reminders_interval,
            notification_timeout,
            email: Self::email_from_env(),
        }
    }

    fn email_from_env() -> Option<EmailConfig> {
        let api_key = non_empty_env("BREVO_API_KEY");
        let from = non_empty_env("EMAIL_FROM").or_else(|| non_empty_env("SMTP_EMAIL"));
        let to = non_empty_env("MANAGER_EMAIL");

        match (api_key, from, to) {
            (Some(api_key), Some(from), Some(to)) => {
                info!("Billing reminders will be emailed to: {}", to);
                Some(EmailConfig {
                    api_key,
                    api_url: non_empty_env("BREVO_API_URL")
                        .unwrap_or_else(|| DEFAULT_BREVO_API_URL.to_string()),
                    from,
                    to,
                })
            }
            _ => {
                warn!("BREVO_API_KEY, EMAIL_FROM and MANAGER_EMAIL must all be set to send billing reminders. Every reminder will fail to send.");
                None
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
