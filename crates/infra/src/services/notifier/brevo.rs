use super::INotifier;
use crate::config::EmailConfig;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct BrevoAddress<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoEmailPayload<'a> {
    sender: BrevoAddress<'a>,
    to: Vec<BrevoAddress<'a>>,
    subject: &'a str,
    text_content: &'a str,
}

/// Sends plain text emails through the Brevo transactional email api
pub struct BrevoEmailNotifier {
    client: Client,
    config: EmailConfig,
}

impl BrevoEmailNotifier {
    pub fn new(config: EmailConfig, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait::async_trait]
impl INotifier for BrevoEmailNotifier {
    async fn send(&self, subject: &str, body: &str) -> anyhow::Result<()> {
        let payload = BrevoEmailPayload {
            sender: BrevoAddress {
                email: &self.config.from,
            },
            to: vec![BrevoAddress {
                email: &self.config.to,
            }],
            subject,
            text_content: body,
        };

        let res = self
            .client
            .post(&self.config.api_url)
            .header("Accept", "application/json")
            .header("api-key", &self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if status.as_u16() >= 300 {
            return Err(anyhow::Error::msg(format!("brevo send failed: {}", status)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, web, App, HttpRequest, HttpResponse, HttpServer};
    use std::net::TcpListener;
    use std::sync::{Arc, Mutex};

    /// Stand-in for the Brevo api answering every email with `status`
    struct FakeBrevo {
        status: StatusCode,
        received: Mutex<Vec<(Option<String>, serde_json::Value)>>,
    }

    async fn receive_email(
        req: HttpRequest,
        body: web::Json<serde_json::Value>,
        brevo: web::Data<FakeBrevo>,
    ) -> HttpResponse {
        let api_key = req
            .headers()
            .get("api-key")
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        brevo
            .received
            .lock()
            .unwrap()
            .push((api_key, body.into_inner()));
        HttpResponse::build(brevo.status).finish()
    }

    fn spawn_fake_brevo(status: StatusCode) -> (Arc<FakeBrevo>, String) {
        let brevo = Arc::new(FakeBrevo {
            status,
            received: Mutex::new(Vec::new()),
        });
        let listener = TcpListener::bind("127.0.0.1:0").expect("To bind random port");
        let port = listener.local_addr().unwrap().port();

        let data = web::Data::from(brevo.clone());
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .route("/v3/smtp/email", web::post().to(receive_email))
        })
        .listen(listener)
        .expect("To listen")
        .workers(1)
        .run();
        actix_web::rt::spawn(server);

        (brevo, format!("http://127.0.0.1:{}/v3/smtp/email", port))
    }

    fn notifier(api_url: String) -> BrevoEmailNotifier {
        let config = EmailConfig {
            api_key: "key".into(),
            api_url,
            from: "hotel@example.com".into(),
            to: "manager@example.com".into(),
        };
        BrevoEmailNotifier::new(config, Duration::from_secs(5)).expect("To build client")
    }

    #[actix_web::main]
    #[test]
    async fn accepted_email_is_a_successful_send() {
        let (brevo, api_url) = spawn_fake_brevo(StatusCode::CREATED);

        assert!(notifier(api_url).send("Hi", "Body").await.is_ok());

        let received = brevo.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        let (api_key, body) = &received[0];
        assert_eq!(api_key.as_deref(), Some("key"));
        assert_eq!(
            body,
            &serde_json::json!({
                "sender": { "email": "hotel@example.com" },
                "to": [{ "email": "manager@example.com" }],
                "subject": "Hi",
                "textContent": "Body"
            })
        );
    }

    #[actix_web::main]
    #[test]
    async fn rejected_email_is_a_failed_send() {
        let (brevo, api_url) = spawn_fake_brevo(StatusCode::BAD_REQUEST);

        assert!(notifier(api_url).send("Hi", "Body").await.is_err());
        assert_eq!(brevo.received.lock().unwrap().len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn redirect_is_a_failed_send() {
        let (_, api_url) = spawn_fake_brevo(StatusCode::MULTIPLE_CHOICES);

        assert!(notifier(api_url).send("Hi", "Body").await.is_err());
    }

    #[test]
    fn payload_matches_brevo_schema() {
        let payload = BrevoEmailPayload {
            sender: BrevoAddress {
                email: "hotel@example.com",
            },
            to: vec![BrevoAddress {
                email: "manager@example.com",
            }],
            subject: "Hi",
            text_content: "Body",
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sender": { "email": "hotel@example.com" },
                "to": [{ "email": "manager@example.com" }],
                "subject": "Hi",
                "textContent": "Body"
            })
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_failed_send() {
        let config = EmailConfig {
            api_key: "key".into(),
            // Port 9 (discard) on localhost is not expected to accept http
            api_url: "http://127.0.0.1:9/v3/smtp/email".into(),
            from: "hotel@example.com".into(),
            to: "manager@example.com".into(),
        };
        let notifier =
            BrevoEmailNotifier::new(config, Duration::from_secs(2)).expect("To build client");
        assert!(notifier.send("Hi", "Body").await.is_err());
    }
}
