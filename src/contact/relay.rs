use std::{future::Future, time::Duration};

use http::header::{ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ContactFields;

const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";
const DEFAULT_FROM_NAME: &str = "Portfolio Contact Form";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Where and how contact messages are relayed.
///
/// The site is served as static files, so the endpoint and access key are
/// baked in at build time from `CONTACT_RELAY_ENDPOINT` / `CONTACT_RELAY_KEY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub access_key: String,
    pub from_name: String,
    /// How long the form waits before reporting a failure.
    pub timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: option_env!("CONTACT_RELAY_ENDPOINT")
                .unwrap_or(DEFAULT_ENDPOINT)
                .to_string(),
            access_key: option_env!("CONTACT_RELAY_KEY")
                .unwrap_or_default()
                .to_string(),
            from_name: DEFAULT_FROM_NAME.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl RelayConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = access_key.into();
        self
    }

    /// The relay refuses every message without an access key.
    pub fn is_configured(&self) -> bool {
        !self.access_key.trim().is_empty() && !self.endpoint.trim().is_empty()
    }
}

/// Request body understood by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayPayload {
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub subject: String,
    pub from_name: String,
    pub botcheck: bool,
}

impl RelayPayload {
    pub fn new(config: &RelayConfig, fields: &ContactFields) -> Self {
        Self {
            access_key: config.access_key.clone(),
            name: fields.name.clone(),
            email: fields.email.clone(),
            message: fields.message.clone(),
            subject: format!("New portfolio message from {}", fields.name),
            from_name: config.from_name.clone(),
            botcheck: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RelayResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("couldn't reach relay: {0}")]
    Transport(String),
    #[error("relay rejected message ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("unreadable relay response: {0}")]
    Malformed(String),
}

/// Something that can deliver a contact message.
pub trait Relay {
    fn send(&self, fields: &ContactFields) -> impl Future<Output = Result<(), RelayError>>;
}

/// Relay over HTTP, backed by `fetch` in the browser and hyper natively.
#[derive(Debug, Clone)]
pub struct HttpRelay {
    client: reqwest::Client,
    config: RelayConfig,
}

impl HttpRelay {
    pub fn new(config: RelayConfig) -> Self {
        if !config.is_configured() {
            log::warn!("contact relay has no access key; every submission will fail");
        }
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

impl Default for HttpRelay {
    fn default() -> Self {
        Self::new(RelayConfig::default())
    }
}

impl Relay for HttpRelay {
    async fn send(&self, fields: &ContactFields) -> Result<(), RelayError> {
        let payload = RelayPayload::new(&self.config, fields);
        let response = self
            .client
            .post(&self.config.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .json::<RelayResponse>()
            .await
            .map_err(|e| RelayError::Malformed(format!("{status}: {e}")))?;

        if body.success {
            log::debug!("relay accepted message ({status})");
            Ok(())
        } else {
            Err(RelayError::Rejected {
                status: status.as_u16(),
                message: body.message.unwrap_or_default(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{ContactForm, Field, SubmissionStatus};
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use std::sync::{Arc, Mutex};

    type Seen = Arc<Mutex<Vec<(HeaderMap, serde_json::Value)>>>;

    // Serves `reply` on POST /submit and records every request it receives.
    async fn spawn_relay(status: StatusCode, reply: &'static str) -> (String, Seen) {
        let seen: Seen = Arc::default();
        let recorder = seen.clone();
        let app = Router::new().route(
            "/submit",
            post(move |headers: HeaderMap, Json(body): Json<serde_json::Value>| {
                let recorder = recorder.clone();
                async move {
                    recorder.lock().unwrap().push((headers, body));
                    (status, [("content-type", "application/json")], reply)
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}/submit"), seen)
    }

    fn relay_for(endpoint: String) -> HttpRelay {
        HttpRelay::new(
            RelayConfig::default()
                .with_endpoint(endpoint)
                .with_access_key("test-key"),
        )
    }

    fn ada() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "Ada");
        form.update_field(Field::Email, "ada@example.com");
        form.update_field(Field::Message, "Hello");
        form
    }

    #[test]
    fn test_payload_shape() {
        let config = RelayConfig::default().with_access_key("k");
        let fields = ada().fields().clone();
        let json = serde_json::to_value(RelayPayload::new(&config, &fields)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "access_key": "k",
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello",
                "subject": "New portfolio message from Ada",
                "from_name": "Portfolio Contact Form",
                "botcheck": false,
            })
        );
    }

    #[test]
    fn test_missing_access_key_is_not_configured() {
        let config = RelayConfig::default().with_access_key("");
        assert!(!config.is_configured());
        assert!(!config.clone().with_access_key("   ").is_configured());
        assert!(config.clone().with_access_key("k").is_configured());
        assert!(!config.with_access_key("k").with_endpoint("").is_configured());
    }

    #[test]
    fn test_response_without_success_is_failure() {
        let body: RelayResponse = serde_json::from_str(r#"{"message":"ok?"}"#).unwrap();
        assert!(!body.success);
    }

    #[tokio::test]
    async fn test_end_to_end_success() {
        let (endpoint, seen) =
            spawn_relay(StatusCode::OK, r#"{"success":true,"message":"Email sent"}"#).await;
        let relay = relay_for(endpoint);
        let mut form = ada();

        assert_eq!(form.submit(&relay).await, SubmissionStatus::Success);
        assert!(form.fields().is_empty());

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (headers, body) = &seen[0];
        assert_eq!(headers[CONTENT_TYPE.as_str()], "application/json");
        assert_eq!(headers[ACCEPT.as_str()], "application/json");
        assert_eq!(body["access_key"], "test-key");
        assert_eq!(body["email"], "ada@example.com");
        assert_eq!(body["botcheck"], false);
    }

    #[tokio::test]
    async fn test_relay_reports_failure() {
        let (endpoint, _) = spawn_relay(
            StatusCode::BAD_REQUEST,
            r#"{"success":false,"message":"invalid access key"}"#,
        )
        .await;
        let relay = relay_for(endpoint);

        let err = relay.send(ada().fields()).await.unwrap_err();
        assert_eq!(
            err,
            RelayError::Rejected {
                status: 400,
                message: "invalid access key".to_string()
            }
        );

        let mut form = ada();
        let before = form.fields().clone();
        assert_eq!(form.submit(&relay).await, SubmissionStatus::Error);
        assert_eq!(form.fields(), &before);
    }

    #[tokio::test]
    async fn test_server_error_page() {
        let (endpoint, _) =
            spawn_relay(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>").await;
        let relay = relay_for(endpoint);

        let err = relay.send(ada().fields()).await.unwrap_err();
        assert!(matches!(err, RelayError::Malformed(_)));

        let mut form = ada();
        assert_eq!(form.submit(&relay).await, SubmissionStatus::Error);
        assert_eq!(form.fields().name, "Ada");
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let relay = relay_for(format!("http://{addr}/submit"));

        let err = relay.send(ada().fields()).await.unwrap_err();
        assert!(matches!(err, RelayError::Transport(_)));

        let mut form = ada();
        let before = form.fields().clone();
        assert_eq!(form.submit(&relay).await, SubmissionStatus::Error);
        assert_eq!(form.fields(), &before);
    }
}
