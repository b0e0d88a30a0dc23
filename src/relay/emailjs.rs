use reqwest::Client;
use serde::Serialize;

use super::{classify_status, Relay, RelayError};
use crate::{config::RelayConfig, contact::ContactFormInput};

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a ContactFormInput,
}

/// EmailJS REST client. Every request carries the configured timeout so a
/// silent relay can't hold a submission open.
pub struct EmailJsRelay {
    client: Client,
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RelayError::Config(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

fn classify_reqwest_error(e: reqwest::Error) -> RelayError {
    if e.is_timeout() {
        RelayError::Timeout
    } else {
        RelayError::Transport(e.to_string())
    }
}

impl Relay for EmailJsRelay {
    async fn deliver(&self, message: &ContactFormInput) -> Result<(), RelayError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: message,
        };
        tracing::debug!(
            endpoint = %self.config.endpoint,
            template = %self.config.template_id,
            "sending contact message"
        );
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(classify_reqwest_error)?;
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        classify_status(status, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::{RetryPolicy, RetryingRelay};
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
        time::{Duration, Instant},
    };
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::{TcpListener, TcpStream},
    };

    fn config_for(endpoint: String, timeout: Duration) -> RelayConfig {
        RelayConfig {
            endpoint,
            service_id: "s".to_string(),
            template_id: "t".to_string(),
            public_key: "u".to_string(),
            private_key: None,
            timeout,
            max_attempts: RetryPolicy::default().max_attempts,
        }
    }

    /// Reads one request off `stream`: headers plus a `content-length` body.
    async fn read_request(stream: &mut TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);
            let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let headers = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let len = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + len {
                return;
            }
        }
    }

    /// Accepts connections and never answers. Returns the endpoint and a
    /// connection counter.
    async fn silent_server() -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let conns = Arc::new(AtomicUsize::new(0));
        let counter = conns.clone();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                held.push(stream);
            }
        });
        (format!("http://{addr}/send"), conns)
    }

    /// Answers every request with `status` and `body`.
    async fn replying_server(
        status: &'static str,
        body: &'static str,
    ) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let conns = Arc::new(AtomicUsize::new(0));
        let counter = conns.clone();
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                read_request(&mut stream).await;
                let response = format!(
                    "HTTP/1.1 {status}\r\ncontent-type: text/plain\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).await.unwrap();
                let _ = stream.shutdown().await;
            }
        });
        (format!("http://{addr}/send"), conns)
    }

    #[test]
    fn test_request_body_shape() {
        let message = ContactFormInput {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        };
        let body = SendRequest {
            service_id: "service_abc",
            template_id: "template_xyz",
            user_id: "pk_123",
            access_token: None,
            template_params: &message,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk_123",
                "template_params": {
                    "name": "Ada",
                    "email": "ada@example.com",
                    "message": "Hello",
                },
            })
        );
    }

    #[test]
    fn test_access_token_is_sent_when_configured() {
        let message = ContactFormInput::default();
        let body = SendRequest {
            service_id: "s",
            template_id: "t",
            user_id: "u",
            access_token: Some("secret"),
            template_params: &message,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["accessToken"], "secret");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transient() {
        // reserved port, nothing listens here
        let relay = EmailJsRelay::new(config_for(
            "http://127.0.0.1:9/send".to_string(),
            Duration::from_secs(2),
        ))
        .unwrap();
        let err = relay
            .deliver(&ContactFormInput::default())
            .await
            .unwrap_err();
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn test_silent_relay_times_out_after_bounded_retry() {
        let (endpoint, conns) = silent_server().await;
        let relay = RetryingRelay::new(
            EmailJsRelay::new(config_for(endpoint, Duration::from_secs(1))).unwrap(),
            RetryPolicy::default(),
        );
        let started = Instant::now();
        let err = relay
            .deliver(&ContactFormInput::default())
            .await
            .unwrap_err();
        assert_eq!(err, RelayError::Timeout);
        assert_eq!(conns.load(Ordering::SeqCst), 2);
        // two attempts of one second each, nothing more
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_client_error_is_rejected_without_retry() {
        let (endpoint, conns) = replying_server("400 Bad Request", "bad tpl").await;
        let relay = RetryingRelay::new(
            EmailJsRelay::new(config_for(endpoint, Duration::from_secs(5))).unwrap(),
            RetryPolicy::default(),
        );
        let err = relay
            .deliver(&ContactFormInput::default())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RelayError::Rejected {
                status: 400,
                body: "bad tpl".to_string()
            }
        );
        assert_eq!(conns.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_accepted_message_is_delivered_once() {
        let (endpoint, conns) = replying_server("200 OK", "OK").await;
        let relay = RetryingRelay::new(
            EmailJsRelay::new(config_for(endpoint, Duration::from_secs(5))).unwrap(),
            RetryPolicy::default(),
        );
        relay.deliver(&ContactFormInput::default()).await.unwrap();
        assert_eq!(conns.load(Ordering::SeqCst), 1);
    }
}
