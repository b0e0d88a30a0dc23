#[cfg(feature = "ssr")]
mod emailjs;

#[cfg(feature = "ssr")]
pub use emailjs::EmailJsRelay;

use std::future::Future;

use http::StatusCode;
use thiserror::Error;

use crate::contact::ContactFormInput;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("Relay did not answer in time")]
    Timeout,
    #[error("Couldn't reach relay: {0}")]
    Transport(String),
    #[error("Relay is not configured: {0}")]
    Config(String),
    #[error("Server error: {0}")]
    Server(String),
}

impl RelayError {
    /// Whether sending the same message again might succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout | Self::Transport(_) => true,
            Self::Rejected { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS.as_u16() || *status >= 500
            }
            Self::Config(_) | Self::Server(_) => false,
        }
    }
}

/// A transactional email service that forwards contact messages to the
/// site owner.
pub trait Relay {
    fn deliver(
        &self,
        message: &ContactFormInput,
    ) -> impl Future<Output = Result<(), RelayError>>;
}

/// Maps a relay HTTP response onto accept/reject.
pub fn classify_status(status: StatusCode, body: String) -> Result<(), RelayError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    /// One try plus a single retry.
    fn default() -> Self {
        Self { max_attempts: 2 }
    }
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self { max_attempts: 1 }
    }
}

/// Wraps a relay so transient failures get a bounded number of retries.
/// Rejections the relay is sure about (4xx) are returned straight away.
pub struct RetryingRelay<R> {
    inner: R,
    policy: RetryPolicy,
}

impl<R: Relay> RetryingRelay<R> {
    pub fn new(inner: R, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: Relay> Relay for RetryingRelay<R> {
    async fn deliver(&self, message: &ContactFormInput) -> Result<(), RelayError> {
        let attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.inner.deliver(message).await {
                Ok(()) => return Ok(()),
                Err(e) if e.is_transient() && attempt < attempts => {
                    log::warn!("relay attempt {attempt}/{attempts} failed, retrying: {e}");
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
