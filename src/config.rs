use std::time::Duration;

use thiserror::Error;

use crate::relay::RetryPolicy;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";
pub const PRIVATE_KEY_VAR: &str = "EMAILJS_PRIVATE_KEY";
pub const ENDPOINT_VAR: &str = "EMAILJS_ENDPOINT";
pub const TIMEOUT_VAR: &str = "RELAY_TIMEOUT_SECS";
pub const ATTEMPTS_VAR: &str = "RELAY_MAX_ATTEMPTS";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),
    #[error("Invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Server-side settings for the contact relay. Identifiers stay out of the
/// client bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub timeout: Duration,
    pub max_attempts: u32,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let required = |var: &'static str| get(var).ok_or(ConfigError::Missing(var));

        let timeout_secs = match get(TIMEOUT_VAR) {
            Some(v) => match v.trim().parse::<u64>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: TIMEOUT_VAR,
                        value: v,
                    })
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };
        let max_attempts = match get(ATTEMPTS_VAR) {
            Some(v) => match v.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: ATTEMPTS_VAR,
                        value: v,
                    })
                }
            },
            None => RetryPolicy::default().max_attempts,
        };

        Ok(Self {
            endpoint: get(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            service_id: required(SERVICE_ID_VAR)?,
            template_id: required(TEMPLATE_ID_VAR)?,
            public_key: required(PUBLIC_KEY_VAR)?,
            private_key: get(PRIVATE_KEY_VAR),
            timeout: Duration::from_secs(timeout_secs),
            max_attempts,
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
        }
    }
}
