//! Controller Configuration

use serde::{Deserialize, Serialize};

/// What to do with a verification result that is not from the latest selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Only the most recently issued call may update the panel
    #[default]
    RejectStale,

    /// Every result is applied in arrival order
    LastWriterWins,
}

/// Payment modal configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    /// Path prefix of the verification endpoint; the payment id is appended
    pub verify_path: String,

    /// Page shown after a successful payment is acknowledged
    pub status_path: String,

    pub stale_policy: StalePolicy,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            verify_path: "/subscriptions/verify-payment".into(),
            status_path: "/subscriptions/status/me".into(),
            stale_policy: StalePolicy::default(),
        }
    }
}

impl PaymentConfig {
    #[must_use]
    pub fn with_verify_path(mut self, path: impl Into<String>) -> Self {
        self.verify_path = path.into();
        self
    }

    #[must_use]
    pub fn with_status_path(mut self, path: impl Into<String>) -> Self {
        self.status_path = path.into();
        self
    }

    #[must_use]
    pub fn with_stale_policy(mut self, policy: StalePolicy) -> Self {
        self.stale_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_backend_routes() {
        let config = PaymentConfig::default();
        assert_eq!(config.verify_path, "/subscriptions/verify-payment");
        assert_eq!(config.status_path, "/subscriptions/status/me");
        assert_eq!(config.stale_policy, StalePolicy::RejectStale);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: PaymentConfig =
            serde_json::from_str(r#"{"stale_policy":"last_writer_wins"}"#).unwrap();
        assert_eq!(config.stale_policy, StalePolicy::LastWriterWins);
        assert_eq!(config.status_path, "/subscriptions/status/me");
    }
}
