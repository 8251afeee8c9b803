//! Payment Error Types

use thiserror::Error;

use crate::locale;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment flow errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// Payment link lacks a payment id or token
    #[error("Invalid payment link: {0}")]
    InvalidPaymentLink(String),

    /// Plan identifier outside the fixed plan table
    #[error("Unknown plan: {0}")]
    UnknownPlan(String),

    /// Verification endpoint answered with a non-success status
    #[error("Verification failed with HTTP {status}")]
    Http {
        status: u16,
        detail: Option<String>,
    },

    /// Request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body was not the JSON we expected
    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Whether the user can reasonably try the same selection again.
    ///
    /// Nothing retries automatically; the flag is recorded when a verification
    /// failure is logged.
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Message rendered to the user.
    ///
    /// A server-supplied `detail` wins; everything else from the verification
    /// call collapses to the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidPaymentLink(_) => locale::INVALID_LINK.into(),
            Self::UnknownPlan(_) => locale::UNKNOWN_PLAN.into(),
            Self::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Http { detail: None, .. }
            | Self::Transport(_)
            | Self::MalformedBody(_)
            | Self::Config(_) => locale::VERIFY_FALLBACK.into(),
        }
    }
}

impl From<reqwest::Error> for PaymentError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<url::ParseError> for PaymentError {
    fn from(err: url::ParseError) -> Self {
        Self::Config(err.to_string())
    }
}
