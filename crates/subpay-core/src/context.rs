//! Page Context
//!
//! Identifies which payment this page verifies and with what credential.
//! Expected URL shape: `.../<payment_id>?...&token=<auth_token>&...`

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{PaymentError, Result};

/// Payment identifier: the last path segment of the page URL, kept exactly
/// as it appears there (escapes included)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentId(String);

impl PaymentId {
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bearer token from the `token` query parameter
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never print the credential itself.
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// Identifiers captured once at page load
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContext {
    payment_id: PaymentId,
    auth_token: AuthToken,
}

impl PageContext {
    /// Build from already-extracted parts; both must be non-empty.
    pub fn new(payment_id: impl Into<String>, auth_token: impl Into<String>) -> Result<Self> {
        let payment_id = payment_id.into();
        let auth_token = auth_token.into();

        if payment_id.is_empty() {
            return Err(PaymentError::InvalidPaymentLink("missing payment id".into()));
        }
        if auth_token.is_empty() {
            return Err(PaymentError::InvalidPaymentLink("missing token".into()));
        }

        Ok(Self {
            payment_id: PaymentId(payment_id),
            auth_token: AuthToken(auth_token),
        })
    }

    /// Parse the current page URL
    pub fn from_href(href: &str) -> Result<Self> {
        let url = Url::parse(href)
            .map_err(|e| PaymentError::InvalidPaymentLink(format!("unparsable URL: {e}")))?;
        Self::from_url(&url)
    }

    pub fn from_url(url: &Url) -> Result<Self> {
        let payment_id = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .map(str::to_string)
            .unwrap_or_default();

        // first occurrence wins, like URLSearchParams.get
        let token = url
            .query_pairs()
            .find(|(key, _)| key == "token")
            .map(|(_, value)| value.into_owned())
            .unwrap_or_default();

        Self::new(payment_id, token)
    }

    pub const fn payment_id(&self) -> &PaymentId {
        &self.payment_id
    }

    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }
}
