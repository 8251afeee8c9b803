//! HTTP Verification Gateway
//!
//! `GET {verify_path}/{payment_id}` with a bearer token. Works natively and
//! in the browser (reqwest falls back to `fetch` on wasm32).

use async_trait::async_trait;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use url::Url;

use super::{VerificationGateway, VerificationReceipt, decode_failure, decode_success};
use crate::config::PaymentConfig;
use crate::context::{AuthToken, PaymentId};
use crate::error::{PaymentError, Result};

/// Characters escaped when the payment id becomes a path segment. `%` is
/// left alone so ids taken from the page URL keep their existing escapes.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/');

/// reqwest-backed gateway rooted at the page origin
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: Url,
    verify_path: String,
}

impl HttpGateway {
    /// Gateway with the default endpoint path
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, &PaymentConfig::default())
    }

    pub fn with_config(base_url: &str, config: &PaymentConfig) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(PaymentError::Config(format!("{base_url} cannot be a base URL")));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            verify_path: config.verify_path.clone(),
        })
    }

    /// Full endpoint URL for one payment. The id is appended as a single
    /// path segment without re-encoding escapes it already carries.
    pub fn verify_url(&self, payment_id: &PaymentId) -> Result<Url> {
        let mut url = self.base_url.join(&self.verify_path)?;
        let prefix = url.path().trim_end_matches('/').to_string();
        let segment = utf8_percent_encode(payment_id.as_str(), SEGMENT);
        url.set_path(&format!("{prefix}/{segment}"));
        Ok(url)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl VerificationGateway for HttpGateway {
    async fn verify_payment(
        &self,
        payment_id: &PaymentId,
        token: &AuthToken,
    ) -> Result<VerificationReceipt> {
        let url = self.verify_url(payment_id)?;
        tracing::debug!(%url, "Sending verification request");

        let response = self
            .client
            .get(url)
            .bearer_auth(token.as_str())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            decode_success(&body)
        } else {
            // an unreadable error body just means there is no detail to show
            let body = response.bytes().await.unwrap_or_default();
            Err(decode_failure(status.as_u16(), &body))
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}
