//! Verification Gateways
//!
//! The single backend call this crate makes: confirm a payment and activate
//! the matching subscription.

mod http;
mod mock;

pub use http::HttpGateway;
pub use mock::MockGateway;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::{AuthToken, PaymentId};
use crate::error::{PaymentError, Result};

/// Verification backend (Strategy pattern)
///
/// Futures are `Send` on native targets and local on wasm32, where the
/// browser fetch API is single-threaded.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait VerificationGateway {
    /// Verify `payment_id` on behalf of the token holder
    async fn verify_payment(
        &self,
        payment_id: &PaymentId,
        token: &AuthToken,
    ) -> Result<VerificationReceipt>;

    /// Gateway name, for logs
    fn name(&self) -> &str;
}

/// Body of a successful verification
///
/// The shape is owned by the backend; only [`SubscriptionSummary`] is read
/// back, and only on a best-effort basis.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationReceipt(Value);

impl VerificationReceipt {
    pub const fn new(body: Value) -> Self {
        Self(body)
    }

    pub const fn body(&self) -> &Value {
        &self.0
    }

    /// Typed view of the backend's subscription record, if the body has one
    pub fn subscription(&self) -> Option<SubscriptionSummary> {
        serde_json::from_value(self.0.clone()).ok()
    }
}

/// Subscription record returned by the verification endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionSummary {
    pub id: i64,
    pub payment_url: String,
    pub status: String,
    pub payment_id: String,
}

/// Decode a 2xx body. Any JSON document is accepted.
pub fn decode_success(body: &[u8]) -> Result<VerificationReceipt> {
    serde_json::from_slice(body)
        .map(VerificationReceipt::new)
        .map_err(|e| PaymentError::MalformedBody(e.to_string()))
}

/// Turn a non-2xx response into an error, pulling out `detail` when present.
///
/// Never fails: a body that is not JSON simply has no detail.
pub fn decode_failure(status: u16, body: &[u8]) -> PaymentError {
    PaymentError::Http {
        status,
        detail: extract_detail(body),
    }
}

fn extract_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;

    match value.get("detail")? {
        Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
        // scalars are shown as their text
        Value::Number(detail) => Some(detail.to_string()),
        Value::Bool(detail) => Some(detail.to_string()),
        // request validation errors: [{"loc": [...], "msg": "...", "type": "..."}]
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_string() {
        let err = decode_failure(401, br#"{"detail":"Invalid token"}"#);
        assert_eq!(
            err,
            PaymentError::Http {
                status: 401,
                detail: Some("Invalid token".into())
            }
        );
    }

    #[test]
    fn test_scalar_detail_shown_as_text() {
        let err = decode_failure(409, br#"{"detail":42}"#);
        assert_eq!(
            err,
            PaymentError::Http {
                status: 409,
                detail: Some("42".into()),
            }
        );
        assert_eq!(err.user_message(), "42");

        let err = decode_failure(400, br#"{"detail":false}"#);
        assert_eq!(err.user_message(), "false");
    }

    #[test]
    fn test_detail_missing_or_unusable() {
        let bodies: [&[u8]; 5] = [
            br#"{"error":"nope"}"#,
            br#"{"detail":""}"#,
            br#"{"detail":null}"#,
            b"<html>Bad Gateway</html>",
            b"",
        ];
        for body in bodies {
            let err = decode_failure(500, body);
            assert!(matches!(err, PaymentError::Http { detail: None, .. }), "{body:?}");
        }
    }

    #[test]
    fn test_validation_detail_list() {
        let body = json!({
            "detail": [
                {"loc": ["path", "payment_id"], "msg": "field required", "type": "missing"},
                {"loc": ["header"], "msg": "bad header", "type": "value_error"}
            ]
        });
        let err = decode_failure(422, body.to_string().as_bytes());
        assert_eq!(err.user_message(), "field required; bad header");
    }

    #[test]
    fn test_success_body() {
        let body = json!({
            "id": 7,
            "payment_url": "https://gateway.test/p/abc",
            "status": "active",
            "payment_id": "abc"
        });
        let receipt = decode_success(body.to_string().as_bytes()).unwrap();
        let summary = receipt.subscription().unwrap();
        assert_eq!(summary.id, 7);
        assert_eq!(summary.status, "active");
    }

    #[test]
    fn test_success_body_any_shape() {
        let receipt = decode_success(b"[1, 2, 3]").unwrap();
        assert!(receipt.subscription().is_none());

        let err = decode_success(b"OK").unwrap_err();
        assert!(matches!(err, PaymentError::MalformedBody(_)));
    }
}
