//! Mock Verification Gateway
//!
//! For tests and demos. Approves by default; outcomes can be scripted per call.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::json;

use super::{VerificationGateway, VerificationReceipt};
use crate::context::{AuthToken, PaymentId};
use crate::error::{PaymentError, Result};

/// Mock gateway with scripted outcomes and a call log
pub struct MockGateway {
    /// Consumed front to back, one per call
    scripted: Mutex<VecDeque<Result<VerificationReceipt>>>,

    /// Used once the script runs out
    fallback: Result<VerificationReceipt>,

    /// Token the "backend" accepts; any token when unset
    expected_token: Option<AuthToken>,

    calls: Mutex<Vec<PaymentId>>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGateway {
    /// Gateway that approves every payment
    pub fn new() -> Self {
        Self::with_fallback(Ok(VerificationReceipt::new(json!({
            "id": 1,
            "payment_url": "https://gateway.invalid/pay/mock",
            "status": "active",
            "payment_id": "mock"
        }))))
    }

    /// Gateway that fails every payment with `status` and an optional detail
    pub fn rejecting(status: u16, detail: Option<&str>) -> Self {
        Self::with_fallback(Err(PaymentError::Http {
            status,
            detail: detail.map(str::to_string),
        }))
    }

    fn with_fallback(fallback: Result<VerificationReceipt>) -> Self {
        Self {
            scripted: Mutex::new(VecDeque::new()),
            fallback,
            expected_token: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answer 401 to any other token
    #[must_use]
    pub fn expecting_token(mut self, token: &str) -> Self {
        self.expected_token = Some(AuthToken::from_string(token));
        self
    }

    /// Queue the outcome of the next unscripted call
    pub fn push_outcome(&self, outcome: Result<VerificationReceipt>) {
        self.scripted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(outcome);
    }

    /// Payment ids verified so far, in call order
    pub fn calls(&self) -> Vec<PaymentId> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl VerificationGateway for MockGateway {
    async fn verify_payment(
        &self,
        payment_id: &PaymentId,
        token: &AuthToken,
    ) -> Result<VerificationReceipt> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(payment_id.clone());

        if self.expected_token.as_ref().is_some_and(|expected| expected != token) {
            return Err(PaymentError::Http {
                status: 401,
                detail: Some("Invalid token".into()),
            });
        }

        let scripted = self
            .scripted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        scripted.unwrap_or_else(|| self.fallback.clone())
    }

    fn name(&self) -> &str {
        "MockGateway"
    }
}
