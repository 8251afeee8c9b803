//! Payment Modal Controller
//!
//! Finite-state controller for the plan selection → verification → result
//! flow. UI callbacks become [`ControllerEvent`]s; anything the controller
//! needs done outside itself comes back as an [`Effect`].
//!
//! ```text
//!            SelectPlan                 VerificationFinished
//!  Hidden ──────────────▶ Open/Loading ─────────────────────▶ Open/Success
//!    ▲                        │                              Open/Error
//!    └──── CloseIcon / Backdrop / DismissResult ◀────────────────┘
//! ```
//!
//! Dismissal never cancels a call in flight: a late result still lands in
//! the (hidden) content region. Each selection gets a fresh request id, and
//! [`StalePolicy`] decides whether results from older selections apply.

use crate::config::{PaymentConfig, StalePolicy};
use crate::context::{AuthToken, PageContext, PaymentId};
use crate::error::Result;
use crate::gateway::VerificationReceipt;
use crate::modal::{ModalContent, ModalState};
use crate::plan::PlanType;

/// One issued verification call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationTicket {
    pub request_id: u64,
    pub plan: PlanType,
    pub payment_id: PaymentId,
    pub token: AuthToken,
}

/// Inputs to the controller
#[derive(Clone, Debug)]
pub enum ControllerEvent {
    /// A plan card's select control, carrying the card's raw plan id
    SelectPlan(String),

    CloseIcon,

    /// Click on the dimmed area outside the modal content
    Backdrop,

    /// The result panel's dismissal button
    DismissResult,

    VerificationFinished {
        ticket: VerificationTicket,
        outcome: Result<VerificationReceipt>,
    },
}

/// Work the host must carry out
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Issue the verification call, then feed back `VerificationFinished`
    Verify(VerificationTicket),

    /// Full-page navigation
    Navigate(String),
}

/// Owns the modal state for one payment page
#[derive(Clone, Debug)]
pub struct PaymentModalController {
    context: PageContext,
    config: PaymentConfig,
    state: ModalState,
    latest_request: u64,
}

impl PaymentModalController {
    pub fn new(context: PageContext, config: PaymentConfig) -> Self {
        Self {
            context,
            config,
            state: ModalState::new(),
            latest_request: 0,
        }
    }

    pub const fn state(&self) -> &ModalState {
        &self.state
    }

    /// Apply one event
    pub fn handle(&mut self, event: ControllerEvent) -> Vec<Effect> {
        match event {
            ControllerEvent::SelectPlan(raw) => self.select_plan(&raw).into_iter().collect(),
            ControllerEvent::CloseIcon | ControllerEvent::Backdrop => {
                self.state.hide();
                Vec::new()
            }
            ControllerEvent::DismissResult => self.dismiss_result().into_iter().collect(),
            ControllerEvent::VerificationFinished { ticket, outcome } => {
                self.finish(&ticket, outcome);
                Vec::new()
            }
        }
    }

    fn select_plan(&mut self, raw: &str) -> Option<Effect> {
        self.latest_request += 1;
        let request_id = self.latest_request;

        let plan = match raw.parse::<PlanType>() {
            Ok(plan) => plan,
            Err(err) => {
                tracing::warn!(plan = raw, "Rejected plan selection: {}", err);
                self.state.open_with(ModalContent::Error {
                    message: err.user_message(),
                });
                return None;
            }
        };

        tracing::info!(
            %plan,
            request_id,
            payment_id = %self.context.payment_id(),
            "Verifying payment"
        );
        self.state.open_with(ModalContent::Loading { plan });

        Some(Effect::Verify(VerificationTicket {
            request_id,
            plan,
            payment_id: self.context.payment_id().clone(),
            token: self.context.auth_token().clone(),
        }))
    }

    fn dismiss_result(&mut self) -> Option<Effect> {
        if !self.state.is_open() {
            return None;
        }

        match self.state.content() {
            Some(ModalContent::Success { .. }) => {
                self.state.hide();
                Some(Effect::Navigate(self.config.status_path.clone()))
            }
            Some(ModalContent::Error { .. }) => {
                self.state.hide();
                None
            }
            // no dismissal button while loading
            Some(ModalContent::Loading { .. }) | None => None,
        }
    }

    fn finish(&mut self, ticket: &VerificationTicket, outcome: Result<VerificationReceipt>) {
        if self.config.stale_policy == StalePolicy::RejectStale
            && ticket.request_id != self.latest_request
        {
            tracing::debug!(
                request_id = ticket.request_id,
                latest = self.latest_request,
                "Dropping stale verification result"
            );
            return;
        }

        let content = match outcome {
            Ok(receipt) => {
                tracing::info!(plan = %ticket.plan, request_id = ticket.request_id, "Payment verified");
                ModalContent::Success {
                    plan: ticket.plan,
                    receipt,
                }
            }
            Err(err) => {
                tracing::warn!(
                    request_id = ticket.request_id,
                    retryable = err.is_retryable(),
                    "Payment verification failed: {}",
                    err
                );
                ModalContent::Error {
                    message: err.user_message(),
                }
            }
        };
        self.state.set_content(content);
    }
}
