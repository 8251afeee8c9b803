//! Payment Session
//!
//! Event loop glue between a [`PaymentModalController`], a verification
//! gateway and the hosting page. The browser front end and headless tests
//! drive the same session.

use std::sync::{Mutex, PoisonError};

use crate::config::PaymentConfig;
use crate::context::PageContext;
use crate::controller::{ControllerEvent, Effect, PaymentModalController, VerificationTicket};
use crate::error::Result;
use crate::gateway::VerificationGateway;
use crate::modal::ModalState;

/// Page-level side effects the controller cannot perform itself
pub trait PageHost {
    /// Blocking user alert
    fn alert(&self, message: &str);

    /// Full-page navigation to a same-origin path
    fn navigate(&self, path: &str);
}

/// Perform the call described by `ticket` and wrap its outcome as the event
/// to dispatch back.
pub async fn run_verification<G>(gateway: &G, ticket: VerificationTicket) -> ControllerEvent
where
    G: VerificationGateway + ?Sized,
{
    let outcome = gateway
        .verify_payment(&ticket.payment_id, &ticket.token)
        .await;
    ControllerEvent::VerificationFinished { ticket, outcome }
}

/// Controller bound to a gateway and a page
pub struct PaymentSession<G, H> {
    controller: PaymentModalController,
    gateway: G,
    host: H,
}

impl<G, H> PaymentSession<G, H>
where
    G: VerificationGateway,
    H: PageHost,
{
    /// Wire a session for the page at `href`.
    ///
    /// A link without a payment id or token alerts the user and yields
    /// `InvalidPaymentLink`; the caller must not attach any handlers then.
    pub fn start(href: &str, config: PaymentConfig, gateway: G, host: H) -> Result<Self> {
        let context = match PageContext::from_href(href) {
            Ok(context) => context,
            Err(err) => {
                tracing::warn!("Payment page not wired: {}", err);
                host.alert(&err.user_message());
                return Err(err);
            }
        };

        tracing::info!(
            payment_id = %context.payment_id(),
            gateway = gateway.name(),
            "Payment session ready"
        );

        Ok(Self {
            controller: PaymentModalController::new(context, config),
            gateway,
            host,
        })
    }

    pub const fn state(&self) -> &ModalState {
        self.controller.state()
    }

    pub const fn controller(&self) -> &PaymentModalController {
        &self.controller
    }

    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Apply `event`, carry out page effects, and hand back the
    /// verification calls the caller has to run.
    pub fn dispatch(&mut self, event: ControllerEvent) -> Vec<VerificationTicket> {
        let mut tickets = Vec::new();
        for effect in self.controller.handle(event) {
            match effect {
                Effect::Verify(ticket) => tickets.push(ticket),
                Effect::Navigate(path) => self.host.navigate(&path),
            }
        }
        tickets
    }

    /// Run one ticket against this session's gateway
    pub async fn verify(&self, ticket: VerificationTicket) -> ControllerEvent {
        run_verification(&self.gateway, ticket).await
    }

    /// Select a plan and wait for its verification to land
    pub async fn select_plan(&mut self, plan: &str) {
        let tickets = self.dispatch(ControllerEvent::SelectPlan(plan.to_string()));
        for ticket in tickets {
            let finished = self.verify(ticket).await;
            self.dispatch(finished);
        }
    }
}

/// Host that records alerts and navigations instead of performing them
#[derive(Debug, Default)]
pub struct RecordingHost {
    alerts: Mutex<Vec<String>>,
    navigations: Mutex<Vec<String>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl PageHost for RecordingHost {
    fn alert(&self, message: &str) {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }

    fn navigate(&self, path: &str) {
        self.navigations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}

impl<T: PageHost + ?Sized> PageHost for &T {
    fn alert(&self, message: &str) {
        (**self).alert(message);
    }

    fn navigate(&self, path: &str) {
        (**self).navigate(path);
    }
}
