//! # subpay-core
//!
//! Headless controller for a subscription payment page.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐  SelectPlan   ┌────────────────────┐  GET /subscriptions/
//! │  Plan cards  │──────────────▶│ PaymentModal       │  verify-payment/{id}  ┌──────────┐
//! │  (page DOM)  │               │ Controller         │──────────────────────▶│ Backend  │
//! └──────────────┘               │  Hidden/Open       │◀──────────────────────│          │
//!        ▲                       │  Loading/Success/  │  VerificationFinished └──────────┘
//!        │       Navigate        │  Error             │
//!        └───────────────────────└────────────────────┘
//! ```
//!
//! The page URL supplies the payment id (last path segment) and a bearer
//! token (`token` query parameter). Without both, the session refuses to
//! start and the user gets an alert.
//!
//! The controller never performs I/O. [`PaymentSession`] binds it to a
//! [`VerificationGateway`] and a [`PageHost`], so the same flow runs in the
//! browser and in headless tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use subpay_core::{HttpGateway, PaymentConfig, PaymentSession, RecordingHost};
//!
//! let gateway = HttpGateway::new("https://shop.example.com")?;
//! let mut session = PaymentSession::start(
//!     "https://shop.example.com/subscriptions/pay/pay_123?token=eyJ...",
//!     PaymentConfig::default(),
//!     gateway,
//!     RecordingHost::new(),
//! )?;
//!
//! session.select_plan("yearly").await;
//! println!("{:?}", session.state().panel());
//! ```

pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod locale;
pub mod modal;
pub mod plan;
pub mod session;

pub use config::{PaymentConfig, StalePolicy};
pub use context::{AuthToken, PageContext, PaymentId};
pub use controller::{ControllerEvent, Effect, PaymentModalController, VerificationTicket};
pub use error::{PaymentError, Result};
pub use gateway::{
    HttpGateway, MockGateway, SubscriptionSummary, VerificationGateway, VerificationReceipt,
};
pub use modal::{DismissAction, ModalContent, ModalState, PanelView, Visibility};
pub use plan::PlanType;
pub use session::{PageHost, PaymentSession, RecordingHost, run_verification};
