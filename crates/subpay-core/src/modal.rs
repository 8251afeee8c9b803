//! Modal State
//!
//! What the payment modal shows, independent of any UI toolkit.

use serde::{Deserialize, Serialize};

use crate::gateway::VerificationReceipt;
use crate::locale;
use crate::plan::PlanType;

/// Whether the modal overlay is displayed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Open,
}

/// Content region of the modal
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ModalContent {
    /// Verification call in flight
    Loading { plan: PlanType },

    /// Payment verified and subscription activated
    Success {
        plan: PlanType,
        receipt: VerificationReceipt,
    },

    /// Verification failed or the selection was invalid
    Error { message: String },
}

/// What the dismissal button of a result panel does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissAction {
    /// Hide the modal, then go to the subscription status page
    ViewStatus,

    /// Hide the modal only
    Close,
}

/// Render-ready description of the content region
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelView {
    pub loader: bool,
    pub heading: Option<&'static str>,
    pub message: String,
    pub dismiss: Option<DismissAction>,
}

impl ModalContent {
    pub fn panel(&self) -> PanelView {
        match self {
            Self::Loading { .. } => PanelView {
                loader: true,
                heading: None,
                message: locale::REDIRECTING.into(),
                dismiss: None,
            },
            Self::Success { plan, .. } => PanelView {
                loader: false,
                heading: Some(locale::SUCCESS_HEADING),
                message: locale::subscription_activated(plan.display_name()),
                dismiss: Some(DismissAction::ViewStatus),
            },
            Self::Error { message } => PanelView {
                loader: false,
                heading: Some(locale::ERROR_HEADING),
                message: message.clone(),
                dismiss: Some(DismissAction::Close),
            },
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

/// Modal visibility plus content; starts hidden and empty
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModalState {
    visibility: Visibility,
    content: Option<ModalContent>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub const fn is_open(&self) -> bool {
        matches!(self.visibility, Visibility::Open)
    }

    pub const fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    pub fn panel(&self) -> Option<PanelView> {
        self.content.as_ref().map(ModalContent::panel)
    }

    pub(crate) fn open_with(&mut self, content: ModalContent) {
        self.visibility = Visibility::Open;
        self.content = Some(content);
    }

    /// Replace the content without touching visibility
    pub(crate) fn set_content(&mut self, content: ModalContent) {
        self.content = Some(content);
    }

    pub(crate) fn hide(&mut self) {
        self.visibility = Visibility::Hidden;
    }
}
