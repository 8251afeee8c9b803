//! Subscription Plans
//!
//! The fixed set of tiers a payment link can activate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PaymentError;

/// Subscription plan tiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanType {
    #[serde(rename = "6month")]
    SixMonth,
    #[serde(rename = "yearly")]
    Yearly,
    #[serde(rename = "unlimited")]
    Unlimited,
}

impl PlanType {
    /// Every plan, in card order
    pub const ALL: [Self; 3] = [Self::SixMonth, Self::Yearly, Self::Unlimited];

    /// Identifier carried in a plan card's `data-plan` attribute
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SixMonth => "6month",
            Self::Yearly => "yearly",
            Self::Unlimited => "unlimited",
        }
    }

    /// Localized name shown in the success panel
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SixMonth => "۶ ماهه",
            Self::Yearly => "سالانه",
            Self::Unlimited => "نامحدود",
        }
    }
}

impl FromStr for PlanType {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|plan| plan.as_str() == s)
            .ok_or_else(|| PaymentError::UnknownPlan(s.to_string()))
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
