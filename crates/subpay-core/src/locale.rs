//! User-facing strings (Persian)

/// Alert shown when the page URL lacks a payment id or token
pub const INVALID_LINK: &str = "لینک پرداخت نامعتبر است.";

/// Shown next to the loader while the verification call is pending
pub const REDIRECTING: &str = "در حال انتقال به درگاه پرداخت...";

pub const SUCCESS_HEADING: &str = "پرداخت با موفقیت انجام شد!";

pub const ERROR_HEADING: &str = "خطا در پرداخت";

/// Label of the result panel's dismissal button
pub const CLOSE: &str = "بستن";

pub const UNKNOWN_PLAN: &str = "نوع اشتراک نامعتبر است.";

/// Used when the server gives no usable `detail`
pub const VERIFY_FALLBACK: &str = "Failed to verify payment";

/// Confirmation line for an activated subscription
pub fn subscription_activated(plan_name: &str) -> String {
    format!("اشتراک {plan_name} با موفقیت فعال شد.")
}
