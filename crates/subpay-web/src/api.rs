//! API Client

use subpay_core::{HttpGateway, PaymentConfig, Result};

/// Full URL of the current page, empty outside a browser window
pub fn page_href() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

/// Verification gateway rooted at the page origin
pub fn gateway(config: &PaymentConfig) -> Result<HttpGateway> {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:8000".into());

    HttpGateway::with_config(&origin, config)
}
