//! Browser page host

use subpay_core::PageHost;

/// Alerts and navigation through `window`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl PageHost for BrowserHost {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            tracing::error!("alert failed: {:?}", err);
        }
    }

    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(path) {
            tracing::error!(path, "navigation failed: {:?}", err);
        }
    }
}
