//! Browser event loop
//!
//! Leptos handlers feed [`ControllerEvent`]s into the session held in a
//! local signal; verification calls run on `spawn_local` and report back
//! through the same path.

use leptos::prelude::*;
use subpay_core::{
    ControllerEvent, HttpGateway, PageHost, PaymentConfig, PaymentSession, run_verification,
};

use crate::api;
use crate::host::BrowserHost;

pub type BrowserSession = PaymentSession<HttpGateway, BrowserHost>;

/// Session handle shared by the page components
pub type SessionSignal = RwSignal<BrowserSession, LocalStorage>;

/// Wire the page, or alert and return `None` for a broken payment link
pub fn start() -> Option<SessionSignal> {
    let config = PaymentConfig::default();

    let gateway = match api::gateway(&config) {
        Ok(gateway) => gateway,
        Err(err) => {
            tracing::error!("Cannot reach verification endpoint: {}", err);
            BrowserHost.alert(&err.user_message());
            return None;
        }
    };

    PaymentSession::start(&api::page_href(), config, gateway, BrowserHost)
        .ok()
        .map(RwSignal::new_local)
}

/// Apply `event` and launch any verification calls it issues
pub fn dispatch(session: SessionSignal, event: ControllerEvent) {
    let Some(tickets) = session.try_update(|s| s.dispatch(event)) else {
        return;
    };

    for ticket in tickets {
        let gateway = session.with_untracked(|s| s.gateway().clone());
        leptos::task::spawn_local(async move {
            let finished = run_verification(&gateway, ticket).await;
            dispatch(session, finished);
        });
    }
}
