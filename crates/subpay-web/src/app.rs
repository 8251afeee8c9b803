//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::pages::PaymentPage;

/// Root application component
///
/// Any other URL still goes through the payment page so a malformed link
/// gets the invalid-link alert rather than a blank screen.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="app" dir="rtl">
                <Routes fallback=|| view! { <PaymentPage /> }>
                    <Route path=path!("/subscriptions/pay/:payment_id") view=PaymentPage />
                </Routes>
            </main>
        </Router>
    }
}
