//! Payment Page

use leptos::prelude::*;

use crate::components::{PaymentModal, PlanGrid};
use crate::session;

#[component]
pub fn PaymentPage() -> impl IntoView {
    // a broken link has already been alerted; render the cards unwired
    let Some(session) = session::start() else {
        return view! {
            <div class="payment">
                <h1>"انتخاب اشتراک"</h1>
                <PlanGrid session=None />
            </div>
        }
        .into_any();
    };

    view! {
        <div class="payment">
            <h1>"انتخاب اشتراک"</h1>
            <PlanGrid session=Some(session) />
            <PaymentModal session=session />
        </div>
    }
    .into_any()
}
