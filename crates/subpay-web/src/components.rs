//! UI Components

use leptos::prelude::*;
use subpay_core::{ControllerEvent, DismissAction, PanelView, PlanType, locale};

use crate::session::{SessionSignal, dispatch};

const MODAL_ID: &str = "paymentModal";

/// Only clicks landing on the backdrop itself close the modal, not ones
/// bubbling up from the content box.
fn is_backdrop(target_id: &str) -> bool {
    target_id == MODAL_ID
}

/// One card per plan; the select buttons stay inert without a session
#[component]
pub fn PlanGrid(session: Option<SessionSignal>) -> impl IntoView {
    let cards = PlanType::ALL
        .into_iter()
        .map(|plan| {
            let select = move |_: leptos::ev::MouseEvent| {
                if let Some(session) = session {
                    dispatch(session, ControllerEvent::SelectPlan(plan.as_str().into()));
                }
            };

            view! {
                <div class="plan-card" data-plan=plan.as_str()>
                    <h2>{plan.display_name()}</h2>
                    <button class="select-btn" on:click=select>"انتخاب"</button>
                </div>
            }
        })
        .collect_view();

    view! { <div class="plans">{cards}</div> }
}

/// Payment modal: backdrop, close icon and the dynamic content region
#[component]
pub fn PaymentModal(session: SessionSignal) -> impl IntoView {
    let is_open = move || session.with(|s| s.state().is_open());
    let panel = move || session.with(|s| s.state().panel());

    let on_backdrop = move |ev: leptos::ev::MouseEvent| {
        if is_backdrop(&event_target::<web_sys::Element>(&ev).id()) {
            dispatch(session, ControllerEvent::Backdrop);
        }
    };

    view! {
        <div
            id=MODAL_ID
            class="modal"
            style:display=move || if is_open() { "block" } else { "none" }
            on:click=on_backdrop
        >
            <div class="modal-content">
                <span class="close" on:click=move |_| dispatch(session, ControllerEvent::CloseIcon)>
                    "×"
                </span>
                <div id="paymentGateway">
                    {move || panel().map(|panel| view! { <Panel panel=panel session=session /> })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn Panel(panel: PanelView, session: SessionSignal) -> impl IntoView {
    let dismiss = panel.dismiss.map(|action| {
        let id = match action {
            DismissAction::ViewStatus => "closeSuccess",
            DismissAction::Close => "closeError",
        };
        view! {
            <button id=id on:click=move |_| dispatch(session, ControllerEvent::DismissResult)>
                {locale::CLOSE}
            </button>
        }
    });

    view! {
        {panel.loader.then(|| view! { <div class="loader"></div> })}
        {panel.heading.map(|heading| view! { <h3>{heading}</h3> })}
        <p>{panel.message}</p>
        {dismiss}
    }
}
