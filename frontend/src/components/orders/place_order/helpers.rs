//! Small helpers for the order wizard: reading form events, user-facing
//! wording for wizard errors, progress indicator classes and toasts.

use common::model::order::OrderDraft;
use common::requests::QuoteRequest;
use common::error::WizardError;
use common::wizard::Step;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Current value of the input, select or textarea that fired an event.
pub fn event_value(target: Option<EventTarget>) -> String {
    let Some(target) = target else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Progress badge state of `step` while the wizard is on `current`.
pub fn step_badge_class(step: Step, current: Step) -> &'static str {
    if step == current {
        "step-badge active"
    } else if step < current {
        "step-badge done"
    } else {
        "step-badge"
    }
}

/// Connector drawn after `step`; filled once the wizard is past it.
pub fn connector_class(step: Step, current: Step) -> &'static str {
    if step < current {
        "step-connector done"
    } else {
        "step-connector"
    }
}

/// What the user is told when a submission cannot start or fails.
pub fn user_message(err: &WizardError) -> String {
    match err {
        WizardError::NotAuthenticated => "Please sign in before submitting an order.".to_string(),
        WizardError::SubmissionFailed(reason) => {
            format!("Failed to submit order. Please try again. ({})", reason)
        }
        other => other.to_string(),
    }
}

/// JSON rendering of a draft for the console, in the same shape as the payload.
pub fn draft_log_line(draft: &OrderDraft) -> String {
    serde_json::to_string(&QuoteRequest::from(draft)).unwrap_or_else(|e| e.to_string())
}

/// Shows a short-lived notification at the bottom of the page.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
