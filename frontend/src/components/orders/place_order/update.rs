//! Update function for the order wizard.
//!
//! Every message goes through [`OrderWizard`](common::wizard::OrderWizard), which
//! refuses actions the current step does not allow. The only asynchronous work
//! is the quote request POST started by `Msg::Submit`; its outcome comes back as
//! `SubmitSucceeded` or `SubmitFailed`.

use common::error::WizardError;
use common::wizard::WizardExit;
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::helpers::{draft_log_line, show_toast, user_message};
use super::messages::Msg;
use super::state::PlaceOrderModal;

/// Applies `msg` and returns whether the view must re-render.
pub fn update(component: &mut PlaceOrderModal, ctx: &Context<PlaceOrderModal>, msg: Msg) -> bool {
    match msg {
        Msg::SetField(field, value) => match component.wizard.set_field(field, value) {
            Ok(()) => true,
            Err(err) => {
                error!(format!("Ignoring {} value: {}", field.name(), err));
                false
            }
        },
        // Continue is disabled while the step is incomplete, so a refusal here
        // needs no message.
        Msg::Continue => component.wizard.advance().is_ok(),
        Msg::Back => {
            component.wizard.back();
            true
        }
        Msg::EditStep(step) => component.wizard.edit(step).is_ok(),
        Msg::Submit => submit(component, ctx),
        Msg::SubmitSucceeded { count } => {
            match component.wizard.complete_submit(Ok(())) {
                Ok(WizardExit::Submitted) => {
                    log!(format!("Quote request stored ({} in total)", count));
                    show_toast("Order submitted.");
                    ctx.props().on_submitted.emit(());
                    ctx.props().on_close.emit(());
                }
                Ok(other) => log!(format!("Unexpected wizard exit: {:?}", other)),
                Err(err) => error!(err.to_string()),
            }
            false
        }
        Msg::SubmitFailed(reason) => {
            if let Err(err) = component.wizard.complete_submit(Err(reason)) {
                error!(format!("Error submitting order: {}", err));
                let message = user_message(&err);
                show_toast(&message);
                component.submit_error = Some(message);
            }
            true
        }
        Msg::SaveDraft => {
            if let WizardExit::DraftSaved(draft) = component.wizard.save_draft() {
                log!("Saving draft:", draft_log_line(&draft));
                show_toast("Draft saved.");
            }
            ctx.props().on_close.emit(());
            false
        }
        Msg::Close => {
            component.wizard.cancel();
            ctx.props().on_close.emit(());
            false
        }
    }
}

/// Starts the quote request for the reviewed draft.
fn submit(component: &mut PlaceOrderModal, ctx: &Context<PlaceOrderModal>) -> bool {
    let submission = match component.wizard.begin_submit(ctx.props().session.as_ref()) {
        Ok(submission) => submission,
        // Enter pressed in a field of an earlier step, or a second press while
        // the request is pending.
        Err(WizardError::NotOnReview(_) | WizardError::SubmitInProgress) => return false,
        Err(err) => {
            error!(format!("Cannot submit order: {}", err));
            let message = user_message(&err);
            show_toast(&message);
            component.submit_error = Some(message);
            return true;
        }
    };
    component.submit_error = None;

    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = api::send_quote_request(
            &submission.user_id,
            &submission.access_token,
            &submission.payload,
        )
        .await;
        match outcome {
            Ok(receipt) => link.send_message(Msg::SubmitSucceeded {
                count: receipt.count,
            }),
            Err(err) => link.send_message(Msg::SubmitFailed(err.to_string())),
        }
    });
    true
}
