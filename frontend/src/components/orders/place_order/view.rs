//! View rendering for the order wizard.
//!
//! Layout: progress indicator, the form of the current step, then the
//! navigation bar. Inputs are controlled: every keystroke becomes a
//! `Msg::SetField` and the rendered value always comes from the draft.

use common::model::order::{
    ChoiceOption, OrderField, ShippingCost, SupplierType, CURRENCIES, INCOTERMS, PAYMENT_METHODS,
    PAYMENT_TERMS, UNITS_OF_MEASUREMENT,
};
use common::wizard::{review_sections, ReviewSection, Step};
use yew::html::Scope;
use yew::prelude::*;

use crate::tops_sheet::modal_sheet::ModalSheet;

use super::helpers::{connector_class, event_value, step_badge_class};
use super::messages::Msg;
use super::state::PlaceOrderModal;

pub fn view(component: &PlaceOrderModal, ctx: &Context<PlaceOrderModal>) -> Html {
    let link = ctx.link();
    let step = component.wizard.step();

    html! {
        <ModalSheet title="Place New Order" on_close={link.callback(|_: ()| Msg::Close)}>
            { build_progress(step) }
            <form class="wizard-form" onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                {
                    match step {
                        Step::Supplier => build_supplier_step(component, link),
                        Step::Commercial => build_commercial_step(component, link),
                        Step::Logistics => build_logistics_step(component, link),
                        Step::Review => build_review_step(component, link),
                    }
                }
                { build_navigation(component, link) }
            </form>
        </ModalSheet>
    }
}

/// Numbered badges with connectors; finished steps show a check mark.
fn build_progress(current: Step) -> Html {
    html! {
        <div class="wizard-progress">
            { for Step::ALL.into_iter().map(|step| html! {
                <>
                    <div class="step">
                        <span class={step_badge_class(step, current)}>
                            { if step < current { "✓".to_string() } else { step.number().to_string() } }
                        </span>
                        <span class="step-title">{ step.title() }</span>
                    </div>
                    if step.next().is_some() {
                        <div class={connector_class(step, current)}></div>
                    }
                </>
            }) }
        </div>
    }
}

fn build_supplier_step(component: &PlaceOrderModal, link: &Scope<PlaceOrderModal>) -> Html {
    let draft = component.wizard.draft();
    let current = draft.supplier_type();
    let goods = !draft.is_service_provider();

    html! {
        <div class="wizard-step">
            <h3>{ "Supplier Details" }</h3>
            <div class="field">
                <label class="field-label" for="supplierType">{ "Supplier Type *" }</label>
                <select
                    id="supplierType"
                    class="input-field"
                    name={OrderField::SupplierType.name()}
                    onchange={field_change(link, OrderField::SupplierType)}
                >
                    <option value="" selected={current.is_none()}>{ "Select supplier type" }</option>
                    { for SupplierType::ALL.into_iter().map(|kind| html! {
                        <option value={kind.as_str()} selected={current == Some(kind)}>
                            { kind.label() }
                        </option>
                    }) }
                </select>
            </div>
            { text_input(component, link, OrderField::ProductName, "Product Name *", "text", "e.g. Aluminium sheets") }
            { text_area(component, link, OrderField::ItemDescription, "Item Description *", "Describe what you need") }
            if goods {
                { text_area(component, link, OrderField::ProductSpecifications, "Product Specifications", "Dimensions, grade, tolerances...") }
                { text_input(component, link, OrderField::ProductCertification, "Certifications", "text", "e.g. ISO 9001") }
            }
        </div>
    }
}

fn build_commercial_step(component: &PlaceOrderModal, link: &Scope<PlaceOrderModal>) -> Html {
    let draft = component.wizard.draft();

    html! {
        <div class="wizard-step">
            <h3>{ "Order Details" }</h3>
            <div class="field-row">
                { text_input(component, link, OrderField::QuantityRequired, "Quantity Required *", "number", "0") }
                { select_input(component, link, OrderField::UnitOfMeasurement, "Unit *", UNITS_OF_MEASUREMENT) }
            </div>
            <div class="field-row">
                { text_input(component, link, OrderField::UnitPrice, "Unit Price *", "number", "0.00") }
                { select_input(component, link, OrderField::Currency, "Currency", CURRENCIES) }
            </div>
            <div class="field">
                <label class="field-label" for="totalPriceEstimate">{ "Total Price Estimate" }</label>
                <input
                    id="totalPriceEstimate"
                    class="input-field readonly"
                    name="totalPriceEstimate"
                    readonly=true
                    value={format!("{} {}", draft.total_price_estimate(), draft.value(OrderField::Currency))}
                />
            </div>
            { text_input(component, link, OrderField::Discounts, "Discounts", "text", "e.g. 5% above 1000 units") }
        </div>
    }
}

fn build_logistics_step(component: &PlaceOrderModal, link: &Scope<PlaceOrderModal>) -> Html {
    let draft = component.wizard.draft();
    let shipping = draft.shipping_cost();
    let goods = !draft.is_service_provider();

    html! {
        <div class="wizard-step">
            <h3>{ "Delivery & Payment" }</h3>
            <div class="field-row">
                { select_input(component, link, OrderField::PaymentTerms, "Payment Terms", PAYMENT_TERMS) }
                { select_input(component, link, OrderField::PreferredPaymentMethod, "Payment Method", PAYMENT_METHODS) }
            </div>
            { text_input(component, link, OrderField::EstimatedDeliveryDate, "Estimated Delivery Date *", "date", "") }
            { text_input(component, link, OrderField::DeliveryLocation, "Delivery Location *", "text", "City, address or warehouse") }
            <div class="field">
                <span class="field-label">{ "Shipping Cost *" }</span>
                <div class="radio-group">
                    { for ShippingCost::ALL.into_iter().map(|mode| html! {
                        <label class="radio">
                            <input
                                type="radio"
                                name={OrderField::ShippingCost.name()}
                                value={mode.as_str()}
                                checked={shipping == Some(mode)}
                                onchange={field_change(link, OrderField::ShippingCost)}
                            />
                            { mode.label() }
                        </label>
                    }) }
                </div>
            </div>
            if goods {
                { select_input(component, link, OrderField::Incoterms, "Incoterms", INCOTERMS) }
            }
            { text_area(component, link, OrderField::PackagingDetails, "Packaging Details", "Optional") }
        </div>
    }
}

fn build_review_step(component: &PlaceOrderModal, link: &Scope<PlaceOrderModal>) -> Html {
    html! {
        <div class="wizard-step review">
            <h3>{ "Review Your Order" }</h3>
            if let Some(message) = &component.submit_error {
                <div class="form-error" role="alert">{ message.clone() }</div>
            }
            { for review_sections(component.wizard.draft()).into_iter().map(|section| build_review_section(section, link)) }
        </div>
    }
}

fn build_review_section(section: ReviewSection, link: &Scope<PlaceOrderModal>) -> Html {
    let target = section.step;
    html! {
        <section class="review-section">
            <div class="review-header">
                <h4>{ section.title }</h4>
                <button type="button" class="link-btn" onclick={link.callback(move |_| Msg::EditStep(target))}>
                    { "Edit" }
                </button>
            </div>
            <dl class="review-grid">
                { for section.rows.into_iter().map(|row| html! {
                    <div class={if row.wide { "review-row wide" } else { "review-row" }}>
                        <dt>{ row.label }</dt>
                        <dd>{ row.value }</dd>
                    </div>
                }) }
            </dl>
        </section>
    }
}

/// Back / Save as Draft on the left, Continue or Submit Order on the right.
fn build_navigation(component: &PlaceOrderModal, link: &Scope<PlaceOrderModal>) -> Html {
    let wizard = &component.wizard;
    let step = wizard.step();

    html! {
        <div class="wizard-nav">
            <div class="nav-left">
                if step.previous().is_some() {
                    <button type="button" class="btn secondary" onclick={link.callback(|_| Msg::Back)}>
                        { "Back" }
                    </button>
                }
                <button type="button" class="btn secondary" onclick={link.callback(|_| Msg::SaveDraft)}>
                    { "Save as Draft" }
                </button>
            </div>
            <div class="nav-right">
                if step == Step::Review {
                    <button type="submit" class="btn primary" disabled={!wizard.can_submit()}>
                        { if wizard.is_submitting() { "Submitting..." } else { "Submit Order" } }
                    </button>
                } else {
                    <button
                        type="button"
                        class="btn primary"
                        disabled={!wizard.can_proceed()}
                        onclick={link.callback(|_| Msg::Continue)}
                    >
                        { "Continue" }
                    </button>
                }
            </div>
        </div>
    }
}

fn field_change(link: &Scope<PlaceOrderModal>, field: OrderField) -> Callback<Event> {
    link.callback(move |e: Event| Msg::SetField(field, event_value(e.target())))
}

fn field_input(link: &Scope<PlaceOrderModal>, field: OrderField) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| Msg::SetField(field, event_value(e.target())))
}

fn text_input(
    component: &PlaceOrderModal,
    link: &Scope<PlaceOrderModal>,
    field: OrderField,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> Html {
    let name = field.name();
    html! {
        <div class="field">
            <label class="field-label" for={name}>{ label }</label>
            <input
                id={name}
                class="input-field"
                type={input_type}
                name={name}
                placeholder={placeholder}
                value={component.wizard.draft().value(field).to_string()}
                oninput={field_input(link, field)}
            />
        </div>
    }
}

fn text_area(
    component: &PlaceOrderModal,
    link: &Scope<PlaceOrderModal>,
    field: OrderField,
    label: &'static str,
    placeholder: &'static str,
) -> Html {
    let name = field.name();
    html! {
        <div class="field">
            <label class="field-label" for={name}>{ label }</label>
            <textarea
                id={name}
                class="input-field"
                rows="3"
                name={name}
                placeholder={placeholder}
                value={component.wizard.draft().value(field).to_string()}
                oninput={field_input(link, field)}
            />
        </div>
    }
}

fn select_input(
    component: &PlaceOrderModal,
    link: &Scope<PlaceOrderModal>,
    field: OrderField,
    label: &'static str,
    options: &'static [ChoiceOption],
) -> Html {
    let name = field.name();
    let current = component.wizard.draft().value(field).to_string();
    html! {
        <div class="field">
            <label class="field-label" for={name}>{ label }</label>
            <select id={name} class="input-field" name={name} onchange={field_change(link, field)}>
                { for options.iter().map(|option| html! {
                    <option value={option.value} selected={option.value == current}>
                        { option.label }
                    </option>
                }) }
            </select>
        </div>
    }
}
