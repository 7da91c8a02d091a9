//! Quote requests the signed-in user has already sent, newest first.

use common::model::session::Session;
use common::requests::QuoteRecord;
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

pub enum Msg {
    Load,
    Loaded(Vec<QuoteRecord>),
    Failed(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct OrderHistoryProps {
    pub session: Session,
    /// Bumped by the parent to force a reload, e.g. after a submission.
    #[prop_or_default]
    pub revision: u32,
}

pub struct OrderHistory {
    records: Vec<QuoteRecord>,
    loading: bool,
    error: Option<String>,
}

impl Component for OrderHistory {
    type Message = Msg;
    type Properties = OrderHistoryProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            records: Vec::new(),
            loading: true,
            error: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        ctx.link().send_message(Msg::Load);
        false
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                self.loading = true;
                let session = ctx.props().session.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::list_quote_requests(&session).await {
                        Ok(records) => link.send_message(Msg::Loaded(records)),
                        Err(err) => link.send_message(Msg::Failed(err.to_string())),
                    }
                });
            }
            Msg::Loaded(mut records) => {
                records.reverse();
                self.records = records;
                self.loading = false;
                self.error = None;
            }
            Msg::Failed(reason) => {
                error!(format!("Error loading quote requests: {}", reason));
                self.loading = false;
                self.error = Some(reason);
            }
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="order-history">
                <h3>{ "Your quote requests" }</h3>
                if let Some(message) = &self.error {
                    <div class="form-error" role="alert">{ message.clone() }</div>
                } else if self.loading && self.records.is_empty() {
                    <p class="muted">{ "Loading..." }</p>
                } else if self.records.is_empty() {
                    <p class="muted">{ "No orders placed yet." }</p>
                } else {
                    <table class="history-table">
                        <thead>
                            <tr>
                                <th>{ "Sent" }</th>
                                <th>{ "Product" }</th>
                                <th>{ "Supplier" }</th>
                                <th>{ "Quantity" }</th>
                                <th>{ "Total" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for self.records.iter().map(history_row) }
                        </tbody>
                    </table>
                }
            </section>
        }
    }
}

fn history_row(record: &QuoteRecord) -> Html {
    let order = record.order();
    html! {
        <tr>
            <td>{ received_date(&record.received_at).to_string() }</td>
            <td>{ order.product_name }</td>
            <td>{ order.supplier_type.map(|kind| kind.label()).unwrap_or("-") }</td>
            <td>{ format!("{} {}", order.quantity_required, order.unit_of_measurement).trim().to_string() }</td>
            <td>{ format!("{} {}", order.total_price_estimate, order.currency).trim().to_string() }</td>
        </tr>
    }
}

/// Date part of an RFC 3339 timestamp.
fn received_date(received_at: &str) -> &str {
    received_at.split('T').next().unwrap_or(received_at)
}
