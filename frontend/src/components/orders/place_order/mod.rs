//! "Place New Order" wizard: a modal that walks the buyer through supplier
//! details, order details, delivery & payment and a final review, then sends
//! the order as a quote request.
//!
//! Step guards, the derived total and the submit guard live in
//! [`common::wizard::OrderWizard`]; this component only renders it and runs the
//! network call.

use yew::prelude::*;

pub mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::PlaceOrderProps;
pub use state::PlaceOrderModal;

impl Component for PlaceOrderModal {
    type Message = Msg;
    type Properties = PlaceOrderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PlaceOrderModal::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
