//! Properties of the `PlaceOrderModal`.

use common::model::session::Session;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PlaceOrderProps {
    /// Session the order is sent on behalf of.
    ///
    /// Read when "Submit Order" is pressed, not when the modal opens, so a
    /// sign-in that happens while the modal is open is picked up. With `None`
    /// the submission is refused and the user is told to sign in.
    #[prop_or_default]
    pub session: Option<Session>,

    /// Emitted once the modal is done: cancelled, saved as draft or submitted.
    /// The parent unmounts the modal, which discards the draft.
    pub on_close: Callback<()>,

    /// Emitted after a successful submission, before `on_close`.
    #[prop_or_default]
    pub on_submitted: Callback<()>,
}
