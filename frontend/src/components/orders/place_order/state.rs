//! State of the `PlaceOrderModal`.

use common::wizard::OrderWizard;

pub struct PlaceOrderModal {
    /// Current step, draft and pending-submit flag.
    pub wizard: OrderWizard,

    /// Last submission problem, shown above the review summary until the next
    /// attempt.
    pub submit_error: Option<String>,
}

impl PlaceOrderModal {
    /// A fresh wizard on the first step with the default draft.
    pub fn new() -> Self {
        Self {
            wizard: OrderWizard::new(),
            submit_error: None,
        }
    }
}
