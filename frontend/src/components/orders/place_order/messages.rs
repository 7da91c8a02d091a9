use common::model::order::OrderField;
use common::wizard::Step;

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    SetField(OrderField, String),
    Continue,
    Back,
    /// Edit link on the review summary.
    EditStep(Step),
    Submit,
    SubmitSucceeded { count: u64 },
    SubmitFailed(String),
    SaveDraft,
    Close,
}
