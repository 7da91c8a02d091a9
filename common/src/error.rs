use thiserror::Error;

use crate::wizard::Step;

/// A value that cannot be stored in an order draft field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("unknown supplier type `{0}`")]
    UnknownSupplierType(String),
    #[error("unknown shipping cost mode `{0}`")]
    UnknownShippingCost(String),
}

/// Reasons a wizard action was refused or did not complete.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("{0} is incomplete")]
    StepIncomplete(Step),
    #[error("there is no step after {0}")]
    NoNextStep(Step),
    #[error("cannot jump from {from} to {to}")]
    InvalidJump { from: Step, to: Step },
    #[error("orders can only be submitted from the review step (currently on {0})")]
    NotOnReview(Step),
    #[error("a submission is already in progress")]
    SubmitInProgress,
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("submission failed: {0}")]
    SubmissionFailed(String),
    #[error(transparent)]
    Draft(#[from] DraftError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_errors_name_the_step_once() {
        assert_eq!(
            WizardError::StepIncomplete(Step::Supplier).to_string(),
            "step 1 (Supplier) is incomplete"
        );
        assert_eq!(
            WizardError::NoNextStep(Step::Review).to_string(),
            "there is no step after step 4 (Review)"
        );
        assert_eq!(
            WizardError::InvalidJump {
                from: Step::Commercial,
                to: Step::Review
            }
            .to_string(),
            "cannot jump from step 2 (Order) to step 4 (Review)"
        );
    }
}
