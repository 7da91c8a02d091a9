//! The "Place Order" wizard: a four-step form controller over one [`OrderDraft`].
//!
//! The wizard owns the draft for its whole lifetime. Moving forward is gated by
//! a per-step readiness check computed from the current field values; moving
//! back, and jumping from the review step to an earlier one, is never gated.
//! Closing (cancel, save as draft, successful submit) is reported as a
//! [`WizardExit`] and the caller drops the wizard afterwards.
//!
//! Submitting is split in two halves so the network call can live outside this
//! crate: [`OrderWizard::begin_submit`] checks the preconditions, marks the
//! wizard as submitting and hands back the request to send;
//! [`OrderWizard::complete_submit`] records the outcome. While a submission is
//! pending a second `begin_submit` is refused.

mod review;

use std::fmt;

pub use review::{review_sections, ReviewRow, ReviewSection};

use crate::error::WizardError;
use crate::model::order::{OrderDraft, OrderField};
use crate::model::session::Session;
use crate::requests::QuoteRequest;

/// The four wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Supplier,
    Commercial,
    Logistics,
    Review,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Supplier, Step::Commercial, Step::Logistics, Step::Review];

    /// 1-based position shown in the progress indicator.
    pub fn number(self) -> u8 {
        match self {
            Step::Supplier => 1,
            Step::Commercial => 2,
            Step::Logistics => 3,
            Step::Review => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<Step> {
        Step::ALL.into_iter().find(|step| step.number() == number)
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Supplier => "Supplier",
            Step::Commercial => "Order",
            Step::Logistics => "Delivery",
            Step::Review => "Review",
        }
    }

    pub fn next(self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Step> {
        self.number().checked_sub(1).and_then(Step::from_number)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({})", self.number(), self.title())
    }
}

/// Readiness check guarding the "Continue" control of `step`.
///
/// Specifications, certification and incoterms never take part, so a service
/// provider order is gated exactly like a goods order. The review step has no
/// requirements of its own.
pub fn is_step_ready(step: Step, draft: &OrderDraft) -> bool {
    let filled = |field: OrderField| !draft.value(field).trim().is_empty();
    match step {
        Step::Supplier => {
            draft.supplier_type().is_some()
                && filled(OrderField::ProductName)
                && filled(OrderField::ItemDescription)
        }
        Step::Commercial => {
            !draft.value(OrderField::QuantityRequired).is_empty()
                && filled(OrderField::UnitOfMeasurement)
                && !draft.value(OrderField::UnitPrice).is_empty()
                && filled(OrderField::Currency)
        }
        Step::Logistics => {
            filled(OrderField::PaymentTerms)
                && filled(OrderField::PreferredPaymentMethod)
                && filled(OrderField::EstimatedDeliveryDate)
                && filled(OrderField::DeliveryLocation)
                && draft.shipping_cost().is_some()
        }
        Step::Review => true,
    }
}

/// Everything needed to send one order to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub user_id: String,
    pub access_token: String,
    pub payload: QuoteRequest,
}

/// How the wizard was closed.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardExit {
    Cancelled,
    /// The draft as it stood when "Save as Draft" was pressed.
    DraftSaved(OrderDraft),
    Submitted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderWizard {
    step: Step,
    draft: OrderDraft,
    submitting: bool,
}

impl Default for OrderWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderWizard {
    pub fn new() -> Self {
        Self {
            step: Step::Supplier,
            draft: OrderDraft::new(),
            submitting: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Edits one field. Never gated by the step checks.
    pub fn set_field(
        &mut self,
        field: OrderField,
        value: impl Into<String>,
    ) -> Result<(), WizardError> {
        self.draft.set(field, value)?;
        Ok(())
    }

    /// Whether "Continue" is enabled on the current step.
    pub fn can_proceed(&self) -> bool {
        self.step.next().is_some() && is_step_ready(self.step, &self.draft)
    }

    pub fn advance(&mut self) -> Result<Step, WizardError> {
        let next = self.step.next().ok_or(WizardError::NoNextStep(self.step))?;
        if !is_step_ready(self.step, &self.draft) {
            return Err(WizardError::StepIncomplete(self.step));
        }
        self.step = next;
        Ok(next)
    }

    /// Goes one step back; stays put on the first step.
    pub fn back(&mut self) -> Step {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Edit link from the review summary to an earlier step.
    pub fn edit(&mut self, target: Step) -> Result<Step, WizardError> {
        if self.step != Step::Review || target == Step::Review {
            return Err(WizardError::InvalidJump {
                from: self.step,
                to: target,
            });
        }
        self.step = target;
        Ok(target)
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.step == Step::Review && !self.submitting
    }

    /// Starts a submission on behalf of `session`.
    ///
    /// Fails without touching the wizard when not on the review step, when a
    /// submission is already pending, or when there is no session.
    pub fn begin_submit(&mut self, session: Option<&Session>) -> Result<Submission, WizardError> {
        if self.step != Step::Review {
            return Err(WizardError::NotOnReview(self.step));
        }
        if self.submitting {
            return Err(WizardError::SubmitInProgress);
        }
        let session = session.ok_or(WizardError::NotAuthenticated)?;

        self.submitting = true;
        Ok(Submission {
            user_id: session.user_id.clone(),
            access_token: session.access_token.clone(),
            payload: QuoteRequest::from(&self.draft),
        })
    }

    /// Records the outcome of the pending submission.
    ///
    /// Success closes the wizard. A failure clears the pending flag and leaves
    /// step and draft as they were so the user can retry or correct.
    pub fn complete_submit(&mut self, outcome: Result<(), String>) -> Result<WizardExit, WizardError> {
        self.submitting = false;
        match outcome {
            Ok(()) => Ok(WizardExit::Submitted),
            Err(reason) => Err(WizardError::SubmissionFailed(reason)),
        }
    }

    /// "Save as Draft": available on every step, no checks.
    pub fn save_draft(&mut self) -> WizardExit {
        self.submitting = false;
        WizardExit::DraftSaved(self.draft.clone())
    }

    pub fn cancel(&mut self) -> WizardExit {
        self.submitting = false;
        WizardExit::Cancelled
    }
}
