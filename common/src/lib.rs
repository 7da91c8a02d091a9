//! Types shared by the Procuroid frontend and backend.
//!
//! - `model`: the order draft and session records.
//! - `requests`: JSON bodies exchanged with the backend API.
//! - `wizard`: the "Place Order" step machine driven by the frontend.
//! - `error`: failures raised by the draft and the wizard.

pub mod error;
pub mod model;
pub mod requests;
pub mod wizard;
