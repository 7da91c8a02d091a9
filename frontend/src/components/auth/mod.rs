//! Sign-in and sign-up forms. Both only talk to the backend; the session they
//! produce is handed to the parent, which keeps it in memory.

pub mod sign_in;
pub mod sign_up;
