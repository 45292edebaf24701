//! # Symptom CLI
//!
//! Terminal front end for the symptom relay: a form controller that validates input,
//! calls the relay over HTTP and renders the result or the failure notification.

pub mod client;
pub mod form;
pub mod render;
