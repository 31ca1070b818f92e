//! Request pipeline
//!
//! JSON request model, validation, dispatch to the operation modules and
//! the flat JSON response.

pub mod request;
pub mod response;
pub mod runner;
pub mod validation;
