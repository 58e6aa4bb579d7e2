//! Form validation.
//!
//! Field rules are pure functions; step validators aggregate them over a
//! [`FormDraft`](crate::vehicle::FormDraft) into a [`ValidationResult`].

pub mod field;
mod result;
pub mod step;

pub(crate) use result::ErrorCollector;
pub use result::{DraftField, FieldErrors, ValidationResult};
pub use step::validate_step;
