//! Schema-driven form validation.
//!
//! A [`Schema`] is a list of fields, each with an ordered list of rules. The
//! first failing rule of a field produces that field's [`FieldError`]; fields
//! without a failing rule are absent from the resulting [`FieldErrors`].

mod rule;
mod schema;
mod value;

pub use rule::{Rule, RuleKind};
pub use schema::{text_field, FieldError, FieldErrors, FieldSchema, Schema};
pub use value::{FieldValue, FormValues, FormValuesExt};
