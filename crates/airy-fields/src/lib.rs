//! # airy-fields
//!
//! Floating-label text fields for airy.
//!
//! - [`TextField`] - single-line input with a title that appears once text is entered
//! - [`IconTextField`] - the same field with an icon before or after the input
//! - [`Validator`] - contract for checking a field's value, with stock validators
//!
//! Fields render the value they are given and report edits through callbacks;
//! the caller owns the value.

mod editor;
mod field;
mod icon_text_field;
mod style;
mod text_field;
mod validation;

pub use icon_text_field::*;
pub use style::*;
pub use text_field::*;
pub use validation::*;
