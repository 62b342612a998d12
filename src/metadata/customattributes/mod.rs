//! Annotations (custom attributes) attached to types, fields and methods.
//!
//! The in-memory model stores annotations exactly as they were declared: the fully
//! qualified name of the annotation type plus its named arguments.
//! Interpreting an annotation is left to the caller, see
//! [`crate::reflection::annotation`] for the lookup primitives.

mod types;

pub use types::*;
