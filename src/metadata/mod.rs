//! The in-memory type model.
//!
//! A small, thread-safe class model that implements the descriptor traits of
//! [`crate::reflection::descriptor`]. Types live in a [`typesystem::TypeRegistry`] and are
//! referenced by [`token::Token`]; fields and methods point back to their declaring type
//! through weak references, so the registry has to outlive any introspection done on them.

/// Annotations attached to types, fields and methods
pub mod customattributes;
/// Fields declared by a type
pub mod field;
/// Methods declared by a type
pub mod method;
/// Identifiers of types, members and annotations
pub mod token;
/// Classes, the registry owning them, and builders to declare them
pub mod typesystem;
