//! # beanscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the beanscope library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all beanscope operations
pub use crate::Error;

/// The result type used throughout beanscope
pub use crate::Result;

// ================================================================================================
// Introspection
// ================================================================================================

/// Immutable snapshot of a type and its members
pub use crate::reflection::Reflection;

/// Accessor recognition and its conventions
pub use crate::reflection::{AccessorClassifier, AccessorConfig};

/// Capabilities a host type system provides
pub use crate::reflection::descriptor::{
    Annotated, AnnotationDescriptor, FieldDescriptor, MethodDescriptor, TypeDescriptor,
};

/// Identifier conversion
pub use crate::reflection::naming::{
    external_identifier, to_lower_camel_case, to_snake_case, to_upper_camel_case,
};

// ================================================================================================
// In-memory Type Model
// ================================================================================================

/// Metadata token type for referencing types and members
pub use crate::metadata::token::Token;

/// Core type system components
pub use crate::metadata::typesystem::{
    ClassBuilder, ClassType, ClassTypeRc, ClassTypeRef, FieldBuilder, MethodBuilder,
    TypeRegistry, TypeSignature,
};

/// Fields and methods
pub use crate::metadata::{
    field::{Field, FieldRc},
    method::{Method, MethodRc},
};

/// Annotations
pub use crate::metadata::customattributes::{CustomAttributeArgument, CustomAttributeValueRc};
