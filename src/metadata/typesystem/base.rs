use std::sync::{Arc, Weak};

use crate::metadata::{
    token::Token,
    typesystem::{ClassType, ClassTypeRc},
};

/// A smart reference to a `ClassType` that automatically handles weak references
/// to prevent circular reference memory leaks while providing a clean API
///
/// Members point back at their declaring type and types point at their base through
/// this reference, the registry owns the strong side.
#[derive(Clone, Debug)]
pub struct ClassTypeRef {
    weak_ref: Weak<ClassType>,
}

impl ClassTypeRef {
    /// Create a new `ClassTypeRef` from a strong reference
    pub fn new(strong_ref: &ClassTypeRc) -> Self {
        Self {
            weak_ref: Arc::downgrade(strong_ref),
        }
    }

    /// Get a strong reference to the type, returning None if the type has been dropped
    #[must_use]
    pub fn upgrade(&self) -> Option<ClassTypeRc> {
        self.weak_ref.upgrade()
    }

    /// Get the token of the referenced type (if still alive)
    #[must_use]
    pub fn token(&self) -> Option<Token> {
        self.upgrade().map(|t| t.token)
    }
}

/// The type of a field, parameter or return value.
///
/// Only [`TypeSignature::Void`] carries meaning for accessor classification, the rest is
/// kept so that a model reads like the code it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSignature {
    /// No value, only valid as a return type
    Void,
    /// `bool`
    Boolean,
    /// 16-bit character
    Char,
    /// Signed 8-bit integer
    I1,
    /// Unsigned 8-bit integer
    U1,
    /// Signed 16-bit integer
    I2,
    /// Unsigned 16-bit integer
    U2,
    /// Signed 32-bit integer
    I4,
    /// Unsigned 32-bit integer
    U4,
    /// Signed 64-bit integer
    I8,
    /// Unsigned 64-bit integer
    U8,
    /// 32-bit floating point
    R4,
    /// 64-bit floating point
    R8,
    /// String
    String,
    /// The root object type
    Object,
    /// A class or value type, by fully qualified name
    Class(String),
    /// Single-dimensional array of the inner type
    SzArray(Box<TypeSignature>),
}

impl TypeSignature {
    /// Check if this is the "no value" type
    #[must_use]
    pub fn is_void(&self) -> bool {
        matches!(self, TypeSignature::Void)
    }
}
