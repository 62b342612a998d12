//! Type system of the in-memory model.
//!
//! This module provides a concrete host type system: classes with a single base type,
//! declared fields, declared methods and annotations. It implements the descriptor traits
//! of [`crate::reflection::descriptor`] so that a [`crate::reflection::Reflection`] can be
//! built for any [`ClassTypeRc`].
//!
//! # Key Components
//!
//! - [`ClassType`]: Core type representation
//! - [`TypeRegistry`]: Central registry owning all types and allocating tokens
//! - [`ClassBuilder`]: Fluent API for declaring types and their members
//! - [`TypeSignature`]: Field, parameter and return types
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use beanscope::metadata::typesystem::{ClassBuilder, TypeRegistry, TypeSignature};
//!
//! let registry = Arc::new(TypeRegistry::new());
//! let person = ClassBuilder::new("Person")
//!     .namespace("com.example")
//!     .field("name", TypeSignature::String)
//!     .build(&registry)?;
//!
//! assert_eq!(person.fullname(), "com.example.Person");
//! assert_eq!(registry.get_by_fullname("com.example.Person").map(|t| t.token), Some(person.token));
//! # Ok::<(), beanscope::Error>(())
//! ```

mod base;
mod builder;
mod registry;

use std::sync::{Arc, OnceLock};

pub use base::{ClassTypeRef, TypeSignature};
pub use builder::{ClassBuilder, FieldBuilder, MethodBuilder};
pub use registry::TypeRegistry;

use crate::{
    metadata::{
        customattributes::{CustomAttributeValueList, CustomAttributeValueRc},
        field::{FieldList, FieldRc},
        method::{MethodList, MethodRc},
        token::Token,
    },
    reflection::descriptor::{
        Annotated, AnnotationDescriptor, FieldDescriptor, MethodDescriptor, TypeDescriptor,
    },
    Error, Result,
};

/// Reference to a `ClassType`
pub type ClassTypeRc = Arc<ClassType>;

/// Represents a class of the modeled type system, with its declared members.
///
/// Identity is the `token`: two `ClassType` values are equal exactly when their tokens are.
pub struct ClassType {
    /// Token
    pub token: Token,
    /// Namespace or package (can be empty)
    pub namespace: String,
    /// Simple name
    pub name: String,
    /// This types base aka 'extends', `None` for a root type
    base: OnceLock<ClassTypeRef>,
    /// All fields this type declares, in declaration order
    pub fields: FieldList,
    /// All methods this type declares, in declaration order
    pub methods: MethodList,
    /// All custom attributes this type has
    pub custom_attributes: CustomAttributeValueList,
}

impl ClassType {
    /// Create a new instance of a `ClassType`
    pub fn new(
        token: Token,
        namespace: String,
        name: String,
        base: Option<&ClassTypeRc>,
    ) -> Self {
        let base_lock = OnceLock::new();
        if let Some(base_value) = base {
            base_lock.set(ClassTypeRef::new(base_value)).ok();
        }

        ClassType {
            token,
            namespace,
            name,
            base: base_lock,
            fields: Arc::new(boxcar::Vec::new()),
            methods: Arc::new(boxcar::Vec::new()),
            custom_attributes: Arc::new(boxcar::Vec::new()),
        }
    }

    /// Access the base type of this type, if it exists
    pub fn base(&self) -> Option<ClassTypeRc> {
        self.base.get().and_then(ClassTypeRef::upgrade)
    }

    /// Set the base type, once
    ///
    /// ## Arguments
    /// * 'base' - The type this type extends
    ///
    /// # Errors
    /// Returns an error if the base type has already been set.
    pub fn set_base(&self, base: &ClassTypeRc) -> Result<()> {
        self.base.set(ClassTypeRef::new(base)).map_err(|_| {
            Error::Error(format!("Base type of '{}' is already set", self.fullname()))
        })
    }

    /// Returns the full name (Namespace.Name) of the entity
    pub fn fullname(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{0}.{1}", self.namespace, self.name)
        }
    }
}

impl PartialEq for ClassType {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for ClassType {}

impl std::fmt::Debug for ClassType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassType")
            .field("token", &self.token)
            .field("fullname", &self.fullname())
            .field("fields", &self.fields.count())
            .field("methods", &self.methods.count())
            .finish()
    }
}

impl AnnotationDescriptor for CustomAttributeValueRc {
    fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl Annotated for ClassTypeRc {
    type Annotation = CustomAttributeValueRc;

    fn annotations(&self) -> Vec<Self::Annotation> {
        self.custom_attributes.iter().map(|(_, a)| a.clone()).collect()
    }
}

impl TypeDescriptor for ClassTypeRc {
    type Field = FieldRc;
    type Method = MethodRc;

    fn name(&self) -> &str {
        &self.name
    }

    fn fullname(&self) -> String {
        ClassType::fullname(self)
    }

    fn base(&self) -> Option<Self> {
        ClassType::base(self)
    }

    fn declared_fields(&self) -> Vec<Self::Field> {
        self.fields.iter().map(|(_, f)| f.clone()).collect()
    }

    fn declared_methods(&self) -> Vec<Self::Method> {
        self.methods.iter().map(|(_, m)| m.clone()).collect()
    }
}

impl Annotated for FieldRc {
    type Annotation = CustomAttributeValueRc;

    fn annotations(&self) -> Vec<Self::Annotation> {
        self.custom_attributes.iter().map(|(_, a)| a.clone()).collect()
    }
}

impl FieldDescriptor for FieldRc {
    type Type = ClassTypeRc;

    fn name(&self) -> &str {
        &self.name
    }

    fn declaring_type(&self) -> Option<Self::Type> {
        self.declaring_type.upgrade()
    }
}

impl Annotated for MethodRc {
    type Annotation = CustomAttributeValueRc;

    fn annotations(&self) -> Vec<Self::Annotation> {
        self.custom_attributes.iter().map(|(_, a)| a.clone()).collect()
    }
}

impl MethodDescriptor for MethodRc {
    type Type = ClassTypeRc;

    fn name(&self) -> &str {
        &self.name
    }

    fn parameter_count(&self) -> usize {
        self.params.len()
    }

    fn returns_void(&self) -> bool {
        self.return_type.is_void()
    }

    fn is_public(&self) -> bool {
        self.flags_access.is_public()
    }

    fn declaring_type(&self) -> Option<Self::Type> {
        self.declaring_type.upgrade()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::token::TableId;

    fn class(row: u32, namespace: &str, name: &str) -> ClassTypeRc {
        Arc::new(ClassType::new(
            Token::from_parts(TableId::TypeDef, row),
            namespace.to_string(),
            name.to_string(),
            None,
        ))
    }

    #[test]
    fn test_fullname() {
        assert_eq!(class(1, "com.example", "Dummy").fullname(), "com.example.Dummy");
        assert_eq!(class(2, "", "Dummy").fullname(), "Dummy");
    }

    #[test]
    fn test_base_set_once() {
        let object = class(1, "java.lang", "Object");
        let other = class(2, "java.lang", "Number");
        let dummy = class(3, "com.example", "Dummy");

        assert!(dummy.base().is_none());
        assert!(dummy.set_base(&object).is_ok());
        assert!(matches!(dummy.set_base(&other), Err(Error::Error(_))));
        assert_eq!(dummy.base().map(|b| b.token), Some(object.token));
    }

    #[test]
    fn test_base_dropped() {
        let dummy = class(2, "", "Dummy");
        {
            let parent = class(1, "", "Parent");
            dummy.set_base(&parent).unwrap();
            assert!(dummy.base().is_some());
        }
        assert!(dummy.base().is_none());
    }

    #[test]
    fn test_identity_by_token() {
        let a = class(1, "a", "Same");
        let b = class(1, "b", "Other");
        let c = class(2, "a", "Same");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
