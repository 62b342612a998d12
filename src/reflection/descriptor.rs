//! Capabilities a host type system has to provide.
//!
//! Introspection never touches a concrete type model directly. Everything it needs is
//! expressed through four descriptor kinds: types, fields, methods and annotations. The
//! associated types tie them together so that a field or method always reports a declaring
//! type of the same model it came from.
//!
//! [`crate::metadata::typesystem`] implements these traits for its `Arc`-based model; a
//! code generator or another metadata reader can implement them just as well.

/// An annotation instance attached to a type, field or method
pub trait AnnotationDescriptor: Clone {
    /// Fully qualified name of the annotation type
    fn type_name(&self) -> &str;
}

/// An element that can carry annotations
pub trait Annotated {
    /// The annotation descriptor of the host model
    type Annotation: AnnotationDescriptor;

    /// All annotations present on the element, in declaration order
    fn annotations(&self) -> Vec<Self::Annotation>;
}

/// A type (class) of the host model.
///
/// Equality must be type identity. A type with no base is a root of the hierarchy.
pub trait TypeDescriptor: Annotated + Clone + PartialEq {
    /// The field descriptor of the host model
    type Field: FieldDescriptor<Type = Self>;
    /// The method descriptor of the host model
    type Method: MethodDescriptor<Type = Self>;

    /// Simple name of the type
    fn name(&self) -> &str;

    /// Fully qualified name of the type
    fn fullname(&self) -> String;

    /// The single parent type, `None` at the root
    fn base(&self) -> Option<Self>;

    /// Fields declared by this type itself, in declaration order
    fn declared_fields(&self) -> Vec<Self::Field>;

    /// Methods declared by this type itself, in declaration order
    fn declared_methods(&self) -> Vec<Self::Method>;
}

/// A field declared by a type
pub trait FieldDescriptor: Annotated + Clone {
    /// The type descriptor of the host model
    type Type: TypeDescriptor<Field = Self>;

    /// Name of the field
    fn name(&self) -> &str;

    /// The type declaring this field, `None` if it is no longer available
    fn declaring_type(&self) -> Option<Self::Type>;
}

/// A method declared by a type
pub trait MethodDescriptor: Annotated + Clone {
    /// The type descriptor of the host model
    type Type: TypeDescriptor<Method = Self>;

    /// Name of the method
    fn name(&self) -> &str;

    /// Number of declared parameters
    fn parameter_count(&self) -> usize;

    /// Returns true if the method returns no value
    fn returns_void(&self) -> bool;

    /// Returns true if the method is visible to everyone
    fn is_public(&self) -> bool;

    /// The type declaring this method, `None` if it is no longer available
    fn declaring_type(&self) -> Option<Self::Type>;
}
