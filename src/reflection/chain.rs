//! Inheritance chain traversal and member aggregation.
//!
//! Members are never merged by name. Every level of the chain contributes the members it
//! declares itself, most-derived level first, so a shadowed field shows up once per level
//! that declares it.

use tracing::warn;

use crate::reflection::descriptor::{FieldDescriptor, MethodDescriptor, TypeDescriptor};

/// The type itself followed by its base, the base of its base, ... up to and including
/// the root
///
/// A malformed host model whose base links loop back to an already visited type is cut at
/// the first repetition, so the chain never contains a type twice.
///
/// ## Arguments
/// * 'ty' - The most derived type
pub fn inheritance_chain<T: TypeDescriptor>(ty: &T) -> Vec<T> {
    let mut chain = vec![ty.clone()];

    let mut parent = ty.base();
    while let Some(current) = parent {
        if chain.contains(&current) {
            warn!(
                type_name = %ty.fullname(),
                repeated = %current.fullname(),
                "inheritance chain loops back to a visited type"
            );
            break;
        }
        parent = current.base();
        chain.push(current);
    }

    chain
}

/// Declared fields of every type in the chain of `ty`, in chain order
///
/// ## Arguments
/// * 'ty' - The most derived type
pub fn fields<T: TypeDescriptor>(ty: &T) -> Vec<T::Field> {
    fields_of(&inheritance_chain(ty))
}

/// Declared fields of every type in an already computed `chain`, in chain order
///
/// ## Arguments
/// * 'chain' - A chain as returned by [`inheritance_chain`]
pub fn fields_of<T: TypeDescriptor>(chain: &[T]) -> Vec<T::Field> {
    chain
        .iter()
        .flat_map(TypeDescriptor::declared_fields)
        .collect()
}

/// Declared methods of every type in the chain of `ty`, in chain order
///
/// ## Arguments
/// * 'ty' - The most derived type
pub fn methods<T: TypeDescriptor>(ty: &T) -> Vec<T::Method> {
    methods_of(&inheritance_chain(ty))
}

/// Declared methods of every type in an already computed `chain`, in chain order
///
/// ## Arguments
/// * 'chain' - A chain as returned by [`inheritance_chain`]
pub fn methods_of<T: TypeDescriptor>(chain: &[T]) -> Vec<T::Method> {
    chain
        .iter()
        .flat_map(TypeDescriptor::declared_methods)
        .collect()
}

/// The first field named `name` in the chain of `ty`
///
/// ## Arguments
/// * 'ty'   - The most derived type
/// * 'name' - Name of the field
pub fn field<T: TypeDescriptor>(ty: &T, name: &str) -> Option<T::Field> {
    fields(ty).into_iter().find(|f| f.name() == name)
}

/// The first method named `name` in the chain of `ty`
///
/// ## Arguments
/// * 'ty'   - The most derived type
/// * 'name' - Name of the method
pub fn method<T: TypeDescriptor>(ty: &T, name: &str) -> Option<T::Method> {
    methods(ty).into_iter().find(|m| m.name() == name)
}

/// Returns true if some type in the chain of `ty` declares a field named `name`
///
/// ## Arguments
/// * 'ty'   - The most derived type
/// * 'name' - Name of the field
pub fn has_field<T: TypeDescriptor>(ty: &T, name: &str) -> bool {
    field(ty, name).is_some()
}

/// Returns true if some type in the chain of `ty` declares a method named `name`
///
/// ## Arguments
/// * 'ty'   - The most derived type
/// * 'name' - Name of the method
pub fn has_method<T: TypeDescriptor>(ty: &T, name: &str) -> bool {
    method(ty, name).is_some()
}
