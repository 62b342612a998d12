//! Method definitions of the in-memory type model.
//!
//! A [`Method`] records what accessor classification needs: its name, parameter list,
//! return type, access flags and declaring type. Annotations on the method are kept
//! alongside.

mod types;

pub use types::*;

use std::sync::Arc;

use crate::metadata::{
    customattributes::CustomAttributeValueList,
    token::Token,
    typesystem::{ClassTypeRc, ClassTypeRef, TypeSignature},
};

/// A reference-counted pointer to a `Method`
pub type MethodRc = Arc<Method>;
/// A vector that holds a list of `Method` instances, in declaration order
pub type MethodList = Arc<boxcar::Vec<MethodRc>>;

/// A single method parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Name of the parameter
    pub name: String,
    /// Type of the parameter
    pub signature: TypeSignature,
}

/// A method declared by a `ClassType`
pub struct Method {
    /// Token
    pub token: Token,
    /// Name of the method
    pub name: String,
    /// Raw method attributes (access, modifiers)
    pub flags: u32,
    /// Access flags, decoded from `flags`
    pub flags_access: MethodAccessFlags,
    /// Modifiers, decoded from `flags`
    pub flags_modifiers: MethodModifiers,
    /// Parameters in declaration order
    pub params: Vec<Parameter>,
    /// Return type
    pub return_type: TypeSignature,
    /// The type which declares this method
    pub declaring_type: ClassTypeRef,
    /// Custom attributes applied to this method
    pub custom_attributes: CustomAttributeValueList,
}

impl Method {
    /// Create a new instance of a `Method`
    ///
    /// ## Arguments
    /// * 'token'          - Token of the method
    /// * 'name'           - Name of the method
    /// * 'flags'          - Raw method attributes
    /// * 'params'         - Parameters in declaration order
    /// * 'return_type'    - The return type
    /// * 'declaring_type' - The type that declares the method
    pub fn new(
        token: Token,
        name: String,
        flags: u32,
        params: Vec<Parameter>,
        return_type: TypeSignature,
        declaring_type: &ClassTypeRc,
    ) -> Self {
        Method {
            token,
            name,
            flags,
            flags_access: MethodAccessFlags::from_method_flags(flags),
            flags_modifiers: MethodModifiers::from_method_flags(flags),
            params,
            return_type,
            declaring_type: ClassTypeRef::new(declaring_type),
            custom_attributes: Arc::new(boxcar::Vec::new()),
        }
    }

    /// Returns true if the method is static
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.flags_modifiers.contains(MethodModifiers::STATIC)
    }
}

impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for Method {}

impl std::fmt::Debug for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Method")
            .field("token", &self.token)
            .field("name", &self.name)
            .field("params", &self.params.len())
            .field("return_type", &self.return_type)
            .field("access", &self.flags_access)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{token::TableId, typesystem::TypeRegistry},
        Result,
    };

    #[test]
    fn test_decoded_flags() -> Result<()> {
        let registry = TypeRegistry::new();
        let owner = registry.create_type("", "Owner", None)?;

        let create = Method::new(
            registry.next_token(TableId::MethodDef),
            "create".to_string(),
            MethodAccessFlags::PUBLIC.bits() | MethodModifiers::STATIC.bits(),
            vec![Parameter {
                name: "name".to_string(),
                signature: TypeSignature::String,
            }],
            TypeSignature::Class("Owner".to_string()),
            &owner,
        );
        assert!(create.flags_access.is_public());
        assert!(create.is_static());
        assert_eq!(create.declaring_type.token(), Some(owner.token));

        let same_token = Method::new(
            create.token,
            "other".to_string(),
            0,
            Vec::new(),
            TypeSignature::Void,
            &owner,
        );
        assert_eq!(create, same_token);
        Ok(())
    }
}
