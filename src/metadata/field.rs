//! Field definitions of the in-memory type model.

use std::sync::Arc;

use bitflags::bitflags;

use crate::metadata::{
    customattributes::CustomAttributeValueList,
    token::Token,
    typesystem::{ClassTypeRc, ClassTypeRef, TypeSignature},
};

/// A reference-counted pointer to a `Field`
pub type FieldRc = Arc<Field>;
/// A vector that holds a list of `Field` instances, in declaration order
pub type FieldList = Arc<boxcar::Vec<FieldRc>>;

/// Bitmask for `ACCESS` state extraction
pub const FIELD_ACCESS_MASK: u32 = 0x0007;

bitflags! {
    #[derive(PartialEq, Eq, Debug, Clone, Copy)]
    /// Field access flags
    pub struct FieldAccessFlags: u32 {
        /// Accessible only by the parent type
        const PRIVATE = 0x0001;
        /// Accessible only by type and sub-types
        const FAMILY = 0x0004;
        /// Accessible by anyone who has visibility to this scope
        const PUBLIC = 0x0006;
        /// Defined on type, else per instance
        const STATIC = 0x0010;
    }
}

/// A field declared by a `ClassType`
pub struct Field {
    /// Token
    pub token: Token,
    /// Name of the field
    pub name: String,
    /// Raw field attributes
    pub flags: u32,
    /// Type of the field
    pub signature: TypeSignature,
    /// The type which declares this field
    pub declaring_type: ClassTypeRef,
    /// Custom attributes applied to this field
    pub custom_attributes: CustomAttributeValueList,
}

impl Field {
    /// Create a new instance of a `Field`
    ///
    /// ## Arguments
    /// * 'token'          - Token of the field
    /// * 'name'           - Name of the field
    /// * 'flags'          - Raw field attributes
    /// * 'signature'      - Type of the field
    /// * 'declaring_type' - The type that declares the field
    pub fn new(
        token: Token,
        name: String,
        flags: u32,
        signature: TypeSignature,
        declaring_type: &ClassTypeRc,
    ) -> Self {
        Field {
            token,
            name,
            flags,
            signature,
            declaring_type: ClassTypeRef::new(declaring_type),
            custom_attributes: Arc::new(boxcar::Vec::new()),
        }
    }

    /// Access flags, decoded from `flags`
    #[must_use]
    pub fn access(&self) -> FieldAccessFlags {
        FieldAccessFlags::from_bits_truncate(self.flags & FIELD_ACCESS_MASK)
    }

    /// Returns true if the field is static
    #[must_use]
    pub fn is_static(&self) -> bool {
        FieldAccessFlags::from_bits_truncate(self.flags).contains(FieldAccessFlags::STATIC)
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl Eq for Field {}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("token", &self.token)
            .field("name", &self.name)
            .field("signature", &self.signature)
            .field("access", &self.access())
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
    fn test_access_and_static() -> Result<()> {
        let registry = TypeRegistry::new();
        let owner = registry.create_type("", "Owner", None)?;

        let counter = Field::new(
            registry.next_token(TableId::Field),
            "COUNTER".to_string(),
            FieldAccessFlags::PUBLIC.bits() | FieldAccessFlags::STATIC.bits(),
            TypeSignature::I4,
            &owner,
        );
        assert_eq!(counter.access(), FieldAccessFlags::PUBLIC);
        assert!(counter.is_static());
        assert_eq!(counter.declaring_type.token(), Some(owner.token));

        let name = Field::new(
            registry.next_token(TableId::Field),
            "name".to_string(),
            FieldAccessFlags::PRIVATE.bits(),
            TypeSignature::String,
            &owner,
        );
        assert_eq!(name.access(), FieldAccessFlags::PRIVATE);
        assert!(!name.is_static());
        assert_ne!(counter, name);
        Ok(())
    }
}
