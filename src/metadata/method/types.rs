//! Method attribute flags.
//!
//! # Key Types
//! - [`MethodAccessFlags`]: Visibility of a method
//! - [`MethodModifiers`]: Properties beyond visibility, such as `static`

use bitflags::bitflags;

/// Bitmask for `ACCESS` state extraction
pub const METHOD_ACCESS_MASK: u32 = 0x0007;

bitflags! {
    #[derive(PartialEq, Eq, Debug, Clone, Copy)]
    /// Method access flags
    pub struct MethodAccessFlags: u32 {
        /// Accessible only by the parent type
        const PRIVATE = 0x0001;
        /// Accessible only by type and sub-types
        const FAMILY = 0x0004;
        /// Accessible by anyone who has visibility to this scope
        const PUBLIC = 0x0006;
    }
}

impl MethodAccessFlags {
    /// Extract access flags from raw method attributes
    #[must_use]
    pub fn from_method_flags(flags: u32) -> Self {
        let access = flags & METHOD_ACCESS_MASK;
        Self::from_bits_truncate(access)
    }

    /// The access level is exactly public
    #[must_use]
    pub fn is_public(&self) -> bool {
        *self == MethodAccessFlags::PUBLIC
    }
}

bitflags! {
    #[derive(PartialEq, Eq, Debug, Clone, Copy)]
    /// Method modifiers and properties
    pub struct MethodModifiers: u32 {
        /// Defined on type, else per instance
        const STATIC = 0x0010;
    }
}

impl MethodModifiers {
    /// Extract method modifiers from raw method attributes
    #[must_use]
    pub fn from_method_flags(flags: u32) -> Self {
        Self::from_bits_truncate(flags & !METHOD_ACCESS_MASK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_flags_extraction() {
        assert_eq!(
            MethodAccessFlags::from_method_flags(0x0006 | 0x0010),
            MethodAccessFlags::PUBLIC
        );
        assert_eq!(
            MethodAccessFlags::from_method_flags(0x0001),
            MethodAccessFlags::PRIVATE
        );
        assert!(MethodAccessFlags::from_method_flags(0x0000).is_empty());
    }

    #[test]
    fn test_is_public() {
        assert!(MethodAccessFlags::PUBLIC.is_public());
        // 0x0005 shares bits with PUBLIC but is not public
        assert!(!MethodAccessFlags::from_method_flags(0x0005).is_public());
        assert!(!MethodAccessFlags::FAMILY.is_public());
    }

    #[test]
    fn test_modifiers_extraction() {
        let modifiers = MethodModifiers::from_method_flags(0x0006 | 0x0010);
        assert_eq!(modifiers, MethodModifiers::STATIC);
        assert!(MethodModifiers::from_method_flags(0x0006).is_empty());
    }
}
