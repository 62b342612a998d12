use std::sync::Arc;

use crate::metadata::token::Token;

/// A reference-counted pointer to a `CustomAttributeValue`
pub type CustomAttributeValueRc = Arc<CustomAttributeValue>;
/// A vector that holds a list of `CustomAttributeValue` instances for storage on parent objects
pub type CustomAttributeValueList = Arc<boxcar::Vec<CustomAttributeValueRc>>;

/// An annotation applied to a type, field or method
#[derive(Debug, Clone)]
pub struct CustomAttributeValue {
    /// Token
    pub token: Token,
    /// Fully qualified name of the annotation type (e.g. `javax.persistence.Column`)
    pub type_name: String,
    /// Named arguments (fields and properties)
    pub named_args: Vec<CustomAttributeNamedArgument>,
}

impl CustomAttributeValue {
    /// Look up a named argument by name
    ///
    /// ## Arguments
    /// * 'name' - Name of the argument
    #[must_use]
    pub fn named_arg(&self, name: &str) -> Option<&CustomAttributeArgument> {
        self.named_args
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| &arg.value)
    }
}

/// Represents a single annotation argument value
#[derive(Debug, Clone, PartialEq)]
pub enum CustomAttributeArgument {
    /// Boolean value
    Bool(bool),
    /// Character value
    Char(char),
    /// Signed 32-bit integer
    I4(i32),
    /// Signed 64-bit integer
    I8(i64),
    /// 64-bit floating point
    R8(f64),
    /// UTF-8 string
    String(String),
    /// Type reference (as string)
    Type(String),
    /// Array of arguments
    Array(Vec<CustomAttributeArgument>),
    /// Enum value (enum type + constant name)
    Enum(String, String),
}

/// Represents a named argument in an annotation
#[derive(Debug, Clone, PartialEq)]
pub struct CustomAttributeNamedArgument {
    /// Name of the argument
    pub name: String,
    /// Value of the argument
    pub value: CustomAttributeArgument,
}
