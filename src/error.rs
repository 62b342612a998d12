use thiserror::Error;

use crate::metadata::token::Token;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Introspection itself reports "not found" through `Option`, so the variants here are limited
/// to precondition violations of the identifier codec and to failures of the in-memory type
/// model.
///
/// # Error Categories
///
/// ## Identifier Errors
/// - [`Error::Empty`] - An identifier conversion received an empty string
///
/// ## Type Model Errors
/// - [`Error::TypeInsert`] - Failed to register a new type in the registry
/// - [`Error::Error`] - Miscellaneous failures
///
/// # Examples
///
/// ```rust
/// use beanscope::{Error, reflection::naming::to_upper_camel_case};
///
/// match to_upper_camel_case("") {
///     Ok(name) => println!("converted: {}", name),
///     Err(Error::Empty) => eprintln!("identifier must not be empty"),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Provided input was empty.
    ///
    /// Camel-case conversions rewrite the first character of an identifier, so an empty
    /// identifier is rejected instead of being passed through silently.
    #[error("Provided input was empty")]
    Empty,

    /// Generic error for miscellaneous failures.
    #[error("{0}")]
    Error(String),

    /// Failed to insert new type into the `TypeRegistry`.
    ///
    /// Occurs when a type is registered under a token that is already taken.
    #[error("Failed to insert new type into TypeRegistry - {0}")]
    TypeInsert(Token),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::Empty.to_string(), "Provided input was empty");
        assert_eq!(
            Error::TypeInsert(Token(0x02000001)).to_string(),
            "Failed to insert new type into TypeRegistry - 0x02000001"
        );
        assert_eq!(Error::Error("broken".to_string()).to_string(), "broken");
    }
}
