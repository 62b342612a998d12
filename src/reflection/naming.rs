//! Identifier case conversion.
//!
//! Converts member names between lower and upper camel case, and from camel case to the
//! snake case used by storage schemas (`firstName` becomes the column `first_name`).
//!
//! The snake-case conversion is deliberately literal: every uppercase character after the
//! first one gets its own underscore, acronyms are not grouped. `ID` becomes `_i_d`, and
//! converting back to camel case does not restore the original name.
//!
//! # Examples
//!
//! ```rust
//! use beanscope::reflection::naming::{external_identifier, to_lower_camel_case, to_upper_camel_case};
//!
//! assert_eq!(external_identifier("birthDate"), "birth_date");
//! assert_eq!(to_upper_camel_case("name")?, "Name");
//! assert_eq!(to_lower_camel_case("Name")?, "name");
//! # Ok::<(), beanscope::Error>(())
//! ```

use crate::{Error, Result};

/// Rewrite the first character of `identifier` with `convert`, leaving the rest untouched
///
/// A character whose case mapping is not a single character (`ß` uppercases to `SS`) is
/// kept as is, so the result always has as many characters as `identifier`.
fn map_first<I, F>(identifier: &str, convert: F) -> Result<String>
where
    I: Iterator<Item = char>,
    F: FnOnce(char) -> I,
{
    let mut chars = identifier.chars();
    let first = chars.next().ok_or(Error::Empty)?;

    let mut mapped = convert(first);
    let first = match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => first,
    };

    let mut result = String::with_capacity(identifier.len());
    result.push(first);
    result.push_str(chars.as_str());
    Ok(result)
}

/// Uppercase the first character of `identifier`, all other characters stay unchanged
///
/// ## Arguments
/// * 'identifier' - The identifier to convert
///
/// # Errors
/// Returns [`Error::Empty`] if `identifier` is empty.
pub fn to_upper_camel_case(identifier: &str) -> Result<String> {
    map_first(identifier, char::to_uppercase)
}

/// Lowercase the first character of `identifier`, all other characters stay unchanged
///
/// ## Arguments
/// * 'identifier' - The identifier to convert
///
/// # Errors
/// Returns [`Error::Empty`] if `identifier` is empty.
pub fn to_lower_camel_case(identifier: &str) -> Result<String> {
    map_first(identifier, char::to_lowercase)
}

/// Convert a camel-case identifier to snake case
///
/// An underscore is inserted before every uppercase character that is not the first
/// character, and every character is lowercased. An empty identifier stays empty.
///
/// ## Arguments
/// * 'identifier' - The identifier to convert
#[must_use]
pub fn to_snake_case(identifier: &str) -> String {
    let mut result = String::with_capacity(identifier.len() + identifier.len() / 2);

    for (index, c) in identifier.chars().enumerate() {
        if index > 0 && c.is_uppercase() {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }

    result
}

/// The name an external schema (e.g. a database column) uses for a member
///
/// ## Arguments
/// * 'identifier' - The member name, in camel case
#[must_use]
pub fn external_identifier(identifier: &str) -> String {
    to_snake_case(identifier)
}
