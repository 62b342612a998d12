// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # beanscope
//!
//! [![Crates.io](https://img.shields.io/crates/v/beanscope.svg)](https://crates.io/crates/beanscope)
//! [![Documentation](https://docs.rs/beanscope/badge.svg)](https://docs.rs/beanscope)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/beanscope/blob/main/LICENSE-APACHE)
//!
//! Convention-based introspection for class hierarchies. `beanscope` walks the inheritance
//! chain of a type, flattens its fields and methods, recognizes getters and setters by the
//! bean naming conventions and derives the snake-case identifiers external schemas use.
//!
//! ## Features
//!
//! - **Host agnostic** - Works on any type system that implements the traits in
//!   [`reflection::descriptor`]
//! - **In-memory type model** - A ready-to-use, thread-safe model in [`metadata`]
//! - **Accessor recognition** - Getters and setters by name, signature, visibility and backing field
//! - **Identifier conversion** - Camel case and snake case
//! - **Annotation lookup** - By fully qualified annotation type
//!
//! ## Quick Start
//!
//! ```rust
//! use beanscope::prelude::*;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(TypeRegistry::new());
//! let dummy = ClassBuilder::new("Dummy")
//!     .namespace("com.example")
//!     .auto_property("id", TypeSignature::I8)
//!     .auto_property("firstName", TypeSignature::String)
//!     .method("getUnknownThing", |m| m.public().returns(TypeSignature::String))
//!     .build(&registry)?;
//!
//! let reflection = Reflection::new(&dummy);
//! assert_eq!(reflection.getters().len(), 2);
//!
//! let first_name = reflection.field("firstName").unwrap();
//! assert_eq!(reflection.exact_getter(first_name).map(|m| m.name.as_str()), Some("getFirstName"));
//! assert_eq!(external_identifier(&first_name.name), "first_name");
//! # Ok::<(), beanscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`reflection`] - Chain traversal, accessor recognition, naming, annotation lookup
//! - [`metadata`] - The in-memory type model
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! `beanscope` emits [`tracing`](https://docs.rs/tracing) events and never installs a
//! subscriber. Snapshots are logged at `debug`, rejected accessor candidates at `trace`,
//! and inheritance chains that loop back on themselves at `warn`.
//!
//! ## Error Handling
//!
//! Lookups that find nothing return `None`. Errors are reserved for precondition violations
//! (an empty identifier passed to a camel-case conversion) and for failures of the type
//! model:
//!
//! ```rust
//! use beanscope::{Error, reflection::naming::to_lower_camel_case};
//!
//! match to_lower_camel_case("") {
//!     Ok(name) => println!("field: {}", name),
//!     Err(Error::Empty) => println!("nothing to convert"),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```

mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use beanscope::prelude::*;
///
/// assert_eq!(external_identifier("birthDate"), "birth_date");
/// ```
pub mod prelude;

/// Introspection of types through the descriptor traits
///
/// # Key Types
///
/// - [`reflection::Reflection`] - Immutable snapshot of a type and its members
/// - [`reflection::AccessorClassifier`] - Getter and setter recognition
/// - [`reflection::AccessorConfig`] - Naming conventions for accessors
///
/// # Main Functions
///
/// - [`reflection::chain::inheritance_chain`] - The type and all of its ancestors
/// - [`reflection::accessor::is_getter`] / [`reflection::accessor::is_setter`] - Classify a method
/// - [`reflection::naming::external_identifier`] - Snake-case name of a member
/// - [`reflection::annotation::annotation`] - First annotation of a given type
pub mod reflection;

/// The in-memory type model
///
/// Classes, fields, methods and annotations identified by [`metadata::token::Token`]s,
/// owned by a [`metadata::typesystem::TypeRegistry`] and declared through
/// [`metadata::typesystem::ClassBuilder`].
pub mod metadata;

/// `beanscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `beanscope` Error type
///
/// Lookups that find nothing return `None`, this type covers everything else.
pub use error::Error;

/// Immutable snapshot of a type and its members.
///
/// See [`reflection::Reflection`].
pub use reflection::Reflection;

/// Snake-case identifier of a camel-case member name.
///
/// See [`reflection::naming::external_identifier`].
pub use reflection::naming::external_identifier;
