//! Central registry owning the types of the in-memory model.
//!
//! The registry holds the strong references of every [`ClassType`]; bases and declaring
//! types are weak references into it. It also allocates the tokens of types, fields,
//! methods and annotations so that every descriptor has a unique identity.
//!
//! # Thread Safety
//!
//! - Lock-free primary storage using `SkipMap`
//! - Concurrent secondary indices using `DashMap`
//! - Atomic token allocation per table
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use beanscope::metadata::typesystem::{ClassBuilder, TypeRegistry};
//!
//! let registry = Arc::new(TypeRegistry::new());
//! ClassBuilder::new("Dummy").namespace("com.example").build(&registry)?;
//!
//! assert_eq!(registry.len(), 1);
//! assert_eq!(registry.get_by_name("Dummy").len(), 1);
//! assert!(registry.get_by_fullname("com.example.Missing").is_none());
//! # Ok::<(), beanscope::Error>(())
//! ```

use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};

use crossbeam_skiplist::SkipMap;
use dashmap::DashMap;
use strum::EnumCount;

use crate::{
    metadata::{
        token::{TableId, Token},
        typesystem::{ClassType, ClassTypeRc},
    },
    Error, Result,
};

/// Registry of all types of a model, keyed by token
pub struct TypeRegistry {
    /// Primary storage, ordered by token
    types: SkipMap<Token, ClassTypeRc>,
    /// Fully qualified name index
    types_by_fullname: DashMap<String, Vec<Token>>,
    /// Simple name index
    types_by_name: DashMap<String, Vec<Token>>,
    /// Next free row per table, indexed by [`TableId::index`]
    next_rows: [AtomicU32; TableId::COUNT],
}

impl TypeRegistry {
    /// Create a new, empty registry
    #[must_use]
    pub fn new() -> Self {
        TypeRegistry {
            types: SkipMap::new(),
            types_by_fullname: DashMap::new(),
            types_by_name: DashMap::new(),
            next_rows: std::array::from_fn(|_| AtomicU32::new(1)),
        }
    }

    /// Allocate the next free token of `table`
    ///
    /// ## Arguments
    /// * 'table' - The table to allocate a row in
    pub fn next_token(&self, table: TableId) -> Token {
        let row = self.next_rows[table.index()].fetch_add(1, Ordering::Relaxed);
        Token::from_parts(table, row)
    }

    /// Create and register a new type without members
    ///
    /// ## Arguments
    /// * 'namespace' - Namespace of the type (can be empty)
    /// * 'name'      - Simple name of the type
    /// * 'base'      - The base type, `None` for a root type
    ///
    /// # Errors
    /// Returns an error if the type cannot be inserted into the registry.
    pub fn create_type(
        &self,
        namespace: &str,
        name: &str,
        base: Option<&ClassTypeRc>,
    ) -> Result<ClassTypeRc> {
        let new_type = Arc::new(ClassType::new(
            self.next_token(TableId::TypeDef),
            namespace.to_string(),
            name.to_string(),
            base,
        ));

        self.insert(&new_type)?;
        Ok(new_type)
    }

    /// Insert a `ClassType` into the registry
    ///
    /// ## Arguments
    /// * '`new_type`' - The type to register
    ///
    /// # Errors
    /// Returns [`Error::TypeInsert`] if a type with the same token is already registered.
    pub fn insert(&self, new_type: &ClassTypeRc) -> Result<()> {
        if self.types.contains_key(&new_type.token) {
            return Err(Error::TypeInsert(new_type.token));
        }

        self.types.insert(new_type.token, new_type.clone());
        self.types_by_fullname
            .entry(new_type.fullname())
            .or_default()
            .push(new_type.token);
        self.types_by_name
            .entry(new_type.name.clone())
            .or_default()
            .push(new_type.token);

        Ok(())
    }

    /// Get a type by its token
    ///
    /// ## Arguments
    /// * 'token' - The token of the type
    pub fn get(&self, token: &Token) -> Option<ClassTypeRc> {
        self.types.get(token).map(|entry| entry.value().clone())
    }

    /// Get the first type registered under a fully qualified name (`namespace.name`)
    ///
    /// ## Arguments
    /// * 'fullname' - The fully qualified name
    pub fn get_by_fullname(&self, fullname: &str) -> Option<ClassTypeRc> {
        let tokens = self.types_by_fullname.get(fullname)?;
        let found = tokens.value().iter().find_map(|token| self.get(token));
        found
    }

    /// Get all types with a specific simple name across all namespaces
    ///
    /// ## Arguments
    /// * 'name' - The simple name to search for (case-sensitive)
    pub fn get_by_name(&self, name: &str) -> Vec<ClassTypeRc> {
        if let Some(tokens) = self.types_by_name.get(name) {
            tokens.iter().filter_map(|token| self.get(token)).collect()
        } else {
            Vec::new()
        }
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no type is registered
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
