//! Convention-based getter and setter recognition.
//!
//! A method is a **getter** if
//! 1. its name starts with the getter prefix (`get`),
//! 2. it takes no parameters,
//! 3. it returns a value,
//! 4. it is public,
//! 5. the name without the prefix, first character lowercased, names a field somewhere in
//!    the inheritance chain of the method's declaring type.
//!
//! A method is a **setter** if
//! 1. its name starts with the setter prefix (`set`),
//! 2. it takes exactly one parameter,
//! 3. it is public,
//! 4. the name without the prefix, first character lowercased, names a field somewhere in
//!    the inheritance chain of the method's declaring type.
//!
//! The return type of a setter is not constrained, fluent setters qualify.
//!
//! Prefixes and the visibility requirement come from [`AccessorConfig`]. The free functions
//! of this module use [`AccessorConfig::default`].
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use beanscope::{
//!     metadata::typesystem::{ClassBuilder, TypeRegistry, TypeSignature},
//!     reflection::accessor,
//! };
//!
//! let registry = Arc::new(TypeRegistry::new());
//! let person = ClassBuilder::new("Person")
//!     .auto_property("firstName", TypeSignature::String)
//!     .method("getNickname", |m| m.public().returns(TypeSignature::String))
//!     .build(&registry)?;
//!
//! let get_first_name = person.methods.get(0).unwrap();
//! let get_nickname = person.methods.get(2).unwrap();
//! assert!(accessor::is_getter(get_first_name));
//! assert!(!accessor::is_getter(get_nickname));
//! # Ok::<(), beanscope::Error>(())
//! ```

use tracing::trace;

use crate::{
    reflection::{
        chain,
        config::AccessorConfig,
        descriptor::{FieldDescriptor, MethodDescriptor, TypeDescriptor},
        naming::{to_lower_camel_case, to_upper_camel_case},
    },
    Result,
};

/// Classifies methods as getters and setters according to an [`AccessorConfig`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessorClassifier {
    config: AccessorConfig,
}

impl AccessorClassifier {
    /// Create a classifier for the given conventions
    ///
    /// ## Arguments
    /// * 'config' - The naming conventions to apply
    #[must_use]
    pub fn new(config: AccessorConfig) -> Self {
        AccessorClassifier { config }
    }

    /// The conventions this classifier applies
    #[must_use]
    pub fn config(&self) -> &AccessorConfig {
        &self.config
    }

    /// Name of the getter for `field_name` (`firstName` -> `getFirstName`)
    ///
    /// ## Arguments
    /// * '`field_name`' - Name of the field
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] if `field_name` is empty.
    pub fn getter_name(&self, field_name: &str) -> Result<String> {
        Ok(format!(
            "{}{}",
            self.config.getter_prefix,
            to_upper_camel_case(field_name)?
        ))
    }

    /// Name of the setter for `field_name` (`firstName` -> `setFirstName`)
    ///
    /// ## Arguments
    /// * '`field_name`' - Name of the field
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] if `field_name` is empty.
    pub fn setter_name(&self, field_name: &str) -> Result<String> {
        Ok(format!(
            "{}{}",
            self.config.setter_prefix,
            to_upper_camel_case(field_name)?
        ))
    }

    /// Name of the field an accessor named `method_name` encapsulates
    ///
    /// A getter or setter prefix is removed, then the first character is lowercased. Names
    /// without either prefix are taken to be the field name already.
    ///
    /// ## Arguments
    /// * '`method_name`' - Name of the method
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] if nothing is left after removing the prefix.
    pub fn encapsulated_field_name(&self, method_name: &str) -> Result<String> {
        let stripped = method_name
            .strip_prefix(self.config.getter_prefix)
            .or_else(|| method_name.strip_prefix(self.config.setter_prefix))
            .unwrap_or(method_name);

        to_lower_camel_case(stripped)
    }

    /// Returns true if `method` is a getter
    ///
    /// ## Arguments
    /// * 'method' - The method to classify
    pub fn is_getter<M: MethodDescriptor>(&self, method: &M) -> bool {
        let name = method.name();
        if !name.starts_with(self.config.getter_prefix) {
            return false;
        }
        if method.parameter_count() != 0 {
            trace!(method = name, "not a getter: takes parameters");
            return false;
        }
        if method.returns_void() {
            trace!(method = name, "not a getter: returns void");
            return false;
        }
        if self.config.require_public && !method.is_public() {
            trace!(method = name, "not a getter: not public");
            return false;
        }

        self.encapsulates_field(method)
    }

    /// Returns true if `method` is a setter
    ///
    /// ## Arguments
    /// * 'method' - The method to classify
    pub fn is_setter<M: MethodDescriptor>(&self, method: &M) -> bool {
        let name = method.name();
        if !name.starts_with(self.config.setter_prefix) {
            return false;
        }
        if method.parameter_count() != 1 {
            trace!(
                method = name,
                parameters = method.parameter_count(),
                "not a setter: needs exactly one parameter"
            );
            return false;
        }
        if self.config.require_public && !method.is_public() {
            trace!(method = name, "not a setter: not public");
            return false;
        }

        self.encapsulates_field(method)
    }

    /// Returns true if `method` is a getter and its declaring type has a method named like
    /// the getter of `field`
    ///
    /// The name of `method` itself is not compared with the getter name of `field`.
    ///
    /// ## Arguments
    /// * 'method' - The method to classify
    /// * 'field'  - The field the getter should belong to
    pub fn is_getter_for<M: MethodDescriptor, F: FieldDescriptor>(
        &self,
        method: &M,
        field: &F,
    ) -> bool {
        self.is_getter(method)
            && self
                .getter_name(field.name())
                .is_ok_and(|getter| declares_method(method, &getter))
    }

    /// Returns true if `method` is a setter and its declaring type has a method named like
    /// the setter of `field`
    ///
    /// The name of `method` itself is not compared with the setter name of `field`.
    ///
    /// ## Arguments
    /// * 'method' - The method to classify
    /// * 'field'  - The field the setter should belong to
    pub fn is_setter_for<M: MethodDescriptor, F: FieldDescriptor>(
        &self,
        method: &M,
        field: &F,
    ) -> bool {
        self.is_setter(method)
            && self
                .setter_name(field.name())
                .is_ok_and(|setter| declares_method(method, &setter))
    }

    /// All getters in the inheritance chain of `ty`, in chain order
    ///
    /// ## Arguments
    /// * 'ty' - The most derived type
    pub fn getters<T: TypeDescriptor>(&self, ty: &T) -> Vec<T::Method> {
        self.getters_among(&chain::methods(ty))
    }

    /// All setters in the inheritance chain of `ty`, in chain order
    ///
    /// ## Arguments
    /// * 'ty' - The most derived type
    pub fn setters<T: TypeDescriptor>(&self, ty: &T) -> Vec<T::Method> {
        self.setters_among(&chain::methods(ty))
    }

    /// The getters among `methods`, in their order
    ///
    /// ## Arguments
    /// * 'methods' - Candidates, usually the flattened methods of a chain
    pub fn getters_among<M: MethodDescriptor>(&self, methods: &[M]) -> Vec<M> {
        methods
            .iter()
            .filter(|m| self.is_getter(*m))
            .cloned()
            .collect()
    }

    /// The setters among `methods`, in their order
    ///
    /// ## Arguments
    /// * 'methods' - Candidates, usually the flattened methods of a chain
    pub fn setters_among<M: MethodDescriptor>(&self, methods: &[M]) -> Vec<M> {
        methods
            .iter()
            .filter(|m| self.is_setter(*m))
            .cloned()
            .collect()
    }

    fn encapsulates_field<M: MethodDescriptor>(&self, method: &M) -> bool {
        let Some(owner) = method.declaring_type() else {
            trace!(method = method.name(), "declaring type is gone");
            return false;
        };

        match self.encapsulated_field_name(method.name()) {
            Ok(field_name) if chain::has_field(&owner, &field_name) => true,
            Ok(field_name) => {
                trace!(
                    method = method.name(),
                    field = %field_name,
                    "no such field in the inheritance chain"
                );
                false
            }
            Err(_) => false,
        }
    }
}

/// Returns true if the chain of the declaring type of `method` has a method named `name`
fn declares_method<M: MethodDescriptor>(method: &M, name: &str) -> bool {
    method
        .declaring_type()
        .is_some_and(|owner| chain::has_method(&owner, name))
}

/// [`AccessorClassifier::getter_name`] with the default conventions
///
/// # Errors
/// Returns [`crate::Error::Empty`] if `field_name` is empty.
pub fn getter_name(field_name: &str) -> Result<String> {
    AccessorClassifier::default().getter_name(field_name)
}

/// [`AccessorClassifier::setter_name`] with the default conventions
///
/// # Errors
/// Returns [`crate::Error::Empty`] if `field_name` is empty.
pub fn setter_name(field_name: &str) -> Result<String> {
    AccessorClassifier::default().setter_name(field_name)
}

/// [`AccessorClassifier::encapsulated_field_name`] with the default conventions
///
/// # Errors
/// Returns [`crate::Error::Empty`] if nothing is left after removing the prefix.
pub fn encapsulated_field_name(method_name: &str) -> Result<String> {
    AccessorClassifier::default().encapsulated_field_name(method_name)
}

/// [`AccessorClassifier::is_getter`] with the default conventions
pub fn is_getter<M: MethodDescriptor>(method: &M) -> bool {
    AccessorClassifier::default().is_getter(method)
}

/// [`AccessorClassifier::is_setter`] with the default conventions
pub fn is_setter<M: MethodDescriptor>(method: &M) -> bool {
    AccessorClassifier::default().is_setter(method)
}

/// [`AccessorClassifier::is_getter_for`] with the default conventions
pub fn is_getter_for<M: MethodDescriptor, F: FieldDescriptor>(method: &M, field: &F) -> bool {
    AccessorClassifier::default().is_getter_for(method, field)
}

/// [`AccessorClassifier::is_setter_for`] with the default conventions
pub fn is_setter_for<M: MethodDescriptor, F: FieldDescriptor>(method: &M, field: &F) -> bool {
    AccessorClassifier::default().is_setter_for(method, field)
}
