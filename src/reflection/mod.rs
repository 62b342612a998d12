//! Convention-based introspection of types.
//!
//! This module answers the questions persistence and serialization layers ask about a
//! type: what it inherits from, which fields it has across its whole hierarchy, which
//! methods read and write those fields, and what the fields are called in an external
//! schema.
//!
//! # Architecture
//!
//! Everything is written against the traits in [`descriptor`], so any host type system can
//! be introspected. The building blocks are usable on their own:
//!
//! - [`chain`]: inheritance chain traversal and member flattening
//! - [`accessor`]: getter and setter recognition
//! - [`naming`]: identifier case conversion
//! - [`annotation`]: annotation lookup
//! - [`config`]: the naming conventions accessors follow
//!
//! [`Reflection`] ties them together into an immutable snapshot of one type.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use beanscope::{
//!     external_identifier,
//!     metadata::typesystem::{ClassBuilder, TypeRegistry, TypeSignature},
//!     Reflection,
//! };
//!
//! let registry = Arc::new(TypeRegistry::new());
//! let person = ClassBuilder::new("Person")
//!     .namespace("com.example")
//!     .auto_property("firstName", TypeSignature::String)
//!     .auto_property("lastName", TypeSignature::String)
//!     .build(&registry)?;
//!
//! let reflection = Reflection::new(&person);
//! assert_eq!(reflection.fullname(), "com.example.Person");
//! assert_eq!(reflection.getters().len(), 2);
//!
//! for field in reflection.fields() {
//!     let column = external_identifier(&field.name);
//!     assert!(column == "first_name" || column == "last_name");
//! }
//! # Ok::<(), beanscope::Error>(())
//! ```

pub mod accessor;
pub mod annotation;
pub mod chain;
pub mod config;
pub mod descriptor;
pub mod naming;

pub use accessor::AccessorClassifier;
pub use config::AccessorConfig;
pub use naming::external_identifier;

use tracing::debug;

use crate::reflection::descriptor::{FieldDescriptor, MethodDescriptor, TypeDescriptor};

/// An immutable snapshot of a type and its members
///
/// Everything is computed once in the constructor: the inheritance chain, the flattened
/// fields and methods, and which of those methods are getters and setters. Changes to the
/// host model made afterwards are not reflected.
pub struct Reflection<T: TypeDescriptor> {
    ty: T,
    name: String,
    fullname: String,
    inheritance_chain: Vec<T>,
    fields: Vec<T::Field>,
    methods: Vec<T::Method>,
    getters: Vec<T::Method>,
    setters: Vec<T::Method>,
    classifier: AccessorClassifier,
}

impl<T: TypeDescriptor> Reflection<T> {
    /// Introspect `ty` using the default accessor conventions
    ///
    /// ## Arguments
    /// * 'ty' - The type to introspect
    pub fn new(ty: &T) -> Self {
        Self::with_config(ty, AccessorConfig::default())
    }

    /// Introspect `ty` using custom accessor conventions
    ///
    /// ## Arguments
    /// * 'ty'     - The type to introspect
    /// * 'config' - The accessor conventions
    pub fn with_config(ty: &T, config: AccessorConfig) -> Self {
        let classifier = AccessorClassifier::new(config);

        let inheritance_chain = chain::inheritance_chain(ty);
        let fields = chain::fields_of(&inheritance_chain);
        let methods = chain::methods_of(&inheritance_chain);
        let getters = classifier.getters_among(&methods);
        let setters = classifier.setters_among(&methods);

        let fullname = ty.fullname();
        debug!(
            type_name = %fullname,
            depth = inheritance_chain.len(),
            fields = fields.len(),
            methods = methods.len(),
            getters = getters.len(),
            setters = setters.len(),
            "reflected type"
        );

        Reflection {
            ty: ty.clone(),
            name: ty.name().to_string(),
            fullname,
            inheritance_chain,
            fields,
            methods,
            getters,
            setters,
            classifier,
        }
    }

    /// The introspected type
    pub fn ty(&self) -> &T {
        &self.ty
    }

    /// Simple name of the type
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully qualified name of the type
    pub fn fullname(&self) -> &str {
        &self.fullname
    }

    /// The type followed by all of its ancestors, up to and including the root
    pub fn inheritance_chain(&self) -> &[T] {
        &self.inheritance_chain
    }

    /// Fields declared anywhere in the inheritance chain, in chain order
    pub fn fields(&self) -> &[T::Field] {
        &self.fields
    }

    /// Methods declared anywhere in the inheritance chain, in chain order
    pub fn methods(&self) -> &[T::Method] {
        &self.methods
    }

    /// All getters, in chain order
    pub fn getters(&self) -> &[T::Method] {
        &self.getters
    }

    /// All setters, in chain order
    pub fn setters(&self) -> &[T::Method] {
        &self.setters
    }

    /// The accessor conventions this snapshot was built with
    pub fn config(&self) -> &AccessorConfig {
        self.classifier.config()
    }

    /// The first method in the **setter** list that [`AccessorClassifier::is_getter_for`]
    /// accepts for `field`
    ///
    /// A setter takes exactly one parameter and a getter none, so no method passes both
    /// checks and this always returns `None`. Use [`Reflection::exact_getter`] to find the
    /// getter of a field.
    ///
    /// ## Arguments
    /// * 'field' - The field to look up
    pub fn getter(&self, field: &T::Field) -> Option<&T::Method> {
        self.setters
            .iter()
            .find(|m| self.classifier.is_getter_for(*m, field))
    }

    /// The first setter that [`AccessorClassifier::is_setter_for`] accepts for `field`
    ///
    /// The check only requires a method named like the setter of `field` to exist in the
    /// declaring type's chain, so the result is the first setter of that chain, which is
    /// not necessarily the one named after `field`. See [`Reflection::exact_setter`].
    ///
    /// ## Arguments
    /// * 'field' - The field to look up
    pub fn setter(&self, field: &T::Field) -> Option<&T::Method> {
        self.setters
            .iter()
            .find(|m| self.classifier.is_setter_for(*m, field))
    }

    /// The getter named after `field` (`firstName` -> `getFirstName`)
    ///
    /// ## Arguments
    /// * 'field' - The field to look up
    pub fn exact_getter(&self, field: &T::Field) -> Option<&T::Method> {
        let name = self.classifier.getter_name(field.name()).ok()?;
        self.getters.iter().find(|m| m.name() == name)
    }

    /// The setter named after `field` (`firstName` -> `setFirstName`)
    ///
    /// ## Arguments
    /// * 'field' - The field to look up
    pub fn exact_setter(&self, field: &T::Field) -> Option<&T::Method> {
        let name = self.classifier.setter_name(field.name()).ok()?;
        self.setters.iter().find(|m| m.name() == name)
    }

    /// The first field named `name`, most derived declaration first
    ///
    /// ## Arguments
    /// * 'name' - Name of the field
    pub fn field(&self, name: &str) -> Option<&T::Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// The first method named `name`, most derived declaration first
    ///
    /// ## Arguments
    /// * 'name' - Name of the method
    pub fn method(&self, name: &str) -> Option<&T::Method> {
        self.methods.iter().find(|m| m.name() == name)
    }

    /// Returns true if a field named `name` exists in the inheritance chain
    ///
    /// ## Arguments
    /// * 'name' - Name of the field
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Returns true if a method named `name` exists in the inheritance chain
    ///
    /// ## Arguments
    /// * 'name' - Name of the method
    pub fn has_method(&self, name: &str) -> bool {
        self.method(name).is_some()
    }
}

impl<T: TypeDescriptor> std::fmt::Debug for Reflection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reflection")
            .field("fullname", &self.fullname)
            .field("depth", &self.inheritance_chain.len())
            .field("fields", &self.fields.len())
            .field("methods", &self.methods.len())
            .field("getters", &self.getters.len())
            .field("setters", &self.setters.len())
            .field("config", self.classifier.config())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{field::FieldRc, method::MethodRc, typesystem::ClassTypeRc},
        test::{create_dummy, create_gadget, create_hierarchy},
        Result,
    };

    fn method_names(methods: &[MethodRc]) -> Vec<&str> {
        methods.iter().map(|m| m.name.as_str()).collect()
    }

    fn declared_field(ty: &ClassTypeRc, name: &str) -> FieldRc {
        ty.fields
            .iter()
            .map(|(_, f)| f.clone())
            .find(|f| f.name == name)
            .unwrap()
    }

    #[test]
    fn test_snapshot_of_dummy() -> Result<()> {
        let (_registry, dummy) = create_dummy()?;
        let reflection = Reflection::new(&dummy);

        assert_eq!(reflection.ty(), &dummy);
        assert_eq!(reflection.name(), "Dummy");
        assert_eq!(reflection.fullname(), "com.example.Dummy");
        assert_eq!(reflection.inheritance_chain().len(), 2);
        assert_eq!(reflection.inheritance_chain()[0], dummy);
        assert_eq!(reflection.config(), &AccessorConfig::default());

        let fields: Vec<&str> = reflection.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(fields, vec!["id", "firstName", "lastName", "birthDate", "city"]);

        // 11 declared by Dummy, 4 inherited from Object
        assert_eq!(reflection.methods().len(), 15);
        assert_eq!(
            method_names(reflection.getters()),
            vec!["getId", "getFirstName", "getLastName", "getBirthDate", "getCity"]
        );
        assert_eq!(
            method_names(reflection.setters()),
            vec!["setId", "setFirstName", "setLastName", "setBirthDate", "setCity"]
        );
        Ok(())
    }

    #[test]
    fn test_getter_scans_setters() -> Result<()> {
        let (_registry, dummy) = create_dummy()?;
        let reflection = Reflection::new(&dummy);

        for field in reflection.fields() {
            assert!(reflection.getter(field).is_none());
        }
        Ok(())
    }

    #[test]
    fn test_getter_with_overlapping_prefixes() -> Result<()> {
        let (_registry, dummy) = create_dummy()?;
        let config = AccessorConfig::with_prefixes("set", "set");
        let reflection = Reflection::with_config(&dummy, config);
        let city = declared_field(&dummy, "city");

        // `setCity(value)` takes a parameter, so it is not a getter either
        assert!(reflection.getter(&city).is_none());
        assert_eq!(reflection.getters().len(), 0);
        assert_eq!(reflection.setters().len(), 5);
        Ok(())
    }

    #[test]
    fn test_setter() -> Result<()> {
        let (_registry, dummy) = create_dummy()?;
        let reflection = Reflection::new(&dummy);
        let first_name = declared_field(&dummy, "firstName");

        // the first setter whose declaring type also declares `setFirstName`
        let setter = reflection.setter(&first_name).unwrap();
        assert_eq!(setter.name, "setId");
        Ok(())
    }

    #[test]
    fn test_setter_missing() -> Result<()> {
        let (_registry, gadget) = create_gadget()?;
        let reflection = Reflection::new(&gadget);
        let label = declared_field(&gadget, "label");

        assert!(reflection.setter(&label).is_none());
        assert!(reflection.exact_setter(&label).is_none());
        Ok(())
    }

    #[test]
    fn test_setter_of_field_without_one_parameter_setter() -> Result<()> {
        let (_registry, gadget) = create_gadget()?;
        let reflection = Reflection::new(&gadget);
        let active = declared_field(&gadget, "active");

        // `setActive(bool, bool)` is no setter, but its name is enough to bind the first one
        assert_eq!(
            reflection.setter(&active).map(|m| m.name.as_str()),
            Some("setName")
        );
        assert!(reflection.exact_setter(&active).is_none());
        Ok(())
    }

    #[test]
    fn test_exact_accessors() -> Result<()> {
        let (_registry, dummy) = create_dummy()?;
        let reflection = Reflection::new(&dummy);

        for field in reflection.fields() {
            let getter = reflection.exact_getter(field).unwrap();
            let setter = reflection.exact_setter(field).unwrap();
            assert_eq!(getter.name, accessor::getter_name(&field.name)?);
            assert_eq!(setter.name, accessor::setter_name(&field.name)?);
        }
        Ok(())
    }

    #[test]
    fn test_exact_accessors_of_gadget() -> Result<()> {
        let (_registry, gadget) = create_gadget()?;
        let reflection = Reflection::new(&gadget);

        let name = declared_field(&gadget, "name");
        assert!(reflection.exact_getter(&name).is_some());
        assert!(reflection.exact_setter(&name).is_some());

        let count = declared_field(&gadget, "count");
        assert!(reflection.exact_getter(&count).is_none());
        let set_count = reflection.exact_setter(&count).unwrap();
        assert_eq!(set_count.params.len(), 1);

        let secret = declared_field(&gadget, "secret");
        assert!(reflection.exact_getter(&secret).is_none());

        let lenient = Reflection::with_config(&gadget, AccessorConfig::lenient());
        assert!(lenient.exact_getter(&secret).is_some());
        Ok(())
    }

    #[test]
    fn test_lookups_on_hierarchy() -> Result<()> {
        let (_registry, hierarchy) = create_hierarchy()?;
        let reflection = Reflection::new(&hierarchy.employee);

        assert_eq!(reflection.inheritance_chain().len(), 4);
        assert!(reflection.has_field("lastName"));
        assert!(!reflection.has_field("fullName"));
        assert!(reflection.has_method("getFullName"));
        assert!(!reflection.has_method("getFoo"));

        let id = reflection.field("id").unwrap();
        assert_eq!(id.declaring_type.token(), Some(hierarchy.employee.token));

        let get_id = reflection.method("getId").unwrap();
        assert_eq!(get_id.declaring_type.token(), Some(hierarchy.entity.token));
        assert_eq!(reflection.exact_getter(id).map(|m| m.token), Some(get_id.token));
        Ok(())
    }

    #[test]
    fn test_debug() -> Result<()> {
        let (_registry, dummy) = create_dummy()?;
        let debug = format!("{:?}", Reflection::new(&dummy));

        assert!(debug.contains("com.example.Dummy"));
        assert!(debug.contains("getters: 5"));
        Ok(())
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Reflection<ClassTypeRc>>();
    }
}
