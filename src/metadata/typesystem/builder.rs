use std::sync::Arc;

use crate::{
    metadata::{
        customattributes::{
            CustomAttributeArgument, CustomAttributeNamedArgument, CustomAttributeValue,
            CustomAttributeValueList,
        },
        field::{Field, FieldAccessFlags, FIELD_ACCESS_MASK},
        method::{Method, MethodAccessFlags, MethodModifiers, Parameter, METHOD_ACCESS_MASK},
        token::TableId,
        typesystem::{ClassTypeRc, TypeRegistry, TypeSignature},
    },
    reflection::naming::to_upper_camel_case,
    Result,
};

/// An annotation waiting to be attached by a builder
#[derive(Debug, Clone)]
struct PendingAnnotation {
    type_name: String,
    named_args: Vec<CustomAttributeNamedArgument>,
}

impl PendingAnnotation {
    fn new(type_name: &str) -> Self {
        PendingAnnotation {
            type_name: type_name.to_string(),
            named_args: Vec::new(),
        }
    }

    fn attach(self, registry: &TypeRegistry, target: &CustomAttributeValueList) {
        target.push(Arc::new(CustomAttributeValue {
            token: registry.next_token(TableId::CustomAttribute),
            type_name: self.type_name,
            named_args: self.named_args,
        }));
    }
}

/// Provides a fluent API for declaring a field
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    name: String,
    signature: TypeSignature,
    flags: u32,
    annotations: Vec<PendingAnnotation>,
}

impl FieldBuilder {
    /// Start a private instance field
    ///
    /// ## Arguments
    /// * 'name'      - Name of the field
    /// * 'signature' - Type of the field
    #[must_use]
    pub fn new(name: &str, signature: TypeSignature) -> Self {
        FieldBuilder {
            name: name.to_string(),
            signature,
            flags: FieldAccessFlags::PRIVATE.bits(),
            annotations: Vec::new(),
        }
    }

    /// Make the field public
    #[must_use]
    pub fn public(mut self) -> Self {
        self.flags = (self.flags & !FIELD_ACCESS_MASK) | FieldAccessFlags::PUBLIC.bits();
        self
    }

    /// Make the field static
    #[must_use]
    pub fn static_(mut self) -> Self {
        self.flags |= FieldAccessFlags::STATIC.bits();
        self
    }

    /// Annotate the field
    ///
    /// ## Arguments
    /// * 'type_name' - Fully qualified name of the annotation type
    #[must_use]
    pub fn annotation(mut self, type_name: &str) -> Self {
        self.annotations.push(PendingAnnotation::new(type_name));
        self
    }

    /// Annotate the field with a single named argument
    ///
    /// ## Arguments
    /// * 'type_name' - Fully qualified name of the annotation type
    /// * 'arg'       - Name of the argument
    /// * 'value'     - Value of the argument
    #[must_use]
    pub fn annotation_arg(
        mut self,
        type_name: &str,
        arg: &str,
        value: CustomAttributeArgument,
    ) -> Self {
        let mut pending = PendingAnnotation::new(type_name);
        pending.named_args.push(CustomAttributeNamedArgument {
            name: arg.to_string(),
            value,
        });
        self.annotations.push(pending);
        self
    }

    fn build(self, registry: &TypeRegistry, owner: &ClassTypeRc) {
        let field = Field::new(
            registry.next_token(TableId::Field),
            self.name,
            self.flags,
            self.signature,
            owner,
        );
        for pending in self.annotations {
            pending.attach(registry, &field.custom_attributes);
        }
        owner.fields.push(Arc::new(field));
    }
}

/// Provides a fluent API for declaring a method
///
/// Methods start out private, without parameters and returning `void`.
#[derive(Debug, Clone)]
pub struct MethodBuilder {
    name: String,
    flags: u32,
    params: Vec<Parameter>,
    return_type: TypeSignature,
    annotations: Vec<PendingAnnotation>,
}

impl MethodBuilder {
    /// Start a method
    ///
    /// ## Arguments
    /// * 'name' - Name of the method
    #[must_use]
    pub fn new(name: &str) -> Self {
        MethodBuilder {
            name: name.to_string(),
            flags: MethodAccessFlags::PRIVATE.bits(),
            params: Vec::new(),
            return_type: TypeSignature::Void,
            annotations: Vec::new(),
        }
    }

    fn access(mut self, access: MethodAccessFlags) -> Self {
        self.flags = (self.flags & !METHOD_ACCESS_MASK) | access.bits();
        self
    }

    /// Make the method public
    #[must_use]
    pub fn public(self) -> Self {
        self.access(MethodAccessFlags::PUBLIC)
    }

    /// Make the method private
    #[must_use]
    pub fn private(self) -> Self {
        self.access(MethodAccessFlags::PRIVATE)
    }

    /// Make the method accessible to sub-types only
    #[must_use]
    pub fn protected(self) -> Self {
        self.access(MethodAccessFlags::FAMILY)
    }

    /// Make the method static
    #[must_use]
    pub fn static_(mut self) -> Self {
        self.flags |= MethodModifiers::STATIC.bits();
        self
    }

    /// Append a parameter
    ///
    /// ## Arguments
    /// * 'name'      - Name of the parameter
    /// * 'signature' - Type of the parameter
    #[must_use]
    pub fn parameter(mut self, name: &str, signature: TypeSignature) -> Self {
        self.params.push(Parameter {
            name: name.to_string(),
            signature,
        });
        self
    }

    /// Set the return type
    ///
    /// ## Arguments
    /// * 'signature' - The return type
    #[must_use]
    pub fn returns(mut self, signature: TypeSignature) -> Self {
        self.return_type = signature;
        self
    }

    /// Annotate the method
    ///
    /// ## Arguments
    /// * 'type_name' - Fully qualified name of the annotation type
    #[must_use]
    pub fn annotation(mut self, type_name: &str) -> Self {
        self.annotations.push(PendingAnnotation::new(type_name));
        self
    }

    fn build(self, registry: &TypeRegistry, owner: &ClassTypeRc) {
        let method = Method::new(
            registry.next_token(TableId::MethodDef),
            self.name,
            self.flags,
            self.params,
            self.return_type,
            owner,
        );
        for pending in self.annotations {
            pending.attach(registry, &method.custom_attributes);
        }
        owner.methods.push(Arc::new(method));
    }
}

/// A member in declaration order, expanded when the class is built
#[derive(Debug, Clone)]
enum Member {
    Field(FieldBuilder),
    Method(MethodBuilder),
    Property(String, TypeSignature),
}

/// Provides a fluent API for declaring a class and its members
///
/// ```rust
/// use std::sync::Arc;
/// use beanscope::metadata::typesystem::{ClassBuilder, TypeRegistry, TypeSignature};
///
/// let registry = Arc::new(TypeRegistry::new());
/// let person = ClassBuilder::new("Person")
///     .namespace("com.example")
///     .auto_property("firstName", TypeSignature::String)
///     .method("toString", |m| m.public().returns(TypeSignature::String))
///     .build(&registry)?;
///
/// // firstName, getFirstName, setFirstName, toString
/// assert_eq!(person.fields.count(), 1);
/// assert_eq!(person.methods.count(), 3);
/// # Ok::<(), beanscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ClassBuilder {
    name: String,
    namespace: String,
    base: Option<ClassTypeRc>,
    members: Vec<Member>,
    annotations: Vec<PendingAnnotation>,
}

impl ClassBuilder {
    /// Start building a class with the given name
    ///
    /// ## Arguments
    /// * 'name' - Simple name of the class
    #[must_use]
    pub fn new(name: &str) -> Self {
        ClassBuilder {
            name: name.to_string(),
            namespace: String::new(),
            base: None,
            members: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Set the namespace (package)
    ///
    /// ## Arguments
    /// * 'namespace' - Namespace of the class
    #[must_use]
    pub fn namespace(mut self, namespace: &str) -> Self {
        self.namespace = namespace.to_string();
        self
    }

    /// Set the base type
    ///
    /// ## Arguments
    /// * 'base' - The class to extend
    #[must_use]
    pub fn extends(mut self, base: &ClassTypeRc) -> Self {
        self.base = Some(base.clone());
        self
    }

    /// Declare a private field
    ///
    /// ## Arguments
    /// * 'name'      - Name of the field
    /// * 'signature' - Type of the field
    #[must_use]
    pub fn field(self, name: &str, signature: TypeSignature) -> Self {
        self.field_with(name, signature, |f| f)
    }

    /// Declare a field, configured through `configure`
    ///
    /// ## Arguments
    /// * 'name'      - Name of the field
    /// * 'signature' - Type of the field
    /// * 'configure' - Adjusts the field before it is declared
    #[must_use]
    pub fn field_with<F>(mut self, name: &str, signature: TypeSignature, configure: F) -> Self
    where
        F: FnOnce(FieldBuilder) -> FieldBuilder,
    {
        self.members
            .push(Member::Field(configure(FieldBuilder::new(name, signature))));
        self
    }

    /// Declare a method, configured through `configure`
    ///
    /// ## Arguments
    /// * 'name'      - Name of the method
    /// * 'configure' - Adjusts the method before it is declared
    #[must_use]
    pub fn method<F>(mut self, name: &str, configure: F) -> Self
    where
        F: FnOnce(MethodBuilder) -> MethodBuilder,
    {
        self.members
            .push(Member::Method(configure(MethodBuilder::new(name))));
        self
    }

    /// Declare a private field together with its public `get`/`set` pair
    ///
    /// ## Arguments
    /// * 'name'      - Name of the field
    /// * 'signature' - Type of the field
    #[must_use]
    pub fn auto_property(mut self, name: &str, signature: TypeSignature) -> Self {
        self.members
            .push(Member::Property(name.to_string(), signature));
        self
    }

    /// Annotate the class
    ///
    /// ## Arguments
    /// * 'type_name' - Fully qualified name of the annotation type
    #[must_use]
    pub fn annotation(mut self, type_name: &str) -> Self {
        self.annotations.push(PendingAnnotation::new(type_name));
        self
    }

    /// Register the class and all of its members in `registry`
    ///
    /// ## Arguments
    /// * 'registry' - The registry that will own the type
    ///
    /// # Errors
    /// Returns an error if the type cannot be registered, or if an auto property has an
    /// empty name.
    pub fn build(self, registry: &Arc<TypeRegistry>) -> Result<ClassTypeRc> {
        // A failed build must not leave a half-declared type in the registry
        for member in &self.members {
            if let Member::Property(name, _) = member {
                to_upper_camel_case(name)?;
            }
        }

        let class = registry.create_type(&self.namespace, &self.name, self.base.as_ref())?;

        for pending in self.annotations {
            pending.attach(registry, &class.custom_attributes);
        }

        for member in self.members {
            match member {
                Member::Field(field) => field.build(registry, &class),
                Member::Method(method) => method.build(registry, &class),
                Member::Property(name, signature) => {
                    let accessor = to_upper_camel_case(&name)?;
                    FieldBuilder::new(&name, signature.clone()).build(registry, &class);
                    MethodBuilder::new(&format!("get{}", accessor))
                        .public()
                        .returns(signature.clone())
                        .build(registry, &class);
                    MethodBuilder::new(&format!("set{}", accessor))
                        .public()
                        .parameter("value", signature)
                        .build(registry, &class);
                }
            }
        }

        Ok(class)
    }
}
