//! Annotation lookup on types, fields and methods.
//!
//! Annotations are matched by the fully qualified name of their annotation type, nothing
//! else. What an annotation means is up to the caller.

use crate::reflection::descriptor::{Annotated, AnnotationDescriptor};

/// All annotations present on `element`, in declaration order
///
/// ## Arguments
/// * 'element' - A type, field or method
pub fn annotations<E: Annotated>(element: &E) -> Vec<E::Annotation> {
    element.annotations()
}

/// The first annotation on `element` whose annotation type is named `type_name`
///
/// ## Arguments
/// * 'element'   - A type, field or method
/// * '`type_name`' - Fully qualified name of the annotation type
pub fn annotation<E: Annotated>(element: &E, type_name: &str) -> Option<E::Annotation> {
    element
        .annotations()
        .into_iter()
        .find(|a| a.type_name() == type_name)
}

/// Returns true if `element` carries an annotation of type `type_name`
///
/// ## Arguments
/// * 'element'   - A type, field or method
/// * '`type_name`' - Fully qualified name of the annotation type
pub fn has_annotation<E: Annotated>(element: &E, type_name: &str) -> bool {
    annotation(element, type_name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{
            customattributes::CustomAttributeArgument,
            typesystem::{ClassBuilder, TypeRegistry, TypeSignature},
        },
        test::create_dummy,
        Result,
    };
    use std::sync::Arc;

    #[test]
    fn test_type_annotation() -> Result<()> {
        let (_registry, dummy) = create_dummy()?;

        let entity = annotation(&dummy, "javax.persistence.Entity").unwrap();
        assert_eq!(entity.type_name, "javax.persistence.Entity");
        assert!(has_annotation(&dummy, "javax.persistence.Entity"));
        assert!(!has_annotation(&dummy, "javax.persistence.Table"));
        // simple names do not match
        assert!(annotation(&dummy, "Entity").is_none());
        Ok(())
    }

    #[test]
    fn test_member_annotations() -> Result<()> {
        let registry = Arc::new(TypeRegistry::new());
        let account = ClassBuilder::new("Account")
            .namespace("com.example")
            .field_with("id", TypeSignature::I8, |f| {
                f.annotation("javax.persistence.Id").annotation_arg(
                    "javax.persistence.Column",
                    "name",
                    CustomAttributeArgument::String("account_id".to_string()),
                )
            })
            .field_with("owner", TypeSignature::String, |f| {
                f.annotation_arg(
                    "javax.persistence.Column",
                    "nullable",
                    CustomAttributeArgument::Bool(false),
                )
                .annotation_arg(
                    "javax.persistence.Column",
                    "name",
                    CustomAttributeArgument::String("ignored".to_string()),
                )
            })
            .method("close", |m| m.public().annotation("java.lang.Deprecated"))
            .build(&registry)?;

        let id = account.fields.get(0).unwrap();
        let kinds: Vec<String> = annotations(id)
            .iter()
            .map(|a| a.type_name.clone())
            .collect();
        assert_eq!(kinds, vec!["javax.persistence.Id", "javax.persistence.Column"]);

        let column = annotation(id, "javax.persistence.Column").unwrap();
        assert!(matches!(
            column.named_arg("name"),
            Some(CustomAttributeArgument::String(name)) if name == "account_id"
        ));

        // the first of two annotations of the same type wins
        let owner = account.fields.get(1).unwrap();
        let column = annotation(owner, "javax.persistence.Column").unwrap();
        assert!(column.named_arg("name").is_none());
        assert!(matches!(
            column.named_arg("nullable"),
            Some(CustomAttributeArgument::Bool(false))
        ));

        let close = account.methods.get(0).unwrap();
        assert!(has_annotation(close, "java.lang.Deprecated"));
        assert!(!has_annotation(close, "javax.persistence.Id"));
        Ok(())
    }

    #[test]
    fn test_no_annotations() -> Result<()> {
        let registry = Arc::new(TypeRegistry::new());
        let plain = ClassBuilder::new("Plain").build(&registry)?;

        assert!(annotations(&plain).is_empty());
        assert!(annotation(&plain, "java.lang.Deprecated").is_none());
        Ok(())
    }
}
