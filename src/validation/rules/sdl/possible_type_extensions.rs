use std::collections::HashMap;

use crate::ast::TypeDefinitionExtension;
use crate::static_graphql::schema::{self, Document, TypeDefinition, TypeExtension};
use crate::validation::rules::SdlValidationRule;
use crate::validation::suggestions::{quoted_or_list_suffix, suggest_candidates};
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// Possible type extensions
///
/// An `extend <kind> X` definition must extend a type named `X` that is
/// already defined in the document, and that type's kind must match the
/// extension's kind (you cannot `extend interface` a type defined as
/// `type`).
///
/// See https://spec.graphql.org/draft/#sec-Type-Extensions
pub struct PossibleTypeExtensions;

impl PossibleTypeExtensions {
    pub fn new() -> Self {
        PossibleTypeExtensions
    }
}

fn extension_kind_name(type_ext: &TypeExtension) -> &'static str {
    match type_ext {
        TypeExtension::Scalar(_) => "scalar",
        TypeExtension::Object(_) => "object",
        TypeExtension::Interface(_) => "interface",
        TypeExtension::Union(_) => "union",
        TypeExtension::Enum(_) => "enum",
        TypeExtension::InputObject(_) => "input object",
    }
}

fn extension_name_and_position(type_ext: &TypeExtension) -> (String, graphql_parser::Pos) {
    match type_ext {
        TypeExtension::Scalar(t) => (t.name.clone(), t.position),
        TypeExtension::Object(t) => (t.name.clone(), t.position),
        TypeExtension::Interface(t) => (t.name.clone(), t.position),
        TypeExtension::Union(t) => (t.name.clone(), t.position),
        TypeExtension::Enum(t) => (t.name.clone(), t.position),
        TypeExtension::InputObject(t) => (t.name.clone(), t.position),
    }
}

fn same_kind(type_def: &TypeDefinition, type_ext: &TypeExtension) -> bool {
    matches!(
        (type_def, type_ext),
        (TypeDefinition::Scalar(_), TypeExtension::Scalar(_))
            | (TypeDefinition::Object(_), TypeExtension::Object(_))
            | (TypeDefinition::Interface(_), TypeExtension::Interface(_))
            | (TypeDefinition::Union(_), TypeExtension::Union(_))
            | (TypeDefinition::Enum(_), TypeExtension::Enum(_))
            | (TypeDefinition::InputObject(_), TypeExtension::InputObject(_))
    )
}

impl SdlValidationRule for PossibleTypeExtensions {
    fn error_code<'a>(&self) -> &'a str {
        "PossibleTypeExtensions"
    }

    fn validate(&self, schema: &Document, error_collector: &mut ValidationErrorContext) {
        let known_types: HashMap<String, &TypeDefinition> = schema
            .definitions
            .iter()
            .filter_map(|definition| match definition {
                schema::Definition::TypeDefinition(type_def) => Some((type_def.name(), type_def)),
                _ => None,
            })
            .collect();

        for definition in &schema.definitions {
            let type_ext = match definition {
                schema::Definition::TypeExtension(type_ext) => type_ext,
                _ => continue,
            };

            let (name, position) = extension_name_and_position(type_ext);

            match known_types.get(&name) {
                None => {
                    let suggestions = suggest_candidates(&name, known_types.keys().map(|k| k.as_str()));

                    error_collector.report_error(ValidationError {
                        error_code: self.error_code(),
                        locations: vec![position],
                        message: format!(
                            "Cannot extend type \"{}\" because it is not defined.{}",
                            name,
                            quoted_or_list_suffix(&suggestions)
                        ),
                    });
                }
                Some(type_def) => {
                    if !same_kind(type_def, type_ext) {
                        error_collector.report_error(ValidationError {
                            error_code: self.error_code(),
                            locations: vec![position],
                            message: format!(
                                "Cannot extend non-{} type \"{}\".",
                                extension_kind_name(type_ext),
                                name
                            ),
                        });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PossibleTypeExtensions;
    use crate::validation::rules::SdlValidationRule;
    use crate::validation::test_utils::parsed_schema;
    use crate::validation::utils::ValidationErrorContext;

    fn validate(schema_str: &str) -> Vec<String> {
        let schema = parsed_schema(schema_str);
        let mut error_collector = ValidationErrorContext::new();
        PossibleTypeExtensions::new().validate(&schema, &mut error_collector);
        error_collector
            .validation_errors
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn extension_of_known_matching_type() {
        assert_eq!(
            validate(
                "type Query { a: String }
                 extend type Query { b: String }"
            )
            .len(),
            0
        );
    }

    #[test]
    fn extension_of_unknown_type() {
        let errors = validate(
            "type Query { a: String }
             extend type Foo { b: String }",
        );

        assert_eq!(
            errors,
            vec!["Cannot extend type \"Foo\" because it is not defined."]
        );
    }

    #[test]
    fn extension_of_unknown_type_suggests_similar_name() {
        let errors = validate(
            "type Query { a: String }
             extend type Quory { b: String }",
        );

        assert_eq!(
            errors,
            vec!["Cannot extend type \"Quory\" because it is not defined. Did you mean \"Query\"?"]
        );
    }

    #[test]
    fn extension_with_mismatched_kind() {
        let errors = validate(
            "type Query { a: String }
             scalar Foo
             extend interface Foo { b: String }",
        );

        assert_eq!(errors, vec!["Cannot extend non-interface type \"Foo\"."]);
    }
}
