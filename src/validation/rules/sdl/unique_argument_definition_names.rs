use std::collections::HashMap;

use crate::static_graphql::schema::{self, Document, Field, InputValue};
use crate::validation::rules::SdlValidationRule;
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// Unique argument definition names
///
/// Within one field definition or directive definition, argument names must
/// be unique.
///
/// See https://spec.graphql.org/draft/#sec-Argument-Uniqueness
pub struct UniqueArgumentDefinitionNames;

impl UniqueArgumentDefinitionNames {
    pub fn new() -> Self {
        UniqueArgumentDefinitionNames
    }
}

fn check_field_arguments(
    owner_name: &str,
    fields: &[Field],
    error_collector: &mut ValidationErrorContext,
    error_code: &'static str,
) {
    for field in fields {
        check_arguments(
            &format!("{}.{}", owner_name, field.name),
            "Field",
            &field.arguments,
            error_collector,
            error_code,
        );
    }
}

fn check_arguments(
    owner_label: &str,
    owner_kind: &str,
    arguments: &[InputValue],
    error_collector: &mut ValidationErrorContext,
    error_code: &'static str,
) {
    let mut seen: HashMap<&str, u32> = HashMap::new();

    for argument in arguments {
        let count = seen.entry(argument.name.as_str()).or_insert(0);
        *count += 1;

        if *count > 1 {
            error_collector.report_error(ValidationError {
                error_code,
                locations: vec![argument.position],
                message: format!(
                    "{} \"{}\" can only have one argument named \"{}\".",
                    owner_kind, owner_label, argument.name
                ),
            });
        }
    }
}

impl SdlValidationRule for UniqueArgumentDefinitionNames {
    fn error_code<'a>(&self) -> &'a str {
        "UniqueArgumentDefinitionNames"
    }

    fn validate(&self, schema: &Document, error_collector: &mut ValidationErrorContext) {
        for definition in &schema.definitions {
            match definition {
                schema::Definition::TypeDefinition(schema::TypeDefinition::Object(object)) => {
                    check_field_arguments(&object.name, &object.fields, error_collector, self.error_code());
                }
                schema::Definition::TypeDefinition(schema::TypeDefinition::Interface(interface)) => {
                    check_field_arguments(&interface.name, &interface.fields, error_collector, self.error_code());
                }
                schema::Definition::TypeExtension(schema::TypeExtension::Object(object)) => {
                    check_field_arguments(&object.name, &object.fields, error_collector, self.error_code());
                }
                schema::Definition::TypeExtension(schema::TypeExtension::Interface(interface)) => {
                    check_field_arguments(&interface.name, &interface.fields, error_collector, self.error_code());
                }
                schema::Definition::DirectiveDefinition(directive_def) => {
                    check_arguments(
                        &format!("@{}", directive_def.name),
                        "Directive",
                        &directive_def.arguments,
                        error_collector,
                        self.error_code(),
                    );
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UniqueArgumentDefinitionNames;
    use crate::validation::rules::SdlValidationRule;
    use crate::validation::test_utils::parsed_schema;
    use crate::validation::utils::ValidationErrorContext;

    fn validate(schema_str: &str) -> Vec<String> {
        let schema = parsed_schema(schema_str);
        let mut error_collector = ValidationErrorContext::new();
        UniqueArgumentDefinitionNames::new().validate(&schema, &mut error_collector);
        error_collector
            .validation_errors
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn no_duplicates() {
        assert_eq!(
            validate("type Query { a(x: Int, y: Int): String }").len(),
            0
        );
    }

    #[test]
    fn duplicate_field_argument() {
        let errors = validate("type Query { a(x: Int, x: String): String }");
        assert_eq!(
            errors,
            vec!["Field \"Query.a\" can only have one argument named \"x\"."]
        );
    }

    #[test]
    fn duplicate_directive_argument() {
        let errors = validate(
            "directive @foo(x: Int, x: String) on FIELD
             type Query { a: String }",
        );

        assert_eq!(
            errors,
            vec!["Directive \"@foo\" can only have one argument named \"x\"."]
        );
    }
}
