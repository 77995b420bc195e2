use std::collections::HashMap;

use graphql_parser::Pos;

use crate::static_graphql::schema::{self, Document};
use crate::validation::rules::SdlValidationRule;
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// Unique enum value names
///
/// Within one enum and its extensions combined, value names must be unique.
///
/// See https://spec.graphql.org/draft/#sec-Enums
pub struct UniqueEnumValueNames;

impl UniqueEnumValueNames {
    pub fn new() -> Self {
        UniqueEnumValueNames
    }
}

impl SdlValidationRule for UniqueEnumValueNames {
    fn error_code<'a>(&self) -> &'a str {
        "UniqueEnumValueNames"
    }

    fn validate(&self, schema: &Document, error_collector: &mut ValidationErrorContext) {
        let mut values_by_enum: HashMap<String, Vec<(String, Pos)>> = HashMap::new();

        for definition in &schema.definitions {
            match definition {
                schema::Definition::TypeDefinition(schema::TypeDefinition::Enum(enum_type)) => {
                    values_by_enum.entry(enum_type.name.clone()).or_default().extend(
                        enum_type.values.iter().map(|v| (v.name.clone(), v.position)),
                    );
                }
                schema::Definition::TypeExtension(schema::TypeExtension::Enum(enum_ext)) => {
                    values_by_enum.entry(enum_ext.name.clone()).or_default().extend(
                        enum_ext.values.iter().map(|v| (v.name.clone(), v.position)),
                    );
                }
                _ => {}
            }
        }

        let mut enum_names: Vec<&String> = values_by_enum.keys().collect();
        enum_names.sort();

        for enum_name in enum_names {
            let values = &values_by_enum[enum_name];
            let mut seen: HashMap<&str, u32> = HashMap::new();

            for (value_name, position) in values {
                let count = seen.entry(value_name.as_str()).or_insert(0);
                *count += 1;

                if *count > 1 {
                    error_collector.report_error(ValidationError {
                        error_code: self.error_code(),
                        locations: vec![*position],
                        message: format!(
                            "Enum value \"{}.{}\" can only be defined once.",
                            enum_name, value_name
                        ),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UniqueEnumValueNames;
    use crate::validation::rules::SdlValidationRule;
    use crate::validation::test_utils::parsed_schema;
    use crate::validation::utils::ValidationErrorContext;

    fn validate(schema_str: &str) -> Vec<String> {
        let schema = parsed_schema(schema_str);
        let mut error_collector = ValidationErrorContext::new();
        UniqueEnumValueNames::new().validate(&schema, &mut error_collector);
        error_collector
            .validation_errors
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn no_duplicates() {
        assert_eq!(
            validate("type Query { a: String } enum Color { RED GREEN }").len(),
            0
        );
    }

    #[test]
    fn duplicate_within_enum() {
        let errors = validate("type Query { a: String } enum Color { RED RED }");
        assert_eq!(errors, vec!["Enum value \"Color.RED\" can only be defined once."]);
    }

    #[test]
    fn duplicate_across_extension() {
        let errors = validate(
            "type Query { a: String }
             enum Color { RED }
             extend enum Color { RED }",
        );

        assert_eq!(errors, vec!["Enum value \"Color.RED\" can only be defined once."]);
    }
}
