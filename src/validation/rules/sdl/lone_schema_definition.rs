use crate::static_graphql::schema::{self, Document};
use crate::validation::rules::SdlValidationRule;
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// Lone schema definition
///
/// A document may contain at most one `schema { ... }` definition.
///
/// See https://spec.graphql.org/draft/#sec-Schema
pub struct LoneSchemaDefinition;

impl LoneSchemaDefinition {
    pub fn new() -> Self {
        LoneSchemaDefinition
    }
}

impl SdlValidationRule for LoneSchemaDefinition {
    fn error_code<'a>(&self) -> &'a str {
        "LoneSchemaDefinition"
    }

    fn validate(&self, schema: &Document, error_collector: &mut ValidationErrorContext) {
        let schema_definitions: Vec<&schema::SchemaDefinition> = schema
            .definitions
            .iter()
            .filter_map(|definition| match definition {
                schema::Definition::SchemaDefinition(schema_def) => Some(schema_def),
                _ => None,
            })
            .collect();

        for schema_def in schema_definitions.iter().skip(1) {
            error_collector.report_error(ValidationError {
                error_code: self.error_code(),
                locations: vec![schema_def.position],
                message: "Must provide only one schema definition.".to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LoneSchemaDefinition;
    use crate::validation::rules::SdlValidationRule;
    use crate::validation::test_utils::parsed_schema;
    use crate::validation::utils::ValidationErrorContext;

    fn validate(schema_str: &str) -> Vec<String> {
        let schema = parsed_schema(schema_str);
        let mut error_collector = ValidationErrorContext::new();
        LoneSchemaDefinition::new().validate(&schema, &mut error_collector);
        error_collector
            .validation_errors
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn no_schema_definition() {
        assert_eq!(validate("type Query { a: String }").len(), 0);
    }

    #[test]
    fn one_schema_definition() {
        assert_eq!(
            validate("type Query { a: String } schema { query: Query }").len(),
            0
        );
    }

    #[test]
    fn two_schema_definitions() {
        let errors = validate(
            "type Query { a: String }
             schema { query: Query }
             schema { query: Query }",
        );

        assert_eq!(errors, vec!["Must provide only one schema definition."]);
    }
}
