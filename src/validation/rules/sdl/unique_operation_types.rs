use crate::static_graphql::schema::{self, Document};
use crate::validation::rules::SdlValidationRule;
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// Unique operation types
///
/// At most one `query`/`mutation`/`subscription` root type may be assigned
/// across all `schema { ... }` definitions in a document.
///
/// See https://spec.graphql.org/draft/#sec-Schema
pub struct UniqueOperationTypes;

impl UniqueOperationTypes {
    pub fn new() -> Self {
        UniqueOperationTypes
    }
}

impl SdlValidationRule for UniqueOperationTypes {
    fn error_code<'a>(&self) -> &'a str {
        "UniqueOperationTypes"
    }

    fn validate(&self, schema: &Document, error_collector: &mut ValidationErrorContext) {
        let mut seen = (false, false, false);

        for definition in &schema.definitions {
            if let schema::Definition::SchemaDefinition(schema_def) = definition {
                if schema_def.query.is_some() {
                    if seen.0 {
                        error_collector.report_error(ValidationError {
                            error_code: self.error_code(),
                            locations: vec![schema_def.position],
                            message: "Type for query already defined in the schema. It cannot be redefined.".to_string(),
                        });
                    }
                    seen.0 = true;
                }

                if schema_def.mutation.is_some() {
                    if seen.1 {
                        error_collector.report_error(ValidationError {
                            error_code: self.error_code(),
                            locations: vec![schema_def.position],
                            message: "Type for mutation already defined in the schema. It cannot be redefined.".to_string(),
                        });
                    }
                    seen.1 = true;
                }

                if schema_def.subscription.is_some() {
                    if seen.2 {
                        error_collector.report_error(ValidationError {
                            error_code: self.error_code(),
                            locations: vec![schema_def.position],
                            message: "Type for subscription already defined in the schema. It cannot be redefined.".to_string(),
                        });
                    }
                    seen.2 = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UniqueOperationTypes;
    use crate::validation::rules::SdlValidationRule;
    use crate::validation::test_utils::parsed_schema;
    use crate::validation::utils::ValidationErrorContext;

    fn validate(schema_str: &str) -> Vec<String> {
        let schema = parsed_schema(schema_str);
        let mut error_collector = ValidationErrorContext::new();
        UniqueOperationTypes::new().validate(&schema, &mut error_collector);
        error_collector
            .validation_errors
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn single_schema_definition() {
        assert_eq!(
            validate(
                "type Query { a: String }
                 type Mutation { b: String }
                 schema { query: Query mutation: Mutation }"
            )
            .len(),
            0
        );
    }

    #[test]
    fn duplicate_query_assignment_across_schema_blocks() {
        let errors = validate(
            "type Query { a: String }
             type OtherQuery { a: String }
             schema { query: Query }
             schema { query: OtherQuery }",
        );

        assert_eq!(
            errors,
            vec!["Type for query already defined in the schema. It cannot be redefined."]
        );
    }
}
