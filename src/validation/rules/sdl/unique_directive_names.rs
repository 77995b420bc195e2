use std::collections::HashMap;

use crate::static_graphql::schema::{self, Document};
use crate::validation::rules::SdlValidationRule;
use crate::validation::utils::{ValidationError, ValidationErrorContext};

const STANDARD_DIRECTIVE_NAMES: [&str; 3] = ["skip", "include", "deprecated"];

/// Unique directive names
///
/// The directives defined within a schema document must have unique names,
/// and none of them may redefine one of the standard directives.
///
/// See https://spec.graphql.org/draft/#sec-Directives-Are-Unique-Per-Location
pub struct UniqueDirectiveNames;

impl UniqueDirectiveNames {
    pub fn new() -> Self {
        UniqueDirectiveNames
    }
}

impl SdlValidationRule for UniqueDirectiveNames {
    fn error_code<'a>(&self) -> &'a str {
        "UniqueDirectiveNames"
    }

    fn validate(&self, schema: &Document, error_collector: &mut ValidationErrorContext) {
        let mut seen: HashMap<&str, u32> = HashMap::new();

        for definition in &schema.definitions {
            if let schema::Definition::DirectiveDefinition(directive_def) = definition {
                if STANDARD_DIRECTIVE_NAMES.contains(&directive_def.name.as_str()) {
                    error_collector.report_error(ValidationError {
                        error_code: self.error_code(),
                        locations: vec![directive_def.position],
                        message: format!(
                            "Directive \"@{}\" already exists in the schema. It cannot be redefined.",
                            directive_def.name
                        ),
                    });
                    continue;
                }

                let count = seen.entry(directive_def.name.as_str()).or_insert(0);
                *count += 1;

                if *count > 1 {
                    error_collector.report_error(ValidationError {
                        error_code: self.error_code(),
                        locations: vec![directive_def.position],
                        message: format!(
                            "There can be only one directive named \"@{}\".",
                            directive_def.name
                        ),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UniqueDirectiveNames;
    use crate::validation::rules::SdlValidationRule;
    use crate::validation::test_utils::parsed_schema;
    use crate::validation::utils::ValidationErrorContext;

    fn validate(schema_str: &str) -> Vec<String> {
        let schema = parsed_schema(schema_str);
        let mut error_collector = ValidationErrorContext::new();
        UniqueDirectiveNames::new().validate(&schema, &mut error_collector);
        error_collector
            .validation_errors
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn no_directives() {
        assert_eq!(validate("type Query { a: String }").len(), 0);
    }

    #[test]
    fn one_directive() {
        assert_eq!(
            validate("directive @foo on FIELD\ntype Query { a: String }").len(),
            0
        );
    }

    #[test]
    fn many_distinct_directives() {
        assert_eq!(
            validate(
                "directive @foo on FIELD
                 directive @bar on FIELD
                 type Query { a: String }"
            )
            .len(),
            0
        );
    }

    #[test]
    fn duplicate_directive() {
        let errors = validate(
            "directive @foo on FIELD
             directive @foo on FIELD
             type Query { a: String }",
        );

        assert_eq!(errors, vec!["There can be only one directive named \"@foo\"."]);
    }

    #[test]
    fn redefines_standard_directive() {
        let errors = validate("directive @skip on FIELD\ntype Query { a: String }");

        assert_eq!(
            errors,
            vec!["Directive \"@skip\" already exists in the schema. It cannot be redefined."]
        );
    }
}
