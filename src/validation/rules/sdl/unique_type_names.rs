use std::collections::HashMap;

use crate::ast::TypeDefinitionExtension;
use crate::static_graphql::schema::{self, Document};
use crate::validation::rules::SdlValidationRule;
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// Unique type names
///
/// Every named type definition in a schema document must have a unique name.
///
/// See https://spec.graphql.org/draft/#sec-Type-Extensions
pub struct UniqueTypeNames;

impl UniqueTypeNames {
    pub fn new() -> Self {
        UniqueTypeNames
    }
}

impl SdlValidationRule for UniqueTypeNames {
    fn error_code<'a>(&self) -> &'a str {
        "UniqueTypeNames"
    }

    fn validate(&self, schema: &Document, error_collector: &mut ValidationErrorContext) {
        let mut seen: HashMap<String, u32> = HashMap::new();

        for definition in &schema.definitions {
            if let schema::Definition::TypeDefinition(type_def) = definition {
                let name = type_def.name();
                let count = seen.entry(name.clone()).or_insert(0);
                *count += 1;

                if *count > 1 {
                    error_collector.report_error(ValidationError {
                        error_code: self.error_code(),
                        locations: vec![],
                        message: format!("There can be only one type named \"{}\".", name),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UniqueTypeNames;
    use crate::validation::rules::SdlValidationRule;
    use crate::validation::test_utils::parsed_schema;
    use crate::validation::utils::ValidationErrorContext;

    fn validate(schema_str: &str) -> Vec<String> {
        let schema = parsed_schema(schema_str);
        let mut error_collector = ValidationErrorContext::new();
        UniqueTypeNames::new().validate(&schema, &mut error_collector);
        error_collector
            .validation_errors
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn no_duplicates() {
        assert_eq!(
            validate("type Query { a: String } type Foo { b: String }").len(),
            0
        );
    }

    #[test]
    fn duplicate_object_type() {
        let errors = validate(
            "type Query { a: String }
             type Foo { b: String }
             type Foo { c: String }",
        );

        assert_eq!(errors, vec!["There can be only one type named \"Foo\"."]);
    }

    #[test]
    fn duplicate_across_kinds() {
        let errors = validate(
            "type Query { a: String }
             scalar Foo
             enum Foo { A }",
        );

        assert_eq!(errors, vec!["There can be only one type named \"Foo\"."]);
    }
}
