use crate::static_graphql::schema::Document;
use crate::validation::rules::sdl::common::{check_known_arguments_on_directives, for_each_directive_site, known_directive_definitions};
use crate::validation::rules::SdlValidationRule;
use crate::validation::utils::ValidationErrorContext;

/// Known argument names on directives (SDL)
///
/// Every argument passed to a directive application anywhere in a schema
/// document must be declared by that directive's definition.
///
/// See https://spec.graphql.org/draft/#sec-Directives-Are-In-Valid-Locations
pub struct KnownArgumentNamesOnDirectives;

impl KnownArgumentNamesOnDirectives {
    pub fn new() -> Self {
        KnownArgumentNamesOnDirectives
    }
}

impl SdlValidationRule for KnownArgumentNamesOnDirectives {
    fn error_code<'a>(&self) -> &'a str {
        "KnownArgumentNamesOnDirectives"
    }

    fn validate(&self, schema: &Document, error_collector: &mut ValidationErrorContext) {
        let directive_defs = known_directive_definitions(schema);

        for_each_directive_site(schema, |directives| {
            check_known_arguments_on_directives(directives, &directive_defs, error_collector, self.error_code());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::KnownArgumentNamesOnDirectives;
    use crate::validation::rules::SdlValidationRule;
    use crate::validation::test_utils::parsed_schema;
    use crate::validation::utils::ValidationErrorContext;

    fn validate(schema_str: &str) -> Vec<String> {
        let schema = parsed_schema(schema_str);
        let mut error_collector = ValidationErrorContext::new();
        KnownArgumentNamesOnDirectives::new().validate(&schema, &mut error_collector);
        error_collector
            .validation_errors
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn known_argument_is_valid() {
        assert_eq!(
            validate(
                "directive @foo(reason: String) on FIELD_DEFINITION
                 type Query { a: String @foo(reason: \"legacy\") }"
            )
            .len(),
            0
        );
    }

    #[test]
    fn unknown_argument_on_field_directive() {
        let errors = validate(
            "directive @foo(reason: String) on FIELD_DEFINITION
             type Query { a: String @foo(reezon: \"legacy\") }",
        );

        assert_eq!(
            errors,
            vec!["Unknown argument \"reezon\" on directive \"@foo\". Did you mean \"reason\"?"]
        );
    }

    #[test]
    fn unknown_argument_on_schema_directive() {
        let errors = validate(
            "directive @foo(reason: String) on SCHEMA
             schema @foo(reezon: \"legacy\") { query: Query }
             type Query { a: String }",
        );

        assert_eq!(
            errors,
            vec!["Unknown argument \"reezon\" on directive \"@foo\". Did you mean \"reason\"?"]
        );
    }
}
