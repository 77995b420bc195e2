use crate::static_graphql::schema::Document;
use crate::validation::rules::sdl::common::{check_unique_directives_per_location, for_each_directive_site, known_directive_definitions};
use crate::validation::rules::SdlValidationRule;
use crate::validation::utils::ValidationErrorContext;

/// Unique directives per location (SDL)
///
/// A non-repeatable directive must not be applied more than once at the same
/// location in a schema document.
///
/// See https://spec.graphql.org/draft/#sec-Directives-Are-Unique-Per-Location
pub struct UniqueDirectivesPerLocationSdl;

impl UniqueDirectivesPerLocationSdl {
    pub fn new() -> Self {
        UniqueDirectivesPerLocationSdl
    }
}

impl SdlValidationRule for UniqueDirectivesPerLocationSdl {
    fn error_code<'a>(&self) -> &'a str {
        "UniqueDirectivesPerLocation"
    }

    fn validate(&self, schema: &Document, error_collector: &mut ValidationErrorContext) {
        let directive_defs = known_directive_definitions(schema);

        for_each_directive_site(schema, |directives| {
            check_unique_directives_per_location(directives, &directive_defs, error_collector, self.error_code());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::UniqueDirectivesPerLocationSdl;
    use crate::validation::rules::SdlValidationRule;
    use crate::validation::test_utils::parsed_schema;
    use crate::validation::utils::ValidationErrorContext;

    fn validate(schema_str: &str) -> Vec<String> {
        let schema = parsed_schema(schema_str);
        let mut error_collector = ValidationErrorContext::new();
        UniqueDirectivesPerLocationSdl::new().validate(&schema, &mut error_collector);
        error_collector
            .validation_errors
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn single_application_is_valid() {
        assert_eq!(
            validate(
                "directive @foo on FIELD_DEFINITION
                 type Query { a: String @foo }"
            )
            .len(),
            0
        );
    }

    #[test]
    fn repeated_non_repeatable_directive_on_field() {
        let errors = validate(
            "directive @foo on FIELD_DEFINITION
             type Query { a: String @foo @foo }",
        );

        assert_eq!(
            errors,
            vec!["The directive \"@foo\" can only be used once at this location."]
        );
    }

    #[test]
    fn repeatable_directive_may_repeat() {
        assert_eq!(
            validate(
                "directive @foo repeatable on FIELD_DEFINITION
                 type Query { a: String @foo @foo }"
            )
            .len(),
            0
        );
    }
}
