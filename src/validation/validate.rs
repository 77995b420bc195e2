use crate::ast::OperationVisitorContext;
use crate::error::GraphQLToolsError;
use crate::static_graphql::{query, schema};

use super::rules::{SdlValidationRule, ValidationRule};
use super::utils::{ValidationError, ValidationErrorContext};

/// An ordered set of executable-document rules to run during a single
/// `validate` call.
pub struct ValidationPlan {
    pub rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationPlan {
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Like [`ValidationPlan::add_rule`], but rejects a rule whose `error_code()`
    /// is already registered instead of silently running the same check twice.
    pub fn try_add_rule(&mut self, rule: Box<dyn ValidationRule>) -> Result<(), GraphQLToolsError> {
        if self.rules.iter().any(|r| r.error_code() == rule.error_code()) {
            return Err(GraphQLToolsError::DuplicateRule(
                rule.error_code().to_string(),
            ));
        }

        self.rules.push(rule);
        Ok(())
    }
}

/// An ordered set of schema-definition-language rules to run during a single
/// `validate_sdl` call.
pub struct SdlValidationPlan {
    pub rules: Vec<Box<dyn SdlValidationRule>>,
}

impl SdlValidationPlan {
    pub fn add_rule(&mut self, rule: Box<dyn SdlValidationRule>) {
        self.rules.push(rule);
    }

    /// Like [`SdlValidationPlan::add_rule`], but rejects a rule whose `error_code()`
    /// is already registered instead of silently running the same check twice.
    pub fn try_add_rule(
        &mut self,
        rule: Box<dyn SdlValidationRule>,
    ) -> Result<(), GraphQLToolsError> {
        if self.rules.iter().any(|r| r.error_code() == rule.error_code()) {
            return Err(GraphQLToolsError::DuplicateRule(
                rule.error_code().to_string(),
            ));
        }

        self.rules.push(rule);
        Ok(())
    }
}

/// Runs every rule in `validation_plan` against `operation`, sharing a single
/// traversal context (schema lookups, fragment registry, type-info stacks)
/// across rules so each one only pays for its own hooks.
pub fn validate(
    schema: &schema::Document,
    operation: &query::Document,
    validation_plan: &ValidationPlan,
) -> Vec<ValidationError> {
    let mut error_collector = ValidationErrorContext::new();
    let mut ctx = OperationVisitorContext::new(operation, schema);

    log::debug!(
        "validating operation against {} rules",
        validation_plan.rules.len()
    );

    for rule in &validation_plan.rules {
        rule.validate(&mut ctx, &mut error_collector);
    }

    log::trace!(
        "validation complete: {} errors",
        error_collector.validation_errors.len()
    );

    error_collector.validation_errors
}

/// Runs every rule in `validation_plan` against a schema document on its own,
/// with no executable operation in scope.
pub fn validate_sdl(schema: &schema::Document, validation_plan: &SdlValidationPlan) -> Vec<ValidationError> {
    let mut error_collector = ValidationErrorContext::new();

    log::debug!(
        "validating schema against {} SDL rules",
        validation_plan.rules.len()
    );

    for rule in &validation_plan.rules {
        rule.validate(schema, &mut error_collector);
    }

    log::trace!(
        "SDL validation complete: {} errors",
        error_collector.validation_errors.len()
    );

    error_collector.validation_errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::test_utils::*;

    #[test]
    fn test_validate_valid_query() {
        let mut default_plan = create_default_ruleset_plan();
        let errors = test_operation_without_schema(
            "
    query test {
      foo
    }
    "
            .to_owned(),
            &mut default_plan,
        );

        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_validate_valid_fragment() {
        let mut default_plan = create_default_ruleset_plan();
        let errors = test_operation_without_schema(
            "
        fragment uniqueFields on Dog {
          name
          nickname
        }
    "
            .to_owned(),
            &mut default_plan,
        );

        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_validate_sdl_valid_schema() {
        let plan = crate::validation::rules::sdl::sdl_default_rules_validation_plan();
        let schema = parsed_schema(
            "
            type Query {
              name: String
            }

            extend type Query {
              age: Int
            }
            ",
        );

        let errors = validate_sdl(&schema, &plan);

        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_validate_sdl_reports_duplicate_type() {
        let plan = crate::validation::rules::sdl::sdl_default_rules_validation_plan();
        let schema = parsed_schema(
            "
            type Query { name: String }
            type Query { age: Int }
            ",
        );

        let errors = validate_sdl(&schema, &plan);

        assert_eq!(
            get_messages(&errors),
            vec!["There can be only one type named \"Query\"."]
        );
    }

    #[test]
    fn test_try_add_rule_rejects_duplicate_error_code() {
        let mut plan = ValidationPlan { rules: vec![] };

        plan.try_add_rule(Box::new(
            crate::validation::rules::UniqueFragmentNames::new(),
        ))
        .expect("first registration should succeed");

        let result = plan.try_add_rule(Box::new(
            crate::validation::rules::UniqueFragmentNames::new(),
        ));

        assert_eq!(
            result,
            Err(GraphQLToolsError::DuplicateRule(
                "UniqueFragmentNames".to_owned()
            ))
        );
        assert_eq!(plan.rules.len(), 1);
    }
}
