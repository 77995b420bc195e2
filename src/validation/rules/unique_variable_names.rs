use std::collections::HashMap;

use super::ValidationRule;
use crate::ast::{visit_document, OperationVisitor, OperationVisitorContext};
use crate::static_graphql::query::{OperationDefinition, VariableDefinition};
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// Unique variable names
///
/// A GraphQL operation is only valid if all its variables are uniquely named.
///
/// See https://spec.graphql.org/draft/#sec-Variable-Uniqueness
pub struct UniqueVariableNames {
    known_variable_names: HashMap<String, graphql_parser::Pos>,
}

impl UniqueVariableNames {
    pub fn new() -> Self {
        Self {
            known_variable_names: HashMap::new(),
        }
    }
}

impl<'a> OperationVisitor<'a, ValidationErrorContext> for UniqueVariableNames {
    fn enter_operation_definition(
        &mut self,
        _ctx: &mut OperationVisitorContext<'a>,
        _err: &mut ValidationErrorContext,
        _node: &'a OperationDefinition,
    ) {
        self.known_variable_names.clear();
    }

    fn enter_variable_definition(
        &mut self,
        _ctx: &mut OperationVisitorContext<'a>,
        err: &mut ValidationErrorContext,
        node: &'a VariableDefinition,
    ) {
        if self.known_variable_names.contains_key(&node.name) {
            err.report_error(ValidationError {
                error_code: self.error_code(),
                message: format!("There can only be one variable named \"${}\".", node.name),
                locations: vec![node.position],
            });
        } else {
            self.known_variable_names
                .insert(node.name.clone(), node.position);
        }
    }
}

impl ValidationRule for UniqueVariableNames {
    fn error_code<'a>(&self) -> &'a str {
        "UniqueVariableNames"
    }

    fn validate(&self, ctx: &mut OperationVisitorContext, error_collector: &mut ValidationErrorContext) {
        visit_document(&mut UniqueVariableNames::new(), ctx.operation, ctx, error_collector)
    }
}

#[cfg(test)]
mod tests {
    use crate::validation::test_utils::*;

    use super::UniqueVariableNames;

    #[test]
    fn unique_variable_names() {
        let mut plan = create_plan_from_rule(Box::new(UniqueVariableNames::new()));
        let errors = test_operation_without_schema(
            "query A($x: Int, $y: String) { __typename }
            query B($x: String, $y: Int) { __typename }"
                .to_owned(),
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn duplicate_variable_names() {
        let mut plan = create_plan_from_rule(Box::new(UniqueVariableNames::new()));
        let errors = test_operation_without_schema(
            "query A($x: Int, $x: Int, $x: String) { __typename }
            query B($y: String, $y: Int) { __typename }
            query C($z: Int, $z: Int) { __typename }"
                .to_owned(),
            &mut plan,
        );

        let messages = get_messages(&errors);

        assert_eq!(messages.len(), 4);
        assert!(messages.contains(&&"There can only be one variable named \"$x\".".to_owned()));
        assert!(messages.contains(&&"There can only be one variable named \"$y\".".to_owned()));
        assert!(messages.contains(&&"There can only be one variable named \"$z\".".to_owned()));
    }
}
