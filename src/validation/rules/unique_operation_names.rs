use std::collections::HashMap;

use super::ValidationRule;
use crate::ast::{visit_document, AstNodeWithName, OperationVisitor, OperationVisitorContext};
use crate::static_graphql::query::OperationDefinition;
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// Unique operation names
///
/// A GraphQL document is only valid if all defined operations have unique names.
///
/// See https://spec.graphql.org/draft/#sec-Operation-Name-Uniqueness
pub struct UniqueOperationNames {
    known_operation_names: HashMap<String, graphql_parser::Pos>,
}

impl UniqueOperationNames {
    pub fn new() -> Self {
        Self {
            known_operation_names: HashMap::new(),
        }
    }
}

fn operation_position(node: &OperationDefinition) -> graphql_parser::Pos {
    match node {
        OperationDefinition::SelectionSet(s) => s.span.0,
        OperationDefinition::Query(q) => q.position,
        OperationDefinition::Mutation(m) => m.position,
        OperationDefinition::Subscription(s) => s.position,
    }
}

impl<'a> OperationVisitor<'a, ValidationErrorContext> for UniqueOperationNames {
    fn enter_operation_definition(
        &mut self,
        _ctx: &mut OperationVisitorContext<'a>,
        user_context: &mut ValidationErrorContext,
        node: &'a OperationDefinition,
    ) {
        if let Some(name) = node.node_name() {
            if self.known_operation_names.contains_key(&name) {
                user_context.report_error(ValidationError {
                    error_code: self.error_code(),
                    message: format!("There can be only one operation named \"{}\".", name),
                    locations: vec![operation_position(node)],
                });
            } else {
                self.known_operation_names
                    .insert(name, operation_position(node));
            }
        }
    }
}

impl ValidationRule for UniqueOperationNames {
    fn error_code<'a>(&self) -> &'a str {
        "UniqueOperationNames"
    }

    fn validate(&self, ctx: &mut OperationVisitorContext, error_collector: &mut ValidationErrorContext) {
        visit_document(&mut UniqueOperationNames::new(), ctx.operation, ctx, error_collector)
    }
}

#[cfg(test)]
mod tests {
    use crate::validation::test_utils::*;

    use super::UniqueOperationNames;

    #[test]
    fn no_operations() {
        let mut plan = create_plan_from_rule(Box::new(UniqueOperationNames::new()));
        let errors = test_operation_without_schema(
            "fragment fragA on Type {
              field
            }"
            .to_owned(),
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn one_anon_operation() {
        let mut plan = create_plan_from_rule(Box::new(UniqueOperationNames::new()));
        let errors = test_operation_without_schema(
            "{
              field
            }"
            .to_owned(),
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn one_named_operation() {
        let mut plan = create_plan_from_rule(Box::new(UniqueOperationNames::new()));
        let errors = test_operation_without_schema(
            "query Foo {
              field
            }"
            .to_owned(),
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn multiple_operations() {
        let mut plan = create_plan_from_rule(Box::new(UniqueOperationNames::new()));
        let errors = test_operation_without_schema(
            "query Foo {
              field
            }
            query Bar {
              field
            }"
            .to_owned(),
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn multiple_operations_of_different_types() {
        let mut plan = create_plan_from_rule(Box::new(UniqueOperationNames::new()));
        let errors = test_operation_without_schema(
            "query Foo {
              field
            }
            mutation Bar {
              field
            }
            subscription Baz {
              field
            }"
            .to_owned(),
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn fragment_and_operation_named_the_same() {
        let mut plan = create_plan_from_rule(Box::new(UniqueOperationNames::new()));
        let errors = test_operation_without_schema(
            "query Foo {
              ...Foo
            }
            fragment Foo on Type {
              field
            }"
            .to_owned(),
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn multiple_operations_of_same_name() {
        let mut plan = create_plan_from_rule(Box::new(UniqueOperationNames::new()));
        let errors = test_operation_without_schema(
            "query Foo {
              fieldA
            }
            query Foo {
              fieldB
            }"
            .to_owned(),
            &mut plan,
        );

        let messages = get_messages(&errors);
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages,
            vec!["There can be only one operation named \"Foo\".",]
        );
    }

    #[test]
    fn multiple_ops_of_same_name_of_different_types_mutation() {
        let mut plan = create_plan_from_rule(Box::new(UniqueOperationNames::new()));
        let errors = test_operation_without_schema(
            "query Foo {
              fieldA
            }
            mutation Foo {
              fieldB
            }"
            .to_owned(),
            &mut plan,
        );

        let messages = get_messages(&errors);
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages,
            vec!["There can be only one operation named \"Foo\".",]
        );
    }

    #[test]
    fn multiple_ops_of_same_name_of_different_types_subscription() {
        let mut plan = create_plan_from_rule(Box::new(UniqueOperationNames::new()));
        let errors = test_operation_without_schema(
            "query Foo {
              fieldA
            }
            subscription Foo {
              fieldB
            }"
            .to_owned(),
            &mut plan,
        );

        let messages = get_messages(&errors);
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages,
            vec!["There can be only one operation named \"Foo\".",]
        );
    }
}
