use super::ValidationRule;
use crate::ast::{visit_document, OperationVisitor, OperationVisitorContext};
use crate::static_graphql::query::{Definition, Document, OperationDefinition};
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// Lone anonymous operation
///
/// A GraphQL document is only valid if when it contains an anonymous operation
/// (the query short-hand) that it contains only that one operation definition.
///
/// See https://spec.graphql.org/draft/#sec-Lone-Anonymous-Operation
pub struct LoneAnonymousOperation;

impl<'a> OperationVisitor<'a, ValidationErrorContext> for LoneAnonymousOperation {
    fn enter_document(
        &mut self,
        _ctx: &mut OperationVisitorContext<'a>,
        user_context: &mut ValidationErrorContext,
        node: &'a Document,
    ) {
        let operations_count = node
            .definitions
            .iter()
            .filter(|d| matches!(d, Definition::Operation(_)))
            .count();

        if operations_count <= 1 {
            return;
        }

        for definition in &node.definitions {
            if let Definition::Operation(operation) = definition {
                let (is_anonymous, locations) = match operation {
                    OperationDefinition::SelectionSet(_) => (true, vec![]),
                    OperationDefinition::Query(query) => {
                        (query.name.is_none(), vec![query.position])
                    }
                    OperationDefinition::Mutation(mutation) => {
                        (mutation.name.is_none(), vec![mutation.position])
                    }
                    OperationDefinition::Subscription(subscription) => {
                        (subscription.name.is_none(), vec![subscription.position])
                    }
                };

                if is_anonymous {
                    user_context.report_error(ValidationError {
                        error_code: self.error_code(),
                        message: "This anonymous operation must be the only defined operation."
                            .to_string(),
                        locations,
                    });
                }
            }
        }
    }
}

impl ValidationRule for LoneAnonymousOperation {
    fn error_code<'a>(&self) -> &'a str {
        "LoneAnonymousOperation"
    }

    fn validate(&self, ctx: &mut OperationVisitorContext, error_collector: &mut ValidationErrorContext) {
        visit_document(&mut LoneAnonymousOperation {}, ctx.operation, ctx, error_collector)
    }
}

#[cfg(test)]
mod tests {
    use crate::validation::test_utils::*;

    use super::LoneAnonymousOperation;

    #[test]
    fn no_operations() {
        let mut plan = create_plan_from_rule(Box::new(LoneAnonymousOperation {}));
        let errors = test_operation_without_schema(
            "fragment fragA on Dog {
              name
            }"
            .to_owned(),
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn one_anon_operation() {
        let mut plan = create_plan_from_rule(Box::new(LoneAnonymousOperation {}));
        let errors = test_operation_without_schema(
            "{
              foo
            }"
            .to_owned(),
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn multiple_named() {
        let mut plan = create_plan_from_rule(Box::new(LoneAnonymousOperation {}));
        let errors = test_operation_without_schema(
            "query Foo {
              foo
            }
            query Bar {
              foo
            }"
            .to_owned(),
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn anon_operation_with_fragment() {
        let mut plan = create_plan_from_rule(Box::new(LoneAnonymousOperation {}));
        let errors = test_operation_without_schema(
            "{
              ...Foo
            }
            fragment Foo on Query {
              foo
            }"
            .to_owned(),
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn multiple_anon_operations() {
        let mut plan = create_plan_from_rule(Box::new(LoneAnonymousOperation {}));
        let errors = test_operation_without_schema(
            "{
              fieldA: foo
            }
            {
              fieldB: foo
            }"
            .to_owned(),
            &mut plan,
        );

        let messages = get_messages(&errors);
        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages,
            vec![
                "This anonymous operation must be the only defined operation.",
                "This anonymous operation must be the only defined operation."
            ]
        );
    }

    #[test]
    fn anon_operation_with_mutation() {
        let mut plan = create_plan_from_rule(Box::new(LoneAnonymousOperation {}));
        let errors = test_operation_without_schema(
            "{
              fieldA: foo
            }
            mutation Foo {
              fieldB: foo
            }"
            .to_owned(),
            &mut plan,
        );

        let messages = get_messages(&errors);
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages,
            vec!["This anonymous operation must be the only defined operation."]
        );
    }

    #[test]
    fn anon_operation_with_subscription() {
        let mut plan = create_plan_from_rule(Box::new(LoneAnonymousOperation {}));
        let errors = test_operation_without_schema(
            "{
              fieldA: foo
            }
            subscription Foo {
              fieldB: foo
            }"
            .to_owned(),
            &mut plan,
        );

        let messages = get_messages(&errors);
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages,
            vec!["This anonymous operation must be the only defined operation."]
        );
    }
}
