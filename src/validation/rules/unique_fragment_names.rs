use std::collections::HashMap;

use super::ValidationRule;
use crate::ast::ext::AstNodeWithName;
use crate::ast::{visit_document, OperationVisitor, OperationVisitorContext};
use crate::static_graphql::query::FragmentDefinition;
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// Unique fragment names
///
/// A GraphQL document is only valid if all defined fragments have unique names.
///
/// See https://spec.graphql.org/draft/#sec-Fragment-Name-Uniqueness
pub struct UniqueFragmentNames {
    findings_counter: HashMap<String, i32>,
}

impl Default for UniqueFragmentNames {
    fn default() -> Self {
        Self::new()
    }
}

impl UniqueFragmentNames {
    pub fn new() -> Self {
        Self {
            findings_counter: HashMap::new(),
        }
    }

    fn store_finding(&mut self, name: &str) {
        let value = *self.findings_counter.entry(name.to_string()).or_insert(0);
        self.findings_counter.insert(name.to_string(), value + 1);
    }
}

impl<'a> OperationVisitor<'a, ValidationErrorContext> for UniqueFragmentNames {
    fn enter_fragment_definition(
        &mut self,
        _ctx: &mut OperationVisitorContext<'a>,
        _user_context: &mut ValidationErrorContext,
        fragment: &'a FragmentDefinition,
    ) {
        if let Some(name) = fragment.node_name() {
            self.store_finding(&name);
        }
    }

    fn leave_document(
        &mut self,
        _ctx: &mut OperationVisitorContext<'a>,
        user_context: &mut ValidationErrorContext,
        _node: &'a crate::static_graphql::query::Document,
    ) {
        let mut duplicates: Vec<(&String, &i32)> = self
            .findings_counter
            .iter()
            .filter(|(_, count)| **count > 1)
            .collect();
        duplicates.sort_by_key(|(name, _)| (*name).clone());

        for (name, _) in duplicates {
            user_context.report_error(ValidationError {
                error_code: self.error_code(),
                locations: vec![],
                message: format!("There can be only one fragment named \"{}\".", name),
            });
        }
    }
}

impl ValidationRule for UniqueFragmentNames {
    fn error_code<'a>(&self) -> &'a str {
        "UniqueFragmentNames"
    }

    fn validate(&self, ctx: &mut OperationVisitorContext, error_collector: &mut ValidationErrorContext) {
        visit_document(&mut UniqueFragmentNames::new(), ctx.operation, ctx, error_collector)
    }
}

#[cfg(test)]
mod tests {
    use crate::validation::test_utils::*;

    use super::UniqueFragmentNames;

    #[test]
    fn no_fragments() {
        let mut plan = create_plan_from_rule(Box::new(UniqueFragmentNames::new()));
        let errors = test_operation_with_schema(
            "{
              dog { name }
            }",
            TEST_SCHEMA,
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn one_fragment() {
        let mut plan = create_plan_from_rule(Box::new(UniqueFragmentNames::new()));
        let errors = test_operation_with_schema(
            "{
              ...fragA
            }
            fragment fragA on Dog {
              name
            }",
            TEST_SCHEMA,
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn many_fragment() {
        let mut plan = create_plan_from_rule(Box::new(UniqueFragmentNames::new()));
        let errors = test_operation_with_schema(
            "{
              ...fragA
              ...fragB
              ...fragC
            }
            fragment fragA on Dog {
              name
            }
            fragment fragB on Dog {
              nickname
            }
            fragment fragC on Dog {
              barkVolume
            }",
            TEST_SCHEMA,
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn inline_fragments_are_always_unique() {
        let mut plan = create_plan_from_rule(Box::new(UniqueFragmentNames::new()));
        let errors = test_operation_with_schema(
            "{
              dog {
                ...on Dog {
                  name
                }
                ...on Dog {
                  nickname
                }
              }
            }",
            TEST_SCHEMA,
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn fragment_and_operation_named_the_same() {
        let mut plan = create_plan_from_rule(Box::new(UniqueFragmentNames::new()));
        let errors = test_operation_with_schema(
            "query Foo {
              ...Foo
            }
            fragment Foo on Dog {
              name
            }",
            TEST_SCHEMA,
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn fragments_named_the_same() {
        let mut plan = create_plan_from_rule(Box::new(UniqueFragmentNames::new()));
        let errors = test_operation_with_schema(
            "{
              ...fragA
            }
            fragment fragA on Dog {
              name
            }
            fragment fragA on Dog {
              nickname
            }",
            TEST_SCHEMA,
            &mut plan,
        );

        let messages = get_messages(&errors);
        assert_eq!(
            messages,
            vec!["There can be only one fragment named \"fragA\"."]
        );
    }

    #[test]
    fn fragments_named_the_same_without_being_referenced() {
        let mut plan = create_plan_from_rule(Box::new(UniqueFragmentNames::new()));
        let errors = test_operation_with_schema(
            "fragment fragA on Dog {
              name
            }
            fragment fragA on Dog {
              nickname
            }",
            TEST_SCHEMA,
            &mut plan,
        );

        let messages = get_messages(&errors);
        assert_eq!(
            messages,
            vec!["There can be only one fragment named \"fragA\"."]
        );
    }
}
