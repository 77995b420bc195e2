use std::collections::{HashMap, HashSet};

use super::ValidationRule;
use crate::ast::{visit_document, OperationVisitor, OperationVisitorContext};
use crate::static_graphql::query::{
    Definition, Document, FragmentDefinition, OperationDefinition, Selection, SelectionSet,
};
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// No unused fragments
///
/// A GraphQL document is only valid if all fragment definitions are spread
/// within operations, or spread within other fragments spread within
/// operations.
///
/// See https://spec.graphql.org/draft/#sec-Fragments-Must-Be-Used
pub struct NoUnusedFragments;

fn collect_reachable_fragments(
    selection_set: &SelectionSet,
    known_fragments: &HashMap<String, FragmentDefinition>,
    reachable: &mut HashSet<String>,
) {
    for selection in &selection_set.items {
        match selection {
            Selection::Field(field) => {
                collect_reachable_fragments(&field.selection_set, known_fragments, reachable);
            }
            Selection::InlineFragment(inline_fragment) => {
                collect_reachable_fragments(
                    &inline_fragment.selection_set,
                    known_fragments,
                    reachable,
                );
            }
            Selection::FragmentSpread(fragment_spread) => {
                if reachable.contains(&fragment_spread.fragment_name) {
                    continue;
                }
                reachable.insert(fragment_spread.fragment_name.clone());

                if let Some(fragment) = known_fragments.get(&fragment_spread.fragment_name) {
                    collect_reachable_fragments(
                        &fragment.selection_set,
                        known_fragments,
                        reachable,
                    );
                }
            }
        }
    }
}

impl<'a> OperationVisitor<'a, ValidationErrorContext> for NoUnusedFragments {
    fn leave_document(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        user_context: &mut ValidationErrorContext,
        document: &'a Document,
    ) {
        let mut reachable = HashSet::new();

        for definition in &document.definitions {
            if let Definition::Operation(operation) = definition {
                let selection_set = match operation {
                    OperationDefinition::Query(query) => &query.selection_set,
                    OperationDefinition::Mutation(mutation) => &mutation.selection_set,
                    OperationDefinition::Subscription(subscription) => {
                        &subscription.selection_set
                    }
                    OperationDefinition::SelectionSet(selection_set) => selection_set,
                };

                collect_reachable_fragments(selection_set, &ctx.known_fragments, &mut reachable);
            }
        }

        let mut unused: Vec<&String> = ctx
            .known_fragments
            .keys()
            .filter(|fragment_name| !reachable.contains(*fragment_name))
            .collect();
        unused.sort();

        for fragment_name in unused {
            user_context.report_error(ValidationError {
                error_code: self.error_code(),
                locations: vec![],
                message: format!("Fragment \"{}\" is never used.", fragment_name),
            });
        }
    }
}

impl ValidationRule for NoUnusedFragments {
    fn error_code<'a>(&self) -> &'a str {
        "NoUnusedFragments"
    }

    fn validate(&self, ctx: &mut OperationVisitorContext, error_collector: &mut ValidationErrorContext) {
        visit_document(&mut NoUnusedFragments {}, ctx.operation, ctx, error_collector)
    }
}

#[cfg(test)]
mod tests {
    use crate::validation::test_utils::*;

    use super::NoUnusedFragments;

    #[test]
    fn all_fragment_names_are_used() {
        let mut plan = create_plan_from_rule(Box::new(NoUnusedFragments {}));
        let errors = test_operation_with_schema(
            "{
              human(id: 4) {
                ...HumanFields1
                ... on Human {
                  ...HumanFields2
                }
              }
            }
            fragment HumanFields1 on Human {
              name
              ...HumanFields3
            }
            fragment HumanFields2 on Human {
              name
            }
            fragment HumanFields3 on Human {
              name
            }",
            TEST_SCHEMA,
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn all_fragment_names_are_used_by_multiple_operations() {
        let mut plan = create_plan_from_rule(Box::new(NoUnusedFragments {}));
        let errors = test_operation_with_schema(
            "query Foo {
              human(id: 4) {
                ...HumanFields1
              }
            }
            query Bar {
              human(id: 4) {
                ...HumanFields2
              }
            }
            fragment HumanFields1 on Human {
              name
              ...HumanFields3
            }
            fragment HumanFields2 on Human {
              name
            }
            fragment HumanFields3 on Human {
              name
            }
      ",
            TEST_SCHEMA,
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn contains_unknown_fragments() {
        let mut plan = create_plan_from_rule(Box::new(NoUnusedFragments {}));
        let errors = test_operation_with_schema(
            "query Foo {
              human(id: 4) {
                ...HumanFields1
              }
            }
            query Bar {
              human(id: 4) {
                ...HumanFields2
              }
            }
            fragment HumanFields1 on Human {
              name
              ...HumanFields3
            }
            fragment HumanFields2 on Human {
              name
            }
            fragment HumanFields3 on Human {
              name
            }
            fragment Unused1 on Human {
              name
            }
            fragment Unused2 on Human {
              name
            }
      ",
            TEST_SCHEMA,
            &mut plan,
        );

        let messages = get_messages(&errors);
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn contains_unknown_fragments_with_ref_cycle() {
        let mut plan = create_plan_from_rule(Box::new(NoUnusedFragments {}));
        let errors = test_operation_with_schema(
            "query Foo {
              human(id: 4) {
                ...HumanFields1
              }
            }
            query Bar {
              human(id: 4) {
                ...HumanFields2
              }
            }
            fragment HumanFields1 on Human {
              name
              ...HumanFields3
            }
            fragment HumanFields2 on Human {
              name
            }
            fragment HumanFields3 on Human {
              name
            }
            fragment Unused1 on Human {
              name
              ...Unused2
            }
            fragment Unused2 on Human {
              name
              ...Unused1
            }
      ",
            TEST_SCHEMA,
            &mut plan,
        );

        let messages = get_messages(&errors);
        assert_eq!(messages.len(), 2);
        assert_eq!(
            messages,
            vec![
                "Fragment \"Unused1\" is never used.",
                "Fragment \"Unused2\" is never used."
            ]
        );
    }

    #[test]
    fn contains_unknown_and_undef_fragments() {
        let mut plan = create_plan_from_rule(Box::new(NoUnusedFragments {}));
        let errors = test_operation_with_schema(
            "query Foo {
              human(id: 4) {
                ...bar
              }
            }
            fragment foo on Human {
              name
            }
      ",
            TEST_SCHEMA,
            &mut plan,
        );

        let messages = get_messages(&errors);
        assert_eq!(messages, vec!["Fragment \"foo\" is never used.",]);
    }
}
