use std::collections::HashMap;

use super::ValidationRule;
use crate::ast::{visit_document, OperationVisitor, OperationVisitorContext};
use crate::static_graphql::query::{Document, FragmentDefinition, FragmentSpread, Selection};
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// No fragment cycles
///
/// The graph of fragment spreads must not form any cycles including spreading
/// itself. Otherwise an operation could infinitely spread or infinitely
/// execute on cycles in the underlying data.
///
/// https://spec.graphql.org/draft/#sec-Fragment-spreads-must-not-form-cycles
pub struct NoFragmentsCycle {
    /// Tracks already visited fragments to maintain O(N) and to ensure that
    /// cycles are not redundantly reported.
    visited_fragments: HashMap<String, bool>,
    /// The path of fragment spreads currently being explored.
    spread_path: Vec<FragmentSpread>,
    /// Position of each fragment name in `spread_path` the first time it was
    /// entered, so a later spread back to it can be detected as a cycle.
    spread_path_index_by_name: HashMap<String, Option<usize>>,
}

impl Default for NoFragmentsCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl NoFragmentsCycle {
    pub fn new() -> Self {
        Self {
            visited_fragments: HashMap::new(),
            spread_path: Vec::new(),
            spread_path_index_by_name: HashMap::new(),
        }
    }

    fn detect_cycles(
        &mut self,
        fragment: &FragmentDefinition,
        known_fragments: &HashMap<String, FragmentDefinition>,
        user_context: &mut ValidationErrorContext,
    ) {
        if self.visited_fragments.contains_key(&fragment.name) {
            return;
        }
        self.visited_fragments.insert(fragment.name.clone(), true);

        let spreads: Vec<FragmentSpread> = fragment
            .selection_set
            .items
            .iter()
            .filter_map(|item| match item {
                Selection::FragmentSpread(fragment_spread) => Some(fragment_spread.clone()),
                _ => None,
            })
            .collect();

        if spreads.is_empty() {
            return;
        }

        self.spread_path_index_by_name
            .insert(fragment.name.clone(), Some(self.spread_path.len()));

        for spread_node in spreads {
            let spread_name = spread_node.fragment_name.clone();
            let cycle_index = self
                .spread_path_index_by_name
                .get(&spread_name)
                .cloned()
                .flatten();

            self.spread_path.push(spread_node);

            match cycle_index {
                Some(index) => {
                    let cycle_path = &self.spread_path[index..];
                    let via_names: Vec<String> = cycle_path[..cycle_path.len() - 1]
                        .iter()
                        .map(|s| s.fragment_name.clone())
                        .collect();

                    let message = if via_names.is_empty() {
                        format!("Cannot spread fragment \"{}\" within itself.", spread_name)
                    } else {
                        format!(
                            "Cannot spread fragment \"{}\" within itself via {}.",
                            spread_name,
                            via_names.join(", ")
                        )
                    };

                    user_context.report_error(ValidationError {
                        error_code: self.error_code(),
                        locations: cycle_path.iter().map(|s| s.position).collect(),
                        message,
                    });
                }
                None => {
                    if let Some(next_fragment) = known_fragments.get(&spread_name).cloned() {
                        self.detect_cycles(&next_fragment, known_fragments, user_context);
                    }
                }
            }

            self.spread_path.pop();
        }

        self.spread_path_index_by_name
            .insert(fragment.name.clone(), None);
    }
}

impl<'a> OperationVisitor<'a, ValidationErrorContext> for NoFragmentsCycle {
    fn leave_document(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        user_context: &mut ValidationErrorContext,
        _node: &'a Document,
    ) {
        let known_fragments = ctx.known_fragments.clone();
        for fragment in known_fragments.values() {
            if !self.visited_fragments.contains_key(&fragment.name) {
                self.detect_cycles(fragment, &known_fragments, user_context);
            }
        }
    }
}

impl ValidationRule for NoFragmentsCycle {
    fn error_code<'a>(&self) -> &'a str {
        "NoFragmentsCycle"
    }

    fn validate(&self, ctx: &mut OperationVisitorContext, error_collector: &mut ValidationErrorContext) {
        visit_document(&mut NoFragmentsCycle::new(), ctx.operation, ctx, error_collector)
    }
}

#[cfg(test)]
mod tests {
    use crate::validation::test_utils::*;

    use super::NoFragmentsCycle;

    #[test]
    fn single_reference_is_valid() {
        let mut plan = create_plan_from_rule(Box::new(NoFragmentsCycle::new()));
        let errors = test_operation_with_schema(
            "fragment fragA on Dog { ...fragB }
            fragment fragB on Dog { name }",
            TEST_SCHEMA,
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn spreading_twice_is_not_circular() {
        let mut plan = create_plan_from_rule(Box::new(NoFragmentsCycle::new()));
        let errors = test_operation_with_schema(
            "fragment fragA on Dog { ...fragB, ...fragB }
            fragment fragB on Dog { name }",
            TEST_SCHEMA,
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn spreading_twice_indirectly_is_not_circular() {
        let mut plan = create_plan_from_rule(Box::new(NoFragmentsCycle::new()));
        let errors = test_operation_with_schema(
            "fragment fragA on Dog { ...fragB, ...fragC }
            fragment fragB on Dog { ...fragC }
            fragment fragC on Dog { name }",
            TEST_SCHEMA,
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn no_spreading_indirectly_within_inline_fragment() {
        let mut plan = create_plan_from_rule(Box::new(NoFragmentsCycle::new()));
        let errors = test_operation_with_schema(
            "fragment fragA on Pet {
                ... on Dog {
                  ...fragB
                }
              }
              fragment fragB on Pet {
                ... on Dog {
                  ...fragA
                }
              }",
            TEST_SCHEMA,
            &mut plan,
        );

        let messages = get_messages(&errors);
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages,
            vec!["Cannot spread fragment \"fragA\" within itself via fragB."]
        );
    }

    #[test]
    fn direct_self_reference_is_detected() {
        let mut plan = create_plan_from_rule(Box::new(NoFragmentsCycle::new()));
        let errors = test_operation_with_schema(
            "fragment fragA on Dog { ...fragA }",
            TEST_SCHEMA,
            &mut plan,
        );

        let messages = get_messages(&errors);
        assert_eq!(
            messages,
            vec!["Cannot spread fragment \"fragA\" within itself."]
        );
    }
}
