use std::collections::{HashMap, HashSet};

use super::ValidationRule;
use crate::ast::ext::AstNodeWithName;
use crate::ast::{visit_document, OperationVisitor, OperationVisitorContext};
use crate::static_graphql::query::{
    Directive, Field, FragmentDefinition, InlineFragment, OperationDefinition, Selection,
    SelectionSet, Value, VariableDefinition,
};
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// No unused variables
///
/// A GraphQL operation is only valid if all variables defined by an operation
/// are used, either directly or within a spread fragment.
///
/// See https://spec.graphql.org/draft/#sec-All-Variables-Used
pub struct NoUnusedVariables {
    variable_definitions: Vec<VariableDefinition>,
}

impl Default for NoUnusedVariables {
    fn default() -> Self {
        Self::new()
    }
}

impl NoUnusedVariables {
    pub fn new() -> Self {
        Self {
            variable_definitions: Vec::new(),
        }
    }
}

fn collect_value_variables(value: &Value, out: &mut HashSet<String>) {
    match value {
        Value::Variable(name) => {
            out.insert(name.clone());
        }
        Value::List(items) => {
            for item in items {
                collect_value_variables(item, out);
            }
        }
        Value::Object(fields) => {
            for value in fields.values() {
                collect_value_variables(value, out);
            }
        }
        _ => {}
    }
}

fn collect_directive_variables(directives: &[Directive], out: &mut HashSet<String>) {
    for directive in directives {
        for (_, value) in &directive.arguments {
            collect_value_variables(value, out);
        }
    }
}

fn collect_field_variables(field: &Field, out: &mut HashSet<String>) {
    for (_, value) in &field.arguments {
        collect_value_variables(value, out);
    }
    collect_directive_variables(&field.directives, out);
}

fn collect_variables_in_selection_set(
    selection_set: &SelectionSet,
    known_fragments: &HashMap<String, FragmentDefinition>,
    visited_fragments: &mut HashSet<String>,
    out: &mut HashSet<String>,
) {
    for selection in &selection_set.items {
        match selection {
            Selection::Field(field) => {
                collect_field_variables(field, out);
                collect_variables_in_selection_set(
                    &field.selection_set,
                    known_fragments,
                    visited_fragments,
                    out,
                );
            }
            Selection::InlineFragment(InlineFragment {
                directives,
                selection_set,
                ..
            }) => {
                collect_directive_variables(directives, out);
                collect_variables_in_selection_set(
                    selection_set,
                    known_fragments,
                    visited_fragments,
                    out,
                );
            }
            Selection::FragmentSpread(fragment_spread) => {
                collect_directive_variables(&fragment_spread.directives, out);

                if visited_fragments.contains(&fragment_spread.fragment_name) {
                    continue;
                }
                visited_fragments.insert(fragment_spread.fragment_name.clone());

                if let Some(fragment) = known_fragments.get(&fragment_spread.fragment_name) {
                    collect_variables_in_selection_set(
                        &fragment.selection_set,
                        known_fragments,
                        visited_fragments,
                        out,
                    );
                }
            }
        }
    }
}

impl<'a> OperationVisitor<'a, ValidationErrorContext> for NoUnusedVariables {
    fn enter_operation_definition(
        &mut self,
        _ctx: &mut OperationVisitorContext<'a>,
        _user_context: &mut ValidationErrorContext,
        _operation: &'a OperationDefinition,
    ) {
        self.variable_definitions.clear();
    }

    fn enter_variable_definition(
        &mut self,
        _ctx: &mut OperationVisitorContext<'a>,
        _user_context: &mut ValidationErrorContext,
        variable_definition: &'a VariableDefinition,
    ) {
        self.variable_definitions.push(variable_definition.clone());
    }

    fn leave_operation_definition(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        user_context: &mut ValidationErrorContext,
        operation: &'a OperationDefinition,
    ) {
        let selection_set = match operation {
            OperationDefinition::Query(query) => &query.selection_set,
            OperationDefinition::Mutation(mutation) => &mutation.selection_set,
            OperationDefinition::Subscription(subscription) => &subscription.selection_set,
            OperationDefinition::SelectionSet(selection_set) => selection_set,
        };

        let mut used_variables = HashSet::new();
        collect_variables_in_selection_set(
            selection_set,
            &ctx.known_fragments,
            &mut HashSet::new(),
            &mut used_variables,
        );

        for variable_definition in &self.variable_definitions {
            if !used_variables.contains(&variable_definition.name) {
                user_context.report_error(ValidationError {
                    error_code: self.error_code(),
                    message: match operation.node_name() {
                        Some(name) => format!(
                            "Variable \"${}\" is never used in operation \"{}\".",
                            variable_definition.name, name
                        ),
                        None => format!("Variable \"${}\" is never used.", variable_definition.name),
                    },
                    locations: vec![variable_definition.position],
                });
            }
        }
    }
}

impl ValidationRule for NoUnusedVariables {
    fn error_code<'a>(&self) -> &'a str {
        "NoUnusedVariables"
    }

    fn validate(&self, ctx: &mut OperationVisitorContext, error_collector: &mut ValidationErrorContext) {
        visit_document(&mut NoUnusedVariables::new(), ctx.operation, ctx, error_collector)
    }
}

#[cfg(test)]
mod tests {
    use crate::validation::test_utils::*;

    use super::NoUnusedVariables;

    #[test]
    fn use_all_variables() {
        let mut plan = create_plan_from_rule(Box::new(NoUnusedVariables::new()));
        let errors = test_operation_without_schema(
            "query ($a: String, $b: String, $c: String) {
                field(a: $a, b: $b, c: $c)
              }"
            .to_owned(),
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn use_all_variables_deeply() {
        let mut plan = create_plan_from_rule(Box::new(NoUnusedVariables::new()));
        let errors = test_operation_without_schema(
            "query Foo($a: String, $b: String, $c: String) {
              field(a: $a) {
                field(b: $b) {
                  field(c: $c)
                }
              }
            }"
            .to_owned(),
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn use_all_variables_deeply_in_inline_fragments() {
        let mut plan = create_plan_from_rule(Box::new(NoUnusedVariables::new()));
        let errors = test_operation_without_schema(
            "query Foo($a: String, $b: String, $c: String) {
              ... on Type {
                field(a: $a) {
                  field(b: $b) {
                    ... on Type {
                      field(c: $c)
                    }
                  }
                }
              }
            }"
            .to_owned(),
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn use_all_variables_in_fragments() {
        let mut plan = create_plan_from_rule(Box::new(NoUnusedVariables::new()));
        let errors = test_operation_without_schema(
            "query Foo($a: String, $b: String, $c: String) {
              ...FragA
            }
            fragment FragA on Type {
              field(a: $a) {
                ...FragB
              }
            }
            fragment FragB on Type {
              field(b: $b) {
                ...FragC
              }
            }
            fragment FragC on Type {
              field(c: $c)
            }"
            .to_owned(),
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn variables_used_by_fragment_in_multiple_operations() {
        let mut plan = create_plan_from_rule(Box::new(NoUnusedVariables::new()));
        let errors = test_operation_without_schema(
            "query Foo($a: String) {
              ...FragA
            }
            query Bar($b: String) {
              ...FragB
            }
            fragment FragA on Type {
              field(a: $a)
            }
            fragment FragB on Type {
              field(b: $b)
            }"
            .to_owned(),
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn variables_used_by_recursive_fragment() {
        let mut plan = create_plan_from_rule(Box::new(NoUnusedVariables::new()));
        let errors = test_operation_without_schema(
            "query Foo($a: String) {
              ...FragA
            }
            fragment FragA on Type {
              field(a: $a) {
                ...FragA
              }
            }"
            .to_owned(),
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn variable_not_used() {
        let mut plan = create_plan_from_rule(Box::new(NoUnusedVariables::new()));
        let errors = test_operation_without_schema(
            "query Foo($a: String, $b: String) {
              field(a: $a)
            }"
            .to_owned(),
            &mut plan,
        );

        let messages = get_messages(&errors);
        assert_eq!(
            messages,
            vec!["Variable \"$b\" is never used in operation \"Foo\"."]
        );
    }

    #[test]
    fn variable_not_used_by_un_named_query() {
        let mut plan = create_plan_from_rule(Box::new(NoUnusedVariables::new()));
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
    fn multiple_variables_not_used() {
        let mut plan = create_plan_from_rule(Box::new(NoUnusedVariables::new()));
        let errors = test_operation_without_schema(
            "query Foo($a: String, $b: String, $c: String) {
              field(b: $b)
            }"
            .to_owned(),
            &mut plan,
        );

        let messages = get_messages(&errors);
        assert_eq!(messages.len(), 2);
        assert!(messages.contains(&&"Variable \"$a\" is never used in operation \"Foo\".".to_owned()));
        assert!(messages.contains(&&"Variable \"$c\" is never used in operation \"Foo\".".to_owned()));
    }

    #[test]
    fn variable_used_in_fragment_not_used_by_named_operation() {
        let mut plan = create_plan_from_rule(Box::new(NoUnusedVariables::new()));
        let errors = test_operation_without_schema(
            "query Foo($a: String, $b: String) {
              ...FragA
            }
            fragment FragA on Type {
              field(a: $a)
            }"
            .to_owned(),
            &mut plan,
        );

        let messages = get_messages(&errors);
        assert_eq!(
            messages,
            vec!["Variable \"$b\" is never used in operation \"Foo\"."]
        );
    }
}
