use std::collections::{HashMap, HashSet};

use super::ValidationRule;
use crate::ast::ext::AstNodeWithName;
use crate::ast::{visit_document, OperationVisitor, OperationVisitorContext};
use crate::static_graphql::query::{
    Directive, Field, FragmentDefinition, InlineFragment, OperationDefinition, Selection,
    SelectionSet, Value,
};
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// No undefined variables
///
/// A GraphQL operation is only valid if all variables encountered, both
/// directly and via fragment spreads, are defined by that operation.
///
/// See https://spec.graphql.org/draft/#sec-All-Variable-Uses-Defined
pub struct NoUndefinedVariables {
    defined_variables: HashSet<String>,
}

impl Default for NoUndefinedVariables {
    fn default() -> Self {
        Self::new()
    }
}

impl NoUndefinedVariables {
    pub fn new() -> Self {
        Self {
            defined_variables: HashSet::new(),
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

impl<'a> OperationVisitor<'a, ValidationErrorContext> for NoUndefinedVariables {
    fn enter_operation_definition(
        &mut self,
        _ctx: &mut OperationVisitorContext<'a>,
        _user_context: &mut ValidationErrorContext,
        _operation: &'a OperationDefinition,
    ) {
        self.defined_variables.clear();
    }

    fn enter_variable_definition(
        &mut self,
        _ctx: &mut OperationVisitorContext<'a>,
        _user_context: &mut ValidationErrorContext,
        variable_definition: &'a crate::static_graphql::query::VariableDefinition,
    ) {
        self.defined_variables
            .insert(variable_definition.name.clone());
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

        let mut used_variables: Vec<&String> = used_variables.iter().collect();
        used_variables.sort();

        for variable_name in used_variables {
            if !self.defined_variables.contains(variable_name) {
                user_context.report_error(ValidationError {
                    error_code: self.error_code(),
                    message: match operation.node_name() {
                        Some(name) => format!(
                            "Variable \"${}\" is not defined by operation \"{}\".",
                            variable_name, name
                        ),
                        None => format!("Variable \"${}\" is not defined.", variable_name),
                    },
                    locations: vec![],
                });
            }
        }
    }
}

impl ValidationRule for NoUndefinedVariables {
    fn error_code<'a>(&self) -> &'a str {
        "NoUndefinedVariables"
    }

    fn validate(&self, ctx: &mut OperationVisitorContext, error_collector: &mut ValidationErrorContext) {
        visit_document(&mut NoUndefinedVariables::new(), ctx.operation, ctx, error_collector)
    }
}

#[cfg(test)]
mod tests {
    use crate::validation::test_utils::*;

    use super::NoUndefinedVariables;

    #[test]
    fn all_variables_defined() {
        let mut plan = create_plan_from_rule(Box::new(NoUndefinedVariables::new()));
        let errors = test_operation_without_schema(
            "query Foo($a: String, $b: String, $c: String) {
              field(a: $a, b: $b, c: $c)
            }"
            .to_owned(),
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn all_variables_deeply_defined() {
        let mut plan = create_plan_from_rule(Box::new(NoUndefinedVariables::new()));
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
    fn all_variables_in_fragments_deeply_defined() {
        let mut plan = create_plan_from_rule(Box::new(NoUndefinedVariables::new()));
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
    fn variable_within_recursive_fragment_defined() {
        let mut plan = create_plan_from_rule(Box::new(NoUndefinedVariables::new()));
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
    fn variable_not_defined() {
        let mut plan = create_plan_from_rule(Box::new(NoUndefinedVariables::new()));
        let errors = test_operation_without_schema(
            "query Foo($a: String, $b: String, $c: String) {
              field(a: $a, b: $b, c: $c, d: $d)
            }"
            .to_owned(),
            &mut plan,
        );

        let messages = get_messages(&errors);
        assert_eq!(
            messages,
            vec!["Variable \"$d\" is not defined by operation \"Foo\"."]
        );
    }

    #[test]
    fn variable_not_defined_by_un_named_query() {
        let mut plan = create_plan_from_rule(Box::new(NoUndefinedVariables::new()));
        let errors = test_operation_without_schema(
            "{
              field(a: $a)
            }"
            .to_owned(),
            &mut plan,
        );

        let messages = get_messages(&errors);
        assert_eq!(messages, vec!["Variable \"$a\" is not defined."]);
    }

    #[test]
    fn multiple_variables_not_defined() {
        let mut plan = create_plan_from_rule(Box::new(NoUndefinedVariables::new()));
        let errors = test_operation_without_schema(
            "query Foo($b: String) {
              field(a: $a, b: $b, c: $c)
            }"
            .to_owned(),
            &mut plan,
        );

        let messages = get_messages(&errors);
        assert_eq!(messages.len(), 2);
        assert!(messages.contains(&&"Variable \"$a\" is not defined by operation \"Foo\".".to_owned()));
        assert!(messages.contains(&&"Variable \"$c\" is not defined by operation \"Foo\".".to_owned()));
    }

    #[test]
    fn variable_in_fragment_not_defined_by_operation() {
        let mut plan = create_plan_from_rule(Box::new(NoUndefinedVariables::new()));
        let errors = test_operation_without_schema(
            "query Foo($a: String, $b: String) {
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

        let messages = get_messages(&errors);
        assert_eq!(
            messages,
            vec!["Variable \"$c\" is not defined by operation \"Foo\"."]
        );
    }
}
