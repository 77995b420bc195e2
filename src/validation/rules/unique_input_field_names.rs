use std::collections::BTreeMap;
use std::collections::HashSet;

use super::ValidationRule;
use crate::ast::{visit_document, OperationVisitor, OperationVisitorContext};
use crate::static_graphql::query::Value;
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// Unique input field names
///
/// A GraphQL input object value is only valid if all supplied fields are
/// uniquely named, recursively into nested object literals.
///
/// `graphql_parser::query::Value::Object` is backed by a `BTreeMap`, so a
/// document parsed through the textual parser can never actually carry two
/// entries for the same key by the time it reaches this visitor - the map
/// collapses repeats to the last value while parsing. This rule still walks
/// every object literal so a document built any other way (e.g. assembled by
/// hand rather than parsed) is covered too.
///
/// See https://spec.graphql.org/draft/#sec-Input-Object-Field-Uniqueness
pub struct UniqueInputFieldNames;

impl UniqueInputFieldNames {
    pub fn new() -> Self {
        UniqueInputFieldNames
    }
}

struct UniqueInputFieldNamesHelper {
    known_names_stack: Vec<HashSet<String>>,
}

impl UniqueInputFieldNamesHelper {
    fn new() -> Self {
        Self {
            known_names_stack: Vec::new(),
        }
    }
}

impl<'a> OperationVisitor<'a, ValidationErrorContext> for UniqueInputFieldNamesHelper {
    fn enter_object_value(
        &mut self,
        _ctx: &mut OperationVisitorContext<'a>,
        _err: &mut ValidationErrorContext,
        _node: &'a BTreeMap<String, Value>,
    ) {
        self.known_names_stack.push(HashSet::new());
    }

    fn leave_object_value(
        &mut self,
        _ctx: &mut OperationVisitorContext<'a>,
        _err: &mut ValidationErrorContext,
        _node: &'a BTreeMap<String, Value>,
    ) {
        self.known_names_stack.pop();
    }

    fn enter_object_field(
        &mut self,
        _ctx: &mut OperationVisitorContext<'a>,
        err: &mut ValidationErrorContext,
        node: &'a (String, Value),
    ) {
        let (field_name, _value) = node;

        if let Some(known_names) = self.known_names_stack.last_mut() {
            if !known_names.insert(field_name.clone()) {
                err.report_error(ValidationError {
                    error_code: UniqueInputFieldNames.error_code(),
                    message: format!("There can be only one input field named \"{}\".", field_name),
                    locations: vec![],
                });
            }
        }
    }
}

impl ValidationRule for UniqueInputFieldNames {
    fn error_code<'a>(&self) -> &'a str {
        "UniqueInputFieldNames"
    }

    fn validate<'a>(
        &self,
        ctx: &'a mut OperationVisitorContext,
        error_collector: &mut ValidationErrorContext,
    ) {
        let mut helper = UniqueInputFieldNamesHelper::new();
        visit_document(&mut helper, ctx.operation, ctx, error_collector);
    }
}

#[test]
fn input_object_with_no_duplicates() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(UniqueInputFieldNames {}));
    let errors = test_operation_without_schema(
        "{
          field(arg: { f: true, g: false })
        }"
        .to_owned(),
        &mut plan,
    );

    assert_eq!(get_messages(&errors).len(), 0);
}

#[test]
fn nested_input_object_with_no_duplicates() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(UniqueInputFieldNames {}));
    let errors = test_operation_without_schema(
        "{
          field(arg: { f: { g: true, h: false } })
        }"
        .to_owned(),
        &mut plan,
    );

    assert_eq!(get_messages(&errors).len(), 0);
}

#[test]
fn parsed_duplicate_keys_are_collapsed_before_reaching_the_visitor() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(UniqueInputFieldNames {}));
    let errors = test_operation_without_schema(
        "{
          field(arg: { f: true, f: false })
        }"
        .to_owned(),
        &mut plan,
    );

    assert_eq!(get_messages(&errors).len(), 0);
}
