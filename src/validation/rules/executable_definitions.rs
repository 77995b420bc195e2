use super::ValidationRule;
use crate::ast::{visit_document, OperationVisitor, OperationVisitorContext};
use crate::validation::utils::ValidationErrorContext;

/// A GraphQL document is only valid for execution if all definitions are
/// either operation or fragment definitions.
///
/// See https://spec.graphql.org/draft/#sec-Executable-Definitions
///
/// `graphql_parser::query::Document` only ever parses `Definition::Operation`
/// and `Definition::Fragment` variants, so a parsed operation document can
/// never actually contain a non-executable definition. This rule exists to
/// document that invariant and to mirror the spec's rule list; it can never
/// report an error against this parser.
pub struct ExecutableDefinitions;

impl<'a> OperationVisitor<'a, ValidationErrorContext> for ExecutableDefinitions {}

impl ValidationRule for ExecutableDefinitions {
    fn error_code<'a>(&self) -> &'a str {
        "ExecutableDefinitions"
    }

    fn validate(&self, ctx: &mut OperationVisitorContext, error_collector: &mut ValidationErrorContext) {
        visit_document(&mut ExecutableDefinitions {}, ctx.operation, ctx, error_collector)
    }
}

#[test]
fn only_operation() {
    use crate::validation::test_utils::*;
    let mut plan = create_plan_from_rule(Box::new(ExecutableDefinitions {}));
    let errors = test_operation_with_schema(
        "query Foo {
      dog {
        name
      }
    }",
        TEST_SCHEMA,
        &mut plan,
    );
    assert_eq!(get_messages(&errors).len(), 0);
}

#[test]
fn with_operation_and_fragment() {
    use crate::validation::test_utils::*;
    let mut plan = create_plan_from_rule(Box::new(ExecutableDefinitions {}));
    let errors = test_operation_with_schema(
        "query Foo {
      dog {
        name
        ...Frag
      }
    }

    fragment Frag on Dog {
      name
    }
    ",
        TEST_SCHEMA,
        &mut plan,
    );
    assert_eq!(get_messages(&errors).len(), 0);
}
