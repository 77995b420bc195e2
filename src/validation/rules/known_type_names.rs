use std::collections::HashSet;

use super::ValidationRule;
use crate::ast::ext::AstTypeRef;
use crate::ast::type_info_query_visitor::{TypeInfo, TypeInfoQueryVisitor, TypeInfoRegistry};
use crate::ast::OperationVisitorContext;
use crate::static_graphql::query::{
    FragmentDefinition, InlineFragment, OperationDefinition, TypeCondition, VariableDefinition,
};
use crate::validation::suggestions::{quoted_or_list_suffix, suggest_candidates};
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// Known type names
///
/// A GraphQL document is only valid if referenced types (specifically
/// variable definitions and fragment conditions) are defined by the type schema.
///
/// Kept on the older `TypeInfoQueryVisitor` traversal rather than the
/// `OperationVisitor` framework the rest of the rules share - it only ever
/// needs a flat set of known type names, so a lighter-weight pass is enough.
///
/// See https://spec.graphql.org/draft/#sec-Fragment-Spread-Type-Existence
pub struct KnownTypeNames;

impl KnownTypeNames {
    pub fn new() -> Self {
        KnownTypeNames
    }
}

struct KnownTypeNamesVisitor {
    known_type_names: HashSet<String>,
}

impl KnownTypeNamesVisitor {
    fn check_type_name(
        &self,
        name: &str,
        position: graphql_parser::Pos,
        visitor_context: &mut ValidationErrorContext,
    ) {
        if name.starts_with("__") || self.known_type_names.contains(name) {
            return;
        }

        let suggestions = quoted_or_list_suffix(&suggest_candidates(name, &self.known_type_names));

        visitor_context.report_error(ValidationError {
            error_code: KnownTypeNames.error_code(),
            message: format!("Unknown type \"{}\".{}", name, suggestions),
            locations: vec![position],
        });
    }
}

impl TypeInfoQueryVisitor<ValidationErrorContext> for KnownTypeNamesVisitor {
    fn enter_fragment_definition(
        &self,
        node: &FragmentDefinition,
        visitor_context: &mut ValidationErrorContext,
    ) {
        let TypeCondition::On(fragment_type_name) = &node.type_condition;

        self.check_type_name(fragment_type_name, node.position, visitor_context);
    }

    fn enter_inline_fragment(
        &self,
        node: &InlineFragment,
        visitor_context: &mut ValidationErrorContext,
        _type_info: &mut TypeInfo,
    ) {
        if let Some(TypeCondition::On(fragment_type_name)) = &node.type_condition {
            self.check_type_name(fragment_type_name, node.position, visitor_context);
        }
    }

    fn enter_variable_definition(
        &self,
        node: &VariableDefinition,
        _parent_operation: &OperationDefinition,
        visitor_context: &mut ValidationErrorContext,
        _type_info: &mut TypeInfo,
    ) {
        let base_type = node.var_type.named_type();

        self.check_type_name(&base_type, node.position, visitor_context);
    }
}

impl ValidationRule for KnownTypeNames {
    fn error_code<'a>(&self) -> &'a str {
        "KnownTypeNames"
    }

    fn validate(
        &self,
        ctx: &mut OperationVisitorContext,
        error_collector: &mut ValidationErrorContext,
    ) {
        let type_info_registry = TypeInfoRegistry::new(ctx.schema);
        let mut visitor = KnownTypeNamesVisitor {
            known_type_names: type_info_registry.type_by_name.keys().cloned().collect(),
        };

        visitor.visit_document(ctx.operation, error_collector, &type_info_registry);
    }
}

#[test]
fn known_type_names_are_valid() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(KnownTypeNames {}));
    let errors = test_operation_with_schema(
        "
        query Foo(
          $var: String
          $required: [Int!]!
          $introspectionType: __EnumValue
        ) {
          user(id: 4) {
            pets { ... on Pet { name }, ...PetFields, ... { name } }
          }
        }
        fragment PetFields on Pet {
          name
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn unknown_type_names_are_invalid() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(KnownTypeNames {}));
    let errors = test_operation_with_schema(
        "query Foo($var: [JumbledUpLetters!]!) {
          user(id: 4) {
            name
            pets { ... on Badger { name }, ...PetFields }
          }
        }

        fragment PetFields on Peat {
          name
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 3);
    assert_eq!(
        messages,
        vec![
            "Unknown type \"JumbledUpLetters\".",
            "Unknown type \"Badger\".",
            "Unknown type \"Peat\"."
        ]
    );
}
