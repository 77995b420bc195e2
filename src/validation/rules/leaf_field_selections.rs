use super::ValidationRule;
use crate::ast::ext::{AstTypeRef, TypeDefinitionExtension};
use crate::ast::{visit_document, OperationVisitor, OperationVisitorContext};
use crate::static_graphql::query::Field;
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// Built-in scalars never appear as `TypeDefinition`s in a schema document
/// (they're implicit), so `current_type()` can't see them. Their names are
/// fixed by the spec, so we recognize them by name instead.
const BUILTIN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

/// Leaf field selections
///
/// Field selections on scalars or enums are never allowed, because they are
/// the leaf nodes of any GraphQL operation. Conversely, selections on
/// composite types (object, interface, union) are required to have one.
///
/// See https://spec.graphql.org/draft/#sec-Leaf-Field-Selections
pub struct LeafFieldSelections;

impl<'a> OperationVisitor<'a, ValidationErrorContext> for LeafFieldSelections {
    fn enter_field(
        &mut self,
        visitor_context: &mut OperationVisitorContext,
        user_context: &mut ValidationErrorContext,
        field: &Field,
    ) {
        let selection_count = field.selection_set.items.len();
        let type_name = visitor_context
            .current_type_literal()
            .map(|t| t.named_type());

        let is_leaf = match visitor_context.current_type() {
            Some(field_type) => field_type.is_leaf_type(),
            None => match &type_name {
                Some(name) => BUILTIN_SCALARS.contains(&name.as_str()),
                None => return,
            },
        };

        if is_leaf && selection_count > 0 {
            user_context.report_error(ValidationError {
                error_code: self.error_code(),
                locations: vec![field.position],
                message: format!(
                    "Field \"{}\" must not have a selection since type \"{}\" has no subfields.",
                    field.name,
                    type_name.unwrap_or_default()
                ),
            });
        } else if !is_leaf && selection_count == 0 {
            user_context.report_error(ValidationError {
                error_code: self.error_code(),
                locations: vec![field.position],
                message: format!(
                    "Field \"{}\" of type \"{}\" must have a selection of subfields. Did you mean \"{} {{ ... }}\"?",
                    field.name,
                    type_name.unwrap_or_default(),
                    field.name
                ),
            });
        }
    }
}

impl ValidationRule for LeafFieldSelections {
    fn error_code<'a>(&self) -> &'a str {
        "LeafFieldSelections"
    }

    fn validate(&self, ctx: &mut OperationVisitorContext, error_collector: &mut ValidationErrorContext) {
        visit_document(&mut LeafFieldSelections {}, ctx.operation, ctx, error_collector)
    }
}

#[cfg(test)]
mod tests {
    use crate::validation::test_utils::*;

    use super::LeafFieldSelections;

    #[test]
    fn valid_leaf_and_composite_selections() {
        let mut plan = create_plan_from_rule(Box::new(LeafFieldSelections {}));
        let errors = test_operation_with_schema(
            "query Foo {
              dog {
                name
                barkVolume
              }
            }",
            TEST_SCHEMA,
            &mut plan,
        );
        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn scalar_selection_not_allowed() {
        let mut plan = create_plan_from_rule(Box::new(LeafFieldSelections {}));
        let errors = test_operation_with_schema(
            "query Foo {
              dog {
                barkVolume {
                  sinceWhen
                }
              }
            }",
            TEST_SCHEMA,
            &mut plan,
        );
        let messages = get_messages(&errors);
        assert_eq!(
            messages,
            vec!["Field \"barkVolume\" must not have a selection since type \"Int\" has no subfields."]
        );
    }

    #[test]
    fn object_requires_selection() {
        let mut plan = create_plan_from_rule(Box::new(LeafFieldSelections {}));
        let errors = test_operation_with_schema(
            "query Foo {
              dog
            }",
            TEST_SCHEMA,
            &mut plan,
        );
        let messages = get_messages(&errors);
        assert_eq!(
            messages,
            vec!["Field \"dog\" of type \"Dog\" must have a selection of subfields. Did you mean \"dog { ... }\"?"]
        );
    }
}
