use super::ValidationRule;
use crate::ast::{
    FieldByNameExtension, OperationVisitor, OperationVisitorContext, TypeDefinitionExtension,
    visit_document,
};
use crate::static_graphql::query::{Directive, Field};
use crate::static_graphql::schema::{self, TypeDefinition};
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// No deprecated (opt-in)
///
/// Not part of the default rule set: reports every use of a deprecated
/// field, field argument, directive argument, input-object field, or enum
/// value, instead of silently accepting it the way the other rules do.
/// Callers that want these diagnostics add `NoDeprecatedCustom` to their own
/// rule plan explicitly.
///
/// See https://spec.graphql.org/draft/#sec--deprecated
pub struct NoDeprecatedCustom {
    input_object_type_stack: Vec<Option<TypeDefinition>>,
}

impl Default for NoDeprecatedCustom {
    fn default() -> Self {
        Self::new()
    }
}

impl NoDeprecatedCustom {
    pub fn new() -> Self {
        NoDeprecatedCustom {
            input_object_type_stack: vec![],
        }
    }
}

fn deprecation_reason(directives: &[schema::Directive]) -> Option<String> {
    directives.iter().find(|d| d.name == "deprecated").map(|d| {
        d.arguments
            .iter()
            .find(|(name, _)| name == "reason")
            .and_then(|(_, value)| match value {
                schema::Value::String(reason) => Some(reason.clone()),
                _ => None,
            })
            .unwrap_or_else(|| "No longer supported".to_string())
    })
}

impl<'a> OperationVisitor<'a, ValidationErrorContext> for NoDeprecatedCustom {
    fn enter_field(
        &mut self,
        visitor_context: &mut OperationVisitorContext,
        user_context: &mut ValidationErrorContext,
        field: &Field,
    ) {
        let parent_type = match visitor_context.current_parent_type() {
            Some(parent_type) => parent_type,
            None => return,
        };
        let field_def = match parent_type.field_by_name(&field.name) {
            Some(field_def) => field_def,
            None => return,
        };

        if let Some(reason) = deprecation_reason(&field_def.directives) {
            user_context.report_error(ValidationError {
                error_code: self.error_code(),
                locations: vec![field.position],
                message: format!(
                    "The field {}.{} is deprecated. {}",
                    parent_type.name(),
                    field.name,
                    reason
                ),
            });
        }

        for (arg_name, _) in &field.arguments {
            if let Some(arg_def) = field_def.arguments.iter().find(|a| &a.name == arg_name) {
                if let Some(reason) = deprecation_reason(&arg_def.directives) {
                    user_context.report_error(ValidationError {
                        error_code: self.error_code(),
                        locations: vec![field.position],
                        message: format!(
                            "Field \"{}.{}\" argument \"{}\" is deprecated. {}",
                            parent_type.name(),
                            field.name,
                            arg_name,
                            reason
                        ),
                    });
                }
            }
        }
    }

    fn enter_directive(
        &mut self,
        visitor_context: &mut OperationVisitorContext,
        user_context: &mut ValidationErrorContext,
        directive: &Directive,
    ) {
        let directive_def = match visitor_context.directives.get(&directive.name) {
            Some(directive_def) => directive_def,
            None => return,
        };

        for (arg_name, _) in &directive.arguments {
            if let Some(arg_def) = directive_def.arguments.iter().find(|a| &a.name == arg_name) {
                if let Some(reason) = deprecation_reason(&arg_def.directives) {
                    user_context.report_error(ValidationError {
                        error_code: self.error_code(),
                        locations: vec![directive.position],
                        message: format!(
                            "Directive \"@{}\" argument \"{}\" is deprecated. {}",
                            directive.name, arg_name, reason
                        ),
                    });
                }
            }
        }
    }

    fn enter_object_value(
        &mut self,
        visitor_context: &mut OperationVisitorContext,
        _user_context: &mut ValidationErrorContext,
        _node: &std::collections::BTreeMap<String, crate::static_graphql::query::Value>,
    ) {
        self.input_object_type_stack
            .push(visitor_context.current_input_type().cloned());
    }

    fn leave_object_value(
        &mut self,
        _visitor_context: &mut OperationVisitorContext,
        _user_context: &mut ValidationErrorContext,
        _node: &std::collections::BTreeMap<String, crate::static_graphql::query::Value>,
    ) {
        self.input_object_type_stack.pop();
    }

    fn enter_object_field(
        &mut self,
        _visitor_context: &mut OperationVisitorContext,
        user_context: &mut ValidationErrorContext,
        node: &(String, crate::static_graphql::query::Value),
    ) {
        let (field_name, _) = node;
        let input_object_type = match self.input_object_type_stack.last() {
            Some(Some(TypeDefinition::InputObject(input_object))) => input_object,
            _ => return,
        };

        if let Some(field_def) = input_object_type
            .fields
            .iter()
            .find(|f| &f.name == field_name)
        {
            if let Some(reason) = deprecation_reason(&field_def.directives) {
                user_context.report_error(ValidationError {
                    error_code: self.error_code(),
                    locations: vec![],
                    message: format!(
                        "The input field {}.{} is deprecated. {}",
                        input_object_type.name, field_name, reason
                    ),
                });
            }
        }
    }

    fn enter_enum_value(
        &mut self,
        visitor_context: &mut OperationVisitorContext,
        user_context: &mut ValidationErrorContext,
        node: &str,
    ) {
        let enum_type = match visitor_context.current_input_type() {
            Some(TypeDefinition::Enum(enum_type)) => enum_type,
            _ => return,
        };

        if let Some(value_def) = enum_type.values.iter().find(|v| v.name == node) {
            if let Some(reason) = deprecation_reason(&value_def.directives) {
                user_context.report_error(ValidationError {
                    error_code: self.error_code(),
                    locations: vec![],
                    message: format!(
                        "The enum value \"{}.{}\" is deprecated. {}",
                        enum_type.name, node, reason
                    ),
                });
            }
        }
    }
}

impl ValidationRule for NoDeprecatedCustom {
    fn error_code<'a>(&self) -> &'a str {
        "NoDeprecatedCustom"
    }

    fn validate(&self, ctx: &mut OperationVisitorContext, error_collector: &mut ValidationErrorContext) {
        visit_document(&mut NoDeprecatedCustom::new(), ctx.operation, ctx, error_collector)
    }
}

#[cfg(test)]
mod tests {
    use crate::validation::test_utils::*;

    use super::NoDeprecatedCustom;

    static DEPRECATED_SCHEMA: &str = "
      enum Status {
        ACTIVE
        RETIRED @deprecated(reason: \"no longer a valid status\")
      }

      input Filter {
        name: String
        legacyId: ID @deprecated
      }

      type Query {
        user(id: ID, oldId: ID @deprecated(reason: \"use id instead\")): String
        nickname: String @deprecated(reason: \"field no longer supported\")
        status: Status
        search(filter: Filter): String
      }

      directive @example(flag: Boolean @deprecated) on FIELD
    ";

    #[test]
    fn allows_non_deprecated_uses() {
        let mut plan = create_plan_from_rule(Box::new(NoDeprecatedCustom::new()));
        let errors = test_operation_with_schema(
            "{ user(id: \"1\") status }",
            DEPRECATED_SCHEMA,
            &mut plan,
        );

        assert_eq!(get_messages(&errors).len(), 0);
    }

    #[test]
    fn reports_deprecated_field() {
        let mut plan = create_plan_from_rule(Box::new(NoDeprecatedCustom::new()));
        let errors = test_operation_with_schema("{ nickname }", DEPRECATED_SCHEMA, &mut plan);

        assert_eq!(
            get_messages(&errors),
            vec!["The field Query.nickname is deprecated. field no longer supported"]
        );
    }

    #[test]
    fn reports_deprecated_field_argument() {
        let mut plan = create_plan_from_rule(Box::new(NoDeprecatedCustom::new()));
        let errors = test_operation_with_schema(
            "{ user(oldId: \"1\") }",
            DEPRECATED_SCHEMA,
            &mut plan,
        );

        assert_eq!(
            get_messages(&errors),
            vec!["Field \"Query.user\" argument \"oldId\" is deprecated. use id instead"]
        );
    }

    #[test]
    fn reports_deprecated_directive_argument() {
        let mut plan = create_plan_from_rule(Box::new(NoDeprecatedCustom::new()));
        let errors = test_operation_with_schema(
            "{ status @example(flag: true) }",
            DEPRECATED_SCHEMA,
            &mut plan,
        );

        assert_eq!(
            get_messages(&errors),
            vec!["Directive \"@example\" argument \"flag\" is deprecated. No longer supported"]
        );
    }

    #[test]
    fn reports_deprecated_input_field() {
        let mut plan = create_plan_from_rule(Box::new(NoDeprecatedCustom::new()));
        let errors = test_operation_with_schema(
            "{ search(filter: { legacyId: \"1\" }) }",
            DEPRECATED_SCHEMA,
            &mut plan,
        );

        assert_eq!(
            get_messages(&errors),
            vec!["The input field Filter.legacyId is deprecated. No longer supported"]
        );
    }

    #[test]
    fn reports_deprecated_enum_value() {
        let mut plan = create_plan_from_rule(Box::new(NoDeprecatedCustom::new()));
        let errors = test_operation_with_schema(
            "query ($s: Status = RETIRED) { status }",
            DEPRECATED_SCHEMA,
            &mut plan,
        );

        assert_eq!(
            get_messages(&errors),
            vec!["The enum value \"Status.RETIRED\" is deprecated. no longer a valid status"]
        );
    }
}
