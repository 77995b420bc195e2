use std::collections::HashMap;

use crate::static_graphql::query::{Type, Value};
use crate::static_graphql::schema::{self, EnumType, InputObjectType, TypeDefinition};
use crate::validation::suggestions::{quoted_or_list_suffix, suggest_candidates};
use crate::validation::utils::ValidationError;
use crate::{
    ast::{
        visit_document, FieldByNameExtension, OperationDefinitionExtension, OperationVisitor,
        OperationVisitorContext, SchemaDocumentExtension,
    },
    static_graphql::{query, schema::InputValue},
    validation::utils::ValidationErrorContext,
};

use super::ValidationRule;

/// A oneOf input object must specify exactly one non-null key per
/// https://github.com/graphql/graphql-spec/pull/825. `graphql_parser` has no
/// dedicated `@oneOf` support, so it's detected the same way any other
/// bare directive application is: by name, on the input object's own
/// `directives` list.
fn is_one_of_input_object(input_type: &InputObjectType) -> bool {
    input_type.directives.iter().any(|d| d.name == "oneOf")
}

/// Checks whether `value` is a legal literal for `expected_type`, returning one
/// diagnostic message per violation found (a single object literal can fail in
/// more than one field at once). Variables are never checked here: their
/// runtime value is validated against the type at execution time, not here.
fn validate_value(
    schema: &schema::Document,
    variable_types: &HashMap<String, Type>,
    expected_type: &Type,
    value: &Value,
) -> Vec<String> {
    if let Value::Variable(_) = value {
        return vec![];
    }

    match expected_type {
        Type::NonNullType(inner) => {
            if let Value::Null = value {
                vec![format!(
                    "Expected value of type \"{}\", found null.",
                    expected_type
                )]
            } else {
                validate_value(schema, variable_types, inner, value)
            }
        }
        Type::ListType(inner) => match value {
            Value::Null => vec![],
            Value::List(items) => items
                .iter()
                .flat_map(|item| validate_value(schema, variable_types, inner, item))
                .collect(),
            single_value => validate_value(schema, variable_types, inner, single_value),
        },
        Type::NamedType(name) => {
            if let Value::Null = value {
                return vec![];
            }

            validate_named_type(schema, variable_types, name, value)
        }
    }
}

fn validate_named_type(
    schema: &schema::Document,
    variable_types: &HashMap<String, Type>,
    name: &str,
    value: &Value,
) -> Vec<String> {
    match name {
        "Int" => validate_int(value),
        "Float" => validate_float(value),
        "String" => validate_string(value),
        "Boolean" => validate_boolean(value),
        "ID" => validate_id(value),
        _ => match schema.type_by_name(&name.to_string()) {
            Some(TypeDefinition::Enum(enum_type)) => validate_enum(&enum_type, value),
            Some(TypeDefinition::InputObject(input_type)) => {
                validate_input_object(schema, variable_types, &input_type, value)
            }
            // Custom scalars have no literal-coercion rules of their own: any
            // literal, however deeply nested, is passed through as-is.
            Some(TypeDefinition::Scalar(_)) => vec![],
            _ => vec![],
        },
    }
}

fn validate_int(value: &Value) -> Vec<String> {
    match value {
        Value::Int(n) => match n.as_i64() {
            Some(i) if i >= i32::MIN as i64 && i <= i32::MAX as i64 => vec![],
            _ => vec![format!(
                "Int cannot represent non 32-bit signed integer value: {}",
                value
            )],
        },
        _ => vec![format!("Int cannot represent non-integer value: {}", value)],
    }
}

fn validate_float(value: &Value) -> Vec<String> {
    match value {
        Value::Float(_) | Value::Int(_) => vec![],
        _ => vec![format!(
            "Float cannot represent non numeric value: {}",
            value
        )],
    }
}

fn validate_string(value: &Value) -> Vec<String> {
    match value {
        Value::String(_) => vec![],
        _ => vec![format!(
            "String cannot represent a non string value: {}",
            value
        )],
    }
}

fn validate_boolean(value: &Value) -> Vec<String> {
    match value {
        Value::Boolean(_) => vec![],
        _ => vec![format!(
            "Boolean cannot represent a non boolean value: {}",
            value
        )],
    }
}

fn validate_id(value: &Value) -> Vec<String> {
    match value {
        Value::String(_) | Value::Int(_) => vec![],
        _ => vec![format!(
            "ID cannot represent a non-string and non-integer value: {}",
            value
        )],
    }
}

fn validate_enum(enum_type: &EnumType, value: &Value) -> Vec<String> {
    match value {
        Value::Enum(enum_value) => {
            if enum_type.values.iter().any(|v| v.name.eq(enum_value)) {
                vec![]
            } else {
                let suggestions =
                    suggest_candidates(enum_value, enum_type.values.iter().map(|v| &v.name));
                vec![format!(
                    "Value \"{}\" does not exist in \"{}\" enum.{}",
                    enum_value,
                    enum_type.name,
                    quoted_or_list_suffix(&suggestions)
                )]
            }
        }
        Value::String(literal) => {
            let suggestions =
                suggest_candidates(literal, enum_type.values.iter().map(|v| &v.name));
            let base = format!(
                "Enum \"{}\" cannot represent non-enum value: {}",
                enum_type.name, value
            );
            if suggestions.is_empty() {
                vec![base]
            } else {
                vec![format!("{}.{}", base, quoted_or_list_suffix(&suggestions))]
            }
        }
        _ => vec![format!(
            "Enum \"{}\" cannot represent non-enum value: {}",
            enum_type.name, value
        )],
    }
}

fn validate_input_object(
    schema: &schema::Document,
    variable_types: &HashMap<String, Type>,
    input_type: &InputObjectType,
    value: &Value,
) -> Vec<String> {
    match value {
        Value::Object(fields) => {
            let mut messages = Vec::new();

            if is_one_of_input_object(input_type) {
                messages.extend(validate_one_of_input_object(
                    variable_types,
                    input_type,
                    fields,
                ));
            }

            for field_def in &input_type.fields {
                match fields.get(&field_def.name) {
                    None => {
                        if matches!(field_def.value_type, Type::NonNullType(_))
                            && field_def.default_value.is_none()
                        {
                            messages.push(format!(
                                "Field \"{}.{}\" of required type \"{}\" was not provided.",
                                input_type.name, field_def.name, field_def.value_type
                            ));
                        }
                    }
                    Some(field_value) => {
                        messages.extend(validate_value(
                            schema,
                            variable_types,
                            &field_def.value_type,
                            field_value,
                        ));
                    }
                }
            }

            for key in fields.keys() {
                if !input_type.fields.iter().any(|f| f.name.eq(key)) {
                    messages.push(format!(
                        "Field \"{}\" is not defined by type \"{}\".",
                        key, input_type.name
                    ));
                }
            }

            messages
        }
        _ => vec![format!(
            "Expected value of type \"{}\", found {}.",
            input_type.name, value
        )],
    }
}

/// A oneOf object literal must supply exactly one field, and that field must
/// not be null — neither as a literal nor (when fed through a nullable
/// variable) at runtime.
fn validate_one_of_input_object(
    variable_types: &HashMap<String, Type>,
    input_type: &InputObjectType,
    fields: &std::collections::BTreeMap<String, Value>,
) -> Vec<String> {
    if fields.len() != 1 {
        return vec![format!(
            "OneOf Input Object \"{}\" must specify exactly one key.",
            input_type.name
        )];
    }

    let (field_name, field_value) = fields.iter().next().unwrap();

    match field_value {
        Value::Null => vec![format!(
            "Field \"{}.{}\" must be non-null.",
            input_type.name, field_name
        )],
        Value::Variable(var_name) => match variable_types.get(var_name) {
            Some(Type::NonNullType(_)) => vec![],
            _ => vec![format!(
                "Variable \"{}\" must be non-nullable to be used for OneOf Input Object \"{}\".",
                var_name, input_type.name
            )],
        },
        _ => vec![],
    }
}

pub struct ValuesOfCorrectType {
    current_args: Option<Vec<InputValue>>,
    variable_types: HashMap<String, Type>,
}

impl ValuesOfCorrectType {
    pub fn new() -> Self {
        Self {
            current_args: None,
            variable_types: HashMap::new(),
        }
    }
}

impl<'a> OperationVisitor<'a, ValidationErrorContext> for ValuesOfCorrectType {
    fn enter_operation_definition(
        &mut self,
        _: &mut OperationVisitorContext<'a>,
        _: &mut ValidationErrorContext,
        node: &'a query::OperationDefinition,
    ) {
        self.variable_types = node
            .variable_definitions()
            .iter()
            .map(|var_def| (var_def.name.clone(), var_def.var_type.clone()))
            .collect();
    }

    fn enter_directive(
        &mut self,
        visitor_context: &mut OperationVisitorContext<'a>,
        _: &mut ValidationErrorContext,
        directive: &query::Directive,
    ) {
        self.current_args = visitor_context
            .directives
            .get(&directive.name)
            .map(|directive_definition| directive_definition.arguments.clone());
    }

    fn leave_directive(
        &mut self,
        _: &mut OperationVisitorContext<'a>,
        _: &mut ValidationErrorContext,
        _: &query::Directive,
    ) {
        self.current_args = None;
    }

    fn enter_field(
        &mut self,
        visitor_context: &mut OperationVisitorContext<'a>,
        _: &mut ValidationErrorContext,
        field: &query::Field,
    ) {
        self.current_args = visitor_context
            .current_parent_type()
            .and_then(|parent_type| parent_type.field_by_name(&field.name))
            .map(|field_def| field_def.arguments.clone());
    }

    fn leave_field(
        &mut self,
        _: &mut OperationVisitorContext<'a>,
        _: &mut ValidationErrorContext,
        _: &query::Field,
    ) {
        self.current_args = None;
    }

    fn enter_argument(
        &mut self,
        visitor_context: &mut OperationVisitorContext<'a>,
        user_context: &mut ValidationErrorContext,
        (arg_name, arg_value): &(String, query::Value),
    ) {
        if let Some(argument) = self
            .current_args
            .as_ref()
            .and_then(|args| args.iter().find(|a| a.name.eq(arg_name)))
        {
            for message in validate_value(
                visitor_context.schema,
                &self.variable_types,
                &argument.value_type,
                arg_value,
            ) {
                user_context.report_error(ValidationError {
                    error_code: self.error_code(),
                    message,
                    locations: vec![],
                });
            }
        }
    }

    fn enter_variable_definition(
        &mut self,
        visitor_context: &mut OperationVisitorContext<'a>,
        user_context: &mut ValidationErrorContext,
        variable_definition: &query::VariableDefinition,
    ) {
        if let Some(default_value) = &variable_definition.default_value {
            for message in validate_value(
                visitor_context.schema,
                &self.variable_types,
                &variable_definition.var_type,
                default_value,
            ) {
                user_context.report_error(ValidationError {
                    error_code: self.error_code(),
                    message,
                    locations: vec![],
                });
            }
        }
    }
}

impl ValidationRule for ValuesOfCorrectType {
    fn error_code<'a>(&self) -> &'a str {
        "ValuesOfCorrectType"
    }

    fn validate<'a>(
        &self,
        ctx: &'a mut OperationVisitorContext,
        error_collector: &mut ValidationErrorContext,
    ) {
        visit_document(
            &mut ValuesOfCorrectType::new(),
            &ctx.operation,
            ctx,
            error_collector,
        );
    }
}

#[test]
fn valid_int_value() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            intArgField(intArg: 2)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn valid_negative_int_value() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            intArgField(intArg: -2)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn valid_boolean_value() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            booleanArgField(booleanArg: true)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn valid_string_value() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            stringArgField(stringArg: \"foo\")
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn valid_float_value() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            floatArgField(floatArg: 1.1)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn valid_negative_float_value() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            floatArgField(floatArg: -1.1)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn valid_int_into_float_value() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            floatArgField(floatArg: 1)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn valid_int_into_id_value() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            idArgField(idArg: 1)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn valid_string_into_id_value() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            idArgField(idArg: \"someIdString\")
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn valid_enum_value() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          dog {
            doesKnowCommand(dogCommand: SIT)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn enum_undefined_value() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            enumArgField(enumArg: UNKNOWN)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn enum_null_value() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            enumArgField(enumArg: NO_FUR)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn valid_null_into_nullable() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            intArgField(intArg: null)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);

    let errors = test_operation_with_schema(
        "
        {
          dog(a: null, b: null, c:{ requiredField: true, intField: null }) {
            name
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn invalid_int_into_string() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            stringArgField(stringArg: 1)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["String cannot represent a non string value: 1"]
    );
}

#[test]
fn invalid_float_into_string() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            stringArgField(stringArg: 1.0)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["String cannot represent a non string value: 1.0"]
    );
}

#[test]
fn invalid_bool_into_string() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            stringArgField(stringArg: true)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["String cannot represent a non string value: true"]
    );
}

#[test]
fn unquoted_string_to_string() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            stringArgField(stringArg: BAR)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["String cannot represent a non string value: BAR"]
    );
}

#[test]
fn invalid_string_into_int() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            intArgField(intArg: \"3\")
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Int cannot represent non-integer value: \"3\""]
    );
}

#[test]
fn bigint_into_int() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            intArgField(intArg: 9999999999)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Int cannot represent non 32-bit signed integer value: 9999999999"]
    );
}

#[test]
fn unquoted_string_into_int() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            intArgField(intArg: FOO)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Int cannot represent non-integer value: FOO"]
    );
}

#[test]
fn simple_float_into_int() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            intArgField(intArg: 3.0)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Int cannot represent non-integer value: 3.0"]
    );
}

#[test]
fn float_into_int() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            intArgField(intArg: 3.333)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Int cannot represent non-integer value: 3.333"]
    );
}

#[test]
fn string_into_float() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            floatArgField(floatArg: \"3.333\")
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Float cannot represent non numeric value: \"3.333\""]
    );
}

#[test]
fn boolean_into_float() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            floatArgField(floatArg: true)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Float cannot represent non numeric value: true"]
    );
}

#[test]
fn unquoted_into_float() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            floatArgField(floatArg: FOO)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Float cannot represent non numeric value: FOO"]
    );
}

#[test]
fn int_into_boolean() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            booleanArgField(booleanArg: 2)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Boolean cannot represent a non boolean value: 2"]
    );
}

#[test]
fn float_into_boolean() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            booleanArgField(booleanArg: 2.0)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Boolean cannot represent a non boolean value: 2.0"]
    );
}

#[test]
fn string_into_boolean() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            booleanArgField(booleanArg: \"true\")
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Boolean cannot represent a non boolean value: \"true\""]
    );
}

#[test]
fn unquoted_into_boolean() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            booleanArgField(booleanArg: TRUE)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Boolean cannot represent a non boolean value: TRUE"]
    );
}

#[test]
fn float_into_id() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            idArgField(idArg: 1.0)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["ID cannot represent a non-string and non-integer value: 1.0"]
    );
}

#[test]
fn bool_into_id() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            idArgField(idArg: true)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["ID cannot represent a non-string and non-integer value: true"]
    );
}

#[test]
fn unquoted_into_id() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            idArgField(idArg: SOMETHING)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["ID cannot represent a non-string and non-integer value: SOMETHING"]
    );
}

#[test]
fn int_into_enum() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          dog {
            doesKnowCommand(dogCommand: 2)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Enum \"DogCommand\" cannot represent non-enum value: 2"]
    );
}

#[test]
fn float_into_enum() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          dog {
            doesKnowCommand(dogCommand: 1.0)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Enum \"DogCommand\" cannot represent non-enum value: 1.0"]
    );
}

#[test]
fn string_into_enum() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          dog {
            doesKnowCommand(dogCommand: \"SIT\")
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Enum \"DogCommand\" cannot represent non-enum value: \"SIT\""]
    );
}

#[test]
fn boolean_into_enum() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          dog {
            doesKnowCommand(dogCommand: true)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Enum \"DogCommand\" cannot represent non-enum value: true"]
    );
}

#[test]
fn unknown_enum_value_into_enum() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          dog {
            doesKnowCommand(dogCommand: JUGGLE)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Value \"JUGGLE\" does not exist in \"DogCommand\" enum."]
    );
}

#[test]
fn different_case_enum_value_into_enum() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          dog {
            doesKnowCommand(dogCommand: sit)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Value \"sit\" does not exist in \"DogCommand\" enum."]
    );
}

#[test]
fn valid_list_value() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            stringListArgField(stringListArg: [\"one\", null, \"two\"])
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn valid_empty_list_value() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            stringListArgField(stringListArg: [])
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn valid_null_list_value() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            stringListArgField(stringListArg: null)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn valid_single_value_into_list_value() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            stringListArgField(stringListArg: \"one\")
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn incorrect_item_type() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            stringListArgField(stringListArg: [\"one\", 2])
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages,
        vec!["String cannot represent a non string value: 2"]
    );
}

#[test]
fn single_value_of_incorrect_type() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            stringListArgField(stringListArg: 1)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages,
        vec!["String cannot represent a non string value: 1"]
    );
}

#[test]
fn arg_on_optional_arg() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          dog {
            isHouseTrained(atOtherHomes: true)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn no_arg_on_optional_arg() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          dog {
            isHouseTrained
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn multiple_valid_args() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            multipleReqs(req1: 1, req2: 2)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn multiple_valid_args_reverse_oreder() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            multipleReqs(req2: 2, req1: 1)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn no_args_multiple_optional() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            multipleOpts
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn one_arg_multiple_optinals() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            multipleOpts(opt1: 1)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn second_arg_multiple_optinals() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            multipleOpts(opt2: 1)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn multiple_required_args_on_mixed_list() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            multipleOptAndReq(req1: 3, req2: 4)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn multiple_required_args_and_one_optional_on_mixed_list() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            multipleOptAndReq(req1: 3, req2: 4, opt1: 5)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn all_required_and_one_optional() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            multipleOptAndReq(req1: 3, req2: 4, opt1: 5, opt2: 6)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn incorrect_value_type() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            multipleReqs(req2: \"two\", req1: \"one\")
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 2);
    assert_eq!(
        messages,
        vec![
            "Int cannot represent non-integer value: \"two\"",
            "Int cannot represent non-integer value: \"one\""
        ]
    )
}

#[test]
fn incorrect_value_and_missing_argument() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            multipleReqs(req1: \"one\")
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages,
        vec!["Int cannot represent non-integer value: \"one\""]
    );
}

#[test]
fn null_value() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            multipleReqs(req1: null)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages,
        vec!["Expected value of type \"Int!\", found null."]
    );
}

#[test]
fn optional_arg_despite_required_field_in_type() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            complexArgField
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn partial_object_only_required() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            complexArgField(complexArg: { requiredField: true })
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn partial_object_required_field_can_be_falsy() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            complexArgField(complexArg: { requiredField: false })
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn partial_object_including_required() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            complexArgField(complexArg: { requiredField: true, intField: 4 })
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn full_object() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            complexArgField(complexArg: {
              requiredField: true,
              intField: 4,
              stringField: \"foo\",
              booleanField: false,
              stringListField: [\"one\", \"two\"]
            })
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn full_object_with_fields_in_different_order() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            complexArgField(complexArg: {
              stringListField: [\"one\", \"two\"],
              booleanField: false,
              requiredField: true,
              stringField: \"foo\",
              intField: 4,
            })
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn partial_object_missing_required() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            complexArgField(complexArg: { intField: 4 })
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages,
        vec![
            "Field \"ComplexInput.requiredField\" of required type \"Boolean!\" was not provided."
        ]
    )
}

#[test]
fn partial_object_invalid_field_type() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            complexArgField(complexArg: {
              stringListField: [\"one\", 2],
              requiredField: true,
            })
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages,
        vec!["String cannot represent a non string value: 2"]
    )
}

#[test]
fn partial_object_null_to_non_null_field() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            complexArgField(complexArg: {
              requiredField: true,
              nonNullField: null,
            })
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages,
        vec!["Expected value of type \"Boolean!\", found null."]
    )
}

#[test]
fn partial_object_unknown_field_arg() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          complicatedArgs {
            complexArgField(complexArg: {
              requiredField: true,
              invalidField: \"value\"
            })
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages,
        vec!["Field \"invalidField\" is not defined by type \"ComplexInput\"."]
    )
}

#[test]
fn allows_custom_scalar_to_accept_complex_literals() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          test1: anyArg(arg: 123)
          test2: anyArg(arg: \"abc\")
          test3: anyArg(arg: [123, \"abc\"])
          test4: anyArg(arg: {deep: [123, \"abc\"]})
        }",
        "
        scalar Any

        type Query {
          anyArg(arg: Any): String
        }
        ",
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn with_directives_of_valid_types() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          dog @include(if: true) {
            name
          }
          human @skip(if: false) {
            name
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn with_directives_of_invalid_types() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          dog @include(if: \"yes\") {
            name @skip(if: ENUM)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 2);
    assert_eq!(
        messages,
        vec![
            "Boolean cannot represent a non boolean value: \"yes\"",
            "Boolean cannot represent a non boolean value: ENUM"
        ]
    )
}

#[test]
fn variables_with_valid_default_values() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        query WithDefaultValues(
          $a: Int = 1,
          $b: String = \"ok\",
          $c: ComplexInput = { requiredField: true, intField: 3 }
          $d: Int! = 123
        ) {
          dog { name }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn variables_with_valid_default_null_values() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        query WithDefaultValues(
          $a: Int = null,
          $b: String = null,
          $c: ComplexInput = { requiredField: true, intField: null }
        ) {
          dog { name }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn variables_with_invalid_default_null_values() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        query WithDefaultValues(
          $a: Int! = null,
          $b: String! = null,
          $c: ComplexInput = { requiredField: null, intField: null }
        ) {
          dog { name }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 3);
    assert_eq!(
        messages,
        vec![
            "Expected value of type \"Int!\", found null.",
            "Expected value of type \"String!\", found null.",
            "Expected value of type \"Boolean!\", found null."
        ]
    );
}

#[test]
fn variables_with_invalid_default_values() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        query InvalidDefaultValues(
          $a: Int = \"one\",
          $b: String = 4,
          $c: ComplexInput = \"NotVeryComplex\"
        ) {
          dog { name }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 3);
    assert_eq!(
        messages,
        vec![
            "Int cannot represent non-integer value: \"one\"",
            "String cannot represent a non string value: 4",
            "Expected value of type \"ComplexInput\", found \"NotVeryComplex\"."
        ]
    );
}

#[test]
fn variables_with_complex_invalid_default_values() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        query WithDefaultValues(
          $a: ComplexInput = { requiredField: 123, intField: \"abc\" }
        ) {
          dog { name }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 2);
    assert_eq!(
        messages,
        vec![
            "Boolean cannot represent a non boolean value: 123",
            "Int cannot represent non-integer value: \"abc\"",
        ]
    );
}

#[test]
fn complex_variables_missing_required_field() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        query MissingRequiredField($a: ComplexInput = {intField: 3}) {
          dog { name }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages,
        vec![
            "Field \"ComplexInput.requiredField\" of required type \"Boolean!\" was not provided.",
        ]
    );
}

#[test]
fn list_variables_with_invalid_item() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        query InvalidItem($a: [String] = [\"one\", 2]) {
          dog { name }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 1);
    assert_eq!(
        messages,
        vec!["String cannot represent a non string value: 2",]
    );
}

#[test]
fn string_into_enum_suggests_close_match() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          dog {
            doesKnowCommand(dogCommand: \"HEL\")
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec![
            "Enum \"DogCommand\" cannot represent non-enum value: \"HEL\". Did you mean \"HEEL\"?"
        ]
    );
}

#[test]
fn enum_value_suggests_close_match() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          dog {
            doesKnowCommand(dogCommand: HEL)
          }
        }",
        &TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Value \"HEL\" does not exist in \"DogCommand\" enum. Did you mean \"HEEL\"?"]
    );
}

const ONE_OF_TEST_SCHEMA: &str = "
    directive @oneOf on INPUT_OBJECT

    input AnimalInput @oneOf {
      dog: String
      cat: String
    }

    type Query {
      animal(input: AnimalInput): String
    }
";

#[test]
fn one_of_input_object_with_single_key_is_valid() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          animal(input: { dog: \"Rex\" })
        }",
        ONE_OF_TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}

#[test]
fn one_of_input_object_with_two_keys_is_rejected() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          animal(input: { dog: \"Rex\", cat: \"Tom\" })
        }",
        ONE_OF_TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["OneOf Input Object \"AnimalInput\" must specify exactly one key."]
    );
}

#[test]
fn one_of_input_object_with_no_keys_is_rejected() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          animal(input: {})
        }",
        ONE_OF_TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["OneOf Input Object \"AnimalInput\" must specify exactly one key."]
    );
}

#[test]
fn one_of_input_object_with_null_key_is_rejected() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        {
          animal(input: { dog: null })
        }",
        ONE_OF_TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Field \"AnimalInput.dog\" must be non-null."]
    );
}

#[test]
fn one_of_input_object_with_nullable_variable_is_rejected() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        query ($dogName: String) {
          animal(input: { dog: $dogName })
        }",
        ONE_OF_TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(
        messages,
        vec!["Variable \"dogName\" must be non-nullable to be used for OneOf Input Object \"AnimalInput\"."]
    );
}

#[test]
fn one_of_input_object_with_non_null_variable_is_valid() {
    use crate::validation::test_utils::*;

    let mut plan = create_plan_from_rule(Box::new(ValuesOfCorrectType::new()));
    let errors = test_operation_with_schema(
        "
        query ($dogName: String!) {
          animal(input: { dog: $dogName })
        }",
        ONE_OF_TEST_SCHEMA,
        &mut plan,
    );

    let messages = get_messages(&errors);
    assert_eq!(messages.len(), 0);
}
