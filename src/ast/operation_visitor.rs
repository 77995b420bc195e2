use std::collections::{BTreeMap, HashMap};

use graphql_parser::query::TypeCondition;
use graphql_parser::Pos;

use crate::static_graphql::{
    query::*,
    schema::{self, DirectiveDefinition, DirectiveLocation, Field as SchemaFieldDef, InputValue},
    schema::{Document as SchemaDocument, ObjectType, TypeDefinition},
};

use crate::ast::ext::TypeDefinitionExtension;
use crate::ast::type_info::TypeInfoRegistry;

use super::AstTypeRef;

/// Extension traits over the schema view used throughout the rule set.
pub trait FieldByNameExtension {
    fn field_by_name(&self, name: &String) -> Option<SchemaFieldDef>;
    fn input_field_by_name(&self, name: &String) -> Option<InputValue>;
}

impl FieldByNameExtension for TypeDefinition {
    fn field_by_name(&self, name: &String) -> Option<SchemaFieldDef> {
        match self {
            TypeDefinition::Object(object) => object
                .fields
                .iter()
                .find(|field| field.name.eq(name))
                .cloned(),
            TypeDefinition::Interface(interface) => interface
                .fields
                .iter()
                .find(|field| field.name.eq(name))
                .cloned(),
            _ => None,
        }
    }

    fn input_field_by_name(&self, name: &String) -> Option<InputValue> {
        match self {
            TypeDefinition::InputObject(input_object) => input_object
                .fields
                .iter()
                .find(|field| field.name.eq(name))
                .cloned(),
            _ => None,
        }
    }
}

pub trait OperationDefinitionExtension {
    fn variable_definitions(&self) -> &[VariableDefinition];
    fn selection_set(&self) -> &SelectionSet;
    fn directives(&self) -> &[Directive];
}

impl OperationDefinitionExtension for OperationDefinition {
    fn variable_definitions(&self) -> &[VariableDefinition] {
        match self {
            OperationDefinition::Query(query) => &query.variable_definitions,
            OperationDefinition::SelectionSet(_) => &[],
            OperationDefinition::Mutation(mutation) => &mutation.variable_definitions,
            OperationDefinition::Subscription(subscription) => &subscription.variable_definitions,
        }
    }

    fn selection_set(&self) -> &SelectionSet {
        match self {
            OperationDefinition::Query(query) => &query.selection_set,
            OperationDefinition::SelectionSet(selection_set) => selection_set,
            OperationDefinition::Mutation(mutation) => &mutation.selection_set,
            OperationDefinition::Subscription(subscription) => &subscription.selection_set,
        }
    }

    fn directives(&self) -> &[Directive] {
        match self {
            OperationDefinition::Query(query) => &query.directives,
            OperationDefinition::SelectionSet(_) => &[],
            OperationDefinition::Mutation(mutation) => &mutation.directives,
            OperationDefinition::Subscription(subscription) => &subscription.directives,
        }
    }
}

pub trait SchemaDocumentExtension {
    fn type_by_name(&self, name: &String) -> Option<TypeDefinition>;
    fn type_map(&self) -> HashMap<String, TypeDefinition>;
    fn directive_by_name(&self, name: &String) -> Option<DirectiveDefinition>;
    fn object_type_by_name(&self, name: &String) -> Option<ObjectType>;
    fn schema_definition(&self) -> schema::SchemaDefinition;
    fn query_type(&self) -> ObjectType;
    fn mutation_type(&self) -> Option<ObjectType>;
    fn subscription_type(&self) -> Option<ObjectType>;
    fn is_subtype(&self, maybe_subtype: &Type, super_type: &Type) -> bool;
}

fn is_type_sub_type_of(maybe_subtype: &Type, super_type: &Type) -> bool {
    if maybe_subtype == super_type {
        return true;
    }

    if let Type::NonNullType(super_inner) = super_type {
        return match maybe_subtype {
            Type::NonNullType(sub_inner) => is_type_sub_type_of(sub_inner, super_inner),
            _ => false,
        };
    }

    if let Type::NonNullType(sub_inner) = maybe_subtype {
        return is_type_sub_type_of(sub_inner, super_type);
    }

    match (maybe_subtype, super_type) {
        (Type::ListType(sub_inner), Type::ListType(super_inner)) => {
            is_type_sub_type_of(sub_inner, super_inner)
        }
        _ => false,
    }
}

impl SchemaDocumentExtension for SchemaDocument {
    fn type_by_name(&self, name: &String) -> Option<TypeDefinition> {
        for def in &self.definitions {
            if let schema::Definition::TypeDefinition(type_def) = def {
                if type_def.name().eq(name) {
                    return Some(type_def.clone());
                }
            }
        }

        None
    }

    fn directive_by_name(&self, name: &String) -> Option<DirectiveDefinition> {
        for def in &self.definitions {
            if let schema::Definition::DirectiveDefinition(directive_def) = def {
                if directive_def.name.eq(name) {
                    return Some(directive_def.clone());
                }
            }
        }

        None
    }

    fn schema_definition(&self) -> schema::SchemaDefinition {
        self.definitions
            .iter()
            .find_map(|definition| match definition {
                schema::Definition::SchemaDefinition(schema_definition) => {
                    Some(schema_definition.clone())
                }
                _ => None,
            })
            .unwrap_or(schema::SchemaDefinition {
                position: Default::default(),
                directives: vec![],
                query: Some("Query".to_string()),
                mutation: None,
                subscription: None,
            })
    }

    fn query_type(&self) -> ObjectType {
        let schema_definition = self.schema_definition();

        self.object_type_by_name(
            schema_definition
                .query
                .as_ref()
                .unwrap_or(&"Query".to_string()),
        )
        .unwrap()
    }

    fn mutation_type(&self) -> Option<ObjectType> {
        self.schema_definition()
            .mutation
            .and_then(|name| self.object_type_by_name(&name))
    }

    fn subscription_type(&self) -> Option<ObjectType> {
        self.schema_definition()
            .subscription
            .and_then(|name| self.object_type_by_name(&name))
    }

    fn object_type_by_name(&self, name: &String) -> Option<ObjectType> {
        match self.type_by_name(name) {
            Some(TypeDefinition::Object(object_def)) => Some(object_def),
            _ => None,
        }
    }

    fn type_map(&self) -> HashMap<String, TypeDefinition> {
        let mut type_map = HashMap::new();

        for def in &self.definitions {
            if let schema::Definition::TypeDefinition(type_def) = def {
                type_map.insert(type_def.name().clone(), type_def.clone());
            }
        }

        type_map
    }

    fn is_subtype(&self, maybe_subtype: &Type, super_type: &Type) -> bool {
        is_type_sub_type_of(maybe_subtype, super_type)
    }
}

/// Per-traversal state shared by every rule: the schema, the fragment/directive
/// registries computed once up front, and the type-info stacks pushed and
/// popped around each node (the "Type Info Tracker", kept inline here rather
/// than as a separate visitor since every rule needs it synchronously).
pub struct OperationVisitorContext<'a> {
    pub operation: &'a Document,
    pub schema: &'a SchemaDocument,
    pub known_fragments: HashMap<String, FragmentDefinition>,
    pub directives: HashMap<String, DirectiveDefinition>,
    pub type_info_registry: TypeInfoRegistry<'a>,

    type_stack: Vec<Option<TypeDefinition>>,
    parent_type_stack: Vec<Option<TypeDefinition>>,
    input_type_stack: Vec<Option<TypeDefinition>>,
    type_literal_stack: Vec<Option<Type>>,
    input_type_literal_stack: Vec<Option<Type>>,
}

/// `@skip`/`@include`/`@deprecated` are defined by the GraphQL spec itself
/// rather than by any particular schema document, so they're registered here
/// instead of relying on every test/caller schema to redeclare them.
fn no_pos() -> Pos {
    Pos { line: 0, column: 0 }
}

pub(crate) fn standard_directives() -> Vec<DirectiveDefinition> {
    let if_arg = InputValue {
        position: no_pos(),
        description: None,
        name: "if".to_string(),
        value_type: schema::Type::NonNullType(Box::new(schema::Type::NamedType(
            "Boolean".to_string(),
        ))),
        default_value: None,
        directives: vec![],
    };
    let conditional_locations = vec![
        DirectiveLocation::Field,
        DirectiveLocation::FragmentSpread,
        DirectiveLocation::InlineFragment,
    ];

    vec![
        DirectiveDefinition {
            position: no_pos(),
            description: None,
            name: "skip".to_string(),
            arguments: vec![if_arg.clone()],
            repeatable: false,
            locations: conditional_locations.clone(),
        },
        DirectiveDefinition {
            position: no_pos(),
            description: None,
            name: "include".to_string(),
            arguments: vec![if_arg],
            repeatable: false,
            locations: conditional_locations,
        },
        DirectiveDefinition {
            position: no_pos(),
            description: None,
            name: "deprecated".to_string(),
            arguments: vec![InputValue {
                position: no_pos(),
                description: None,
                name: "reason".to_string(),
                value_type: schema::Type::NamedType("String".to_string()),
                default_value: Some(schema::Value::String(
                    "No longer supported".to_string(),
                )),
                directives: vec![],
            }],
            repeatable: false,
            locations: vec![
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::ArgumentDefinition,
                DirectiveLocation::InputFieldDefinition,
                DirectiveLocation::EnumValue,
            ],
        },
    ]
}

impl<'a> OperationVisitorContext<'a> {
    pub fn new(operation: &'a Document, schema: &'a SchemaDocument) -> Self {
        let mut directives = HashMap::<String, DirectiveDefinition>::from_iter(
            standard_directives()
                .into_iter()
                .map(|directive_def| (directive_def.name.clone(), directive_def)),
        );
        directives.extend(schema.definitions.iter().filter_map(|def| match def {
            schema::Definition::DirectiveDefinition(directive_def) => {
                Some((directive_def.name.clone(), directive_def.clone()))
            }
            _ => None,
        }));

        OperationVisitorContext {
            operation,
            schema,
            type_stack: vec![],
            parent_type_stack: vec![],
            input_type_stack: vec![],
            type_literal_stack: vec![],
            input_type_literal_stack: vec![],
            type_info_registry: TypeInfoRegistry::new(schema),
            known_fragments: HashMap::<String, FragmentDefinition>::from_iter(
                operation.definitions.iter().filter_map(|def| match def {
                    Definition::Fragment(fragment) => {
                        Some((fragment.name.clone(), fragment.clone()))
                    }
                    _ => None,
                }),
            ),
            directives,
        }
    }

    pub fn with_type<Func>(&mut self, t: Option<Type>, func: Func)
    where
        Func: FnOnce(&mut OperationVisitorContext<'a>),
    {
        if let Some(ref t) = t {
            self.type_stack
                .push(self.schema.type_by_name(&t.named_type()));
        } else {
            self.type_stack.push(None);
        }

        self.type_literal_stack.push(t);
        func(self);
        self.type_literal_stack.pop();
        self.type_stack.pop();
    }

    pub fn with_parent_type<Func>(&mut self, func: Func)
    where
        Func: FnOnce(&mut OperationVisitorContext<'a>),
    {
        self.parent_type_stack
            .push(self.type_stack.last().unwrap_or(&None).clone());
        func(self);
        self.parent_type_stack.pop();
    }

    pub fn with_input_type<Func>(&mut self, t: Option<Type>, func: Func)
    where
        Func: FnOnce(&mut OperationVisitorContext<'a>),
    {
        if let Some(ref t) = t {
            self.input_type_stack
                .push(self.schema.type_by_name(&t.named_type()));
        } else {
            self.input_type_stack.push(None);
        }

        self.input_type_literal_stack.push(t);
        func(self);
        self.input_type_literal_stack.pop();
        self.input_type_stack.pop();
    }

    pub fn current_type(&self) -> Option<&TypeDefinition> {
        self.type_stack.last().unwrap_or(&None).as_ref()
    }

    pub fn current_parent_type(&self) -> Option<&TypeDefinition> {
        self.parent_type_stack.last().unwrap_or(&None).as_ref()
    }

    pub fn current_type_literal(&self) -> Option<&Type> {
        self.type_literal_stack.last().unwrap_or(&None).as_ref()
    }

    pub fn current_input_type(&self) -> Option<&TypeDefinition> {
        self.input_type_stack.last().unwrap_or(&None).as_ref()
    }

    pub fn current_input_type_literal(&self) -> Option<&Type> {
        self.input_type_literal_stack
            .last()
            .unwrap_or(&None)
            .as_ref()
    }
}

pub fn visit_document<'a, Visitor, UserContext>(
    visitor: &mut Visitor,
    document: &'a Document,
    context: &mut OperationVisitorContext<'a>,
    error_collector: &mut UserContext,
) where
    Visitor: OperationVisitor<'a, UserContext>,
{
    visitor.enter_document(context, error_collector, document);
    visit_definitions(visitor, &document.definitions, context, error_collector);
    visitor.leave_document(context, error_collector, document);
}

fn visit_definitions<'a, Visitor, UserContext>(
    visitor: &mut Visitor,
    definitions: &'a Vec<Definition>,
    context: &mut OperationVisitorContext<'a>,
    error_collector: &mut UserContext,
) where
    Visitor: OperationVisitor<'a, UserContext>,
{
    for definition in definitions {
        let schema_type_name = match definition {
            Definition::Fragment(fragment) => {
                let TypeCondition::On(name) = &fragment.type_condition;
                Some(name.clone())
            }
            Definition::Operation(operation) => match operation {
                OperationDefinition::Query(_) => Some(context.schema.query_type().name.clone()),
                OperationDefinition::SelectionSet(_) => {
                    Some(context.schema.query_type().name.clone())
                }
                OperationDefinition::Mutation(_) => context.schema.mutation_type().map(|t| t.name),
                OperationDefinition::Subscription(_) => {
                    context.schema.subscription_type().map(|t| t.name)
                }
            },
        };

        context.with_type(schema_type_name.map(Type::NamedType), |context| {
            match definition {
                Definition::Fragment(fragment) => {
                    visit_fragment_definition(visitor, fragment, context, error_collector)
                }
                Definition::Operation(operation) => {
                    visit_operation_definition(visitor, operation, context, error_collector)
                }
            }
        });
    }
}

fn visit_directives<'a, Visitor, UserContext>(
    visitor: &mut Visitor,
    directives: &'a [Directive],
    context: &mut OperationVisitorContext<'a>,
    error_collector: &mut UserContext,
) where
    Visitor: OperationVisitor<'a, UserContext>,
{
    for directive in directives {
        let directive_def_args = context
            .schema
            .directive_by_name(&directive.name)
            .map(|def| def.arguments);

        visitor.enter_directive(context, error_collector, directive);
        visit_arguments(
            visitor,
            directive_def_args.as_ref(),
            &directive.arguments,
            context,
            error_collector,
        );
        visitor.leave_directive(context, error_collector, directive);
    }
}

fn visit_arguments<'a, Visitor, UserContext>(
    visitor: &mut Visitor,
    arguments_definition: Option<&Vec<InputValue>>,
    arguments: &'a [(String, Value)],
    context: &mut OperationVisitorContext<'a>,
    error_collector: &mut UserContext,
) where
    Visitor: OperationVisitor<'a, UserContext>,
{
    for argument in arguments {
        let arg_type = arguments_definition
            .and_then(|argument_defs| argument_defs.iter().find(|a| a.name.eq(&argument.0)))
            .map(|a| a.value_type.clone());

        context.with_input_type(arg_type, |context| {
            visitor.enter_argument(context, error_collector, argument);
            visit_input_value(visitor, &argument.1, context, error_collector);
            visitor.leave_argument(context, error_collector, argument);
        })
    }
}

fn visit_input_value<'a, Visitor, UserContext>(
    visitor: &mut Visitor,
    input_value: &'a Value,
    context: &mut OperationVisitorContext<'a>,
    error_collector: &mut UserContext,
) where
    Visitor: OperationVisitor<'a, UserContext>,
{
    match input_value {
        Value::Boolean(v) => {
            visitor.enter_scalar_value(context, error_collector, input_value);
            visitor.leave_scalar_value(context, error_collector, input_value);
            let _ = v;
        }
        Value::Float(_) | Value::Int(_) | Value::String(_) => {
            visitor.enter_scalar_value(context, error_collector, input_value);
            visitor.leave_scalar_value(context, error_collector, input_value);
        }
        Value::Null => {
            visitor.enter_null_value(context, error_collector);
            visitor.leave_null_value(context, error_collector);
        }
        Value::Enum(v) => {
            visitor.enter_enum_value(context, error_collector, v);
            visitor.leave_enum_value(context, error_collector, v);
        }
        Value::List(v) => {
            visitor.enter_list_value(context, error_collector, v);

            let input_type = context.current_input_type_literal().and_then(|t| match t {
                Type::ListType(inner_type) => Some(inner_type.as_ref().clone()),
                _ => None,
            });

            context.with_input_type(input_type, |context| {
                for item in v {
                    visit_input_value(visitor, item, context, error_collector)
                }
            });

            visitor.leave_list_value(context, error_collector, v);
        }
        Value::Object(v) => {
            visitor.enter_object_value(context, error_collector, v);

            for (sub_key, sub_value) in v.iter() {
                let input_type = context
                    .current_input_type_literal()
                    .and_then(|v| context.schema.type_by_name(&v.named_type()))
                    .and_then(|v| v.input_field_by_name(sub_key))
                    .map(|v| v.value_type);

                context.with_input_type(input_type, |context| {
                    let param = &(sub_key.clone(), sub_value.clone());
                    visitor.enter_object_field(context, error_collector, param);
                    visit_input_value(visitor, sub_value, context, error_collector);
                    visitor.leave_object_field(context, error_collector, param);
                });
            }

            visitor.leave_object_value(context, error_collector, v);
        }
        Value::Variable(v) => {
            visitor.enter_variable_value(context, error_collector, v);
            visitor.leave_variable_value(context, error_collector, v);
        }
    }
}

fn visit_variable_definitions<'a, Visitor, UserContext>(
    visitor: &mut Visitor,
    variables: &'a [VariableDefinition],
    context: &mut OperationVisitorContext<'a>,
    error_collector: &mut UserContext,
) where
    Visitor: OperationVisitor<'a, UserContext>,
{
    for variable in variables {
        context.with_input_type(Some(variable.var_type.clone()), |context| {
            visitor.enter_variable_definition(context, error_collector, variable);

            if let Some(default_value) = &variable.default_value {
                visit_input_value(visitor, default_value, context, error_collector);
            }

            visitor.leave_variable_definition(context, error_collector, variable);
        })
    }
}

fn visit_selection<'a, Visitor, UserContext>(
    visitor: &mut Visitor,
    selection: &'a Selection,
    context: &mut OperationVisitorContext<'a>,
    error_collector: &mut UserContext,
) where
    Visitor: OperationVisitor<'a, UserContext>,
{
    match selection {
        Selection::Field(field) => {
            let parent_type_def = context
                .current_parent_type()
                .and_then(|t| t.field_by_name(&field.name));

            let field_type = parent_type_def.clone().map(|f| f.field_type);
            let field_args = parent_type_def.map(|f| f.arguments);

            context.with_type(field_type, |context| {
                visitor.enter_field(context, error_collector, field);
                visit_arguments(
                    visitor,
                    field_args.as_ref(),
                    &field.arguments,
                    context,
                    error_collector,
                );
                visit_directives(visitor, &field.directives, context, error_collector);
                visit_selection_set(visitor, &field.selection_set, context, error_collector);
                visitor.leave_field(context, error_collector, field);
            });
        }
        Selection::FragmentSpread(fragment_spread) => {
            visitor.enter_fragment_spread(context, error_collector, fragment_spread);
            visit_directives(
                visitor,
                &fragment_spread.directives,
                context,
                error_collector,
            );
            visitor.leave_fragment_spread(context, error_collector, fragment_spread);
        }
        Selection::InlineFragment(inline_fragment) => {
            if let Some(TypeCondition::On(fragment_condition)) = &inline_fragment.type_condition {
                context.with_type(
                    Some(Type::NamedType(fragment_condition.clone())),
                    |context| {
                        visitor.enter_inline_fragment(context, error_collector, inline_fragment);
                        visit_directives(
                            visitor,
                            &inline_fragment.directives,
                            context,
                            error_collector,
                        );
                        visit_selection_set(
                            visitor,
                            &inline_fragment.selection_set,
                            context,
                            error_collector,
                        );
                        visitor.leave_inline_fragment(context, error_collector, inline_fragment);
                    },
                );
            } else {
                visitor.enter_inline_fragment(context, error_collector, inline_fragment);
                visit_directives(
                    visitor,
                    &inline_fragment.directives,
                    context,
                    error_collector,
                );
                visit_selection_set(
                    visitor,
                    &inline_fragment.selection_set,
                    context,
                    error_collector,
                );
                visitor.leave_inline_fragment(context, error_collector, inline_fragment);
            }
        }
    }
}

fn visit_selection_set<'a, Visitor, UserContext>(
    visitor: &mut Visitor,
    selection_set: &'a SelectionSet,
    context: &mut OperationVisitorContext<'a>,
    error_collector: &mut UserContext,
) where
    Visitor: OperationVisitor<'a, UserContext>,
{
    context.with_parent_type(|context| {
        visitor.enter_selection_set(context, error_collector, selection_set);

        for selection in &selection_set.items {
            visit_selection(visitor, selection, context, error_collector);
        }

        visitor.leave_selection_set(context, error_collector, selection_set);
    });
}

fn visit_fragment_definition<'a, Visitor, UserContext>(
    visitor: &mut Visitor,
    fragment: &'a FragmentDefinition,
    context: &mut OperationVisitorContext<'a>,
    error_collector: &mut UserContext,
) where
    Visitor: OperationVisitor<'a, UserContext>,
{
    visitor.enter_fragment_definition(context, error_collector, fragment);
    visit_directives(visitor, &fragment.directives, context, error_collector);
    visit_selection_set(visitor, &fragment.selection_set, context, error_collector);
    visitor.leave_fragment_definition(context, error_collector, fragment);
}

fn visit_operation_definition<'a, Visitor, UserContext>(
    visitor: &mut Visitor,
    operation: &'a OperationDefinition,
    context: &mut OperationVisitorContext<'a>,
    error_collector: &mut UserContext,
) where
    Visitor: OperationVisitor<'a, UserContext>,
{
    visitor.enter_operation_definition(context, error_collector, operation);
    visit_directives(visitor, operation.directives(), context, error_collector);
    visit_variable_definitions(
        visitor,
        operation.variable_definitions(),
        context,
        error_collector,
    );
    visit_selection_set(visitor, operation.selection_set(), context, error_collector);
    visitor.leave_operation_definition(context, error_collector, operation);
}

/// A rule implements this to receive enter/leave callbacks during the single
/// shared traversal. Every default body is a no-op so a rule only overrides
/// the hooks it actually cares about.
#[allow(unused_variables)]
pub trait OperationVisitor<'a, UserContext> {
    fn enter_document(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a Document,
    ) {
    }
    fn leave_document(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a Document,
    ) {
    }

    fn enter_operation_definition(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a OperationDefinition,
    ) {
    }
    fn leave_operation_definition(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a OperationDefinition,
    ) {
    }

    fn enter_fragment_definition(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a FragmentDefinition,
    ) {
    }
    fn leave_fragment_definition(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a FragmentDefinition,
    ) {
    }

    fn enter_variable_definition(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a VariableDefinition,
    ) {
    }
    fn leave_variable_definition(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a VariableDefinition,
    ) {
    }

    fn enter_directive(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a Directive,
    ) {
    }
    fn leave_directive(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a Directive,
    ) {
    }

    fn enter_argument(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a (String, Value),
    ) {
    }
    fn leave_argument(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a (String, Value),
    ) {
    }

    fn enter_selection_set(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a SelectionSet,
    ) {
    }
    fn leave_selection_set(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a SelectionSet,
    ) {
    }

    fn enter_field(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a Field,
    ) {
    }
    fn leave_field(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a Field,
    ) {
    }

    fn enter_fragment_spread(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a FragmentSpread,
    ) {
    }
    fn leave_fragment_spread(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a FragmentSpread,
    ) {
    }

    fn enter_inline_fragment(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a InlineFragment,
    ) {
    }
    fn leave_inline_fragment(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a InlineFragment,
    ) {
    }

    fn enter_null_value(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
    ) {
    }
    fn leave_null_value(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
    ) {
    }

    fn enter_scalar_value(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a Value,
    ) {
    }
    fn leave_scalar_value(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a Value,
    ) {
    }

    fn enter_enum_value(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a str,
    ) {
    }
    fn leave_enum_value(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a str,
    ) {
    }

    fn enter_variable_value(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a str,
    ) {
    }
    fn leave_variable_value(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a str,
    ) {
    }

    fn enter_list_value(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a [Value],
    ) {
    }
    fn leave_list_value(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a [Value],
    ) {
    }

    fn enter_object_value(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a BTreeMap<String, Value>,
    ) {
    }
    fn leave_object_value(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a BTreeMap<String, Value>,
    ) {
    }

    fn enter_object_field(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a (String, Value),
    ) {
    }
    fn leave_object_field(
        &mut self,
        ctx: &mut OperationVisitorContext<'a>,
        err: &mut UserContext,
        node: &'a (String, Value),
    ) {
    }
}
