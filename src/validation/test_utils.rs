use crate::ast::OperationVisitorContext;
use crate::static_graphql::{query, schema};

use super::rules::defaults::default_rules_validation_plan;
use super::rules::ValidationRule;
use super::utils::{ValidationError, ValidationErrorContext};
use super::validate::validate;
use super::validate::ValidationPlan;

/// Shared fixture used across rule test suites, mirroring the interface/union
/// shapes (`Dog`, `Cat`, `Human`, `Pet`, `ComplicatedArgs`...) that the upstream
/// validation spec's own test harness exercises.
#[cfg(test)]
pub static TEST_SCHEMA: &str = "
  interface Being {
    name(surname: Boolean): String
  }

  interface Pet implements Being {
    name(surname: Boolean): String
  }

  interface Canine implements Being {
    name(surname: Boolean): String
  }

  enum DogCommand {
    SIT
    HEEL
    DOWN
  }

  type Dog implements Being & Pet & Canine {
    name(surname: Boolean): String
    nickname: String
    barkVolume: Int
    barks: Boolean
    doesKnowCommand(dogCommand: DogCommand): Boolean
    isHouseTrained(atOtherHomes: Boolean = true): Boolean
    isAtLocation(x: Int, y: Int): Boolean
  }

  enum FurColor {
    BROWN
    BLACK
    TAN
    SPOTTED
    NO_FUR
    UNKNOWN
  }

  type Cat implements Being & Pet {
    name(surname: Boolean): String
    nickname: String
    meows: Boolean
    meowsVolume: Int
    furColor: FurColor
  }

  union CatOrDog = Cat | Dog

  type Human implements Being {
    name(surname: Boolean): String
    pets: [Pet]
    pet: Pet
    relatives: [Human]!
  }

  input ComplexInput {
    requiredField: Boolean!
    nonNullField: Boolean! = false
    intField: Int
    stringField: String
    booleanField: Boolean
    stringListField: [String]
  }

  type ComplicatedArgs {
    intArgField(intArg: Int): String
    nonNullIntArgField(nonNullIntArg: Int!): String
    stringArgField(stringArg: String): String
    booleanArgField(booleanArg: Boolean): String
    enumArgField(enumArg: FurColor): String
    floatArgField(floatArg: Float): String
    idArgField(idArg: ID): String
    stringListArgField(stringListArg: [String]): String
    stringListNonNullArgField(stringListNonNullArg: [String!]): String
    complexArgField(complexArg: ComplexInput): String
    multipleReqs(req1: Int!, req2: Int!): String
    nonNullFieldWithDefault(arg: Int! = 0): String
    multipleOpts(opt1: Int = 0, opt2: Int = 0): String
    multipleOptAndReq(req1: Int!, req2: Int!, opt1: Int = 0, opt2: Int = 0): String
  }

  type QueryRoot {
    human(id: ID): Human
    dog: Dog
    cat: Cat
    pet: Pet
    catOrDog: CatOrDog
    complicatedArgs: ComplicatedArgs
  }

  type MutationRoot {
    testInput(input: ComplexInput): String
  }

  type SubscriptionRoot {
    catOrDog: CatOrDog
  }

  schema {
    query: QueryRoot
    mutation: MutationRoot
    subscription: SubscriptionRoot
  }

  directive @onQuery on QUERY
  directive @onMutation on MUTATION
  directive @onSubscription on SUBSCRIPTION
  directive @onField on FIELD
  directive @onFragmentDefinition on FRAGMENT_DEFINITION
  directive @onFragmentSpread on FRAGMENT_SPREAD
  directive @onInlineFragment on INLINE_FRAGMENT
  directive @onVariableDefinition on VARIABLE_DEFINITION

  directive @directiveA on FRAGMENT_DEFINITION | FIELD
  directive @directiveB on FRAGMENT_DEFINITION | FIELD
  directive @directive on FIELD
  directive @directive1 on FIELD
  directive @directive2 on FIELD
  directive @testDirective on FIELD
  directive @repeatable repeatable on FRAGMENT_DEFINITION | FIELD
";

#[cfg(test)]
pub fn create_default_ruleset_plan() -> ValidationPlan {
    default_rules_validation_plan()
}

#[cfg(test)]
pub fn create_plan_from_rule(rule: Box<dyn ValidationRule>) -> ValidationPlan {
    let mut rules = Vec::new();
    rules.push(rule);

    ValidationPlan { rules }
}

#[cfg(test)]
pub fn get_messages(validation_errors: &Vec<ValidationError>) -> Vec<&String> {
    validation_errors
        .iter()
        .map(|m| &m.message)
        .collect::<Vec<&String>>()
}

#[cfg(test)]
pub fn test_operation_without_schema(operation: String, plan: &mut ValidationPlan) -> Vec<ValidationError> {
    let schema_ast = graphql_parser::parse_schema::<String>(
        "
type Query {
  dummy: String
  foo: String
}

type Dog {
  name: String
  nickname: String
}
",
    )
    .expect("Failed to parse schema")
    .into_static();

    let operation_ast = graphql_parser::parse_query(&operation)
        .unwrap()
        .into_static();

    validate(&schema_ast, &operation_ast, plan)
}

#[cfg(test)]
pub fn test_operation_with_schema(
    operation: &str,
    schema_str: &str,
    plan: &mut ValidationPlan,
) -> Vec<ValidationError> {
    let schema_ast = graphql_parser::parse_schema::<String>(schema_str)
        .expect("Failed to parse schema")
        .into_static();

    let operation_ast = graphql_parser::parse_query(operation)
        .expect("Failed to parse operation")
        .into_static();

    validate(&schema_ast, &operation_ast, plan)
}

#[cfg(test)]
pub fn parsed_schema(schema_str: &str) -> schema::Document {
    graphql_parser::parse_schema::<String>(schema_str)
        .expect("Failed to parse schema")
        .into_static()
}

#[cfg(test)]
pub fn build_ctx<'a>(operation: &'a query::Document, schema: &'a schema::Document) -> OperationVisitorContext<'a> {
    OperationVisitorContext::new(operation, schema)
}

#[cfg(test)]
pub fn collect_errors(rule: &dyn ValidationRule, ctx: &mut OperationVisitorContext) -> Vec<ValidationError> {
    let mut error_collector = ValidationErrorContext::new();
    rule.validate(ctx, &mut error_collector);
    error_collector.validation_errors
}
