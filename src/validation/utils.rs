use std::fmt;

use graphql_parser::Pos;

use crate::static_graphql::schema;

/// One validation failure, tagged with the rule that produced it so callers
/// can filter/triage by code without parsing `message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub error_code: &'static str,
    pub message: String,
    pub locations: Vec<Pos>,
}

/// Accumulates errors for a single validation pass. Rules never see each
/// other's state; a fresh `ValidationErrorContext` is created per `validate`
/// call and handed to every rule in turn.
#[derive(Debug, Default)]
pub struct ValidationErrorContext {
    pub validation_errors: Vec<ValidationError>,
}

impl ValidationErrorContext {
    pub fn new() -> Self {
        ValidationErrorContext {
            validation_errors: Vec::new(),
        }
    }

    pub fn report_error(&mut self, error: ValidationError) {
        self.validation_errors.push(error);
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error_code, self.message)
    }
}

pub fn find_object_type_by_name<'a>(
    schema: &'a schema::Document,
    name: String,
) -> Option<&'a schema::ObjectType> {
    schema
        .definitions
        .iter()
        .find_map(|definition| match definition {
            schema::Definition::TypeDefinition(schema::TypeDefinition::Object(object_type))
                if object_type.name == name =>
            {
                Some(object_type)
            }
            _ => None,
        })
}
