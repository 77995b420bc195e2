use std::collections::HashMap;

use graphql_parser::Pos;

use crate::static_graphql::schema::{self, Document, TypeDefinition, TypeExtension};
use crate::validation::rules::SdlValidationRule;
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// Unique field definition names
///
/// Within one type (object, interface, or input object) and its extensions
/// combined, field names must be unique.
///
/// See https://spec.graphql.org/draft/#sec-Objects
pub struct UniqueFieldDefinitionNames;

impl UniqueFieldDefinitionNames {
    pub fn new() -> Self {
        UniqueFieldDefinitionNames
    }
}

fn fields_of(type_def: &TypeDefinition) -> Vec<(String, Pos)> {
    match type_def {
        TypeDefinition::Object(o) => o.fields.iter().map(|f| (f.name.clone(), f.position)).collect(),
        TypeDefinition::Interface(i) => i.fields.iter().map(|f| (f.name.clone(), f.position)).collect(),
        TypeDefinition::InputObject(i) => i.fields.iter().map(|f| (f.name.clone(), f.position)).collect(),
        _ => vec![],
    }
}

fn extension_fields_of(type_ext: &TypeExtension) -> Option<(String, Vec<(String, Pos)>)> {
    match type_ext {
        TypeExtension::Object(o) => Some((
            o.name.clone(),
            o.fields.iter().map(|f| (f.name.clone(), f.position)).collect(),
        )),
        TypeExtension::Interface(i) => Some((
            i.name.clone(),
            i.fields.iter().map(|f| (f.name.clone(), f.position)).collect(),
        )),
        TypeExtension::InputObject(i) => Some((
            i.name.clone(),
            i.fields.iter().map(|f| (f.name.clone(), f.position)).collect(),
        )),
        _ => None,
    }
}

impl SdlValidationRule for UniqueFieldDefinitionNames {
    fn error_code<'a>(&self) -> &'a str {
        "UniqueFieldDefinitionNames"
    }

    fn validate(&self, schema: &Document, error_collector: &mut ValidationErrorContext) {
        let mut fields_by_type: HashMap<String, Vec<(String, Pos)>> = HashMap::new();

        for definition in &schema.definitions {
            match definition {
                schema::Definition::TypeDefinition(type_def) => {
                    let name = match type_def {
                        TypeDefinition::Object(o) => Some(o.name.clone()),
                        TypeDefinition::Interface(i) => Some(i.name.clone()),
                        TypeDefinition::InputObject(i) => Some(i.name.clone()),
                        _ => None,
                    };

                    if let Some(name) = name {
                        fields_by_type.entry(name).or_default().extend(fields_of(type_def));
                    }
                }
                schema::Definition::TypeExtension(type_ext) => {
                    if let Some((name, fields)) = extension_fields_of(type_ext) {
                        fields_by_type.entry(name).or_default().extend(fields);
                    }
                }
                _ => {}
            }
        }

        let mut type_names: Vec<&String> = fields_by_type.keys().collect();
        type_names.sort();

        for type_name in type_names {
            let fields = &fields_by_type[type_name];
            let mut seen: HashMap<&str, u32> = HashMap::new();

            for (field_name, position) in fields {
                let count = seen.entry(field_name.as_str()).or_insert(0);
                *count += 1;

                if *count > 1 {
                    error_collector.report_error(ValidationError {
                        error_code: self.error_code(),
                        locations: vec![*position],
                        message: format!(
                            "Field \"{}.{}\" can only be defined once.",
                            type_name, field_name
                        ),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UniqueFieldDefinitionNames;
    use crate::validation::rules::SdlValidationRule;
    use crate::validation::test_utils::parsed_schema;
    use crate::validation::utils::ValidationErrorContext;

    fn validate(schema_str: &str) -> Vec<String> {
        let schema = parsed_schema(schema_str);
        let mut error_collector = ValidationErrorContext::new();
        UniqueFieldDefinitionNames::new().validate(&schema, &mut error_collector);
        error_collector
            .validation_errors
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn no_duplicates() {
        assert_eq!(validate("type Query { a: String b: String }").len(), 0);
    }

    #[test]
    fn duplicate_within_type() {
        let errors = validate("type Query { a: String a: Int }");
        assert_eq!(errors, vec!["Field \"Query.a\" can only be defined once."]);
    }

    #[test]
    fn duplicate_across_extension() {
        let errors = validate(
            "type Query { a: String }
             extend type Query { a: Int }",
        );

        assert_eq!(errors, vec!["Field \"Query.a\" can only be defined once."]);
    }

    #[test]
    fn input_object_fields_are_checked() {
        let errors = validate(
            "type Query { a: String }
             input Filter { name: String name: String }",
        );

        assert_eq!(errors, vec!["Field \"Filter.name\" can only be defined once."]);
    }
}
