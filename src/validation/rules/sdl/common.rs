//! Shared helpers for the SDL rule set: every rule here walks a bare
//! `schema::Document` (no executable operation, no `OperationVisitorContext`),
//! so they lean on `SchemaVisitor` directly instead of the executable-document
//! traversal machinery.

use std::collections::HashMap;

use crate::ast::standard_directives;
use crate::static_graphql::schema::{self, Directive, DirectiveDefinition};
use crate::validation::suggestions::{quoted_or_list_suffix, suggest_candidates};
use crate::validation::utils::{ValidationError, ValidationErrorContext};

/// The standard directives plus every directive this document itself
/// defines, keyed by name. Mirrors `OperationVisitorContext::new`'s
/// directive registry, but for a document with no separate schema to pull
/// `@skip`/`@include`/`@deprecated` from.
pub fn known_directive_definitions(document: &schema::Document) -> HashMap<String, DirectiveDefinition> {
    let mut directives: HashMap<String, DirectiveDefinition> = standard_directives()
        .into_iter()
        .map(|def| (def.name.clone(), def))
        .collect();

    directives.extend(document.definitions.iter().filter_map(|def| match def {
        schema::Definition::DirectiveDefinition(directive_def) => {
            Some((directive_def.name.clone(), directive_def.clone()))
        }
        _ => None,
    }));

    directives
}

/// Checks every directive application's argument list against its
/// definition, reporting unknown argument names (`KnownArgumentNamesOnDirectives`).
pub fn check_known_arguments_on_directives(
    directives: &[Directive],
    directive_defs: &HashMap<String, DirectiveDefinition>,
    error_collector: &mut ValidationErrorContext,
    error_code: &'static str,
) {
    for directive in directives {
        let directive_def = match directive_defs.get(&directive.name) {
            Some(def) => def,
            None => continue,
        };

        for (arg_name, _) in &directive.arguments {
            if !directive_def.arguments.iter().any(|a| &a.name == arg_name) {
                let suggestions = suggest_candidates(
                    arg_name,
                    directive_def.arguments.iter().map(|a| a.name.as_str()),
                );

                error_collector.report_error(ValidationError {
                    error_code,
                    locations: vec![directive.position],
                    message: format!(
                        "Unknown argument \"{}\" on directive \"@{}\".{}",
                        arg_name,
                        directive.name,
                        quoted_or_list_suffix(&suggestions)
                    ),
                });
            }
        }
    }
}

/// Calls `f` once per directive-bearing site in the document: the schema
/// definition itself, every type (and its fields/arguments/values), every
/// type extension, and every directive definition's arguments carry their
/// own independent directive list.
pub fn for_each_directive_site<'a, F: FnMut(&'a [Directive])>(document: &'a schema::Document, mut f: F) {
    for definition in &document.definitions {
        match definition {
            schema::Definition::SchemaDefinition(schema_def) => f(&schema_def.directives),
            schema::Definition::TypeDefinition(type_def) => visit_type_definition(type_def, &mut f),
            schema::Definition::TypeExtension(type_ext) => visit_type_extension(type_ext, &mut f),
            schema::Definition::DirectiveDefinition(_) => {}
        }
    }
}

fn visit_type_definition<'a, F: FnMut(&'a [Directive])>(type_def: &'a schema::TypeDefinition, f: &mut F) {
    match type_def {
        schema::TypeDefinition::Scalar(scalar) => f(&scalar.directives),
        schema::TypeDefinition::Object(object) => {
            f(&object.directives);
            for field in &object.fields {
                f(&field.directives);
                for arg in &field.arguments {
                    f(&arg.directives);
                }
            }
        }
        schema::TypeDefinition::Interface(interface) => {
            f(&interface.directives);
            for field in &interface.fields {
                f(&field.directives);
                for arg in &field.arguments {
                    f(&arg.directives);
                }
            }
        }
        schema::TypeDefinition::Union(union_type) => f(&union_type.directives),
        schema::TypeDefinition::Enum(enum_type) => {
            f(&enum_type.directives);
            for value in &enum_type.values {
                f(&value.directives);
            }
        }
        schema::TypeDefinition::InputObject(input_object) => {
            f(&input_object.directives);
            for field in &input_object.fields {
                f(&field.directives);
            }
        }
    }
}

fn visit_type_extension<'a, F: FnMut(&'a [Directive])>(type_ext: &'a schema::TypeExtension, f: &mut F) {
    match type_ext {
        schema::TypeExtension::Scalar(scalar) => f(&scalar.directives),
        schema::TypeExtension::Object(object) => {
            f(&object.directives);
            for field in &object.fields {
                f(&field.directives);
                for arg in &field.arguments {
                    f(&arg.directives);
                }
            }
        }
        schema::TypeExtension::Interface(interface) => {
            f(&interface.directives);
            for field in &interface.fields {
                f(&field.directives);
                for arg in &field.arguments {
                    f(&arg.directives);
                }
            }
        }
        schema::TypeExtension::Union(union_type) => f(&union_type.directives),
        schema::TypeExtension::Enum(enum_type) => {
            f(&enum_type.directives);
            for value in &enum_type.values {
                f(&value.directives);
            }
        }
        schema::TypeExtension::InputObject(input_object) => {
            f(&input_object.directives);
            for field in &input_object.fields {
                f(&field.directives);
            }
        }
    }
}

/// Counts occurrences of a non-repeatable directive at one AST location
/// (`UniqueDirectivesPerLocation`, SDL scope).
pub fn check_unique_directives_per_location(
    directives: &[Directive],
    directive_defs: &HashMap<String, DirectiveDefinition>,
    error_collector: &mut ValidationErrorContext,
    error_code: &'static str,
) {
    let mut seen: HashMap<&str, u32> = HashMap::new();

    for directive in directives {
        let is_repeatable = directive_defs
            .get(&directive.name)
            .map(|def| def.repeatable)
            .unwrap_or(false);

        if is_repeatable {
            continue;
        }

        let count = seen.entry(directive.name.as_str()).or_insert(0);
        *count += 1;

        if *count > 1 {
            error_collector.report_error(ValidationError {
                error_code,
                locations: vec![directive.position],
                message: format!(
                    "The directive \"@{}\" can only be used once at this location.",
                    directive.name
                ),
            });
        }
    }
}
