/// Validation rules that walk a bare schema document (SDL) rather than an
/// executable operation against a schema. Not re-exported with a blanket
/// glob from the parent `rules` module: several struct names here would
/// otherwise collide with their executable-document counterparts (for
/// example `UniqueDirectivesPerLocation`). Reach these through
/// `validation::rules::sdl::<Name>` or through `sdl::defaults::sdl_default_rules_validation_plan()`.
pub(crate) mod common;

pub mod defaults;
pub mod known_argument_names_on_directives;
pub mod lone_schema_definition;
pub mod unique_directive_names;
pub mod possible_type_extensions;
pub mod unique_argument_definition_names;
pub mod unique_directives_per_location;
pub mod unique_enum_value_names;
pub mod unique_field_definition_names;
pub mod unique_operation_types;
pub mod unique_type_names;

pub use self::defaults::*;
pub use self::known_argument_names_on_directives::*;
pub use self::lone_schema_definition::*;
pub use self::unique_directive_names::*;
pub use self::possible_type_extensions::*;
pub use self::unique_argument_definition_names::*;
pub use self::unique_directives_per_location::*;
pub use self::unique_enum_value_names::*;
pub use self::unique_field_definition_names::*;
pub use self::unique_operation_types::*;
pub use self::unique_type_names::*;
