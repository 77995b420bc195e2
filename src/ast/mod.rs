
/// Utilities visiting GraphQL AST trees
pub mod collect_fields;
pub mod ext;
pub mod operation_visitor;
pub mod schema_visitor;
pub mod type_info;
pub mod type_info_query_visitor;
pub mod utils;

pub use self::ext::*;
pub use self::operation_visitor::*;
pub use self::schema_visitor::*;
pub use self::type_info::{TypeInfo, TypeInfoElementRef, TypeInfoRegistry};
pub use self::utils::*;
