/// Introspection-query JSON types (`__schema`), independent of the SDL-backed
/// `static_graphql::schema` model the rest of this crate validates against.
pub mod introspection;

pub use self::introspection::*;
