
/// Utilities validating GraphQL AST trees
pub mod rules;
pub mod suggestions;
#[cfg(test)]
pub mod test_utils;
pub mod utils;
pub mod validate;

pub use self::rules::*;
pub use self::utils::*;
pub use self::validate::*;
