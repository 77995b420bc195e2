/// Internal invariant violations, distinct from [`crate::validation::utils::ValidationError`]
/// (a validation diagnostic returned to the caller). These are programmer-error
/// conditions a caller can hit while assembling its own rule set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphQLToolsError {
    #[error("rule \"{0}\" is already registered in this validation plan")]
    DuplicateRule(String),
}
