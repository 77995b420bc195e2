use crate::ast::OperationVisitorContext;
use crate::static_graphql::schema;
use crate::validation::utils::ValidationErrorContext;

/// Implemented once per rule. `validate` is called with a shared traversal
/// context and the error collector for this validation pass; rules report
/// failures into `error_collector` rather than returning a value.
pub trait ValidationRule {
    fn error_code<'a>(&self) -> &'a str;

    fn validate(&self, ctx: &mut OperationVisitorContext, error_collector: &mut ValidationErrorContext);
}

/// Implemented once per schema-definition-language rule. These run against a
/// schema document directly, with no executable operation in scope.
pub trait SdlValidationRule {
    fn error_code<'a>(&self) -> &'a str;

    fn validate(&self, schema: &schema::Document, error_collector: &mut ValidationErrorContext);
}
