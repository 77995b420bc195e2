use crate::validation::validate::SdlValidationPlan;

use super::{
    KnownArgumentNamesOnDirectives, LoneSchemaDefinition, PossibleTypeExtensions,
    UniqueArgumentDefinitionNames, UniqueDirectiveNames, UniqueDirectivesPerLocationSdl,
    UniqueEnumValueNames, UniqueFieldDefinitionNames, UniqueOperationTypes, UniqueTypeNames,
};

/// The rule set run by default when validating a schema document on its own
/// (see §4.5 of the validation spec this crate follows).
pub fn sdl_default_rules_validation_plan() -> SdlValidationPlan {
    let mut plan = SdlValidationPlan { rules: vec![] };

    plan.add_rule(Box::new(LoneSchemaDefinition::new()));
    plan.add_rule(Box::new(UniqueOperationTypes::new()));
    plan.add_rule(Box::new(UniqueTypeNames::new()));
    plan.add_rule(Box::new(UniqueFieldDefinitionNames::new()));
    plan.add_rule(Box::new(UniqueEnumValueNames::new()));
    plan.add_rule(Box::new(UniqueArgumentDefinitionNames::new()));
    plan.add_rule(Box::new(UniqueDirectiveNames::new()));
    plan.add_rule(Box::new(KnownArgumentNamesOnDirectives::new()));
    plan.add_rule(Box::new(UniqueDirectivesPerLocationSdl::new()));
    plan.add_rule(Box::new(PossibleTypeExtensions::new()));

    plan
}
