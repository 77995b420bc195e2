use crate::validation::validate::ValidationPlan;

use super::{
    ExecutableDefinitions, FieldsOnCorrectType, FragmentsOnCompositeTypes, KnownArgumentNames,
    KnownDirectives, KnownFragmentNames, KnownOperationTypes, KnownTypeNames,
    LeafFieldSelections, LoneAnonymousOperation, NoFragmentsCycle, NoUndefinedVariables,
    NoUnusedFragments, NoUnusedVariables, PossibleFragmentSpreads, ProvidedRequiredArguments,
    SingleFieldSubscriptions, UniqueArgumentNames, UniqueDirectivesPerLocation,
    UniqueFragmentNames, UniqueInputFieldNames, UniqueOperationNames, UniqueVariableNames,
    ValuesOfCorrectType, VariablesAreInputTypes, VariablesInAllowedPosition,
};

/// The rule set run by default: every executable-document rule this crate
/// implements, minus the opt-in `NoDeprecatedCustom` rule (see §6 of the
/// validation spec this crate follows).
pub fn default_rules_validation_plan() -> ValidationPlan {
    let mut plan = ValidationPlan { rules: vec![] };

    plan.add_rule(Box::new(ExecutableDefinitions {}));
    plan.add_rule(Box::new(LoneAnonymousOperation {}));
    plan.add_rule(Box::new(KnownTypeNames::new()));
    plan.add_rule(Box::new(FragmentsOnCompositeTypes::new()));
    plan.add_rule(Box::new(VariablesAreInputTypes::new()));
    plan.add_rule(Box::new(LeafFieldSelections {}));
    plan.add_rule(Box::new(FieldsOnCorrectType::new()));
    plan.add_rule(Box::new(UniqueFragmentNames::new()));
    plan.add_rule(Box::new(KnownFragmentNames::new()));
    plan.add_rule(Box::new(NoUnusedFragments {}));
    plan.add_rule(Box::new(PossibleFragmentSpreads::new()));
    plan.add_rule(Box::new(NoFragmentsCycle::new()));
    plan.add_rule(Box::new(NoUndefinedVariables::new()));
    plan.add_rule(Box::new(NoUnusedVariables::new()));
    plan.add_rule(Box::new(KnownDirectives::new()));
    plan.add_rule(Box::new(UniqueDirectivesPerLocation::new()));
    plan.add_rule(Box::new(KnownArgumentNames::new()));
    plan.add_rule(Box::new(UniqueArgumentNames {}));
    plan.add_rule(Box::new(ValuesOfCorrectType::new()));
    plan.add_rule(Box::new(ProvidedRequiredArguments {}));
    plan.add_rule(Box::new(VariablesInAllowedPosition::new()));
    plan.add_rule(Box::new(UniqueInputFieldNames::new()));
    plan.add_rule(Box::new(UniqueOperationNames::new()));
    plan.add_rule(Box::new(UniqueVariableNames::new()));
    plan.add_rule(Box::new(SingleFieldSubscriptions::new()));
    plan.add_rule(Box::new(KnownOperationTypes::new()));

    plan
}
