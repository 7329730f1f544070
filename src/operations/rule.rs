//! Rule operations.

use crate::framework::macros::record;
use crate::model::{Language, Rule, RuleDetail};

record! {
    pub struct CreateRuleRequest {
        rule_id: scalar String => "ruleId",
        detector_id: scalar String => "detectorId",
        description: scalar String => "description",
        expression: scalar String => "expression",
        language: scalar Language => "language",
        outcomes: list String => "outcomes",
    }
}

record! {
    pub struct CreateRuleResult {
        rule: scalar Rule => "rule",
    }
}

record! {
    /// Deletes a rule version not used by an `ACTIVE` or `INACTIVE` detector version.
    pub struct DeleteRuleVersionRequest {
        detector_id: scalar String => "detectorId",
        rule_id: scalar String => "ruleId",
        rule_version: scalar String => "ruleVersion",
    }
}

record! {
    pub struct DeleteRuleVersionResult {}
}

record! {
    pub struct GetRulesRequest {
        rule_id: scalar String => "ruleId",
        detector_id: scalar String => "detectorId",
        rule_version: scalar String => "ruleVersion",
        next_token: scalar String => "nextToken",
        max_results: scalar i32 => "maxResults",
    }
}

record! {
    pub struct GetRulesResult {
        rule_details: list RuleDetail => "ruleDetails",
        next_token: scalar String => "nextToken",
    }
}

record! {
    pub struct UpdateRuleMetadataRequest {
        rule: scalar Rule => "rule",
        description: scalar String => "description",
    }
}

record! {
    pub struct UpdateRuleMetadataResult {}
}

record! {
    /// Creates a new version of a rule from a new expression and outcomes.
    pub struct UpdateRuleVersionRequest {
        rule: scalar Rule => "rule",
        description: scalar String => "description",
        expression: scalar String => "expression",
        language: scalar Language => "language",
        outcomes: list String => "outcomes",
    }
}

record! {
    pub struct UpdateRuleVersionResult {
        rule: scalar Rule => "rule",
    }
}
