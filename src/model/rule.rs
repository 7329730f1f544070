//! Rules and rule evaluation results.

use crate::framework::macros::record;
use crate::model::Language;

record! {
    /// Reference to one version of a rule.
    pub struct Rule {
        detector_id: scalar String => "detectorId",
        rule_id: scalar String => "ruleId",
        rule_version: scalar String => "ruleVersion",
    }
}

record! {
    /// Full description of a rule version.
    pub struct RuleDetail {
        rule_id: scalar String => "ruleId",
        description: scalar String => "description",
        detector_id: scalar String => "detectorId",
        rule_version: scalar String => "ruleVersion",
        expression: scalar String => "expression",
        language: scalar Language => "language",
        /// Outcome names, in the order the rule emits them.
        outcomes: list String => "outcomes",
        last_updated_time: scalar String => "lastUpdatedTime",
        created_time: scalar String => "createdTime",
    }
}

record! {
    /// Outcomes produced by one rule during a prediction.
    pub struct RuleResult {
        rule_id: scalar String => "ruleId",
        outcomes: list String => "outcomes",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{Record, Structural};

    #[test]
    fn test_display_lists_present_fields_in_order() {
        let rule = Rule::new().with_rule_version("2").with_detector_id("d1");
        assert_eq!(rule.to_string(), "{detectorId: d1, ruleVersion: 2}");
        assert_eq!(Rule::new().to_string(), "{}");
    }

    #[test]
    fn test_hash_counts_absent_as_zero() {
        // Three absent fields fold the seed with zeros.
        assert_eq!(Rule::new().structural_hash(), 31 * 31 * 31);
        assert_ne!(
            Rule::new().with_rule_id("r1").structural_hash(),
            Rule::new().with_detector_id("r1").structural_hash()
        );
    }

    #[test]
    fn test_present_fields() {
        let detail = RuleDetail::new()
            .with_rule_id("r1")
            .with_outcomes(["review"])
            .with_language(crate::model::Language::Detectorpl);
        assert_eq!(detail.present_fields(), vec!["ruleId", "language", "outcomes"]);
    }
}
