use super::action::{
    CaptchaConfig, ChallengeConfig, CustomResponseBody, Label, LabelSummary, RuleAction,
    VisibilityConfig,
};
use super::statement::RuleGroupStatement;
use super::Tag;
use crate::intrinsic::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `AWS::WAFv2::RuleGroup`
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-wafv2-rulegroup.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct RuleGroup {
    /// Update requires replacement
    pub name: Option<Value<String>>,

    pub description: Option<Value<String>>,

    /// One of `CLOUDFRONT`, `REGIONAL`. Update requires replacement.
    pub scope: Value<String>,

    /// Web ACL capacity units reserved for the group, cannot be changed later
    pub capacity: Value<i64>,

    pub visibility_config: VisibilityConfig,
    pub rules: Option<Value<Vec<Rule>>>,

    /// Labels the rules add
    pub available_labels: Option<Value<Vec<LabelSummary>>>,

    /// Labels the rules match on
    pub consumed_labels: Option<Value<Vec<LabelSummary>>>,

    /// Bodies referenced by `CustomResponseBodyKey`
    pub custom_response_bodies: Option<Value<BTreeMap<String, CustomResponseBody>>>,

    pub tags: Option<Value<Vec<Tag>>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Rule {
    /// Unique within the group
    pub name: Value<String>,

    /// Rules are evaluated from the lowest priority up
    pub priority: Value<i64>,

    pub statement: RuleGroupStatement,
    pub action: Option<Value<RuleAction>>,
    pub rule_labels: Option<Value<Vec<Label>>>,
    pub visibility_config: VisibilityConfig,
    pub captcha_config: Option<Value<CaptchaConfig>>,
    pub challenge_config: Option<Value<ChallengeConfig>>,
}
