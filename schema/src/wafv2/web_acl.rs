use super::action::{
    CaptchaConfig, ChallengeConfig, CustomResponseBody, DefaultAction, Label, OverrideAction,
    RuleAction, VisibilityConfig,
};
use super::statement::WebAclStatement;
use super::Tag;
use crate::intrinsic::{List, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `AWS::WAFv2::WebACL`
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-wafv2-webacl.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct WebAcl {
    /// Update requires replacement
    pub name: Option<Value<String>>,

    pub description: Option<Value<String>>,

    /// One of `CLOUDFRONT`, `REGIONAL`. Update requires replacement.
    pub scope: Value<String>,

    pub default_action: DefaultAction,
    pub visibility_config: VisibilityConfig,
    pub rules: Option<Value<Vec<Rule>>>,
    pub custom_response_bodies: Option<Value<BTreeMap<String, CustomResponseBody>>>,
    pub captcha_config: Option<Value<CaptchaConfig>>,
    pub challenge_config: Option<Value<ChallengeConfig>>,

    /// Domains accepted in tokens, besides the protected resource's own
    pub token_domains: Option<List<String>>,

    pub tags: Option<Value<Vec<Tag>>>,
}

/// A web ACL rule
///
/// Rules with a managed rule group or rule group reference statement take an
/// `OverrideAction`, all others take an `Action`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Rule {
    pub name: Value<String>,
    pub priority: Value<i64>,
    pub statement: WebAclStatement,
    pub action: Option<Value<RuleAction>>,
    pub override_action: Option<Value<OverrideAction>>,
    pub rule_labels: Option<Value<Vec<Label>>>,
    pub visibility_config: VisibilityConfig,
    pub captcha_config: Option<Value<CaptchaConfig>>,
    pub challenge_config: Option<Value<ChallengeConfig>>,
}
