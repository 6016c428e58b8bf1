use super::statement::Empty;
use crate::intrinsic::Value;
use serde::{Deserialize, Serialize};

/// What to do with a request that matches a rule, exactly one member is set
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct RuleAction {
    pub allow: Option<Value<RequestHandlingAction>>,
    pub block: Option<Value<BlockAction>>,
    pub count: Option<Value<RequestHandlingAction>>,
    pub captcha: Option<Value<RequestHandlingAction>>,
    pub challenge: Option<Value<RequestHandlingAction>>,
}

/// The action of a web ACL when no rule matches, either `Allow` or `Block`
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DefaultAction {
    pub allow: Option<Value<RequestHandlingAction>>,
    pub block: Option<Value<BlockAction>>,
}

/// Replaces the actions of a rule group's rules, either `Count` or `None`
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct OverrideAction {
    pub count: Option<Value<Empty>>,
    pub none: Option<Value<Empty>>,
}

/// Allow, count, CAPTCHA and challenge actions, which let the request through
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct RequestHandlingAction {
    pub custom_request_handling: Option<Value<CustomRequestHandling>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct BlockAction {
    pub custom_response: Option<Value<CustomResponse>>,
}

/// Headers added to the request before it is forwarded, prefixed with `x-amzn-waf-`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CustomRequestHandling {
    pub insert_headers: Vec<CustomHttpHeader>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CustomResponse {
    /// 200-599
    pub response_code: Value<i64>,

    /// Key into the `CustomResponseBodies` of the web ACL or rule group
    pub custom_response_body_key: Option<Value<String>>,

    pub response_headers: Option<Value<Vec<CustomHttpHeader>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CustomHttpHeader {
    pub name: Value<String>,
    pub value: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CustomResponseBody {
    /// One of `TEXT_PLAIN`, `TEXT_HTML`, `APPLICATION_JSON`
    pub content_type: Value<String>,

    /// Up to 10240 bytes
    pub content: Value<String>,
}

/// Overrides the action of a single rule in a referenced rule group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct RuleActionOverride {
    pub name: Value<String>,
    pub action_to_use: RuleAction,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct VisibilityConfig {
    pub sampled_requests_enabled: Value<bool>,
    pub cloud_watch_metrics_enabled: Value<bool>,

    /// Length 1-128, no whitespace
    pub metric_name: Value<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CaptchaConfig {
    pub immunity_time_property: Option<Value<ImmunityTimeProperty>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ChallengeConfig {
    pub immunity_time_property: Option<Value<ImmunityTimeProperty>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ImmunityTimeProperty {
    /// Seconds, 60-259200
    pub immunity_time: Value<i64>,
}

/// A label added to matching requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Label {
    pub name: Value<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct LabelSummary {
    pub name: Option<Value<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn block_with_custom_response() {
        let action: RuleAction = serde_json::from_value(json!({
            "Block": {"CustomResponse": {"ResponseCode": 429, "CustomResponseBodyKey": "slow-down"}}
        }))
        .unwrap();

        let block = action.block.and_then(Value::into_literal).unwrap();
        let response = block.custom_response.and_then(Value::into_literal).unwrap();
        assert_eq!(response.response_code.literal(), Some(&429));
    }

    #[test]
    fn allow_does_not_take_a_custom_response() {
        let result = serde_json::from_value::<RuleAction>(json!({
            "Allow": {"CustomResponse": {"ResponseCode": 200}}
        }));

        assert!(result.is_err());
    }

    #[test]
    fn override_action_none() {
        let action: OverrideAction = serde_json::from_value(json!({"None": {}})).unwrap();

        assert_eq!(action.none, Some(Value::Literal(Empty {})));
        assert_eq!(serde_json::to_value(&action).unwrap(), json!({"None": {}}));
    }
}
