use super::statement::FieldToMatch;
use crate::intrinsic::{List, Value};
use serde::{Deserialize, Serialize};

/// `AWS::WAFv2::LoggingConfiguration`
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-wafv2-loggingconfiguration.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct LoggingConfiguration {
    /// ARN of the web ACL. Update requires replacement.
    pub resource_arn: Value<String>,

    /// A single Kinesis Data Firehose, S3 bucket or log group ARN. Log group names must
    /// start with `aws-waf-logs-`.
    pub log_destination_configs: List<String>,

    /// Only `SingleHeader`, `UriPath`, `QueryString` and `Method` can be redacted
    pub redacted_fields: Option<Value<Vec<FieldToMatch>>>,

    pub logging_filter: Option<Value<LoggingFilter>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct LoggingFilter {
    /// One of `KEEP`, `DROP`, for requests no filter matches
    pub default_behavior: Value<String>,

    pub filters: Vec<LogFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct LogFilter {
    /// One of `KEEP`, `DROP`
    pub behavior: Value<String>,

    /// One of `MEETS_ALL`, `MEETS_ANY`
    pub requirement: Value<String>,

    pub conditions: Vec<LogFilterCondition>,
}

/// Either `ActionCondition` or `LabelNameCondition`
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct LogFilterCondition {
    pub action_condition: Option<Value<ActionCondition>>,
    pub label_name_condition: Option<Value<LabelNameCondition>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ActionCondition {
    /// One of `ALLOW`, `BLOCK`, `COUNT`, `CAPTCHA`, `CHALLENGE`, `EXCLUDED_AS_COUNT`
    pub action: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct LabelNameCondition {
    pub label_name: Value<String>,
}
