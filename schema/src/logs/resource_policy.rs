use crate::intrinsic::Value;
use serde::{Deserialize, Serialize};

/// `AWS::Logs::ResourcePolicy`, allows other services to put log events
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-logs-resourcepolicy.html
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ResourcePolicy {
    /// Length 1-255. Update requires replacement.
    pub policy_name: Value<String>,

    /// Policy as a JSON string, length 1-5120
    pub policy_document: Value<String>,
}
