use crate::intrinsic::Value;
use serde::{Deserialize, Serialize};

/// `AWS::Logs::Destination`, a target for cross-account subscriptions
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-logs-destination.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Destination {
    /// Length 1-512, pattern `^[^:*]{1,512}$`. Update requires replacement.
    pub destination_name: Value<String>,

    /// IAM policy document as a JSON string
    pub destination_policy: Option<Value<String>>,

    /// Role that CloudWatch Logs assumes to write to the target
    pub role_arn: Value<String>,

    /// Kinesis stream or Firehose delivery stream
    pub target_arn: Value<String>,
}
