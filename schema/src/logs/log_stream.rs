use crate::intrinsic::Value;
use serde::{Deserialize, Serialize};

/// `AWS::Logs::LogStream`, every property requires replacement on update
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-logs-logstream.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct LogStream {
    pub log_group_name: Value<String>,

    /// Must not contain `:` or `*`
    pub log_stream_name: Option<Value<String>>,
}
