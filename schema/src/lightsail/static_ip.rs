use crate::intrinsic::Value;
use serde::{Deserialize, Serialize};

/// `AWS::Lightsail::StaticIp`
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lightsail-staticip.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct StaticIp {
    /// Update requires replacement
    pub static_ip_name: Value<String>,

    /// Name of the instance the IP is attached to
    pub attached_to: Option<Value<String>>,
}
