use crate::intrinsic::Value;
use serde::{Deserialize, Serialize};

/// A key-value pair attached to a resource
///
/// Kendra and CloudWatch Logs require both members. Lightsail and WAFv2 have their own,
/// looser tag records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Tag {
    /// Length 1-128, must not start with `aws:`
    pub key: Value<String>,

    /// Length 0-256
    pub value: Value<String>,
}

impl Tag {
    pub fn new(key: &str, value: &str) -> Self {
        Tag {
            key: key.into(),
            value: value.into(),
        }
    }
}
