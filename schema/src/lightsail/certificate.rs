use super::Tag;
use crate::intrinsic::{List, Value};
use serde::{Deserialize, Serialize};

/// `AWS::Lightsail::Certificate`, used by container services and distributions
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lightsail-certificate.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Certificate {
    pub certificate_name: Value<String>,
    pub domain_name: Value<String>,

    /// Up to 10 extra domain names
    pub subject_alternative_names: Option<List<String>>,

    pub tags: Option<Value<Vec<Tag>>>,
}
