use super::Tag;
use crate::intrinsic::{List, Value};
use serde::{Deserialize, Serialize};

/// `AWS::Lightsail::Bucket`, object storage
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lightsail-bucket.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Bucket {
    /// Length 3-54, pattern `^[a-z0-9][a-z0-9-]{1,52}[a-z0-9]$`. Update requires replacement.
    pub bucket_name: Value<String>,

    /// e.g. `small_1_0`
    pub bundle_id: Value<String>,

    pub object_versioning: Option<Value<bool>>,
    pub access_rules: Option<Value<AccessRules>>,

    /// Names of instances allowed to access the bucket
    pub resources_receiving_access: Option<List<String>>,

    /// Up to 10 AWS account IDs with read-only access
    pub read_only_access_accounts: Option<List<String>>,

    pub tags: Option<Value<Vec<Tag>>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AccessRules {
    /// One of `public`, `private`
    pub get_object: Option<Value<String>>,

    pub allow_public_overrides: Option<Value<bool>>,
}
