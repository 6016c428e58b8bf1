use crate::intrinsic::{Json, Value};
use crate::tag::Tag;
use serde::{Deserialize, Serialize};

/// Values accepted by `RetentionInDays`
pub const RETENTION_DAYS: [i64; 22] = [
    1, 3, 5, 7, 14, 30, 60, 90, 120, 150, 180, 365, 400, 545, 731, 1096, 1827, 2192, 2557,
    2922, 3288, 3653,
];

/// `AWS::Logs::LogGroup`
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-logs-loggroup.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct LogGroup {
    /// Length 1-512, pattern `[\.\-_/#A-Za-z0-9]+`. Generated when not given.
    ///
    /// Update requires replacement.
    pub log_group_name: Option<Value<String>>,

    /// KMS key used to encrypt the log data. Length up to 256.
    pub kms_key_id: Option<Value<String>>,

    /// One of [`RETENTION_DAYS`]. Logs never expire when not set.
    pub retention_in_days: Option<Value<i64>>,

    /// One of `STANDARD`, `INFREQUENT_ACCESS`. Update requires replacement.
    pub log_group_class: Option<Value<String>>,

    /// Policy document, with `Name`, `Version` and `Statement` keys
    pub data_protection_policy: Option<Json>,

    pub tags: Option<Value<Vec<Tag>>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn everything_is_optional() {
        let group: LogGroup = serde_json::from_value(json!({})).unwrap();
        assert_eq!(group, LogGroup::default());
        assert_eq!(serde_json::to_value(&group).unwrap(), json!({}));
    }

    #[test]
    fn retention_and_protection_policy() {
        let group: LogGroup = serde_json::from_value(json!({
            "LogGroupName": {"Fn::Sub": "/app/${AWS::StackName}"},
            "RetentionInDays": 14,
            "DataProtectionPolicy": {
                "Name": "data-protection",
                "Version": "2021-06-01",
                "Statement": []
            }
        }))
        .unwrap();

        let retention = group.retention_in_days.as_ref().and_then(Value::literal).unwrap();
        assert!(RETENTION_DAYS.contains(retention));
        assert_eq!(group.data_protection_policy.unwrap()["Version"], "2021-06-01");
    }

    #[test]
    fn tags_need_a_value() {
        let group: LogGroup = serde_json::from_value(json!({
            "Tags": [{"Key": "team", "Value": "platform"}]
        }))
        .unwrap();
        assert_eq!(group.tags, Some(Value::Literal(vec![Tag::new("team", "platform")])));

        let error = serde_json::from_value::<LogGroup>(json!({"Tags": [{"Key": "team"}]}))
            .unwrap_err()
            .to_string();
        assert!(error.contains("Value"), "{error}");
    }
}
