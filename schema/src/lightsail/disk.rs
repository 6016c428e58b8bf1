use super::{AddOn, Location, Tag};
use crate::intrinsic::Value;
use serde::{Deserialize, Serialize};

/// `AWS::Lightsail::Disk`, block storage that can be attached to an instance
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lightsail-disk.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Disk {
    /// Length 1-254. Update requires replacement.
    pub disk_name: Value<String>,

    /// Update requires replacement
    pub size_in_gb: Value<i64>,

    pub add_ons: Option<Value<Vec<AddOn>>>,

    /// Update requires replacement
    pub availability_zone: Option<Value<String>>,

    pub location: Option<Value<Location>>,
    pub tags: Option<Value<Vec<Tag>>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn disk_with_auto_snapshots() {
        let disk: Disk = serde_json::from_value(json!({
            "DiskName": "data",
            "SizeInGb": 32,
            "AvailabilityZone": {"Fn::Select": [0, {"Fn::GetAZs": ""}]},
            "AddOns": [{
                "AddOnType": "AutoSnapshot",
                "Status": "Enabled",
                "AutoSnapshotAddOnRequest": {"SnapshotTimeOfDay": "03:00"}
            }],
            "Tags": [{"Key": "backup"}]
        }))
        .unwrap();

        assert_eq!(disk.size_in_gb, Value::from(32));
        assert!(disk.availability_zone.is_some_and(|zone| zone.is_intrinsic()));

        let add_ons = disk.add_ons.and_then(Value::into_literal).unwrap();
        assert_eq!(add_ons[0].status, Some(Value::from("Enabled")));
    }

    #[test]
    fn size_is_required() {
        assert!(serde_json::from_value::<Disk>(json!({"DiskName": "data"})).is_err());
    }
}
