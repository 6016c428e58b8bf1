use super::{AddOn, Location, Tag};
use crate::intrinsic::{List, Value};
use serde::{Deserialize, Serialize};

/// `AWS::Lightsail::Instance`, a virtual private server
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lightsail-instance.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Instance {
    /// Length 1-254, pattern `^[a-zA-Z0-9][\w\-.]*[a-zA-Z0-9]$`. Update requires replacement.
    pub instance_name: Value<String>,

    /// Update requires replacement
    pub availability_zone: Option<Value<String>>,

    /// Image for the instance, e.g. `ubuntu_22_04`. Update requires replacement.
    pub blueprint_id: Value<String>,

    /// Plan for the instance, e.g. `nano_2_0`. Update requires replacement.
    pub bundle_id: Value<String>,

    pub hardware: Option<Value<Hardware>>,
    pub location: Option<Value<Location>>,
    pub networking: Option<Value<Networking>>,
    pub add_ons: Option<Value<Vec<AddOn>>>,

    /// Update requires replacement
    pub key_pair_name: Option<Value<String>>,

    /// Launch script run when the instance is created. Update requires replacement.
    pub user_data: Option<Value<String>>,

    pub state: Option<Value<State>>,
    pub tags: Option<Value<Vec<Tag>>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Hardware {
    pub cpu_count: Option<Value<i64>>,

    /// Attached disks. Detaching the system disk is not allowed.
    pub disks: Option<Value<Vec<InstanceDisk>>>,

    pub ram_size_in_gb: Option<Value<i64>>,
}

/// A disk attached to an instance
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct InstanceDisk {
    pub attached_to: Option<Value<String>>,
    pub attachment_state: Option<Value<String>>,
    pub disk_name: Value<String>,

    #[serde(rename = "IOPS")]
    pub iops: Option<Value<i64>>,

    pub is_system_disk: Option<Value<bool>>,

    /// Device path, e.g. `/dev/xvdf`
    pub path: Value<String>,

    pub size_in_gb: Option<Value<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Networking {
    pub monthly_transfer: Option<Value<MonthlyTransfer>>,
    pub ports: Vec<Port>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct MonthlyTransfer {
    pub gb_per_month_allocated: Option<Value<String>>,
}

/// A firewall rule of the instance
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Port {
    /// One of `inbound`, `outbound`
    pub access_direction: Option<Value<String>>,

    pub access_from: Option<Value<String>>,

    /// One of `Public`, `Private`
    pub access_type: Option<Value<String>>,

    /// Only `lightsail-connect` is supported
    pub cidr_list_aliases: Option<List<String>>,

    pub cidrs: Option<List<String>>,
    pub common_name: Option<Value<String>>,

    /// 0-65535, or the ICMP type when `Protocol` is `icmp`
    pub from_port: Option<Value<i64>>,

    pub ipv6_cidrs: Option<List<String>>,

    /// One of `tcp`, `all`, `udp`, `icmp`, `icmpv6`
    pub protocol: Option<Value<String>>,

    /// 0-65535, or the ICMP code when `Protocol` is `icmp`
    pub to_port: Option<Value<i64>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct State {
    /// 0 pending, 16 running, 32 shutting-down, 48 terminated, 64 stopping, 80 stopped
    pub code: Option<Value<i64>>,

    pub name: Option<Value<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn instance_with_ports_and_snapshots() {
        let instance: Instance = serde_json::from_value(json!({
            "InstanceName": "web-1",
            "BlueprintId": "ubuntu_22_04",
            "BundleId": "nano_2_0",
            "AddOns": [{
                "AddOnType": "AutoSnapshot",
                "AutoSnapshotAddOnRequest": {"SnapshotTimeOfDay": "06:00"}
            }],
            "Hardware": {
                "Disks": [{"DiskName": {"Ref": "DataDisk"}, "Path": "/dev/xvdf", "IOPS": 100}]
            },
            "Networking": {
                "Ports": [
                    {"FromPort": 22, "ToPort": 22, "Protocol": "tcp", "Cidrs": ["10.0.0.0/8"]},
                    {"FromPort": 443, "ToPort": 443, "Protocol": "tcp"}
                ]
            }
        }))
        .unwrap();

        let networking = instance.networking.and_then(Value::into_literal).unwrap();
        assert_eq!(networking.ports.len(), 2);
        assert_eq!(networking.ports[1].to_port, Some(Value::from(443)));

        let hardware = instance.hardware.and_then(Value::into_literal).unwrap();
        let disk = &hardware.disks.and_then(Value::into_literal).unwrap()[0];
        assert_eq!(disk.iops, Some(Value::from(100)));
        assert!(disk.disk_name.is_intrinsic());
    }

    #[test]
    fn tag_without_a_value() {
        let instance: Instance = serde_json::from_value(json!({
            "InstanceName": "web-1",
            "BlueprintId": "ubuntu_22_04",
            "BundleId": "nano_2_0",
            "Tags": [{"Key": "env"}]
        }))
        .unwrap();

        let tags = instance.tags.and_then(Value::into_literal).unwrap();
        assert_eq!(tags[0].key, Value::from("env"));
        assert_eq!(tags[0].value, None);
        assert_eq!(serde_json::to_value(&tags).unwrap(), json!([{"Key": "env"}]));
    }

    #[test]
    fn networking_requires_ports() {
        assert!(serde_json::from_value::<Networking>(json!({})).is_err());
    }
}
