//! Amazon Lightsail resource types

mod alarm;
mod bucket;
mod certificate;
mod container;
mod database;
mod disk;
mod distribution;
mod instance;
mod load_balancer;
mod static_ip;

pub use alarm::*;
pub use bucket::*;
pub use certificate::*;
pub use container::*;
pub use database::*;
pub use disk::*;
pub use distribution::*;
pub use instance::*;
pub use load_balancer::*;
pub use static_ip::*;

use crate::intrinsic::Value;
use serde::{Deserialize, Serialize};

/// A Lightsail tag, the value may be left out
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Tag {
    pub key: Value<String>,
    pub value: Option<Value<String>>,
}

/// An add-on enabled on an instance or disk
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AddOn {
    /// Only `AutoSnapshot` is supported
    pub add_on_type: Value<String>,

    pub auto_snapshot_add_on_request: Option<Value<AutoSnapshotAddOn>>,

    /// One of `Enabling`, `Disabling`, `Enabled`, `Terminating`, `Terminated`,
    /// `Disabled`, `Failed`
    pub status: Option<Value<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AutoSnapshotAddOn {
    /// Daily snapshot time in UTC, `HH:00` format
    pub snapshot_time_of_day: Option<Value<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Location {
    pub availability_zone: Option<Value<String>>,
    pub region_name: Option<Value<String>>,
}
