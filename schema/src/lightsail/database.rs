use super::Tag;
use crate::intrinsic::Value;
use serde::{Deserialize, Serialize};

/// `AWS::Lightsail::Database`, a managed relational database
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lightsail-database.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Database {
    /// Length 2-255, pattern `\w[\w\-]*\w`. Update requires replacement.
    pub relational_database_name: Value<String>,

    /// Update requires replacement
    pub availability_zone: Option<Value<String>>,

    /// e.g. `mysql_8_0`, `postgres_12`. Update requires replacement.
    pub relational_database_blueprint_id: Value<String>,

    /// e.g. `micro_1_0`. Update requires replacement.
    pub relational_database_bundle_id: Value<String>,

    /// Update requires replacement
    pub master_database_name: Value<String>,

    /// Update requires replacement
    pub master_username: Value<String>,

    /// Generated when not given. Prefer a dynamic reference to a secret.
    pub master_user_password: Option<Value<String>>,

    /// `hh24:mi-hh24:mi` in UTC, at least 30 minutes
    pub preferred_backup_window: Option<Value<String>>,

    /// `ddd:hh24:mi-ddd:hh24:mi` in UTC
    pub preferred_maintenance_window: Option<Value<String>>,

    pub publicly_accessible: Option<Value<bool>>,
    pub ca_certificate_identifier: Option<Value<String>>,
    pub backup_retention: Option<Value<bool>>,
    pub relational_database_parameters: Option<Value<Vec<RelationalDatabaseParameter>>>,
    pub rotate_master_user_password: Option<Value<bool>>,
    pub tags: Option<Value<Vec<Tag>>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct RelationalDatabaseParameter {
    pub allowed_values: Option<Value<String>>,

    /// One of `immediate`, `pending-reboot`
    pub apply_method: Option<Value<String>>,

    /// One of `static`, `dynamic`
    pub apply_type: Option<Value<String>>,

    pub data_type: Option<Value<String>>,
    pub description: Option<Value<String>>,
    pub is_modifiable: Option<Value<bool>>,
    pub parameter_name: Option<Value<String>>,
    pub parameter_value: Option<Value<String>>,
}
