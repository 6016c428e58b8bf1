use crate::intrinsic::{List, Value};
use serde::{Deserialize, Serialize};

/// `AWS::Lightsail::Alarm`, a metric alarm on an instance, database or load balancer
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lightsail-alarm.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Alarm {
    pub alarm_name: Value<String>,
    pub monitored_resource_name: Value<String>,

    /// Depends on the monitored resource, e.g. `CPUUtilization`, `StatusCheckFailed`,
    /// `HealthyHostCount`, `FreeStorageSpace`
    pub metric_name: Value<String>,

    /// One of `GreaterThanOrEqualToThreshold`, `GreaterThanThreshold`,
    /// `LessThanThreshold`, `LessThanOrEqualToThreshold`
    pub comparison_operator: Value<String>,

    /// Any of `Email`, `SMS`
    pub contact_protocols: Option<List<String>>,

    pub datapoints_to_alarm: Option<Value<i64>>,
    pub evaluation_periods: Value<i64>,
    pub notification_enabled: Option<Value<bool>>,

    /// Any of `OK`, `ALARM`, `INSUFFICIENT_DATA`
    pub notification_triggers: Option<List<String>>,

    pub threshold: Value<f64>,

    /// One of `breaching`, `notBreaching`, `ignore`, `missing`
    pub treat_missing_data: Option<Value<String>>,
}
