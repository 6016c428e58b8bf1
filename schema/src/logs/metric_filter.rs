use crate::intrinsic::Value;
use serde::{Deserialize, Serialize};

/// `AWS::Logs::MetricFilter`, publishes a metric for log events matching a pattern
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-logs-metricfilter.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct MetricFilter {
    /// Length 1-512. Update requires replacement.
    pub filter_name: Option<Value<String>>,

    /// Filter and pattern syntax, length up to 1024
    pub filter_pattern: Value<String>,

    /// Update requires replacement
    pub log_group_name: Value<String>,

    /// Exactly one transformation
    pub metric_transformations: Vec<MetricTransformation>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct MetricTransformation {
    /// Published when the pattern does not match. Not allowed with `Dimensions`.
    pub default_value: Option<Value<f64>>,

    /// Up to 3 dimensions taken from fields of the log event
    pub dimensions: Option<Value<Vec<Dimension>>>,

    pub metric_name: Value<String>,
    pub metric_namespace: Value<String>,

    /// Number or a `$.field` selector, e.g. `1` or `$.latency`
    pub metric_value: Value<String>,

    /// CloudWatch unit, e.g. `Seconds`, `Bytes`, `Count`, `Percent`, `None`
    pub unit: Option<Value<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Dimension {
    pub key: Value<String>,

    /// Field selector, e.g. `$.requestId`
    pub value: Value<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metric_value_is_a_string() {
        let transformation = json!({
            "MetricName": "Errors",
            "MetricNamespace": "App",
            "MetricValue": 1
        });

        assert!(serde_json::from_value::<MetricTransformation>(transformation).is_err());

        let filter: MetricFilter = serde_json::from_value(json!({
            "FilterPattern": "{ $.level = \"error\" }",
            "LogGroupName": {"Ref": "AppLogs"},
            "MetricTransformations": [{
                "MetricName": "Errors",
                "MetricNamespace": "App",
                "MetricValue": "1",
                "DefaultValue": 0,
                "Unit": "Count"
            }]
        }))
        .unwrap();

        assert_eq!(filter.metric_transformations[0].default_value, Some(Value::from(0.0)));
    }
}
