use crate::intrinsic::Value;
use serde::{Deserialize, Serialize};

/// `AWS::Logs::SubscriptionFilter`, streams matching log events to a destination
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-logs-subscriptionfilter.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SubscriptionFilter {
    /// Update requires replacement
    pub filter_name: Option<Value<String>>,

    /// Kinesis stream, Firehose delivery stream, Lambda function or logs destination
    pub destination_arn: Value<String>,

    pub filter_pattern: Value<String>,

    /// Update requires replacement
    pub log_group_name: Value<String>,

    /// Role allowing CloudWatch Logs to deliver to the destination, not used for Lambda
    pub role_arn: Option<Value<String>>,

    /// One of `ByLogStream`, `Random`. Only for Kinesis data stream destinations.
    pub distribution: Option<Value<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lambda_subscription() {
        let filter: SubscriptionFilter = serde_json::from_value(json!({
            "DestinationArn": {"Fn::GetAtt": ["Shipper", "Arn"]},
            "FilterPattern": "",
            "LogGroupName": {"Ref": "AppLogs"}
        }))
        .unwrap();

        assert_eq!(filter.filter_pattern, Value::from(""));
        assert!(filter.role_arn.is_none());
        assert!(filter.distribution.is_none());
    }

    #[test]
    fn kinesis_subscription_with_distribution() {
        let filter: SubscriptionFilter = serde_json::from_value(json!({
            "FilterName": "all",
            "DestinationArn": "arn:aws:kinesis:us-east-1:123456789012:stream/logs",
            "FilterPattern": "[level = ERROR, ...]",
            "LogGroupName": "/app",
            "RoleArn": "arn:aws:iam::123456789012:role/logs-to-kinesis",
            "Distribution": "Random"
        }))
        .unwrap();

        assert_eq!(filter.distribution, Some(Value::from("Random")));
    }

    #[test]
    fn filter_pattern_is_required() {
        let filter = json!({"DestinationArn": "arn", "LogGroupName": "/app"});
        assert!(serde_json::from_value::<SubscriptionFilter>(filter).is_err());
    }
}
