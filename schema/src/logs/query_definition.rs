use crate::intrinsic::{List, Value};
use serde::{Deserialize, Serialize};

/// `AWS::Logs::QueryDefinition`, a saved Logs Insights query
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-logs-querydefinition.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct QueryDefinition {
    /// Length 1-255, `/` separates folders
    pub name: Value<String>,

    /// Length 1-10000
    pub query_string: Value<String>,

    /// Log groups the query runs against by default
    pub log_group_names: Option<List<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn saved_query_in_a_folder() {
        let query: QueryDefinition = serde_json::from_value(json!({
            "Name": "errors/recent",
            "QueryString": "fields @timestamp, @message | filter level = 'error' | sort @timestamp desc",
            "LogGroupNames": [{"Ref": "AppLogs"}, "/aws/lambda/worker"]
        }))
        .unwrap();

        let groups = query.log_group_names.and_then(Value::into_literal).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1], Value::from("/aws/lambda/worker"));
    }

    #[test]
    fn query_string_is_required() {
        let query = json!({"Name": "errors/recent"});
        assert!(serde_json::from_value::<QueryDefinition>(query).is_err());
    }
}
