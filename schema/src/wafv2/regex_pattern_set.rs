use super::Tag;
use crate::intrinsic::{List, Value};
use serde::{Deserialize, Serialize};

/// `AWS::WAFv2::RegexPatternSet`
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-wafv2-regexpatternset.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct RegexPatternSet {
    /// Update requires replacement
    pub name: Option<Value<String>>,

    pub description: Option<Value<String>>,

    /// One of `CLOUDFRONT`, `REGIONAL`
    pub scope: Value<String>,

    pub regular_expression_list: List<String>,
    pub tags: Option<Value<Vec<Tag>>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn patterns_with_tags() {
        let set: RegexPatternSet = serde_json::from_value(json!({
            "Name": "bad-agents",
            "Scope": "REGIONAL",
            "RegularExpressionList": ["^curl/", "(?i)sqlmap"],
            "Tags": [{"Key": "owner", "Value": "security"}]
        }))
        .unwrap();

        let patterns = set.regular_expression_list.literal().unwrap();
        assert_eq!(patterns[1], Value::from("(?i)sqlmap"));

        let tags = set.tags.and_then(Value::into_literal).unwrap();
        assert_eq!(tags[0].value, Some(Value::from("security")));
    }

    #[test]
    fn pattern_list_is_required() {
        let set = json!({"Name": "bad-agents", "Scope": "REGIONAL"});
        assert!(serde_json::from_value::<RegexPatternSet>(set).is_err());
    }
}
