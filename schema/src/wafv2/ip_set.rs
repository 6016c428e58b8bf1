use super::Tag;
use crate::intrinsic::{List, Value};
use serde::{Deserialize, Serialize};

/// `AWS::WAFv2::IPSet`
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-wafv2-ipset.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct IpSet {
    /// Length 1-128. Update requires replacement.
    pub name: Option<Value<String>>,

    pub description: Option<Value<String>>,

    /// One of `CLOUDFRONT`, `REGIONAL`. Update requires replacement.
    pub scope: Value<String>,

    /// One of `IPV4`, `IPV6`
    #[serde(rename = "IPAddressVersion")]
    pub ip_address_version: Value<String>,

    /// CIDR ranges, may be empty
    pub addresses: List<String>,

    pub tags: Option<Value<Vec<Tag>>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn addresses_from_a_parameter() {
        let set: IpSet = serde_json::from_value(json!({
            "Scope": "REGIONAL",
            "IPAddressVersion": "IPV4",
            "Addresses": {"Ref": "OfficeRanges"}
        }))
        .unwrap();

        assert!(set.addresses.is_intrinsic());

        let missing = json!({"Scope": "REGIONAL", "IPAddressVersion": "IPV4"});
        assert!(serde_json::from_value::<IpSet>(missing).is_err());
    }

    #[test]
    fn tags_may_leave_out_key_or_value() {
        let set: IpSet = serde_json::from_value(json!({
            "Scope": "CLOUDFRONT",
            "IPAddressVersion": "IPV4",
            "Addresses": [],
            "Tags": [{"Key": "env"}, {"Value": "orphan"}, {}]
        }))
        .unwrap();

        let tags = set.tags.and_then(Value::into_literal).unwrap();
        assert_eq!(tags[0].key, Some(Value::from("env")));
        assert_eq!(tags[1].key, None);
        assert_eq!(tags[2], Tag::default());
    }
}
