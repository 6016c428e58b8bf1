use crate::intrinsic::Value;
use crate::tag::Tag;
use serde::{Deserialize, Serialize};

/// `AWS::Kendra::Index`
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-kendra-index.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Index {
    /// Length 0-1000
    pub description: Option<Value<String>>,

    /// One of `DEVELOPER_EDITION`, `ENTERPRISE_EDITION`. Update requires replacement.
    pub edition: Value<String>,

    /// Length 1-1000
    pub name: Value<String>,

    /// Role with permission to write to CloudWatch logs and metrics
    pub role_arn: Value<String>,

    /// Update requires replacement
    pub server_side_encryption_configuration: Option<Value<ServerSideEncryptionConfiguration>>,

    pub tags: Option<Value<Vec<Tag>>>,

    /// Up to 500 field definitions
    pub document_metadata_configurations: Option<Value<Vec<DocumentMetadataConfiguration>>>,

    /// Extra capacity on top of the edition default. Enterprise edition only.
    pub capacity_units: Option<Value<CapacityUnitsConfiguration>>,

    /// One of `ATTRIBUTE_FILTER`, `USER_TOKEN`
    pub user_context_policy: Option<Value<String>>,

    /// At most one configuration
    pub user_token_configurations: Option<Value<Vec<UserTokenConfiguration>>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ServerSideEncryptionConfiguration {
    /// Symmetric KMS key. Length 1-2048.
    pub kms_key_id: Option<Value<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CapacityUnitsConfiguration {
    /// Each unit adds 0.1 queries per second
    pub query_capacity_units: Value<i64>,

    /// Each unit adds 100,000 documents or 30 GB of storage
    pub storage_capacity_units: Value<i64>,
}

/// Index field definition: type, relevance tuning and search behaviour
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DocumentMetadataConfiguration {
    /// Length 1-30
    pub name: Value<String>,

    /// One of `STRING_VALUE`, `STRING_LIST_VALUE`, `LONG_VALUE`, `DATE_VALUE`
    #[serde(rename = "Type")]
    pub field_type: Value<String>,

    pub relevance: Option<Value<Relevance>>,
    pub search: Option<Value<Search>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Relevance {
    /// Only for `DATE_VALUE` fields
    pub freshness: Option<Value<bool>>,

    /// 1-10
    pub importance: Option<Value<i64>>,

    /// Seconds a date stays relevant, e.g. `86400s`. Length 1-10, pattern `[0-9]+[s]`.
    pub duration: Option<Value<String>>,

    /// One of `ASCENDING`, `DESCENDING`
    pub rank_order: Option<Value<String>>,

    pub value_importance_items: Option<Value<Vec<ValueImportanceItem>>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ValueImportanceItem {
    pub key: Option<Value<String>>,

    /// 1-10
    pub value: Option<Value<i64>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Search {
    pub facetable: Option<Value<bool>>,
    pub searchable: Option<Value<bool>>,
    pub displayable: Option<Value<bool>>,
    pub sortable: Option<Value<bool>>,
}

/// Token used for user context filtering, one of the two members is set
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct UserTokenConfiguration {
    pub jwt_token_type_configuration: Option<Value<JwtTokenTypeConfiguration>>,
    pub json_token_type_configuration: Option<Value<JsonTokenTypeConfiguration>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct JwtTokenTypeConfiguration {
    /// One of `URL`, `SECRET_MANAGER`
    pub key_location: Value<String>,

    /// JWKS URL, used with the `URL` key location
    #[serde(rename = "URL")]
    pub url: Option<Value<String>>,

    pub secret_manager_arn: Option<Value<String>>,
    pub user_name_attribute_field: Option<Value<String>>,
    pub group_attribute_field: Option<Value<String>>,
    pub issuer: Option<Value<String>>,
    pub claim_regex: Option<Value<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct JsonTokenTypeConfiguration {
    pub user_name_attribute_field: Value<String>,
    pub group_attribute_field: Value<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enterprise_index_with_metadata() {
        let index: Index = serde_json::from_value(json!({
            "Name": "knowledge-base",
            "Edition": "ENTERPRISE_EDITION",
            "RoleArn": {"Fn::GetAtt": ["IndexRole", "Arn"]},
            "CapacityUnits": {"QueryCapacityUnits": 1, "StorageCapacityUnits": 2},
            "DocumentMetadataConfigurations": [{
                "Name": "_last_updated_at",
                "Type": "DATE_VALUE",
                "Relevance": {"Freshness": true, "Importance": 5, "Duration": "2628000s"},
                "Search": {"Facetable": false, "Displayable": true}
            }],
            "UserTokenConfigurations": [{
                "JwtTokenTypeConfiguration": {
                    "KeyLocation": "URL",
                    "URL": "https://idp.example.com/.well-known/jwks.json"
                }
            }]
        }))
        .unwrap();

        let field = &index.document_metadata_configurations.as_ref().and_then(Value::literal).unwrap()[0];
        assert_eq!(field.field_type, Value::from("DATE_VALUE"));

        let jwt = index.user_token_configurations.as_ref().and_then(Value::literal).unwrap()[0]
            .jwt_token_type_configuration
            .as_ref()
            .and_then(Value::literal)
            .unwrap();
        assert!(jwt.url.is_some());
    }

    #[test]
    fn edition_is_required() {
        let index = json!({"Name": "kb", "RoleArn": "arn:aws:iam::123456789012:role/kendra"});
        assert!(serde_json::from_value::<Index>(index).is_err());
    }
}
