use super::S3Path;
use crate::intrinsic::Value;
use crate::tag::Tag;
use serde::{Deserialize, Serialize};

/// `AWS::Kendra::Faq`, a set of frequently asked questions loaded from S3
///
/// Every property except `Tags` requires replacement on update.
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-kendra-faq.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Faq {
    /// Length 36-36
    pub index_id: Value<String>,

    /// Length 1-100, pattern `[a-zA-Z0-9][a-zA-Z0-9_-]*`
    pub name: Value<String>,

    /// Length 1-1000
    pub description: Option<Value<String>>,

    /// One of `CSV`, `CSV_WITH_HEADER`, `JSON`
    pub file_format: Option<Value<String>>,

    /// Role with permission to read the FAQ file
    pub role_arn: Value<String>,

    pub s3_path: S3Path,
    pub tags: Option<Value<Vec<Tag>>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn faq_requires_s3_path() {
        let faq = json!({
            "IndexId": {"Ref": "Index"},
            "Name": "support",
            "RoleArn": {"Fn::GetAtt": "FaqRole.Arn"},
            "FileFormat": "CSV_WITH_HEADER"
        });

        let error = serde_json::from_value::<Faq>(faq.clone()).unwrap_err().to_string();
        assert!(error.contains("S3Path"), "{error}");

        let mut faq = faq;
        faq["S3Path"] = json!({"Bucket": "faq-files", "Key": "support.csv"});
        assert!(serde_json::from_value::<Faq>(faq).is_ok());
    }
}
