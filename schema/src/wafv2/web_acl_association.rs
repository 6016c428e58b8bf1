use crate::intrinsic::Value;
use serde::{Deserialize, Serialize};

/// `AWS::WAFv2::WebACLAssociation`
///
/// Attaches a regional web ACL to a load balancer, API stage, AppSync API or Cognito
/// user pool. CloudFront distributions reference the web ACL directly instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct WebAclAssociation {
    pub resource_arn: Value<String>,

    #[serde(rename = "WebACLArn")]
    pub web_acl_arn: Value<String>,
}
