//! AWS WAFv2 resource types
//!
//! Rule groups and web ACLs share the statement model in [`statement`], which differs
//! only in the statement kinds a web ACL adds.

pub mod action;
mod ip_set;
mod logging_configuration;
mod regex_pattern_set;
pub mod rule_group;
pub mod statement;
pub mod web_acl;
mod web_acl_association;

pub use ip_set::*;
pub use logging_configuration::*;
pub use regex_pattern_set::*;
pub use rule_group::RuleGroup;
pub use web_acl::WebAcl;
pub use web_acl_association::*;

use crate::intrinsic::Value;
use serde::{Deserialize, Serialize};

/// A WAFv2 tag, both members are optional
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Tag {
    pub key: Option<Value<String>>,
    pub value: Option<Value<String>>,
}
