//! Amazon Kendra resource types

mod data_source;
mod faq;
mod index;

pub use data_source::*;
pub use faq::*;
pub use index::*;

use crate::intrinsic::Value;
use serde::{Deserialize, Serialize};

/// Location of a file in S3, shared by FAQs and data sources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct S3Path {
    /// Length 3-63, pattern `[a-z0-9][\.\-a-z0-9]{1,61}[a-z0-9]`
    pub bucket: Value<String>,

    /// Length 1-1024
    pub key: Value<String>,
}
