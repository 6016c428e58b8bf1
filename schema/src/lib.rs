//! Property shapes of AWS CloudFormation resources
//!
//! Every catalogued resource type is a serde record named after the type, e.g.
//! [`logs::LogGroup`] for `AWS::Logs::LogGroup`. Any property may hold an intrinsic
//! function instead of a literal, see [`Value`].

pub mod attributes;
pub mod intrinsic;
pub mod kendra;
pub mod lightsail;
pub mod logs;
pub mod registry;
pub mod tag;
pub mod template;
pub mod wafv2;

pub use attributes::{DeletionPolicy, DependsOn, ResourceAttributes};
pub use intrinsic::{Intrinsic, Json, List, Value};
pub use registry::{Properties, Resource};
pub use tag::Tag;
pub use template::{CheckOptions, Declaration, Diagnostic, DiagnosticKind, Report, Template};
