//! Amazon CloudWatch Logs resource types

mod destination;
mod log_group;
mod log_stream;
mod metric_filter;
mod query_definition;
mod resource_policy;
mod subscription_filter;

pub use destination::*;
pub use log_group::*;
pub use log_stream::*;
pub use metric_filter::*;
pub use query_definition::*;
pub use resource_policy::*;
pub use subscription_filter::*;
