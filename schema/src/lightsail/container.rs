use super::Tag;
use crate::intrinsic::{List, Value};
use serde::{Deserialize, Serialize};

/// `AWS::Lightsail::Container`, a container service and its current deployment
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lightsail-container.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Container {
    /// Length 1-63, pattern `^[a-z0-9]{1,2}|[a-z0-9][a-z0-9-]+[a-z0-9]$`. Update requires replacement.
    pub service_name: Value<String>,

    /// One of `nano`, `micro`, `small`, `medium`, `large`, `xlarge`
    pub power: Value<String>,

    /// Number of nodes, 1-20
    pub scale: Value<i64>,

    pub is_disabled: Option<Value<bool>>,
    pub public_domain_names: Option<Value<Vec<PublicDomainName>>>,
    pub container_service_deployment: Option<Value<ContainerServiceDeployment>>,
    pub tags: Option<Value<Vec<Tag>>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct PublicDomainName {
    pub certificate_name: Option<Value<String>>,
    pub domain_names: Option<List<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ContainerServiceDeployment {
    pub containers: Option<Value<Vec<ContainerDefinition>>>,
    pub public_endpoint: Option<Value<PublicEndpoint>>,
}

/// One container of a deployment
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ContainerDefinition {
    pub container_name: Option<Value<String>>,

    /// Registry image, or a pushed image as `:service.label.version`
    pub image: Option<Value<String>>,

    pub command: Option<List<String>>,
    pub environment: Option<Value<Vec<EnvironmentVariable>>>,
    pub ports: Option<Value<Vec<PortInfo>>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct EnvironmentVariable {
    pub variable: Option<Value<String>>,
    pub value: Option<Value<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct PortInfo {
    pub port: Option<Value<String>>,

    /// One of `HTTP`, `HTTPS`, `TCP`, `UDP`
    pub protocol: Option<Value<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct PublicEndpoint {
    pub container_name: Option<Value<String>>,
    pub container_port: Option<Value<i64>>,
    pub health_check_config: Option<Value<HealthCheckConfig>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct HealthCheckConfig {
    /// 2-10, defaults to 2
    pub healthy_threshold: Option<Value<i64>>,

    /// 5-300, defaults to 5
    pub interval_seconds: Option<Value<i64>>,

    /// Defaults to `/`
    pub path: Option<Value<String>>,

    /// e.g. `200-499`, defaults to `200-499`
    pub success_codes: Option<Value<String>>,

    /// 2-60, defaults to 2
    pub timeout_seconds: Option<Value<i64>>,

    /// 2-10, defaults to 2
    pub unhealthy_threshold: Option<Value<i64>>,
}
