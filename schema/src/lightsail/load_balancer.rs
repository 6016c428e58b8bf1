use super::Tag;
use crate::intrinsic::{List, Value};
use serde::{Deserialize, Serialize};

/// `AWS::Lightsail::LoadBalancer`
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lightsail-loadbalancer.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct LoadBalancer {
    /// Pattern `\w[\w\-]*\w`. Update requires replacement.
    pub load_balancer_name: Value<String>,

    /// Instance port traffic is forwarded to, 0-65535. Update requires replacement.
    pub instance_port: Value<i64>,

    /// One of `dualstack`, `ipv4`. Update requires replacement.
    pub ip_address_type: Option<Value<String>>,

    /// Names of the instances behind the load balancer
    pub attached_instances: Option<List<String>>,

    /// Defaults to `/`
    pub health_check_path: Option<Value<String>>,

    pub session_stickiness_enabled: Option<Value<bool>>,

    /// Cookie lifetime in seconds, as a string
    #[serde(rename = "SessionStickinessLBCookieDurationSeconds")]
    pub session_stickiness_lb_cookie_duration_seconds: Option<Value<String>>,

    /// e.g. `TLS-2016-08`, `TLS-FS-Res-1-2-2019-08`
    pub tls_policy_name: Option<Value<String>>,

    pub tags: Option<Value<Vec<Tag>>>,
}

/// `AWS::Lightsail::LoadBalancerTlsCertificate`
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lightsail-loadbalancertlscertificate.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct LoadBalancerTlsCertificate {
    /// Update requires replacement
    pub load_balancer_name: Value<String>,

    /// Update requires replacement
    pub certificate_name: Value<String>,

    /// Update requires replacement
    pub certificate_domain_name: Value<String>,

    /// Update requires replacement
    pub certificate_alternative_names: Option<List<String>>,

    /// Whether the certificate is the one used by the load balancer
    pub is_attached: Option<Value<bool>>,

    pub https_redirection_enabled: Option<Value<bool>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cookie_duration_wire_name() {
        let balancer: LoadBalancer = serde_json::from_value(json!({
            "LoadBalancerName": "web",
            "InstancePort": 80,
            "SessionStickinessEnabled": true,
            "SessionStickinessLBCookieDurationSeconds": "3600"
        }))
        .unwrap();

        assert_eq!(
            balancer.session_stickiness_lb_cookie_duration_seconds,
            Some(Value::from("3600"))
        );
    }
}
