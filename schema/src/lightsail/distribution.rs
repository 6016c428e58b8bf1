use super::Tag;
use crate::intrinsic::{List, Value};
use serde::{Deserialize, Serialize};

/// `AWS::Lightsail::Distribution`, a content delivery network in front of an origin
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-lightsail-distribution.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Distribution {
    /// Pattern `\w[\w\-]*\w`. Update requires replacement.
    pub distribution_name: Value<String>,

    /// e.g. `small_1_0`
    pub bundle_id: Value<String>,

    /// One of `dualstack`, `ipv4`. Update requires replacement.
    pub ip_address_type: Option<Value<String>>,

    /// Per-path overrides of the default behavior
    pub cache_behaviors: Option<Value<Vec<CacheBehaviorPerPath>>>,

    pub cache_behavior_settings: Option<Value<CacheSettings>>,
    pub default_cache_behavior: CacheBehavior,
    pub origin: InputOrigin,
    pub is_enabled: Option<Value<bool>>,
    pub certificate_name: Option<Value<String>>,
    pub tags: Option<Value<Vec<Tag>>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CacheBehavior {
    /// One of `dont-cache`, `cache`
    pub behavior: Option<Value<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CacheBehaviorPerPath {
    /// One of `dont-cache`, `cache`
    pub behavior: Option<Value<String>>,

    /// Path or file pattern, e.g. `images/*`
    pub path: Option<Value<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CacheSettings {
    /// One of `GET,HEAD`, `GET,HEAD,OPTIONS`, `GET,HEAD,OPTIONS,PUT,PATCH,POST,DELETE`
    #[serde(rename = "AllowedHTTPMethods")]
    pub allowed_http_methods: Option<Value<String>>,

    /// One of `GET,HEAD`, `GET,HEAD,OPTIONS`
    #[serde(rename = "CachedHTTPMethods")]
    pub cached_http_methods: Option<Value<String>>,

    #[serde(rename = "DefaultTTL")]
    pub default_ttl: Option<Value<i64>>,

    #[serde(rename = "MaximumTTL")]
    pub maximum_ttl: Option<Value<i64>>,

    #[serde(rename = "MinimumTTL")]
    pub minimum_ttl: Option<Value<i64>>,

    pub forwarded_cookies: Option<Value<CookieObject>>,
    pub forwarded_headers: Option<Value<HeaderObject>>,
    pub forwarded_query_strings: Option<Value<QueryStringObject>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CookieObject {
    pub cookies_allow_list: Option<List<String>>,

    /// One of `none`, `allow-list`, `all`
    pub option: Option<Value<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct HeaderObject {
    /// e.g. `Accept`, `Accept-Language`, `Host`, `Origin`, `Referer`
    pub headers_allow_list: Option<List<String>>,

    /// One of `none`, `allow-list`, `all`
    pub option: Option<Value<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct QueryStringObject {
    /// Whether query strings are forwarded at all
    pub option: Option<Value<bool>>,

    pub query_strings_allow_list: Option<List<String>>,
}

/// Instance, bucket or load balancer the distribution pulls content from
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct InputOrigin {
    pub name: Option<Value<String>>,

    /// One of `http-only`, `https-only`
    pub protocol_policy: Option<Value<String>>,

    pub region_name: Option<Value<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ttl_and_http_method_wire_names() {
        let settings = CacheSettings {
            allowed_http_methods: Some("GET,HEAD".into()),
            default_ttl: Some(Value::from(86400)),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            json!({"AllowedHTTPMethods": "GET,HEAD", "DefaultTTL": 86400})
        );
    }

    #[test]
    fn distribution_requires_origin_and_default_behavior() {
        let distribution = json!({
            "DistributionName": "cdn",
            "BundleId": "small_1_0",
            "DefaultCacheBehavior": {"Behavior": "cache"}
        });

        let error = serde_json::from_value::<Distribution>(distribution)
            .unwrap_err()
            .to_string();

        assert!(error.contains("Origin"), "{error}");
    }
}
