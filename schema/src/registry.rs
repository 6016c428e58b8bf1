//! Lookup of property shapes by CloudFormation type name

use crate::intrinsic::Json;
use crate::{kendra, lightsail, logs, wafv2};
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};

/// A catalogued resource type, implemented by its properties record
pub trait Resource: Serialize + DeserializeOwned + Default {
    /// e.g. `AWS::Logs::LogGroup`
    const TYPE_NAME: &'static str;
}

macro_rules! catalog {
    ($($variant:ident => $ty:ty = $name:literal,)*) => {
        $(
            impl Resource for $ty {
                const TYPE_NAME: &'static str = $name;
            }
        )*

        /// Properties of any catalogued resource
        #[derive(Debug, Clone, PartialEq)]
        pub enum Properties {
            $($variant(Box<$ty>),)*
        }

        /// Every catalogued type name, grouped by service
        pub const TYPE_NAMES: &[&str] = &[$($name,)*];

        impl Properties {
            pub fn type_name(&self) -> &'static str {
                match self {
                    $(Properties::$variant(_) => <$ty as Resource>::TYPE_NAME,)*
                }
            }

            /// Deserialize a property bag into the shape registered for the type
            ///
            /// Returns `None` when the type is not catalogued.
            pub fn parse(type_name: &str, properties: Json) -> Result<Option<Self>, serde_json::Error> {
                let parsed = match type_name {
                    $($name => Properties::$variant(Box::new(serde_json::from_value(properties)?)),)*
                    _ => return Ok(None),
                };

                Ok(Some(parsed))
            }

            /// Default properties of the type, only required properties are present
            pub fn skeleton(type_name: &str) -> Result<Option<Json>, serde_json::Error> {
                match type_name {
                    $($name => serde_json::to_value(<$ty>::default()).map(Some),)*
                    _ => Ok(None),
                }
            }
        }

        impl Serialize for Properties {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    $(Properties::$variant(properties) => properties.serialize(serializer),)*
                }
            }
        }
    };
}

catalog! {
    KendraDataSource => kendra::DataSource = "AWS::Kendra::DataSource",
    KendraFaq => kendra::Faq = "AWS::Kendra::Faq",
    KendraIndex => kendra::Index = "AWS::Kendra::Index",

    LightsailAlarm => lightsail::Alarm = "AWS::Lightsail::Alarm",
    LightsailBucket => lightsail::Bucket = "AWS::Lightsail::Bucket",
    LightsailCertificate => lightsail::Certificate = "AWS::Lightsail::Certificate",
    LightsailContainer => lightsail::Container = "AWS::Lightsail::Container",
    LightsailDatabase => lightsail::Database = "AWS::Lightsail::Database",
    LightsailDisk => lightsail::Disk = "AWS::Lightsail::Disk",
    LightsailDistribution => lightsail::Distribution = "AWS::Lightsail::Distribution",
    LightsailInstance => lightsail::Instance = "AWS::Lightsail::Instance",
    LightsailLoadBalancer => lightsail::LoadBalancer = "AWS::Lightsail::LoadBalancer",
    LightsailLoadBalancerTlsCertificate => lightsail::LoadBalancerTlsCertificate = "AWS::Lightsail::LoadBalancerTlsCertificate",
    LightsailStaticIp => lightsail::StaticIp = "AWS::Lightsail::StaticIp",

    LogsDestination => logs::Destination = "AWS::Logs::Destination",
    LogsLogGroup => logs::LogGroup = "AWS::Logs::LogGroup",
    LogsLogStream => logs::LogStream = "AWS::Logs::LogStream",
    LogsMetricFilter => logs::MetricFilter = "AWS::Logs::MetricFilter",
    LogsQueryDefinition => logs::QueryDefinition = "AWS::Logs::QueryDefinition",
    LogsResourcePolicy => logs::ResourcePolicy = "AWS::Logs::ResourcePolicy",
    LogsSubscriptionFilter => logs::SubscriptionFilter = "AWS::Logs::SubscriptionFilter",

    Wafv2IpSet => wafv2::IpSet = "AWS::WAFv2::IPSet",
    Wafv2LoggingConfiguration => wafv2::LoggingConfiguration = "AWS::WAFv2::LoggingConfiguration",
    Wafv2RegexPatternSet => wafv2::RegexPatternSet = "AWS::WAFv2::RegexPatternSet",
    Wafv2RuleGroup => wafv2::RuleGroup = "AWS::WAFv2::RuleGroup",
    Wafv2WebAcl => wafv2::WebAcl = "AWS::WAFv2::WebACL",
    Wafv2WebAclAssociation => wafv2::WebAclAssociation = "AWS::WAFv2::WebACLAssociation",
}

/// Catalogued type names
pub fn type_names() -> impl Iterator<Item = &'static str> {
    TYPE_NAMES.iter().copied()
}

/// The service part of a type name, e.g. `Logs` for `AWS::Logs::LogGroup`
pub fn service(type_name: &str) -> Option<&str> {
    let mut parts = type_name.split("::");

    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(service), Some(_), None) => Some(service),
        _ => None,
    }
}

/// Catalogued services, in catalog order
pub fn services() -> Vec<&'static str> {
    let mut services: Vec<&'static str> = vec![];

    for service in type_names().filter_map(service) {
        if !services.contains(&service) {
            services.push(service);
        }
    }

    services
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_catalogued_types() {
        let properties = Properties::parse(
            "AWS::Logs::LogStream",
            json!({"LogGroupName": {"Ref": "Group"}, "LogStreamName": "app"}),
        )
        .unwrap()
        .unwrap();

        assert_eq!(properties.type_name(), "AWS::Logs::LogStream");
        assert!(matches!(properties, Properties::LogsLogStream(_)));
    }

    #[test]
    fn unknown_types_are_not_an_error() {
        let parsed = Properties::parse("AWS::S3::Bucket", json!({"BucketName": "x"})).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn missing_required_property() {
        let error = Properties::parse("AWS::WAFv2::WebACLAssociation", json!({"ResourceArn": "arn"}))
            .unwrap_err();

        assert!(error.to_string().contains("WebACLArn"), "{error}");
    }

    #[test]
    fn serializes_as_the_inner_properties() {
        let bag = json!({"Name": "ip", "Scope": "REGIONAL", "IPAddressVersion": "IPV6", "Addresses": []});
        let properties = Properties::parse("AWS::WAFv2::IPSet", bag.clone()).unwrap().unwrap();

        assert_eq!(serde_json::to_value(&properties).unwrap(), bag);
    }

    #[test]
    fn skeleton_shows_required_properties() {
        let skeleton = Properties::skeleton("AWS::Lightsail::StaticIp").unwrap().unwrap();
        assert_eq!(skeleton, json!({"StaticIpName": ""}));

        assert!(Properties::skeleton("AWS::Lambda::Function").unwrap().is_none());
    }

    #[test]
    fn every_skeleton_parses_back() {
        for type_name in type_names() {
            let skeleton = Properties::skeleton(type_name).unwrap().unwrap();
            let properties = Properties::parse(type_name, skeleton.clone())
                .unwrap_or_else(|e| panic!("{type_name}: {e}"))
                .unwrap();

            assert_eq!(properties.type_name(), type_name);
            assert_eq!(serde_json::to_value(&properties).unwrap(), skeleton, "{type_name}");
        }
    }

    #[test]
    fn rule_group_skeleton() {
        let skeleton = Properties::skeleton("AWS::WAFv2::RuleGroup").unwrap().unwrap();

        assert_eq!(
            skeleton,
            json!({
                "Scope": "",
                "Capacity": 0,
                "VisibilityConfig": {
                    "SampledRequestsEnabled": false,
                    "CloudWatchMetricsEnabled": false,
                    "MetricName": ""
                }
            })
        );
    }

    #[test]
    fn type_names_are_unique_and_match_their_service() {
        let mut names: Vec<_> = type_names().collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TYPE_NAMES.len());

        assert_eq!(services(), vec!["Kendra", "Lightsail", "Logs", "WAFv2"]);
        assert_eq!(service("AWS::WAFv2::WebACL"), Some("WAFv2"));
        assert_eq!(service("Custom"), None);
    }
}
