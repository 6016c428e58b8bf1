use cfn_shapes_schema::registry::Properties;
use cfn_shapes_schema::{CheckOptions, DiagnosticKind, Intrinsic, Template, Value};

const WAF_STACK: &str = r#"
AWSTemplateFormatVersion: "2010-09-09"
Parameters:
  LoadBalancerArn:
    Type: String
Resources:
  BlockedAddresses:
    Type: AWS::WAFv2::IPSet
    Properties:
      Scope: REGIONAL
      IPAddressVersion: IPV4
      Addresses:
        - 192.0.2.0/24
  Acl:
    Type: AWS::WAFv2::WebACL
    Properties:
      Name: !Sub "${AWS::StackName}-acl"
      Scope: REGIONAL
      DefaultAction:
        Allow: {}
      VisibilityConfig:
        SampledRequestsEnabled: true
        CloudWatchMetricsEnabled: true
        MetricName: acl
      Rules:
        - Name: Blocked
          Priority: 0
          Action:
            Block: {}
          Statement:
            IPSetReferenceStatement:
              Arn: !GetAtt BlockedAddresses.Arn
          VisibilityConfig:
            SampledRequestsEnabled: true
            CloudWatchMetricsEnabled: true
            MetricName: blocked
        - Name: Common
          Priority: 1
          OverrideAction:
            None: {}
          Statement:
            ManagedRuleGroupStatement:
              VendorName: AWS
              Name: AWSManagedRulesCommonRuleSet
          VisibilityConfig:
            SampledRequestsEnabled: true
            CloudWatchMetricsEnabled: true
            MetricName: common
  Association:
    Type: AWS::WAFv2::WebACLAssociation
    Properties:
      ResourceArn: !Ref LoadBalancerArn
      WebACLArn: !GetAtt [Acl, Arn]
  WafLogs:
    Type: AWS::Logs::LogGroup
    DeletionPolicy: Retain
    Properties:
      LogGroupName: aws-waf-logs-acl
      RetentionInDays: 30
  Logging:
    Type: AWS::WAFv2::LoggingConfiguration
    DependsOn: Acl
    Properties:
      ResourceArn: !GetAtt Acl.Arn
      LogDestinationConfigs:
        - !GetAtt WafLogs.Arn
"#;

#[test]
fn waf_stack_from_yaml() {
    let template = Template::from_yaml(WAF_STACK).unwrap();
    let report = template.check(&CheckOptions::default());

    assert!(report.is_ok(), "{:#?}", report.diagnostics);
    assert_eq!(report.checked, 5);
    assert_eq!(report.unchecked, 0);

    let logical_ids: Vec<_> = template.resources().map(|(id, _)| id).collect();
    assert_eq!(
        logical_ids,
        vec!["BlockedAddresses", "Acl", "Association", "WafLogs", "Logging"]
    );
}

#[test]
fn waf_stack_typed_access() {
    let template = Template::from_yaml(WAF_STACK).unwrap();
    let acl = template.resource("Acl").unwrap();

    let properties = Properties::parse(&acl.type_name, acl.properties.clone().unwrap())
        .unwrap()
        .unwrap();

    let Properties::Wafv2WebAcl(acl) = properties else {
        panic!("expected a web ACL, got {}", properties.type_name());
    };

    let rules = acl.rules.and_then(Value::into_literal).unwrap();
    assert_eq!(rules.len(), 2);
    assert!(rules[0].statement.ip_set_reference_statement.is_some());
    assert!(rules[1].statement.managed_rule_group_statement.is_some());
}

#[test]
fn lightsail_instance_from_json() {
    let template = Template::from_json(
        r#"{
            "Resources": {
                "Web": {
                    "Type": "AWS::Lightsail::Instance",
                    "Properties": {
                        "InstanceName": "web",
                        "BlueprintId": "amazon_linux_2023",
                        "BundleId": "nano_3_0",
                        "Networking": {
                            "Ports": [
                                {"FromPort": 443, "ToPort": 443, "Protocol": "tcp"}
                            ]
                        },
                        "Tags": [{"Key": "team", "Value": "web"}]
                    }
                },
                "Ip": {
                    "Type": "AWS::Lightsail::StaticIp",
                    "Properties": {
                        "StaticIpName": "web-ip",
                        "AttachedTo": {"Ref": "Web"}
                    }
                }
            }
        }"#,
    )
    .unwrap();

    let report = template.check(&CheckOptions::default());
    assert!(report.is_ok(), "{:#?}", report.diagnostics);
    assert_eq!(report.checked, 2);
}

#[test]
fn conditional_tags_and_networking() {
    let template = Template::from_yaml(
        r#"
Parameters:
  Env:
    Type: String
Conditions:
  IsProd: !Equals [!Ref Env, prod]
Resources:
  Web:
    Type: AWS::Lightsail::Instance
    Properties:
      InstanceName: web
      BlueprintId: amazon_linux_2023
      BundleId: nano_3_0
      Networking: !If
        - IsProd
        - Ports:
            - FromPort: 443
              ToPort: 443
              Protocol: tcp
        - !Ref AWS::NoValue
      Tags: !If [IsProd, [{Key: env, Value: prod}], !Ref AWS::NoValue]
"#,
    )
    .unwrap();

    let report = template.check(&CheckOptions::default());
    assert!(report.is_ok(), "{:#?}", report.diagnostics);

    let web = template.resource("Web").unwrap();
    let properties = Properties::parse(&web.type_name, web.properties.clone().unwrap())
        .unwrap()
        .unwrap();

    let Properties::LightsailInstance(instance) = properties else {
        panic!("expected an instance, got {}", properties.type_name());
    };

    assert!(matches!(instance.tags, Some(Value::Intrinsic(Intrinsic::If(..)))));
    assert!(instance.networking.is_some_and(|networking| networking.is_intrinsic()));
}

#[test]
fn reports_every_problem_in_one_pass() {
    let template = Template::from_json(
        r#"{
            "Resources": {
                "Index": {
                    "Type": "AWS::Kendra::Index",
                    "Properties": {"Name": "docs", "Edition": "DEVELOPER_EDITION"}
                },
                "Faq": {
                    "Type": "AWS::Kendra::Faq",
                    "Properties": {
                        "IndexId": {"Ref": "Index"},
                        "Name": "faq",
                        "RoleArn": {"Fn::GetAtt": ["FaqRole", "Arn"]},
                        "S3Path": {"Bucket": "docs", "Key": "faq.csv"}
                    }
                },
                "Queue": {"Type": "AWS::SQS::Queue"}
            }
        }"#,
    )
    .unwrap();

    let report = template.check(&CheckOptions {
        deny_unknown_types: true,
        ..Default::default()
    });

    let kinds: Vec<_> = report
        .diagnostics
        .iter()
        .map(|diagnostic| (diagnostic.logical_id.as_str(), diagnostic.kind))
        .collect();

    assert_eq!(
        kinds,
        vec![
            ("Index", DiagnosticKind::InvalidProperties),
            ("Faq", DiagnosticKind::DanglingReference),
            ("Queue", DiagnosticKind::UnknownType),
        ]
    );
    assert!(report.diagnostics[0].message.contains("RoleArn"));
}
