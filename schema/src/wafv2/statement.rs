//! Rule statements, shared by rule groups and web ACLs
//!
//! A statement is recursive through `And`, `Or`, `Not` and rate-based scope-down
//! statements. Web ACLs accept two more kinds of statement than rule groups do, which is
//! expressed by the [`StatementContext`] type parameter.
//!
//! https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-wafv2-rulegroup-statement.html

use super::action::RuleActionOverride;
use crate::intrinsic::{List, Value};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::Debug;

/// Where a statement is declared, decides which statement kinds are available
pub trait StatementContext: Debug + Clone + PartialEq + Default {
    type ManagedRuleGroup: Debug + Clone + PartialEq + Serialize + DeserializeOwned;
    type RuleGroupReference: Debug + Clone + PartialEq + Serialize + DeserializeOwned;
}

/// Statements inside an `AWS::WAFv2::RuleGroup`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleGroupContext;

/// Statements inside an `AWS::WAFv2::WebACL`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebAclContext;

impl StatementContext for RuleGroupContext {
    type ManagedRuleGroup = Unsupported;
    type RuleGroupReference = Unsupported;
}

impl StatementContext for WebAclContext {
    type ManagedRuleGroup = ManagedRuleGroupStatement;
    type RuleGroupReference = RuleGroupReferenceStatement;
}

/// A statement kind that cannot appear in the current context
///
/// Has no values, so the only thing it can do is fail deserialization.
#[derive(Debug, Clone, PartialEq)]
pub enum Unsupported {}

impl Serialize for Unsupported {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        match *self {}
    }
}

impl<'de> Deserialize<'de> for Unsupported {
    fn deserialize<D: Deserializer<'de>>(_deserializer: D) -> Result<Self, D::Error> {
        Err(de::Error::custom(
            "managed rule group and rule group reference statements are only allowed in a web ACL",
        ))
    }
}

/// A statement of a rule group rule
pub type RuleGroupStatement = Statement<RuleGroupContext>;

/// A statement of a web ACL rule
pub type WebAclStatement = Statement<WebAclContext>;

/// Exactly one member is set
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields, bound = "")]
pub struct Statement<C: StatementContext> {
    pub byte_match_statement: Option<Value<ByteMatchStatement>>,
    pub sqli_match_statement: Option<Value<SqliMatchStatement>>,
    pub xss_match_statement: Option<Value<XssMatchStatement>>,
    pub size_constraint_statement: Option<Value<SizeConstraintStatement>>,
    pub geo_match_statement: Option<Value<GeoMatchStatement>>,

    #[serde(rename = "IPSetReferenceStatement")]
    pub ip_set_reference_statement: Option<Value<IpSetReferenceStatement>>,

    pub regex_pattern_set_reference_statement: Option<Value<RegexPatternSetReferenceStatement>>,
    pub rate_based_statement: Option<Value<RateBasedStatement<C>>>,
    pub and_statement: Option<Value<AndStatement<C>>>,
    pub or_statement: Option<Value<OrStatement<C>>>,
    pub not_statement: Option<Value<NotStatement<C>>>,
    pub label_match_statement: Option<Value<LabelMatchStatement>>,
    pub regex_match_statement: Option<Value<RegexMatchStatement>>,
    pub managed_rule_group_statement: Option<C::ManagedRuleGroup>,
    pub rule_group_reference_statement: Option<C::RuleGroupReference>,
}

// Not derived, `Unsupported` has no default
impl<C: StatementContext> Default for Statement<C> {
    fn default() -> Self {
        Statement {
            byte_match_statement: None,
            sqli_match_statement: None,
            xss_match_statement: None,
            size_constraint_statement: None,
            geo_match_statement: None,
            ip_set_reference_statement: None,
            regex_pattern_set_reference_statement: None,
            rate_based_statement: None,
            and_statement: None,
            or_statement: None,
            not_statement: None,
            label_match_statement: None,
            regex_match_statement: None,
            managed_rule_group_statement: None,
            rule_group_reference_statement: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields, bound = "")]
pub struct AndStatement<C: StatementContext> {
    /// At least two statements
    pub statements: Vec<Statement<C>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields, bound = "")]
pub struct OrStatement<C: StatementContext> {
    /// At least two statements
    pub statements: Vec<Statement<C>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields, bound = "")]
pub struct NotStatement<C: StatementContext> {
    pub statement: Box<Statement<C>>,
}

/// Counts requests per aggregation key over five minutes and matches above the limit
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields, bound = "")]
pub struct RateBasedStatement<C: StatementContext> {
    /// 100-2000000000
    pub limit: Value<i64>,

    /// One of `IP`, `FORWARDED_IP`
    pub aggregate_key_type: Value<String>,

    pub scope_down_statement: Option<Value<Box<Statement<C>>>>,

    /// Required when `AggregateKeyType` is `FORWARDED_IP`
    #[serde(rename = "ForwardedIPConfig")]
    pub forwarded_ip_config: Option<Value<ForwardedIpConfiguration>>,
}

/// Inspects a part of the request for a string
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ByteMatchStatement {
    /// Either this or `SearchStringBase64`
    pub search_string: Option<Value<String>>,

    pub search_string_base64: Option<Value<String>>,
    pub field_to_match: FieldToMatch,
    pub text_transformations: Vec<TextTransformation>,

    /// One of `EXACTLY`, `STARTS_WITH`, `ENDS_WITH`, `CONTAINS`, `CONTAINS_WORD`
    pub positional_constraint: Value<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SqliMatchStatement {
    pub field_to_match: FieldToMatch,
    pub text_transformations: Vec<TextTransformation>,

    /// One of `LOW`, `HIGH`, defaults to `LOW`
    pub sensitivity_level: Option<Value<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct XssMatchStatement {
    pub field_to_match: FieldToMatch,
    pub text_transformations: Vec<TextTransformation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SizeConstraintStatement {
    pub field_to_match: FieldToMatch,

    /// One of `EQ`, `NE`, `LE`, `LT`, `GE`, `GT`
    pub comparison_operator: Value<String>,

    /// Bytes, 0-21474836480
    pub size: Value<f64>,

    pub text_transformations: Vec<TextTransformation>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct GeoMatchStatement {
    /// ISO 3166 alpha-2 country codes
    pub country_codes: Option<List<String>>,

    #[serde(rename = "ForwardedIPConfig")]
    pub forwarded_ip_config: Option<Value<ForwardedIpConfiguration>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct IpSetReferenceStatement {
    /// ARN of an `AWS::WAFv2::IPSet`
    pub arn: Value<String>,

    #[serde(rename = "IPSetForwardedIPConfig")]
    pub ip_set_forwarded_ip_config: Option<Value<IpSetForwardedIpConfiguration>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct RegexPatternSetReferenceStatement {
    /// ARN of an `AWS::WAFv2::RegexPatternSet`
    pub arn: Value<String>,

    pub field_to_match: FieldToMatch,
    pub text_transformations: Vec<TextTransformation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct RegexMatchStatement {
    /// Length 1-512
    pub regex_string: Value<String>,

    pub field_to_match: FieldToMatch,
    pub text_transformations: Vec<TextTransformation>,
}

/// Matches labels added by rules evaluated earlier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct LabelMatchStatement {
    /// One of `LABEL`, `NAMESPACE`
    pub scope: Value<String>,

    /// Length 1-1024
    pub key: Value<String>,
}

/// Runs a rule group managed by AWS or a marketplace seller
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ManagedRuleGroupStatement {
    /// e.g. `AWSManagedRulesCommonRuleSet`
    pub name: Value<String>,

    /// e.g. `AWS`
    pub vendor_name: Value<String>,

    pub version: Option<Value<String>>,

    /// Rules whose action is overridden to count
    pub excluded_rules: Option<Value<Vec<ExcludedRule>>>,

    pub scope_down_statement: Option<Value<Box<WebAclStatement>>>,
    pub managed_rule_group_configs: Option<Value<Vec<ManagedRuleGroupConfig>>>,
    pub rule_action_overrides: Option<Value<Vec<RuleActionOverride>>>,
}

/// Runs a rule group owned by the account
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct RuleGroupReferenceStatement {
    /// ARN of an `AWS::WAFv2::RuleGroup`
    pub arn: Value<String>,

    pub excluded_rules: Option<Value<Vec<ExcludedRule>>>,
    pub rule_action_overrides: Option<Value<Vec<RuleActionOverride>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ExcludedRule {
    pub name: Value<String>,
}

/// Settings of the account takeover prevention rule group
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ManagedRuleGroupConfig {
    /// Path of the login endpoint, e.g. `/login`
    pub login_path: Option<Value<String>>,

    /// One of `JSON`, `FORM_ENCODED`
    pub payload_type: Option<Value<String>>,

    pub username_field: Option<Value<FieldIdentifier>>,
    pub password_field: Option<Value<FieldIdentifier>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct FieldIdentifier {
    /// JSON pointer or form field name
    pub identifier: Value<String>,
}

/// Client IP taken from a header instead of the connection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ForwardedIpConfiguration {
    /// e.g. `X-Forwarded-For`
    pub header_name: Value<String>,

    /// One of `MATCH`, `NO_MATCH`, used when the header is missing or invalid
    pub fallback_behavior: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct IpSetForwardedIpConfiguration {
    pub header_name: Value<String>,

    /// One of `MATCH`, `NO_MATCH`
    pub fallback_behavior: Value<String>,

    /// One of `FIRST`, `LAST`, `ANY`
    pub position: Value<String>,
}

/// An object with no properties, used as a flag, e.g. `UriPath: {}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Empty {}

/// The part of the request to inspect, exactly one member is set
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-wafv2-rulegroup-fieldtomatch.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct FieldToMatch {
    pub single_header: Option<Value<SingleName>>,
    pub single_query_argument: Option<Value<SingleName>>,
    pub all_query_arguments: Option<Value<Empty>>,
    pub uri_path: Option<Value<Empty>>,
    pub query_string: Option<Value<Empty>>,
    pub body: Option<Value<Body>>,
    pub method: Option<Value<Empty>>,
    pub json_body: Option<Value<JsonBody>>,
    pub headers: Option<Value<Headers>>,
    pub cookies: Option<Value<Cookies>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct SingleName {
    /// Header or query argument name, case insensitive
    pub name: Value<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Body {
    /// One of `CONTINUE`, `MATCH`, `NO_MATCH`
    pub oversize_handling: Option<Value<String>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct JsonBody {
    pub match_pattern: JsonMatchPattern,

    /// One of `ALL`, `KEY`, `VALUE`
    pub match_scope: Value<String>,

    /// One of `MATCH`, `NO_MATCH`, `EVALUATE_AS_STRING`
    pub invalid_fallback_behavior: Option<Value<String>>,

    /// One of `CONTINUE`, `MATCH`, `NO_MATCH`
    pub oversize_handling: Option<Value<String>>,
}

/// Either `All` or `IncludedPaths`
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct JsonMatchPattern {
    pub all: Option<Value<Empty>>,

    /// JSON pointers, e.g. `/dogs/0/name`
    pub included_paths: Option<List<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Headers {
    pub match_pattern: HeaderMatchPattern,

    /// One of `ALL`, `KEY`, `VALUE`
    pub match_scope: Value<String>,

    /// One of `CONTINUE`, `MATCH`, `NO_MATCH`
    pub oversize_handling: Value<String>,
}

/// One of the three members is set
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct HeaderMatchPattern {
    pub all: Option<Value<Empty>>,
    pub included_headers: Option<List<String>>,
    pub excluded_headers: Option<List<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Cookies {
    pub match_pattern: CookieMatchPattern,

    /// One of `ALL`, `KEY`, `VALUE`
    pub match_scope: Value<String>,

    /// One of `CONTINUE`, `MATCH`, `NO_MATCH`
    pub oversize_handling: Value<String>,
}

/// One of the three members is set
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CookieMatchPattern {
    pub all: Option<Value<Empty>>,
    pub included_cookies: Option<List<String>>,
    pub excluded_cookies: Option<List<String>>,
}

/// Applied to the inspected content before matching, lowest priority first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct TextTransformation {
    /// Unique within the statement, 0 and up
    pub priority: Value<i64>,

    /// One of `NONE`, `COMPRESS_WHITE_SPACE`, `HTML_ENTITY_DECODE`, `LOWERCASE`,
    /// `CMD_LINE`, `URL_DECODE`, `BASE64_DECODE`, `HEX_DECODE`, `MD5`, `REPLACE_COMMENTS`,
    /// `ESCAPE_SEQ_DECODE`, `SQL_HEX_DECODE`, `CSS_DECODE`, `JS_DECODE`,
    /// `NORMALIZE_PATH`, `NORMALIZE_PATH_WIN`, `REMOVE_NULLS`, `REPLACE_NULLS`,
    /// `BASE64_DECODE_EXT`, `URL_DECODE_UNI`, `UTF8_TO_UNICODE`
    #[serde(rename = "Type")]
    pub transformation_type: Value<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn uri_contains(text: &str) -> serde_json::Value {
        json!({
            "ByteMatchStatement": {
                "SearchString": text,
                "FieldToMatch": {"UriPath": {}},
                "TextTransformations": [{"Priority": 0, "Type": "LOWERCASE"}],
                "PositionalConstraint": "CONTAINS"
            }
        })
    }

    #[test]
    fn nested_logical_statements() {
        let statement: RuleGroupStatement = serde_json::from_value(json!({
            "AndStatement": {
                "Statements": [
                    uri_contains("/admin"),
                    {"NotStatement": {"Statement": {
                        "IPSetReferenceStatement": {"Arn": {"Fn::GetAtt": ["Office", "Arn"]}}
                    }}}
                ]
            }
        }))
        .unwrap();

        let and = statement.and_statement.and_then(Value::into_literal).unwrap();
        assert_eq!(and.statements.len(), 2);

        let not = and.statements[1].not_statement.as_ref().and_then(Value::literal).unwrap();
        assert!(not.statement.ip_set_reference_statement.is_some());
    }

    #[test]
    fn rate_based_scope_down() {
        let statement: WebAclStatement = serde_json::from_value(json!({
            "RateBasedStatement": {
                "Limit": 1000,
                "AggregateKeyType": "FORWARDED_IP",
                "ForwardedIPConfig": {"HeaderName": "X-Forwarded-For", "FallbackBehavior": "MATCH"},
                "ScopeDownStatement": uri_contains("/login")
            }
        }))
        .unwrap();

        let rate = statement.rate_based_statement.and_then(Value::into_literal).unwrap();
        assert!(rate.forwarded_ip_config.is_some());

        let scope_down = rate.scope_down_statement.and_then(Value::into_literal).unwrap();
        assert!(scope_down.byte_match_statement.is_some());
    }

    #[test]
    fn managed_rule_groups_only_in_web_acls() {
        let managed = json!({
            "ManagedRuleGroupStatement": {
                "VendorName": "AWS",
                "Name": "AWSManagedRulesCommonRuleSet",
                "ExcludedRules": [{"Name": "SizeRestrictions_BODY"}]
            }
        });

        let error = serde_json::from_value::<RuleGroupStatement>(managed.clone())
            .unwrap_err()
            .to_string();
        assert!(error.contains("only allowed in a web ACL"), "{error}");

        let statement: WebAclStatement = serde_json::from_value(managed).unwrap();
        assert!(statement.managed_rule_group_statement.is_some());
    }

    #[test]
    fn empty_flags_reject_properties() {
        assert!(serde_json::from_value::<FieldToMatch>(json!({"Method": {}})).is_ok());
        assert!(serde_json::from_value::<FieldToMatch>(json!({"Method": {"Name": "x"}})).is_err());
    }

    #[test]
    fn default_statement_has_no_member() {
        assert_eq!(serde_json::to_value(RuleGroupStatement::default()).unwrap(), json!({}));
        assert_eq!(serde_json::to_value(WebAclStatement::default()).unwrap(), json!({}));
    }

    #[test]
    fn serializes_only_the_set_member() {
        let statement = RuleGroupStatement {
            label_match_statement: Some(Value::Literal(LabelMatchStatement {
                scope: "LABEL".into(),
                key: "awswaf:managed:aws:bot-control:bot:verified".into(),
            })),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&statement).unwrap(),
            json!({"LabelMatchStatement": {
                "Scope": "LABEL",
                "Key": "awswaf:managed:aws:bot-control:bot:verified"
            }})
        );
    }
}
