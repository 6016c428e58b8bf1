use regex::Regex;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::sync::OnceLock;

/// Free-form JSON, used for policy documents, metadata and intrinsic arguments
pub type Json = serde_json::Value;

/// A list property: either a literal list of values or an intrinsic yielding a list
pub type List<T> = Value<Vec<Value<T>>>;

/// Parameters CloudFormation provides without a declaration in the template
pub const PSEUDO_PARAMETERS: [&str; 8] = [
    "AWS::AccountId",
    "AWS::NotificationARNs",
    "AWS::NoValue",
    "AWS::Partition",
    "AWS::Region",
    "AWS::StackId",
    "AWS::StackName",
    "AWS::URLSuffix",
];

/// A CloudFormation intrinsic function
///
/// The function is never evaluated. Only its shape is recognised, so that it can stand
/// wherever a literal value is expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Intrinsic {
    Ref(String),

    /// Reference to a named condition, only valid inside condition functions
    Condition(String),

    #[serde(rename = "Fn::Base64")]
    Base64(Json),

    #[serde(rename = "Fn::Cidr")]
    Cidr(Vec<Json>),

    #[serde(rename = "Fn::FindInMap")]
    FindInMap(Vec<Json>),

    #[serde(rename = "Fn::GetAtt")]
    GetAtt(GetAtt),

    #[serde(rename = "Fn::GetAZs")]
    GetAzs(Json),

    #[serde(rename = "Fn::ImportValue")]
    ImportValue(Json),

    #[serde(rename = "Fn::Join")]
    Join(String, Json),

    #[serde(rename = "Fn::Select")]
    Select(Json, Json),

    #[serde(rename = "Fn::Split")]
    Split(String, Json),

    #[serde(rename = "Fn::Sub")]
    Sub(Sub),

    #[serde(rename = "Fn::Transform")]
    Transform(Json),

    /// Condition name, value if true, value if false
    #[serde(rename = "Fn::If")]
    If(String, Json, Json),

    #[serde(rename = "Fn::Equals")]
    Equals(Json, Json),

    #[serde(rename = "Fn::And")]
    And(Vec<Json>),

    #[serde(rename = "Fn::Or")]
    Or(Vec<Json>),

    #[serde(rename = "Fn::Not")]
    Not([Json; 1]),

    #[serde(rename = "Fn::Length")]
    Length(Json),

    #[serde(rename = "Fn::ToJsonString")]
    ToJsonString(Json),
}

/// Arguments of `Fn::GetAtt`, either `[LogicalId, Attribute]` or `"LogicalId.Attribute"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetAtt {
    Pair(String, Json),
    Dotted(String),
}

impl GetAtt {
    pub fn logical_id(&self) -> &str {
        match self {
            GetAtt::Pair(logical_id, _) => logical_id,
            GetAtt::Dotted(path) => path.split('.').next().unwrap_or(path),
        }
    }
}

/// Arguments of `Fn::Sub`, with or without the variables map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sub {
    Template(String),
    WithVariables(String, BTreeMap<String, Json>),
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("Placeholder regex is valid"))
}

impl Sub {
    /// Logical IDs used by `${Name}` and `${Name.Attribute}` placeholders
    ///
    /// Escaped `${!Literal}` placeholders and names bound in the variables map are skipped.
    fn references(&self) -> Vec<String> {
        let (template, variables) = match self {
            Sub::Template(template) => (template, None),
            Sub::WithVariables(template, variables) => (template, Some(variables)),
        };

        let mut references = placeholder_regex()
            .captures_iter(template)
            .filter_map(|captures| captures.get(1).map(|m| m.as_str()))
            .filter(|name| !name.starts_with('!'))
            .map(|name| name.split('.').next().unwrap_or(name).trim().to_string())
            .filter(|name| !variables.is_some_and(|vars| vars.contains_key(name)))
            .collect::<Vec<String>>();

        if let Some(variables) = variables {
            variables
                .values()
                .for_each(|value| references.extend(references_in(value)));
        }

        references
    }
}

impl Intrinsic {
    /// Whether a JSON value has the shape of an intrinsic function call
    ///
    /// That is an object with exactly one key, the key being `Ref`, `Condition` or `Fn::*`.
    pub fn is_intrinsic(json: &Json) -> bool {
        match json.as_object() {
            Some(object) if object.len() == 1 => object
                .keys()
                .all(|key| key == "Ref" || key == "Condition" || key.starts_with("Fn::")),
            _ => false,
        }
    }

    /// Name of the function as it appears in a template
    pub fn name(&self) -> &'static str {
        match self {
            Intrinsic::Ref(_) => "Ref",
            Intrinsic::Condition(_) => "Condition",
            Intrinsic::Base64(_) => "Fn::Base64",
            Intrinsic::Cidr(_) => "Fn::Cidr",
            Intrinsic::FindInMap(_) => "Fn::FindInMap",
            Intrinsic::GetAtt(_) => "Fn::GetAtt",
            Intrinsic::GetAzs(_) => "Fn::GetAZs",
            Intrinsic::ImportValue(_) => "Fn::ImportValue",
            Intrinsic::Join(..) => "Fn::Join",
            Intrinsic::Select(..) => "Fn::Select",
            Intrinsic::Split(..) => "Fn::Split",
            Intrinsic::Sub(_) => "Fn::Sub",
            Intrinsic::Transform(_) => "Fn::Transform",
            Intrinsic::If(..) => "Fn::If",
            Intrinsic::Equals(..) => "Fn::Equals",
            Intrinsic::And(_) => "Fn::And",
            Intrinsic::Or(_) => "Fn::Or",
            Intrinsic::Not(_) => "Fn::Not",
            Intrinsic::Length(_) => "Fn::Length",
            Intrinsic::ToJsonString(_) => "Fn::ToJsonString",
        }
    }

    /// Logical IDs of resources or parameters this function refers to, including nested calls
    ///
    /// Pseudo parameters are not logical IDs and are left out.
    pub fn references(&self) -> Vec<String> {
        let mut references = match self {
            Intrinsic::Ref(name) => vec![name.clone()],
            Intrinsic::GetAtt(get_att) => vec![get_att.logical_id().to_string()],
            Intrinsic::Sub(sub) => sub.references(),

            // Names a condition, not a resource
            Intrinsic::Condition(_) => vec![],

            Intrinsic::If(_, then, otherwise) => {
                [then, otherwise].into_iter().flat_map(references_in).collect()
            }

            Intrinsic::Base64(arg)
            | Intrinsic::GetAzs(arg)
            | Intrinsic::ImportValue(arg)
            | Intrinsic::Transform(arg)
            | Intrinsic::Length(arg)
            | Intrinsic::ToJsonString(arg)
            | Intrinsic::Join(_, arg)
            | Intrinsic::Split(_, arg) => references_in(arg),

            Intrinsic::Select(a, b) | Intrinsic::Equals(a, b) => {
                [a, b].into_iter().flat_map(references_in).collect()
            }

            Intrinsic::Cidr(args)
            | Intrinsic::FindInMap(args)
            | Intrinsic::And(args)
            | Intrinsic::Or(args) => args.iter().flat_map(references_in).collect(),

            Intrinsic::Not(args) => args.iter().flat_map(references_in).collect(),
        };

        references.retain(|name| !is_pseudo_parameter(name));
        references
    }
}

impl Display for Intrinsic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub fn is_pseudo_parameter(name: &str) -> bool {
    PSEUDO_PARAMETERS.contains(&name)
}

/// Collect references of every intrinsic found anywhere inside a JSON value
///
/// Objects that look like intrinsics but fail to parse are skipped, the shape check reports them.
pub fn references_in(json: &Json) -> Vec<String> {
    if Intrinsic::is_intrinsic(json) {
        return serde_json::from_value::<Intrinsic>(json.clone())
            .map(|intrinsic| intrinsic.references())
            .unwrap_or_default();
    }

    match json {
        Json::Array(items) => items.iter().flat_map(references_in).collect(),
        Json::Object(object) => object.values().flat_map(references_in).collect(),
        _ => vec![],
    }
}

/// A property value: a literal of the declared type or an intrinsic function
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    Literal(T),
    Intrinsic(Intrinsic),
}

impl<T> Value<T> {
    pub fn literal(&self) -> Option<&T> {
        match self {
            Value::Literal(value) => Some(value),
            Value::Intrinsic(_) => None,
        }
    }

    pub fn into_literal(self) -> Option<T> {
        match self {
            Value::Literal(value) => Some(value),
            Value::Intrinsic(_) => None,
        }
    }

    pub fn is_intrinsic(&self) -> bool {
        matches!(self, Value::Intrinsic(_))
    }
}

impl<T: Default> Default for Value<T> {
    fn default() -> Self {
        Value::Literal(T::default())
    }
}

macro_rules! literal_from {
    ($($ty:ty),+) => {
        $(impl From<$ty> for Value<$ty> {
            fn from(value: $ty) -> Self {
                Value::Literal(value)
            }
        })+
    };
}

literal_from!(String, bool, i64, f64);

impl From<&str> for Value<String> {
    fn from(value: &str) -> Self {
        Value::Literal(value.to_string())
    }
}

impl<T> From<Intrinsic> for Value<T> {
    fn from(intrinsic: Intrinsic) -> Self {
        Value::Intrinsic(intrinsic)
    }
}

impl<T: Serialize> Serialize for Value<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Literal(value) => value.serialize(serializer),
            Value::Intrinsic(intrinsic) => intrinsic.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Value<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Json::deserialize(deserializer)?;

        // Decide by shape first, so that a malformed intrinsic reports its own error
        // instead of a confusing literal type mismatch
        if Intrinsic::is_intrinsic(&json) {
            let name = json
                .as_object()
                .and_then(|object| object.keys().next().cloned())
                .unwrap_or_default();

            return serde_json::from_value(json)
                .map(Value::Intrinsic)
                .map_err(|e| de::Error::custom(format!("invalid {name}: {e}")));
        }

        serde_json::from_value(json)
            .map(Value::Literal)
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn literal_and_intrinsic_values() {
        let literal: Value<String> = serde_json::from_value(json!("my-index")).unwrap();
        assert_eq!(literal, Value::from("my-index"));

        let reference: Value<String> = serde_json::from_value(json!({"Ref": "Index"})).unwrap();
        assert_eq!(reference, Value::Intrinsic(Intrinsic::Ref("Index".into())));

        let number: Value<i64> =
            serde_json::from_value(json!({"Fn::Select": [0, {"Ref": "Sizes"}]})).unwrap();
        assert!(number.is_intrinsic());
        assert_eq!(number.literal(), None);
    }

    #[test]
    fn literal_type_mismatch_is_an_error() {
        assert!(serde_json::from_value::<Value<String>>(json!(42)).is_err());
        assert!(serde_json::from_value::<Value<bool>>(json!("true")).is_err());
    }

    #[test]
    fn malformed_intrinsic_names_the_function() {
        let error = serde_json::from_value::<Value<String>>(json!({"Fn::Join": "x"}))
            .unwrap_err()
            .to_string();

        assert!(error.contains("Fn::Join"), "{error}");
    }

    #[test]
    fn objects_with_other_keys_are_not_intrinsics() {
        assert!(!Intrinsic::is_intrinsic(&json!({"Key": "a"})));
        assert!(!Intrinsic::is_intrinsic(&json!({"Ref": "a", "Other": 1})));
        assert!(Intrinsic::is_intrinsic(&json!({"Fn::GetAZs": ""})));
    }

    #[test]
    fn serializes_back_to_template_form() {
        let value: Value<String> = Intrinsic::GetAtt(GetAtt::Dotted("Role.Arn".into())).into();
        assert_eq!(serde_json::to_value(&value).unwrap(), json!({"Fn::GetAtt": "Role.Arn"}));
        assert_eq!(serde_json::to_value(Value::<i64>::from(3)).unwrap(), json!(3));
    }

    #[test]
    fn collects_references() {
        let json = json!({
            "Fn::Join": ["", [
                {"Ref": "Bucket"},
                {"Fn::GetAtt": ["Role", "Arn"]},
                {"Fn::Sub": "arn:${AWS::Partition}:logs:${Group}:${!Literal}:${Queue.Arn}"},
                {"Fn::Sub": ["${Name}-${Local}", {"Local": {"Ref": "Suffix"}}]},
                {"Fn::If": ["IsProd", {"Ref": "AWS::NoValue"}, "dev"]},
            ]]
        });

        assert_eq!(
            references_in(&json),
            vec!["Bucket", "Role", "Group", "Queue", "Name", "Suffix"]
        );
    }

    #[test]
    fn dotted_get_att_logical_id() {
        assert_eq!(GetAtt::Dotted("Table.StreamArn".into()).logical_id(), "Table");
        assert_eq!(GetAtt::Pair("Table".into(), json!("Arn")).logical_id(), "Table");
    }
}
