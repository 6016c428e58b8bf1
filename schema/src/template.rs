//! Reading templates and checking their resources against the catalog

use crate::attributes::ResourceAttributes;
use crate::intrinsic::{references_in, Json};
use crate::registry::Properties;
use eyre::{bail, eyre, WrapErr};
use serde::Serialize;
use serde_json::Map;
use std::collections::BTreeSet;
use std::fmt::Display;
use std::path::Path;

/// Functions with a YAML short form, e.g. `!GetAtt`, written as `Fn::GetAtt` in long form
const SHORT_FORM_FUNCTIONS: [&str; 18] = [
    "Base64",
    "Cidr",
    "FindInMap",
    "GetAtt",
    "GetAZs",
    "ImportValue",
    "Join",
    "Select",
    "Split",
    "Sub",
    "Transform",
    "If",
    "Equals",
    "And",
    "Or",
    "Not",
    "Length",
    "ToJsonString",
];

/// A resource as declared in the `Resources` section
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub type_name: String,

    /// `None` when the declaration has no `Properties` key
    pub properties: Option<Json>,

    /// Everything besides `Type` and `Properties`
    attributes: Map<String, Json>,
}

impl Declaration {
    fn from_json(logical_id: &str, json: Json) -> eyre::Result<Self> {
        let Json::Object(mut attributes) = json else {
            bail!("Resource {logical_id} is not an object");
        };

        let type_name = match attributes.remove("Type") {
            Some(Json::String(type_name)) => type_name,
            _ => bail!("Resource {logical_id} has no Type"),
        };

        let properties = attributes.remove("Properties").filter(|p| !p.is_null());

        Ok(Declaration {
            type_name,
            properties,
            attributes,
        })
    }

    /// Resource attributes such as `DependsOn` or `DeletionPolicy`
    pub fn attributes(&self) -> Result<ResourceAttributes, serde_json::Error> {
        serde_json::from_value(Json::Object(self.attributes.clone()))
    }
}

/// A CloudFormation template, reduced to what the checks need
#[derive(Debug, Clone, Default)]
pub struct Template {
    resources: Vec<(String, Declaration)>,
    parameters: BTreeSet<String>,
    conditions: BTreeSet<String>,
}

impl Template {
    pub fn from_json(json: &str) -> eyre::Result<Self> {
        let value: Json = serde_json::from_str(json).wrap_err("Template is not valid JSON")?;
        Self::from_value(value)
    }

    /// Parse a YAML template, short form tags are converted to the long form
    pub fn from_yaml(yaml: &str) -> eyre::Result<Self> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(yaml).wrap_err("Template is not valid YAML")?;

        Self::from_value(yaml_to_json(value)?)
    }

    /// Read a template file, JSON for `.json` files and YAML otherwise
    pub fn from_path(path: &Path) -> eyre::Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));

        let template = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        };

        template.wrap_err_with(|| format!("Failed to load {}", path.display()))
    }

    pub fn from_value(value: Json) -> eyre::Result<Self> {
        let Json::Object(mut root) = value else {
            bail!("Template is not an object");
        };

        let resources = match root.remove("Resources") {
            Some(Json::Object(resources)) => resources,
            Some(_) => bail!("Resources section is not an object"),
            None => bail!("Template has no Resources section"),
        };

        let resources = resources
            .into_iter()
            .map(|(logical_id, json)| {
                let declaration = Declaration::from_json(&logical_id, json)?;
                Ok((logical_id, declaration))
            })
            .collect::<eyre::Result<Vec<_>>>()?;

        Ok(Template {
            resources,
            parameters: section_keys(&root, "Parameters"),
            conditions: section_keys(&root, "Conditions"),
        })
    }

    /// Resources in document order
    pub fn resources(&self) -> impl Iterator<Item = (&str, &Declaration)> {
        self.resources
            .iter()
            .map(|(logical_id, declaration)| (logical_id.as_str(), declaration))
    }

    pub fn resource(&self, logical_id: &str) -> Option<&Declaration> {
        self.resources()
            .find(|(id, _)| *id == logical_id)
            .map(|(_, declaration)| declaration)
    }

    pub fn parameters(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(String::as_str)
    }

    fn is_resource(&self, name: &str) -> bool {
        self.resource(name).is_some()
    }

    /// Deserialize every resource of a catalogued type and report what does not fit
    pub fn check(&self, options: &CheckOptions) -> Report {
        let mut report = Report::default();

        for (logical_id, declaration) in self.resources() {
            let type_name = declaration.type_name.as_str();

            if options.ignore_types.iter().any(|ignored| ignored == type_name) {
                log::debug!("Skipping {logical_id}, {type_name} is ignored");
                continue;
            }

            let mut push = |kind: DiagnosticKind, message: String| {
                report.diagnostics.push(Diagnostic {
                    logical_id: logical_id.to_string(),
                    type_name: type_name.to_string(),
                    kind,
                    message,
                })
            };

            match declaration.attributes() {
                Ok(attributes) => {
                    for dependency in attributes.depends_on() {
                        if !self.is_resource(dependency) {
                            push(
                                DiagnosticKind::DanglingReference,
                                format!("DependsOn names unknown resource {dependency}"),
                            );
                        }
                    }

                    if let Some(condition) = attributes.condition {
                        if !self.conditions.contains(&condition) {
                            push(
                                DiagnosticKind::DanglingReference,
                                format!("Condition {condition} is not declared"),
                            );
                        }
                    }
                }

                Err(error) => push(DiagnosticKind::InvalidAttributes, error.to_string()),
            }

            let properties = declaration
                .properties
                .clone()
                .unwrap_or_else(|| Json::Object(Map::new()));

            let mut references = references_in(&properties);
            references.sort();
            references.dedup();

            for reference in references {
                if !self.is_resource(&reference) && !self.parameters.contains(&reference) {
                    push(
                        DiagnosticKind::DanglingReference,
                        format!("{reference} is neither a resource nor a parameter"),
                    );
                }
            }

            match Properties::parse(type_name, properties) {
                Ok(Some(_)) => {
                    log::debug!("{logical_id} matches {type_name}");
                    report.checked += 1;
                }

                Ok(None) => {
                    report.unchecked += 1;

                    if options.deny_unknown_types {
                        push(
                            DiagnosticKind::UnknownType,
                            format!("{type_name} is not in the catalog"),
                        );
                    } else {
                        log::warn!("Not checking {logical_id}, {type_name} is not in the catalog");
                    }
                }

                Err(error) => {
                    log::debug!("{logical_id} does not match {type_name}: {error}");
                    report.checked += 1;
                    push(DiagnosticKind::InvalidProperties, error.to_string());
                }
            }
        }

        report
    }
}

fn section_keys(root: &Map<String, Json>, section: &str) -> BTreeSet<String> {
    root.get(section)
        .and_then(Json::as_object)
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default()
}

/// Convert a YAML document to JSON, rewriting short form tags such as `!Ref Name`
fn yaml_to_json(value: serde_yaml::Value) -> eyre::Result<Json> {
    use serde_yaml::Value as Yaml;

    Ok(match value {
        Yaml::Null => Json::Null,
        Yaml::Bool(bool) => Json::Bool(bool),

        Yaml::Number(number) => {
            if let Some(int) = number.as_i64() {
                Json::from(int)
            } else if let Some(uint) = number.as_u64() {
                Json::from(uint)
            } else {
                number
                    .as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Json::Number)
                    .ok_or_else(|| eyre!("{number} can not be represented in JSON"))?
            }
        }

        Yaml::String(string) => Json::String(string),

        Yaml::Sequence(items) => Json::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<eyre::Result<_>>()?,
        ),

        Yaml::Mapping(mapping) => {
            let mut object = Map::new();

            for (key, value) in mapping {
                object.insert(mapping_key(key)?, yaml_to_json(value)?);
            }

            Json::Object(object)
        }

        Yaml::Tagged(tagged) => {
            let tag = tagged.tag.to_string();
            let name = tag.trim_start_matches('!');

            let function = match name {
                "Ref" | "Condition" => name.to_string(),
                _ if SHORT_FORM_FUNCTIONS.contains(&name) => format!("Fn::{name}"),
                _ => bail!("Unknown tag {tag}"),
            };

            let mut object = Map::new();
            object.insert(function, yaml_to_json(tagged.value)?);
            Json::Object(object)
        }
    })
}

fn mapping_key(key: serde_yaml::Value) -> eyre::Result<String> {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(string) => Ok(string),
        Yaml::Number(number) => Ok(number.to_string()),
        Yaml::Bool(bool) => Ok(bool.to_string()),
        _ => bail!("Mapping keys must be strings, numbers or booleans"),
    }
}

/// Which resources a check covers
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Report resources whose type is not catalogued instead of skipping them
    pub deny_unknown_types: bool,

    /// Types that are neither checked nor counted
    pub ignore_types: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    InvalidProperties,
    InvalidAttributes,
    DanglingReference,
    UnknownType,
}

impl Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            DiagnosticKind::InvalidProperties => "invalid properties",
            DiagnosticKind::InvalidAttributes => "invalid attributes",
            DiagnosticKind::DanglingReference => "dangling reference",
            DiagnosticKind::UnknownType => "unknown type",
        };

        write!(f, "{}", str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub logical_id: String,
    pub type_name: String,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {}: {}",
            self.logical_id, self.type_name, self.kind, self.message
        )
    }
}

/// Outcome of [`Template::check`]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    /// Resources of a catalogued type
    pub checked: usize,

    /// Resources of a type that is not catalogued
    pub unchecked: usize,

    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
