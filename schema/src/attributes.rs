use crate::intrinsic::Json;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// What happens to a resource when it is removed from the stack or replaced
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-attribute-deletionpolicy.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeletionPolicy {
    Delete,
    Retain,
    RetainExceptOnCreate,
    Snapshot,
}

impl Display for DeletionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            DeletionPolicy::Delete => "Delete",
            DeletionPolicy::Retain => "Retain",
            DeletionPolicy::RetainExceptOnCreate => "RetainExceptOnCreate",
            DeletionPolicy::Snapshot => "Snapshot",
        };

        write!(f, "{}", str)
    }
}

/// `DependsOn` accepts a single logical ID or a list of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependsOn {
    One(String),
    Many(Vec<String>),
}

/// Attributes of a resource declaration, next to its `Type` and `Properties`
///
/// https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-product-attribute-reference.html
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ResourceAttributes {
    pub depends_on: Option<DependsOn>,

    /// Name of a condition in the `Conditions` section of the template
    pub condition: Option<String>,

    pub deletion_policy: Option<DeletionPolicy>,
    pub update_replace_policy: Option<DeletionPolicy>,
    pub metadata: Option<Json>,
    pub creation_policy: Option<Json>,
    pub update_policy: Option<Json>,
}

impl ResourceAttributes {
    /// Logical IDs this resource explicitly depends on
    pub fn depends_on(&self) -> Vec<&str> {
        match &self.depends_on {
            Some(DependsOn::One(name)) => vec![name.as_str()],
            Some(DependsOn::Many(names)) => names.iter().map(String::as_str).collect(),
            None => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn depends_on_single_or_list() {
        let one: ResourceAttributes = serde_json::from_value(json!({"DependsOn": "Role"})).unwrap();
        assert_eq!(one.depends_on(), vec!["Role"]);

        let many: ResourceAttributes =
            serde_json::from_value(json!({"DependsOn": ["Role", "Bucket"]})).unwrap();
        assert_eq!(many.depends_on(), vec!["Role", "Bucket"]);

        assert!(ResourceAttributes::default().depends_on().is_empty());
    }

    #[test]
    fn rejects_unknown_policies_and_attributes() {
        assert!(
            serde_json::from_value::<ResourceAttributes>(json!({"DeletionPolicy": "Keep"})).is_err()
        );
        assert!(serde_json::from_value::<ResourceAttributes>(json!({"Propertes": {}})).is_err());
    }

    #[test]
    fn omits_absent_attributes() {
        let attributes = ResourceAttributes {
            deletion_policy: Some(DeletionPolicy::Retain),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&attributes).unwrap(),
            json!({"DeletionPolicy": "Retain"})
        );
    }
}
