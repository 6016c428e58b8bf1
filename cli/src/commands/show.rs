use crate::error::Error;
use crate::runner::{Runnable, Runner};
use cfn_shapes_schema::registry::{type_names, Properties};
use serde_json::json;

#[derive(clap::Args, Clone)]
pub(crate) struct ShowCommand {
    /// Resource type, e.g. `AWS::Logs::MetricFilter`
    #[arg(value_name = "TYPE")]
    type_name: String,
}

impl Runnable for ShowCommand {
    fn runner(&self) -> impl Runner {
        ShowRunner {
            command: self.clone(),
        }
    }
}

struct ShowRunner {
    command: ShowCommand,
}

impl ShowRunner {
    /// A resource declaration with the required properties at their defaults, as YAML
    fn skeleton(&self) -> Result<String, Error> {
        let type_name = type_names()
            .find(|name| name.eq_ignore_ascii_case(&self.command.type_name))
            .ok_or_else(|| {
                self.error(
                    Some("Unknown resource type"),
                    Some("Run `cfn-shapes types` for the list of catalogued types"),
                    None,
                )
            })?;

        let properties = Properties::skeleton(type_name)
            .map_err(|e| self.error(None, None, Some(Box::new(e))))?
            .unwrap_or_else(|| json!({}));

        serde_yaml::to_string(&json!({"Type": type_name, "Properties": properties}))
            .map_err(|e| self.error(None, None, Some(Box::new(e))))
    }
}

impl Runner for ShowRunner {
    fn run(&mut self) -> Result<(), Error> {
        print!("{}", self.skeleton()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner(type_name: &str) -> ShowRunner {
        ShowRunner {
            command: ShowCommand {
                type_name: type_name.into(),
            },
        }
    }

    #[test]
    fn prints_required_properties() {
        let yaml = runner("aws::wafv2::webaclassociation").skeleton().unwrap();

        assert_eq!(
            yaml,
            "Type: AWS::WAFv2::WebACLAssociation\nProperties:\n  ResourceArn: ''\n  WebACLArn: ''\n"
        );
    }

    #[test]
    fn unknown_type() {
        assert!(runner("AWS::S3::Bucket").skeleton().is_err());
    }
}
