use cfn_shapes_schema::CheckOptions;
use eyre::WrapErr;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub(crate) const CONFIG_FILE_NAME: &str = "cfn-shapes.toml";

/// Structure of cfn-shapes.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigFile {
    /// [check]
    /// deny_unknown_types = true
    /// ignore_types = ["AWS::CDK::Metadata"]
    #[serde(default)]
    pub(crate) check: CheckSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CheckSection {
    #[serde(default)]
    pub(crate) deny_unknown_types: bool,

    #[serde(default)]
    pub(crate) ignore_types: Vec<String>,
}

impl ConfigFile {
    /// Reads the config from a directory
    ///
    /// A missing cfn-shapes.toml gives the default config, a malformed one is an error.
    pub(crate) fn from_path(dir: &Path) -> eyre::Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);

        let Ok(toml_string) = fs::read_to_string(&path) else {
            log::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
            return Ok(Self::default());
        };

        log::debug!("Using {}", path.display());

        toml::from_str(&toml_string).wrap_err_with(|| format!("Failed to parse {}", path.display()))
    }

    /// Check options from the file, with command line flags applied on top
    pub(crate) fn check_options(
        &self,
        deny_unknown_types: bool,
        ignore_types: &[String],
    ) -> CheckOptions {
        let mut options = CheckOptions {
            deny_unknown_types: self.check.deny_unknown_types || deny_unknown_types,
            ignore_types: self.check.ignore_types.clone(),
        };

        for type_name in ignore_types {
            if !options.ignore_types.contains(type_name) {
                options.ignore_types.push(type_name.clone());
            }
        }

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigFile::from_path(dir.path()).unwrap();

        assert!(!config.check.deny_unknown_types);
        assert!(config.check.ignore_types.is_empty());
    }

    #[test]
    fn flags_merge_on_top() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[check]\nignore_types = [\"AWS::CDK::Metadata\"]\n",
        )
        .unwrap();

        let config = ConfigFile::from_path(dir.path()).unwrap();
        let options = config.check_options(
            true,
            &["AWS::CDK::Metadata".into(), "Custom::Resource".into()],
        );

        assert!(options.deny_unknown_types);
        assert_eq!(options.ignore_types, vec!["AWS::CDK::Metadata", "Custom::Resource"]);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "[check]\nstrict = true\n").unwrap();

        let error = ConfigFile::from_path(dir.path()).unwrap_err();
        assert!(error.to_string().starts_with("Failed to parse"), "{error}");
    }
}
