use crate::error::Error;
use crate::runner::{Runnable, Runner};
use crate::writer::Writer;
use cfn_shapes_schema::{Report, Template};
use serde_json::json;
use std::path::{Path, PathBuf};

#[derive(clap::Args, Clone)]
pub(crate) struct CheckCommand {
    /// Template files, JSON for `.json` files and YAML otherwise
    #[arg(required = true, value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Print one JSON report per file instead of text
    #[arg(long)]
    json: bool,

    /// Report resources whose type is not catalogued
    #[arg(long)]
    deny_unknown_types: bool,

    /// Skip resources of this type, can be repeated
    #[arg(long = "ignore-type", value_name = "TYPE")]
    ignore_types: Vec<String>,
}

impl Runnable for CheckCommand {
    fn runner(&self) -> impl Runner {
        CheckRunner {
            command: self.clone(),
            writer: Writer::new(self.json),
        }
    }
}

struct CheckRunner {
    command: CheckCommand,
    writer: Writer,
}

impl Runner for CheckRunner {
    /// Checks every file, reporting all problems before failing
    fn run(&mut self) -> Result<(), Error> {
        let options = self.config()?.check_options(
            self.command.deny_unknown_types,
            &self.command.ignore_types,
        );

        let mut failed = 0;
        let mut problems = 0;

        for path in &self.command.files {
            match Template::from_path(path) {
                Ok(template) => {
                    let report = template.check(&options);
                    problems += report.diagnostics.len();

                    if !report.is_ok() {
                        failed += 1;
                    }

                    self.print_report(path, &report)?;
                }

                Err(error) => {
                    log::error!("{error:?}");
                    failed += 1;
                    self.print_load_error(path, &error)?;
                }
            }
        }

        if failed > 0 {
            return Err(self.error(
                Some("Check failed"),
                Some(&format!(
                    "{problems} problem(s), {failed} of {} file(s) failed",
                    self.command.files.len()
                )),
                None,
            ));
        }

        Ok(())
    }
}

impl CheckRunner {
    fn print_report(&self, path: &Path, report: &Report) -> Result<(), Error> {
        if self.writer.is_structured() {
            return self.writer.json(json!({
                "file": path.display().to_string(),
                "ok": report.is_ok(),
                "checked": report.checked,
                "unchecked": report.unchecked,
                "diagnostics": report.diagnostics,
            }));
        }

        let mut output = format!(
            "{} {} {}\n",
            if report.is_ok() {
                console::style("OK").green().bold()
            } else {
                console::style("FAIL").red().bold()
            },
            console::style(path.display()).bold(),
            console::style(format!(
                "({} checked, {} unchecked)",
                report.checked, report.unchecked
            ))
            .dim()
        );

        for diagnostic in &report.diagnostics {
            output.push_str(&format!(
                "  {} {} {}\n    {}\n",
                console::style(&diagnostic.logical_id).bold(),
                console::style(&diagnostic.type_name).dim(),
                console::style(diagnostic.kind).yellow(),
                diagnostic.message
            ));
        }

        self.writer.text(&output)
    }

    fn print_load_error(&self, path: &Path, error: &eyre::Report) -> Result<(), Error> {
        if self.writer.is_structured() {
            return self.writer.json(json!({
                "file": path.display().to_string(),
                "ok": false,
                "error": format!("{error:#}"),
            }));
        }

        self.writer.error(&format!(
            "{} {}\n  {error:#}\n",
            console::style("ERROR").red().bold(),
            console::style(path.display()).bold(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn command(files: Vec<PathBuf>) -> CheckCommand {
        CheckCommand {
            files,
            json: true,
            deny_unknown_types: false,
            ignore_types: vec![],
        }
    }

    fn run(command: CheckCommand) -> Result<(), Error> {
        CheckRunner {
            writer: Writer::new(command.json),
            command,
        }
        .run()
    }

    #[test]
    fn passes_valid_templates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stack.yaml");

        fs::write(
            &path,
            "Resources:\n  Group:\n    Type: AWS::Logs::LogGroup\n    Properties:\n      RetentionInDays: 7\n",
        )
        .unwrap();

        assert!(run(command(vec![path])).is_ok());
    }

    #[test]
    fn fails_on_mismatch_or_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stack.json");

        fs::write(
            &path,
            r#"{"Resources": {"Group": {"Type": "AWS::Logs::LogGroup", "Properties": {"Retention": 7}}}}"#,
        )
        .unwrap();

        assert!(run(command(vec![path])).is_err());
        assert!(run(command(vec![dir.path().join("missing.yaml")])).is_err());
    }
}
