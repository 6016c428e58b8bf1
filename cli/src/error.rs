/// Display global error message in unified format
#[derive(Debug)]
pub struct Error(String, Option<String>);

impl Error {
    pub fn new(message: &str, details: Option<&str>) -> Self {
        Error(message.to_string(), details.map(|d| d.to_string()))
    }

    /// Print the error to stderr and terminate with a failing exit code
    pub fn exit(&self) -> ! {
        eprintln!("{}\n{self}", console::style("Error").red().bold());
        std::process::exit(1)
    }
}

/// Display the message and details, as sort of a hint
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.1 {
            Some(details) => write!(f, "{}\n\n{}", self.0, console::style(details).dim()),
            None => write!(f, "{}", self.0),
        }
    }
}

impl std::error::Error for Error {}

/// Convert eyre reports, the chain of causes becomes the details
impl From<eyre::ErrReport> for Error {
    fn from(error: eyre::ErrReport) -> Self {
        let error = match error.downcast::<Error>() {
            Ok(error) => return error,
            Err(error) => error,
        };

        let causes = error
            .chain()
            .skip(1)
            .map(|cause| cause.to_string())
            .collect::<Vec<_>>();

        if causes.is_empty() {
            Error::new(&error.to_string(), None)
        } else {
            Error::new(&error.to_string(), Some(&causes.join("\n")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eyre::WrapErr;

    #[test]
    fn causes_become_details() {
        let report = Err::<(), _>(eyre::eyre!("Template has no Resources section"))
            .wrap_err("Failed to load stack.yaml")
            .unwrap_err();

        let error = Error::from(report);
        assert_eq!(error.0, "Failed to load stack.yaml");
        assert_eq!(error.1.as_deref(), Some("Template has no Resources section"));
    }

    #[test]
    fn keeps_wrapped_errors() {
        let report = eyre::Report::new(Error::new("Check failed", Some("2 problems")));
        let error = Error::from(report);

        assert_eq!(error.0, "Check failed");
        assert_eq!(error.1.as_deref(), Some("2 problems"));
    }
}
