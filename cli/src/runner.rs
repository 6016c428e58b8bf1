use crate::config::ConfigFile;
use crate::error::Error;
use std::error::Error as StdError;

pub(crate) trait Runner {
    /// Configuration from the working directory, defaults when there is none
    fn config(&self) -> Result<ConfigFile, Error> {
        let dir = std::env::current_dir().map_err(|e| {
            self.error(
                Some("Working directory is not accessible"),
                None,
                Some(Box::new(e)),
            )
        })?;

        Ok(ConfigFile::from_path(&dir)?)
    }

    /// Run the command
    ///
    /// Returns an error shown to the user in case of failure
    fn run(&mut self) -> Result<(), Error>;

    /// Construct an error shown to the user
    fn error(
        &self,
        title: Option<&str>,
        description: Option<&str>,
        origin: Option<Box<dyn StdError>>,
    ) -> Error {
        if let Some(origin) = origin {
            log::error!("{origin:?}");
        }

        if let Some(title) = title {
            Error::new(title, description)
        } else {
            Error::new("Failed to run the command", description)
        }
    }
}

/// Return a runner for a command
pub(crate) trait Runnable {
    fn runner(&self) -> impl Runner;
}
