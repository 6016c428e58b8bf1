use crate::error::Error;
use crate::runner::{Runnable, Runner};
use cfn_shapes_schema::registry::{self, type_names};
use color_eyre::owo_colors::OwoColorize as _;

#[derive(clap::Args, Clone)]
pub(crate) struct TypesCommand {
    /// Only types of this service, e.g. `Logs` or `wafv2`
    #[arg(short, long, value_name = "NAME")]
    service: Option<String>,
}

impl Runnable for TypesCommand {
    fn runner(&self) -> impl Runner {
        TypesRunner {
            command: self.clone(),
        }
    }
}

struct TypesRunner {
    command: TypesCommand,
}

impl TypesRunner {
    fn type_names(&self) -> Vec<&'static str> {
        type_names()
            .filter(|type_name| match &self.command.service {
                Some(service) => registry::service(type_name)
                    .is_some_and(|name| name.eq_ignore_ascii_case(service)),
                None => true,
            })
            .collect()
    }
}

impl Runner for TypesRunner {
    fn run(&mut self) -> Result<(), Error> {
        let type_names = self.type_names();

        if type_names.is_empty() {
            return Err(self.error(
                Some("Unknown service"),
                Some(&format!(
                    "Catalogued services are {}",
                    registry::services().join(", ")
                )),
                None,
            ));
        }

        for type_name in type_names {
            let (prefix, name) = type_name.rsplit_once("::").unwrap_or(("", type_name));
            println!("{}{}", format!("{prefix}::").dimmed(), name.bold());
        }

        Ok(())
    }
}
