mod commands;
mod config;
mod error;
mod logger;
mod runner;
mod writer;

use crate::commands::Commands;
use crate::logger::Logger;
use crate::runner::{Runnable, Runner};
use clap::Parser;

#[derive(Parser)]
#[command(
    arg_required_else_help = true,
    name = "cfn-shapes",
    version,
    about = "Check CloudFormation templates against typed resource property shapes",
    long_about = "Reads CloudFormation templates in JSON or YAML and reports resources whose properties do not match the catalogued shapes of Kendra, Lightsail, CloudWatch Logs and WAFv2 resource types."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Derive a runner from the command and run it
fn run(command: impl Runnable) {
    if let Err(error) = command.runner().run() {
        error.exit()
    }
}

fn main() {
    Logger::init();
    let cli = Cli::parse();

    // Match all commands here, in one place
    match cli.command {
        Commands::Check(cmd) => run(cmd),
        Commands::Types(cmd) => run(cmd),
        Commands::Show(cmd) => run(cmd),
    }
}
