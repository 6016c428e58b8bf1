pub mod check;
pub mod show;
pub mod types;
use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Check templates against the catalogued property shapes
    Check(check::CheckCommand),

    /// List catalogued resource types
    Types(types::TypesCommand),

    /// Print the required properties of a resource type
    Show(show::ShowCommand),
}
