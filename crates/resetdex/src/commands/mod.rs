//! Command dispatch: bridges CLI args -> catalog queries -> output formatting.

pub mod categories;
pub mod config_cmd;
pub mod list;
pub mod show;
pub mod tags;
pub mod util;
pub mod validate;

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, Command, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;

/// Dispatch a parsed command to its handler.
pub fn dispatch(cmd: Command, global: &GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    match cmd {
        // Commands that never touch the catalog
        Command::Config(args) => config_cmd::handle(args, global),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "resetdex", &mut std::io::stdout());
            Ok(())
        }
        Command::Validate(args) => validate::handle(&args, global, cfg),

        // Everything else reads the active catalog
        cmd => {
            let catalog = config::load_catalog(global, cfg)?;
            tracing::debug!(command = ?cmd, "dispatching command");
            match cmd {
                Command::List(args) => list::handle(&catalog, &args, global),
                Command::Show(args) => show::handle(&catalog, &args, global),
                Command::Categories => categories::handle(&catalog, global),
                Command::Tags => tags::handle(&catalog, global),
                Command::Config(_) | Command::Completions(_) | Command::Validate(_) => Ok(()),
            }
        }
    }
}
