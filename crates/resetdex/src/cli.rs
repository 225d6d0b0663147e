//! Clap derive structures for the `resetdex` CLI.
//!
//! Defines the command tree, global flags, and shared types. Kept free of
//! crate-internal imports so `build.rs` can include it for man pages.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// resetdex -- factory-reset procedures for network and security devices
#[derive(Debug, Parser)]
#[command(
    name = "resetdex",
    version,
    about = "Browse factory-reset procedures for network and security devices",
    long_about = "Search a catalog of routers, cameras, intercoms and access\n\
        controllers, and print step-by-step factory-reset instructions.\n\n\
        Uses the built-in catalog unless --catalog or the `catalog` config\n\
        key points at a TOML or JSON file.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Catalog file (TOML, or JSON by extension) replacing the built-in one
    #[arg(long, env = "RESETDEX_CATALOG", global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Output format [default: table, or `defaults.output` from config]
    #[arg(long, short = 'o', env = "RESETDEX_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

impl GlobalOpts {
    pub fn output(&self) -> OutputFormat {
        self.output.clone().unwrap_or(OutputFormat::Table)
    }

    pub fn color(&self) -> ColorMode {
        self.color.clone().unwrap_or(ColorMode::Auto)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List devices matching the given filters
    #[command(alias = "ls", alias = "l")]
    List(ListArgs),

    /// Show the reset procedure for one device
    #[command(alias = "get", alias = "s")]
    Show(ShowArgs),

    /// List categories with device counts
    #[command(alias = "cat")]
    Categories,

    /// List reset-method and connectivity tags with device counts
    Tags,

    /// Check a catalog file for parse errors and duplicate ids
    Validate(ValidateArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── List ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive text matched against model, category and summary
    #[arg(long, short = 'Q')]
    pub query: Option<String>,

    /// Exact category name (see `resetdex categories`)
    #[arg(long, short = 'C')]
    pub category: Option<String>,

    /// Reset-method tag, e.g. botao, interface, padrao
    #[arg(long, short = 'r', value_name = "TAG")]
    pub reset: Option<String>,

    /// Connectivity tag, e.g. wifi, cabo, poe
    #[arg(long, short = 'n', value_name = "TAG")]
    pub connectivity: Option<String>,
}

// ── Show ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Device id (see `resetdex list -o plain`)
    pub id: String,
}

// ── Validate ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Catalog file to check. Checks the active catalog when omitted.
    pub path: Option<PathBuf>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Show the effective configuration
    Show,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
