use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "dayboard", about = concat!("dayboard v", env!("CARGO_PKG_VERSION"), " - plan the day, watch the infrastructure"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with an empty board instead of the sample data
    #[arg(long, global = true)]
    pub empty: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print one planner panel
    Show(ShowArgs),
    /// Print completion rate and per-panel counts
    Stats,
    /// Launch the infrastructure dashboard, or print its snapshot
    Infra(InfraArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    /// Panel to print
    #[arg(value_enum)]
    pub panel: Panel,
}

#[derive(Args)]
pub struct InfraArgs {
    /// Print the current snapshot instead of launching the dashboard
    #[arg(long)]
    pub snapshot: bool,
}

/// Planner panels addressable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Panel {
    Schedule,
    Priority,
    Goals,
}
