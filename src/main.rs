use clap::Parser;
use dayboard::cli::commands::{Cli, Commands};
use dayboard::cli::handlers;
use dayboard::io::{config_io, logging};
use dayboard::model::DashboardConfig;
use dayboard::tui::Screen;

fn main() {
    let cli = Cli::parse();

    let config = match config_io::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match &cli.command {
        // No subcommand → planner TUI
        None => run_tui(&config, Screen::Planner, cli.empty),
        Some(Commands::Infra(args)) if !args.snapshot => run_tui(&config, Screen::Infra, cli.empty),
        Some(_) => {
            logging::init_stderr_logging();
            handlers::dispatch(&cli, &config)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_tui(config: &DashboardConfig, screen: Screen, empty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = config_io::state_dir();
    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = match logging::init_file_logging(&log_dir, &config.log.level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled ({}: {})", log_dir.display(), e);
            None
        }
    };
    dayboard::tui::run(config, screen, empty)
}
