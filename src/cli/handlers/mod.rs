use chrono::Local;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::model::{DashboardConfig, InfraConfig};
use crate::ops::board::Board;
use crate::ops::infra::InfraDashboard;
use crate::ops::stats::BoardStats;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run a non-interactive subcommand. Launching the TUI is handled in main.rs.
pub fn dispatch(cli: &Cli, config: &DashboardConfig) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    match &cli.command {
        None => Err("no subcommand given".into()),
        Some(Commands::Show(args)) => cmd_show(args, session_board(cli, config), json),
        Some(Commands::Stats) => cmd_stats(&session_board(cli, config), json),
        Some(Commands::Infra(args)) if args.snapshot => cmd_snapshot(&config.infra, json),
        Some(Commands::Infra(_)) => Err("the infra dashboard is interactive; use --snapshot to print it".into()),
    }
}

/// The board a fresh session would start with
fn session_board(cli: &Cli, config: &DashboardConfig) -> Board {
    let today = Local::now().date_naive();
    if cli.empty {
        Board::new(today)
    } else {
        Board::from_config(&config.board, today)
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_show(args: &ShowArgs, board: Board, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    match (args.panel, json) {
        (Panel::Schedule, true) => {
            println!("{}", serde_json::to_string_pretty(&schedule_to_json(&board))?)
        }
        (Panel::Priority, true) => {
            println!("{}", serde_json::to_string_pretty(&priority_to_json(&board))?)
        }
        (Panel::Goals, true) => {
            println!("{}", serde_json::to_string_pretty(&goals_to_json(&board))?)
        }
        (Panel::Schedule, false) => print_lines(&format_schedule(&board)),
        (Panel::Priority, false) => print_lines(&format_priority(&board)),
        (Panel::Goals, false) => print_lines(&format_goals(&board)),
    }
    Ok(())
}

fn cmd_stats(board: &Board, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let stats = BoardStats::compute(board);
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_lines(&format_stats(&stats));
    }
    Ok(())
}

fn cmd_snapshot(config: &InfraConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = InfraDashboard::new(config);
    let snapshot = dashboard.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
    } else {
        print_lines(&format_snapshot(snapshot));
    }
    Ok(())
}
