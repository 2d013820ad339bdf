use serde::Serialize;

use crate::model::{
    Goal, GoalColumn, InfraSnapshot, QuadrantKey, ScheduleItem, Task, display_order,
};
use crate::ops::board::Board;
use crate::ops::stats::{BoardStats, completion_rate};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ScheduleJson<'a> {
    pub date: String,
    pub completion_rate: u8,
    /// Items in display order (by start time)
    pub items: Vec<&'a ScheduleItem>,
}

#[derive(Serialize)]
pub struct QuadrantJson<'a> {
    pub quadrant: QuadrantKey,
    pub title: &'static str,
    pub tasks: &'a [Task],
}

#[derive(Serialize)]
pub struct ColumnJson<'a> {
    pub column: GoalColumn,
    pub title: &'static str,
    pub goals: &'a [Goal],
}

pub fn schedule_to_json(board: &Board) -> ScheduleJson<'_> {
    ScheduleJson {
        date: board.date().format("%Y-%m-%d").to_string(),
        completion_rate: completion_rate(board.schedule()),
        items: display_order(board.schedule()),
    }
}

pub fn priority_to_json(board: &Board) -> Vec<QuadrantJson<'_>> {
    QuadrantKey::ALL
        .into_iter()
        .map(|quadrant| QuadrantJson {
            quadrant,
            title: quadrant.title(),
            tasks: board.tasks(quadrant),
        })
        .collect()
}

pub fn goals_to_json(board: &Board) -> Vec<ColumnJson<'_>> {
    GoalColumn::ALL
        .into_iter()
        .map(|column| ColumnJson {
            column,
            title: column.title(),
            goals: board.goals(column),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

fn check_char(completed: bool) -> char {
    if completed { 'x' } else { ' ' }
}

/// Format a schedule item as a one-line summary
pub fn format_schedule_line(item: &ScheduleItem) -> String {
    format!(
        "[{}] {}  {:>3}m  {}  ({})",
        check_char(item.completed),
        item.time,
        item.duration,
        item.task,
        item.category.label()
    )
}

/// The schedule in start-time order
pub fn format_schedule(board: &Board) -> Vec<String> {
    let items = display_order(board.schedule());
    if items.is_empty() {
        return vec!["(nothing scheduled)".to_string()];
    }
    items.into_iter().map(format_schedule_line).collect()
}

/// Each quadrant as a header followed by its tasks
pub fn format_priority(board: &Board) -> Vec<String> {
    let mut lines = Vec::new();
    for quadrant in QuadrantKey::ALL {
        let tasks = board.tasks(quadrant);
        lines.push(format!("{} ({})", quadrant.title(), tasks.len()));
        for task in tasks {
            lines.push(format!("  [{}] {}", check_char(task.completed), task.text));
        }
    }
    lines
}

/// Each goal column as a header followed by its goals
pub fn format_goals(board: &Board) -> Vec<String> {
    let mut lines = Vec::new();
    for column in GoalColumn::ALL {
        let goals = board.goals(column);
        lines.push(format!("{} ({})", column.title(), goals.len()));
        for goal in goals {
            lines.push(format!("  {}  ({})", goal.text, goal.category.label()));
        }
    }
    lines
}

pub fn format_stats(stats: &BoardStats) -> Vec<String> {
    let mut lines = vec![format!(
        "Schedule: {}/{} complete ({}%)",
        stats.schedule_completed, stats.schedule_total, stats.completion_rate
    )];
    let title_w = stats
        .quadrants
        .iter()
        .map(|q| q.quadrant.title().len())
        .max()
        .unwrap_or(0);
    lines.push("Priority:".to_string());
    for q in &stats.quadrants {
        lines.push(format!(
            "  {:<title_w$}  {} open / {}",
            q.quadrant.title(),
            q.open,
            q.total,
            title_w = title_w,
        ));
    }
    lines.push("Goals:".to_string());
    for c in &stats.columns {
        lines.push(format!("  {:<11}  {}", c.column.title(), c.count));
    }
    lines
}

pub fn format_snapshot(snapshot: &InfraSnapshot) -> Vec<String> {
    let last = &snapshot.jenkins.last_build;
    let stats = snapshot.docker.stats;
    let mut lines = vec![
        format!(
            "Build: #{} {} on {} ({}, {})",
            last.number,
            last.status.label(),
            last.branch,
            last.commit_hash,
            last.duration
        ),
        format!(
            "Pipeline: {}",
            snapshot
                .jenkins
                .stages
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(" -> ")
        ),
        format!("Containers: {}/{} running", stats.running, stats.total),
    ];
    for c in &snapshot.docker.containers {
        lines.push(format!(
            "  {:<20} {:<8} {:<10} {}",
            c.name,
            c.status.label(),
            c.ports,
            c.uptime
        ));
    }
    let ec2 = &snapshot.ec2;
    lines.push(format!(
        "EC2: {} ({}, {}) {}, up {}",
        ec2.instance_id,
        ec2.instance_type,
        ec2.region,
        ec2.status.label(),
        ec2.uptime
    ));
    lines.push(format!("  public {}  private {}", ec2.public_ip, ec2.private_ip));
    for (label, value) in snapshot.metrics.entries() {
        lines.push(format!("  {:<12} {:>5.1}%", label, value));
    }
    let network = snapshot.metrics.network;
    lines.push(format!(
        "  {:<12} in {} MB/s, out {} MB/s",
        "Network", network.inbound, network.outbound
    ));
    lines.push(format!("Alerts: {}", snapshot.alerts.len()));
    for alert in &snapshot.alerts {
        lines.push(format!(
            "  {} {} ({})",
            alert.kind.label(),
            alert.message,
            alert.timestamp
        ));
    }
    lines
}
