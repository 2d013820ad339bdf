use std::rc::Rc;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{AlertKind, BuildStatus, InfraSnapshot, InfraTab, RunState};
use crate::tui::app::App;

use super::helpers::{bar_parts, display_width, truncate};

/// Throughput that fills a network bar
const NETWORK_SCALE_MBPS: f64 = 4.0;

/// Render the active infrastructure panel
pub fn render_infra_view(frame: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.infra.snapshot();
    match app.infra.active_tab() {
        InfraTab::Overview => render_overview(frame, app, snapshot, area),
        InfraTab::Jenkins => render_jenkins(frame, app, snapshot, area),
        InfraTab::Docker => render_docker(frame, app, snapshot, area),
        InfraTab::Monitoring => render_monitoring(frame, app, snapshot, area),
        InfraTab::Metrics => render_metrics(frame, app, snapshot, area),
    }
}

// --- Shared pieces ---

fn percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

fn build_color(app: &App, status: BuildStatus) -> Color {
    match status {
        BuildStatus::Success => app.theme.green,
        BuildStatus::Failure => app.theme.red,
        BuildStatus::Building => app.theme.yellow,
    }
}

fn run_color(app: &App, state: RunState) -> Color {
    match state {
        RunState::Running => app.theme.green,
        RunState::Stopped => app.theme.red,
    }
}

fn alert_color(app: &App, kind: AlertKind) -> Color {
    match kind {
        AlertKind::Warning => app.theme.yellow,
        AlertKind::Info => app.theme.blue,
    }
}

fn panel<'a>(app: &App, title: &str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(app.theme.background))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.background)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(app.theme.background))
}

/// A bordered card: label as title, a bold value, and a dim caption
fn stat_card(frame: &mut Frame, app: &App, area: Rect, label: &str, value: Span, caption: &str) {
    let block = panel(app, label);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let width = inner.width as usize;
    let lines = vec![
        Line::from(vec![
            Span::raw(" "),
            value.patch_style(Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            format!(" {}", truncate(caption, width.saturating_sub(1))),
            Style::default().fg(app.theme.dim),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        inner,
    );
}

/// One labelled bar: `label  ████░░░░  45.2%`
fn metric_bar<'a>(
    app: &App,
    label: &str,
    fill: u8,
    value: &str,
    color: Color,
    label_width: usize,
    width: usize,
) -> Line<'a> {
    let bar_width = width.saturating_sub(label_width + 3 + display_width(value));
    let (filled, empty) = bar_parts(fill, bar_width);
    let label = truncate(label, label_width);
    let pad = label_width.saturating_sub(display_width(&label));
    Line::from(vec![
        Span::styled(
            format!(" {}{} ", label, " ".repeat(pad)),
            Style::default().fg(app.theme.text),
        ),
        Span::styled(filled, Style::default().fg(color)),
        Span::styled(empty, Style::default().fg(app.theme.dim)),
        Span::styled(format!(" {}", value), Style::default().fg(app.theme.text_bright)),
    ])
}

/// CPU, memory and disk bars
fn performance_lines<'a>(app: &App, snapshot: &InfraSnapshot, width: usize) -> Vec<Line<'a>> {
    let colors = [app.theme.blue, app.theme.green, app.theme.yellow];
    snapshot
        .metrics
        .entries()
        .into_iter()
        .zip(colors)
        .map(|((label, value), color)| {
            metric_bar(app, label, percent(value), &format!("{}%", value), color, 12, width)
        })
        .collect()
}

/// `label ........ value`, value right-aligned to `width`
fn key_value<'a>(app: &App, label: &str, value: String, width: usize) -> Line<'a> {
    let left = format!(" {}", label);
    let right = format!("{} ", value);
    let pad = width.saturating_sub(display_width(&left) + display_width(&right));
    Line::from(vec![
        Span::styled(left, Style::default().fg(app.theme.dim)),
        Span::raw(" ".repeat(pad)),
        Span::styled(right, Style::default().fg(app.theme.text_bright)),
    ])
}

fn alert_lines<'a>(app: &App, snapshot: &InfraSnapshot, width: usize) -> Vec<Line<'a>> {
    if snapshot.alerts.is_empty() {
        return vec![Line::from(Span::styled(
            " No active alerts",
            Style::default().fg(app.theme.dim),
        ))];
    }
    snapshot
        .alerts
        .iter()
        .map(|alert| {
            let time = format!(" {} ", alert.timestamp);
            let prefix = format!(" {} ", alert.kind.label());
            let room = width.saturating_sub(display_width(&prefix) + display_width(&time));
            let message = truncate(&alert.message, room);
            let pad = room.saturating_sub(display_width(&message));
            Line::from(vec![
                Span::styled(
                    prefix,
                    Style::default()
                        .fg(alert_color(app, alert.kind))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(message, Style::default().fg(app.theme.text)),
                Span::raw(" ".repeat(pad)),
                Span::styled(time, Style::default().fg(app.theme.dim)),
            ])
        })
        .collect()
}

fn render_lines(frame: &mut Frame, app: &App, block: Block, lines: Vec<Line>, area: Rect) {
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        inner,
    );
}

fn halves(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area)
}

// --- Panels ---

fn render_overview(frame: &mut Frame, app: &App, snapshot: &InfraSnapshot, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);

    let last = &snapshot.jenkins.last_build;
    stat_card(
        frame,
        app,
        cards[0],
        "Jenkins Build",
        Span::styled(last.status.label(), Style::default().fg(build_color(app, last.status))),
        &format!("#{} on {}", last.number, last.branch),
    );
    let stats = snapshot.docker.stats;
    stat_card(
        frame,
        app,
        cards[1],
        "Containers",
        Span::styled(
            format!("{}/{}", stats.running, stats.total),
            Style::default().fg(app.theme.blue),
        ),
        "running",
    );
    let ec2 = &snapshot.ec2;
    stat_card(
        frame,
        app,
        cards[2],
        "EC2 Instance",
        Span::styled(
            ec2.status.label().to_uppercase(),
            Style::default().fg(app.theme.purple),
        ),
        &ec2.instance_type,
    );
    let cpu = snapshot.metrics.cpu;
    stat_card(
        frame,
        app,
        cards[3],
        "CPU Usage",
        Span::styled(
            format!("{}%", cpu),
            Style::default().fg(app.theme.level_color(percent(cpu))),
        ),
        "of host",
    );

    let lower = halves(rows[1]);
    let performance = panel(app, "System Performance");
    let width = performance.inner(lower[0]).width as usize;
    render_lines(frame, app, performance, performance_lines(app, snapshot, width), lower[0]);
    let alerts = panel(app, "Recent Alerts");
    let width = alerts.inner(lower[1]).width as usize;
    render_lines(frame, app, alerts, alert_lines(app, snapshot, width), lower[1]);
}

fn render_jenkins(frame: &mut Frame, app: &App, snapshot: &InfraSnapshot, area: Rect) {
    let jenkins = &snapshot.jenkins;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
        .split(rows[0]);

    let last = &jenkins.last_build;
    let status_style = Style::default()
        .fg(build_color(app, last.status))
        .add_modifier(Modifier::BOLD);
    let label = |text: &str| Span::styled(format!(" {:<9}", text), Style::default().fg(app.theme.dim));
    let value = |text: &str| Span::styled(text.to_string(), Style::default().fg(app.theme.text_bright));
    let details = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", last.status.symbol()), status_style),
            Span::styled(
                format!("Build #{}", last.number),
                Style::default().fg(app.theme.text_bright).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![label("Status"), Span::styled(last.status.label(), status_style)]),
        Line::from(vec![label("Duration"), value(&last.duration)]),
        Line::from(vec![label("Branch"), value(&last.branch)]),
        Line::from(vec![label("Commit"), value(&last.commit_hash)]),
    ];
    render_lines(frame, app, panel(app, "Latest Build"), details, top[0]);

    let history = panel(app, "Build History");
    let width = history.inner(top[1]).width as usize;
    let rows_text = jenkins
        .builds
        .iter()
        .map(|run| {
            let left = vec![
                Span::styled(
                    format!(" {} ", run.status.symbol()),
                    Style::default().fg(build_color(app, run.status)),
                ),
                Span::styled(
                    format!("Build #{:<4} ", run.number),
                    Style::default().fg(app.theme.text_bright),
                ),
                Span::styled(run.timestamp.clone(), Style::default().fg(app.theme.dim)),
            ];
            let used: usize = left.iter().map(|s| display_width(&s.content)).sum();
            let right = format!("{} ", run.duration);
            let pad = width.saturating_sub(used + display_width(&right));
            let mut spans = left;
            spans.push(Span::raw(" ".repeat(pad)));
            spans.push(Span::styled(right, Style::default().fg(app.theme.text)));
            Line::from(spans)
        })
        .collect();
    render_lines(frame, app, history, rows_text, top[1]);

    let mut strip: Vec<Span> = vec![Span::raw(" ")];
    for (i, stage) in jenkins.stages.iter().enumerate() {
        if i > 0 {
            strip.push(Span::styled(" \u{2192} ", Style::default().fg(app.theme.dim)));
        }
        strip.push(Span::styled(
            format!("{} ", stage.status.symbol()),
            Style::default().fg(build_color(app, stage.status)),
        ));
        strip.push(Span::styled(stage.name.clone(), Style::default().fg(app.theme.text)));
    }
    render_lines(frame, app, panel(app, "Pipeline Stages"), vec![Line::from(strip)], rows[1]);
}

fn render_docker(frame: &mut Frame, app: &App, snapshot: &InfraSnapshot, area: Rect) {
    let mut rows = vec![Line::from(Span::styled(
        format!(
            " {:<20} {:<9} {:<24} {:<10} {}",
            "CONTAINER", "STATUS", "IMAGE", "PORTS", "UPTIME"
        ),
        Style::default().fg(app.theme.dim).add_modifier(Modifier::BOLD),
    ))];
    for c in &snapshot.docker.containers {
        rows.push(Line::from(vec![
            Span::styled(
                format!(" {:<20} ", truncate(&c.name, 20)),
                Style::default().fg(app.theme.text_bright),
            ),
            Span::styled(
                format!("{:<9} ", c.status.title()),
                Style::default().fg(run_color(app, c.status)),
            ),
            Span::styled(
                format!("{:<24} ", truncate(&c.image, 24)),
                Style::default().fg(app.theme.text),
            ),
            Span::styled(format!("{:<10} ", c.ports), Style::default().fg(app.theme.text)),
            Span::styled(c.uptime.clone(), Style::default().fg(app.theme.dim)),
        ]));
    }
    let stats = snapshot.docker.stats;
    let title = format!(
        "Container Status ({} running, {} total)",
        stats.running, stats.total
    );
    render_lines(frame, app, panel(app, &title), rows, area);
}

fn render_monitoring(frame: &mut Frame, app: &App, snapshot: &InfraSnapshot, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(1)])
        .split(area);

    let ec2 = &snapshot.ec2;
    let details = panel(app, "EC2 Instance Details");
    let width = details.inner(rows[0]).width as usize;
    let lines = [
        ("Instance ID", &ec2.instance_id),
        ("Instance Type", &ec2.instance_type),
        ("Region", &ec2.region),
        ("Public IP", &ec2.public_ip),
        ("Private IP", &ec2.private_ip),
        ("Uptime", &ec2.uptime),
    ]
    .into_iter()
    .map(|(label, value)| {
        let label = Span::styled(format!(" {:<16}", label), Style::default().fg(app.theme.dim));
        let value = truncate(value, width.saturating_sub(17));
        Line::from(vec![label, Span::styled(value, Style::default().fg(app.theme.text_bright))])
    })
    .collect();
    render_lines(frame, app, details, lines, rows[0]);

    let lower = halves(rows[1]);
    let services = snapshot
        .services
        .iter()
        .map(|s| {
            Line::from(vec![
                Span::styled(
                    format!(" {} ", s.status.symbol()),
                    Style::default().fg(run_color(app, s.status)),
                ),
                Span::styled(format!("{:<12}", s.name), Style::default().fg(app.theme.text_bright)),
                Span::styled(format!("Port {}", s.port), Style::default().fg(app.theme.dim)),
            ])
        })
        .collect();
    render_lines(frame, app, panel(app, "Monitoring Services"), services, lower[0]);

    let network = panel(app, "Network Traffic");
    let width = network.inner(lower[1]).width as usize;
    let traffic = snapshot.metrics.network;
    let lines = [
        ("Inbound", traffic.inbound, app.theme.green),
        ("Outbound", traffic.outbound, app.theme.blue),
    ]
    .into_iter()
    .map(|(label, mbps, color)| {
        let fill = percent(mbps / NETWORK_SCALE_MBPS * 100.0);
        metric_bar(app, label, fill, &format!("{} MB/s", mbps), color, 9, width)
    })
    .collect();
    render_lines(frame, app, network, lines, lower[1]);
}

fn render_metrics(frame: &mut Frame, app: &App, snapshot: &InfraSnapshot, area: Rect) {
    let columns = halves(area);

    let usage = panel(app, "CPU & Memory Usage");
    let width = usage.inner(columns[0]).width as usize;
    render_lines(frame, app, usage, performance_lines(app, snapshot, width), columns[0]);

    let allocation = panel(app, "Resource Allocation");
    let width = allocation.inner(columns[1]).width as usize;
    let lines = snapshot
        .allocation
        .entries()
        .into_iter()
        .map(|(label, gb)| key_value(app, label, format!("{} GB", gb), width))
        .collect();
    render_lines(frame, app, allocation, lines, columns[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn render(app: &App) -> String {
        render_to_string(TERM_W, 18, |frame, area| render_infra_view(frame, app, area))
    }

    fn on_tab(tab: InfraTab) -> String {
        let mut app = infra_app();
        app.infra.set_tab(tab);
        render(&app)
    }

    #[test]
    fn percent_rounds_and_clamps() {
        assert_eq!(percent(45.2), 45);
        assert_eq!(percent(68.7), 69);
        assert_eq!(percent(140.0), 100);
        assert_eq!(percent(-3.0), 0);
    }

    #[test]
    fn overview_shows_cards_performance_and_alerts() {
        let output = on_tab(InfraTab::Overview);
        assert!(output.contains("Jenkins Build"));
        assert!(output.contains("SUCCESS"));
        assert!(output.contains("#45 on main"));
        assert!(output.contains("5/6"));
        assert!(output.contains("RUNNING"));
        assert!(output.contains("45.2%"));
        assert!(output.contains("System Performance"));
        assert!(output.contains("68.7%"));
        assert!(output.contains("WARN"));
        assert!(output.contains("10:45 AM"));
    }

    #[test]
    fn jenkins_shows_latest_build_and_history() {
        let output = on_tab(InfraTab::Jenkins);
        assert!(output.contains("Build #45"));
        assert!(output.contains("a7b3c2d"));
        assert!(output.contains("2m 34s"));
        assert!(output.contains("Build #43"));
        assert!(output.contains("08:45"));
        assert!(output.contains("\u{2718} Build #43"));
    }

    #[test]
    fn jenkins_shows_pipeline_stage_strip() {
        let output = on_tab(InfraTab::Jenkins);
        assert!(output.contains("Pipeline Stages"));
        assert!(output.contains(
            "\u{2714} Clone \u{2192} \u{2714} Build Docker Image \u{2192} \u{2714} Push to Docker Hub \u{2192} \u{2714} Deploy Container"
        ));
    }

    #[test]
    fn docker_table_has_ports_column() {
        let output = on_tab(InfraTab::Docker);
        assert!(output.contains("Container Status (5 running, 6 total)"));
        assert!(output.contains("PORTS"));
        for (name, ports) in [
            ("auto-infra-container", "3002:3000"),
            ("prometheus", "9090:9090"),
            ("grafana", "3010:3000"),
            ("cadvisor", "8081:8080"),
        ] {
            let row = output
                .lines()
                .find(|l| l.contains(name))
                .unwrap_or_else(|| panic!("missing {}", name));
            assert!(row.contains(ports), "{} row lacks {}", name, ports);
        }
        assert!(output.contains("Running"));
        assert!(output.contains("ashutosh1201/auto-infra\u{2026}"));
    }

    #[test]
    fn monitoring_shows_ec2_details() {
        let output = on_tab(InfraTab::Monitoring);
        assert!(output.contains("EC2 Instance Details"));
        assert!(output.contains("Instance ID     i-0abcdef1234567890"));
        assert!(output.contains("Instance Type   t3.medium"));
        assert!(output.contains("Region          us-east-1"));
        assert!(output.contains("54.123.456.789"));
        assert!(output.contains("10.0.1.123"));
        assert!(output.contains("7d 14h"));
    }

    #[test]
    fn monitoring_shows_services_and_network() {
        let output = on_tab(InfraTab::Monitoring);
        assert!(output.contains("Grafana     Port 3010"));
        assert!(output.contains("Graphite    Port 80"));
        assert!(output.contains("1.2 MB/s"));
        assert!(output.contains("0.8 MB/s"));
    }

    #[test]
    fn metrics_show_usage_and_allocation() {
        let output = on_tab(InfraTab::Metrics);
        assert!(output.contains("CPU & Memory Usage"));
        assert!(output.contains("32.1%"));
        assert!(output.contains("Resource Allocation"));
        let ram = output.lines().find(|l| l.contains("Total RAM")).unwrap();
        assert!(ram.contains("4 GB"));
        assert!(output.contains("1.2 GB"));
        assert!(output.contains("34 GB"));
    }
}
