use std::io;
use std::num::IntErrorKind;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::model::{
    CategoryKey, DashboardConfig, GoalColumn, PlannerTab, QuadrantKey, RecordId, ScheduleDraft,
    display_order,
};
use crate::ops::board::{Board, BoardError};
use crate::ops::infra::InfraDashboard;

use super::input;
use super::render;
use super::theme::Theme;

/// Which dashboard the session shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Planner,
    Infra,
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// An add form is open
    Form,
}

/// What an add form creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Schedule,
    Task,
    Goal,
}

/// A single input in an add form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Time,
    Text,
    Duration,
    Category,
    Quadrant,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Time => "Time",
            FormField::Text => "Text",
            FormField::Duration => "Minutes",
            FormField::Category => "Category",
            FormField::Quadrant => "Quadrant",
        }
    }

    /// Whether the field is edited by typing (as opposed to cycling a selector)
    pub fn is_text(self) -> bool {
        matches!(self, FormField::Time | FormField::Text | FormField::Duration)
    }
}

impl FormKind {
    pub fn fields(self) -> &'static [FormField] {
        match self {
            FormKind::Schedule => &[
                FormField::Time,
                FormField::Text,
                FormField::Duration,
                FormField::Category,
            ],
            FormKind::Task => &[FormField::Text, FormField::Quadrant],
            FormKind::Goal => &[FormField::Text, FormField::Category],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormKind::Schedule => "Add schedule item",
            FormKind::Task => "Add task",
            FormKind::Goal => "Add goal",
        }
    }
}

/// Input state of an open add form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddForm {
    pub kind: FormKind,
    /// Index into `kind.fields()`
    pub focus: usize,
    pub time: String,
    pub text: String,
    pub duration: String,
    pub category: CategoryKey,
    pub quadrant: QuadrantKey,
}

impl AddForm {
    pub fn new(kind: FormKind, default_duration: u32, quadrant: QuadrantKey) -> Self {
        AddForm {
            kind,
            focus: 0,
            time: String::new(),
            text: String::new(),
            duration: default_duration.to_string(),
            category: CategoryKey::Work,
            quadrant,
        }
    }

    pub fn focused(&self) -> FormField {
        self.kind.fields()[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.kind.fields().len();
    }

    pub fn focus_prev(&mut self) {
        let n = self.kind.fields().len();
        self.focus = (self.focus + n - 1) % n;
    }

    /// The text buffer behind the focused field, if it is a text field
    pub fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focused() {
            FormField::Time => Some(&mut self.time),
            FormField::Text => Some(&mut self.text),
            FormField::Duration => Some(&mut self.duration),
            FormField::Category | FormField::Quadrant => None,
        }
    }

    /// Display value of a field
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Time => self.time.clone(),
            FormField::Text => self.text.clone(),
            FormField::Duration => self.duration.clone(),
            FormField::Category => self.category.label().to_string(),
            FormField::Quadrant => self.quadrant.title().to_string(),
        }
    }
}

/// One-line message shown in the status row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Main application state
pub struct App {
    pub board: Board,
    pub infra: InfraDashboard,
    pub screen: Screen,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_help: bool,
    pub show_key_hints: bool,
    /// Cursor into the schedule's display order
    pub schedule_cursor: usize,
    /// Focused quadrant and row within it
    pub priority_focus: QuadrantKey,
    pub priority_cursor: usize,
    /// Focused column and row within it
    pub goal_focus: GoalColumn,
    pub goal_cursor: usize,
    pub form: Option<AddForm>,
    pub status: Option<StatusMessage>,
    pub default_duration: u32,
}

impl App {
    pub fn new(board: Board, infra: InfraDashboard, config: &DashboardConfig) -> Self {
        App {
            board,
            infra,
            screen: Screen::Planner,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_help: false,
            show_key_hints: config.ui.show_key_hints,
            schedule_cursor: 0,
            priority_focus: QuadrantKey::UrgentImportant,
            priority_cursor: 0,
            goal_focus: GoalColumn::Backlog,
            goal_cursor: 0,
            form: None,
            status: None,
            default_duration: config.board.default_duration,
        }
    }

    pub fn from_config(config: &DashboardConfig, screen: Screen, empty: bool) -> Self {
        let date = Local::now().date_naive();
        let board = if empty {
            Board::new(date)
        } else {
            Board::from_config(&config.board, date)
        };
        let mut app = App::new(board, InfraDashboard::new(&config.infra), config);
        app.screen = screen;
        app
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, err: &BoardError) {
        self.set_error_text(&err.to_string());
    }

    /// Show a rejected action in the status row
    pub fn set_error_text(&mut self, text: &str) {
        tracing::warn!(error = text, "operation rejected");
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error: true,
        });
    }

    // --- Cursor targets ---

    /// Id of the schedule item under the cursor
    pub fn selected_schedule_id(&self) -> Option<RecordId> {
        display_order(self.board.schedule())
            .get(self.schedule_cursor)
            .map(|i| i.id)
    }

    pub fn selected_task_id(&self) -> Option<RecordId> {
        self.board
            .tasks(self.priority_focus)
            .get(self.priority_cursor)
            .map(|t| t.id)
    }

    pub fn selected_goal_id(&self) -> Option<RecordId> {
        self.board
            .goals(self.goal_focus)
            .get(self.goal_cursor)
            .map(|g| g.id)
    }

    /// Keep cursors inside their lists after a mutation
    pub fn clamp_cursors(&mut self) {
        fn clamp(cursor: usize, len: usize) -> usize {
            cursor.min(len.saturating_sub(1))
        }
        self.schedule_cursor = clamp(self.schedule_cursor, self.board.schedule().len());
        self.priority_cursor = clamp(self.priority_cursor, self.board.tasks(self.priority_focus).len());
        self.goal_cursor = clamp(self.goal_cursor, self.board.goals(self.goal_focus).len());
    }

    // --- Forms ---

    pub fn open_form(&mut self) {
        let kind = match self.board.active_tab() {
            PlannerTab::Schedule => FormKind::Schedule,
            PlannerTab::Priority => FormKind::Task,
            PlannerTab::Goals => FormKind::Goal,
        };
        self.form = Some(AddForm::new(kind, self.default_duration, self.priority_focus));
        self.mode = Mode::Form;
        self.status = None;
    }

    pub fn close_form(&mut self) {
        self.form = None;
        self.mode = Mode::Navigate;
    }

    /// Submit the open form. On success the form closes and the cursor moves
    /// to the new record; on failure the form stays open with the error shown.
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.clone() else {
            return;
        };
        let result = match form.kind {
            FormKind::Schedule => match form.duration.trim().parse::<u32>() {
                Ok(minutes) => self.board.add_schedule_item(
                    ScheduleDraft::new(form.time, form.text, form.category).with_duration(minutes),
                ),
                Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
                    Err(BoardError::DurationTooLarge(form.duration.trim().to_string()))
                }
                Err(_) => Err(BoardError::InvalidDuration),
            },
            FormKind::Task => self.board.add_task(form.quadrant, &form.text),
            FormKind::Goal => self.board.add_goal(&form.text, form.category),
        };

        match result {
            Ok(id) => {
                self.close_form();
                self.focus_new_record(form.kind, form.quadrant, id);
                self.set_info("Added");
            }
            Err(e) => self.set_error(&e),
        }
    }

    fn focus_new_record(&mut self, kind: FormKind, quadrant: QuadrantKey, id: RecordId) {
        match kind {
            FormKind::Schedule => {
                if let Some(pos) = display_order(self.board.schedule())
                    .iter()
                    .position(|i| i.id == id)
                {
                    self.schedule_cursor = pos;
                }
            }
            FormKind::Task => {
                self.priority_focus = quadrant;
                self.priority_cursor = self.board.tasks(quadrant).len().saturating_sub(1);
            }
            FormKind::Goal => {
                self.goal_focus = GoalColumn::Backlog;
                self.goal_cursor = self.board.goals(GoalColumn::Backlog).len().saturating_sub(1);
            }
        }
    }
}

/// Run the TUI application
pub fn run(config: &DashboardConfig, screen: Screen, empty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::from_config(config, screen, empty);
    info!(screen = ?screen, "session started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("session ended");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        // Simulated refresh completes on a later tick
        if app.infra.tick(Instant::now(), Local::now()) {
            app.set_info("Refreshed");
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
