use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::model::Config;
use crate::ops::task_ops::{Confirmation, Notice, Session};

use super::input;
use super::pane::TaskPane;
use super::render;
use super::theme::Theme;

/// Two clicks on the same row within this window count as a double-click
pub const DOUBLE_CLICK: Duration = Duration::from_millis(400);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// A yes/no dialog is open; `App::confirm` holds the pending operation
    Confirm,
    /// A message dialog is open; `App::notice` holds the message
    Notice,
}

/// The clickable buttons under the input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Add,
    MarkComplete,
    Delete,
    ClearAll,
}

impl Button {
    pub const ALL: [Button; 4] = [
        Button::Add,
        Button::MarkComplete,
        Button::Delete,
        Button::ClearAll,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Button::Add => "ADD",
            Button::MarkComplete => "MARK COMPLETE",
            Button::Delete => "DELETE TASK",
            Button::ClearAll => "CLEAR ALL",
        }
    }
}

/// Screen regions recorded by the last draw, used to route mouse clicks
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    /// Text area of the input field
    pub input: Rect,
    /// Table body (rows only, without the heading line)
    pub table_body: Rect,
    pub buttons: Vec<(Button, Rect)>,
}

/// Main application state
pub struct App {
    pub session: Session,
    pub pane: TaskPane,
    pub mode: Mode,
    pub confirm: Option<Confirmation>,
    pub notice: Option<Notice>,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub should_quit: bool,
    pub hit_areas: HitAreas,
    /// Row and time of the last left click on the table
    pub last_click: Option<(usize, Instant)>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            session: Session::new(),
            pane: TaskPane::default(),
            mode: Mode::Normal,
            confirm: None,
            notice: None,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            should_quit: false,
            hit_areas: HitAreas::default(),
            last_click: None,
        }
    }
}

/// Options for a TUI run, resolved from the command line and config file
pub struct RunOptions {
    pub config: Config,
    pub mouse: bool,
}

/// Run the TUI application
pub fn run(options: RunOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(&options.config);
    let mouse = options.mouse;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));

    tracing::info!(mouse, "session started");
    let result = run_event_loop(&mut terminal, &mut app);
    tracing::info!(
        tasks = app.session.store().size(),
        "session ended, tasks discarded"
    );

    // Restore terminal
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
