//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::dispatch::{Dispatcher, InputEvent};
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen with every view of the current selection.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// Applies key presses to the shared selection and renders the views.
    dispatcher: Dispatcher,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    ui_config: UIConfig,
}

impl App {
    pub fn new(dispatcher: Dispatcher, ui_config: UIConfig) -> Self {
        Self {
            start_time: Instant::now(),
            dispatcher,
            current_screen: Screen::Splash,
            ui_config,
        }
    }

    fn open_dashboard(&mut self) {
        let state = DashboardState::new(&self.dispatcher, self.start_time, &self.ui_config);
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Applies a dashboard key press. Returns false for keys the dashboard ignores.
pub(crate) fn handle_dashboard_key(
    dispatcher: &mut Dispatcher,
    state: &mut DashboardState,
    code: KeyCode,
) -> bool {
    let event = match code {
        KeyCode::Up => {
            state.move_cursor(-1);
            return true;
        }
        KeyCode::Down => {
            state.move_cursor(1);
            return true;
        }
        KeyCode::Enter => match state.cursor_iso() {
            Some(iso) => InputEvent::MapClicked { iso },
            None => return false,
        },
        KeyCode::Char('m') | KeyCode::Char('M') => InputEvent::MetricChanged {
            metric: dispatcher.state().metric().toggled(),
        },
        _ => return false,
    };
    let outcome = dispatcher.dispatch(event);
    state.apply_outcome(outcome, dispatcher.state());
    true
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.open_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                }

                if let Screen::Dashboard(state) = &mut app.current_screen {
                    handle_dashboard_key(&mut app.dispatcher, state, key.code);
                } else {
                    // Any key press will skip the splash screen
                    app.open_dashboard();
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
