//! Terminal host and rendering (impure shell)

pub mod renderer;
pub mod surface;
pub mod translate;
pub mod window;

pub use renderer::{LayoutMetrics, Renderer};
pub use surface::{BufferSurface, CellSize};
pub use translate::translate;
pub use window::TerminalWindow;

use crate::host::Host;
use crate::model::codes::{
    make_lparam, SIZE_RESTORED, WM_CLOSE, WM_CREATE, WM_DESTROY, WM_MOVE, WM_PAINT, WM_SIZE,
    WM_TIMER,
};
use crate::model::Event;
use crate::state::{EventRouter, Reply};
use crossterm::{
    event::{
        self, Event as TerminalEvent, KeyCode, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal::{
        self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
        SetTitle,
    },
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// How long to wait for input when no timer is armed.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Window settings resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowOptions {
    /// Terminal title.
    pub title: String,
    /// Period of the redraw timer.
    pub tick: Duration,
    /// Whether mouse input is captured (and therefore inspected).
    pub mouse_capture: bool,
    /// Whether the terminal reports key releases and auto-repeat.
    ///
    /// Without this, terminals only deliver key presses and no `WM_KEYUP`
    /// is ever produced.
    pub report_key_events: bool,
}

/// Decide whether key release and repeat reporting can be turned on.
///
/// `supported` is only queried when the option asks for it.
fn enable_key_events(requested: bool, supported: impl FnOnce() -> io::Result<bool>) -> bool {
    requested && matches!(supported(), Ok(true))
}

/// Main TUI application: one terminal window, one router.
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    router: EventRouter,
    window: TerminalWindow,
    options: WindowOptions,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(options: &WindowOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        if options.mouse_capture {
            stdout.execute(event::EnableMouseCapture)?;
        }
        stdout.execute(event::EnableFocusChange)?;
        stdout.execute(event::EnableBracketedPaste)?;

        // Support is queried from the terminal, so raw mode must already be on.
        let report_key_events = enable_key_events(
            options.report_key_events,
            terminal::supports_keyboard_enhancement,
        );
        if report_key_events {
            let flags = PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES);
            stdout.execute(flags)?;
        }
        info!(
            requested = options.report_key_events,
            enabled = report_key_events,
            "Key release reporting"
        );

        stdout.execute(SetTitle(&options.title))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        let options = WindowOptions {
            report_key_events,
            ..options.clone()
        };
        Self::with_terminal(terminal, &options)
    }

    /// Run the message pump until the window is destroyed.
    ///
    /// Returns the exit code posted on destroy.
    pub fn run(&mut self) -> Result<i32, TuiError> {
        self.open()?;

        loop {
            if let Some(code) = self.exit_code() {
                return Ok(code);
            }

            let timeout = self
                .window
                .next_timeout(Instant::now())
                .unwrap_or(IDLE_POLL);
            if event::poll(timeout)? {
                let terminal_event = event::read()?;
                self.handle_terminal_event(&terminal_event)?;
            }
            self.fire_due_timers(Instant::now())?;

            // Paint requests are only generated once the input queue is drained.
            if self.window.is_invalid() && !event::poll(Duration::ZERO)? {
                self.paint_if_invalid()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Wrap an already initialized terminal.
    pub fn with_terminal(terminal: Terminal<B>, options: &WindowOptions) -> Result<Self, TuiError> {
        let size = terminal.size()?;
        let window = TerminalWindow::new(Rect::new(0, 0, size.width, size.height));
        Ok(Self {
            terminal,
            router: EventRouter::new(options.tick),
            window,
            options: options.clone(),
        })
    }

    /// Create, show and update the window.
    ///
    /// Delivers the create signal, the initial size and position, then paints
    /// immediately rather than waiting for the first timer tick.
    pub fn open(&mut self) -> Result<(), TuiError> {
        self.deliver(Event::new(WM_CREATE, 0, 0))?;
        let area = self.window.area();
        self.deliver(Event::new(
            WM_SIZE,
            SIZE_RESTORED,
            make_lparam(area.width, area.height),
        ))?;
        self.deliver(Event::new(WM_MOVE, 0, make_lparam(area.x, area.y)))?;
        self.invalidate();
        self.paint_if_invalid()
    }

    /// Hand one event to the router, then apply default processing if asked.
    pub fn deliver(&mut self, event: Event) -> Result<Reply, TuiError> {
        let reply = self.router.dispatch(event, &mut self.window);
        if reply == Reply::Default {
            self.default_processing(event)?;
        }
        self.present()?;
        Ok(reply)
    }

    /// Translate and deliver one terminal event.
    pub fn handle_terminal_event(
        &mut self,
        terminal_event: &TerminalEvent,
    ) -> Result<(), TuiError> {
        match terminal_event {
            // Ctrl+C is the terminal's close button.
            TerminalEvent::Key(key)
                if key.kind == KeyEventKind::Press
                    && key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                debug!("Close requested");
                self.deliver(Event::new(WM_CLOSE, 0, 0))?;
                return Ok(());
            }
            TerminalEvent::Resize(width, height) => {
                self.window.resize(Rect::new(0, 0, *width, *height));
                // Window class redraws on horizontal and vertical resize.
                self.invalidate();
            }
            _ => {}
        }

        for event in translate(terminal_event) {
            self.deliver(event)?;
        }
        Ok(())
    }

    /// Deliver a timer event for every timer due at `now`.
    pub fn fire_due_timers(&mut self, now: Instant) -> Result<(), TuiError> {
        for timer in self.window.take_due_timers(now) {
            self.deliver(Event::new(WM_TIMER, timer.0, 0))?;
        }
        Ok(())
    }

    /// Deliver a paint request if the window has been invalidated.
    pub fn paint_if_invalid(&mut self) -> Result<(), TuiError> {
        if self.window.is_invalid() {
            self.deliver(Event::new(WM_PAINT, 0, 0))?;
        }
        Ok(())
    }

    /// Exit code posted by the router, once the window has been destroyed.
    pub fn exit_code(&self) -> Option<i32> {
        self.window.exit_code()
    }

    /// Options the window was set up with.
    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    /// The window's router.
    pub fn router(&self) -> &EventRouter {
        &self.router
    }

    /// The terminal window host.
    pub fn window(&self) -> &TerminalWindow {
        &self.window
    }

    /// Underlying terminal (tests inspect the backend buffer through this).
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn invalidate(&mut self) {
        self.window.invalidate();
    }

    fn default_processing(&mut self, event: Event) -> Result<(), TuiError> {
        if event.code == WM_CLOSE {
            info!("Closing window");
            self.deliver(Event::new(WM_DESTROY, 0, 0))?;
        }
        Ok(())
    }

    /// Copy a finished paint onto the terminal.
    fn present(&mut self) -> Result<(), TuiError> {
        let Some(frame) = self.window.take_painted() else {
            return Ok(());
        };
        self.terminal.draw(|f| {
            let target = f.buffer_mut();
            let area = target.area.intersection(frame.area);
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    target[(x, y)] = frame[(x, y)].clone();
                }
            }
        })?;
        Ok(())
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the message pump, and ensures cleanup on
/// exit. Logging must be initialized by the caller.
pub fn run_with_options(options: &WindowOptions) -> Result<i32, TuiError> {
    let mut app = TuiApp::new(options)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state, undoing only what was actually set up
    restore_terminal(app.options())?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, key event reporting, mouse capture and focus reporting,
/// and leaves alternate screen
fn restore_terminal(options: &WindowOptions) -> Result<(), TuiError> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    if options.report_key_events {
        stdout.execute(PopKeyboardEnhancementFlags)?;
    }
    if options.mouse_capture {
        stdout.execute(event::DisableMouseCapture)?;
    }
    stdout.execute(event::DisableFocusChange)?;
    stdout.execute(event::DisableBracketedPaste)?;
    stdout.execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
