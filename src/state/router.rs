//! Event router: the window's entry point for every host event.
//!
//! Classifies each event into a [`Signal`] and dispatches it according to the
//! window lifecycle:
//!
//! ```text
//! Created --create--> Running --destroy--> Destroyed
//! ```
//!
//! While `Running`, control signals (timer, wheel, paint, destroy) go to their
//! handlers and every other event is recorded into the [`MessageStore`].

use crate::host::{Host, TimerId};
use crate::model::codes::{self, WM_CREATE, WM_DESTROY, WM_MOUSEWHEEL, WM_PAINT, WM_TIMER};
use crate::model::Event;
use crate::state::{MessageStore, ScrollController, ScrollOffset};
use crate::view::Renderer;
use std::time::Duration;
use tracing::{debug, info, trace, warn};

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;

/// Default period of the redraw timer.
pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

/// Lifecycle of the observed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterState {
    /// Constructed, waiting for the create signal.
    Created,
    /// Window alive; events are being recorded.
    Running,
    /// Window gone. Terminal state.
    Destroyed,
}

/// Closed set of signal kinds the router reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Window creation finished.
    Create,
    /// A timer elapsed.
    Timer(TimerId),
    /// Wheel rotated by a signed raw delta.
    Wheel(i16),
    /// Surface is ready to be painted.
    Paint,
    /// Window is closing.
    Destroy,
    /// Anything else.
    Generic(Event),
}

impl Signal {
    /// Classify a raw host event.
    pub fn classify(event: Event) -> Self {
        match event.code {
            WM_CREATE => Self::Create,
            WM_TIMER => Self::Timer(TimerId(event.param_a)),
            WM_MOUSEWHEEL => Self::Wheel(codes::hiword(event.param_a) as i16),
            WM_PAINT => Self::Paint,
            WM_DESTROY => Self::Destroy,
            _ => Self::Generic(event),
        }
    }
}

/// Router's answer to a dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// The router consumed the event.
    Handled,
    /// The host should apply its default processing.
    Default,
    /// The router is not accepting events in its current state.
    Rejected,
}

/// Owner of all per-window state.
///
/// Constructed with the window and dropped with it. Every handler receives
/// the host by reference; nothing is global.
#[derive(Debug)]
pub struct EventRouter {
    state: RouterState,
    store: MessageStore,
    scroll: ScrollController,
    renderer: Renderer,
    tick: Duration,
}

impl Default for EventRouter {
    fn default() -> Self {
        Self::new(DEFAULT_TICK)
    }
}

impl EventRouter {
    /// Router whose redraw timer fires every `tick`.
    pub fn new(tick: Duration) -> Self {
        Self {
            state: RouterState::Created,
            store: MessageStore::new(),
            scroll: ScrollController::new(),
            renderer: Renderer::default(),
            tick,
        }
    }

    /// Replace the renderer (e.g. to change layout metrics).
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RouterState {
        self.state
    }

    /// Recorded events.
    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    /// Current scroll offset.
    pub fn scroll_offset(&self) -> ScrollOffset {
        self.scroll.offset()
    }

    /// Period of the redraw timer.
    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Handle one host event.
    pub fn dispatch<H: Host>(&mut self, event: Event, host: &mut H) -> Reply {
        let signal = Signal::classify(event);
        match self.state {
            RouterState::Created => match signal {
                Signal::Create => self.on_create(host),
                _ => {
                    trace!(code = event.code, "Event before create, deferring to host");
                    Reply::Default
                }
            },
            RouterState::Running => match signal {
                Signal::Create => {
                    warn!("Duplicate create signal ignored");
                    Reply::Handled
                }
                Signal::Timer(timer) => self.on_timer(timer, host),
                Signal::Wheel(delta) => self.on_wheel(delta, host),
                Signal::Paint => self.on_paint(host),
                Signal::Destroy => self.on_destroy(host),
                Signal::Generic(event) => self.on_generic(event),
            },
            RouterState::Destroyed => {
                debug!(code = event.code, "Event after destroy rejected");
                Reply::Rejected
            }
        }
    }

    fn on_create<H: Host>(&mut self, host: &mut H) -> Reply {
        host.arm_timer(TimerId::REFRESH, self.tick);
        self.state = RouterState::Running;
        info!(tick_ms = self.tick.as_millis() as u64, "Window running");
        Reply::Handled
    }

    fn on_timer<H: Host>(&mut self, timer: TimerId, host: &mut H) -> Reply {
        trace!(timer = timer.0, "Timer tick");
        host.invalidate();
        Reply::Handled
    }

    fn on_wheel<H: Host>(&mut self, delta: i16, host: &mut H) -> Reply {
        let offset = self.scroll.on_wheel(delta);
        debug!(delta, offset = offset.get(), "Wheel scrolled");
        host.invalidate();
        Reply::Handled
    }

    fn on_paint<H: Host>(&mut self, host: &mut H) -> Reply {
        // Surface is released when it goes out of scope, on every path below.
        let mut surface = match host.begin_paint() {
            Ok(surface) => surface,
            Err(e) => {
                warn!(error = %e, "Skipping paint");
                return Reply::Handled;
            }
        };
        if let Err(e) =
            self.renderer
                .render(self.store.snapshot(), self.scroll.offset(), &mut surface)
        {
            warn!(error = %e, "Render aborted");
        }
        Reply::Handled
    }

    fn on_destroy<H: Host>(&mut self, host: &mut H) -> Reply {
        host.disarm_timer(TimerId::REFRESH);
        self.state = RouterState::Destroyed;
        host.post_quit(0);
        info!(
            recent = self.store.recent().len(),
            unique = self.store.unique().len(),
            "Window destroyed"
        );
        Reply::Handled
    }

    fn on_generic(&mut self, event: Event) -> Reply {
        trace!(
            code = event.code,
            name = codes::name(event.code).unwrap_or("?"),
            "Recording event"
        );
        self.store.record(event);
        Reply::Default
    }
}
