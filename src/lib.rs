//! CheapSpy message inspector
//!
//! Terminal application that records every window message it receives and
//! shows them in two panes: the ten most recent messages and one line per
//! distinct `(code, wParam)` signature seen since startup.
//!
//! The core (`model`, `state`) is pure and host-agnostic. The `host` traits
//! describe the windowing services the router needs, and `view` provides the
//! terminal implementation of them.

pub mod config;
pub mod host;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
