#![forbid(unsafe_code)]

//! `ftip-web` hosts FrankenTip tooltips in a host-driven page.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment pushes DOM events.
//! - **Deterministic time**: the host advances the clock explicitly.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//!
//! The crate does not bind to a real browser. [`Document`] is an in-memory
//! element tree and [`RecordingPositioner`] stands in for the popup library,
//! which makes a [`Page`] a complete, reproducible host for the controllers
//! in `ftip-widgets`.

pub mod document;
pub mod page;
pub mod positioner;

pub use document::{Document, Registration};
pub use page::{Page, PageError};
pub use positioner::{PopupCall, PopupRecord, RecordingPositioner};
