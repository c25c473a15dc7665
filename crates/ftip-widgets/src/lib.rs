#![forbid(unsafe_code)]

//! Widgets for FrankenTip.
//!
//! The only widget so far is the [`tooltip`]: a controller that anchors a
//! popup to a target element and drives its visibility from DOM events,
//! timers, and host lifecycle calls.

pub mod tooltip;
