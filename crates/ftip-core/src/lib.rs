#![forbid(unsafe_code)]

//! Core: DOM vocabulary, canonical events, and trigger resolution.
//!
//! # Role in FrankenTip
//! `ftip-core` is the input layer. It names the things a tooltip talks about
//! (elements, listeners, event names, key presses) and owns the pure mapping
//! from a configured trigger mode to the listeners a tooltip wires up.
//!
//! # Primary responsibilities
//! - **Ids**: [`id::ElementId`], [`id::TooltipId`], [`id::ListenerId`].
//! - **Dom**: the narrow host-document boundary a controller mutates.
//! - **Event**: canonical DOM event names and key events.
//! - **Trigger**: mode → show/hide events → listener wiring table.
//!
//! # How it fits in the system
//! `ftip-widgets` consumes these types to drive the tooltip state machine and
//! `ftip-web` implements [`dom::Dom`] for a host-driven in-memory document.
//! Nothing here schedules time or holds state across calls.

pub mod dom;
pub mod event;
pub mod id;
pub mod millis;
pub mod placement;
pub mod trigger;

pub use dom::Dom;
pub use event::{DomEvent, EventName, KeyCode, KeyEvent};
pub use id::{ElementId, ListenerId, TooltipId};
pub use millis::Millis;
pub use placement::{Effect, Side};
pub use trigger::{Binding, TriggerAction, TriggerEvents, TriggerMode};
