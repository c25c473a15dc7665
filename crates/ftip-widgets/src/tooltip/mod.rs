#![forbid(unsafe_code)]

//! Tooltip widget.
//!
//! A [`TooltipController`] anchors a popup to a target element and drives its
//! visibility. It is composed of four cooperating parts:
//!
//! - **Trigger resolution** ([`ftip_core::trigger`]): mode → listener wiring.
//! - **Listener registry** ([`listeners`]): every listener attached, by id.
//! - **Visibility state machine** ([`controller`]): phases, timers, callbacks.
//! - **Positioning boundary** ([`positioning`]): the external popup library.
//!
//! # Lifecycle
//!
//! ```text
//!  on_attach ──► resolve target ──► create popup ──► wire listeners
//!       │
//!       ▼
//!  DOM events / host calls ──► show · hide · toggle ──► timers ──► popup
//!       │
//!       ▼
//!  on_teardown ──► cancel timers ──► hide ──► detach listeners ──► dispose
//! ```
//!
//! # Phases
//!
//! ```text
//!            show (delay)          delay elapses
//!  Hidden ─────────────────► PendingShow ─────────┐
//!    ▲  │ show (no delay)                         ▼
//!    │  └──────────────────────────────────────► Showing ──(200ms)──► Shown
//!    │                                                                 │
//!    └──(200ms)── Hiding ◄────────────────── hide ─────────────────────┘
//! ```
//!
//! All work is delivered by the host through one [`TooltipCx`] per call; the
//! controller never holds references into the document, the scheduler, or
//! other controllers.

pub mod active;
pub mod config;
pub mod controller;
pub mod listeners;
pub mod positioning;

#[cfg(test)]
pub(crate) mod testing;

use ftip_core::{Dom, TooltipId};
use ftip_runtime::Scheduler;
use web_time::Duration;

pub use active::ShowingTooltips;
pub use config::{TargetRef, TooltipConfig};
pub use controller::TooltipController;
pub use listeners::{ListenerRecord, ListenerRegistry};
pub use positioning::{PopupHandle, PopupRequest, Positioner};

/// Length of the CSS entrance/exit transition window.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(200);

/// Class added to the popup once its entrance window has elapsed.
pub const ANIMATION_CLASS: &str = "ftip-tooltip-show";

/// Class added to the target element at attach.
pub const TARGET_CLASS: &str = "ftip-tooltip-target";

/// Deferred work a controller schedules for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Show delay elapsed.
    ShowDelay,
    /// Auto-hide duration elapsed.
    AutoHide,
    /// Entrance window elapsed.
    Entrance,
    /// Exit window elapsed.
    Exit,
    /// Layout settled after the popup rendered.
    Reposition,
}

/// A scheduled task, tagged with the controller it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TooltipTask {
    /// Owning controller.
    pub tooltip: TooltipId,
    /// What to do.
    pub kind: TaskKind,
}

impl TooltipTask {
    /// Create a task for `tooltip`.
    #[must_use]
    pub const fn new(tooltip: TooltipId, kind: TaskKind) -> Self {
        Self { tooltip, kind }
    }
}

/// Host services a controller operation may touch.
pub struct TooltipCx<'a> {
    /// Host document.
    pub dom: &'a mut dyn Dom,
    /// Popup factory.
    pub positioner: &'a mut dyn Positioner,
    /// Timers and after-render queue shared by every controller on the page.
    pub scheduler: &'a mut Scheduler<TooltipTask>,
    /// Tooltips currently on screen.
    pub showing: &'a mut ShowingTooltips,
}

/// Fine-grained visibility phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Not displayed; nothing pending.
    Hidden,
    /// Show delay armed.
    PendingShow,
    /// Displayed; entrance window running.
    Showing,
    /// Displayed; entrance complete.
    Shown,
    /// Shown with the auto-hide timer armed.
    PendingHide,
    /// Exit window running; still displayed.
    Hiding,
}

/// Externally observable visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityState {
    /// Displayed (from the start of the entrance until the exit completes).
    pub is_shown: bool,
    /// Inside an entrance or exit window.
    pub is_animating: bool,
}

/// Callback invoked with the id of the tooltip that fired it.
pub type TooltipCallback = Box<dyn FnMut(TooltipId)>;

/// Host callbacks. Each is optional.
#[derive(Default)]
pub struct TooltipCallbacks {
    /// Entrance finished.
    pub on_show: Option<TooltipCallback>,
    /// Exit finished.
    pub on_hide: Option<TooltipCallback>,
    /// Popup content node exists for the first time.
    pub on_render: Option<TooltipCallback>,
    /// Teardown finished.
    pub on_destroy: Option<TooltipCallback>,
}

impl TooltipCallbacks {
    /// No callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the on-show callback.
    #[must_use]
    pub fn on_show(mut self, f: impl FnMut(TooltipId) + 'static) -> Self {
        self.on_show = Some(Box::new(f));
        self
    }

    /// Set the on-hide callback.
    #[must_use]
    pub fn on_hide(mut self, f: impl FnMut(TooltipId) + 'static) -> Self {
        self.on_hide = Some(Box::new(f));
        self
    }

    /// Set the on-render callback.
    #[must_use]
    pub fn on_render(mut self, f: impl FnMut(TooltipId) + 'static) -> Self {
        self.on_render = Some(Box::new(f));
        self
    }

    /// Set the on-destroy callback.
    #[must_use]
    pub fn on_destroy(mut self, f: impl FnMut(TooltipId) + 'static) -> Self {
        self.on_destroy = Some(Box::new(f));
        self
    }
}

impl std::fmt::Debug for TooltipCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TooltipCallbacks")
            .field("on_show", &self.on_show.is_some())
            .field("on_hide", &self.on_hide.is_some())
            .field("on_render", &self.on_render.is_some())
            .field("on_destroy", &self.on_destroy.is_some())
            .finish()
    }
}

pub(crate) fn fire(callback: &mut Option<TooltipCallback>, id: TooltipId) {
    if let Some(f) = callback.as_mut() {
        f(id);
    }
}
