#![forbid(unsafe_code)]

//! Host page: owns the document and every mounted tooltip.
//!
//! The page is the flush boundary. Each DOM dispatch and each due timer runs
//! to completion, then the after-render queue is drained before control
//! returns to the host. Time moves only through [`Page::advance`].
//!
//! ```text
//!  host ──► dispatch(target, event) ──► listeners_for ──► handle_event ─┐
//!  host ──► advance(dt) ──► pop_due ──► on_timer ───────────────────────┤
//!                                                                       ▼
//!                                                       flush after-render queue
//! ```

use std::collections::BTreeMap;

use ftip_core::{DomEvent, ElementId, TooltipId, TriggerMode};
use ftip_runtime::Scheduler;
use ftip_widgets::tooltip::{
    Phase, ShowingTooltips, TooltipCallbacks, TooltipConfig, TooltipController, TooltipCx,
    TooltipTask, VisibilityState,
};
use web_time::Duration;

use crate::document::Document;
use crate::positioner::RecordingPositioner;

/// Page operation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// No mounted tooltip has this id.
    UnknownTooltip(TooltipId),
    /// The document has no such element.
    UnknownElement(ElementId),
}

impl core::fmt::Display for PageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownTooltip(id) => write!(f, "no mounted tooltip {id}"),
            Self::UnknownElement(el) => write!(f, "no element {el} in document"),
        }
    }
}

impl std::error::Error for PageError {}

/// Deterministic host for tooltip controllers.
#[derive(Debug, Default)]
pub struct Page {
    document: Document,
    positioner: RecordingPositioner,
    scheduler: Scheduler<TooltipTask>,
    showing: ShowingTooltips,
    tooltips: BTreeMap<TooltipId, TooltipController>,
    next_tooltip: u64,
}

impl Page {
    /// Empty page at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Host document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Host document, for building elements.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Popup log.
    #[must_use]
    pub const fn positioner(&self) -> &RecordingPositioner {
        &self.positioner
    }

    /// Tooltips currently on screen.
    #[must_use]
    pub const fn showing(&self) -> &ShowingTooltips {
        &self.showing
    }

    /// Current page time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Timers not yet fired or cancelled.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending_timers()
    }

    /// A mounted tooltip.
    #[must_use]
    pub fn tooltip(&self, id: TooltipId) -> Option<&TooltipController> {
        self.tooltips.get(&id)
    }

    /// Phase of a mounted tooltip.
    #[must_use]
    pub fn phase(&self, id: TooltipId) -> Option<Phase> {
        self.tooltip(id).map(TooltipController::phase)
    }

    /// Visibility of a mounted tooltip.
    #[must_use]
    pub fn visibility(&self, id: TooltipId) -> Option<VisibilityState> {
        self.tooltip(id).map(TooltipController::visibility)
    }

    /// Ids of mounted tooltips, ascending.
    #[must_use]
    pub fn mounted(&self) -> Vec<TooltipId> {
        self.tooltips.keys().copied().collect()
    }

    // ── Lifecycle ───────────────────────────────────────────────────────

    /// Insert a tooltip widget whose root element is `root`.
    pub fn mount(
        &mut self,
        root: ElementId,
        config: TooltipConfig,
        callbacks: TooltipCallbacks,
    ) -> Result<TooltipId, PageError> {
        if !self.document.contains(root) {
            return Err(PageError::UnknownElement(root));
        }
        let id = TooltipId(self.next_tooltip);
        self.next_tooltip += 1;
        self.tooltips
            .insert(id, TooltipController::new(id, config, callbacks));
        self.with_tooltip(id, |t, cx| t.on_attach(root, cx))?;
        self.flush_render();
        Ok(id)
    }

    /// Host changed the desired visibility of `id`.
    pub fn update(&mut self, id: TooltipId, is_shown: bool) -> Result<(), PageError> {
        self.with_tooltip(id, |t, cx| t.on_config_change(is_shown, cx))?;
        self.flush_render();
        Ok(())
    }

    /// Remove `id` from the page, tearing it down.
    pub fn unmount(&mut self, id: TooltipId) -> Result<(), PageError> {
        let mut tooltip = self
            .tooltips
            .remove(&id)
            .ok_or(PageError::UnknownTooltip(id))?;
        let mut cx = TooltipCx {
            dom: &mut self.document,
            positioner: &mut self.positioner,
            scheduler: &mut self.scheduler,
            showing: &mut self.showing,
        };
        tooltip.on_teardown(&mut cx);
        Ok(())
    }

    // ── Programmatic control ────────────────────────────────────────────

    /// Show `id`.
    pub fn show(&mut self, id: TooltipId) -> Result<(), PageError> {
        self.with_tooltip(id, |t, cx| t.show(cx))?;
        self.flush_render();
        Ok(())
    }

    /// Hide `id`.
    pub fn hide(&mut self, id: TooltipId) -> Result<(), PageError> {
        self.with_tooltip(id, |t, cx| t.hide(cx))?;
        self.flush_render();
        Ok(())
    }

    /// Toggle `id`.
    pub fn toggle(&mut self, id: TooltipId) -> Result<(), PageError> {
        self.with_tooltip(id, |t, cx| t.toggle(cx))?;
        self.flush_render();
        Ok(())
    }

    /// Switch the trigger mode of `id`, rewiring its listeners.
    pub fn set_trigger_mode(&mut self, id: TooltipId, mode: TriggerMode) -> Result<(), PageError> {
        self.with_tooltip(id, |t, cx| t.set_trigger_mode(mode, cx))
    }

    // ── Host drive ──────────────────────────────────────────────────────

    /// Deliver `event` to every listener on `target`, then flush.
    ///
    /// Returns the event so the host can read `default_prevented`.
    pub fn dispatch(&mut self, target: ElementId, mut event: DomEvent) -> DomEvent {
        let span = tracing::debug_span!("page.dispatch", target = %target, event = event.name.as_str());
        let _entered = span.enter();

        for listener in self.document.listeners_for(target, event.name) {
            let delivered = self.with_tooltip(listener.owner, |t, cx| {
                t.handle_event(listener, &mut event, cx);
            });
            if delivered.is_err() {
                tracing::trace!(message = "page.orphan_listener", listener = %listener);
            }
        }
        self.flush_render();
        event
    }

    /// Move time forward by `dt`, firing due timers in deadline order.
    pub fn advance(&mut self, dt: Duration) {
        let until = self.scheduler.now().saturating_add(dt);
        while let Some((handle, task)) = self.scheduler.pop_due(until) {
            let fired = self.with_tooltip(task.tooltip, |t, cx| t.on_timer(handle, task.kind, cx));
            if fired.is_err() {
                tracing::trace!(message = "page.orphan_timer", tooltip = %task.tooltip, kind = ?task.kind);
            }
            self.flush_render();
        }
        self.scheduler.advance_to(until);
    }

    /// Move time forward by `ms` milliseconds.
    pub fn advance_ms(&mut self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    fn flush_render(&mut self) {
        while let Some(task) = self.scheduler.pop_render() {
            let ran = self.with_tooltip(task.tooltip, |t, cx| t.on_after_render(task.kind, cx));
            if ran.is_err() {
                tracing::trace!(message = "page.orphan_render", tooltip = %task.tooltip);
            }
        }
    }

    fn with_tooltip<R>(
        &mut self,
        id: TooltipId,
        f: impl FnOnce(&mut TooltipController, &mut TooltipCx<'_>) -> R,
    ) -> Result<R, PageError> {
        let tooltip = self
            .tooltips
            .get_mut(&id)
            .ok_or(PageError::UnknownTooltip(id))?;
        let mut cx = TooltipCx {
            dom: &mut self.document,
            positioner: &mut self.positioner,
            scheduler: &mut self.scheduler,
            showing: &mut self.showing,
        };
        Ok(f(tooltip, &mut cx))
    }
}
