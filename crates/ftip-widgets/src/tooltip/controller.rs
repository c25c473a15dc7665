#![forbid(unsafe_code)]

//! Tooltip visibility state machine.
//!
//! One [`TooltipController`] per widget instance. The host calls it for
//! lifecycle hooks, fired listeners, due timers and after-render tasks; each
//! call carries a [`TooltipCx`] with the services it may touch.
//!
//! # Timers
//!
//! Four single-occupancy slots: show delay, auto-hide, entrance window and
//! exit window. Arming a slot cancels what it held. A delivered timer is
//! matched against its slot and dropped if it is not the one the slot holds,
//! so a timer cancelled after it was popped can never act.
//!
//! # Races
//!
//! - `show` during the show delay restarts the delay from now.
//! - `show` while displayed runs the delay and the entrance again; `on_show`
//!   fires once more when the new entrance completes.
//! - `hide` during the show delay cancels the delay; nothing is displayed
//!   and `on_hide` does not fire.
//! - `hide` during the entrance window cancels the entrance; `on_show` never
//!   fires and the exit window starts.
//! - `show` during the exit window cancels the exit and restarts the entrance
//!   immediately, ignoring `delay`. `on_hide` never fires.
//! - Every operation is a no-op once teardown has begun.

use ftip_core::{DomEvent, ElementId, ListenerId, TooltipId, TriggerAction, TriggerMode};
use ftip_runtime::{TimerHandle, TimerSlot};
use web_time::Duration;

use super::config::{TargetRef, TooltipConfig};
use super::listeners::ListenerRegistry;
use super::positioning::{PopupHandle, PopupRequest};
use super::{
    ANIMATION_CLASS, ANIMATION_DURATION, Phase, TARGET_CLASS, TaskKind, TooltipCallbacks,
    TooltipCx, TooltipTask, VisibilityState, fire,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Detached,
    Attached,
    Destroyed,
}

/// Controller for one tooltip instance.
pub struct TooltipController {
    id: TooltipId,
    config: TooltipConfig,
    callbacks: TooltipCallbacks,
    lifecycle: Lifecycle,
    root: Option<ElementId>,
    target: Option<ElementId>,
    listeners: ListenerRegistry,
    popup: Option<Box<dyn PopupHandle>>,
    shown: bool,
    rendered: bool,
    show_timer: TimerSlot,
    hide_timer: TimerSlot,
    entrance: TimerSlot,
    exit: TimerSlot,
}

impl std::fmt::Debug for TooltipController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TooltipController")
            .field("id", &self.id)
            .field("phase", &self.phase())
            .field("lifecycle", &self.lifecycle)
            .field("target", &self.target)
            .field("listeners", &self.listeners.len())
            .field("popup", &self.popup.is_some())
            .finish()
    }
}

impl TooltipController {
    /// Create a detached controller.
    #[must_use]
    pub fn new(id: TooltipId, config: TooltipConfig, callbacks: TooltipCallbacks) -> Self {
        Self {
            id,
            config,
            callbacks,
            lifecycle: Lifecycle::Detached,
            root: None,
            target: None,
            listeners: ListenerRegistry::new(id),
            popup: None,
            shown: false,
            rendered: false,
            show_timer: TimerSlot::new(),
            hide_timer: TimerSlot::new(),
            entrance: TimerSlot::new(),
            exit: TimerSlot::new(),
        }
    }

    /// Instance id.
    #[must_use]
    pub const fn id(&self) -> TooltipId {
        self.id
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Widget root element, once attached.
    #[must_use]
    pub const fn root(&self) -> Option<ElementId> {
        self.root
    }

    /// Resolved target element. `None` if detached or the target was missing.
    #[must_use]
    pub const fn target(&self) -> Option<ElementId> {
        self.target
    }

    /// Attached listeners.
    #[must_use]
    pub const fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Whether the popup content node has been created.
    #[must_use]
    pub const fn is_rendered(&self) -> bool {
        self.rendered
    }

    /// Whether the controller is attached and not torn down.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.lifecycle == Lifecycle::Attached
    }

    /// Whether teardown has run.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.lifecycle == Lifecycle::Destroyed
    }

    /// Externally observable visibility.
    #[must_use]
    pub const fn visibility(&self) -> VisibilityState {
        VisibilityState {
            is_shown: self.shown,
            is_animating: self.entrance.is_armed() || self.exit.is_armed(),
        }
    }

    /// Fine-grained phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.exit.is_armed() {
            Phase::Hiding
        } else if self.entrance.is_armed() {
            Phase::Showing
        } else if self.show_timer.is_armed() {
            Phase::PendingShow
        } else if self.shown {
            if self.hide_timer.is_armed() {
                Phase::PendingHide
            } else {
                Phase::Shown
            }
        } else {
            Phase::Hidden
        }
    }

    // ── Host lifecycle ──────────────────────────────────────────────────

    /// Widget inserted into the document under `root`.
    ///
    /// Resolves the target, creates the popup, and wires the listeners for
    /// the configured trigger mode. A missing target is logged and the popup
    /// anchors to `root` with no listeners attached.
    pub fn on_attach(&mut self, root: ElementId, cx: &mut TooltipCx<'_>) {
        match self.lifecycle {
            Lifecycle::Detached => {}
            Lifecycle::Attached => {
                tracing::warn!(message = "tooltip.already_attached", tooltip = %self.id);
                return;
            }
            Lifecycle::Destroyed => {
                tracing::debug!(message = "tooltip.attach_after_teardown", tooltip = %self.id);
                return;
            }
        }

        self.root = Some(root);
        self.target = self.resolve_target(root, cx);
        let anchor = self.target.unwrap_or(root);
        self.popup = Some(
            cx.positioner
                .create(PopupRequest::new(self.id, anchor, &self.config)),
        );
        self.lifecycle = Lifecycle::Attached;

        if let Some(target) = self.target {
            cx.dom.add_class(target, TARGET_CLASS);
            self.wire(cx);
        }
        tracing::debug!(
            message = "tooltip.attach",
            tooltip = %self.id,
            anchor = %anchor,
            mode = self.config.event.as_str(),
            listeners = self.listeners.len()
        );

        if self.config.is_shown {
            self.show(cx);
        }
    }

    /// Host changed the desired visibility.
    pub fn on_config_change(&mut self, is_shown: bool, cx: &mut TooltipCx<'_>) {
        self.config.is_shown = is_shown;
        if is_shown {
            self.show(cx);
        } else {
            self.hide(cx);
        }
    }

    /// Switch trigger mode, replacing every attached listener.
    pub fn set_trigger_mode(&mut self, mode: TriggerMode, cx: &mut TooltipCx<'_>) {
        if self.config.event == mode {
            return;
        }
        let previous = std::mem::replace(&mut self.config.event, mode);
        if !self.is_attached() {
            return;
        }
        self.listeners.detach_all(cx.dom);
        self.wire(cx);
        tracing::debug!(
            message = "tooltip.mode_change",
            tooltip = %self.id,
            from = previous.as_str(),
            to = mode.as_str()
        );
    }

    /// Widget leaving the document.
    ///
    /// Cancels every timer, hides synchronously if displayed (firing
    /// `on_hide`), removes every listener, disposes the popup, then fires
    /// `on_destroy`. Calling it again does nothing.
    pub fn on_teardown(&mut self, cx: &mut TooltipCx<'_>) {
        if self.is_destroyed() {
            return;
        }
        self.lifecycle = Lifecycle::Destroyed;

        self.show_timer.cancel(cx.scheduler);
        self.hide_timer.cancel(cx.scheduler);
        self.entrance.cancel(cx.scheduler);
        self.exit.cancel(cx.scheduler);
        cx.showing.leave(self.id);

        if self.shown {
            self.shown = false;
            if let Some(popup) = self.popup.as_mut() {
                popup.remove_class(ANIMATION_CLASS);
                popup.hide();
            }
            fire(&mut self.callbacks.on_hide, self.id);
        }

        let detached = self.listeners.detach_all(cx.dom);
        if let Some(mut popup) = self.popup.take() {
            popup.dispose();
        }
        tracing::debug!(message = "tooltip.teardown", tooltip = %self.id, detached);
        fire(&mut self.callbacks.on_destroy, self.id);
    }

    // ── Visibility ──────────────────────────────────────────────────────

    /// Request the tooltip to appear.
    pub fn show(&mut self, cx: &mut TooltipCx<'_>) {
        if !self.is_attached() {
            return;
        }
        let interrupted_exit = self.exit.cancel(cx.scheduler);
        if !self.config.duration.is_zero() {
            self.hide_timer.arm(
                cx.scheduler,
                self.config.duration.as_duration(),
                TooltipTask::new(self.id, TaskKind::AutoHide),
            );
        }

        if interrupted_exit {
            // Still displayed: restart the entrance without waiting.
            self.show_timer.cancel(cx.scheduler);
            self.begin_entrance(cx);
            return;
        }

        let delay = self.effective_delay(cx);
        if delay.is_zero() {
            self.show_timer.cancel(cx.scheduler);
            self.begin_entrance(cx);
        } else {
            self.show_timer.arm(
                cx.scheduler,
                delay,
                TooltipTask::new(self.id, TaskKind::ShowDelay),
            );
            tracing::debug!(
                message = "tooltip.pending_show",
                tooltip = %self.id,
                delay_ms = delay.as_millis() as u64
            );
        }
    }

    /// Request the tooltip to disappear.
    pub fn hide(&mut self, cx: &mut TooltipCx<'_>) {
        if !self.is_attached() {
            return;
        }
        self.show_timer.cancel(cx.scheduler);
        self.hide_timer.cancel(cx.scheduler);
        let interrupted_entrance = self.entrance.cancel(cx.scheduler);
        if !self.shown || self.exit.is_armed() {
            return;
        }

        if let Some(popup) = self.popup.as_mut() {
            popup.remove_class(ANIMATION_CLASS);
        }
        cx.showing.leave(self.id);
        self.exit.arm(
            cx.scheduler,
            ANIMATION_DURATION,
            TooltipTask::new(self.id, TaskKind::Exit),
        );
        tracing::debug!(message = "tooltip.hiding", tooltip = %self.id, interrupted_entrance);
    }

    /// Hide if displayed; show otherwise.
    ///
    /// Keyed on `is_shown`: a toggle during the exit window keeps hiding, and
    /// a toggle during the show delay restarts the delay.
    pub fn toggle(&mut self, cx: &mut TooltipCx<'_>) {
        if self.shown {
            self.hide(cx);
        } else {
            self.show(cx);
        }
    }

    // ── Host delivery ───────────────────────────────────────────────────

    /// A listener this controller attached has fired.
    pub fn handle_event(
        &mut self,
        listener: ListenerId,
        event: &mut DomEvent,
        cx: &mut TooltipCx<'_>,
    ) {
        let Some(record) = self.listeners.lookup(listener).copied() else {
            tracing::trace!(message = "tooltip.stale_listener", listener = %listener);
            return;
        };
        if record.event != event.name {
            return;
        }
        match record.action {
            TriggerAction::Show => self.show(cx),
            TriggerAction::Hide => self.hide(cx),
            TriggerAction::Toggle => self.toggle(cx),
            TriggerAction::Dismiss => {
                if event.is_escape() {
                    self.hide(cx);
                    event.prevent_default();
                }
            }
        }
    }

    /// A timer this controller scheduled is due.
    pub fn on_timer(&mut self, handle: TimerHandle, kind: TaskKind, cx: &mut TooltipCx<'_>) {
        let slot = match kind {
            TaskKind::ShowDelay => &mut self.show_timer,
            TaskKind::AutoHide => &mut self.hide_timer,
            TaskKind::Entrance => &mut self.entrance,
            TaskKind::Exit => &mut self.exit,
            TaskKind::Reposition => {
                self.on_after_render(kind, cx);
                return;
            }
        };
        if !slot.settle(handle) {
            tracing::trace!(message = "tooltip.stale_timer", tooltip = %self.id, ?kind);
            return;
        }
        if !self.is_attached() {
            return;
        }

        match kind {
            TaskKind::ShowDelay => self.begin_entrance(cx),
            TaskKind::AutoHide => self.hide(cx),
            TaskKind::Entrance => {
                if let Some(popup) = self.popup.as_mut() {
                    popup.add_class(ANIMATION_CLASS);
                }
                tracing::debug!(message = "tooltip.shown", tooltip = %self.id);
                fire(&mut self.callbacks.on_show, self.id);
            }
            TaskKind::Exit => {
                if let Some(popup) = self.popup.as_mut() {
                    popup.hide();
                }
                self.shown = false;
                tracing::debug!(message = "tooltip.hidden", tooltip = %self.id);
                fire(&mut self.callbacks.on_hide, self.id);
            }
            TaskKind::Reposition => {}
        }
    }

    /// Layout has settled after a render.
    pub fn on_after_render(&mut self, kind: TaskKind, _cx: &mut TooltipCx<'_>) {
        if kind != TaskKind::Reposition || !self.is_attached() {
            return;
        }
        if let Some(popup) = self.popup.as_mut() {
            popup.reposition();
        }
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn resolve_target(&self, root: ElementId, cx: &TooltipCx<'_>) -> Option<ElementId> {
        let found = match &self.config.target {
            TargetRef::Id(id) => cx.dom.element_by_id(id),
            TargetRef::Parent => cx.dom.parent_of(root),
        };
        if found.is_none() {
            let wanted = match &self.config.target {
                TargetRef::Id(id) => id.as_str(),
                TargetRef::Parent => "parent",
            };
            tracing::warn!(message = "tooltip.target_missing", tooltip = %self.id, target = wanted);
        }
        found
    }

    fn wire(&mut self, cx: &mut TooltipCx<'_>) {
        let Some(target) = self.target else {
            return;
        };
        for binding in self.config.event.bindings() {
            self.listeners
                .attach(cx.dom, binding.event, target, binding.action);
        }
    }

    fn effective_delay(&self, cx: &TooltipCx<'_>) -> Duration {
        let delay = self.config.delay.as_duration();
        if delay.is_zero() || self.config.delay_on_change {
            return delay;
        }
        if cx.showing.any_other(self.id) {
            tracing::debug!(message = "tooltip.delay_collapsed", tooltip = %self.id);
            return Duration::ZERO;
        }
        delay
    }

    fn begin_entrance(&mut self, cx: &mut TooltipCx<'_>) {
        let Some(popup) = self.popup.as_mut() else {
            return;
        };
        let created = popup.show();
        self.shown = true;
        cx.showing.enter(self.id);

        if created && !self.rendered {
            self.rendered = true;
            fire(&mut self.callbacks.on_render, self.id);
            cx.scheduler
                .schedule_after_render(TooltipTask::new(self.id, TaskKind::Reposition));
        }
        self.entrance.arm(
            cx.scheduler,
            ANIMATION_DURATION,
            TooltipTask::new(self.id, TaskKind::Entrance),
        );
        tracing::debug!(message = "tooltip.entrance", tooltip = %self.id);
    }
}
