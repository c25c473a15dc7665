#![forbid(unsafe_code)]

//! In-crate fakes for controller unit tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use ftip_core::{Dom, ElementId, EventName, ListenerId};
use ftip_runtime::Scheduler;
use web_time::Duration;

use super::{
    PopupHandle, PopupRequest, Positioner, ShowingTooltips, TooltipController, TooltipCx,
    TooltipTask,
};

#[derive(Debug, Default)]
pub(crate) struct FakeDom {
    pub ids: BTreeMap<String, ElementId>,
    pub parents: BTreeMap<ElementId, ElementId>,
    pub classes: BTreeMap<ElementId, BTreeSet<String>>,
    pub listeners: Vec<(ElementId, EventName, ListenerId)>,
}

impl FakeDom {
    /// `parent` (id `0`) containing `root` (id `1`).
    pub fn with_root() -> Self {
        let mut dom = Self::default();
        dom.parents.insert(ElementId(1), ElementId(0));
        dom
    }

    pub fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.classes
            .get(&element)
            .is_some_and(|set| set.contains(class))
    }
}

impl Dom for FakeDom {
    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.ids.get(id).copied()
    }

    fn parent_of(&self, element: ElementId) -> Option<ElementId> {
        self.parents.get(&element).copied()
    }

    fn add_event_listener(&mut self, target: ElementId, event: EventName, listener: ListenerId) {
        self.listeners.push((target, event, listener));
    }

    fn remove_event_listener(
        &mut self,
        target: ElementId,
        event: EventName,
        listener: ListenerId,
    ) -> bool {
        let before = self.listeners.len();
        self.listeners
            .retain(|entry| *entry != (target, event, listener));
        self.listeners.len() != before
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        self.classes
            .entry(element)
            .or_default()
            .insert(class.to_owned());
    }
}

/// Every call a popup received, in order.
#[derive(Debug, Default)]
pub(crate) struct PopupLog {
    pub requests: Vec<PopupRequest>,
    pub calls: Vec<&'static str>,
    pub classes: BTreeSet<String>,
    pub visible: bool,
    pub rendered: bool,
    pub disposed: usize,
    pub after_dispose: usize,
}

#[derive(Debug, Default, Clone)]
pub(crate) struct FakePositioner {
    pub log: Rc<RefCell<PopupLog>>,
}

impl Positioner for FakePositioner {
    fn create(&mut self, request: PopupRequest) -> Box<dyn PopupHandle> {
        self.log.borrow_mut().requests.push(request);
        Box::new(FakePopup {
            log: Rc::clone(&self.log),
        })
    }
}

struct FakePopup {
    log: Rc<RefCell<PopupLog>>,
}

impl FakePopup {
    fn record(&self, call: &'static str) -> std::cell::RefMut<'_, PopupLog> {
        let mut log = self.log.borrow_mut();
        if log.disposed > 0 {
            log.after_dispose += 1;
        }
        log.calls.push(call);
        log
    }
}

impl PopupHandle for FakePopup {
    fn show(&mut self) -> bool {
        let mut log = self.record("show");
        log.visible = true;
        !std::mem::replace(&mut log.rendered, true)
    }

    fn hide(&mut self) {
        self.record("hide").visible = false;
    }

    fn reposition(&mut self) {
        self.record("reposition");
    }

    fn add_class(&mut self, class: &str) {
        self.record("add_class").classes.insert(class.to_owned());
    }

    fn remove_class(&mut self, class: &str) {
        self.record("remove_class").classes.remove(class);
    }

    fn dispose(&mut self) {
        let mut log = self.record("dispose");
        log.disposed += 1;
        log.visible = false;
    }
}

/// One controller with its host services.
pub(crate) struct Harness {
    pub dom: FakeDom,
    pub positioner: FakePositioner,
    pub scheduler: Scheduler<TooltipTask>,
    pub showing: ShowingTooltips,
    pub tooltip: TooltipController,
}

impl Harness {
    pub fn new(tooltip: TooltipController) -> Self {
        Self {
            dom: FakeDom::with_root(),
            positioner: FakePositioner::default(),
            scheduler: Scheduler::new(),
            showing: ShowingTooltips::new(),
            tooltip,
        }
    }

    pub fn attached(tooltip: TooltipController) -> Self {
        let mut h = Self::new(tooltip);
        h.with(|t, cx| t.on_attach(ElementId(1), cx));
        h
    }

    pub fn with<R>(&mut self, f: impl FnOnce(&mut TooltipController, &mut TooltipCx<'_>) -> R) -> R {
        let mut cx = TooltipCx {
            dom: &mut self.dom,
            positioner: &mut self.positioner,
            scheduler: &mut self.scheduler,
            showing: &mut self.showing,
        };
        let out = f(&mut self.tooltip, &mut cx);
        self.flush_render();
        out
    }

    pub fn advance(&mut self, ms: u64) {
        let until = self.scheduler.now() + Duration::from_millis(ms);
        while let Some((handle, task)) = self.scheduler.pop_due(until) {
            let mut cx = TooltipCx {
                dom: &mut self.dom,
                positioner: &mut self.positioner,
                scheduler: &mut self.scheduler,
                showing: &mut self.showing,
            };
            self.tooltip.on_timer(handle, task.kind, &mut cx);
            self.flush_render();
        }
        self.scheduler.advance_to(until);
    }

    fn flush_render(&mut self) {
        while let Some(task) = self.scheduler.pop_render() {
            let mut cx = TooltipCx {
                dom: &mut self.dom,
                positioner: &mut self.positioner,
                scheduler: &mut self.scheduler,
                showing: &mut self.showing,
            };
            self.tooltip.on_after_render(task.kind, &mut cx);
        }
    }

    pub fn popup(&self) -> std::cell::Ref<'_, PopupLog> {
        self.positioner.log.borrow()
    }
}
