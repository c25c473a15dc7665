#![forbid(unsafe_code)]

//! Recording positioning adapter.
//!
//! Stands in for the popup library on a [`crate::Page`]. It computes no
//! placement; it tracks what each popup was told to do so hosts and tests can
//! inspect visibility, classes and the dispose contract. Handles share their
//! record with the positioner, so the log stays readable after a handle has
//! been dropped.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use ftip_core::TooltipId;
use ftip_widgets::tooltip::{PopupHandle, PopupRequest, Positioner};

/// A call received by a popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupCall {
    /// `show`.
    Show,
    /// `hide`.
    Hide,
    /// `reposition`.
    Reposition,
    /// `add_class`.
    AddClass(String),
    /// `remove_class`.
    RemoveClass(String),
    /// `dispose`.
    Dispose,
}

/// Everything one popup has been told.
#[derive(Debug, Clone)]
pub struct PopupRecord {
    /// Request it was created from.
    pub request: PopupRequest,
    /// Calls, in order.
    pub calls: Vec<PopupCall>,
    /// Currently displayed.
    pub visible: bool,
    /// Content node exists.
    pub rendered: bool,
    /// Classes currently on the popup node.
    pub classes: BTreeSet<String>,
    /// Times `dispose` was called.
    pub disposals: u32,
    /// Calls received after the first `dispose`.
    pub calls_after_dispose: u32,
}

impl PopupRecord {
    fn new(request: PopupRequest) -> Self {
        Self {
            request,
            calls: Vec::new(),
            visible: false,
            rendered: false,
            classes: BTreeSet::new(),
            disposals: 0,
            calls_after_dispose: 0,
        }
    }

    /// Whether the popup node carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Number of `show` calls.
    #[must_use]
    pub fn show_calls(&self) -> usize {
        self.calls.iter().filter(|c| **c == PopupCall::Show).count()
    }

    fn receive(&mut self, call: PopupCall) {
        if self.disposals > 0 {
            self.calls_after_dispose += 1;
            tracing::warn!(
                message = "popup.call_after_dispose",
                owner = %self.request.owner,
                ?call
            );
        }
        match &call {
            PopupCall::Show => self.visible = true,
            PopupCall::Hide => self.visible = false,
            PopupCall::Reposition => {}
            PopupCall::AddClass(class) => {
                self.classes.insert(class.clone());
            }
            PopupCall::RemoveClass(class) => {
                self.classes.remove(class);
            }
            PopupCall::Dispose => {
                self.disposals += 1;
                self.visible = false;
            }
        }
        self.calls.push(call);
    }
}

type Shared = Rc<RefCell<Vec<PopupRecord>>>;

/// Positioner that records every popup it creates.
#[derive(Debug, Default, Clone)]
pub struct RecordingPositioner {
    popups: Shared,
}

impl RecordingPositioner {
    /// No popups yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of popups created.
    #[must_use]
    pub fn created(&self) -> usize {
        self.popups.borrow().len()
    }

    /// Latest popup created for `owner`.
    #[must_use]
    pub fn popup_for(&self, owner: TooltipId) -> Option<PopupRecord> {
        self.popups
            .borrow()
            .iter()
            .rev()
            .find(|p| p.request.owner == owner)
            .cloned()
    }

    /// Snapshot of every popup, in creation order.
    #[must_use]
    pub fn popups(&self) -> Vec<PopupRecord> {
        self.popups.borrow().clone()
    }

    /// Calls that reached any popup after it was disposed.
    #[must_use]
    pub fn calls_after_dispose(&self) -> u32 {
        self.popups
            .borrow()
            .iter()
            .map(|p| p.calls_after_dispose)
            .sum()
    }
}

impl Positioner for RecordingPositioner {
    fn create(&mut self, request: PopupRequest) -> Box<dyn PopupHandle> {
        let mut popups = self.popups.borrow_mut();
        let index = popups.len();
        tracing::trace!(message = "popup.create", owner = %request.owner, index);
        popups.push(PopupRecord::new(request));
        Box::new(RecordedPopup {
            popups: Rc::clone(&self.popups),
            index,
        })
    }
}

struct RecordedPopup {
    popups: Shared,
    index: usize,
}

impl RecordedPopup {
    fn receive(&self, call: PopupCall) -> bool {
        let mut popups = self.popups.borrow_mut();
        let Some(record) = popups.get_mut(self.index) else {
            return false;
        };
        let first_show = call == PopupCall::Show && !record.rendered;
        if first_show {
            record.rendered = true;
        }
        record.receive(call);
        first_show
    }
}

impl PopupHandle for RecordedPopup {
    fn show(&mut self) -> bool {
        self.receive(PopupCall::Show)
    }

    fn hide(&mut self) {
        self.receive(PopupCall::Hide);
    }

    fn reposition(&mut self) {
        self.receive(PopupCall::Reposition);
    }

    fn add_class(&mut self, class: &str) {
        self.receive(PopupCall::AddClass(class.to_owned()));
    }

    fn remove_class(&mut self, class: &str) {
        self.receive(PopupCall::RemoveClass(class.to_owned()));
    }

    fn dispose(&mut self) {
        self.receive(PopupCall::Dispose);
    }
}

#[cfg(test)]
mod tests {
    use ftip_core::ElementId;
    use ftip_widgets::tooltip::TooltipConfig;

    use super::*;

    fn request(owner: u64) -> PopupRequest {
        PopupRequest::new(TooltipId(owner), ElementId(0), &TooltipConfig::new("x"))
    }

    #[test]
    fn first_show_reports_render() {
        let mut positioner = RecordingPositioner::new();
        let mut popup = positioner.create(request(1));
        assert!(popup.show());
        popup.hide();
        assert!(!popup.show());
        let record = positioner.popup_for(TooltipId(1)).expect("record");
        assert_eq!(record.show_calls(), 2);
        assert!(record.visible);
    }

    #[test]
    fn tracks_classes_and_dispose_contract() {
        let mut positioner = RecordingPositioner::new();
        let mut popup = positioner.create(request(2));
        popup.add_class("on");
        assert!(positioner.popup_for(TooltipId(2)).expect("record").has_class("on"));
        popup.remove_class("on");
        popup.dispose();
        popup.reposition();

        let record = positioner.popup_for(TooltipId(2)).expect("record");
        assert!(!record.has_class("on"));
        assert_eq!(record.disposals, 1);
        assert_eq!(record.calls_after_dispose, 1);
        assert_eq!(positioner.calls_after_dispose(), 1);
    }
}
