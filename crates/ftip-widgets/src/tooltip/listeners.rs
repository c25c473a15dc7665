#![forbid(unsafe_code)]

//! Listener registry.
//!
//! Every listener a controller adds to the document goes through
//! [`ListenerRegistry::attach`], which mints a fresh [`ListenerId`], records
//! it, and registers exactly that id with the [`Dom`]. The host delivers a
//! fired listener back by id, inside its flush step, and the controller looks
//! the record up to learn which action to run.
//!
//! # Invariants
//!
//! 1. Every listener added through the registry has exactly one record.
//! 2. Removal is by recorded identity, never by recomputing event names, so a
//!    mode change between attach and detach cannot strand a listener.
//! 3. `detach_all` is idempotent; on an empty registry it does nothing.
//! 4. Ids are never reused, so a delivery for a detached listener finds no
//!    record and is ignored.

use ftip_core::{Dom, ElementId, EventName, ListenerId, TooltipId, TriggerAction};

/// One attached listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerRecord {
    /// Identity registered with the document.
    pub id: ListenerId,
    /// Event type.
    pub event: EventName,
    /// Element the listener is on.
    pub target: ElementId,
    /// What the listener does when fired.
    pub action: TriggerAction,
}

/// Records of every listener one controller has attached.
#[derive(Debug)]
pub struct ListenerRegistry {
    owner: TooltipId,
    next_seq: u32,
    records: Vec<ListenerRecord>,
}

impl ListenerRegistry {
    /// Empty registry for `owner`.
    #[must_use]
    pub fn new(owner: TooltipId) -> Self {
        Self {
            owner,
            next_seq: 0,
            records: Vec::new(),
        }
    }

    /// Attach a listener for `event` on `target` and record it.
    pub fn attach(
        &mut self,
        dom: &mut dyn Dom,
        event: EventName,
        target: ElementId,
        action: TriggerAction,
    ) -> ListenerRecord {
        let id = ListenerId::new(self.owner, self.next_seq);
        self.next_seq = self.next_seq.wrapping_add(1);
        let record = ListenerRecord {
            id,
            event,
            target,
            action,
        };
        dom.add_event_listener(target, event, id);
        self.records.push(record);
        record
    }

    /// Remove every recorded listener from the document.
    ///
    /// Returns how many records were removed.
    pub fn detach_all(&mut self, dom: &mut dyn Dom) -> usize {
        let count = self.records.len();
        for record in self.records.drain(..) {
            if !dom.remove_event_listener(record.target, record.event, record.id) {
                tracing::debug!(
                    message = "tooltip.listener_missing",
                    listener = %record.id,
                    event = record.event.as_str()
                );
            }
        }
        count
    }

    /// Record for a delivered listener id.
    #[must_use]
    pub fn lookup(&self, id: ListenerId) -> Option<&ListenerRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Attached records, in attach order.
    #[must_use]
    pub fn records(&self) -> &[ListenerRecord] {
        &self.records
    }

    /// Event names of attached listeners, in attach order.
    #[must_use]
    pub fn event_names(&self) -> Vec<EventName> {
        self.records.iter().map(|r| r.event).collect()
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no listener is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
