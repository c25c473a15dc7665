#![forbid(unsafe_code)]

//! In-memory host document.
//!
//! Elements form a tree named by [`ElementId`]; `id` attributes are indexed
//! for lookup. Listener registrations are kept in registration order so a
//! dispatch delivers them in the order a browser would.

use ahash::AHashMap;
use ftip_core::{Dom, ElementId, EventName, ListenerId, TooltipId};

#[derive(Debug, Clone, Default)]
struct Node {
    id_attr: Option<String>,
    parent: Option<ElementId>,
    classes: Vec<String>,
}

/// One listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    /// Element the listener is on.
    pub target: ElementId,
    /// Event type.
    pub event: EventName,
    /// Listener identity.
    pub listener: ListenerId,
}

/// Host document backing a [`crate::Page`].
#[derive(Debug, Default)]
pub struct Document {
    next_element: u64,
    nodes: AHashMap<ElementId, Node>,
    by_id_attr: AHashMap<String, ElementId>,
    registrations: Vec<Registration>,
}

impl Document {
    /// Empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element under `parent`, optionally with an `id` attribute.
    ///
    /// A later element with the same `id` attribute shadows the earlier one
    /// for lookup.
    pub fn create_element(&mut self, id_attr: Option<&str>, parent: Option<ElementId>) -> ElementId {
        let element = ElementId(self.next_element);
        self.next_element += 1;
        if let Some(id) = id_attr {
            self.by_id_attr.insert(id.to_owned(), element);
        }
        self.nodes.insert(
            element,
            Node {
                id_attr: id_attr.map(str::to_owned),
                parent,
                classes: Vec::new(),
            },
        );
        element
    }

    /// Whether `element` exists.
    #[must_use]
    pub fn contains(&self, element: ElementId) -> bool {
        self.nodes.contains_key(&element)
    }

    /// `id` attribute of `element`.
    #[must_use]
    pub fn id_attr(&self, element: ElementId) -> Option<&str> {
        self.nodes.get(&element)?.id_attr.as_deref()
    }

    /// Classes on `element`, in insertion order.
    #[must_use]
    pub fn classes(&self, element: ElementId) -> &[String] {
        match self.nodes.get(&element) {
            Some(node) => &node.classes,
            None => &[],
        }
    }

    /// Whether `element` carries `class`.
    #[must_use]
    pub fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.classes(element).iter().any(|c| c == class)
    }

    /// Listeners registered for `event` on `target`, in registration order.
    #[must_use]
    pub fn listeners_for(&self, target: ElementId, event: EventName) -> Vec<ListenerId> {
        self.registrations
            .iter()
            .filter(|r| r.target == target && r.event == event)
            .map(|r| r.listener)
            .collect()
    }

    /// Every registration, in registration order.
    #[must_use]
    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// Registrations owned by `owner`.
    #[must_use]
    pub fn listeners_owned_by(&self, owner: TooltipId) -> usize {
        self.registrations
            .iter()
            .filter(|r| r.listener.owner == owner)
            .count()
    }

    /// Total number of registrations.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registrations.len()
    }
}

impl Dom for Document {
    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.by_id_attr.get(id).copied()
    }

    fn parent_of(&self, element: ElementId) -> Option<ElementId> {
        self.nodes.get(&element)?.parent
    }

    fn add_event_listener(&mut self, target: ElementId, event: EventName, listener: ListenerId) {
        self.registrations.push(Registration {
            target,
            event,
            listener,
        });
    }

    fn remove_event_listener(
        &mut self,
        target: ElementId,
        event: EventName,
        listener: ListenerId,
    ) -> bool {
        let wanted = Registration {
            target,
            event,
            listener,
        };
        match self.registrations.iter().position(|r| *r == wanted) {
            Some(index) => {
                self.registrations.remove(index);
                true
            }
            None => false,
        }
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(&element) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_owned());
            }
        }
    }
}
