#![forbid(unsafe_code)]

//! The host-document boundary.
//!
//! A tooltip controller never holds element references or closures inside the
//! document. It names elements by [`ElementId`] and listeners by
//! [`ListenerId`]; the host keeps the mapping and routes fired listeners back
//! to the owning controller. Removal is always by listener identity, so a
//! controller can only ever remove what it added.

use crate::event::EventName;
use crate::id::{ElementId, ListenerId};

/// Operations a controller issues against the host document.
pub trait Dom {
    /// Look up an element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<ElementId>;

    /// Parent of `element`, if it has one.
    fn parent_of(&self, element: ElementId) -> Option<ElementId>;

    /// Register `listener` for `event` on `target`.
    fn add_event_listener(&mut self, target: ElementId, event: EventName, listener: ListenerId);

    /// Remove exactly the registration added for `listener`.
    ///
    /// Returns `true` if a registration was removed.
    fn remove_event_listener(
        &mut self,
        target: ElementId,
        event: EventName,
        listener: ListenerId,
    ) -> bool;

    /// Add a CSS class to `element`. Adding a present class is a no-op.
    fn add_class(&mut self, element: ElementId, class: &str);
}
