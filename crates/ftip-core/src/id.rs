#![forbid(unsafe_code)]

//! Opaque identifiers shared between controllers and their host.

use std::fmt;

/// Handle to an element in the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "el#{}", self.0)
    }
}

/// Identity of one tooltip controller instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TooltipId(pub u64);

impl fmt::Display for TooltipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tooltip#{}", self.0)
    }
}

/// Identity of one attached listener.
///
/// The owning tooltip is part of the identity so the host can route a fired
/// listener back to its controller, and two controllers can never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId {
    /// Controller that attached the listener.
    pub owner: TooltipId,
    /// Per-owner sequence number, never reused.
    pub seq: u32,
}

impl ListenerId {
    /// Create a listener id.
    #[must_use]
    pub const fn new(owner: TooltipId, seq: u32) -> Self {
        Self { owner, seq }
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/listener#{}", self.owner, self.seq)
    }
}
