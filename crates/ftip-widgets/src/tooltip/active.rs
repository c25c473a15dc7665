#![forbid(unsafe_code)]

//! Registry of tooltips currently on screen.
//!
//! A tooltip enters the registry when its entrance begins and leaves it when
//! its exit begins (or it is torn down). Controllers consult it to collapse
//! their show delay while another tooltip is already up, so moving between
//! adjacent targets does not make the second tooltip wait.
//!
//! One registry is shared by every controller on a page.

use std::collections::BTreeSet;

use ftip_core::TooltipId;

/// Set of tooltips that are showing or entering.
#[derive(Debug, Default, Clone)]
pub struct ShowingTooltips {
    ids: BTreeSet<TooltipId>,
}

impl ShowingTooltips {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` as showing. Returns `false` if it already was.
    pub fn enter(&mut self, id: TooltipId) -> bool {
        self.ids.insert(id)
    }

    /// Mark `id` as no longer showing. Returns `false` if it was not.
    pub fn leave(&mut self, id: TooltipId) -> bool {
        self.ids.remove(&id)
    }

    /// Whether `id` is showing.
    #[must_use]
    pub fn contains(&self, id: TooltipId) -> bool {
        self.ids.contains(&id)
    }

    /// Whether any tooltip other than `id` is showing.
    #[must_use]
    pub fn any_other(&self, id: TooltipId) -> bool {
        self.ids.iter().any(|other| *other != id)
    }

    /// Number of showing tooltips.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no tooltip is showing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
