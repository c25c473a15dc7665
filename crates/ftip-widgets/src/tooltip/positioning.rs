#![forbid(unsafe_code)]

//! Boundary to the popup-positioning library.
//!
//! The controller never computes placement. It asks a [`Positioner`] for one
//! [`PopupHandle`] per attach and then only issues the calls below. The
//! contract the controller upholds:
//!
//! 1. `create` is called at most once per attach.
//! 2. `dispose` is called exactly once, at teardown.
//! 3. No call reaches a handle after `dispose`.
//!
//! `show` reports whether it inserted the popup's content node for the first
//! time, which is how the controller learns the popup has rendered.

use ftip_core::{Effect, ElementId, Side, TooltipId};

use super::config::TooltipConfig;

/// Everything the positioning library needs to build a popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupRequest {
    /// Controller that owns the popup.
    pub owner: TooltipId,
    /// Element the popup is anchored to.
    pub anchor: ElementId,
    /// Content markup.
    pub content: String,
    /// Popup skeleton markup; content goes into the node with `wormhole_id`.
    pub template: String,
    /// Id of the inner content node.
    pub wormhole_id: String,
    /// Placement hint.
    pub side: Side,
    /// Offset from the anchor.
    pub spacing: i32,
}

impl PopupRequest {
    /// Build the request for `owner` anchored at `anchor`.
    #[must_use]
    pub fn new(owner: TooltipId, anchor: ElementId, config: &TooltipConfig) -> Self {
        let wormhole_id = wormhole_id(owner);
        Self {
            owner,
            anchor,
            content: config.content_markup().to_owned(),
            template: popup_template(&config.tooltip_class_name, config.effect, &wormhole_id),
            wormhole_id,
            side: config.side,
            spacing: config.spacing,
        }
    }
}

/// Id of the node the content is rendered into.
#[must_use]
pub fn wormhole_id(owner: TooltipId) -> String {
    format!("ftip-tooltip-{}-wormhole", owner.0)
}

/// Popup skeleton: outer node, arrow, inner content node.
#[must_use]
pub fn popup_template(class_name: &str, effect: Effect, wormhole_id: &str) -> String {
    format!(
        concat!(
            r#"<div class="tooltip {class} ftip-tooltip-effect-{effect}" role="tooltip">"#,
            r#"<div class="tooltip-arrow ftip-tooltip-arrow"></div>"#,
            r#"<div class="tooltip-inner" id="{wormhole}"></div>"#,
            "</div>",
        ),
        class = class_name,
        effect = effect.as_str(),
        wormhole = wormhole_id,
    )
}

/// Factory side of the positioning library.
pub trait Positioner {
    /// Build a popup for `request`. Called once per attach.
    fn create(&mut self, request: PopupRequest) -> Box<dyn PopupHandle>;
}

/// One positioned popup.
pub trait PopupHandle {
    /// Display the popup.
    ///
    /// Returns `true` if this call created the content node.
    fn show(&mut self) -> bool;

    /// Stop displaying the popup.
    fn hide(&mut self);

    /// Recompute placement after layout has settled.
    fn reposition(&mut self);

    /// Add a class to the popup node.
    fn add_class(&mut self, class: &str);

    /// Remove a class from the popup node.
    fn remove_class(&mut self, class: &str);

    /// Release the popup and its node. Called exactly once.
    fn dispose(&mut self);
}
