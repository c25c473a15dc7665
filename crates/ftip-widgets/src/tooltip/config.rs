#![forbid(unsafe_code)]

//! Tooltip configuration.
//!
//! Every field has a default matching the stock widget, so
//! `TooltipConfig::default()` is a hover tooltip on the parent element,
//! sliding in on the right with no delay and no auto-hide.
//!
//! # Loading
//!
//! With the `config` feature a configuration can be read from text:
//!
//! ```toml
//! event = "click"
//! side = "top"
//! delay = "150ms"
//! duration = 2000
//! target = { id = "save-button" }
//! ```
//!
//! ```rust,ignore
//! let config = TooltipConfig::from_toml_str(text)?;
//! ```
//!
//! Option values are lenient: unknown modes degrade to manual, unknown sides
//! and effects fall back to their defaults, and delays that are not numbers
//! become 0.

use ftip_core::{Effect, Millis, Side, TriggerMode};

/// Class applied to the generated popup when none is configured.
pub const DEFAULT_CLASS_NAME: &str = "ftip-tooltip";

/// Offset between target and popup when none is configured.
pub const DEFAULT_SPACING: i32 = 20;

/// Markup used when the tooltip has no text.
pub const EMPTY_CONTENT: &str = "<span></span>";

/// How the tooltip finds the element it is anchored to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TargetRef {
    /// The parent of the widget's own root element.
    #[default]
    Parent,
    /// The element with this `id` attribute.
    Id(String),
}

/// Options recognized by the tooltip controller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TooltipConfig {
    /// Transition style. Cosmetic only.
    pub effect: Effect,
    /// Interaction that drives automatic show/hide.
    pub event: TriggerMode,
    /// Extra class for the generated popup markup.
    pub tooltip_class_name: String,
    /// Host-desired visibility.
    pub is_shown: bool,
    /// Content markup.
    pub text: Option<String>,
    /// Placement hint passed through to the positioning adapter.
    pub side: Side,
    /// Offset passed through to the positioning adapter.
    pub spacing: i32,
    /// Wait before appearing after a show request.
    pub delay: Millis,
    /// Auto-hide timeout measured from the show request. 0 disables it.
    pub duration: Millis,
    /// Honor `delay` even while another tooltip is showing.
    pub delay_on_change: bool,
    /// Anchor element.
    pub target: TargetRef,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            effect: Effect::default(),
            event: TriggerMode::default(),
            tooltip_class_name: DEFAULT_CLASS_NAME.to_owned(),
            is_shown: false,
            text: None,
            side: Side::default(),
            spacing: DEFAULT_SPACING,
            delay: Millis::ZERO,
            duration: Millis::ZERO,
            delay_on_change: false,
            target: TargetRef::default(),
        }
    }
}

impl TooltipConfig {
    /// Default configuration with `text` as content.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::default().text(text)
    }

    /// Set the content markup.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the trigger mode.
    #[must_use]
    pub fn event(mut self, event: TriggerMode) -> Self {
        self.event = event;
        self
    }

    /// Set the transition effect.
    #[must_use]
    pub fn effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    /// Set the popup class name.
    #[must_use]
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.tooltip_class_name = class.into();
        self
    }

    /// Set the placement hint.
    #[must_use]
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Set the spacing offset.
    #[must_use]
    pub fn spacing(mut self, spacing: i32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the show delay.
    #[must_use]
    pub fn delay(mut self, delay: impl Into<Millis>) -> Self {
        self.delay = delay.into();
        self
    }

    /// Set the auto-hide duration.
    #[must_use]
    pub fn duration(mut self, duration: impl Into<Millis>) -> Self {
        self.duration = duration.into();
        self
    }

    /// Always honor the delay, even while another tooltip is showing.
    #[must_use]
    pub fn delay_on_change(mut self, honor: bool) -> Self {
        self.delay_on_change = honor;
        self
    }

    /// Set the initial desired visibility.
    #[must_use]
    pub fn shown(mut self, shown: bool) -> Self {
        self.is_shown = shown;
        self
    }

    /// Anchor to the element with this `id`.
    #[must_use]
    pub fn target_id(mut self, id: impl Into<String>) -> Self {
        self.target = TargetRef::Id(id.into());
        self
    }

    /// Content markup handed to the positioning adapter.
    #[must_use]
    pub fn content_markup(&self) -> &str {
        match self.text.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => EMPTY_CONTENT,
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }
}

/// Failure to load a [`TooltipConfig`] from text.
#[cfg(feature = "config")]
#[derive(Debug)]
pub enum ConfigError {
    /// TOML syntax or shape error.
    Toml(toml::de::Error),
    /// JSON syntax or shape error.
    Json(serde_json::Error),
}

#[cfg(feature = "config")]
impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Toml(e) => write!(f, "tooltip config TOML error: {e}"),
            Self::Json(e) => write!(f, "tooltip config JSON error: {e}"),
        }
    }
}

#[cfg(feature = "config")]
impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Toml(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_widget() {
        let c = TooltipConfig::default();
        assert_eq!(c.effect, Effect::Slide);
        assert_eq!(c.event, TriggerMode::Hover);
        assert_eq!(c.tooltip_class_name, "ftip-tooltip");
        assert_eq!(c.side, Side::Right);
        assert_eq!(c.spacing, 20);
        assert!(c.delay.is_zero());
        assert!(c.duration.is_zero());
        assert!(!c.delay_on_change);
        assert_eq!(c.target, TargetRef::Parent);
    }

    #[test]
    fn builder_accepts_text_delays() {
        let c = TooltipConfig::new("hi").delay("150ms").duration("later");
        assert_eq!(c.delay, Millis::new(150));
        assert_eq!(c.duration, Millis::ZERO);
    }

    #[test]
    fn empty_text_uses_placeholder_markup() {
        assert_eq!(TooltipConfig::default().content_markup(), EMPTY_CONTENT);
        assert_eq!(TooltipConfig::new("").content_markup(), EMPTY_CONTENT);
        assert_eq!(TooltipConfig::new("<b>x</b>").content_markup(), "<b>x</b>");
    }

    #[cfg(feature = "config")]
    #[test]
    fn loads_from_toml() {
        let c = TooltipConfig::from_toml_str(
            r#"
            event = "click"
            side = "top"
            delay = "150ms"
            duration = 2000
            delay_on_change = true
            target = { id = "save" }
            "#,
        )
        .unwrap();
        assert_eq!(c.event, TriggerMode::Click);
        assert_eq!(c.side, Side::Top);
        assert_eq!(c.delay, Millis::new(150));
        assert_eq!(c.duration, Millis::new(2000));
        assert!(c.delay_on_change);
        assert_eq!(c.target, TargetRef::Id("save".into()));
        assert_eq!(c.spacing, DEFAULT_SPACING);
    }

    #[cfg(feature = "config")]
    #[test]
    fn loads_from_json_leniently() {
        let c = TooltipConfig::from_json_str(
            r#"{"event": "none", "effect": "sparkle", "delay": "soon", "target": "parent"}"#,
        )
        .unwrap();
        assert_eq!(c.event, TriggerMode::Manual);
        assert_eq!(c.effect, Effect::Slide);
        assert_eq!(c.delay, Millis::ZERO);
        assert_eq!(c.target, TargetRef::Parent);
    }

    #[cfg(feature = "config")]
    #[test]
    fn malformed_text_is_an_error() {
        let err = TooltipConfig::from_json_str("{").unwrap_err();
        assert!(err.to_string().contains("JSON"));
        assert!(TooltipConfig::from_toml_str("event = ").is_err());
    }
}
