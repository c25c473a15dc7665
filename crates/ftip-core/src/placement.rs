#![forbid(unsafe_code)]

//! Placement hints and cosmetic effects.
//!
//! Neither type affects the visibility state machine. [`Side`] is passed
//! through to the positioning adapter untouched; [`Effect`] only picks a CSS
//! class for the generated popup markup. Both parse leniently from attribute
//! text and fall back to their defaults on unknown input.

use std::fmt;

/// Where the popup sits relative to its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum Side {
    /// Above the target.
    Top,
    /// Right of the target.
    #[default]
    Right,
    /// Below the target.
    Bottom,
    /// Left of the target.
    Left,
}

impl Side {
    /// Parse a placement name; unknown names fall back to [`Side::Right`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "left" => Self::Left,
            _ => Self::Right,
        }
    }

    /// Placement name as understood by the positioning library.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Side {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<Side> for String {
    fn from(side: Side) -> Self {
        side.as_str().to_owned()
    }
}

/// Entrance/exit transition style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum Effect {
    /// Opacity transition.
    Fade,
    /// Opacity plus a short slide away from the target.
    #[default]
    Slide,
    /// No transition styling.
    None,
}

impl Effect {
    /// Parse an effect name; unknown names fall back to [`Effect::Slide`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "fade" => Self::Fade,
            "none" => Self::None,
            _ => Self::Slide,
        }
    }

    /// Effect name used in the generated class list.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::Slide => "slide",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Effect {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<Effect> for String {
    fn from(effect: Effect) -> Self {
        effect.as_str().to_owned()
    }
}
