#![forbid(unsafe_code)]

//! Trigger resolution: interaction mode → event names → listener wiring.
//!
//! Everything here is a pure function of [`TriggerMode`]. A controller
//! computes its wiring once at attach time and recomputes it only through an
//! explicit mode change, never by observing configuration reactively.
//!
//! # Resolution table
//!
//! | mode   | show           | hide           |
//! |--------|----------------|----------------|
//! | hover  | `pointerenter` | `pointerleave` |
//! | focus  | `focusin`      | `blur`         |
//! | click  | `click`        | `click`        |
//! | manual | none           | none           |
//!
//! # Wiring rules
//!
//! 1. Identical show/hide events bind ONE toggling listener, so a single
//!    click can never show and then immediately hide.
//! 2. Unless the mode is `focus`, `focusout` hides; unless the mode is `focus`
//!    or `click`, `focusin` shows. A click already moves focus, so binding
//!    `focusin` in click mode would double-trigger.
//! 3. Every automatic mode binds `keydown`; Escape dismisses.
//! 4. Manual mode binds nothing at all.

use std::fmt;

use crate::event::EventName;

/// Configured interaction type that drives automatic show/hide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum TriggerMode {
    /// Show on pointer enter, hide on pointer leave.
    #[default]
    Hover,
    /// Toggle on click.
    Click,
    /// Show on focus, hide on blur.
    Focus,
    /// No automatic show or hide; the host drives visibility.
    Manual,
}

impl TriggerMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 4] = [Self::Hover, Self::Click, Self::Focus, Self::Manual];

    /// Parse a mode name. Unknown names (including `"none"` and `"ready"`)
    /// degrade to [`TriggerMode::Manual`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::try_parse(text).unwrap_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::warn!(message = "trigger.unknown_mode", mode = text);
            Self::Manual
        })
    }

    /// Parse a mode name, returning `None` for names that only degrade.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "hover" => Some(Self::Hover),
            "click" => Some(Self::Click),
            "focus" => Some(Self::Focus),
            "manual" | "none" => Some(Self::Manual),
            _ => None,
        }
    }

    /// Mode name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::Click => "click",
            Self::Focus => "focus",
            Self::Manual => "manual",
        }
    }

    /// Show/hide event names for this mode.
    #[must_use]
    pub const fn events(self) -> TriggerEvents {
        match self {
            Self::Hover => TriggerEvents {
                show: Some(EventName::PointerEnter),
                hide: Some(EventName::PointerLeave),
            },
            Self::Focus => TriggerEvents {
                show: Some(EventName::FocusIn),
                hide: Some(EventName::Blur),
            },
            Self::Click => TriggerEvents {
                show: Some(EventName::Click),
                hide: Some(EventName::Click),
            },
            Self::Manual => TriggerEvents {
                show: None,
                hide: None,
            },
        }
    }

    /// Full listener wiring for this mode, in attach order.
    #[must_use]
    pub fn bindings(self) -> Vec<Binding> {
        if self == Self::Manual {
            return Vec::new();
        }

        let events = self.events();
        let mut out = Vec::with_capacity(5);

        match (events.show, events.hide) {
            (Some(show), Some(hide)) if show == hide => {
                out.push(Binding::new(show, TriggerAction::Toggle));
            }
            (show, hide) => {
                if let Some(show) = show {
                    out.push(Binding::new(show, TriggerAction::Show));
                }
                if let Some(hide) = hide {
                    out.push(Binding::new(hide, TriggerAction::Hide));
                }
            }
        }

        if self != Self::Focus {
            if self != Self::Click {
                out.push(Binding::new(EventName::FocusIn, TriggerAction::Show));
            }
            out.push(Binding::new(EventName::FocusOut, TriggerAction::Hide));
        }

        out.push(Binding::new(EventName::KeyDown, TriggerAction::Dismiss));
        out
    }
}

impl fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TriggerMode {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<TriggerMode> for String {
    fn from(mode: TriggerMode) -> Self {
        mode.as_str().to_owned()
    }
}

/// Resolved show/hide event names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerEvents {
    /// Event that shows the tooltip, if any.
    pub show: Option<EventName>,
    /// Event that hides the tooltip, if any.
    pub hide: Option<EventName>,
}

impl TriggerEvents {
    /// Whether show and hide share one event, so it must toggle.
    #[must_use]
    pub fn toggles(&self) -> bool {
        self.show.is_some() && self.show == self.hide
    }
}

/// What a fired listener asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerAction {
    /// Call `show()`.
    Show,
    /// Call `hide()`.
    Hide,
    /// Call `toggle()`.
    Toggle,
    /// Hide on Escape and suppress the event's default action.
    Dismiss,
}

/// One listener to attach on the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// Event to listen for.
    pub event: EventName,
    /// Action the listener performs.
    pub action: TriggerAction,
}

impl Binding {
    /// Create a binding.
    #[must_use]
    pub const fn new(event: EventName, action: TriggerAction) -> Self {
        Self { event, action }
    }
}
