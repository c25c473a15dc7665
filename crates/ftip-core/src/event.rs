#![forbid(unsafe_code)]

//! Canonical DOM event types.
//!
//! Only the events a tooltip listens for are modelled. Every type derives
//! `Clone`, `PartialEq`, and `Eq` for use in tests and pattern matching.
//!
//! # Design Notes
//!
//! - Event names render to the exact DOM strings (`pointerenter`, `focusout`).
//! - `KeyCode::from_which` accepts legacy numeric key codes (`27` = Escape).
//! - `DomEvent` carries its own `default_prevented` flag so the host can
//!   observe whether a listener suppressed the browser default.

use std::fmt;
use std::str::FromStr;

/// A DOM event type a tooltip may listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventName {
    /// Pointer entered the element.
    PointerEnter,
    /// Pointer left the element.
    PointerLeave,
    /// Primary button click.
    Click,
    /// Element (or a descendant) is about to receive focus.
    FocusIn,
    /// Element (or a descendant) is about to lose focus.
    FocusOut,
    /// Element lost focus (does not bubble).
    Blur,
    /// Key pressed while the element had focus.
    KeyDown,
}

impl EventName {
    /// Every event name, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::PointerEnter,
        Self::PointerLeave,
        Self::Click,
        Self::FocusIn,
        Self::FocusOut,
        Self::Blur,
        Self::KeyDown,
    ];

    /// The DOM event type string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PointerEnter => "pointerenter",
            Self::PointerLeave => "pointerleave",
            Self::Click => "click",
            Self::FocusIn => "focusin",
            Self::FocusOut => "focusout",
            Self::Blur => "blur",
            Self::KeyDown => "keydown",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known event name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEventName(pub String);

impl fmt::Display for UnknownEventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown event name: {}", self.0)
    }
}

impl std::error::Error for UnknownEventName {}

impl FromStr for EventName {
    type Err = UnknownEventName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownEventName(s.to_owned()))
    }
}

/// Key codes for keyboard events.
///
/// Escape is the only key a tooltip reacts to; everything else keeps its
/// legacy numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Escape key.
    Escape,
    /// Any other key, by legacy numeric code.
    Other(u32),
}

impl KeyCode {
    /// Map a legacy `KeyboardEvent.which` value.
    #[must_use]
    pub const fn from_which(which: u32) -> Self {
        match which {
            27 => Self::Escape,
            other => Self::Other(other),
        }
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
}

impl KeyEvent {
    /// Create a key event.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self { code }
    }

    /// Whether this is the Escape key.
    #[must_use]
    pub const fn is_escape(&self) -> bool {
        matches!(self.code, KeyCode::Escape)
    }
}

/// A DOM event delivered to a listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    /// Event type.
    pub name: EventName,
    /// Key payload for `keydown` events.
    pub key: Option<KeyEvent>,
    default_prevented: bool,
}

impl DomEvent {
    /// Create an event without a key payload.
    #[must_use]
    pub const fn new(name: EventName) -> Self {
        Self {
            name,
            key: None,
            default_prevented: false,
        }
    }

    /// Create a `keydown` event.
    #[must_use]
    pub const fn key_down(key: KeyEvent) -> Self {
        Self {
            name: EventName::KeyDown,
            key: Some(key),
            default_prevented: false,
        }
    }

    /// Whether this is a `keydown` for Escape.
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.name == EventName::KeyDown && self.key.is_some_and(|k| k.is_escape())
    }

    /// Suppress the host's default action for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a listener called [`prevent_default`](Self::prevent_default).
    #[must_use]
    pub const fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_roundtrip_through_dom_strings() {
        for name in EventName::ALL {
            assert_eq!(name.as_str().parse::<EventName>(), Ok(name));
        }
    }

    #[test]
    fn event_name_parse_ignores_case_and_whitespace() {
        assert_eq!(" PointerEnter ".parse(), Ok(EventName::PointerEnter));
        assert!("mouseover".parse::<EventName>().is_err());
    }

    #[test]
    fn which_27_is_escape() {
        assert_eq!(KeyCode::from_which(27), KeyCode::Escape);
        assert_eq!(KeyCode::from_which(65), KeyCode::Other(65));
    }

    #[test]
    fn escape_detection_requires_keydown() {
        let esc = DomEvent::key_down(KeyEvent::new(KeyCode::Escape));
        assert!(esc.is_escape());

        let enter = DomEvent::key_down(KeyEvent::new(KeyCode::from_which(13)));
        assert!(!enter.is_escape());

        let mut click = DomEvent::new(EventName::Click);
        click.key = Some(KeyEvent::new(KeyCode::Escape));
        assert!(!click.is_escape());
    }

    #[test]
    fn prevent_default_is_sticky() {
        let mut ev = DomEvent::new(EventName::KeyDown);
        assert!(!ev.is_default_prevented());
        ev.prevent_default();
        ev.prevent_default();
        assert!(ev.is_default_prevented());
    }
}
