#![forbid(unsafe_code)]

//! FrankenTip public facade crate.
//!
//! Re-exports the tooltip controller and its vocabulary from the internal
//! crates and offers a small prelude.
//!
//! ```rust,ignore
//! use ftip::prelude::*;
//!
//! let mut page = Page::new();
//! let body = page.document_mut().create_element(None, None);
//! let button = page.document_mut().create_element(Some("save"), Some(body));
//! let root = page.document_mut().create_element(None, Some(button));
//!
//! let tip = page.mount(root, TooltipConfig::new("Save changes"), TooltipCallbacks::new())?;
//! page.dispatch(button, DomEvent::new(EventName::PointerEnter));
//! page.advance_ms(200);
//! assert_eq!(page.phase(tip), Some(Phase::Shown));
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use ftip_core::{
    Binding, Dom, DomEvent, Effect, ElementId, EventName, KeyCode, KeyEvent, ListenerId, Millis,
    Side, TooltipId, TriggerAction, TriggerEvents, TriggerMode,
};

// --- Runtime re-exports ----------------------------------------------------

pub use ftip_runtime::{DeterministicClock, Scheduler, TimerHandle, TimerSlot};

// --- Widget re-exports -----------------------------------------------------

#[cfg(feature = "config")]
pub use ftip_widgets::tooltip::config::ConfigError;
pub use ftip_widgets::tooltip::{
    ANIMATION_CLASS, ANIMATION_DURATION, Phase, PopupHandle, PopupRequest, Positioner,
    ShowingTooltips, TARGET_CLASS, TargetRef, TooltipCallbacks, TooltipConfig, TooltipController,
    TooltipCx, TooltipTask, VisibilityState,
};

// --- Web re-exports --------------------------------------------------------

#[cfg(feature = "web")]
pub use ftip_web::{Document, Page, PageError, PopupCall, PopupRecord, RecordingPositioner};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for ftip hosts.
#[derive(Debug)]
pub enum Error {
    /// Page operation on an unknown tooltip or element.
    #[cfg(feature = "web")]
    Page(PageError),
    /// Configuration text could not be loaded.
    #[cfg(feature = "config")]
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            #[cfg(feature = "web")]
            Self::Page(ref err) => write!(f, "{err}"),
            #[cfg(feature = "config")]
            Self::Config(ref err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            #[cfg(feature = "web")]
            Self::Page(ref err) => Some(err),
            #[cfg(feature = "config")]
            Self::Config(ref err) => Some(err),
        }
    }
}

#[cfg(feature = "web")]
impl From<PageError> for Error {
    fn from(err: PageError) -> Self {
        Self::Page(err)
    }
}

#[cfg(feature = "config")]
impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for ftip APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        DomEvent, Effect, ElementId, Error, EventName, KeyCode, KeyEvent, Phase, Result, Side,
        TooltipCallbacks, TooltipConfig, TooltipController, TooltipId, TriggerMode,
    };

    #[cfg(feature = "web")]
    pub use crate::Page;

    pub use crate::{core, runtime, widgets};
}

pub use ftip_core as core;
pub use ftip_runtime as runtime;
pub use ftip_widgets as widgets;

#[cfg(feature = "web")]
pub use ftip_web as web;
