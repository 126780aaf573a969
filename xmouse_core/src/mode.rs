//! Mouse tracking modes (DECSET 9, 1000–1003).
//!
//! The terminal's mode registry toggles `MouseMode` flags as DECSET/DECRST
//! sequences arrive. The encoder only ever sees the resolved
//! `TrackingMode`, a single protocol variant.

use std::fmt;

use bitflags::bitflags;

/// The active xterm mouse tracking protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrackingMode {
    /// No reporting; pointer events stay with the local UI.
    #[default]
    None,
    /// Mode 9 — press-only reporting, no modifiers.
    X10,
    /// Mode 1000 — press and release with modifiers.
    Vt200,
    /// Mode 1001 — normal tracking plus highlight region negotiation.
    Vt200Highlight,
    /// Mode 1002 — normal tracking plus motion while a button is held.
    ButtonEvent,
    /// Mode 1003 — button-event tracking plus motion with no button held.
    AnyEvent,
}

impl TrackingMode {
    /// Whether the encoder produces packets for this mode.
    ///
    /// `None` is "supported" in the sense that it never fails: it simply
    /// reports nothing.
    pub fn is_supported(self) -> bool {
        matches!(self, Self::None | Self::X10 | Self::Vt200)
    }

    /// Stable lowercase name, as used in configuration and scripts.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::X10 => "x10",
            Self::Vt200 => "vt200",
            Self::Vt200Highlight => "vt200-highlight",
            Self::ButtonEvent => "button-event",
            Self::AnyEvent => "any-event",
        }
    }

    /// Inverse of [`TrackingMode::name`]. Also accepts `normal` for `vt200`.
    pub fn from_name(name: &str) -> Option<Self> {
        let mode = match name.to_ascii_lowercase().as_str() {
            "none" | "off" => Self::None,
            "x10" => Self::X10,
            "vt200" | "normal" => Self::Vt200,
            "vt200-highlight" | "highlight" => Self::Vt200Highlight,
            "button-event" | "button" => Self::ButtonEvent,
            "any-event" | "any" => Self::AnyEvent,
            _ => return None,
        };
        Some(mode)
    }
}

impl fmt::Display for TrackingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Mouse tracking flags as stored by a terminal mode registry.
    ///
    /// Applications may set more than one of these; [`MouseMode::tracking`]
    /// picks the variant that is actually in effect.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseMode: u8 {
        /// DECSET 9 — X10 compatibility.
        const X10             = 1;
        /// DECSET 1000 — normal tracking.
        const VT200           = 1 << 1;
        /// DECSET 1001 — highlight tracking.
        const VT200_HIGHLIGHT = 1 << 2;
        /// DECSET 1002 — button-event tracking.
        const BUTTON_EVENT    = 1 << 3;
        /// DECSET 1003 — any-event tracking.
        const ANY_EVENT       = 1 << 4;
    }
}

impl MouseMode {
    /// Flag for a DECSET/DECRST parameter, or `None` if the parameter is
    /// not a mouse tracking mode.
    pub fn from_decset(param: u16) -> Option<Self> {
        match param {
            9 => Some(Self::X10),
            1000 => Some(Self::VT200),
            1001 => Some(Self::VT200_HIGHLIGHT),
            1002 => Some(Self::BUTTON_EVENT),
            1003 => Some(Self::ANY_EVENT),
            _ => None,
        }
    }

    /// Resolve the flag set to the single mode in effect.
    ///
    /// The most capable mode wins: any-event, button-event, highlight,
    /// normal, then X10.
    pub fn tracking(self) -> TrackingMode {
        if self.contains(Self::ANY_EVENT) {
            TrackingMode::AnyEvent
        } else if self.contains(Self::BUTTON_EVENT) {
            TrackingMode::ButtonEvent
        } else if self.contains(Self::VT200_HIGHLIGHT) {
            TrackingMode::Vt200Highlight
        } else if self.contains(Self::VT200) {
            TrackingMode::Vt200
        } else if self.contains(Self::X10) {
            TrackingMode::X10
        } else {
            TrackingMode::None
        }
    }
}

impl From<TrackingMode> for MouseMode {
    fn from(mode: TrackingMode) -> Self {
        match mode {
            TrackingMode::None => Self::empty(),
            TrackingMode::X10 => Self::X10,
            TrackingMode::Vt200 => Self::VT200,
            TrackingMode::Vt200Highlight => Self::VT200_HIGHLIGHT,
            TrackingMode::ButtonEvent => Self::BUTTON_EVENT,
            TrackingMode::AnyEvent => Self::ANY_EVENT,
        }
    }
}
