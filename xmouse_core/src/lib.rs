//! xterm mouse tracking for terminal emulators.
//!
//! Translates raw pointer events (button press/release, motion, modifier
//! keys, pixel position) into the byte sequences of the xterm mouse
//! tracking protocols, ready to be written into a PTY. The crate has no
//! GUI, rendering, or PTY code: the tracking mode, the cell size, and the
//! output stream are supplied by the caller.
//!
//! X10 (DECSET 9) and normal tracking (DECSET 1000) are encoded.
//! Highlight, button-event, and any-event tracking are recognised but
//! reported as [`EncodeError::UnsupportedMode`].

#![deny(unsafe_code)]

pub mod encode;
pub mod event;
pub mod index;
pub mod mode;
pub mod report;

pub use encode::{EncodeError, EncodedPacket, MAX_COORDINATE, encode};
pub use event::{CellMetrics, Modifiers, MouseButton, PointerAction, PointerEvent};
pub use index::{CellPoint, Column, Line};
pub use mode::{MouseMode, TrackingMode};
pub use report::{MetricsSource, ModeSource, MouseReporter, ReportError};
