//! xterm mouse report encoding (X10 and normal tracking).
//!
//! Parameters in these reports are single characters holding `value + 32`,
//! so `!` is 1 and the top-left cell is `!!`. Every report is
//! `CSI M Cb Cx Cy`: six bytes.
//!
//! The low two bits of `Cb` carry the button (0, 1, 2, or 3 for release).
//! Normal tracking adds the held modifiers: 4 for Shift, 8 for Meta, 16
//! for Control. Wheel buttons carry 64 on top of the button 1/2 code.
//!
//! Encoding is a pure function of its inputs. Modes whose protocol is not
//! implemented here come back as [`EncodeError::UnsupportedMode`] so the
//! caller picks the fallback.

use std::error::Error;
use std::fmt;

use crate::event::{CellMetrics, Modifiers, MouseButton, PointerAction, PointerEvent};
use crate::index::CellPoint;
use crate::mode::TrackingMode;

/// Largest column or line a single-byte parameter can carry (255 - 32).
pub const MAX_COORDINATE: usize = 223;

/// Offset added to every parameter value.
const PARAM_OFFSET: u8 = 32;

/// Button code for a release in normal tracking.
const RELEASE_CODE: u8 = 3;

/// Added to the button 1/2 code for wheel up/down.
const WHEEL_OFFSET: u8 = 64;

const SHIFT_BIT: u8 = 4;
const META_BIT: u8 = 8;
const CONTROL_BIT: u8 = 16;

/// A finished mouse report, ready for the PTY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedPacket {
    bytes: [u8; 6],
}

impl EncodedPacket {
    /// Build `CSI M Cb Cx Cy` for a button code and cell.
    fn normal(code: u8, point: CellPoint) -> Result<Self, EncodeError> {
        let out_of_range = || EncodeError::CoordinateOutOfRange(point);
        let cx = coordinate_byte(point.column.0).ok_or_else(out_of_range)?;
        let cy = coordinate_byte(point.line.0).ok_or_else(out_of_range)?;
        Ok(Self {
            bytes: [0x1b, b'[', b'M', code + PARAM_OFFSET, cx, cy],
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`: a report is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The encoded `Cb` byte (button code plus 32).
    pub fn button_byte(&self) -> u8 {
        self.bytes[3]
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes.to_vec()
    }
}

impl AsRef<[u8]> for EncodedPacket {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for EncodedPacket {
    /// Printable form for logs, e.g. `\e[M !!`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\\e")?;
        for &b in &self.bytes[1..] {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{b:02x}")?;
            }
        }
        Ok(())
    }
}

/// Why a pointer event could not be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The tracking mode needs protocol features this encoder lacks.
    UnsupportedMode(TrackingMode),
    /// The cell is beyond what a single-byte parameter can address.
    CoordinateOutOfRange(CellPoint),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedMode(mode) => {
                write!(f, "mouse tracking mode {mode} is not supported")
            }
            Self::CoordinateOutOfRange(point) => write!(
                f,
                "cell {point} is beyond the mouse report limit of {MAX_COORDINATE}"
            ),
        }
    }
}

impl Error for EncodeError {}

/// Encode a pointer event for the given tracking mode.
///
/// Returns `Ok(None)` when the mode does not report this event (including
/// every event in [`TrackingMode::None`]).
pub fn encode(
    mode: TrackingMode,
    event: &PointerEvent,
    metrics: CellMetrics,
) -> Result<Option<EncodedPacket>, EncodeError> {
    let code = match mode {
        TrackingMode::None => return Ok(None),
        TrackingMode::X10 => x10_button_code(event),
        TrackingMode::Vt200 => vt200_button_code(event),
        TrackingMode::Vt200Highlight | TrackingMode::ButtonEvent | TrackingMode::AnyEvent => {
            return Err(EncodeError::UnsupportedMode(mode));
        }
    };
    let Some(code) = code else {
        return Ok(None);
    };
    let point = metrics.cell_at(event.x, event.y);
    EncodedPacket::normal(code, point).map(Some)
}

/// X10: presses of buttons 1–3 only, no modifiers.
fn x10_button_code(event: &PointerEvent) -> Option<u8> {
    if event.action != PointerAction::Press {
        return None;
    }
    match event.button? {
        MouseButton::Button1 => Some(0),
        MouseButton::Button2 => Some(1),
        MouseButton::Button3 => Some(2),
        MouseButton::Button4 | MouseButton::Button5 => None,
    }
}

/// Normal tracking: presses, releases, and modifiers. Motion is not reported.
fn vt200_button_code(event: &PointerEvent) -> Option<u8> {
    let base = match (event.action, event.button) {
        (PointerAction::Press, Some(MouseButton::Button1)) => 0,
        (PointerAction::Press, Some(MouseButton::Button2)) => 1,
        (PointerAction::Press, Some(MouseButton::Button3)) => 2,
        (PointerAction::Press, Some(MouseButton::Button4)) => WHEEL_OFFSET,
        (PointerAction::Press, Some(MouseButton::Button5)) => WHEEL_OFFSET + 1,
        // Wheel releases are not reported.
        (PointerAction::Release, Some(button)) if button.is_wheel() => return None,
        (PointerAction::Release, _) => RELEASE_CODE,
        (PointerAction::Press, None) | (PointerAction::Move, _) => return None,
    };
    Some(base | modifier_bits(event.modifiers))
}

fn modifier_bits(mods: Modifiers) -> u8 {
    let mut bits = 0;
    if mods.contains(Modifiers::SHIFT) {
        bits |= SHIFT_BIT;
    }
    if mods.contains(Modifiers::META) {
        bits |= META_BIT;
    }
    if mods.contains(Modifiers::CONTROL) {
        bits |= CONTROL_BIT;
    }
    bits
}

fn coordinate_byte(value: usize) -> Option<u8> {
    if (1..=MAX_COORDINATE).contains(&value) {
        Some(value as u8 + PARAM_OFFSET)
    } else {
        None
    }
}
