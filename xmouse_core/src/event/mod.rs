//! Pointer events as delivered by the windowing layer.
//!
//! A `PointerEvent` is built fresh for every raw input callback and carries
//! everything the encoder needs: what happened, which button, the held
//! modifiers, and the pointer position in surface pixels. `CellMetrics`
//! turns that pixel position into a 1-based grid cell.

use bitflags::bitflags;

use crate::index::{CellPoint, Column, Line};

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerAction {
    Press,
    Release,
    Move,
}

/// A physical mouse button.
///
/// Buttons 4 and 5 are the scroll wheel (up and down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left button.
    Button1,
    /// Middle button.
    Button2,
    /// Right button.
    Button3,
    /// Wheel up.
    Button4,
    /// Wheel down.
    Button5,
}

impl MouseButton {
    /// 1-based button number.
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Button1 => 1,
            Self::Button2 => 2,
            Self::Button3 => 3,
            Self::Button4 => 4,
            Self::Button5 => 5,
        }
    }

    /// Button for a 1-based number, `None` outside 1–5.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Button1),
            2 => Some(Self::Button2),
            3 => Some(Self::Button3),
            4 => Some(Self::Button4),
            5 => Some(Self::Button5),
            _ => None,
        }
    }

    /// Whether this is a scroll wheel "button".
    pub fn is_wheel(self) -> bool {
        matches!(self, Self::Button4 | Self::Button5)
    }
}

bitflags! {
    /// Modifier keys held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT   = 0b001;
        const CONTROL = 0b010;
        const META    = 0b100;
    }
}

/// One raw pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    /// The button pressed or released, or held during a move.
    pub button: Option<MouseButton>,
    pub modifiers: Modifiers,
    /// Horizontal position in surface pixels.
    pub x: f64,
    /// Vertical position in surface pixels.
    pub y: f64,
}

impl PointerEvent {
    /// A button press at the given pixel position.
    pub fn press(button: MouseButton, x: f64, y: f64) -> Self {
        Self {
            action: PointerAction::Press,
            button: Some(button),
            modifiers: Modifiers::empty(),
            x,
            y,
        }
    }

    /// A button release at the given pixel position.
    pub fn release(button: MouseButton, x: f64, y: f64) -> Self {
        Self {
            action: PointerAction::Release,
            button: Some(button),
            modifiers: Modifiers::empty(),
            x,
            y,
        }
    }

    /// Pointer motion, optionally with a button held.
    pub fn motion(held: Option<MouseButton>, x: f64, y: f64) -> Self {
        Self {
            action: PointerAction::Move,
            button: held,
            modifiers: Modifiers::empty(),
            x,
            y,
        }
    }

    /// Same event with the given modifiers held.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Pixel size of one character cell, as reported by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    cell_width: f64,
    cell_height: f64,
}

impl CellMetrics {
    /// Returns `None` unless both dimensions are finite and positive.
    pub fn new(cell_width: f64, cell_height: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(cell_width) && valid(cell_height) {
            Some(Self {
                cell_width,
                cell_height,
            })
        } else {
            None
        }
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Convert a pixel position to the 1-based cell under it.
    ///
    /// Positions above or left of the surface (negative or NaN pixels)
    /// clamp to column/line 1.
    pub fn cell_at(&self, x: f64, y: f64) -> CellPoint {
        CellPoint::new(
            Column(axis_index(x, self.cell_width)),
            Line(axis_index(y, self.cell_height)),
        )
    }
}

impl Default for CellMetrics {
    /// An 8x16 cell, the classic VGA text cell.
    fn default() -> Self {
        Self {
            cell_width: 8.0,
            cell_height: 16.0,
        }
    }
}

/// `floor(pixel / size) + 1`, never below 1.
fn axis_index(pixel: f64, size: f64) -> usize {
    let cells = (pixel / size).floor();
    // NaN fails the comparison and clamps to zero as well.
    let cells = if cells > 0.0 { cells as usize } else { 0 };
    cells.saturating_add(1)
}

#[cfg(test)]
mod tests;
