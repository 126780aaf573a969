//! Glue between the encoder and the rest of a terminal.
//!
//! The terminal owns the tracking mode, the renderer owns the cell size,
//! and the PTY owns the output stream. `ModeSource` and `MetricsSource`
//! expose the first two as read-only snapshots; the PTY is any
//! `io::Write`. `MouseReporter` pulls both snapshots for each event,
//! encodes, and hands the packet to the sink in a single write.

use std::error::Error;
use std::fmt;
use std::io::{self, Write};

use crate::encode::{EncodeError, encode};
use crate::event::{CellMetrics, PointerEvent};
use crate::mode::{MouseMode, TrackingMode};

/// Supplies the tracking mode currently in effect.
pub trait ModeSource {
    fn tracking_mode(&self) -> TrackingMode;
}

impl ModeSource for TrackingMode {
    fn tracking_mode(&self) -> TrackingMode {
        *self
    }
}

impl ModeSource for MouseMode {
    fn tracking_mode(&self) -> TrackingMode {
        self.tracking()
    }
}

/// Supplies the current cell size in pixels.
pub trait MetricsSource {
    fn cell_metrics(&self) -> CellMetrics;
}

impl MetricsSource for CellMetrics {
    fn cell_metrics(&self) -> CellMetrics {
        *self
    }
}

/// Failure to deliver a mouse report.
#[derive(Debug)]
pub enum ReportError {
    /// The event could not be encoded; nothing was written.
    Encode(EncodeError),
    /// The output sink rejected the packet. Not retried.
    Io(io::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(e) => write!(f, "mouse report not encoded: {e}"),
            Self::Io(e) => write!(f, "mouse report not written: {e}"),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<EncodeError> for ReportError {
    fn from(e: EncodeError) -> Self {
        Self::Encode(e)
    }
}

impl From<io::Error> for ReportError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Encodes pointer events and writes them to a sink.
///
/// The only state kept is which unsupported mode has already been
/// warned about, so a program stuck in e.g. any-event mode produces one
/// log line per activation rather than one per mouse move.
#[derive(Debug, Default)]
pub struct MouseReporter {
    warned: Option<TrackingMode>,
}

impl MouseReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report one event. Returns `true` if a packet was written.
    ///
    /// Events the active mode does not report return `Ok(false)` and the
    /// caller should treat them as local UI input.
    pub fn report<W: Write + ?Sized>(
        &mut self,
        modes: &impl ModeSource,
        metrics: &impl MetricsSource,
        event: &PointerEvent,
        sink: &mut W,
    ) -> Result<bool, ReportError> {
        let mode = modes.tracking_mode();
        if self.warned.is_some_and(|warned| warned != mode) {
            self.warned = None;
        }

        let packet = match encode(mode, event, metrics.cell_metrics()) {
            Ok(Some(packet)) => packet,
            Ok(None) => return Ok(false),
            Err(err) => {
                if matches!(err, EncodeError::UnsupportedMode(_)) && self.warned.is_none() {
                    log::warn!("mouse: {err}; events are not reported");
                    self.warned = Some(mode);
                }
                return Err(err.into());
            }
        };

        sink.write_all(packet.as_bytes())?;
        log::debug!("mouse: sent {packet} ({mode})");
        Ok(true)
    }

    /// Note that the tracking mode was switched, re-arming the
    /// unsupported-mode warning even if no event arrives in between.
    pub fn mode_changed(&mut self, mode: TrackingMode) {
        if self.warned != Some(mode) {
            self.warned = None;
        }
    }

    /// The unsupported mode already warned about in its current activation.
    pub fn warned_mode(&self) -> Option<TrackingMode> {
        self.warned
    }
}
