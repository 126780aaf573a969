//! Replays an event script into a PTY.

use std::io::{self, BufRead, Write};

use xmouse_core::{CellMetrics, EncodeError, MouseReporter, ReportError, TrackingMode};

use crate::script::{self, Command};

/// Tracking state for one relayed program.
///
/// Stands in for the terminal's mode registry and the renderer's cell
/// metrics: `mode` lines in the script update the mode, the metrics are
/// fixed by configuration.
#[derive(Debug)]
pub struct Session {
    mode: TrackingMode,
    metrics: CellMetrics,
    reporter: MouseReporter,
}

/// Counters for a finished replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Packets written to the PTY.
    pub sent: usize,
    /// Events the active mode does not report.
    pub ignored: usize,
    /// Lines that failed to parse or encode.
    pub rejected: usize,
}

impl Session {
    pub fn new(mode: TrackingMode, metrics: CellMetrics) -> Self {
        Self {
            mode,
            metrics,
            reporter: MouseReporter::new(),
        }
    }

    pub fn mode(&self) -> TrackingMode {
        self.mode
    }

    /// Read script lines until EOF, reporting each event to `sink`.
    ///
    /// Bad lines are logged and counted. A read or write error ends the
    /// replay and is returned.
    pub fn replay<R: BufRead, W: Write + ?Sized>(
        &mut self,
        input: R,
        sink: &mut W,
    ) -> io::Result<ReplayStats> {
        let mut stats = ReplayStats::default();
        for (idx, line) in input.lines().enumerate() {
            let line = line?;
            let command = match script::parse_line(idx + 1, &line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("script: {e}");
                    stats.rejected += 1;
                    continue;
                }
            };
            let event = match command {
                Command::Mode(mode) => {
                    if mode != self.mode {
                        log::info!("mouse: tracking mode {} -> {mode}", self.mode);
                        self.mode = mode;
                        self.reporter.mode_changed(mode);
                    }
                    continue;
                }
                Command::Event(event) => event,
            };
            match self
                .reporter
                .report(&self.mode, &self.metrics, &event, &mut *sink)
            {
                Ok(true) => {
                    sink.flush()?;
                    stats.sent += 1;
                }
                Ok(false) => stats.ignored += 1,
                // Already logged once per activation by the reporter.
                Err(ReportError::Encode(EncodeError::UnsupportedMode(_))) => stats.rejected += 1,
                Err(ReportError::Encode(e)) => {
                    log::warn!("script: line {}: {e}", idx + 1);
                    stats.rejected += 1;
                }
                Err(ReportError::Io(e)) => return Err(e),
            }
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests;
