//! Replay tests with in-memory scripts and sinks.

use std::io::{self, Cursor, Write};

use xmouse_core::{CellMetrics, TrackingMode};

use super::{ReplayStats, Session};

fn session(mode: TrackingMode) -> Session {
    Session::new(mode, CellMetrics::new(10.0, 20.0).expect("valid metrics"))
}

fn replay(session: &mut Session, script: &str) -> (ReplayStats, Vec<u8>) {
    let mut sink = Vec::new();
    let stats = session
        .replay(Cursor::new(script), &mut sink)
        .expect("replay");
    (stats, sink)
}

/// Accepts `budget` bytes, then fails like a closed PTY.
struct ClosingPty {
    budget: usize,
    written: Vec<u8>,
}

impl Write for ClosingPty {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() + buf.len() > self.budget {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pty closed"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn click_is_reported_as_press_and_release() {
    let mut s = session(TrackingMode::Vt200);
    let (stats, sink) = replay(&mut s, "press 2 15 25 shift\nrelease 2 15 25\n");
    assert_eq!(
        stats,
        ReplayStats {
            sent: 2,
            ignored: 0,
            rejected: 0
        }
    );
    assert_eq!(
        sink,
        [0x1b, b'[', b'M', 37, 34, 34, 0x1b, b'[', b'M', 35, 34, 34]
    );
}

#[test]
fn x10_ignores_release_and_motion() {
    let mut s = session(TrackingMode::X10);
    let script = "\
press left 0 0
move 30 30
drag left 40 40
release left 40 40
";
    let (stats, sink) = replay(&mut s, script);
    assert_eq!(stats.sent, 1);
    assert_eq!(stats.ignored, 3);
    assert_eq!(sink, [0x1b, b'[', b'M', 32, 33, 33]);
}

#[test]
fn mode_lines_switch_tracking() {
    let mut s = session(TrackingMode::None);
    let script = "\
press 1 0 0
mode x10
press 1 0 0
mode none
press 1 0 0
";
    let (stats, sink) = replay(&mut s, script);
    assert_eq!(stats.sent, 1);
    assert_eq!(stats.ignored, 2);
    assert_eq!(sink.len(), 6);
    assert_eq!(s.mode(), TrackingMode::None);
}

#[test]
fn bad_lines_are_counted_and_skipped() {
    let mut s = session(TrackingMode::Vt200);
    let script = "\
# header
bogus
press 1 0 0
press 1 99999 0
";
    let (stats, sink) = replay(&mut s, script);
    assert_eq!(stats.sent, 1);
    assert_eq!(stats.rejected, 2);
    assert_eq!(sink.len(), 6);
}

#[test]
fn unsupported_mode_rejects_events_without_writing() {
    let mut s = session(TrackingMode::ButtonEvent);
    let (stats, sink) = replay(&mut s, "press 1 0 0\ndrag 1 10 10\nrelease 1 10 10\n");
    assert_eq!(stats.rejected, 3);
    assert_eq!(stats.sent, 0);
    assert!(sink.is_empty());
}

#[test]
fn write_failure_ends_replay() {
    let mut s = session(TrackingMode::Vt200);
    let mut pty = ClosingPty {
        budget: 6,
        written: Vec::new(),
    };
    let err = s
        .replay(Cursor::new("press 1 0 0\npress 1 0 0\npress 1 0 0\n"), &mut pty)
        .expect_err("pty closed");
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(pty.written.len(), 6);
}

#[test]
fn reactivating_an_unsupported_mode_warns_again() {
    let mut s = session(TrackingMode::AnyEvent);
    let (stats, _) = replay(&mut s, "move 1 1\nmode vt200\n");
    assert_eq!(stats.rejected, 1);
    assert_eq!(s.reporter.warned_mode(), None);

    let (stats, _) = replay(&mut s, "mode any-event\nmove 1 1\nmove 2 2\n");
    assert_eq!(stats.rejected, 2);
    assert_eq!(s.reporter.warned_mode(), Some(TrackingMode::AnyEvent));
}

#[test]
fn repeating_the_current_mode_keeps_the_warning() {
    let mut s = session(TrackingMode::AnyEvent);
    replay(&mut s, "move 1 1\nmode any-event\n");
    assert_eq!(s.reporter.warned_mode(), Some(TrackingMode::AnyEvent));
}
