//! Benchmarks for the mouse report hot path.
//!
//! Drag-heavy applications (editors, `tmux` pane resizing) see a report
//! per press and release, and wheel scrolling produces bursts of presses.
//! Grid sizes match the ones terminals actually run at:
//!
//! - **80x24**: Classic terminal.
//! - **220x60**: Near the single-byte coordinate limit.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use xmouse_core::{
    CellMetrics, Modifiers, MouseButton, MouseReporter, PointerEvent, TrackingMode, encode,
};

/// Grid sizes that represent real usage.
const SIZES: [(usize, usize); 2] = [
    (80, 24),  // Classic VT100.
    (220, 60), // Wide terminal.
];

const CELL_WIDTH: f64 = 9.0;
const CELL_HEIGHT: f64 = 18.0;

/// One press/release pair per cell, alternating buttons and modifiers.
fn click_sweep(cols: usize, lines: usize) -> Vec<PointerEvent> {
    let mut events = Vec::with_capacity(cols * lines * 2);
    for line in 0..lines {
        for col in 0..cols {
            let x = col as f64 * CELL_WIDTH + 1.0;
            let y = line as f64 * CELL_HEIGHT + 1.0;
            let button = match (col + line) % 3 {
                0 => MouseButton::Button1,
                1 => MouseButton::Button2,
                _ => MouseButton::Button3,
            };
            let mods = if col % 4 == 0 {
                Modifiers::SHIFT
            } else {
                Modifiers::empty()
            };
            events.push(PointerEvent::press(button, x, y).with_modifiers(mods));
            events.push(PointerEvent::release(button, x, y).with_modifiers(mods));
        }
    }
    events
}

fn bench_encode(c: &mut Criterion) {
    let metrics = CellMetrics::new(CELL_WIDTH, CELL_HEIGHT).expect("valid metrics");
    let mut group = c.benchmark_group("encode");

    for (cols, lines) in SIZES {
        let events = click_sweep(cols, lines);
        for mode in [TrackingMode::X10, TrackingMode::Vt200] {
            group.bench_with_input(
                BenchmarkId::new(mode.name(), format!("{cols}x{lines}")),
                &events,
                |b, events| {
                    b.iter(|| {
                        for event in events {
                            let _ = black_box(encode(mode, black_box(event), metrics));
                        }
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let metrics = CellMetrics::new(CELL_WIDTH, CELL_HEIGHT).expect("valid metrics");
    let events = click_sweep(80, 24);

    c.bench_function("report/vt200_80x24", |b| {
        let mut reporter = MouseReporter::new();
        let mut sink = Vec::with_capacity(events.len() * 6);
        b.iter(|| {
            sink.clear();
            for event in &events {
                let _ = reporter.report(&TrackingMode::Vt200, &metrics, event, &mut sink);
            }
            black_box(sink.len());
        });
    });
}

criterion_group!(benches, bench_encode, bench_report);
criterion_main!(benches);
