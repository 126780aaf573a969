//! Binary entry point for the xmouse PTY relay.
//!
//! Runs a program in a pseudo-terminal, relays its output to stdout, and
//! turns pointer event script lines read from stdin into xterm mouse
//! reports written to the program's input.

mod config;
mod logging;
mod replay;
mod script;

use std::error::Error;
use std::io::{self, Read, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use portable_pty::{CommandBuilder, PtySize, native_pty_system};

use config::Config;
use replay::Session;

/// How long to wait for the replay summary after the child exits.
const REPLAY_GRACE: Duration = Duration::from_millis(250);

fn main() {
    logging::init();
    if let Err(e) = run() {
        log::error!("xmouse: {e}");
        eprintln!("xmouse: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = Config::load();
    let pty_system = native_pty_system();

    let pair = pty_system.openpty(PtySize {
        rows: config.pty.rows,
        cols: config.pty.cols,
        pixel_width: 0,
        pixel_height: 0,
    })?;

    let cmd = match &config.pty.program {
        Some(program) => {
            let mut cmd = CommandBuilder::new(program);
            cmd.args(&config.pty.args);
            cmd
        }
        None => CommandBuilder::new_default_prog(),
    };
    let mut child = pair.slave.spawn_command(cmd)?;

    // Drop the slave side so the reader detects EOF when the child exits.
    drop(pair.slave);

    let mut reader = pair.master.try_clone_reader()?;
    let mut writer = pair.master.take_writer()?;

    // Relay PTY output to stdout.
    let _output = thread::spawn(move || {
        let mut stdout = io::stdout();
        let mut buf = [0u8; 4096];
        loop {
            match reader.read(&mut buf) {
                Ok(0) | Err(_) => return,
                Ok(n) => {
                    if stdout.write_all(&buf[..n]).is_err() || stdout.flush().is_err() {
                        return;
                    }
                }
            }
        }
    });

    // Replay pointer events from stdin into the PTY.
    let mut session = Session::new(config.mouse.tracking_mode(), config.mouse.cell_metrics());
    let (done_tx, done_rx) = mpsc::channel();
    let _input = thread::spawn(move || {
        log::info!("mouse: replaying events in {} mode", session.mode());
        let _ = done_tx.send(session.replay(io::stdin().lock(), &mut writer));
    });

    // Block until the child process exits.
    let status = child.wait()?;
    log::info!("xmouse: child exited with {status:?}");

    // The replay thread may still be blocked on stdin; give a finished
    // script a moment to report rather than joining.
    match done_rx.recv_timeout(REPLAY_GRACE) {
        Ok(Ok(stats)) => log::info!(
            "mouse: replay finished, {} sent, {} ignored, {} rejected",
            stats.sent,
            stats.ignored,
            stats.rejected
        ),
        Ok(Err(e)) => log::warn!("mouse: replay stopped: {e}"),
        Err(_) => log::info!("mouse: replay still waiting on input at exit"),
    }
    Ok(())
}
