// src/forms/scheduler.rs
//
// One-shot delayed steps on a background thread, cancelled by dropping
// the handle.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;
use tracing::debug;

pub type Step = Box<dyn FnOnce() + Send + 'static>;

/// Handle to a sequence of delayed steps. Each step waits its own delay
/// after the previous one ran. Dropping the handle stops any step that
/// has not started yet.
#[derive(Debug)]
pub struct ScheduledTask {
    // Never sent on; disconnecting it is the cancel signal.
    _cancel: Sender<()>,
}

impl ScheduledTask {
    pub fn spawn(name: &str, steps: Vec<(Duration, Step)>) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel::<()>();

        thread::Builder::new()
            .name(format!("timer-{name}"))
            .spawn(move || {
                for (delay, step) in steps {
                    match rx.recv_timeout(delay) {
                        Err(RecvTimeoutError::Timeout) => step(),
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                            debug!("scheduled task cancelled");
                            return;
                        }
                    }
                }
            })?;

        Ok(Self { _cancel: tx })
    }
}
