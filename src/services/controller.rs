//! Controller service: a Tokio task that owns the canvas controller.
//!
//! DESIGN
//! ======
//! All access to the controller is serialised through one task. Input
//! events and snapshot requests arrive on a bounded `mpsc` channel; motion
//! ticks come from a `tokio::time::interval` that is only polled while the
//! controller reports it is ticking. When ticking resumes the interval is
//! reset, so the first tick lands one full period after the drag ends.
//! Missed ticks are skipped rather than replayed in a burst.
//!
//! LIFECYCLE
//! =========
//! The task ends once every [`ControllerHandle`] has been dropped and the
//! queue is drained. It hands the controller back through its `JoinHandle`.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::time::Duration;

use canvas::controller::{Action, CanvasController, ViewSnapshot};
use canvas::input::ControllerEvent;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, trace};

use crate::error::HostError;

/// Messages accepted by the controller task.
#[derive(Debug)]
pub enum Command {
    Event(ControllerEvent),
    Snapshot(oneshot::Sender<ViewSnapshot>),
}

/// Cloneable sender side of the controller task.
#[derive(Clone)]
pub struct ControllerHandle {
    tx: mpsc::Sender<Command>,
}

impl ControllerHandle {
    /// Queue an input event, waiting for room if the queue is full.
    ///
    /// # Errors
    ///
    /// Returns `ChannelClosed` if the controller task has exited.
    pub async fn send(&self, event: ControllerEvent) -> Result<(), HostError> {
        self.tx.send(Command::Event(event)).await.map_err(|_| HostError::ChannelClosed)
    }

    /// Ask the task for the current controller state. The snapshot reflects
    /// every event queued through this handle before the call.
    ///
    /// # Errors
    ///
    /// Returns `ChannelClosed` if the controller task has exited.
    pub async fn snapshot(&self) -> Result<ViewSnapshot, HostError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx.send(Command::Snapshot(reply_tx)).await.map_err(|_| HostError::ChannelClosed)?;
        reply_rx.await.map_err(|_| HostError::ChannelClosed)
    }
}

/// Spawn the controller task. Returns the handle for feeding it and the
/// join handle that yields the controller after shutdown.
#[must_use]
pub fn spawn_controller_task(
    controller: CanvasController,
    capacity: usize,
) -> (ControllerHandle, JoinHandle<CanvasController>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    let task = tokio::spawn(run(controller, rx));
    (ControllerHandle { tx }, task)
}

async fn run(mut controller: CanvasController, mut rx: mpsc::Receiver<Command>) -> CanvasController {
    // tokio intervals reject a zero period.
    let period = controller.tick_interval().max(Duration::from_millis(1));
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    info!(?period, "controller task started");

    loop {
        tokio::select! {
            cmd = rx.recv() => {
                let Some(cmd) = cmd else {
                    break;
                };
                match cmd {
                    Command::Event(event) => {
                        let name = event.name();
                        let actions = controller.handle(event);
                        trace!(event = name, actions = actions.len(), "event handled");
                        if actions.contains(&Action::TimerStarted) {
                            ticker.reset();
                        }
                        log_actions(&actions);
                    }
                    Command::Snapshot(reply) => {
                        if reply.send(controller.snapshot()).is_err() {
                            debug!("snapshot requester went away");
                        }
                    }
                }
            }
            _ = ticker.tick(), if controller.is_ticking() => {
                let actions = controller.tick();
                log_actions(&actions);
            }
        }
    }

    info!("controller task stopped");
    controller
}

fn log_actions(actions: &[Action]) {
    for action in actions {
        match action {
            Action::OffsetChanged(offset) => trace!(x = offset.x, y = offset.y, "offset changed"),
            Action::ZoomChanged(zoom) => debug!(zoom, "zoom committed"),
            Action::TimerStarted => debug!("motion timer started"),
            Action::TimerStopped => debug!("motion timer stopped"),
        }
    }
}
