//! Runs the controller's deferred tasks on the tokio timer.
//!
//! Each scheduled task is a sleeper that posts `AppEvent::Timer` back into
//! the main loop. Handles are kept so a reset can abort them all.

use crate::app::event::AppEvent;
use crate::game::Deferred;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

pub struct Scheduler {
    event_tx: UnboundedSender<AppEvent>,
    handles: Vec<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new(event_tx: UnboundedSender<AppEvent>) -> Self {
        Self {
            event_tx,
            handles: Vec::new(),
        }
    }

    pub fn schedule(&mut self, delay: Duration, deferred: Deferred) {
        self.handles.retain(|h| !h.is_finished());
        let tx = self.event_tx.clone();
        self.handles.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppEvent::Timer(deferred));
        }));
    }

    pub fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    pub fn pending(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
