//! Off-thread simulation runs with latest-request-wins delivery.
//!
//! Each `submit` runs the simulation to completion on its own thread. Results
//! come back over a single channel tagged with the request generation; any
//! result older than the newest request is dropped on arrival. Nothing is
//! interrupted, a superseded run simply finishes unobserved.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::scenario::SimParams;
use super::error::SimError;
use super::runner::{simulate, SimResult};

pub type RunResult = Result<SimResult, SimError>;

pub struct SimWorker {
    tx: Sender<(u64, RunResult)>,
    rx: Receiver<(u64, RunResult)>,
    generation: u64,
    pending: bool,
}

impl SimWorker {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx, generation: 0, pending: false }
    }

    /// Start a run. Any run still in flight becomes stale.
    pub fn submit(&mut self, params: SimParams) -> u64 {
        self.submit_with(params, || {})
    }

    /// Start a run and call `on_done` from the worker thread once it finishes
    /// (e.g. to wake a UI event loop).
    pub fn submit_with<F>(&mut self, params: SimParams, on_done: F) -> u64
    where
        F: FnOnce() + Send + 'static,
    {
        self.generation += 1;
        self.pending = true;
        let id = self.generation;
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = simulate(&params);
            // Receiver gone means the owner was dropped; nothing to deliver to.
            let _ = tx.send((id, result));
            on_done();
        });
        id
    }

    /// True while the newest request has not been delivered.
    pub fn is_busy(&self) -> bool {
        self.pending
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Non-blocking: returns the newest request's result if it has arrived.
    pub fn poll(&mut self) -> Option<RunResult> {
        let mut latest = None;
        while let Ok((id, result)) = self.rx.try_recv() {
            if let Some(r) = self.accept(id, result) {
                latest = Some(r);
            }
        }
        latest
    }

    /// Block until the newest request's result arrives or `timeout` elapses.
    pub fn wait_timeout(&mut self, timeout: Duration) -> Option<RunResult> {
        if !self.pending {
            return None;
        }
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok((id, result)) => {
                    if let Some(r) = self.accept(id, result) {
                        return Some(r);
                    }
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                    return None;
                }
            }
        }
    }

    fn accept(&mut self, id: u64, result: RunResult) -> Option<RunResult> {
        if id == self.generation {
            self.pending = false;
            Some(result)
        } else {
            debug!(stale = id, current = self.generation, "discarding superseded run");
            None
        }
    }
}

impl Default for SimWorker {
    fn default() -> Self {
        Self::new()
    }
}
