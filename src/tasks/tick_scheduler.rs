//! Single-slot scheduler for the countdown tick

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
    time::Duration,
};

use tokio::{task::JoinHandle, time::sleep};
use tracing::debug;

/// Holds at most one pending tick.
///
/// Arming always aborts whatever tick was pending before, so two ticks can
/// never be outstanding at the same time. Every arm and cancel bumps the
/// generation; a callback receives the generation it was armed with and
/// can tell through [`TickScheduler::is_current`] whether it was superseded
/// while it was already running.
#[derive(Debug, Default)]
pub struct TickScheduler {
    pending: Mutex<Option<JoinHandle<()>>>,
    generation: AtomicU64,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` after `delay`, replacing any pending tick. Returns
    /// the generation handed to `callback`.
    pub fn arm<F>(&self, delay: Duration, callback: F) -> u64
    where
        F: FnOnce(u64) + Send + 'static,
    {
        self.with_slot(|slot| {
            if let Some(previous) = slot.take() {
                previous.abort();
            }
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *slot = Some(tokio::spawn(async move {
                sleep(delay).await;
                callback(generation);
            }));
            generation
        })
    }

    /// Abort the pending tick, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        self.with_slot(|slot| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            Self::abort_slot(slot)
        })
    }

    /// Generation of the latest arm or cancel
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Whether a callback armed with `generation` is still the live one
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation() == generation
    }

    /// Whether a tick is waiting to fire
    pub fn is_armed(&self) -> bool {
        self.with_slot(|slot| slot.as_ref().is_some_and(|handle| !handle.is_finished()))
    }

    fn abort_slot(slot: &mut Option<JoinHandle<()>>) -> bool {
        match slot.take() {
            Some(previous) => {
                let was_pending = !previous.is_finished();
                previous.abort();
                if was_pending {
                    debug!("Cancelled pending tick");
                }
                was_pending
            }
            None => false,
        }
    }

    fn with_slot<R>(&self, f: impl FnOnce(&mut Option<JoinHandle<()>>) -> R) -> R {
        match self.pending.lock() {
            Ok(mut slot) => f(&mut *slot),
            Err(poisoned) => f(&mut *poisoned.into_inner()),
        }
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
