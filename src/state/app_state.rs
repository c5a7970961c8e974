//! Main application state management

use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info};

use super::{Countdown, Intake, ReminderSnapshot, TickOutcome};
use crate::{services::Ports, tasks::{reschedule, TickScheduler}};

/// Main application state: the countdown, the water tally and the ports
/// the reminder fires through
#[derive(Debug)]
pub struct AppState {
    /// Reminder countdown (interval, time left, running flag)
    pub countdown: Mutex<Countdown>,
    /// Water consumed against the daily goal
    pub intake: Mutex<Intake>,
    /// Host capabilities
    pub ports: Ports,
    /// Sound played on every reminder and by the sound test
    pub sound_asset: Option<PathBuf>,
    /// Pending countdown tick
    pub scheduler: TickScheduler,
    pub expiries: AtomicU64,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Latest snapshot, pushed on every change
    pub snapshot_tx: watch::Sender<ReminderSnapshot>,
}

impl AppState {
    /// Create a new AppState with a paused countdown and an empty tally
    pub fn new(port: u16, host: String, interval_minutes: i64, ports: Ports) -> Self {
        let mut countdown = Countdown::default();
        countdown.set_interval(interval_minutes);
        let intake = Intake::new();

        let initial = ReminderSnapshot::capture(
            &countdown,
            &intake,
            ports.notifier.permission(),
            ports.toasts.active(),
            0,
        );
        let (snapshot_tx, _) = watch::channel(initial);

        Self {
            countdown: Mutex::new(countdown),
            intake: Mutex::new(intake),
            ports,
            sound_asset: None,
            scheduler: TickScheduler::new(),
            expiries: AtomicU64::new(0),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            snapshot_tx,
        }
    }

    pub fn with_sound_asset(mut self, sound_asset: Option<PathBuf>) -> Self {
        self.sound_asset = sound_asset;
        self
    }

    /// Apply a user action to the countdown, publish the result and make
    /// sure exactly one tick is pending if the countdown should advance
    pub fn update_countdown<F, R>(self: &Arc<Self>, action: &str, updater: F) -> Result<R, String>
    where
        F: FnOnce(&mut Countdown) -> R,
    {
        let mut countdown = self.countdown.lock()
            .map_err(|e| format!("Failed to lock countdown: {}", e))?;

        let result = updater(&mut *countdown);
        reschedule(self, countdown.wants_tick());
        drop(countdown);

        self.record_action(action);
        self.publish();

        Ok(result)
    }

    /// Apply a user action to the water tally and publish the result
    pub fn update_intake<F, R>(&self, action: &str, updater: F) -> Result<R, String>
    where
        F: FnOnce(&mut Intake) -> R,
    {
        let mut intake = self.intake.lock()
            .map_err(|e| format!("Failed to lock intake: {}", e))?;

        let result = updater(&mut *intake);
        drop(intake);

        self.record_action(action);
        self.publish();

        Ok(result)
    }

    /// Set the reminder interval in minutes
    pub fn set_interval(self: &Arc<Self>, minutes: i64) -> Result<u64, String> {
        let minutes = self.update_countdown("set-interval", |c| c.set_interval(minutes))?;
        info!("Interval set to {}min", minutes);
        Ok(minutes)
    }

    pub fn increase_interval(self: &Arc<Self>) -> Result<u64, String> {
        let minutes = self.update_countdown("interval-increase", |c| c.increase_interval())?;
        info!("Interval increased to {}min", minutes);
        Ok(minutes)
    }

    pub fn decrease_interval(self: &Arc<Self>) -> Result<u64, String> {
        let minutes = self.update_countdown("interval-decrease", |c| c.decrease_interval())?;
        info!("Interval decreased to {}min", minutes);
        Ok(minutes)
    }

    /// Flip the running flag, returning the new value
    pub fn toggle_running(self: &Arc<Self>) -> Result<bool, String> {
        let running = self.update_countdown("toggle", |c| c.toggle_running())?;
        info!("Countdown {}", if running { "running" } else { "paused" });
        Ok(running)
    }

    pub fn reset_countdown(self: &Arc<Self>) -> Result<(), String> {
        self.update_countdown("reset", |c| c.reset())?;
        info!("Countdown reset");
        Ok(())
    }

    /// Add water, using the custom amount when no amount is given
    pub fn add_water(&self, amount_ml: Option<i64>) -> Result<u64, String> {
        let consumed = self.update_intake("add-water", |intake| match amount_ml {
            Some(amount) => intake.add_water(amount),
            None => intake.add_custom(),
        })?;
        info!("Water consumed: {}ml", consumed);
        Ok(consumed)
    }

    pub fn set_custom_amount(&self, amount_ml: i64) -> Result<(), String> {
        self.update_intake("custom-amount", |intake| intake.set_custom_amount(amount_ml))?;
        info!("Custom amount set to {}ml", amount_ml);
        Ok(())
    }

    /// Advance the countdown by one second and arm the next tick (scheduler
    /// use only). A tick whose `generation` was superseded by a later arm or
    /// cancel is dropped as [`TickOutcome::Idle`].
    pub fn tick_countdown(self: &Arc<Self>, generation: u64) -> Result<TickOutcome, String> {
        let mut countdown = self.countdown.lock()
            .map_err(|e| format!("Failed to lock countdown: {}", e))?;

        if !self.scheduler.is_current(generation) {
            debug!("Dropping superseded tick {}", generation);
            return Ok(TickOutcome::Idle);
        }

        let outcome = countdown.tick();
        reschedule(self, countdown.wants_tick());
        drop(countdown);

        if outcome == TickOutcome::Expired {
            self.expiries.fetch_add(1, Ordering::SeqCst);
        }
        if outcome != TickOutcome::Idle {
            self.publish();
        }

        Ok(outcome)
    }

    /// Get current countdown state
    pub fn get_countdown(&self) -> Result<Countdown, String> {
        self.countdown.lock()
            .map(|countdown| countdown.clone())
            .map_err(|e| format!("Failed to lock countdown: {}", e))
    }

    /// Get current intake state
    pub fn get_intake(&self) -> Result<Intake, String> {
        self.intake.lock()
            .map(|intake| intake.clone())
            .map_err(|e| format!("Failed to lock intake: {}", e))
    }

    pub fn expiry_count(&self) -> u64 {
        self.expiries.load(Ordering::SeqCst)
    }

    /// Capture the current state of everything the widget shows
    pub fn snapshot(&self) -> Result<ReminderSnapshot, String> {
        let countdown = self.get_countdown()?;
        let intake = self.get_intake()?;

        Ok(ReminderSnapshot::capture(
            &countdown,
            &intake,
            self.ports.notifier.permission(),
            self.ports.toasts.active(),
            self.expiry_count(),
        ))
    }

    /// Push the current snapshot to watchers
    pub fn publish(&self) {
        match self.snapshot() {
            Ok(snapshot) => {
                self.snapshot_tx.send_replace(snapshot);
            }
            Err(e) => debug!("Skipping snapshot publish: {}", e),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ReminderSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    /// Stop the countdown from ticking any further
    pub fn shutdown(&self) {
        if self.scheduler.cancel() {
            info!("Pending countdown tick cancelled");
        }
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }
}
