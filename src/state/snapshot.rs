//! Serializable view of the whole reminder state

use serde::{Deserialize, Serialize};

use super::{Countdown, Intake};
use crate::services::{Permission, Toast};

/// Everything the widget needs to render, captured at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderSnapshot {
    pub interval_minutes: u64,
    pub time_left_seconds: u64,
    pub time_left_display: String,
    pub running: bool,
    pub countdown_progress_pct: f64,
    pub consumed_ml: u64,
    pub daily_goal_ml: u64,
    pub custom_amount_ml: i64,
    pub intake_progress_pct: f64,
    pub goal_reached: bool,
    pub notification_permission: Permission,
    pub toasts: Vec<Toast>,
    /// Reminders fired since the server started
    pub expiries: u64,
}

impl ReminderSnapshot {
    pub fn capture(
        countdown: &Countdown,
        intake: &Intake,
        permission: Permission,
        toasts: Vec<Toast>,
        expiries: u64,
    ) -> Self {
        Self {
            interval_minutes: countdown.interval_minutes(),
            time_left_seconds: countdown.time_left_seconds(),
            time_left_display: countdown.formatted(),
            running: countdown.is_running(),
            countdown_progress_pct: countdown.progress_pct(),
            consumed_ml: intake.consumed_ml(),
            daily_goal_ml: intake.daily_goal_ml(),
            custom_amount_ml: intake.custom_amount_ml(),
            intake_progress_pct: intake.progress_pct(),
            goal_reached: intake.goal_reached(),
            notification_permission: permission,
            toasts,
            expiries,
        }
    }
}
