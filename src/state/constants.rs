//! Fixed values for the reminder cycle and the water tally

use std::time::Duration;

/// Daily intake target in milliliters, fixed for the session
pub const DAILY_GOAL_ML: u64 = 2000;

/// Reminder interval a fresh session starts with
pub const DEFAULT_INTERVAL_MINUTES: u64 = 60;

/// Smallest interval the countdown accepts
pub const MIN_INTERVAL_MINUTES: u64 = 1;

/// Largest interval whose length in seconds still fits a `u64`
pub const MAX_INTERVAL_MINUTES: u64 = u64::MAX / 60;

/// Step applied by the increase/decrease interval actions
pub const INTERVAL_STEP_MINUTES: u64 = 5;

/// Amount added by the add-water action until the user edits it
pub const DEFAULT_CUSTOM_AMOUNT_ML: i64 = 250;

/// Delay between two countdown ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub const REMINDER_TITLE: &str = "Lembrete de Água";
pub const REMINDER_BODY: &str = "Está na hora de beber água!";
pub const WATER_DROP_ICON: &str = "💧";

pub const PERMISSION_GRANTED_MSG: &str = "Notificações ativadas!";
pub const PERMISSION_DENIED_MSG: &str = "Permissão de notificação negada";
pub const NOTIFICATIONS_UNSUPPORTED_MSG: &str = "Seu navegador não suporta notificações";

/// Icon name passed to the desktop notifier
pub const NOTIFICATION_ICON: &str = "dialog-information";

/// Oldest toasts are dropped once the board holds this many
pub const MAX_TOASTS: usize = 20;

pub const DEFAULT_TOAST_TTL_SECS: u64 = 4;
