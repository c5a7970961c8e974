//! Countdown driver and the reminder side effects

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::{
    services::{Permission, PortError, ToastKind},
    state::{
        constants::{
            NOTIFICATIONS_UNSUPPORTED_MSG, PERMISSION_DENIED_MSG, PERMISSION_GRANTED_MSG,
            REMINDER_BODY, REMINDER_TITLE, TICK_PERIOD, WATER_DROP_ICON,
        },
        AppState, TickOutcome,
    },
};

/// Which steps of the notify sequence went through
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotifyReport {
    pub notified: bool,
    pub sound_played: bool,
    pub toasted: bool,
}

/// Cancel the pending tick and arm a fresh one if the countdown should
/// keep advancing. Callers hold the countdown lock while calling this so
/// the decision and the arm happen against the same state.
pub fn reschedule(state: &Arc<AppState>, wants_tick: bool) {
    if wants_tick {
        let tick_state = Arc::clone(state);
        state
            .scheduler
            .arm(TICK_PERIOD, move |generation| on_tick(&tick_state, generation));
    } else {
        state.scheduler.cancel();
    }
}

fn on_tick(state: &Arc<AppState>, generation: u64) {
    match state.tick_countdown(generation) {
        Ok(TickOutcome::Counting(left)) => {
            debug!("Countdown tick: {}s left", left);
        }
        Ok(TickOutcome::Expired) => {
            info!("Reminder interval elapsed, notifying user");
            let notify_state = Arc::clone(state);
            tokio::spawn(async move {
                let report = notify_user(&notify_state).await;
                debug!("Reminder delivered: {:?}", report);
            });
        }
        Ok(TickOutcome::Idle) => {}
        Err(e) => {
            error!("Failed to advance countdown: {}", e);
            state.scheduler.cancel();
        }
    }
}

/// Run the reminder sequence: notification, sound, toast.
///
/// Each step is attempted regardless of how the previous one went.
pub async fn notify_user(state: &AppState) -> NotifyReport {
    let mut report = NotifyReport::default();

    let notifier = &state.ports.notifier;
    if notifier.permission().is_granted() {
        match notifier.notify(REMINDER_TITLE, REMINDER_BODY).await {
            Ok(()) => report.notified = true,
            Err(e) => warn!("Failed to show notification: {}", e),
        }
    } else {
        debug!("Notification permission not granted, skipping notification");
    }

    match play_sound(state).await {
        Ok(()) => report.sound_played = true,
        Err(e) => warn!("Failed to play reminder sound: {}", e),
    }

    state
        .ports
        .toasts
        .show(ToastKind::Info, REMINDER_BODY, Some(WATER_DROP_ICON));
    report.toasted = true;

    state.publish();
    report
}

/// Play the configured sound asset
pub async fn play_sound(state: &AppState) -> Result<(), PortError> {
    let asset = state.sound_asset.as_deref().ok_or(PortError::NoAsset)?;
    debug!("Trying to play {}", asset.display());
    state.ports.audio.play(asset).await?;
    debug!("Sound played");
    Ok(())
}

/// Ask for notification permission and report the outcome as a toast
pub async fn request_notification_permission(state: &AppState) -> Permission {
    let permission = state.ports.notifier.request_permission().await;

    let toasts = &state.ports.toasts;
    match permission {
        Permission::Granted => {
            toasts.show(ToastKind::Success, PERMISSION_GRANTED_MSG, None);
        }
        Permission::Unsupported => {
            toasts.show(ToastKind::Error, NOTIFICATIONS_UNSUPPORTED_MSG, None);
        }
        Permission::Denied | Permission::Default => {
            toasts.show(ToastKind::Error, PERMISSION_DENIED_MSG, None);
        }
    }

    state.publish();
    permission
}
