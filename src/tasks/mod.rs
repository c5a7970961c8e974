//! Background tasks module
//! 
//! The countdown tick that runs alongside the HTTP server and the reminder
//! side effects it triggers.

pub mod reminder;
pub mod tick_scheduler;

// Re-export main functions
pub use reminder::{
    notify_user, play_sound, request_notification_permission, reschedule, NotifyReport,
};
pub use tick_scheduler::TickScheduler;
