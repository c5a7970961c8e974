//! State management module
//! 
//! The countdown, the water tally and the shared application state that
//! owns them.

pub mod app_state;
pub mod constants;
pub mod countdown;
pub mod intake;
pub mod snapshot;

// Re-export main types
pub use app_state::AppState;
pub use countdown::{Countdown, TickOutcome};
pub use intake::{parse_amount, Intake};
pub use snapshot::ReminderSnapshot;
