//! Hydrate - A local hydration reminder server
//! 
//! This library provides a countdown that reminds the user to drink water
//! through desktop notifications, a sound and on-page toasts, and a tally
//! of the water consumed against a fixed daily goal.

pub mod config;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
