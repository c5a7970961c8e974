//! Utility functions module
//! 
//! Signal handling and display helpers shared across the application.

pub mod format;
pub mod signals;

// Re-export main functions
pub use format::format_time;
pub use signals::shutdown_signal;
