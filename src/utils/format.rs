//! Display helpers

/// Render seconds as `MM:SS`. Minutes are not capped, so long intervals
/// show as e.g. `125:00`.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
