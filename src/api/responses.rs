//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{services::Toast, state::ReminderSnapshot};

/// API response structure for state change endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub reminder: ReminderSnapshot,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: impl Into<String>, message: impl Into<String>, reminder: ReminderSnapshot) -> Self {
        Self {
            status: status.into(),
            message: message.into(),
            timestamp: Utc::now(),
            reminder,
        }
    }

    /// Create a successful response
    pub fn ok(message: impl Into<String>, reminder: ReminderSnapshot) -> Self {
        Self::new("ok", message, reminder)
    }
}

/// Status response with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub reminder: ReminderSnapshot,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastsResponse {
    pub toasts: Vec<Toast>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
