//! Host capabilities the reminder talks to
//!
//! Everything outside the process (desktop notifications, audio output,
//! the toast list the widget renders) sits behind one of these traits so
//! the reminder cycle can be driven against fakes.

use std::{path::Path, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Notification permission as reported by the notifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    /// Not requested yet
    Default,
    Granted,
    Denied,
    /// The host has no notification capability at all
    Unsupported,
}

impl Permission {
    pub fn is_granted(self) -> bool {
        self == Permission::Granted
    }
}

/// Failure of a single port call. Never fatal.
#[derive(Debug, Error)]
pub enum PortError {
    #[error("capability not supported on this host")]
    Unsupported,
    #[error("notification permission not granted")]
    NotPermitted,
    #[error("failed to spawn {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
    #[error("no sound asset configured")]
    NoAsset,
}

#[async_trait]
pub trait NotificationPort: Send + Sync {
    /// Permission as last reported, without asking again
    fn permission(&self) -> Permission;

    /// Ask the host for permission and remember the answer
    async fn request_permission(&self) -> Permission;

    async fn notify(&self, title: &str, body: &str) -> Result<(), PortError>;
}

#[async_trait]
pub trait AudioPort: Send + Sync {
    async fn play(&self, asset: &Path) -> Result<(), PortError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// A transient message for the widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

pub trait ToastPort: Send + Sync {
    fn show(&self, kind: ToastKind, message: &str, icon: Option<&str>) -> Toast;

    /// Toasts that have not been dismissed yet, oldest first
    fn active(&self) -> Vec<Toast>;
}

/// The set of ports one application instance runs against
#[derive(Clone)]
pub struct Ports {
    pub notifier: Arc<dyn NotificationPort>,
    pub audio: Arc<dyn AudioPort>,
    pub toasts: Arc<dyn ToastPort>,
}

impl std::fmt::Debug for Ports {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ports")
            .field("permission", &self.notifier.permission())
            .finish_non_exhaustive()
    }
}
