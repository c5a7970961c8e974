//! Desktop notifications through a notifier command

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info, warn};

use super::ports::{NotificationPort, Permission, PortError};
use crate::state::constants::NOTIFICATION_ICON;

/// Arguments for one `notify-send` call
fn notify_args(title: &str, body: &str) -> Vec<String> {
    vec![
        "--app-name=hydrate".to_string(),
        format!("--icon={}", NOTIFICATION_ICON),
        title.to_string(),
        body.to_string(),
    ]
}

/// Sends notifications by running `notify-send` (or a compatible command)
#[derive(Debug)]
pub struct DesktopNotifier {
    command: String,
    enabled: bool,
    permission: Mutex<Permission>,
}

impl DesktopNotifier {
    /// `enabled = false` makes every permission request come back denied
    pub fn new(command: impl Into<String>, enabled: bool) -> Self {
        Self {
            command: command.into(),
            enabled,
            permission: Mutex::new(Permission::Default),
        }
    }

    /// Check whether the notifier command can be run at all
    pub async fn check_available(&self) -> Result<(), PortError> {
        let output = Command::new(&self.command)
            .arg("--version")
            .output()
            .await
            .map_err(|source| PortError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(PortError::Unsupported);
        }

        debug!("{} is available", self.command);
        Ok(())
    }

    fn store(&self, permission: Permission) {
        match self.permission.lock() {
            Ok(mut current) => *current = permission,
            Err(poisoned) => *poisoned.into_inner() = permission,
        }
    }
}

#[async_trait]
impl NotificationPort for DesktopNotifier {
    fn permission(&self) -> Permission {
        match self.permission.lock() {
            Ok(current) => *current,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    async fn request_permission(&self) -> Permission {
        let permission = if !self.enabled {
            Permission::Denied
        } else {
            match self.check_available().await {
                Ok(()) => Permission::Granted,
                Err(e) => {
                    warn!("Notifications unavailable: {}", e);
                    Permission::Unsupported
                }
            }
        };

        self.store(permission);
        info!("Notification permission: {:?}", permission);
        permission
    }

    async fn notify(&self, title: &str, body: &str) -> Result<(), PortError> {
        if !self.permission().is_granted() {
            return Err(PortError::NotPermitted);
        }

        debug!("Sending desktop notification: {}", title);
        let output = Command::new(&self.command)
            .args(notify_args(title, body))
            .output()
            .await
            .map_err(|source| PortError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PortError::CommandFailed {
                command: self.command.clone(),
                stderr: stderr.into_owned(),
            });
        }

        Ok(())
    }
}
