//! Sound playback through an external player

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::ports::{AudioPort, PortError};

/// Plays an asset by running `<player> <asset>`, `paplay` by default
#[derive(Debug, Clone)]
pub struct CommandAudioPlayer {
    player: String,
}

impl CommandAudioPlayer {
    pub fn new(player: impl Into<String>) -> Self {
        Self {
            player: player.into(),
        }
    }
}

#[async_trait]
impl AudioPort for CommandAudioPlayer {
    async fn play(&self, asset: &Path) -> Result<(), PortError> {
        debug!("Playing {} with {}", asset.display(), self.player);

        let output = Command::new(&self.player)
            .arg(asset)
            .output()
            .await
            .map_err(|source| PortError::Spawn {
                command: self.player.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PortError::CommandFailed {
                command: self.player.clone(),
                stderr: stderr.into_owned(),
            });
        }

        Ok(())
    }
}
