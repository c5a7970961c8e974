#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use hydrate::{
    services::{AudioPort, NotificationPort, Permission, PortError, Ports, ToastBoard},
    AppState,
};

/// Notifier that records what it was asked to show
pub struct FakeNotifier {
    answer: Permission,
    permission: Mutex<Permission>,
    pub sent: Mutex<Vec<(String, String)>>,
}

impl FakeNotifier {
    /// `answer` is what a permission request resolves to
    pub fn new(answer: Permission) -> Self {
        Self {
            answer,
            permission: Mutex::new(Permission::Default),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn granted() -> Self {
        let notifier = Self::new(Permission::Granted);
        *notifier.permission.lock().unwrap() = Permission::Granted;
        notifier
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl NotificationPort for FakeNotifier {
    fn permission(&self) -> Permission {
        *self.permission.lock().unwrap()
    }

    async fn request_permission(&self) -> Permission {
        *self.permission.lock().unwrap() = self.answer;
        self.answer
    }

    async fn notify(&self, title: &str, body: &str) -> Result<(), PortError> {
        self.sent
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string()));
        Ok(())
    }
}

/// Audio port that counts attempts and optionally fails every one
pub struct FakeAudio {
    fail: bool,
    pub attempts: AtomicUsize,
    pub played: Mutex<Vec<PathBuf>>,
}

impl FakeAudio {
    pub fn working() -> Self {
        Self {
            fail: false,
            attempts: AtomicUsize::new(0),
            played: Mutex::new(Vec::new()),
        }
    }

    pub fn broken() -> Self {
        Self {
            fail: true,
            ..Self::working()
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AudioPort for FakeAudio {
    async fn play(&self, asset: &Path) -> Result<(), PortError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(PortError::CommandFailed {
                command: "fake-player".to_string(),
                stderr: "autoplay blocked".to_string(),
            });
        }
        self.played.lock().unwrap().push(asset.to_path_buf());
        Ok(())
    }
}

pub struct Harness {
    pub state: Arc<AppState>,
    pub notifier: Arc<FakeNotifier>,
    pub audio: Arc<FakeAudio>,
}

pub fn harness_with(interval_minutes: i64, notifier: FakeNotifier, audio: FakeAudio) -> Harness {
    let notifier = Arc::new(notifier);
    let audio = Arc::new(audio);
    let ports = Ports {
        notifier: notifier.clone(),
        audio: audio.clone(),
        toasts: Arc::new(ToastBoard::new(600)),
    };

    let state = AppState::new(20554, "127.0.0.1".to_string(), interval_minutes, ports)
        .with_sound_asset(Some(PathBuf::from("bell-notification.mp3")));

    Harness {
        state: Arc::new(state),
        notifier,
        audio,
    }
}

pub fn harness(interval_minutes: i64) -> Harness {
    harness_with(interval_minutes, FakeNotifier::granted(), FakeAudio::working())
}
