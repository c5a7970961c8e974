//! In-memory toast board read by the widget page

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
};

use chrono::{Duration, Utc};
use tracing::debug;

use super::ports::{Toast, ToastKind, ToastPort};
use crate::state::constants::MAX_TOASTS;

const MAX_TTL_SECS: u64 = 24 * 60 * 60;

/// Bounded list of toasts that dismiss themselves after `ttl`
#[derive(Debug)]
pub struct ToastBoard {
    ttl: Duration,
    next_id: AtomicU64,
    toasts: Mutex<VecDeque<Toast>>,
}

impl ToastBoard {
    pub fn new(ttl_seconds: u64) -> Self {
        let ttl_seconds = ttl_seconds.min(MAX_TTL_SECS) as i64;
        Self {
            ttl: Duration::seconds(ttl_seconds),
            next_id: AtomicU64::new(1),
            toasts: Mutex::new(VecDeque::new()),
        }
    }

    fn with_toasts<R>(&self, f: impl FnOnce(&mut VecDeque<Toast>) -> R) -> R {
        match self.toasts.lock() {
            Ok(mut toasts) => f(&mut *toasts),
            Err(poisoned) => f(&mut *poisoned.into_inner()),
        }
    }
}

impl ToastPort for ToastBoard {
    fn show(&self, kind: ToastKind, message: &str, icon: Option<&str>) -> Toast {
        let created_at = Utc::now();
        let toast = Toast {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            kind,
            message: message.to_string(),
            icon: icon.map(str::to_string),
            created_at,
            expires_at: created_at + self.ttl,
        };

        debug!("Toast #{}: {}", toast.id, toast.message);
        self.with_toasts(|toasts| {
            toasts.push_back(toast.clone());
            while toasts.len() > MAX_TOASTS {
                toasts.pop_front();
            }
        });
        toast
    }

    fn active(&self) -> Vec<Toast> {
        let now = Utc::now();
        self.with_toasts(|toasts| {
            toasts.retain(|toast| toast.expires_at > now);
            toasts.iter().cloned().collect()
        })
    }
}
