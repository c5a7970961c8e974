//! Host-side services module
//! 
//! The reminder reaches the outside world only through the ports defined
//! here: desktop notifications, audio playback and the toast board.

pub mod audio;
pub mod notifier;
pub mod ports;
pub mod toasts;

// Re-export main types
pub use audio::CommandAudioPlayer;
pub use notifier::DesktopNotifier;
pub use ports::{
    AudioPort, NotificationPort, Permission, PortError, Ports, Toast, ToastKind, ToastPort,
};
pub use toasts::ToastBoard;
