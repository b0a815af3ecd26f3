use iced::Color;
use std::fmt;
use std::time::{Duration, Instant};

pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u32);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Why a toast left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Its display duration elapsed.
    Expired,
    /// A newer toast took its place.
    Preempted,
    /// Its window was closed from outside, e.g. by the window manager.
    Dismissed,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub created: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(id: ToastId, message: String, duration: Duration) -> Toast {
        Toast {
            id,
            message,
            created: Instant::now(),
            duration,
        }
    }
}

/// Look of the overlay label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastStyle {
    pub font_size: f32,
    pub padding: f32,
    pub radius: f32,
    pub background: Color,
    pub text: Color,
}

impl Default for ToastStyle {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            padding: 10.0,
            radius: 5.0,
            background: Color::from_rgba8(0, 0, 0, 160.0 / 255.0),
            text: Color::WHITE,
        }
    }
}
