use crate::models::toast::{CloseReason, DEFAULT_DURATION, Toast, ToastId, ToastStyle};
use crate::services::markup_service;
use crate::services::placement_service::{centered_origin, estimate_label_size, primary_screen};
use iced::window::{self, Level, Position};
use iced::{Task, task};
use log::{debug, info};
use std::time::Duration;

/// Something that can stop a scheduled close before it fires.
pub trait PendingClose {
    fn cancel(self);
}

impl PendingClose for task::Handle {
    fn cancel(self) {
        self.abort();
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    Opened(window::Id),
    Expired(ToastId),
}

/// A toast that has left the screen, with the window that showed it.
#[derive(Debug, Clone)]
pub struct Closed {
    pub toast: Toast,
    pub window: window::Id,
    pub reason: CloseReason,
}

struct Active<C> {
    toast: Toast,
    window: window::Id,
    pending: Option<C>,
}

/// Owns the one toast allowed on screen.
///
/// Showing a toast closes the previous one first: its pending close is
/// cancelled, its window is closed and the slot is cleared before the new
/// toast is registered. A close that arrives for a toast which is no longer
/// current is ignored.
pub struct ToastManager<C = task::Handle> {
    current: Option<Active<C>>,
    next_id: u32,
    style: ToastStyle,
    default_duration: Duration,
}

impl<C: PendingClose> ToastManager<C> {
    pub fn new(style: ToastStyle, default_duration: Duration) -> Self {
        Self {
            current: None,
            next_id: 1,
            style,
            default_duration,
        }
    }

    pub fn style(&self) -> &ToastStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: ToastStyle) {
        self.style = style;
    }

    pub fn set_default_duration(&mut self, duration: Duration) {
        self.default_duration = duration;
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref().map(|active| &active.toast)
    }

    pub fn current_window(&self) -> Option<window::Id> {
        self.current.as_ref().map(|active| active.window)
    }

    /// The toast shown in `window`, if that window is the current toast.
    pub fn toast_in(&self, window: window::Id) -> Option<&Toast> {
        self.current
            .as_ref()
            .filter(|active| active.window == window)
            .map(|active| &active.toast)
    }

    /// Builds the next toast. Zero or missing durations fall back to the
    /// configured default.
    pub fn create(&mut self, message: impl Into<String>, duration: Option<Duration>) -> Toast {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        let duration = duration
            .filter(|d| !d.is_zero())
            .unwrap_or(self.default_duration);

        Toast::new(id, message.into(), duration)
    }

    /// Makes `toast` the current one, closing whatever was shown before.
    pub fn present(&mut self, toast: Toast, window: window::Id, pending: C) -> Option<Closed> {
        let preempted = self.current.take().map(|previous| {
            Self::release(previous, CloseReason::Preempted)
        });

        debug!("Showing toast {} for {:?}", toast.id, toast.duration);
        self.current = Some(Active {
            toast,
            window,
            pending: Some(pending),
        });

        preempted
    }

    /// Closes the toast whose display time ran out, if it is still current.
    pub fn expire(&mut self, id: ToastId) -> Option<Closed> {
        if !self.current.as_ref().is_some_and(|active| active.toast.id == id) {
            debug!("Ignoring expiry of superseded toast {}", id);
            return None;
        }

        self.current.take().map(|mut active| {
            // the close task is the one firing, nothing left to cancel
            active.pending = None;
            Self::release(active, CloseReason::Expired)
        })
    }

    /// Forgets the current toast when its window was closed from outside.
    pub fn window_closed(&mut self, window: window::Id) -> Option<Closed> {
        if self.current_window() != Some(window) {
            return None;
        }

        self.current
            .take()
            .map(|active| Self::release(active, CloseReason::Dismissed))
    }

    fn release(mut active: Active<C>, reason: CloseReason) -> Closed {
        if let Some(pending) = active.pending.take() {
            pending.cancel();
        }

        debug!("Toast {} closed ({:?})", active.toast.id, reason);
        Closed {
            toast: active.toast,
            window: active.window,
            reason,
        }
    }

    fn window_settings(&self, message: &str) -> window::Settings {
        let size = estimate_label_size(&markup_service::parse(message), &self.style);

        // resolved by the runtime against the primary monitor's resolution
        let settings = window::Settings {
            size,
            position: Position::SpecificWith(|size, resolution| {
                centered_origin(primary_screen(resolution), size)
            }),
            resizable: false,
            decorations: false,
            transparent: true,
            level: Level::AlwaysOnTop,
            ..window::Settings::default()
        };

        #[cfg(target_os = "windows")]
        let settings = {
            let mut settings = settings;
            settings.platform_specific.skip_taskbar = true;
            settings
        };

        settings
    }
}

impl ToastManager<task::Handle> {
    /// Opens an overlay window for `message` and schedules its close.
    pub fn show(&mut self, message: impl Into<String>, duration: Option<Duration>) -> Task<Event> {
        let toast = self.create(message, duration);
        let (id, delay) = (toast.id, toast.duration);

        let (window, open) = window::open(self.window_settings(&toast.message));
        let (expire, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |_| Event::Expired(id),
        )
        .abortable();

        let open = open.map(Event::Opened);
        let task = match self.present(toast, window, handle) {
            Some(previous) => window::close(previous.window).chain(open),
            None => open,
        };

        Task::batch([task, expire])
    }

    pub fn handle(&mut self, event: Event) -> Task<Event> {
        match event {
            Event::Opened(window) => {
                debug!("Toast window {:?} opened", window);
                Task::none()
            }
            Event::Expired(id) => match self.expire(id) {
                Some(closed) => {
                    info!(
                        "Toast {} expired after {:?}",
                        closed.toast.id,
                        closed.toast.created.elapsed()
                    );
                    window::close(closed.window)
                }
                None => Task::none(),
            },
        }
    }
}

impl<C: PendingClose> Default for ToastManager<C> {
    fn default() -> Self {
        Self::new(ToastStyle::default(), DEFAULT_DURATION)
    }
}
