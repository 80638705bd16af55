use crate::error::LaunchError;
use log::debug;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId, WindowLevel};

const WINDOW_TITLE: &str = "floating-timer";
const WINDOW_X: f64 = 100.0;
const WINDOW_Y: f64 = 100.0;
const WINDOW_WIDTH: f64 = 600.0;
const WINDOW_HEIGHT: f64 = 200.0;

/// Off-screen buffer the toolkit composites from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackingStore {
    Buffered,
}

/// Everything needed to put the window on screen
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub title: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub borderless: bool,
    /// Kept above normal-level windows
    pub floating: bool,
    pub backing: BackingStore,
    /// The native window is only created once the event loop is live
    pub deferred: bool,
}

impl WindowSpec {
    /// The fixed window the launcher shows
    pub fn timer() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            x: WINDOW_X,
            y: WINDOW_Y,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            borderless: true,
            floating: true,
            backing: BackingStore::Buffered,
            deferred: true,
        }
    }

    pub fn level(&self) -> WindowLevel {
        if self.floating {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        }
    }

    pub fn attributes(&self) -> WindowAttributes {
        Window::default_attributes()
            .with_title(self.title.as_str())
            .with_position(LogicalPosition::new(self.x, self.y))
            .with_inner_size(LogicalSize::new(self.width, self.height))
            .with_decorations(!self.borderless)
            .with_window_level(self.level())
            .with_resizable(false)
            .with_visible(true)
    }
}

/// Something that can put a window on screen
pub trait WindowHost {
    fn show(&mut self, spec: &WindowSpec) -> Result<(), LaunchError>;
}

/// Shows windows through winit.
///
/// Windows it creates are held until the host is dropped, so they are never
/// closed by `show` itself.
#[derive(Default)]
pub struct WinitHost {
    windows: Vec<Window>,
}

impl WindowHost for WinitHost {
    fn show(&mut self, spec: &WindowSpec) -> Result<(), LaunchError> {
        debug!(
            "Showing window {:?} (backing {:?}, deferred {})",
            spec.title, spec.backing, spec.deferred
        );
        let event_loop: EventLoop<()> = EventLoop::new()?;
        let mut shower: Shower = Shower {
            attributes: Some(spec.attributes()),
            window: None,
            error: None,
        };
        event_loop.run_app(&mut shower)?;

        if let Some(err) = shower.error {
            return Err(LaunchError::CreateWindow(err));
        }
        if let Some(window) = shower.window {
            self.windows.push(window);
        }
        Ok(())
    }
}

/// Creates one window as soon as the application resumes, then stops the loop
struct Shower {
    attributes: Option<WindowAttributes>,
    window: Option<Window>,
    error: Option<winit::error::OsError>,
}

impl ApplicationHandler for Shower {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attributes) = self.attributes.take() else {
            return;
        };
        match event_loop.create_window(attributes) {
            Ok(window) => {
                if let Ok(position) = window.outer_position() {
                    debug!("Window placed at ({}, {})", position.x, position.y);
                }
                let size = window.inner_size();
                debug!("Window sized {}x{}", size.width, size.height);
                self.window = Some(window);
            }
            Err(err) => self.error = Some(err),
        }
        event_loop.exit();
    }

    fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, _: WindowEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{Position, Size};

    #[test]
    fn test_timer_spec_geometry() {
        let spec: WindowSpec = WindowSpec::timer();
        assert_eq!((spec.x, spec.y), (100.0, 100.0));
        assert_eq!((spec.width, spec.height), (600.0, 200.0));
    }

    #[test]
    fn test_timer_spec_style() {
        let spec: WindowSpec = WindowSpec::timer();
        assert!(spec.borderless);
        assert!(spec.floating);
        assert_eq!(spec.backing, BackingStore::Buffered);
        assert!(spec.deferred);
    }

    #[test]
    fn test_attributes_carry_geometry() {
        let attributes: WindowAttributes = WindowSpec::timer().attributes();
        assert_eq!(
            attributes.position,
            Some(Position::Logical(LogicalPosition::new(100.0, 100.0)))
        );
        assert_eq!(
            attributes.inner_size,
            Some(Size::Logical(LogicalSize::new(600.0, 200.0)))
        );
    }

    #[test]
    fn test_attributes_borderless_and_floating() {
        let attributes: WindowAttributes = WindowSpec::timer().attributes();
        assert!(!attributes.decorations);
        assert!(attributes.visible);
        assert!(!attributes.resizable);
        assert_eq!(attributes.window_level, WindowLevel::AlwaysOnTop);
        assert_eq!(attributes.title, "floating-timer");
    }

    #[test]
    fn test_plain_window_keeps_decorations() {
        let spec: WindowSpec = WindowSpec {
            borderless: false,
            floating: false,
            ..WindowSpec::timer()
        };
        let attributes: WindowAttributes = spec.attributes();
        assert!(attributes.decorations);
        assert_eq!(attributes.window_level, WindowLevel::Normal);
    }
}
