use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::config::WindowConfig;
use crate::error::InitError;
use crate::signal::{Direction, Signal};
use crate::traits::EventSource;

/// Pumps the window might need before the platform delivers `resumed`
const WINDOW_CREATE_ATTEMPTS: usize = 32;

/// Owns the winit event loop and pumps it without ever blocking
///
/// This is the subsystem handle: it exists from context init to context
/// teardown, creates the window on request, and classifies every window
/// event into a [`Signal`] queue that the frame loop drains.
pub struct EventDriver {
    event_loop: EventLoop<()>,
    handler: PumpHandler,
}

impl EventDriver {
    /// Start the windowing subsystem
    pub fn new() -> Result<Self, InitError> {
        let event_loop =
            EventLoop::new().map_err(|err| InitError::Subsystem(err.to_string()))?;
        Ok(Self {
            event_loop,
            handler: PumpHandler::default(),
        })
    }

    /// Create the application window
    ///
    /// winit only hands out windows from inside its callbacks, so this pumps
    /// the loop until the `resumed` callback has run the creation request.
    pub fn open_window(&mut self, config: &WindowConfig) -> Result<Arc<Window>, InitError> {
        self.handler.create_request = Some(config.clone());

        for _ in 0..WINDOW_CREATE_ATTEMPTS {
            self.pump();
            if let Some(detail) = self.handler.create_error.take() {
                return Err(InitError::Window(detail));
            }
            if let Some(window) = self.handler.window.take() {
                return Ok(window);
            }
        }
        Err(InitError::Window(
            "platform never delivered a resume event".to_owned(),
        ))
    }

    /// Process everything the platform has queued, returning immediately
    fn pump(&mut self) {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.handler);
        if let PumpStatus::Exit(code) = status {
            log::warn!("event loop asked to exit (code {code})");
            self.handler.signals.push_back(Signal::Quit);
        }
    }
}

impl EventSource for EventDriver {
    fn poll_signal(&mut self) -> Option<Signal> {
        if self.handler.signals.is_empty() {
            self.pump();
        }
        self.handler.signals.pop_front()
    }
}

/// winit application handler backing the pump
#[derive(Default)]
struct PumpHandler {
    /// Window the next `resumed` should create
    create_request: Option<WindowConfig>,
    /// Created window, waiting to be picked up by `open_window`
    window: Option<Arc<Window>>,
    create_error: Option<String>,
    signals: VecDeque<Signal>,
}

impl ApplicationHandler for PumpHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(config) = self.create_request.take() else {
            return;
        };
        let attributes = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(false);
        match event_loop.create_window(attributes) {
            Ok(window) => self.window = Some(Arc::new(window)),
            Err(err) => self.create_error = Some(err.to_string()),
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.signals.push_back(classify(&event));
    }
}

/// Map a raw window event onto the closed signal set
fn classify(event: &WindowEvent) -> Signal {
    match event {
        WindowEvent::CloseRequested => Signal::Quit,
        WindowEvent::KeyboardInput { event, .. } if event.state.is_pressed() => {
            Signal::KeyPress(direction_of(event.physical_key))
        }
        _ => Signal::Other,
    }
}

fn direction_of(key: PhysicalKey) -> Option<Direction> {
    match key {
        PhysicalKey::Code(KeyCode::ArrowUp) => Some(Direction::Up),
        PhysicalKey::Code(KeyCode::ArrowDown) => Some(Direction::Down),
        PhysicalKey::Code(KeyCode::ArrowLeft) => Some(Direction::Left),
        PhysicalKey::Code(KeyCode::ArrowRight) => Some(Direction::Right),
        _ => None,
    }
}
