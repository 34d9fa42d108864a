//! Real video backend: winit windowing/events, wgpu presentation
//!
//! The rest of the crate only sees this module through the `VideoPlatform`,
//! `EventSource` and `PixelSink` seams.

pub mod driver;
pub mod presenter;

use std::sync::Arc;

use winit::window::Window;

use crate::config::WindowConfig;
use crate::context::DisplayContext;
use crate::error::InitError;
use crate::traits::VideoPlatform;

pub use driver::EventDriver;
pub use presenter::Presenter;

/// The production platform: winit event loop + wgpu surface
pub struct WinitPlatform;

impl VideoPlatform for WinitPlatform {
    type Subsystem = EventDriver;
    type Window = Arc<Window>;
    type RenderTarget = Presenter;

    fn start_subsystem(&mut self) -> Result<EventDriver, InitError> {
        EventDriver::new()
    }

    fn create_window(
        &mut self,
        subsystem: &mut EventDriver,
        config: &WindowConfig,
    ) -> Result<Arc<Window>, InitError> {
        subsystem.open_window(config)
    }

    fn create_render_target(
        &mut self,
        _subsystem: &mut EventDriver,
        window: &Arc<Window>,
    ) -> Result<Presenter, InitError> {
        Presenter::new(window.clone())
    }
}

/// Shorthand for the production display context
pub type WinitContext = DisplayContext<WinitPlatform>;
