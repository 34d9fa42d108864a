use crate::config::WindowConfig;
use crate::error::InitError;

/// Staged access to the platform's video facilities
///
/// The context manager drives these stages in a fixed order: subsystem,
/// window, render target. Each stage may fail independently; a failed stage
/// must leave the platform usable enough that the already-built stages can
/// be dropped safely.
///
/// Stage handles release their platform resources on drop. That makes
/// teardown ordering a matter of drop ordering, which the context manager
/// controls.
pub trait VideoPlatform {
    /// Process-wide video/windowing facility handle
    type Subsystem;
    /// An open window
    type Window;
    /// Presentation target bound to one window
    type RenderTarget;

    /// Start the video subsystem
    fn start_subsystem(&mut self) -> Result<Self::Subsystem, InitError>;

    /// Create a window of the configured title and size
    fn create_window(
        &mut self,
        subsystem: &mut Self::Subsystem,
        config: &WindowConfig,
    ) -> Result<Self::Window, InitError>;

    /// Bind a render target to the window
    fn create_render_target(
        &mut self,
        subsystem: &mut Self::Subsystem,
        window: &Self::Window,
    ) -> Result<Self::RenderTarget, InitError>;
}
