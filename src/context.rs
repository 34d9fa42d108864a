use crate::config::WindowConfig;
use crate::error::InitError;
use crate::traits::VideoPlatform;

/// Owner of the live display stack: subsystem, window, render target
///
/// Field declaration order is teardown order: the render target is released
/// before the window, the window before the subsystem. Dropping the context
/// (or calling [`DisplayContext::shutdown`]) therefore always unwinds in
/// reverse creation order.
pub struct DisplayContext<P: VideoPlatform> {
    render_target: P::RenderTarget,
    window: P::Window,
    subsystem: P::Subsystem,
}

impl<P: VideoPlatform> DisplayContext<P> {
    /// Bring up the display stack in strict order
    ///
    /// Subsystem first, then the window, then the render target bound to it.
    /// A failing stage short-circuits the rest; stages already constructed
    /// are released (in reverse order) as the error propagates, so callers
    /// never see a half-alive context.
    pub fn initialize(platform: &mut P, config: &WindowConfig) -> Result<Self, InitError> {
        let mut subsystem = platform.start_subsystem()?;
        let window = platform.create_window(&mut subsystem, config)?;
        let render_target = platform.create_render_target(&mut subsystem, &window)?;

        Ok(Self {
            render_target,
            window,
            subsystem,
        })
    }

    pub fn window(&self) -> &P::Window {
        &self.window
    }

    pub fn render_target(&mut self) -> &mut P::RenderTarget {
        &mut self.render_target
    }

    pub fn subsystem(&mut self) -> &mut P::Subsystem {
        &mut self.subsystem
    }

    /// Simultaneous access to the event-pumping subsystem and the render
    /// target, which the frame loop needs side by side
    pub fn parts_mut(&mut self) -> (&mut P::Subsystem, &mut P::RenderTarget) {
        (&mut self.subsystem, &mut self.render_target)
    }

    /// Tear the stack down: render target, then window, then subsystem
    ///
    /// Consuming `self` makes a second shutdown unrepresentable. Any
    /// drawable resources created against this context must already be gone
    /// by the time this runs.
    pub fn shutdown(self) {
        drop(self);
    }
}

impl<P: VideoPlatform> std::fmt::Debug for DisplayContext<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayContext").finish_non_exhaustive()
    }
}
