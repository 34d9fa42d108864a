use crate::error::DrawError;
use crate::gallery::ResourceSlot;

/// Render side of one frame-loop iteration
///
/// The loop calls `draw` with the current selection, then `present` exactly
/// once, in that order. Implementations must not present from inside `draw`;
/// a frame is only allowed on screen once all of its draw commands have been
/// issued.
pub trait RenderHost {
    /// Issue every draw command for this frame
    fn draw(&mut self, selected: ResourceSlot) -> Result<(), DrawError>;

    /// Flush the finished back buffer to the screen
    fn present(&mut self) -> Result<(), DrawError>;
}
