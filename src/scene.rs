use serde::{Deserialize, Serialize};

use crate::error::DrawError;
use crate::framebuffer::Framebuffer;
use crate::gallery::{Gallery, ResourceSlot};
use crate::traits::{PixelSink, RenderHost};
use crate::types::{Color, PixelImage, Rect};

/// Which demo the frame loop renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScenePreset {
    /// Blit the currently selected image over the whole target
    Gallery,
    /// Primitive shapes: filled rect, outlined rect, line, dotted column
    Geometry,
}

/// One 2D draw command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    Clear(Color),
    FillRect(Rect, Color),
    OutlineRect(Rect, Color),
    Line(i32, i32, i32, i32, Color),
    Point(i32, i32, Color),
    /// Scaled copy of a gallery resource over the whole target
    Blit(ResourceSlot),
}

/// Build the command list for one frame
///
/// Pure function of the preset, current selection and target size, which
/// keeps frame composition testable without a framebuffer.
pub fn compose(
    preset: ScenePreset,
    selected: ResourceSlot,
    width: u32,
    height: u32,
) -> Vec<DrawOp> {
    match preset {
        ScenePreset::Gallery => vec![DrawOp::Blit(selected)],
        ScenePreset::Geometry => geometry_frame(width as i32, height as i32),
    }
}

fn geometry_frame(w: i32, h: i32) -> Vec<DrawOp> {
    let mut ops = vec![
        DrawOp::Clear(Color::WHITE),
        DrawOp::FillRect(
            Rect::new(w / 4, h / 4, (w / 2) as u32, (h / 2) as u32),
            Color::RED,
        ),
        DrawOp::OutlineRect(
            Rect::new(w / 6, h / 6, (w * 2 / 3) as u32, (h * 2 / 3) as u32),
            Color::GREEN,
        ),
        DrawOp::Line(0, h / 2, w, h / 2, Color::BLUE),
    ];
    // Dotted vertical column down the middle
    let mut y = 0;
    while y < h {
        ops.push(DrawOp::Point(w / 2, y, Color::YELLOW));
        y += 4;
    }
    ops
}

/// Executes composed frames against a framebuffer and hands them to a sink
///
/// This is the production [`RenderHost`]: it owns the back buffer, borrows
/// the gallery (gallery preset only) and forwards finished frames to the
/// presenting sink.
pub struct SceneHost<'a, S: PixelSink> {
    preset: ScenePreset,
    gallery: Option<&'a Gallery<PixelImage>>,
    framebuffer: Framebuffer,
    sink: &'a mut S,
}

impl<'a, S: PixelSink> SceneHost<'a, S> {
    pub fn new(
        preset: ScenePreset,
        gallery: Option<&'a Gallery<PixelImage>>,
        width: u32,
        height: u32,
        sink: &'a mut S,
    ) -> Self {
        Self {
            preset,
            gallery,
            framebuffer: Framebuffer::new(width, height),
            sink,
        }
    }

    fn execute(&mut self, op: DrawOp) -> Result<(), DrawError> {
        match op {
            DrawOp::Clear(color) => self.framebuffer.clear(color),
            DrawOp::FillRect(rect, color) => self.framebuffer.fill_rect(rect, color),
            DrawOp::OutlineRect(rect, color) => self.framebuffer.outline_rect(rect, color),
            DrawOp::Line(x1, y1, x2, y2, color) => {
                self.framebuffer.draw_line(x1, y1, x2, y2, color)
            }
            DrawOp::Point(x, y, color) => self.framebuffer.draw_point(x, y, color),
            DrawOp::Blit(slot) => {
                let gallery = self
                    .gallery
                    .ok_or_else(|| DrawError::from("no gallery loaded for blit"))?;
                let full = Rect::new(0, 0, self.framebuffer.width(), self.framebuffer.height());
                self.framebuffer.blit_scaled(gallery.get(slot), full);
            }
        }
        Ok(())
    }
}

impl<S: PixelSink> RenderHost for SceneHost<'_, S> {
    fn draw(&mut self, selected: ResourceSlot) -> Result<(), DrawError> {
        let ops = compose(
            self.preset,
            selected,
            self.framebuffer.width(),
            self.framebuffer.height(),
        );
        for op in ops {
            self.execute(op)?;
        }
        Ok(())
    }

    fn present(&mut self) -> Result<(), DrawError> {
        self.sink.present(
            self.framebuffer.pixels(),
            self.framebuffer.width(),
            self.framebuffer.height(),
        )
    }
}
