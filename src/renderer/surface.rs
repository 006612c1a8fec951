//! Draw target abstraction
//!
//! The scene only ever fills rectangles (solid or with a vertical gradient),
//! so that is all a surface has to offer.

use crate::sim::Rect;

/// Straight (non-premultiplied) RGBA, 0-1
pub type Color = [f32; 4];

/// Something the scene can paint on
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_vertical_gradient(&mut self, rect: Rect, top: Color, bottom: Color);
}

/// A recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Rect { rect: Rect, color: Color },
    Gradient { rect: Rect, top: Color, bottom: Color },
}

impl DrawCommand {
    pub fn rect(&self) -> Rect {
        match *self {
            DrawCommand::Rect { rect, .. } | DrawCommand::Gradient { rect, .. } => rect,
        }
    }
}

/// Surface that records draw calls in paint order (back to front).
///
/// The GPU pipeline tessellates it once per frame; tests inspect it directly.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn fill_vertical_gradient(&mut self, rect: Rect, top: Color, bottom: Color) {
        self.commands.push(DrawCommand::Gradient { rect, top, bottom });
    }
}
