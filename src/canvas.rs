//! Drawing surface abstraction.
//!
//! The engine never talks to a window or GPU directly; it draws through the
//! [`Canvas`] trait. The shipped backend is [`crate::gpu::WgpuCanvas`], but
//! anything that can draw lines and dots works, including [`NullCanvas`],
//! which draws nothing and is useful for headless runs and tests.

use glam::{Vec2, Vec4};

/// A 2D drawing surface the engine renders onto.
///
/// Coordinates are in pixels with the origin at the top-left corner and the
/// y axis pointing down. Colors are linear RGBA in `[0, 1]`.
pub trait Canvas {
    /// Surface width in pixels.
    fn width(&self) -> f32;

    /// Surface height in pixels.
    fn height(&self) -> f32;

    /// Erase the whole surface.
    fn clear(&mut self);

    /// Partially erase the surface, dimming what is already drawn by
    /// `amount` in `[0, 1]`. Called once per frame to produce motion trails:
    /// old frames fade out instead of vanishing.
    fn fade(&mut self, amount: f32);

    /// Draw a line segment of the given width.
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Vec4);

    /// Draw a filled dot.
    fn dot(&mut self, center: Vec2, radius: f32, color: Vec4);

    /// Draw a short diagnostic string at `pos`.
    ///
    /// Backends without text support can ignore this; the default does.
    fn text(&mut self, _text: &str, _pos: Vec2) {}
}

/// A canvas that draws nothing.
///
/// Stands in for a surface whose drawing context is unavailable: the engine
/// stays fully functional but produces no visible output. Also the surface
/// of choice for tests and benchmarks.
#[derive(Debug, Clone, Copy)]
pub struct NullCanvas {
    width: f32,
    height: f32,
}

impl NullCanvas {
    /// Create a no-op canvas reporting the given dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Canvas for NullCanvas {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {}

    fn fade(&mut self, _amount: f32) {}

    fn line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _color: Vec4) {}

    fn dot(&mut self, _center: Vec2, _radius: f32, _color: Vec4) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_canvas_reports_size() {
        let canvas = NullCanvas::new(800.0, 600.0);
        assert_eq!(canvas.width(), 800.0);
        assert_eq!(canvas.height(), 600.0);
    }
}
