use super::{Vec2, Viewport};

/// Fraction of the remaining distance covered per frame.
pub const PARALLAX_EASING: f64 = 0.05;

/// Scene offset per pixel of pointer distance from the viewport centre.
pub const PARALLAX_DEPTH: f64 = 0.03;

/// Pointer-driven scene offset with exponential smoothing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Parallax {
    offset: Vec2,
    target: Vec2,
}

impl Parallax {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Aim at the pointer. The offset itself only moves in [`Parallax::step`].
    pub fn point_at(&mut self, pointer: Vec2, viewport: Viewport) {
        self.target = (pointer - viewport.center()) * PARALLAX_DEPTH;
    }

    /// `offset += (target - offset) * PARALLAX_EASING`
    pub fn step(&mut self) -> Vec2 {
        self.offset = self.offset + (self.target - self.offset) * PARALLAX_EASING;
        self.offset
    }
}
