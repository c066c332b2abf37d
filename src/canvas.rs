//! A small retained transform on top of [`egui::Painter`].
//!
//! egui paints in absolute screen points. The dial is much easier to describe
//! as "rotate, then draw straight up", so [`Canvas`] keeps a current transform
//! and a save/restore stack in the style of a classic 2D painter.

use eframe::egui::{self, emath::Rot2, Align2, Color32, FontId, Pos2, Stroke, Vec2};

/// Rotation followed by translation: `p -> rot * p + offset`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    rot: Rot2,
    offset: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            rot: Rot2::IDENTITY,
            offset: Vec2::ZERO,
        }
    }
}

impl Transform {
    /// Moves the local origin by `delta`, measured in the current local frame.
    pub fn translate(&mut self, delta: Vec2) {
        self.offset += self.rot * delta;
    }

    /// Rotates the local frame. Positive degrees turn clockwise on screen
    /// because y grows downwards.
    pub fn rotate(&mut self, degrees: f32) {
        self.rot = self.rot * Rot2::from_angle(degrees.to_radians());
    }

    pub fn apply(&self, local: Pos2) -> Pos2 {
        (self.rot * local.to_vec2() + self.offset).to_pos2()
    }

    /// Net rotation of the local frame, in degrees within `(-180, 180]`.
    pub fn angle_degrees(&self) -> f32 {
        self.rot.angle().to_degrees()
    }
}

#[derive(Debug, Default)]
pub struct TransformStack {
    current: Transform,
    saved: Vec<Transform>,
}

impl TransformStack {
    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Unbalanced restores leave the current transform untouched.
    pub fn restore(&mut self) {
        if let Some(t) = self.saved.pop() {
            self.current = t;
        }
    }

    pub fn current(&self) -> &Transform {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut Transform {
        &mut self.current
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.saved.len()
    }
}

pub struct Canvas<'p> {
    painter: &'p egui::Painter,
    transforms: TransformStack,
}

impl<'p> Canvas<'p> {
    pub fn new(painter: &'p egui::Painter) -> Self {
        Self {
            painter,
            transforms: TransformStack::default(),
        }
    }

    pub fn save(&mut self) {
        self.transforms.save();
    }

    pub fn restore(&mut self) {
        self.transforms.restore();
    }

    /// Runs `draw` between a save and a restore.
    pub fn scoped(&mut self, draw: impl FnOnce(&mut Self)) {
        self.save();
        draw(self);
        self.restore();
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.transforms.current_mut().translate(delta);
    }

    pub fn rotate(&mut self, degrees: f32) {
        self.transforms.current_mut().rotate(degrees);
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        self.transforms.current_mut()
    }

    pub fn map(&self, local: Pos2) -> Pos2 {
        self.transforms.current().apply(local)
    }

    pub fn fill_circle(&self, center: Pos2, radius: f32, fill: Color32) {
        self.painter.circle_filled(self.map(center), radius, fill);
    }

    pub fn line(&self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.painter
            .line_segment([self.map(from), self.map(to)], stroke);
    }

    /// Text is laid out upright at the mapped anchor; glyphs are not rotated.
    pub fn text(&self, at: Pos2, anchor: Align2, text: &str, font: FontId, color: Color32) {
        self.painter.text(self.map(at), anchor, text, font, color);
    }
}
