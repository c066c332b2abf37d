use eframe::egui::{Pos2, Rect};

/// Ellipse inscribed in the window rectangle. Anything outside it is neither
/// painted nor allowed to start a drag or a close.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularMask {
    bounds: Rect,
}

impl CircularMask {
    pub fn inscribed_in(bounds: Rect) -> Self {
        Self { bounds }
    }

    #[cfg(test)]
    fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn contains(&self, point: Pos2) -> bool {
        let rx = self.bounds.width() / 2.0;
        let ry = self.bounds.height() / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let d = point - self.bounds.center();
        (d.x / rx).powi(2) + (d.y / ry).powi(2) <= 1.0
    }
}
