use eframe::egui::{Pos2, Vec2};

/// Moves an undecorated window by hand: the offset between the cursor and
/// the window's top-left corner is captured on press and held until release.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging {
        offset: Vec2,
    },
}

impl DragGesture {
    /// Primary button went down at `pointer` while the window sat at `origin`,
    /// both in screen coordinates.
    pub fn press(&mut self, pointer: Pos2, origin: Pos2) {
        *self = Self::Dragging {
            offset: pointer - origin,
        };
    }

    /// Returns where the window's top-left corner should go, or `None` when no
    /// drag is in progress.
    pub fn move_to(&self, pointer: Pos2) -> Option<Pos2> {
        match *self {
            Self::Idle => None,
            Self::Dragging { offset } => Some(pointer - offset),
        }
    }

    pub fn release(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
