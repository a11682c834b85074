//! Drag-to-spin project carousel.

mod markup;
mod ring;

pub use markup::*;
pub use ring::*;

use crate::constants::DRAG_SENSITIVITY;

/// Rotation state of the card ring, in degrees.
///
/// The live rotation is unbounded; it is never wrapped, snapped or decayed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CarouselController {
    rotation: f32,
    committed: f32,
    dragging: bool,
    start_x: f32,
}

impl CarouselController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn committed_rotation(&self) -> f32 {
        self.committed
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin_drag(&mut self, x: f32) {
        self.dragging = true;
        self.start_x = x;
        self.committed = self.rotation;
    }

    /// Update the live rotation. Returns the new value while a drag is active.
    pub fn drag_to(&mut self, x: f32) -> Option<f32> {
        if !self.dragging {
            return None;
        }
        self.rotation = self.committed + (x - self.start_x) * DRAG_SENSITIVITY;
        Some(self.rotation)
    }

    /// Commit the live rotation as the baseline for the next drag.
    pub fn end_drag(&mut self) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        self.committed = self.rotation;
    }
}

/// CSS transform for the rotating strip holding all cards.
pub fn strip_transform(rotation_deg: f32) -> String {
    format!("rotateY({}deg)", rotation_deg)
}
