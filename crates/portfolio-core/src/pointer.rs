use glam::Vec2;

/// CSS viewport size plus the device pixel ratio of the display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// True when either side is zero (minimised window, detached element).
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Backing-store size in physical pixels, never below 1x1.
    pub fn backing_size(&self) -> (u32, u32) {
        let dpr = if self.pixel_ratio > 0.0 {
            self.pixel_ratio
        } else {
            1.0
        };
        let w = (self.width * dpr) as u32;
        let h = (self.height * dpr) as u32;
        (w.max(1), h.max(1))
    }
}

/// Last known pointer position, normalised to \[-1, 1\] with +Y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn from_client(client_x: f32, client_y: f32, viewport: &Viewport) -> Self {
        if viewport.is_degenerate() {
            return Self::default();
        }
        Self {
            x: (client_x / viewport.width) * 2.0 - 1.0,
            y: -(client_y / viewport.height) * 2.0 + 1.0,
        }
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_unit_square_with_y_up() {
        let vp = Viewport::new(800.0, 600.0, 1.0);
        assert_eq!(
            PointerState::from_client(0.0, 0.0, &vp),
            PointerState { x: -1.0, y: 1.0 }
        );
        assert_eq!(
            PointerState::from_client(800.0, 600.0, &vp),
            PointerState { x: 1.0, y: -1.0 }
        );
        assert_eq!(
            PointerState::from_client(400.0, 300.0, &vp),
            PointerState { x: 0.0, y: 0.0 }
        );
    }

    #[test]
    fn degenerate_viewport_yields_centre() {
        let vp = Viewport::new(0.0, 600.0, 1.0);
        assert_eq!(PointerState::from_client(10.0, 10.0, &vp), PointerState::default());
    }

    #[test]
    fn backing_size_scales_by_pixel_ratio() {
        let vp = Viewport::new(640.0, 480.0, 2.0);
        assert_eq!(vp.backing_size(), (1280, 960));
        assert_eq!(Viewport::new(0.0, 0.0, 0.0).backing_size(), (1, 1));
    }
}
