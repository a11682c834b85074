use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn client_position(ev: &web::MouseEvent) -> (f32, f32) {
    (ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn client_x(ev: &web::MouseEvent) -> f32 {
    ev.client_x() as f32
}

/// Horizontal position of the first active touch, if any.
#[inline]
pub fn first_touch_x(ev: &web::TouchEvent) -> Option<f32> {
    ev.touches().get(0).map(|t| t.client_x() as f32)
}
