use crate::dom;
use crate::frame::SharedBackdrop;
use crate::input;
use crate::listeners::ListenerSet;
use web_sys as web;

/// Window-level pointer tracking and resize handling for the backdrop.
pub fn wire_backdrop_handlers(
    listeners: &mut ListenerSet,
    window: &web::Window,
    backdrop: &SharedBackdrop,
    canvas: &web::HtmlCanvasElement,
) {
    let backdrop_move = backdrop.clone();
    listeners.add(window, "pointermove", move |ev: web::PointerEvent| {
        let (x, y) = input::client_position(&ev);
        backdrop_move.borrow_mut().pointer_moved(x, y);
    });

    let backdrop_resize = backdrop.clone();
    let canvas = canvas.clone();
    let window_resize = window.clone();
    listeners.add(window, "resize", move |_: web::Event| {
        let viewport = dom::window_viewport(&window_resize);
        if viewport.is_degenerate() {
            return;
        }
        dom::sync_canvas_backing_size(&canvas, &viewport);
        backdrop_resize.borrow_mut().resize(viewport);
    });
}
