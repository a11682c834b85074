use crate::constants::{BACKDROP_CANVAS_CLASS, BACKDROP_CANVAS_STYLE};
use portfolio_core::{BackdropError, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up a mount element, reporting a missing one as `MissingElement`.
pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .ok_or_else(|| BackdropError::MissingElement(id.to_string()).into())
}

pub fn create_html_element(document: &web::Document, tag: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// CSS size of the window plus its device pixel ratio.
pub fn window_viewport(window: &web::Window) -> Viewport {
    let css = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(
        css(window.inner_width()),
        css(window.inner_height()),
        window.device_pixel_ratio() as f32,
    )
}

/// Append a full-viewport canvas behind the page content.
pub fn mount_canvas(
    document: &web::Document,
    mount: &web::HtmlElement,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_class_name(BACKDROP_CANVAS_CLASS);
    canvas
        .set_attribute("style", BACKDROP_CANVAS_STYLE)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = canvas.set_attribute("aria-hidden", "true");
    mount
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Keep the canvas backing store at CSS size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.backing_size();
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
}
