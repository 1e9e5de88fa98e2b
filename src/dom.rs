use crate::core::Viewport;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Window inner size in CSS pixels, or `None` outside a browsing context.
pub fn window_inner_size(window: &web::Window) -> Option<(f64, f64)> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w, h))
}

/// Size the canvas backing store to the window times the capped pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Option<Viewport> {
    let window = web::window()?;
    let (css_w, css_h) = window_inner_size(&window)?;
    let vp = Viewport::from_css(css_w, css_h, window.device_pixel_ratio());
    canvas.set_width(vp.width);
    canvas.set_height(vp.height);
    Some(vp)
}

/// Blocking browser alert for errors the user has to see.
pub fn alert(message: &str) {
    if let Some(w) = web::window() {
        _ = w.alert_with_message(message);
    }
}
