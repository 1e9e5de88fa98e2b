use crate::core::{ClickRing, Clock};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ClickWiring {
    pub ring: Rc<RefCell<ClickRing>>,
    pub clock: Clock,
}

/// Every click on the page spawns a ripple, wherever it lands.
pub fn wire_click_handler(w: ClickWiring) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some((view_w, view_h)) = web::window().and_then(|wnd| dom::window_inner_size(&wnd))
        else {
            return;
        };
        let now = w.clock.now_sec();
        let mut ring = w.ring.borrow_mut();
        let slot = ring.active_index();
        let uv = ring.record_pointer_click(
            ev.page_x() as f32,
            ev.page_y() as f32,
            view_w as f32,
            view_h as f32,
            now,
        );
        log::debug!("[click] slot {} at ({:.3}, {:.3}) t={:.2}", slot, uv.x, uv.y, now);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
