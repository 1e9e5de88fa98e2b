#![cfg(target_arch = "wasm32")]
use crate::core::{ClickRing, Clock, RippleParams, CLICK_JITTER_SEED};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

use constants::{CANVAS_ID, GPU_UNAVAILABLE_MESSAGE};

// Set on the idle -> running transition; a second start is ignored.
static STARTED: AtomicBool = AtomicBool::new(false);

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    if let Some(vp) = dom::sync_canvas_backing_size(canvas) {
        log::info!("[gpu] canvas {}x{}", vp.width, vp.height);
    }
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("eggs starting");

    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("eggs already running");
        return Ok(());
    }

    let canvas =
        find_canvas().map_err(|e| JsValue::from(js_sys::Error::new(&format!("{:#}", e))))?;

    spawn_local(async move {
        if let Err(e) = init(canvas).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn find_canvas() -> anyhow::Result<web::HtmlCanvasElement> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

async fn init(canvas: web::HtmlCanvasElement) -> anyhow::Result<()> {
    wire_canvas_resize(&canvas);

    let params = RippleParams::default();
    let ring = ClickRing::new(params.clone(), CLICK_JITTER_SEED)?;
    let ring = Rc::new(RefCell::new(ring));

    let gpu = match render::GpuState::new(&canvas, &params).await {
        Ok(g) => g,
        Err(e) => {
            if e.alerts_user() {
                log::error!("[gpu] {}", e);
                dom::alert(GPU_UNAVAILABLE_MESSAGE);
            }
            return Err(anyhow::Error::new(e).context("GPU init failed"));
        }
    };

    let clock = Clock::start_now();
    events::pointer::wire_click_handler(events::pointer::ClickWiring {
        ring: ring.clone(),
        clock,
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        ring,
        canvas,
        gpu,
        clock,
    )));
    log::info!("[frame] running with {} ripple slots", params.capacity);
    frame::start_loop(frame_ctx);
    Ok(())
}
