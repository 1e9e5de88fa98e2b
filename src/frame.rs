use crate::constants::FRAME_LOG_INTERVAL;
use crate::core::{ClickRing, Clock, TIME_OFFSET_SEC};
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame callback touches. The click ring is shared with
/// the pointer handler; the GPU state is owned here.
pub struct FrameContext {
    pub ring: Rc<RefCell<ClickRing>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState,
    pub clock: Clock,
    click_bytes: Vec<u8>,
    frames: u64,
    last_log_sec: f32,
}

impl FrameContext {
    pub fn new(
        ring: Rc<RefCell<ClickRing>>,
        canvas: web::HtmlCanvasElement,
        gpu: render::GpuState,
        clock: Clock,
    ) -> Self {
        let click_bytes = vec![0u8; ring.borrow().params().texture_bytes()];
        let mut ctx = Self {
            ring,
            canvas,
            gpu,
            clock,
            click_bytes,
            frames: 0,
            last_log_sec: 0.0,
        };
        // first draw must already see a valid (all idle) texture
        ctx.upload_clicks(clock.now_sec());
        ctx
    }

    pub fn frame(&mut self) {
        let now = self.clock.now_sec();

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());

        match self.gpu.render(TIME_OFFSET_SEC + now) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gpu.reconfigure();
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::debug!("[frame] surface timeout, skipping");
            }
            Err(e) => log::error!("render error: {:?}", e),
        }

        // Uploaded after the draw, so the shader sees it next frame.
        self.upload_clicks(now);

        self.frames += 1;
        if self.frames % FRAME_LOG_INTERVAL == 0 {
            let fps = FRAME_LOG_INTERVAL as f32 / (now - self.last_log_sec).max(1e-3);
            log::debug!(
                "[frame] {} frames, {:.1} fps, {} clicks",
                self.frames,
                fps,
                self.ring.borrow().clicks_total()
            );
            self.last_log_sec = now;
        }
    }

    fn upload_clicks(&mut self, now: f32) {
        {
            let mut ring = self.ring.borrow_mut();
            ring.settle(now);
            ring.encode_into(now, &mut self.click_bytes);
        }
        self.gpu.upload_clicks(&self.click_bytes);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
