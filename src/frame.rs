use crate::dom;
use crate::labels;
use crate::overlay::LabelLayer;
use crate::render;
use crate::session::Session;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-view state threaded through the animation callback. One frame runs
/// camera interpolation, then label projection, then render/present, in
/// that order; the loop's only suspension point is the next RAF signal.
pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub label_layer: Option<LabelLayer>,
    pub gpu: Option<render::GpuState<'static>>,
    pub last_instant: Instant,
}

impl FrameContext {
    /// Run one frame. Returns false once the session has been shut down,
    /// which stops the loop from rescheduling.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let mut session = self.session.borrow_mut();
        if !session.is_running() {
            return false;
        }

        session.camera_mut().tick();

        // Labels live in the DOM, so project them in CSS pixels; the
        // backing-store size is dpr-scaled and only the GPU surface uses it.
        let (css_w, css_h) = dom::canvas_css_size(&self.canvas);
        let placements = labels::project_labels(session.markers(), session.camera(), css_w, css_h);
        if let Some(layer) = &mut self.label_layer {
            layer.update(&self.document, &placements);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(session.camera(), session.markers(), dt_sec) {
                log::error!("[gpu] render error: {:?}", e);
            }
        }
        true
    }

    /// Release view resources once the loop has stopped. Idempotent; a
    /// second teardown of an already-detached view is a guarded no-op.
    pub fn teardown(&mut self) {
        if let Some(layer) = &mut self.label_layer {
            layer.clear();
        }
        dom::set_cursor(&self.canvas, "default");
        self.gpu = None;
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive the frame callback off requestAnimationFrame until shutdown.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let running = frame_ctx_tick.borrow_mut().frame();
        if !running {
            // Stop rescheduling; the retained closure is inert after this.
            frame_ctx_tick.borrow_mut().teardown();
            return;
        }
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
