#![cfg(target_arch = "wasm32")]
use crate::session::Session;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod data;
mod dom;
mod events;
mod frame;
mod labels;
mod overlay;
mod pick;
mod render;
mod scene;
mod session;
mod zoom;

thread_local! {
    static ACTIVE_SESSION: RefCell<Option<Rc<RefCell<Session>>>> = const { RefCell::new(None) };
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
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
    log::info!("deeptime-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the active view: the frame loop winds down, listeners go inert, and
/// overlay nodes are cleared on the next tick. Calling this twice, or
/// before a view exists, is a no-op.
#[wasm_bindgen]
pub fn shutdown() {
    ACTIVE_SESSION.with(|s| {
        if let Some(session) = s.borrow_mut().take() {
            session.borrow_mut().shutdown();
            log::info!("view shut down");
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("init already ran; ignoring");
        return Ok(());
    }

    let session = Rc::new(RefCell::new(Session::new(data::timeline_data())));
    ACTIVE_SESSION.with(|s| *s.borrow_mut() = Some(session.clone()));
    log::info!(
        "[nav] dataset ready: {} eons visible",
        session.borrow().visible_count()
    );

    overlay::update_hud(&document, &session.borrow());

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        document: document.clone(),
        session: session.clone(),
    });

    let gpu = frame::init_gpu(&canvas).await;
    let label_layer = overlay::LabelLayer::new(&document);
    if label_layer.is_none() {
        log::warn!("missing #label-layer; running without floating labels");
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        canvas,
        document,
        label_layer,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
