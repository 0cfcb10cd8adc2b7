use crate::dom;
use crate::overlay;
use crate::session::Session;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the DOM handlers need; handlers stay thin and forward
/// converted coordinates into the session.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub session: Rc<RefCell<Session>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_click(&w);
    wire_wheel(&w);
    wire_back_button(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (sx, sy) = dom::pointer_canvas_px(&ev, &w.canvas);
        let width = w.canvas.width() as f32;
        let height = w.canvas.height() as f32;
        let hovered = w.session.borrow_mut().hover_at(sx, sy, width, height);
        dom::set_cursor(
            &w.canvas,
            if hovered.is_some() { "pointer" } else { "default" },
        );
    }) as Box<dyn FnMut(_)>);
    let _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let (sx, sy) = dom::pointer_canvas_px(&ev, &w.canvas);
        let width = w.canvas.width() as f32;
        let height = w.canvas.height() as f32;
        let changed = w.session.borrow_mut().click_at(sx, sy, width, height);
        if changed {
            overlay::update_hud(&w.document, &w.session.borrow());
        }
    }) as Box<dyn FnMut(_)>);
    let _ = canvas_for_listener
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        // Trackpads report horizontal pans in delta_x; wheels in delta_y.
        let delta = if ev.delta_x() != 0.0 {
            ev.delta_x()
        } else {
            ev.delta_y()
        };
        w.session.borrow_mut().wheel(delta as f32);
    }) as Box<dyn FnMut(_)>);
    let _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_back_button(w: &InputWiring) {
    let session = w.session.clone();
    let document = w.document.clone();
    dom::add_click_listener(&w.document, "hud-back", move || {
        let changed = session.borrow_mut().zoom_out();
        if changed {
            overlay::update_hud(&document, &session.borrow());
        }
    });
}
