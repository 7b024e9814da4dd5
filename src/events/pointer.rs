use crate::input::{self, PointerKind, POINTER_EVENT_TYPES};
use glam::Vec2;
use sphere_core::Simulation;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub sim: Rc<RefCell<Simulation>>,
}

/// One listener for press, move, release and leave on the canvas. Leaving the
/// canvas ends a drag just like releasing.
pub fn wire_input_handlers(w: InputWiring) {
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(kind) = PointerKind::from_event_type(&ev.type_()) else {
            return;
        };
        let pos = pointer_canvas_px(&ev, &w.canvas);
        let viewport = Vec2::new(w.canvas.width() as f32, w.canvas.height() as f32);
        let event = input::to_pointer_event(kind, pos, viewport);
        w.sim.borrow_mut().handle_pointer(event);
        if kind == PointerKind::Down {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);

    for ty in POINTER_EVENT_TYPES {
        _ = canvas_for_listener
            .add_event_listener_with_callback(ty, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[inline]
fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}
