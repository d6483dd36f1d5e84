use fx_core::{AmbientWeb, RippleBurst, StarTrail};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub ripple: Rc<RefCell<RippleBurst>>,
    pub stars: Rc<RefCell<StarTrail>>,
    pub web: Option<Rc<RefCell<AmbientWeb>>>,
}

pub fn wire_input_handlers(document: &web::Document, w: InputWiring) {
    wire_click(document, &w);
    wire_pointermove(&w);
}

#[inline]
fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn wire_click(document: &web::Document, w: &InputWiring) {
    let ripple = w.ripple.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        ripple.borrow_mut().spawn(client_point(&ev));
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let at = client_point(&ev);
        w.stars.borrow_mut().spawn(at);
        if let Some(ambient) = &w.web {
            ambient.borrow_mut().set_pointer(at);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
