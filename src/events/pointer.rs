use super::InputWiring;
use crate::dom;
use crate::input::{self, PinchState};
use instant::Instant;
use web_sys as web;

pub fn wire_pointer_handlers(w: &InputWiring) {
    wire_wheel(w);
    wire_click(w);
    wire_touchstart(w);
    wire_touchmove(w);
    wire_touchend(w);
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_active_listener(&target, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        w.note_interaction();
        if !w.wheel.borrow_mut().accept(Instant::now()) {
            return;
        }
        let factor = input::wheel_zoom_factor(ev.delta_y());
        w.model.borrow_mut().multiply_target(factor);
    });
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_listener(&target, "click", move |_ev: web::MouseEvent| {
        w.select_next();
    });
}

fn wire_touchstart(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_active_listener(&target, "touchstart", move |ev: web::TouchEvent| {
        w.note_interaction();
        if let Some(dist) = input::two_finger_distance(&ev.touches()) {
            let start_target = w.model.borrow().target();
            w.touch.borrow_mut().pinch = PinchState::begin(dist, start_target);
            log::debug!("[touch] pinch start dist={:.1}", dist);
        }
    });
}

fn wire_touchmove(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_active_listener(&target, "touchmove", move |ev: web::TouchEvent| {
        ev.prevent_default();
        let touches = ev.touches();
        match touches.length() {
            0 => {}
            1 => {
                let Some(t) = touches.item(0) else {
                    return;
                };
                let height = web::window()
                    .and_then(|win| win.inner_height().ok())
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                let factor = input::touch_drag_factor(t.client_y() as f64, height);
                w.model.borrow_mut().multiply_target(factor);
            }
            _ => {
                let Some(dist) = input::two_finger_distance(&touches) else {
                    return;
                };
                let pinch = w.touch.borrow().pinch;
                match pinch {
                    Some(p) => {
                        if let Some(t) = p.target_for(dist) {
                            w.model.borrow_mut().set_target(t);
                        }
                    }
                    // Second finger landed without a touchstart carrying both
                    None => {
                        let start_target = w.model.borrow().target();
                        w.touch.borrow_mut().pinch = PinchState::begin(dist, start_target);
                    }
                }
            }
        }
    });
}

fn wire_touchend(w: &InputWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_listener(&target, "touchend", move |ev: web::TouchEvent| {
        if ev.touches().length() < 2 {
            w.touch.borrow_mut().pinch = None;
        }
    });
}
