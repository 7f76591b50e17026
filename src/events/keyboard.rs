use super::InputWiring;
use crate::input::{key_action, key_fades_instructions, KeyAction};
use crate::overlay;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &InputWiring) {
    let action = key_action(&ev.key());
    if key_fades_instructions(action) {
        w.note_interaction();
    } else {
        w.first_interaction.borrow_mut().mark_seen();
    }
    let Some(action) = action else {
        return;
    };

    if let Some(factor) = action.zoom_factor() {
        w.model.borrow_mut().multiply_target(factor);
        ev.prevent_default();
        return;
    }
    match action {
        KeyAction::NextEntry => {
            w.select_next();
            ev.prevent_default();
        }
        KeyAction::PreviousEntry => {
            w.select_previous();
            ev.prevent_default();
        }
        KeyAction::Home => {
            w.select_home();
            ev.prevent_default();
        }
        KeyAction::ToggleInstructions => {
            if let Some(doc) = &w.document {
                overlay::toggle(doc);
            }
            ev.prevent_default();
        }
        KeyAction::ToggleFullscreen => {
            if let Some(doc) = &w.document {
                if doc.fullscreen_element().is_some() {
                    _ = doc.exit_fullscreen();
                } else {
                    _ = w.canvas.request_fullscreen();
                }
            }
            ev.prevent_default();
        }
        KeyAction::ExitFullscreen => {
            if let Some(doc) = &w.document {
                if doc.fullscreen_element().is_some() {
                    _ = doc.exit_fullscreen();
                }
            }
        }
        KeyAction::ZoomIn | KeyAction::ZoomOut => {}
    }
}

pub fn wire_global_keydown(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    crate::dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &w);
    });
}
