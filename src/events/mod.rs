pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_global_keydown;
pub use pointer::wire_pointer_handlers;

use crate::core::{Catalog, ScaleModel, HOME_ENTRY_NAME};
use crate::input::{next_index, previous_index, TouchState, WheelThrottle};
use crate::overlay::FirstInteraction;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// State shared by every input handler. Handlers only ever move the
/// model's target; the frame loop does the rest.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: Option<web::Document>,
    pub model: Rc<RefCell<ScaleModel>>,
    pub catalog: Catalog,
    /// Catalog index that click / arrow-key cycling continues from.
    pub selected: Rc<RefCell<usize>>,
    pub touch: Rc<RefCell<TouchState>>,
    pub wheel: Rc<RefCell<WheelThrottle>>,
    pub first_interaction: Rc<RefCell<FirstInteraction>>,
}

impl InputWiring {
    fn select(&self, index: usize) {
        let Some(entry) = self.catalog.get(index) else {
            return;
        };
        *self.selected.borrow_mut() = index;
        self.model.borrow_mut().set_target(entry.size_meters);
        log::info!("[select] {} ({} m)", entry.name, entry.size_meters);
    }

    pub fn select_next(&self) {
        let cur = *self.selected.borrow();
        self.select(next_index(cur, self.catalog.len()));
    }

    pub fn select_previous(&self) {
        let cur = *self.selected.borrow();
        self.select(previous_index(cur, self.catalog.len()));
    }

    pub fn select_home(&self) {
        if let Some(i) = self.catalog.index_of(HOME_ENTRY_NAME) {
            self.select(i);
        }
    }

    pub(crate) fn note_interaction(&self) {
        if let Some(doc) = &self.document {
            self.first_interaction.borrow_mut().note(doc);
        }
    }
}
