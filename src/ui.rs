use crate::core::{format_length, CatalogEntry};
use crate::dom;
use web_sys as web;

const ZOOM_LEVEL_ID: &str = "zoom-level";
const INFO_TITLE_ID: &str = "info-title";
const INFO_DESCRIPTION_ID: &str = "info-description";
const INFO_SIZE_ID: &str = "info-size";

/// Text panels around the canvas: the current scale readout and the info
/// box for the nearest catalog entry. DOM text is only touched on change.
pub struct InfoPanel {
    document: web::Document,
    shown_scale: String,
    shown_entry: Option<&'static str>,
}

impl InfoPanel {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            shown_scale: String::new(),
            shown_entry: None,
        }
    }

    pub fn set_scale(&mut self, meters: f64) {
        let text = format_length(meters);
        if text != self.shown_scale {
            dom::set_text(&self.document, ZOOM_LEVEL_ID, &text);
            self.shown_scale = text;
        }
    }

    pub fn set_nearest(&mut self, entry: &'static CatalogEntry) {
        if self.shown_entry == Some(entry.name) {
            return;
        }
        dom::set_text(&self.document, INFO_TITLE_ID, entry.name);
        dom::set_text(&self.document, INFO_DESCRIPTION_ID, entry.description);
        dom::set_text(&self.document, INFO_SIZE_ID, &format_length(entry.size_meters));
        self.shown_entry = Some(entry.name);
    }
}
