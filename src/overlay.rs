use crate::constants::INSTRUCTIONS_FADE_MS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const INSTRUCTIONS_SELECTOR: &str = ".instructions";

#[inline]
fn instructions(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .query_selector(INSTRUCTIONS_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = instructions(document) {
        let style = el.style();
        _ = style.set_property("display", "");
        _ = style.set_property("opacity", "1");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = instructions(document) {
        _ = el.style().set_property("display", "none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    instructions(document)
        .and_then(|el| el.style().get_property_value("display").ok())
        .map(|s| s == "none")
        .unwrap_or(true)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Fade the instructions out, then drop them from layout once the CSS
/// transition has had time to run.
pub fn fade_out(document: &web::Document) {
    let Some(el) = instructions(document) else {
        return;
    };
    _ = el.style().set_property("opacity", "0");
    let Some(window) = web::window() else {
        hide(document);
        return;
    };
    let doc = document.clone();
    let closure: Closure<dyn FnMut()> = Closure::once(move || hide(&doc));
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            INSTRUCTIONS_FADE_MS,
        )
        .is_err()
    {
        hide(document);
    }
    closure.forget();
}

/// Hides the instructions on the first user interaction only.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstInteraction {
    seen: bool,
}

impl FirstInteraction {
    /// Record an interaction that manages the instructions itself.
    pub fn mark_seen(&mut self) {
        self.seen = true;
    }

    pub fn note(&mut self, document: &web::Document) {
        if !self.seen {
            self.seen = true;
            log::debug!("[overlay] first interaction, hiding instructions");
            fade_out(document);
        }
    }
}
