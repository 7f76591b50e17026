#![cfg(target_arch = "wasm32")]
use crate::core::{Catalog, ScaleModel, HOME_ENTRY_NAME, INITIAL_SCALE};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
pub mod input;
mod overlay;
mod render;
mod ui;

const CANVAS_ID: &str = "canvas";

fn wire_canvas_resize(resized: &Rc<RefCell<bool>>) {
    let Some(window) = web::window() else {
        return;
    };
    let resized = resized.clone();
    dom::add_listener(&window, "resize", move |_ev: web::Event| {
        *resized.borrow_mut() = true;
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("powers-of-ten starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Backing store follows CSS size * devicePixelRatio
    let (viewport, dpr) = dom::sync_canvas_backing_size(&canvas);
    let renderer = render::CanvasRenderer::new(canvas.clone(), viewport, dpr)?;
    let resized = Rc::new(RefCell::new(false));
    wire_canvas_resize(&resized);

    let catalog = Catalog::builtin();
    let home = catalog.index_of(HOME_ENTRY_NAME).unwrap_or(0);
    let initial = catalog
        .get(home)
        .map(|e| e.size_meters)
        .unwrap_or(INITIAL_SCALE);
    let model = Rc::new(RefCell::new(ScaleModel::new(initial)));
    log::info!(
        "[init] catalog={} entries, start at {} ({} m)",
        catalog.len(),
        HOME_ENTRY_NAME,
        initial
    );

    let wiring = events::InputWiring {
        canvas: canvas.clone(),
        document: Some(document.clone()),
        model: model.clone(),
        catalog,
        selected: Rc::new(RefCell::new(home)),
        touch: Rc::new(RefCell::new(input::TouchState::default())),
        wheel: Rc::new(RefCell::new(input::WheelThrottle::default())),
        first_interaction: Rc::new(RefCell::new(overlay::FirstInteraction::default())),
    };
    events::wire_global_keydown(&wiring);
    events::wire_pointer_handlers(&wiring);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        model,
        catalog,
        canvas,
        renderer,
        panel: ui::InfoPanel::new(document),
        resized,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
