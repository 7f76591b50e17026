use crate::core::{plan_frame, Catalog, ScaleModel};
use crate::dom;
use crate::render::CanvasRenderer;
use crate::ui::InfoPanel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub model: Rc<RefCell<ScaleModel>>,
    pub catalog: Catalog,
    pub canvas: web::HtmlCanvasElement,
    pub renderer: CanvasRenderer,
    pub panel: InfoPanel,
    /// Set by the resize listener; the next frame re-reads canvas geometry.
    pub resized: Rc<RefCell<bool>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if std::mem::take(&mut *self.resized.borrow_mut()) {
            let (viewport, dpr) = dom::sync_canvas_backing_size(&self.canvas);
            self.renderer.resize_if_needed(viewport, dpr);
        }

        let scale = {
            let mut model = self.model.borrow_mut();
            model.advance();
            model.current()
        };

        let entries = self.catalog.entries();
        let plan = plan_frame(entries, scale, self.renderer.viewport());
        if let Err(e) = self.renderer.render(entries, &plan) {
            log::error!("[frame] render error: {:?}", e);
        }

        self.panel.set_scale(scale);
        if let Some(entry) = plan.nearest.and_then(|i| self.catalog.get(i)) {
            self.panel.set_nearest(entry);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
