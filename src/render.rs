use crate::constants::*;
use crate::core::{CatalogEntry, FramePlan, Viewport, REFERENCE_RADIUS_PX};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Canvas 2D renderer: concentric circles for every visible catalog entry
/// plus the dashed reference ring.
pub struct CanvasRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    viewport: Viewport,
    dpr: f64,
    backing: (u32, u32),
}

impl CanvasRenderer {
    pub fn new(canvas: web::HtmlCanvasElement, viewport: Viewport, dpr: f64) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("not a 2d context"))?;
        let backing = (canvas.width(), canvas.height());
        log::info!(
            "[render] canvas2d {}x{} css @{:.2}x",
            viewport.width,
            viewport.height,
            dpr
        );
        Ok(Self {
            canvas,
            ctx,
            viewport,
            dpr,
            backing,
        })
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Pick up a new CSS size or pixel ratio after the backing store was
    /// resized.
    pub fn resize_if_needed(&mut self, viewport: Viewport, dpr: f64) {
        let backing = (self.canvas.width(), self.canvas.height());
        if backing == self.backing && viewport == self.viewport && dpr == self.dpr {
            return;
        }
        self.backing = backing;
        self.viewport = viewport;
        self.dpr = dpr;
        log::debug!(
            "[render] resized to {}x{} css @{:.2}x",
            viewport.width,
            viewport.height,
            dpr
        );
    }

    pub fn render(&self, entries: &[CatalogEntry], plan: &FramePlan) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        // Draw in CSS pixels regardless of the backing store density
        ctx.set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0)?;
        ctx.set_fill_style_str(BACKGROUND_COLOR);
        ctx.fill_rect(0.0, 0.0, self.viewport.width, self.viewport.height);

        let (cx, cy) = self.viewport.center();
        for v in &plan.visible {
            let Some(entry) = entries.get(v.index) else {
                continue;
            };
            self.draw_circle(cx, cy, v.radius_px, entry.color)?;
        }
        // Labels after all circles so larger fills never cover them
        ctx.set_font(LABEL_FONT);
        ctx.set_text_align("center");
        ctx.set_fill_style_str(LABEL_COLOR);
        for v in plan.visible.iter().filter(|v| v.labelled) {
            if let Some(entry) = entries.get(v.index) {
                ctx.fill_text(entry.name, cx, cy - v.radius_px - LABEL_OFFSET_PX)?;
            }
        }

        self.draw_reference_ring(cx, cy)
    }

    fn draw_circle(&self, cx: f64, cy: f64, radius: f64, color: &str) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.arc(cx, cy, radius, 0.0, TAU)?;

        let gradient = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, radius)?;
        gradient.add_color_stop(0.0, color)?;
        gradient.add_color_stop(1.0, &format!("{}{}", color, CIRCLE_FILL_EDGE_ALPHA))?;
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill();

        ctx.set_stroke_style_str(&format!("{}{}", color, CIRCLE_STROKE_ALPHA));
        ctx.set_line_width(CIRCLE_STROKE_WIDTH);
        ctx.stroke();
        Ok(())
    }

    fn draw_reference_ring(&self, cx: f64, cy: f64) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.arc(cx, cy, REFERENCE_RADIUS_PX, 0.0, TAU)?;
        ctx.set_stroke_style_str(REFERENCE_RING_STYLE);
        ctx.set_line_width(1.0);
        let dash = js_sys::Array::of2(
            &JsValue::from_f64(REFERENCE_RING_DASH_PX),
            &JsValue::from_f64(REFERENCE_RING_DASH_PX),
        );
        ctx.set_line_dash(&dash)?;
        ctx.stroke();
        ctx.set_line_dash(&js_sys::Array::new())?;
        Ok(())
    }
}
