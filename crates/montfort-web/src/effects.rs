use crate::constants::{FX_CANVAS_ID, FX_FALLBACK_ID};
use crate::dom;
use crate::render::GpuBackend;
use web_sys as web;

/// Backend for the pointer-reactive background distortion.
///
/// Selected exactly once at startup: GPU when an adapter is available,
/// otherwise a CSS-variable substitute for the rest of the session. The
/// frame loop only ever talks to this interface.
pub trait EffectBackend {
    /// Target pointer position in viewport UV; backends smooth internally.
    fn set_pointer(&mut self, uv: [f32; 2]);
    fn resize_if_needed(&mut self, width: u32, height: u32);
    /// Advance and draw one frame.
    fn render(&mut self, time_sec: f32, strength: f32);
}

/// CSS fallback: exposes the smoothed pointer and strength as custom
/// properties on a fallback layer the stylesheet animates with gradients.
pub struct CssBackend {
    layer: Option<web::HtmlElement>,
    mouse: [f32; 2],
    target: [f32; 2],
}

impl CssBackend {
    pub fn new(document: &web::Document) -> Self {
        let layer = dom::html_element(document, FX_FALLBACK_ID);
        match &layer {
            Some(el) => {
                dom::set_style(el, "--fx-radius", &format!("{:.3}", crate::constants::FX_RADIUS))
            }
            None => log::warn!("[fx] no #{FX_FALLBACK_ID} element; distortion disabled"),
        }
        Self {
            layer,
            mouse: [0.5, 0.5],
            target: [0.5, 0.5],
        }
    }
}

impl EffectBackend for CssBackend {
    fn set_pointer(&mut self, uv: [f32; 2]) {
        self.target = uv;
    }

    fn resize_if_needed(&mut self, _width: u32, _height: u32) {}

    fn render(&mut self, time_sec: f32, strength: f32) {
        let Some(layer) = &self.layer else { return };
        self.mouse[0] += (self.target[0] - self.mouse[0]) * crate::constants::FX_POINTER_SMOOTHING;
        self.mouse[1] += (self.target[1] - self.mouse[1]) * crate::constants::FX_POINTER_SMOOTHING;
        dom::set_style(layer, "--fx-mx", &format!("{:.4}", self.mouse[0]));
        dom::set_style(layer, "--fx-my", &format!("{:.4}", self.mouse[1]));
        dom::set_style(layer, "--fx-time", &format!("{time_sec:.3}"));
        dom::set_style(layer, "--fx-strength", &format!("{strength:.3}"));
    }
}

/// Try the GPU path, fall back to CSS permanently. Never retried.
pub async fn select_backend(document: &web::Document) -> Box<dyn EffectBackend> {
    use wasm_bindgen::JsCast;
    let canvas = document
        .get_element_by_id(FX_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    if let Some(canvas) = canvas {
        dom::sync_canvas_backing_size(&canvas);
        match GpuBackend::new(&canvas).await {
            Ok(gpu) => {
                log::info!("[fx] gpu backend ready");
                return Box::new(gpu);
            }
            Err(e) => {
                log::warn!("[fx] gpu unavailable, using css fallback: {e:?}");
            }
        }
    } else {
        log::info!("[fx] no #{FX_CANVAS_ID} canvas, using css fallback");
    }
    Box::new(CssBackend::new(document))
}
