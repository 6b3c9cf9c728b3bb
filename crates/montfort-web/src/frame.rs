use crate::constants::FX_STRENGTH;
use crate::cursor::CursorLayers;
use crate::dom::{self, EventBinding};
use crate::effects::EffectBackend;
use crate::events::InputState;
use crate::input::pointer_speed;
use crate::sections::Sections;
use montfort_core::{FrameScheduler, ScrollSample};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation frame touches, in the order it touches it:
/// read inputs, remeasure if layout went stale, advance springs, write
/// section transforms, place the cursor, draw the distortion layer.
pub struct FrameContext {
    input: Rc<InputState>,
    scheduler: Rc<RefCell<FrameScheduler>>,
    sections: Sections,
    cursor: Option<CursorLayers>,
    backend: Box<dyn EffectBackend>,
    canvas: Option<web::HtmlCanvasElement>,
    _bindings: Vec<EventBinding>,
    start_ms: f64,
    last_ms: f64,
    prev_uv: [f32; 2],
}

impl FrameContext {
    pub fn new(
        input: Rc<InputState>,
        scheduler: Rc<RefCell<FrameScheduler>>,
        sections: Sections,
        cursor: Option<CursorLayers>,
        backend: Box<dyn EffectBackend>,
        canvas: Option<web::HtmlCanvasElement>,
        bindings: Vec<EventBinding>,
    ) -> Self {
        let now = dom::now_ms();
        Self {
            input,
            scheduler,
            sections,
            cursor,
            backend,
            canvas,
            _bindings: bindings,
            start_ms: now,
            last_ms: now,
            prev_uv: [0.5, 0.5],
        }
    }

    pub fn frame(&mut self) {
        let now = dom::now_ms();
        // Scheduler clamps dt internally, so a backgrounded tab resuming
        // after seconds does not slingshot the springs.
        let dt_sec = ((now - self.last_ms) / 1000.0).max(0.0) as f32;
        self.last_ms = now;

        if self.input.layout_dirty.replace(false) {
            self.sections.remeasure();
            if let Some(canvas) = &self.canvas {
                dom::sync_canvas_backing_size(canvas);
                self.backend.resize_if_needed(canvas.width(), canvas.height());
            }
        }

        let pointer = self.input.pointer.get();
        let (_, viewport_h) = dom::viewport_size();
        let scroll = ScrollSample::new(dom::scroll_y(), viewport_h);

        if let Some(cursor) = &mut self.cursor {
            // Default samples (no movement yet) would drag the cursor to
            // the viewport center, so they are skipped.
            if pointer.timestamp_ms > 0.0 {
                cursor.track(&pointer);
            }
        }

        self.scheduler.borrow_mut().tick(dt_sec);
        self.sections.update(scroll);

        {
            let mut trail = self.input.trail.borrow_mut();
            trail.prune(now);
            if let Some(cursor) = &mut self.cursor {
                cursor.apply(&trail, now);
            }
        }

        let uv = pointer.uv();
        let speed = pointer_speed(self.prev_uv, uv, dt_sec);
        self.prev_uv = uv;
        self.backend.set_pointer(uv);
        let strength = (FX_STRENGTH + speed * 0.15).min(1.0);
        let time_sec = ((now - self.start_ms) / 1000.0) as f32;
        self.backend.render(time_sec, strength);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
