use crate::constants::{
    CURSOR_GLOW_SIZE, CURSOR_GLOW_SIZE_HOVER, CURSOR_HALO_SIZE, CURSOR_HALO_SIZE_HOVER,
    CURSOR_HOVER_SELECTOR, TRAIL_SHAPE_SIZE,
};
use crate::dom;
use montfort_core::{
    FrameScheduler, PointerSample, Spring, SpringHandle, TrailBuffer, CURSOR_FAST_DAMPING,
    CURSOR_FAST_STIFFNESS, CURSOR_SLOW_DAMPING, CURSOR_SLOW_STIFFNESS, TRAIL_CAPACITY,
    TRAIL_LIFETIME_MS,
};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The liquid cursor: a fast glow and a slower halo, each following the
/// pointer through its own spring pair, plus a pool of morphing trail
/// shapes. All springs live in the shared frame scheduler; dropping the
/// layers unregisters them.
pub struct CursorLayers {
    glow: web::HtmlElement,
    halo: web::HtmlElement,
    trail_pool: Vec<web::HtmlElement>,
    glow_x: SpringHandle,
    glow_y: SpringHandle,
    halo_x: SpringHandle,
    halo_y: SpringHandle,
    hovering: Rc<Cell<bool>>,
    scheduler: Rc<std::cell::RefCell<FrameScheduler>>,
    initialized: bool,
}

fn make_layer(document: &web::Document, z_index: &str, blur_px: f32) -> Option<web::HtmlElement> {
    let el = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    dom::set_style(&el, "position", "fixed");
    dom::set_style(&el, "pointer-events", "none");
    dom::set_style(&el, "z-index", z_index);
    dom::set_style(&el, "border-radius", "50%");
    dom::set_style(&el, "filter", &format!("blur({blur_px}px)"));
    dom::set_style(&el, "will-change", "transform");
    document.body()?.append_child(&el).ok()?;
    Some(el)
}

impl CursorLayers {
    pub fn new(
        document: &web::Document,
        scheduler: Rc<std::cell::RefCell<FrameScheduler>>,
    ) -> Option<Self> {
        let glow = make_layer(document, "9999", 20.0)?;
        dom::set_style(&glow, "mix-blend-mode", "screen");
        dom::set_style(
            &glow,
            "background",
            "radial-gradient(circle, hsl(205 60% 60% / 0.4) 0%, transparent 70%)",
        );
        let halo = make_layer(document, "9998", 30.0)?;
        dom::set_style(
            &halo,
            "background",
            "radial-gradient(circle, hsl(205 52% 36% / 0.15) 0%, transparent 60%)",
        );

        let mut trail_pool = Vec::with_capacity(TRAIL_CAPACITY);
        for i in 0..TRAIL_CAPACITY {
            let shape = make_layer(document, "9997", 3.0)?;
            dom::set_style(&shape, "width", &format!("{TRAIL_SHAPE_SIZE}px"));
            dom::set_style(&shape, "height", &format!("{TRAIL_SHAPE_SIZE}px"));
            dom::set_style(
                &shape,
                "background",
                &format!(
                    "radial-gradient(circle, hsl({} 70% 60% / 0.35) 0%, transparent 70%)",
                    180 + i * 8
                ),
            );
            dom::set_style(&shape, "opacity", "0");
            trail_pool.push(shape);
        }

        let hovering = Rc::new(Cell::new(false));
        wire_hover_listeners(document, hovering.clone());

        let (glow_x, glow_y, halo_x, halo_y) = {
            let mut sched = scheduler.borrow_mut();
            (
                sched.register(Spring::new(0.0, CURSOR_FAST_STIFFNESS, CURSOR_FAST_DAMPING)),
                sched.register(Spring::new(0.0, CURSOR_FAST_STIFFNESS, CURSOR_FAST_DAMPING)),
                sched.register(Spring::new(0.0, CURSOR_SLOW_STIFFNESS, CURSOR_SLOW_DAMPING)),
                sched.register(Spring::new(0.0, CURSOR_SLOW_STIFFNESS, CURSOR_SLOW_DAMPING)),
            )
        };

        Some(Self {
            glow,
            halo,
            trail_pool,
            glow_x,
            glow_y,
            halo_x,
            halo_y,
            hovering,
            scheduler,
            initialized: false,
        })
    }

    /// Feed the latest pointer sample. The first real sample snaps the
    /// springs so the cursor does not fly in from the corner.
    pub fn track(&mut self, pointer: &PointerSample) {
        let mut sched = self.scheduler.borrow_mut();
        if !self.initialized {
            sched.reset_to(self.glow_x, pointer.x);
            sched.reset_to(self.glow_y, pointer.y);
            sched.reset_to(self.halo_x, pointer.x);
            sched.reset_to(self.halo_y, pointer.y);
            self.initialized = true;
            return;
        }
        sched.set_target(self.glow_x, pointer.x);
        sched.set_target(self.glow_y, pointer.y);
        sched.set_target(self.halo_x, pointer.x);
        sched.set_target(self.halo_y, pointer.y);
    }

    /// Write this frame's cursor and trail styles. Springs have already
    /// been ticked by the scheduler.
    pub fn apply(&mut self, trail: &TrailBuffer, now_ms: f64) {
        let sched = self.scheduler.borrow();
        let hover = self.hovering.get();

        let (glow_size, halo_size) = if hover {
            (CURSOR_GLOW_SIZE_HOVER, CURSOR_HALO_SIZE_HOVER)
        } else {
            (CURSOR_GLOW_SIZE, CURSOR_HALO_SIZE)
        };
        place_centered(
            &self.glow,
            sched.value(self.glow_x).unwrap_or(0.0),
            sched.value(self.glow_y).unwrap_or(0.0),
            glow_size,
        );
        place_centered(
            &self.halo,
            sched.value(self.halo_x).unwrap_or(0.0),
            sched.value(self.halo_y).unwrap_or(0.0),
            halo_size,
        );
        drop(sched);

        let mut used = 0;
        for (slot, point) in self.trail_pool.iter().zip(trail.iter()) {
            let age = ((now_ms - point.created_at_ms) / TRAIL_LIFETIME_MS).clamp(0.0, 1.0) as f32;
            let scale = point.scale * if hover { 1.5 } else { 1.0 };
            dom::set_style(
                slot,
                "transform",
                &format!(
                    "translate3d({:.1}px, {:.1}px, 0) translate(-50%, -50%) rotate({:.0}deg) scale({:.3})",
                    point.pos.x, point.pos.y, point.rotation_deg, scale
                ),
            );
            dom::set_style(slot, "opacity", &format!("{:.3}", 0.6 * (1.0 - age)));
            used += 1;
        }
        for slot in self.trail_pool.iter().skip(used) {
            dom::set_style(slot, "opacity", "0");
        }
    }
}

impl Drop for CursorLayers {
    fn drop(&mut self) {
        let mut sched = self.scheduler.borrow_mut();
        sched.unregister(self.glow_x);
        sched.unregister(self.glow_y);
        sched.unregister(self.halo_x);
        sched.unregister(self.halo_y);
        self.glow.remove();
        self.halo.remove();
        for slot in &self.trail_pool {
            slot.remove();
        }
    }
}

fn place_centered(el: &web::HtmlElement, x: f32, y: f32, size: f32) {
    dom::set_style(el, "width", &format!("{size:.0}px"));
    dom::set_style(el, "height", &format!("{size:.0}px"));
    dom::set_style(
        el,
        "transform",
        &format!("translate3d({x:.1}px, {y:.1}px, 0) translate(-50%, -50%)"),
    );
}

/// Interactive elements grow the cursor on hover. These listeners live for
/// the page's lifetime, so they are forgotten rather than bound.
fn wire_hover_listeners(document: &web::Document, hovering: Rc<Cell<bool>>) {
    for el in dom::query_all_html(document, CURSOR_HOVER_SELECTOR) {
        let enter_flag = hovering.clone();
        let enter = Closure::wrap(Box::new(move || enter_flag.set(true)) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        enter.forget();

        let leave_flag = hovering.clone();
        let leave = Closure::wrap(Box::new(move || leave_flag.set(false)) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        leave.forget();
    }
}
