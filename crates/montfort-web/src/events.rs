use crate::dom::{self, EventBinding};
use crate::input::trail_jitter;
use montfort_core::{PointerSample, Signal, TrailBuffer};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Latest input, written by listeners and read once per frame. The frame
/// loop never touches raw events; listeners never touch the DOM.
pub struct InputState {
    pub pointer: Signal<PointerSample>,
    pub trail: RefCell<TrailBuffer>,
    /// Layout went stale (resize, fonts settling); remeasure next frame.
    pub layout_dirty: Cell<bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            pointer: Signal::new(PointerSample::default()),
            trail: RefCell::new(TrailBuffer::new()),
            layout_dirty: Cell::new(false),
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Attach pointer and resize listeners. The returned bindings own the
/// registrations; the frame context keeps them alive for the app's life.
pub fn wire_input(state: &Rc<InputState>) -> Vec<EventBinding> {
    let Some(window) = web::window() else {
        return Vec::new();
    };
    let mut bindings = Vec::new();

    let pointer_state = state.clone();
    bindings.push(EventBinding::new(
        &window,
        "pointermove",
        move |event: web::Event| {
            let Ok(ev) = event.dyn_into::<web::PointerEvent>() else {
                return;
            };
            let (vw, vh) = dom::viewport_size();
            let now = dom::now_ms();
            let sample =
                PointerSample::from_client(ev.client_x() as f32, ev.client_y() as f32, vw, vh, now);
            pointer_state.pointer.set(sample);

            let (scale, rotation) = trail_jitter(
                js_sys::Math::random() as f32,
                js_sys::Math::random() as f32,
            );
            pointer_state
                .trail
                .borrow_mut()
                .push(sample.position(), scale, rotation, now);
        },
    ));

    let resize_state = state.clone();
    bindings.push(EventBinding::new(&window, "resize", move |_| {
        resize_state.layout_dirty.set(true);
    }));

    log::info!("[events] input wired");
    bindings
}

/// A failed image keeps its box and gets the placeholder class; the error
/// is terminal for that resource and never propagated.
pub fn wire_image_fallbacks(document: &web::Document) {
    use wasm_bindgen::closure::Closure;
    for img in dom::query_all_html(document, "img") {
        let el = img.clone();
        let closure = Closure::wrap(Box::new(move || {
            let _ = el.class_list().add_1(crate::constants::IMAGE_FALLBACK_CLASS);
        }) as Box<dyn FnMut()>);
        let _ = img.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
