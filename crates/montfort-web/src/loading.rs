use crate::constants::LOADING_OVERLAY_ID;
use crate::dom;
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const OVERLAY_FADE_MS: i32 = 600;

enum ReadyState {
    Pending(Vec<js_sys::Function>),
    Fired,
}

thread_local! {
    static READY: RefCell<ReadyState> = const { RefCell::new(ReadyState::Pending(Vec::new())) };
}

/// Register a host-page callback for the moment the pipeline is live.
/// Fires at most once; registering after that point calls back immediately.
#[wasm_bindgen(js_name = onReady)]
pub fn on_ready(callback: js_sys::Function) {
    READY.with(|r| match &mut *r.borrow_mut() {
        ReadyState::Pending(queue) => queue.push(callback),
        ReadyState::Fired => {
            let _ = callback.call0(&JsValue::NULL);
        }
    });
}

/// Fade out the loading overlay and drain the ready queue.
pub fn mark_ready(document: &web::Document) {
    if let Some(overlay) = dom::html_element(document, LOADING_OVERLAY_ID) {
        dom::set_style(&overlay, "transition", &format!("opacity {OVERLAY_FADE_MS}ms ease"));
        dom::set_style(&overlay, "opacity", "0");
        dom::set_style(&overlay, "pointer-events", "none");
        if let Some(window) = web::window() {
            let remove = Closure::once(move || overlay.remove());
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                remove.as_ref().unchecked_ref(),
                OVERLAY_FADE_MS,
            );
            remove.forget();
        }
    }

    let callbacks = READY.with(|r| {
        match std::mem::replace(&mut *r.borrow_mut(), ReadyState::Fired) {
            ReadyState::Pending(queue) => queue,
            ReadyState::Fired => Vec::new(),
        }
    });
    log::info!("[loading] ready, {} callback(s)", callbacks.len());
    for cb in callbacks {
        if let Err(e) = cb.call0(&JsValue::NULL) {
            log::warn!("[loading] ready callback threw: {e:?}");
        }
    }
}
