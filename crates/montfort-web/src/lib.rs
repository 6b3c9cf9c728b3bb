#![cfg(target_arch = "wasm32")]
//! Browser shell for the montfort scroll and pointer animation pipeline.
//!
//! All per-frame math lives in `montfort-core`; this crate owns the DOM,
//! the event listeners, the WebGPU distortion layer, and the
//! requestAnimationFrame loop that ties them together.

mod audio;
mod constants;
mod cursor;
mod dom;
mod effects;
mod events;
mod frame;
mod input;
mod loading;
mod render;
mod sections;
mod theme;

pub use loading::on_ready;

use crate::audio::MusicPlayer;
use crate::cursor::CursorLayers;
use crate::events::InputState;
use crate::frame::FrameContext;
use crate::sections::Sections;
use montfort_core::FrameScheduler;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[init] montfort-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("[init] error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    theme::init_theme(&document);
    events::wire_image_fallbacks(&document);

    let scheduler = Rc::new(RefCell::new(FrameScheduler::new()));
    let input = Rc::new(InputState::new());
    let bindings = events::wire_input(&input);

    let sections = Sections::measure(&document);
    let cursor = CursorLayers::new(&document, scheduler.clone());
    if cursor.is_none() {
        log::warn!("[init] cursor layers unavailable");
    }

    let canvas = document
        .get_element_by_id(constants::FX_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    let backend = effects::select_backend(&document).await;

    if let Some(music) = MusicPlayer::new().map(Rc::new) {
        music.wire(&document);
    }

    let ctx = Rc::new(RefCell::new(FrameContext::new(
        input.clone(),
        scheduler,
        sections,
        cursor,
        backend,
        canvas,
        bindings,
    )));
    frame::start_loop(ctx);

    loading::mark_ready(&document);
    // Overlay removal and font settling shift the layout under the
    // measured ranges; the first frame after ready remeasures.
    input.layout_dirty.set(true);

    log::info!("[init] pipeline running");
    Ok(())
}
