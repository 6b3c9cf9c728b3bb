use crate::constants::{MUSIC_TOGGLE_ID, MUSIC_URL, MUSIC_VOLUME};
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Looping ambient music bed.
///
/// Autoplay rejection is the expected case, not an error: playback simply
/// waits for the first user gesture and tries again. The mute toggle pauses
/// outright rather than zeroing the volume.
pub struct MusicPlayer {
    audio: web::HtmlAudioElement,
    muted: Rc<Cell<bool>>,
    playing: Rc<Cell<bool>>,
}

impl MusicPlayer {
    pub fn new() -> Option<Self> {
        let audio = match web::HtmlAudioElement::new_with_src(MUSIC_URL) {
            Ok(a) => a,
            Err(e) => {
                log::warn!("[audio] element creation failed: {e:?}");
                return None;
            }
        };
        audio.set_loop(true);
        audio.set_volume(MUSIC_VOLUME);
        Some(Self {
            audio,
            muted: Rc::new(Cell::new(false)),
            playing: Rc::new(Cell::new(false)),
        })
    }

    fn try_play(&self) {
        if self.muted.get() || self.playing.get() {
            return;
        }
        let promise = match self.audio.play() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[audio] play() failed: {e:?}");
                return;
            }
        };
        let playing = self.playing.clone();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => {
                    playing.set(true);
                    log::info!("[audio] playing");
                }
                Err(_) => {
                    // Blocked by the autoplay policy; a later gesture retries.
                    log::info!("[audio] autoplay blocked, waiting for gesture");
                }
            }
        });
    }

    pub fn toggle_mute(&self) {
        let muted = !self.muted.get();
        self.muted.set(muted);
        if muted {
            if let Err(e) = self.audio.pause() {
                log::warn!("[audio] pause failed: {e:?}");
            }
            self.playing.set(false);
            log::info!("[audio] muted");
        } else {
            self.try_play();
        }
    }

    /// Attempt autoplay now and again on the first gesture of each kind.
    pub fn wire(self: &Rc<Self>, document: &web::Document) {
        self.try_play();

        if let Some(window) = web::window() {
            for event in ["click", "keydown", "touchstart", "scroll"] {
                let player = self.clone();
                let closure = Closure::wrap(Box::new(move || {
                    if !player.playing.get() {
                        player.try_play();
                    }
                }) as Box<dyn FnMut()>);
                let _ = window
                    .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        let player = self.clone();
        dom::add_click_listener(document, MUSIC_TOGGLE_ID, move || {
            player.toggle_mute();
        });
    }
}
