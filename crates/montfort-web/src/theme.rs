use crate::constants::{DARK_CLASS, THEME_STORAGE_KEY, THEME_TOGGLE_ID};
use crate::dom;
use montfort_core::Theme;
use web_sys as web;

fn storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

fn prefers_dark() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        // No media query support: the site's default look is dark.
        .unwrap_or(true)
}

/// Saved preference, falling back to the OS scheme.
pub fn load_theme() -> Theme {
    let saved = storage()
        .and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|v| Theme::parse(&v));
    match saved {
        Some(t) => t,
        None => {
            if prefers_dark() {
                Theme::Dark
            } else {
                Theme::Light
            }
        }
    }
}

pub fn apply_theme(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        let result = if theme.is_dark() {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        if let Err(e) = result {
            log::warn!("[theme] class toggle failed: {e:?}");
        }
    }
}

/// Flip, persist, and apply. Persisting twice returns to the original
/// stored value, so the toggle is idempotent over pairs.
pub fn toggle_theme(document: &web::Document) -> Theme {
    let next = load_theme().toggled();
    if let Some(s) = storage() {
        if let Err(e) = s.set_item(THEME_STORAGE_KEY, next.as_str()) {
            log::warn!("[theme] persist failed: {e:?}");
        }
    }
    apply_theme(document, next);
    log::info!("[theme] switched to {}", next.as_str());
    next
}

/// Read the stored preference once at startup, apply it, and wire the
/// toggle button.
pub fn init_theme(document: &web::Document) {
    apply_theme(document, load_theme());
    let doc = document.clone();
    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        toggle_theme(&doc);
    });
}
