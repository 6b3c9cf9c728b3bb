use crate::constants::{
    GALLERY_ITEM_CONTENT_SELECTOR, GALLERY_ITEM_SELECTOR, GALLERY_SECTION_ID,
    GALLERY_STRIP_SELECTOR, PARALLAX_BACKGROUND_SELECTOR, PARALLAX_BG_SPEED_ATTR,
    PARALLAX_CONTENT_SELECTOR, PARALLAX_CONTENT_SPEED_ATTR, PARALLAX_SECTION_SELECTOR,
    PINNED_SECTION_SELECTOR, PIN_BACKGROUND_SELECTOR, PIN_CONTENT_SELECTOR, PIN_DISTANCE_ATTR,
};
use crate::dom;
use montfort_core::{
    pin_range, view_range, HorizontalMapper, ItemBounds, ParallaxParams, ParallaxTracks,
    PinController, PinPhase, PinTransforms, ScrollSample,
};
use web_sys as web;

/// A section that locks to the viewport for part of the scroll range.
struct PinnedSectionView {
    section: web::HtmlElement,
    content: web::HtmlElement,
    background: Option<web::HtmlElement>,
    controller: PinController,
    pin_distance: f32,
}

/// A section whose background and content counter-scroll.
struct ParallaxSectionView {
    background: Option<web::HtmlElement>,
    content: Option<web::HtmlElement>,
    tracks: ParallaxTracks,
    range: montfort_core::SectionRange,
    element: web::HtmlElement,
}

struct GalleryItemView {
    item: web::HtmlElement,
    content: Option<web::HtmlElement>,
    bounds: ItemBounds,
}

/// The horizontal gallery: a pinned section whose strip translates
/// sideways as the page scrolls through its range.
struct GalleryView {
    section: web::HtmlElement,
    strip: web::HtmlElement,
    items: Vec<GalleryItemView>,
    mapper: HorizontalMapper,
    controller: PinController,
}

/// All scroll-reactive sections, measured from the live layout. Ranges go
/// stale when layout shifts; `remeasure` rebuilds them from scratch.
pub struct Sections {
    pinned: Vec<PinnedSectionView>,
    parallax: Vec<ParallaxSectionView>,
    gallery: Option<GalleryView>,
}

fn attr_f32(el: &web::HtmlElement, name: &str) -> Option<f32> {
    el.get_attribute(name).and_then(|v| v.parse::<f32>().ok())
}

fn doc_top(el: &web::HtmlElement, scroll_y: f32) -> f32 {
    el.get_bounding_client_rect().top() as f32 + scroll_y
}

impl Sections {
    pub fn measure(document: &web::Document) -> Self {
        let scroll_y = dom::scroll_y();
        let (viewport_w, viewport_h) = dom::viewport_size();

        let mut pinned = Vec::new();
        for section in dom::query_all_html(document, PINNED_SECTION_SELECTOR) {
            let Some(content) = dom::query_html(&section, PIN_CONTENT_SELECTOR) else {
                log::warn!("[sections] pinned section without {PIN_CONTENT_SELECTOR}, skipping");
                continue;
            };
            let background = dom::query_html(&section, PIN_BACKGROUND_SELECTOR);
            let pin_distance = attr_f32(&section, PIN_DISTANCE_ATTR).unwrap_or(viewport_h);
            let top = doc_top(&section, scroll_y);
            // The section itself becomes the scroll spacer while its content
            // is pinned.
            dom::set_style(&section, "height", &format!("{}px", viewport_h + pin_distance));
            dom::set_style(&section, "position", "relative");
            apply_pin_position(&content, PinPhase::Before, pin_distance);
            pinned.push(PinnedSectionView {
                section,
                content,
                background,
                controller: PinController::new(pin_range(top, pin_distance)),
                pin_distance,
            });
        }

        let mut parallax = Vec::new();
        for element in dom::query_all_html(document, PARALLAX_SECTION_SELECTOR) {
            let params = ParallaxParams {
                background_speed: attr_f32(&element, PARALLAX_BG_SPEED_ATTR)
                    .unwrap_or(montfort_core::PARALLAX_BACKGROUND_SPEED),
                content_speed: attr_f32(&element, PARALLAX_CONTENT_SPEED_ATTR)
                    .unwrap_or(montfort_core::PARALLAX_CONTENT_SPEED),
                zoom: true,
            };
            let top = doc_top(&element, scroll_y);
            let height = element.get_bounding_client_rect().height() as f32;
            parallax.push(ParallaxSectionView {
                background: dom::query_html(&element, PARALLAX_BACKGROUND_SELECTOR),
                content: dom::query_html(&element, PARALLAX_CONTENT_SELECTOR),
                tracks: ParallaxTracks::new(params),
                range: view_range(top, height, viewport_h),
                element,
            });
        }

        let gallery = dom::html_element(document, GALLERY_SECTION_ID).and_then(|section| {
            let strip = dom::query_html(&section, GALLERY_STRIP_SELECTOR)?;
            let content_width = strip.scroll_width() as f32;
            let mapper = HorizontalMapper::new(content_width, viewport_w);
            let mut items = Vec::new();
            for item in dom::query_all_html(document, GALLERY_ITEM_SELECTOR) {
                let bounds = ItemBounds {
                    left: item.offset_left() as f32,
                    width: item.offset_width() as f32,
                };
                let content = dom::query_html(&item, GALLERY_ITEM_CONTENT_SELECTOR);
                items.push(GalleryItemView {
                    item,
                    content,
                    bounds,
                });
            }
            let top = doc_top(&section, scroll_y);
            let overflow = mapper.overflow();
            dom::set_style(&section, "height", &format!("{}px", viewport_h + overflow));
            dom::set_style(&section, "position", "relative");
            apply_pin_position(&strip, PinPhase::Before, overflow);
            Some(GalleryView {
                section,
                strip,
                items,
                mapper,
                controller: PinController::new(pin_range(top, overflow)),
            })
        });

        log::info!(
            "[sections] measured: {} pinned, {} parallax, gallery={}",
            pinned.len(),
            parallax.len(),
            gallery.is_some()
        );
        Self {
            pinned,
            parallax,
            gallery,
        }
    }

    /// Re-derive every range from the current layout, keeping the existing
    /// controllers' phases so fixed positioning is released cleanly.
    pub fn remeasure(&mut self) {
        let scroll_y = dom::scroll_y();
        let (viewport_w, viewport_h) = dom::viewport_size();
        for p in &mut self.pinned {
            let top = doc_top(&p.section, scroll_y);
            // While pinned, the section top already accounts for the spacer.
            p.controller.set_range(pin_range(top, p.pin_distance));
        }
        for p in &mut self.parallax {
            let top = doc_top(&p.element, scroll_y);
            let height = p.element.get_bounding_client_rect().height() as f32;
            p.range = view_range(top, height, viewport_h);
        }
        if let Some(g) = &mut self.gallery {
            g.mapper = HorizontalMapper::new(g.strip.scroll_width() as f32, viewport_w);
            let top = doc_top(&g.section, scroll_y);
            g.controller.set_range(pin_range(top, g.mapper.overflow()));
            for it in &mut g.items {
                it.bounds = ItemBounds {
                    left: it.item.offset_left() as f32,
                    width: it.item.offset_width() as f32,
                };
            }
        }
    }

    pub fn update(&mut self, scroll: ScrollSample) {
        for p in &mut self.pinned {
            let u = p.controller.update(scroll.scroll_y);
            if u.phase_changed {
                apply_pin_position(&p.content, u.phase, p.pin_distance);
            }
            let t = PinTransforms::at(u.progress);
            dom::set_style(&p.content, "transform", &format!("scale({:.4})", t.content_scale));
            dom::set_style(&p.content, "opacity", &format!("{:.4}", t.content_opacity));
            if let Some(bg) = &p.background {
                dom::set_style(bg, "transform", &format!("scale({:.4})", t.background_scale));
            }
        }

        for p in &mut self.parallax {
            let t = p.tracks.at(p.range.progress(scroll.scroll_y));
            if let Some(bg) = &p.background {
                dom::set_style(
                    bg,
                    "transform",
                    &format!(
                        "translateY({:.2}%) scale({:.4})",
                        t.background_y_percent, t.background_scale
                    ),
                );
            }
            if let Some(content) = &p.content {
                dom::set_style(
                    content,
                    "transform",
                    &format!("translateY({:.2}px)", t.content_y_px),
                );
                dom::set_style(content, "opacity", &format!("{:.4}", t.content_opacity));
            }
        }

        if let Some(g) = &mut self.gallery {
            let u = g.controller.update(scroll.scroll_y);
            if u.phase_changed {
                apply_pin_position(&g.strip, u.phase, g.mapper.overflow());
            }
            let tx = g.mapper.translate_x(u.progress);
            dom::set_style(&g.strip, "transform", &format!("translateX({tx:.2}px)"));
            for it in &g.items {
                let e = g.mapper.item_emphasis(it.bounds, tx);
                dom::set_style(&it.item, "transform", &format!("scale({:.4})", e.scale));
                if let Some(content) = &it.content {
                    dom::set_style(
                        content,
                        "transform",
                        &format!("translateY({:.2}px)", e.lift_y),
                    );
                    dom::set_style(content, "opacity", &format!("{:.4}", e.opacity));
                }
            }
        }
    }
}

/// Fixed positioning is only touched on phase transitions; progress-driven
/// transforms are written every frame.
fn apply_pin_position(el: &web::HtmlElement, phase: PinPhase, pin_distance: f32) {
    match phase {
        PinPhase::Before => {
            dom::set_style(el, "position", "absolute");
            dom::set_style(el, "top", "0");
            dom::set_style(el, "left", "0");
            dom::set_style(el, "right", "0");
        }
        PinPhase::Pinned => {
            dom::set_style(el, "position", "fixed");
            dom::set_style(el, "top", "0");
            dom::set_style(el, "left", "0");
            dom::set_style(el, "right", "0");
        }
        PinPhase::After => {
            dom::set_style(el, "position", "absolute");
            dom::set_style(el, "top", &format!("{pin_distance:.0}px"));
            dom::set_style(el, "left", "0");
            dom::set_style(el, "right", "0");
        }
    }
}
