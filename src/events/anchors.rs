use crate::constants::ANCHOR_SCROLL_OFFSET_PX;
use crate::dom::EventListener;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Document-wide handler that turns `<a href="#id">` clicks into a scroll to
/// the target, leaving room for the fixed nav bar. `smooth = false` jumps
/// instead (reduced motion).
pub fn wire_anchor_links(document: &web::Document, smooth: bool) -> anyhow::Result<EventListener> {
    let doc = document.clone();
    EventListener::new(document, "click", move |ev: web::Event| {
        let Some(anchor) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten())
        else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        let Some(target) = input::anchor_target_id(&href).and_then(|id| doc.get_element_by_id(id))
        else {
            return;
        };
        ev.prevent_default();
        scroll_to_element(&target, smooth);
    })
}

fn scroll_to_element(target: &web::Element, smooth: bool) {
    let Some(w) = web::window() else {
        return;
    };
    let scroll_y = w.scroll_y().unwrap_or(0.0);
    let top = input::anchor_scroll_top(
        target.get_bounding_client_rect().top(),
        scroll_y,
        ANCHOR_SCROLL_OFFSET_PX,
    );
    let opts = web::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(if smooth {
        web::ScrollBehavior::Smooth
    } else {
        web::ScrollBehavior::Auto
    });
    w.scroll_to_with_scroll_to_options(&opts);
}
