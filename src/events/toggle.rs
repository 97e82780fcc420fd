use crate::constants::TOGGLE_OFF_CLASS;
use crate::dom::EventListener;
use crate::frame::SplashState;
use crate::input::SplashToggle;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Mirror the toggle state onto the button's label, tooltip and class.
pub fn apply_toggle_state(button: &web::Element, toggle: SplashToggle) {
    _ = button.set_attribute("aria-label", toggle.aria_label());
    _ = button.set_attribute("title", toggle.title());
    _ = button.set_attribute("aria-pressed", if toggle.enabled { "true" } else { "false" });
    let cl = button.class_list();
    if toggle.enabled {
        _ = cl.remove_1(TOGGLE_OFF_CLASS);
    } else {
        _ = cl.add_1(TOGGLE_OFF_CLASS);
    }
}

pub fn wire_toggle(
    button: &web::Element,
    state: &Rc<RefCell<SplashState>>,
) -> anyhow::Result<EventListener> {
    let state = state.clone();
    let button_el = button.clone();
    EventListener::new(button, "click", move |ev: web::Event| {
        // The toggle's own click must not reach the window splash listener.
        ev.stop_propagation();
        let toggle = {
            let mut st = state.borrow_mut();
            st.toggle.flip();
            st.toggle
        };
        apply_toggle_state(&button_el, toggle);
        log::info!("[toggle] splashes {}", if toggle.enabled { "on" } else { "off" });
    })
}
