use crate::dom::{js_error, BrandTarget, WindowViewport};
use crate::frame::BrowserScheduler;
use brand_core::{observe_scroll_event, ScrollStyler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed scroll and resize events into the styler, at most one update per
/// animation frame.
pub fn wire_scroll_handlers(
    window: &web::Window,
    styler: Rc<RefCell<ScrollStyler>>,
    target: BrandTarget,
    viewport: WindowViewport,
) {
    let on_scroll = {
        let styler = styler.clone();
        let target = target.clone();
        let viewport = viewport.clone();
        Closure::wrap(Box::new(move || {
            observe_scroll_event(&BrowserScheduler, &styler, &target, &viewport);
        }) as Box<dyn FnMut()>)
    };
    let passive = web::AddEventListenerOptions::new();
    passive.set_passive(true);
    if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        on_scroll.as_ref().unchecked_ref(),
        &passive,
    ) {
        log::warn!("scroll listener failed: {}", js_error(&e));
    }
    on_scroll.forget();

    let on_resize = Closure::wrap(Box::new(move || {
        observe_scroll_event(&BrowserScheduler, &styler, &target, &viewport);
    }) as Box<dyn FnMut()>);
    if let Err(e) =
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
    {
        log::warn!("resize listener failed: {}", js_error(&e));
    }
    on_resize.forget();
}
