#![cfg(target_arch = "wasm32")]
use brand_core::{run_entrance, EntranceAnimator, ScrollStyler, StyleBounds, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("brand-web starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    dom::when_ready(&window, &document, || {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("init already ran; ignoring");
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::set_manual_scroll_restoration(&window);

    match document
        .query_selector(constants::BRAND_SELECTOR)
        .map_err(|e| anyhow::anyhow!(dom::js_error(&e)))?
    {
        Some(el) => {
            let brand = el
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
            init_brand(&window, &document, brand);
        }
        // audio and scroll restoration do not need .brand; only the scroll effects are skipped
        None => log::info!(
            "no {} element; scroll effects disabled",
            constants::BRAND_SELECTOR
        ),
    }

    audio::wire_background_audio(&document);
    Ok(())
}

fn init_brand(window: &web::Window, document: &web::Document, brand: web::HtmlElement) {
    let bounds =
        StyleBounds::from_lookup(|name| dom::read_custom_property(window, &brand, name));
    log::info!("[style] bounds {:?}", bounds);

    let styler = Rc::new(RefCell::new(ScrollStyler::new(bounds)));
    let mut target = dom::BrandTarget::new(brand, document.clone());
    let viewport = dom::WindowViewport::new(window.clone());

    // initial values before any scrolling
    styler
        .borrow_mut()
        .update(&mut target, viewport.inner_height());

    events::wire_scroll_handlers(window, styler.clone(), target.clone(), viewport.clone());
    run_entrance(
        &frame::BrowserScheduler,
        EntranceAnimator::default(),
        styler,
        target,
        viewport,
    );
}
