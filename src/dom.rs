use brand_core::{EnvError, RenderTarget, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_error(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Run `f` now if the document has been parsed, otherwise once on
/// `DOMContentLoaded`.
pub fn when_ready(window: &web::Window, document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    let options = web::AddEventListenerOptions::new();
    options.set_once(true);
    if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        callback.unchecked_ref(),
        &options,
    ) {
        log::error!("DOMContentLoaded listener failed: {}", js_error(&e));
    }
}

/// Keep the browser from restoring an old offset over the entrance glide.
pub fn set_manual_scroll_restoration(window: &web::Window) {
    match window.history() {
        Ok(history) => {
            if let Err(e) = history.set_scroll_restoration(web::ScrollRestoration::Manual) {
                log::debug!("scrollRestoration unavailable: {}", js_error(&e));
            }
        }
        Err(e) => log::debug!("history unavailable: {}", js_error(&e)),
    }
}

pub fn read_custom_property(window: &web::Window, el: &web::Element, name: &str) -> Option<String> {
    let style = window.get_computed_style(el).ok().flatten()?;
    style.get_property_value(name).ok()
}

/// The `.brand` heading plus the body that carries the reveal class.
#[derive(Clone)]
pub struct BrandTarget {
    brand: web::HtmlElement,
    document: web::Document,
}

impl BrandTarget {
    pub fn new(brand: web::HtmlElement, document: web::Document) -> Self {
        Self { brand, document }
    }
}

impl RenderTarget for BrandTarget {
    fn set_custom_property(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        self.brand
            .style()
            .set_property(name, value)
            .map_err(|e| EnvError::Dom(js_error(&e)))
    }

    fn set_class_active(&mut self, name: &str, active: bool) -> Result<(), EnvError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| EnvError::Dom("no body".into()))?;
        body.class_list()
            .toggle_with_force(name, active)
            .map(|_| ())
            .map_err(|e| EnvError::Dom(js_error(&e)))
    }
}

#[derive(Clone)]
pub struct WindowViewport {
    window: web::Window,
}

impl WindowViewport {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl Viewport for WindowViewport {
    fn inner_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_height(&self) -> f64 {
        self.window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    // Called through Reflect so a sandboxed page that throws from scrollTo
    // surfaces as an error instead of a trap.
    fn scroll_to(&mut self, y: f64) -> Result<(), EnvError> {
        let scroll_to = js_sys::Reflect::get(&self.window, &JsValue::from_str("scrollTo"))
            .map_err(|e| EnvError::ScrollRestricted(js_error(&e)))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| EnvError::ScrollRestricted("scrollTo is not callable".into()))?;
        scroll_to
            .call2(&self.window, &JsValue::from_f64(0.0), &JsValue::from_f64(y))
            .map(|_| ())
            .map_err(|e| EnvError::ScrollRestricted(js_error(&e)))
    }
}
