use crate::dom::js_error;
use brand_core::{EnvError, FrameCallback, Scheduler, TimerCallback};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Animation frames and timers from the page's window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

fn no_window() -> EnvError {
    EnvError::Dom("no window".into())
}

impl Scheduler for BrowserScheduler {
    fn request_frame(&self, f: FrameCallback) -> Result<(), EnvError> {
        let window = web::window().ok_or_else(no_window)?;
        let callback = Closure::once_into_js(move |ts: f64| f(ts));
        window
            .request_animation_frame(callback.unchecked_ref())
            .map(|_| ())
            .map_err(|e| EnvError::Dom(js_error(&e)))
    }

    fn set_timeout(&self, delay_ms: i32, f: TimerCallback) -> Result<(), EnvError> {
        let window = web::window().ok_or_else(no_window)?;
        let callback = Closure::once_into_js(move || f());
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
            .map(|_| ())
            .map_err(|e| EnvError::Dom(js_error(&e)))
    }
}
