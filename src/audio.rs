use crate::constants::AUDIO_ELEMENT_ID;
use crate::dom::js_error;
use brand_core::{
    AudioController, EnvError, MediaElement, PlayButtonHost, PLAY_BUTTON_CLASS, PLAY_BUTTON_LABEL,
    PLAY_BUTTON_TEXT,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Everything the autoplay flow and the fallback button share.
#[derive(Clone)]
struct AudioWiring {
    document: web::Document,
    element: web::HtmlAudioElement,
    controller: Rc<RefCell<AudioController>>,
}

struct AudioMedia(web::HtmlAudioElement);

impl MediaElement for AudioMedia {
    fn set_muted(&mut self, muted: bool) -> Result<(), EnvError> {
        self.0.set_muted(muted);
        Ok(())
    }

    fn set_volume(&mut self, volume: f64) -> Result<(), EnvError> {
        self.0.set_volume(volume);
        Ok(())
    }
}

struct DomPlayButtonHost {
    wiring: AudioWiring,
}

impl DomPlayButtonHost {
    fn existing(&self) -> Option<web::Element> {
        self.wiring
            .document
            .query_selector(&format!(".{PLAY_BUTTON_CLASS}"))
            .ok()
            .flatten()
    }
}

impl PlayButtonHost for DomPlayButtonHost {
    fn has_play_button(&self) -> bool {
        self.existing().is_some()
    }

    fn insert_play_button(&mut self) -> Result<(), EnvError> {
        let dom_err = |e: wasm_bindgen::JsValue| EnvError::Dom(js_error(&e));
        let document = &self.wiring.document;
        let body = document
            .body()
            .ok_or_else(|| EnvError::Dom("no body".into()))?;
        let button = document
            .create_element("button")
            .map_err(dom_err)?
            .dyn_into::<web::HtmlButtonElement>()
            .map_err(|_| EnvError::Dom("not a button".into()))?;
        button.set_class_name(PLAY_BUTTON_CLASS);
        button
            .set_attribute("aria-label", PLAY_BUTTON_LABEL)
            .map_err(dom_err)?;
        button.set_text_content(Some(PLAY_BUTTON_TEXT));

        let wiring = self.wiring.clone();
        let on_click = Closure::wrap(Box::new(move || {
            spawn_local(manual_play(wiring.clone()));
        }) as Box<dyn FnMut()>);
        button
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(dom_err)?;
        on_click.forget();

        body.append_child(&button).map_err(dom_err)?;
        Ok(())
    }

    fn remove_play_button(&mut self) -> Result<(), EnvError> {
        if let Some(el) = self.existing() {
            el.remove();
        }
        Ok(())
    }
}

async fn play(element: &web::HtmlAudioElement) -> Result<(), EnvError> {
    let promise = element
        .play()
        .map_err(|e| EnvError::PlaybackBlocked(js_error(&e)))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| EnvError::PlaybackBlocked(js_error(&e)))
}

async fn manual_play(wiring: AudioWiring) {
    let result = play(&wiring.element).await;
    let mut media = AudioMedia(wiring.element.clone());
    let controller = wiring.controller.clone();
    let mut host = DomPlayButtonHost { wiring };
    controller
        .borrow_mut()
        .on_manual_play_result(result, &mut media, &mut host);
}

/// Start the background track muted, unmute once playing, or fall back to a
/// play button when autoplay is refused.
pub fn wire_background_audio(document: &web::Document) {
    let Some(element) = document
        .get_element_by_id(AUDIO_ELEMENT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok())
    else {
        log::info!("[audio] no #{AUDIO_ELEMENT_ID}; background audio disabled");
        return;
    };

    let wiring = AudioWiring {
        document: document.clone(),
        element,
        controller: Rc::new(RefCell::new(AudioController::default())),
    };
    let mut media = AudioMedia(wiring.element.clone());
    wiring.controller.borrow_mut().prepare(&mut media);

    spawn_local(async move {
        let result = play(&wiring.element).await;
        let controller = wiring.controller.clone();
        let mut host = DomPlayButtonHost { wiring };
        controller
            .borrow_mut()
            .on_autoplay_result(result, &mut media, &mut host);
    });
}
