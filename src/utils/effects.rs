//! Visual effects and wall-clock time backed by the DOM.

use cybervision_core::{Clock, Effect, EffectTrigger};

use super::dom;
use crate::config::{GLITCH_BODY_CLASS, MATRIX_BODY_CLASS};

/// [`EffectTrigger`] that toggles body classes and reloads the page.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomEffects;

impl DomEffects {
    fn add_body_class(class: &str) {
        let Some(body) = dom::body() else {
            log::warn!("no <body>, effect class {} skipped", class);
            return;
        };
        if let Err(e) = body.class_list().add_1(class) {
            log::warn!("failed to add body class {}: {:?}", class, e);
        }
    }
}

impl EffectTrigger for DomEffects {
    fn trigger(&mut self, effect: Effect) {
        log::debug!("effect {}", effect);
        match effect {
            Effect::Glitch => Self::add_body_class(GLITCH_BODY_CLASS),
            Effect::MatrixRain => Self::add_body_class(MATRIX_BODY_CLASS),
            Effect::Reload => dom::reload(),
        }
    }
}

/// [`Clock`] reading the browser's local date and time.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn local_timestamp(&self) -> String {
        js_sys::Date::new_0()
            .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
            .into()
    }
}
