//! Browser bindings
//!
//! `WebGame` wraps a `GameDriver` backed by LocalStorage. The page calls
//! `frame` from requestAnimationFrame and forwards keys and column taps.
//! Tab visibility and window focus are watched here and feed the `Hidden`
//! pause source.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::driver::{GameDriver, PauseSource};
use crate::input::{InputAction, Key};
use crate::kana::CharacterSet;
use crate::persistence::LocalStorage;
use crate::sim::SpeedSetting;

type SharedDriver = Rc<RefCell<GameDriver<LocalStorage>>>;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Kana Drop (wasm) loaded");
}

#[wasm_bindgen]
pub struct WebGame {
    driver: SharedDriver,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        let seed = js_sys::Date::now() as u64;
        let driver = Rc::new(RefCell::new(GameDriver::new(LocalStorage::new(), seed)));
        watch_visibility(driver.clone());
        log::info!("Game created with seed {}", seed);
        WebGame { driver }
    }

    pub fn start(&self, now_ms: f64) {
        self.driver.borrow_mut().start(now_ms);
    }

    pub fn stop(&self) {
        self.driver.borrow_mut().stop();
    }

    /// Returns "correct", "wrong" or "round_complete" on the landing frame
    pub fn frame(&self, now_ms: f64) -> Option<String> {
        let event = self.driver.borrow_mut().frame(now_ms)?;
        let kind = if event.round_complete {
            "round_complete"
        } else if event.is_correct {
            "correct"
        } else {
            "wrong"
        };
        Some(kind.to_string())
    }

    /// `KeyboardEvent.key`; true if the key was used (caller prevents default)
    pub fn key(&self, name: &str) -> bool {
        let Some(key) = Key::from_key_name(name) else {
            return false;
        };
        self.driver.borrow_mut().key(key) != InputAction::Ignored
    }

    pub fn column_click(&self, index: usize) -> bool {
        self.driver.borrow_mut().column_click(index) != InputAction::Ignored
    }

    pub fn toggle_pause(&self) {
        self.driver
            .borrow_mut()
            .toggle_pause_source(PauseSource::Manual);
    }

    pub fn set_settings_open(&self, open: bool) {
        self.driver
            .borrow_mut()
            .set_pause_source(PauseSource::SettingsOpen, open);
    }

    pub fn set_help_open(&self, open: bool) {
        self.driver
            .borrow_mut()
            .set_pause_source(PauseSource::HelpOpen, open);
    }

    pub fn set_level(&self, level: u32) {
        self.driver.borrow_mut().set_level(level);
    }

    /// "hiragana", "katakana" or "both"
    pub fn set_writing_system(&self, name: &str) -> bool {
        match CharacterSet::from_str(name) {
            Some(set) => {
                self.driver.borrow_mut().set_writing_system(set);
                true
            }
            None => false,
        }
    }

    /// "slow", "normal" or "fast"
    pub fn set_speed(&self, name: &str) -> bool {
        match SpeedSetting::from_str(name) {
            Some(speed) => {
                self.driver.borrow_mut().set_speed_setting(speed);
                true
            }
            None => false,
        }
    }

    /// Round state for the page to render
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.driver.borrow().game().state())
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    pub fn notice(&self) -> Option<String> {
        self.driver.borrow().notice().map(str::to_string)
    }

    pub fn dismiss_notice(&self) {
        self.driver.borrow_mut().dismiss_notice();
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}

/// Hidden tab or lost focus holds a pause until both come back
fn watch_visibility(driver: SharedDriver) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    {
        let driver = driver.clone();
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let hidden = doc.visibility_state() == web_sys::VisibilityState::Hidden;
            driver.borrow_mut().update_visibility(false, hidden);
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    for (event, blurred) in [("blur", true), ("focus", false)] {
        let driver = driver.clone();
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let hidden = doc.visibility_state() == web_sys::VisibilityState::Hidden;
            driver.borrow_mut().update_visibility(blurred, hidden);
        });
        let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
