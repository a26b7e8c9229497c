//! Page session: boot sequence and the components it owns.
//!
//! ARCHITECTURE
//! ============
//! `boot` runs once from the wasm start hook. It loads configuration,
//! installs the logger, and mounts every component when the document is
//! ready. Mounted components live in a thread-local [`Page`] for the rest of
//! the session; a component whose anchors are absent is simply `None`.

use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, prelude::wasm_bindgen};
use web_sys::{Document, Window};

use super::anchor::{self, SmoothScroll};
use super::form::{self, ContactForm};
use super::nav::{self, Navigation};
use super::reveal::{self, ScrollAnimations};
use super::theme::{self, ThemeToggle};
use super::typewriter::{self, TypeWriterHandle};
use super::{document, window};
use crate::config::{Config, ConfigError};
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::BindError;
use crate::nav::NavMetrics;

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Every component bound for this page view.
pub struct Page {
    pub config: Config,
    pub theme: Option<ThemeToggle>,
    pub navigation: Option<Navigation>,
    pub animations: Option<ScrollAnimations>,
    pub contact: Option<ContactForm>,
    pub smooth_scroll: Option<SmoothScroll>,
    pub typewriter: Option<TypeWriterHandle>,
}

/// Keep a bound component, or report why the page runs without it.
fn enable<T>(feature: &str, result: Result<T, BindError>) -> Option<T> {
    match result {
        Ok(component) => {
            log::debug!("{feature} ready");
            Some(component)
        }
        Err(err) if err.is_missing() => {
            log::debug!("{feature} disabled: {err}");
            None
        }
        Err(err) => {
            log::warn!("{feature} failed to start: {err}");
            None
        }
    }
}

/// Read the optional JSON config block.
fn load_config(doc: &Document) -> Result<Config, ConfigError> {
    match doc.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) {
        Some(raw) => Config::from_json(&raw),
        None => Ok(Config::default()),
    }
}

fn init_logging(config: &Config) {
    let level = config.log_level.parse::<log::Level>().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
}

impl Page {
    fn mount(window: &Window, doc: &Document, config: Config) -> Self {
        let metrics = NavMetrics {
            scrolled_threshold: config.scrolled_threshold_px,
            lookahead: config.active_lookahead_px,
        };
        let typewriter = config
            .typewriter
            .target
            .as_deref()
            .and_then(|selector| enable("type-writer", typewriter::start(doc, selector, &config.typewriter)));

        Self {
            theme: enable("theme toggle", theme::bind(doc, window)),
            navigation: enable("navigation", nav::bind(doc, window, metrics)),
            animations: enable("scroll animations", reveal::bind(doc, &config)),
            contact: enable("contact form", form::bind(doc, config.form_reset_ms)),
            smooth_scroll: enable("smooth scroll", anchor::bind(doc)),
            typewriter,
            config,
        }
    }
}

fn mount_page(config: Config) {
    let Some((window, doc)) = enable("page", window().and_then(|w| document(&w).map(|d| (w, d)))) else {
        return;
    };
    let page = Page::mount(&window, &doc, config);
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));
    log::info!("page behavior mounted");
}

/// Configure logging and mount components once the document has loaded.
pub fn boot() {
    let Some((_, doc)) = enable("page", window().and_then(|w| document(&w).map(|d| (w, d)))) else {
        return;
    };
    let (config, config_error) = match load_config(&doc) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    init_logging(&config);
    if let Some(err) = config_error {
        log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
    }

    if doc.ready_state() != "loading" {
        mount_page(config);
        return;
    }
    let on_ready = Closure::once_into_js(move || mount_page(config));
    if let Err(err) = doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        log::warn!("could not wait for DOMContentLoaded: {err:?}");
    }
}

/// Forget the visitor's explicit theme choice and follow the OS again.
#[wasm_bindgen(js_name = clearThemePreference)]
pub fn clear_theme_preference() {
    PAGE.with(|slot| {
        if let Some(theme) = slot.borrow().as_ref().and_then(|page| page.theme.as_ref()) {
            theme.clear_preference();
        }
    });
}

/// Start the type-writer effect on the element matching `selector`,
/// replacing any effect already running.
#[wasm_bindgen(js_name = startTypeWriter)]
pub fn start_type_writer(selector: &str) {
    PAGE.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(page) = slot.as_mut() else {
            return;
        };
        page.typewriter = None;
        let started = window()
            .and_then(|w| document(&w))
            .and_then(|doc| typewriter::start(&doc, selector, &page.config.typewriter));
        page.typewriter = enable("type-writer", started);
    });
}

/// Stop the type-writer effect, leaving the current text in place.
#[wasm_bindgen(js_name = stopTypeWriter)]
pub fn stop_type_writer() {
    PAGE.with(|slot| {
        if let Some(handle) = slot.borrow().as_ref().and_then(|page| page.typewriter.as_ref()) {
            handle.stop();
        }
    });
}
