//! Reveal-on-scroll via `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{logged, query_all, set_class};
use crate::config::Config;
use crate::consts::{CLASS_ACTIVE, CLASS_REVEAL};
use crate::error::BindError;
use crate::reveal::{RevealSet, transition_delay};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Bound reveal watcher. Dropping it disconnects the observer.
pub struct ScrollAnimations {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

/// Tag each selector group with staggered delays and return every `.reveal` element.
fn tag(doc: &Document, config: &Config) -> Result<Vec<Element>, BindError> {
    for selector in &config.reveal_selectors {
        for (index, el) in query_all(doc, selector)?.iter().enumerate() {
            set_class(el, CLASS_REVEAL, true);
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                let delay = transition_delay(index, config.reveal_stagger_ms);
                logged(html.style().set_property("transition-delay", &delay), "set transition-delay");
            }
        }
    }
    query_all(doc, &format!(".{CLASS_REVEAL}"))
}

pub fn bind(doc: &Document, config: &Config) -> Result<ScrollAnimations, BindError> {
    let elements = tag(doc, config)?;
    if elements.is_empty() {
        return Err(BindError::missing(format!(".{CLASS_REVEAL}")));
    }
    let revealed = Rc::new(RefCell::new(RevealSet::new(elements.len())));

    let callback: ObserverCallback = {
        let revealed = Rc::clone(&revealed);
        let elements = elements.clone();
        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = elements.iter().position(|el| *el == target) else {
                    continue;
                };
                if revealed.borrow_mut().observe(index, entry.is_intersecting()) {
                    set_class(&target, CLASS_ACTIVE, true);
                    observer.unobserve(&target);
                }
            }
            if revealed.borrow().is_complete() {
                log::debug!("all reveal elements shown; disconnecting observer");
                observer.disconnect();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for el in &elements {
        observer.observe(el);
    }
    log::debug!("observing {} reveal elements", elements.len());

    Ok(ScrollAnimations { observer, _callback: callback })
}

impl Drop for ScrollAnimations {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
