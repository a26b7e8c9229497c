//! Browser bindings for the page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule resolves its DOM anchors once, wraps them in typed handles,
//! and wires listeners that feed browser events into the matching pure core
//! (`crate::theme`, `crate::nav`, ...). Listener closures are owned by the
//! component that registered them and detached when it is dropped.

pub mod anchor;
pub mod form;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod theme;
pub mod typewriter;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

use crate::error::BindError;

pub fn window() -> Result<Window, BindError> {
    web_sys::window().ok_or_else(|| BindError::missing("window"))
}

pub fn document(window: &Window) -> Result<Document, BindError> {
    window.document().ok_or_else(|| BindError::missing("document"))
}

/// Element with the given id.
pub fn by_id(doc: &Document, id: &str) -> Result<Element, BindError> {
    doc.get_element_by_id(id).ok_or_else(|| BindError::missing(format!("#{id}")))
}

/// Element with the given id, checked to be a `T`.
pub fn by_id_as<T: JsCast + Clone>(doc: &Document, id: &str, expected: &'static str) -> Result<T, BindError> {
    by_id(doc, id)?
        .dyn_ref::<T>()
        .cloned()
        .ok_or_else(|| BindError::WrongType { anchor: format!("#{id}"), expected })
}

/// Every element in `list`, in document order.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// All elements under the document matching `selector`.
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, BindError> {
    Ok(elements(&doc.query_selector_all(selector)?))
}

/// Unwrap a browser call, logging instead of failing when it throws.
pub fn logged<T>(result: Result<T, JsValue>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{what} failed: {err:?}");
            None
        }
    }
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    if on {
        logged(list.add_1(class), "classList.add");
    } else {
        logged(list.remove_1(class), "classList.remove");
    }
}

/// An event listener that is removed from its target when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, BindError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        logged(
            self.target
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref()),
            "removeEventListener",
        );
    }
}
