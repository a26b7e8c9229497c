//! Navbar scroll state, mobile menu, and active-link highlighting.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Node, Window};

use super::{Listener, by_id, logged, query_all, set_class};
use crate::consts::{CLASS_ACTIVE, CLASS_SCROLLED, NAV_LINK_SELECTOR, NAV_MENU_ID, NAV_TOGGLE_ID, NAVBAR_ID, SECTION_SELECTOR};
use crate::error::BindError;
use crate::nav::{MenuChange, NavMetrics, NavState, SectionBounds, link_href};

struct Anchors {
    window: Window,
    doc: Document,
    navbar: Element,
    toggle: Option<Element>,
    menu: Option<Element>,
    links: Vec<Element>,
    body: Option<HtmlElement>,
}

impl Anchors {
    /// Current bounds of every `section[id]`, in document order.
    fn sections(&self) -> Vec<SectionBounds> {
        let Some(found) = logged(self.doc.query_selector_all(SECTION_SELECTOR), "query sections") else {
            return Vec::new();
        };
        super::elements(&found)
            .iter()
            .filter_map(|el| {
                let html = el.dyn_ref::<HtmlElement>()?;
                Some(SectionBounds::new(el.id(), f64::from(html.offset_top()), f64::from(html.offset_height())))
            })
            .collect()
    }

    fn apply_menu(&self, change: MenuChange) {
        let open = match change {
            MenuChange::Opened => true,
            MenuChange::Closed => false,
            MenuChange::Unchanged => return,
        };
        for el in self.toggle.iter().chain(self.menu.iter()) {
            set_class(el, CLASS_ACTIVE, open);
        }
        if let Some(body) = &self.body {
            let style = body.style();
            if open {
                logged(style.set_property("overflow", "hidden"), "lock body scroll");
            } else {
                logged(style.remove_property("overflow"), "unlock body scroll");
            }
        }
    }

    fn highlight(&self, section_id: &str) {
        let href = link_href(section_id);
        for link in &self.links {
            set_class(link, CLASS_ACTIVE, link.get_attribute("href").as_deref() == Some(href.as_str()));
        }
    }
}

/// Bound navigation bar. Dropping it detaches the listeners.
pub struct Navigation {
    _listeners: Vec<Listener>,
}

fn refresh(anchors: &Anchors, state: &RefCell<NavState>) {
    let Some(offset) = logged(anchors.window.scroll_y(), "read scrollY") else {
        return;
    };
    let sections = anchors.sections();
    let update = state.borrow_mut().on_scroll(offset, &sections);
    if let Some(scrolled) = update.scrolled {
        set_class(&anchors.navbar, CLASS_SCROLLED, scrolled);
    }
    if let Some(id) = update.active {
        anchors.highlight(&id);
    }
}

/// Wire scroll, menu, and close triggers. `#navbar` is required; the menu
/// toggle and menu are optional.
pub fn bind(doc: &Document, window: &Window, metrics: NavMetrics) -> Result<Navigation, BindError> {
    let anchors = Rc::new(Anchors {
        window: window.clone(),
        doc: doc.clone(),
        navbar: by_id(doc, NAVBAR_ID)?,
        toggle: doc.get_element_by_id(NAV_TOGGLE_ID),
        menu: doc.get_element_by_id(NAV_MENU_ID),
        links: query_all(doc, NAV_LINK_SELECTOR)?,
        body: doc.body(),
    });
    let state = Rc::new(RefCell::new(NavState::new(metrics)));
    refresh(&anchors, &state);

    let mut listeners = Vec::new();
    {
        let (anchors, state) = (Rc::clone(&anchors), Rc::clone(&state));
        listeners.push(Listener::new(window, "scroll", move |_| refresh(&anchors, &state))?);
    }

    if let Some(toggle) = &anchors.toggle {
        let (anchors, state) = (Rc::clone(&anchors), Rc::clone(&state));
        listeners.push(Listener::new(toggle, "click", move |_| {
            let change = state.borrow_mut().toggle_menu();
            anchors.apply_menu(change);
        })?);
    }

    for link in &anchors.links {
        let (anchors, state) = (Rc::clone(&anchors), Rc::clone(&state));
        listeners.push(Listener::new(link, "click", move |_| {
            let change = state.borrow_mut().close_menu();
            anchors.apply_menu(change);
        })?);
    }

    {
        let (anchors, state) = (Rc::clone(&anchors), Rc::clone(&state));
        listeners.push(Listener::new(doc, "keydown", move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let change = state.borrow_mut().on_key(&key.key());
            anchors.apply_menu(change);
        })?);
    }

    {
        let (anchors, state) = (Rc::clone(&anchors), Rc::clone(&state));
        listeners.push(Listener::new(doc, "click", move |event: Event| {
            let target = event.target();
            let inside = anchors.navbar.contains(target.as_ref().and_then(|t| t.dyn_ref::<Node>()));
            let change = state.borrow_mut().on_document_click(inside);
            anchors.apply_menu(change);
        })?);
    }

    Ok(Navigation { _listeners: listeners })
}
