//! Theme toggle button and OS scheme tracking.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MediaQueryList, MediaQueryListEvent, Storage, Window};

use super::{Listener, by_id, logged};
use crate::consts::{DARK_SCHEME_QUERY, THEME_ATTRIBUTE, THEME_STORAGE_KEY, THEME_TOGGLE_ID};
use crate::error::BindError;
use crate::theme::{PreferenceStore, Theme, ThemeController};

/// `localStorage`, or nothing when the browser refuses access.
///
/// An unavailable store reads as empty and drops writes, so the toggle
/// still works for the current page view.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Self {
        match window.local_storage() {
            Ok(storage) => Self { storage },
            Err(err) => {
                log::debug!("localStorage unavailable: {err:?}");
                Self { storage: None }
            }
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref().and_then(|s| logged(s.get_item(key), "localStorage.getItem").flatten())
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            logged(storage.set_item(key, value), "localStorage.setItem");
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = &self.storage {
            logged(storage.remove_item(key), "localStorage.removeItem");
        }
    }
}

/// Bound theme toggle. Dropping it detaches the listeners.
pub struct ThemeToggle {
    controller: Rc<RefCell<ThemeController<LocalStorage>>>,
    root: Element,
    media: Option<MediaQueryList>,
    _listeners: Vec<Listener>,
}

fn apply(root: &Element, theme: Theme) {
    logged(root.set_attribute(THEME_ATTRIBUTE, theme.as_str()), "set data-theme");
}

/// Resolve and apply the initial theme, then wire the toggle and OS listener.
pub fn bind(doc: &Document, window: &Window) -> Result<ThemeToggle, BindError> {
    let trigger = by_id(doc, THEME_TOGGLE_ID)?;
    let root = doc.document_element().ok_or_else(|| BindError::missing("<html>"))?;
    let media = window.match_media(DARK_SCHEME_QUERY)?;
    let os_dark = media.as_ref().is_some_and(MediaQueryList::matches);

    let controller = ThemeController::new(LocalStorage::open(window), THEME_STORAGE_KEY, os_dark);
    apply(&root, controller.applied());
    let controller = Rc::new(RefCell::new(controller));

    let mut listeners = Vec::new();
    {
        let controller = Rc::clone(&controller);
        let root = root.clone();
        listeners.push(Listener::new(&trigger, "click", move |_| {
            let theme = controller.borrow_mut().toggle();
            apply(&root, theme);
            log::debug!("theme set to {theme}");
        })?);
    }
    if let Some(media) = &media {
        let controller = Rc::clone(&controller);
        let root = root.clone();
        listeners.push(Listener::new(media, "change", move |event: Event| {
            let Some(change) = event.dyn_ref::<MediaQueryListEvent>() else {
                return;
            };
            if let Some(theme) = controller.borrow_mut().os_changed(change.matches()) {
                apply(&root, theme);
            }
        })?);
    }

    Ok(ThemeToggle { controller, root, media, _listeners: listeners })
}

impl ThemeToggle {
    /// Drop the stored choice and follow the OS scheme again.
    pub fn clear_preference(&self) {
        let os_dark = self.media.as_ref().is_some_and(MediaQueryList::matches);
        let theme = self.controller.borrow_mut().clear(os_dark);
        apply(&self.root, theme);
    }
}
