//! Smooth scrolling for in-page fragment links.

use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::{Listener, query_all};
use crate::anchor::fragment_target;
use crate::consts::FRAGMENT_LINK_SELECTOR;
use crate::error::BindError;

/// Bound fragment links. Dropping it restores the default jump navigation.
pub struct SmoothScroll {
    _listeners: Vec<Listener>,
}

fn scroll_to(doc: &Document, link: &Element) {
    let href = link.get_attribute("href");
    let Some(target) = href.as_deref().and_then(fragment_target).and_then(|id| doc.get_element_by_id(id)) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn bind(doc: &Document) -> Result<SmoothScroll, BindError> {
    let links = query_all(doc, FRAGMENT_LINK_SELECTOR)?;
    if links.is_empty() {
        return Err(BindError::missing(FRAGMENT_LINK_SELECTOR));
    }
    let listeners = links
        .iter()
        .map(|link| {
            let (doc, target) = (doc.clone(), link.clone());
            Listener::new(link, "click", move |event: Event| {
                event.prevent_default();
                scroll_to(&doc, &target);
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("smooth scroll bound to {} link(s)", listeners.len());
    Ok(SmoothScroll { _listeners: listeners })
}
