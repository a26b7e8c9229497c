//! Contact form: inline validation and the simulated "Sent!" flow.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::{Listener, by_id_as, elements, logged, set_class};
use crate::consts::{
    CLASS_ERROR, CLASS_SHOW, CONTACT_FORM_ID, ERROR_ID_SUFFIX, FORM_FIELD_SELECTOR, FORM_SUCCESS_ID, SENT_BACKGROUND,
    SENT_BUTTON_HTML, SUBMIT_BUTTON_SELECTOR,
};
use crate::error::BindError;
use crate::form::{FieldError, FieldInput, FormState, Restore, SubmitOutcome, Validator};

/// A validated form control.
enum Control {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl Control {
    fn from_element(el: &Element) -> Option<Self> {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            return Some(Self::Input(input.clone()));
        }
        el.dyn_ref::<HtmlTextAreaElement>().map(|area| Self::TextArea(area.clone()))
    }

    fn element(&self) -> &Element {
        match self {
            Self::Input(input) => input.unchecked_ref(),
            Self::TextArea(area) => area.unchecked_ref(),
        }
    }

    fn name(&self) -> String {
        match self {
            Self::Input(input) => input.name(),
            Self::TextArea(area) => area.name(),
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::TextArea(area) => area.value(),
        }
    }

    fn required(&self) -> bool {
        match self {
            Self::Input(input) => input.required(),
            Self::TextArea(area) => area.required(),
        }
    }
}

struct Anchors {
    doc: Document,
    form: HtmlFormElement,
    controls: Vec<Control>,
    button: Option<HtmlButtonElement>,
    success: Option<Element>,
}

impl Anchors {
    fn show_error(&self, control: &Control, error: Option<&FieldError>) {
        set_class(control.element(), CLASS_ERROR, error.is_some());
        let message = error.map(ToString::to_string).unwrap_or_default();
        if let Some(slot) = self.doc.get_element_by_id(&format!("{}{ERROR_ID_SUFFIX}", control.name())) {
            slot.set_text_content(Some(&message));
        }
    }

    /// Swap in the confirmation, recording the button markup it replaces.
    fn show_sent(&self, state: &mut FormState) {
        if let Some(button) = &self.button {
            state.capture_button(&button.inner_html());
            button.set_inner_html(SENT_BUTTON_HTML);
            logged(button.style().set_property("background", SENT_BACKGROUND), "set button background");
            button.set_disabled(true);
        }
        if let Some(success) = &self.success {
            set_class(success, CLASS_SHOW, true);
        }
    }

    fn restore(&self, restore: Restore) {
        self.form.reset();
        if let Some(button) = &self.button {
            if let Some(html) = restore.button_html {
                button.set_inner_html(&html);
            }
            logged(button.style().remove_property("background"), "clear button background");
            button.set_disabled(false);
        }
        if let Some(success) = &self.success {
            set_class(success, CLASS_SHOW, false);
        }
    }
}

/// Bound contact form. Dropping it detaches listeners, which also cancels a
/// pending reset.
pub struct ContactForm {
    _listeners: Vec<Listener>,
}

fn validate_one(anchors: &Anchors, validator: &Validator, control: &Control) {
    let (name, value) = (control.name(), control.value());
    let result = validator.validate(&FieldInput::new(&name, &value, control.required()));
    anchors.show_error(control, result.err().as_ref());
}

fn submit(
    anchors: &Rc<Anchors>,
    validator: &Validator,
    state: &Rc<RefCell<FormState>>,
    pending_reset: &RefCell<Option<Timeout>>,
    reset_ms: u32,
) {
    let snapshot = anchors
        .controls
        .iter()
        .map(|c| (c.name(), c.value(), c.required()))
        .collect::<Vec<_>>();
    let fields = snapshot
        .iter()
        .map(|(name, value, required)| FieldInput::new(name, value, *required))
        .collect::<Vec<_>>();

    let outcome = state.borrow_mut().submit(validator, &fields);
    match outcome {
        SubmitOutcome::Rejected(failures) => {
            for (index, control) in anchors.controls.iter().enumerate() {
                let error = failures.iter().find(|(i, _)| *i == index).map(|(_, e)| e);
                anchors.show_error(control, error);
            }
            log::debug!("contact form rejected: {} invalid field(s)", failures.len());
        }
        SubmitOutcome::Sent(ticket) => {
            for control in &anchors.controls {
                anchors.show_error(control, None);
            }
            anchors.show_sent(&mut state.borrow_mut());
            let (anchors, state) = (Rc::clone(anchors), Rc::clone(state));
            // Replacing the slot cancels an earlier reset still in flight.
            *pending_reset.borrow_mut() = Some(Timeout::new(reset_ms, move || {
                let restore = state.borrow_mut().reset(ticket);
                if let Some(restore) = restore {
                    anchors.restore(restore);
                }
            }));
            log::info!("contact form accepted (simulated send)");
        }
    }
}

pub fn bind(doc: &Document, reset_ms: u32) -> Result<ContactForm, BindError> {
    let form: HtmlFormElement = by_id_as(doc, CONTACT_FORM_ID, "form")?;
    let validator = Rc::new(Validator::new()?);

    let controls = elements(&form.query_selector_all(FORM_FIELD_SELECTOR)?)
        .iter()
        .filter_map(Control::from_element)
        .collect::<Vec<_>>();
    let button = form
        .query_selector(SUBMIT_BUTTON_SELECTOR)?
        .and_then(|el| el.dyn_ref::<HtmlButtonElement>().cloned());
    let success = doc.get_element_by_id(FORM_SUCCESS_ID);

    let anchors = Rc::new(Anchors { doc: doc.clone(), form, controls, button, success });
    let state = Rc::new(RefCell::new(FormState::default()));
    let pending_reset = Rc::new(RefCell::new(None));

    let mut listeners = Vec::new();
    {
        let (anchors_cb, validator) = (Rc::clone(&anchors), Rc::clone(&validator));
        listeners.push(Listener::new(&anchors.form, "submit", move |event: Event| {
            event.prevent_default();
            submit(&anchors_cb, &validator, &state, &pending_reset, reset_ms);
        })?);
    }

    for (index, control) in anchors.controls.iter().enumerate() {
        {
            let (anchors_cb, validator) = (Rc::clone(&anchors), Rc::clone(&validator));
            listeners.push(Listener::new(control.element(), "blur", move |_| {
                if let Some(control) = anchors_cb.controls.get(index) {
                    validate_one(&anchors_cb, &validator, control);
                }
            })?);
        }
        let anchors_cb = Rc::clone(&anchors);
        listeners.push(Listener::new(control.element(), "input", move |_| {
            if let Some(control) = anchors_cb.controls.get(index) {
                anchors_cb.show_error(control, None);
            }
        })?);
    }
    log::debug!("contact form bound with {} field(s)", anchors.controls.len());

    Ok(ContactForm { _listeners: listeners })
}
