//! Type-writer effect driven by chained timeouts.
//!
//! Each tick schedules the next one and parks its `Timeout` in the shared
//! slot. The scheduled callback only holds a weak reference, so stopping or
//! dropping the handle cancels the chain.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::config::TypeWriterConfig;
use crate::error::BindError;
use crate::typewriter::TypeWriter;

struct Task {
    element: Element,
    writer: RefCell<TypeWriter>,
    timer: RefCell<Option<Timeout>>,
    running: Cell<bool>,
}

/// Running type-writer. Stops when [`TypeWriterHandle::stop`] is called or
/// the handle is dropped.
pub struct TypeWriterHandle {
    task: Rc<Task>,
}

fn step(task: &Rc<Task>) {
    if !task.running.get() {
        return;
    }
    let tick = task.writer.borrow_mut().tick();
    task.element.set_text_content(Some(&tick.text));

    let next: Weak<Task> = Rc::downgrade(task);
    let timeout = Timeout::new(tick.delay_ms, move || {
        if let Some(task) = next.upgrade() {
            step(&task);
        }
    });
    *task.timer.borrow_mut() = Some(timeout);
}

/// Start cycling phrases inside the element matching `selector`.
pub fn start(doc: &Document, selector: &str, config: &TypeWriterConfig) -> Result<TypeWriterHandle, BindError> {
    let element = doc.query_selector(selector)?.ok_or_else(|| BindError::missing(selector))?;
    let writer = TypeWriter::from_config(config).ok_or_else(|| BindError::missing("type-writer phrases"))?;

    element.set_text_content(Some(""));
    let task = Rc::new(Task {
        element,
        writer: RefCell::new(writer),
        timer: RefCell::new(None),
        running: Cell::new(true),
    });
    step(&task);
    log::debug!("type-writer started on {selector}");
    Ok(TypeWriterHandle { task })
}

impl TypeWriterHandle {
    /// Cancel the pending tick. The text stays as last rendered.
    pub fn stop(&self) {
        self.task.running.set(false);
        self.task.timer.borrow_mut().take();
    }
}

impl Drop for TypeWriterHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
