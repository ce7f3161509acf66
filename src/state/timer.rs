use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// One-shot `setTimeout` that is cleared when the handle is dropped, so a
/// callback never outlives the component that scheduled it.
pub struct Timeout {
    id: Option<i32>,
    fired: Rc<Cell<bool>>,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(ms: u32, f: impl FnOnce() + 'static) -> Self {
        let fired = Rc::new(Cell::new(false));
        let callback: Closure<dyn FnMut()> = {
            let fired = fired.clone();
            Closure::once(move || {
                fired.set(true);
                f();
            })
        };
        let id = web_sys::window().and_then(|win| {
            win.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                ms.min(i32::MAX as u32) as i32,
            )
            .ok()
        });
        if id.is_none() {
            crate::util::cwarn("setTimeout unavailable; callback dropped");
        }
        Self {
            id,
            fired,
            _callback: callback,
        }
    }

    /// Still waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.id.is_some() && !self.fired.get()
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            if !self.fired.get() {
                if let Some(win) = web_sys::window() {
                    win.clear_timeout_with_handle(id);
                }
            }
        }
    }
}

/// At most one pending `Timeout`. Setting a new one cancels the previous,
/// so the latest request decides when the callback runs.
#[derive(Clone, Default)]
pub struct TimerSlot(Rc<RefCell<Option<Timeout>>>);

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, ms: u32, f: impl FnOnce() + 'static) {
        let next = Timeout::new(ms, f);
        let previous = self.0.borrow_mut().replace(next);
        drop(previous);
    }

    pub fn clear(&self) {
        let previous = self.0.borrow_mut().take();
        drop(previous);
    }

    pub fn is_pending(&self) -> bool {
        self.0.borrow().as_ref().is_some_and(Timeout::is_pending)
    }
}
