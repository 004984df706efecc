use crate::session::SearchSession;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

mod orientation;
mod pointer;

/// One registered DOM listener. Removing happens on drop, so dropping the
/// registry tears down every subscription of the session at once — no
/// late callbacks into a disposed session.
struct EventBinding {
    target: web::EventTarget,
    name: &'static str,
    function: js_sys::Function,
    // Keeps the Rust closure alive for as long as the listener is registered.
    _closure: Box<dyn std::any::Any>,
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.name, &self.function);
    }
}

/// Lifecycle-scoped listener registrations for one session.
#[derive(Default)]
pub struct EventRegistry {
    bindings: Vec<EventBinding>,
}

impl EventRegistry {
    pub fn bind<E>(
        &mut self,
        target: &web::EventTarget,
        name: &'static str,
        handler: impl FnMut(E) + 'static,
    ) where
        E: 'static,
        dyn FnMut(E): WasmClosure,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
        let function: js_sys::Function = closure.as_ref().clone().unchecked_into();
        if target
            .add_event_listener_with_callback(name, &function)
            .is_ok()
        {
            self.bindings.push(EventBinding {
                target: target.clone(),
                name,
                function,
                _closure: Box::new(closure),
            });
        }
    }
}

/// The LOCKED -> FOUND one-shot. Canceled on drop so a torn-down session can
/// never see the completion path fire.
pub struct CountdownTimer {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl CountdownTimer {
    pub fn schedule(window: &web::Window, ms: i32, handler: impl FnMut() + 'static) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            )
            .ok()?;
        Some(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.id);
        }
    }
}

/// Everything the input closures need, cloned per closure like the rest of
/// the wiring in this crate.
#[derive(Clone)]
pub struct InputWiring {
    pub stage: web::HtmlElement,
    pub session: Rc<RefCell<SearchSession>>,
    pub countdown: Rc<RefCell<Option<CountdownTimer>>>,
}

pub fn wire_input_handlers(registry: &mut EventRegistry, w: &InputWiring) {
    pointer::wire_pointerdown(registry, w);
    pointer::wire_pointermove(registry, w);
    pointer::wire_pointerup(registry, w);
    orientation::wire_deviceorientation(registry, w);
}

/// Shared SCANNING -> LOCKED edge: show the banner and start the one-shot
/// countdown toward FOUND.
pub(crate) fn on_lock_edge(w: &InputWiring) {
    if let Some(doc) = crate::dom::window_document() {
        crate::overlay::show_lock_banner(&doc);
    }
    let Some(window) = web::window() else {
        return;
    };
    let ms = w.session.borrow().countdown_ms();
    let session = w.session.clone();
    let timer = CountdownTimer::schedule(&window, ms, move || {
        session.borrow_mut().countdown_elapsed();
    });
    *w.countdown.borrow_mut() = timer;
}
