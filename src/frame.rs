use crate::constants::CAMERA_SMOOTH_TAU_SEC;
use crate::dom;
use crate::lockon::LockPhase;
use crate::session::SearchSession;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame render state. Reads session snapshots, writes CSS transforms.
///
/// The displayed offset trails the controller's offset by a small time
/// constant for a sense of weight; tracking always uses the raw offset, so
/// this lag is display-only.
pub struct FrameContext {
    pub session: Rc<RefCell<SearchSession>>,
    pub world: web::HtmlElement,
    pub guide: web::HtmlElement,
    pub last_instant: Instant,
    pub displayed_offset: Vec2,
    pub initialized: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let snap = self.session.borrow().snapshot();

        if !self.initialized {
            self.displayed_offset = snap.offset;
            self.initialized = true;
        } else {
            let alpha = 1.0 - (-dt_sec / CAMERA_SMOOTH_TAU_SEC).exp();
            self.displayed_offset += (snap.offset - self.displayed_offset) * alpha;
        }
        dom::set_translate(&self.world, self.displayed_offset.x, self.displayed_offset.y);

        // The arrow only guides while scanning; after lock it is hidden by
        // the overlay layer and its rotation stops mattering.
        if snap.phase == LockPhase::Scanning {
            dom::set_rotation(&self.guide, snap.bearing_deg);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
