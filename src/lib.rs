#![cfg(target_arch = "wasm32")]
use crate::events::{CountdownTimer, EventRegistry, InputWiring};
use crate::session::{SearchSession, SessionConfig};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod lockon;
mod orientation;
mod overlay;
mod session;
mod starfield;
mod tracker;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("moonseek-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let stage = dom::html_element_by_id(&document, "stage")
        .ok_or_else(|| anyhow::anyhow!("missing #stage"))?;
    let world = dom::html_element_by_id(&document, "world")
        .ok_or_else(|| anyhow::anyhow!("missing #world"))?;
    let guide = dom::html_element_by_id(&document, "guide")
        .ok_or_else(|| anyhow::anyhow!("missing #guide"))?;

    if let Some(moon) = dom::html_element_by_id(&document, "moon") {
        dom::place_moon(
            &moon,
            constants::TARGET_POS.x,
            constants::TARGET_POS.y,
            constants::MOON_SIZE_PX,
        );
    }

    let stars = starfield::generate(
        constants::STAR_COUNT,
        constants::WORLD_SIZE_PX,
        constants::STAR_SIZE_MIN_PX,
        constants::STAR_SIZE_MAX_PX,
        constants::STAR_TWINKLE_DELAY_MAX_SEC,
        &mut rand::thread_rng(),
    );
    dom::spawn_stars(&document, &world, &stars);

    // The launch gate doubles as the user-interaction point browsers require
    // before audio playback and (on iOS) orientation access.
    let started = Rc::new(Cell::new(false));
    let doc_for_click = document.clone();
    dom::add_click_listener(&document, "launch-ok", move || {
        if started.replace(true) {
            return;
        }
        play_bgm(&doc_for_click);
        spawn_local(request_orientation_permission());
        overlay::hide_launch(&doc_for_click);
        start_session(&doc_for_click, stage.clone(), world.clone(), guide.clone());
    });

    Ok(())
}

/// Build the session, register its listeners and start the render loop.
fn start_session(
    document: &web::Document,
    stage: web::HtmlElement,
    world: web::HtmlElement,
    guide: web::HtmlElement,
) {
    let registry_slot: Rc<RefCell<Option<EventRegistry>>> = Rc::new(RefCell::new(None));
    let countdown: Rc<RefCell<Option<CountdownTimer>>> = Rc::new(RefCell::new(None));

    let doc_found = document.clone();
    let registry_for_found = registry_slot.clone();
    let countdown_for_found = countdown.clone();
    let session = Rc::new(RefCell::new(SearchSession::new(
        SessionConfig::default(),
        move || {
            overlay::hide_lock_banner(&doc_found);
            overlay::hide_guide(&doc_found);
            overlay::show_climax(&doc_found);
            // Session is over; unregister its listeners so nothing calls
            // back into it afterwards. The countdown slot stays put: the
            // one-shot that brought us here is still on the stack and must
            // not be destroyed mid-invocation.
            let _fired = countdown_for_found.clone();
            registry_for_found.borrow_mut().take();
        },
    )));

    let mut registry = EventRegistry::default();
    events::wire_input_handlers(
        &mut registry,
        &InputWiring {
            stage,
            session: session.clone(),
            countdown,
        },
    );
    *registry_slot.borrow_mut() = Some(registry);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        world,
        guide,
        last_instant: Instant::now(),
        displayed_offset: glam::Vec2::ZERO,
        initialized: false,
    }));
    frame::start_loop(frame_ctx);
    log::info!("[session] search started");
}

fn play_bgm(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("bgm-audio") {
        if let Ok(audio) = el.dyn_into::<web::HtmlAudioElement>() {
            audio.set_volume(1.0);
            audio.set_muted(false);
            _ = audio.play();
        }
    }
}

/// iOS requires an explicit permission grant for orientation events; other
/// platforms have no `requestPermission` and fall straight through. Denial
/// is not an error — the session stays usable with drag alone.
async fn request_orientation_permission() {
    let global = js_sys::global();
    let ctor = match js_sys::Reflect::get(&global, &JsValue::from_str("DeviceOrientationEvent")) {
        Ok(v) if !v.is_undefined() => v,
        _ => return,
    };
    let req = match js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission")) {
        Ok(v) => v,
        Err(_) => return,
    };
    let Ok(func) = req.dyn_into::<js_sys::Function>() else {
        return;
    };
    let Ok(ret) = func.call0(&ctor) else {
        return;
    };
    if let Ok(promise) = ret.dyn_into::<js_sys::Promise>() {
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(state) => log::info!("[gyro] permission: {:?}", state.as_string()),
            Err(_) => log::info!("[gyro] permission denied, drag-only input"),
        }
    }
}
