use super::{EventRegistry, InputWiring};
use crate::input::PointerKind;
use glam::Vec2;
use web_sys as web;

#[inline]
fn pointer_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub(super) fn wire_pointerdown(registry: &mut EventRegistry, w: &InputWiring) {
    let w = w.clone();
    registry.bind(
        &w.stage.clone().into(),
        "pointerdown",
        move |ev: web::PointerEvent| {
            let kind = PointerKind::from_pointer_type(&ev.pointer_type());
            w.session.borrow_mut().pointer_down(pointer_pos(&ev), kind);
            ev.prevent_default();
        },
    );
}

pub(super) fn wire_pointermove(registry: &mut EventRegistry, w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    registry.bind(&window.into(), "pointermove", move |ev: web::PointerEvent| {
        let just_locked = w.session.borrow_mut().pointer_move(pointer_pos(&ev));
        if just_locked {
            super::on_lock_edge(&w);
        }
    });
}

pub(super) fn wire_pointerup(registry: &mut EventRegistry, w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    registry.bind(&window.into(), "pointerup", move |_ev: web::PointerEvent| {
        w.session.borrow_mut().pointer_up();
    });
}
