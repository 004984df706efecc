use super::{EventRegistry, InputWiring};
use crate::orientation::OrientationSample;
use web_sys as web;

pub(super) fn wire_deviceorientation(registry: &mut EventRegistry, w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    registry.bind(
        &window.into(),
        "deviceorientation",
        move |ev: web::DeviceOrientationEvent| {
            // Null angles on unsupported devices become None and are skipped
            // downstream; drag-only input keeps the session fully usable.
            let sample = OrientationSample {
                alpha: ev.alpha(),
                beta: ev.beta(),
                gamma: ev.gamma(),
            };
            let just_locked = w.session.borrow_mut().handle_orientation(sample);
            if just_locked {
                super::on_lock_edge(&w);
            }
        },
    );
}
