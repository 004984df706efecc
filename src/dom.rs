use crate::starfield::Star;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    use wasm_bindgen::JsCast;
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    use wasm_bindgen::JsCast;
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Apply the camera pan as a CSS translation.
#[inline]
pub fn set_translate(el: &web::HtmlElement, x: f32, y: f32) {
    _ = el
        .style()
        .set_property("transform", &format!("translate({x:.1}px, {y:.1}px)"));
}

/// Rotate the guidance arrow; the element is pre-centered by the page CSS.
#[inline]
pub fn set_rotation(el: &web::HtmlElement, deg: f32) {
    _ = el
        .style()
        .set_property("transform", &format!("rotate({deg:.1}deg)"));
}

/// Place the moon sprite at its world position inside the world container.
pub fn place_moon(moon: &web::HtmlElement, x: f32, y: f32, size_px: f32) {
    let style = moon.style();
    _ = style.set_property("left", &format!("{:.0}px", x - size_px / 2.0));
    _ = style.set_property("top", &format!("{:.0}px", y - size_px / 2.0));
    _ = style.set_property("width", &format!("{size_px:.0}px"));
    _ = style.set_property("height", &format!("{size_px:.0}px"));
}

/// Inject one div per star into the world container.
pub fn spawn_stars(document: &web::Document, world: &web::HtmlElement, stars: &[Star]) {
    use wasm_bindgen::JsCast;
    for star in stars {
        let Ok(el) = document.create_element("div") else {
            continue;
        };
        _ = el.set_attribute("class", "star");
        _ = el.set_attribute(
            "style",
            &format!(
                "left:{:.0}px;top:{:.0}px;width:{:.1}px;height:{:.1}px;opacity:{:.2};animation-delay:{:.2}s",
                star.x, star.y, star.size_px, star.size_px, star.opacity, star.twinkle_delay_sec
            ),
        );
        if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
            _ = world.append_child(&el);
        }
    }
}
