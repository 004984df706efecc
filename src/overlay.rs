use web_sys as web;

fn show_by_id(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

fn hide_by_id(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn hide_launch(document: &web::Document) {
    hide_by_id(document, "launch-overlay");
}

#[inline]
pub fn show_lock_banner(document: &web::Document) {
    show_by_id(document, "lock-banner");
}

#[inline]
pub fn hide_lock_banner(document: &web::Document) {
    hide_by_id(document, "lock-banner");
}

#[inline]
pub fn hide_guide(document: &web::Document) {
    hide_by_id(document, "guide");
}

/// Reveal the found view. The decorative shower inside it belongs to the
/// page, not to this crate.
#[inline]
pub fn show_climax(document: &web::Document) {
    show_by_id(document, "climax");
}
