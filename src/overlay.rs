//! Full-screen overlay shown while the theme switches.

use crate::constants::THEME_OVERLAY_CLASS;
use web_sys as web;

pub fn create(document: &web::Document, icon_class: &str) -> Option<web::Element> {
    let body = document.body()?;
    let el = document.create_element("div").ok()?;
    el.set_class_name(THEME_OVERLAY_CLASS);
    el.set_inner_html(&format!(
        "<div class=\"theme-transition\"><i class=\"{}\"></i></div>",
        icon_class
    ));
    _ = body.append_child(&el);
    Some(el)
}

#[inline]
pub fn show(overlay: &web::Element) {
    _ = overlay.class_list().add_1("active");
}

#[inline]
pub fn hide(overlay: &web::Element) {
    _ = overlay.class_list().remove_1("active");
}

pub fn set_icon(overlay: &web::Element, icon_class: &str) {
    if let Ok(Some(icon)) = overlay.query_selector("i") {
        icon.set_class_name(icon_class);
    }
}
