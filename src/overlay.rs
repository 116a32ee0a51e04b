use web_sys as web;

use crate::constants::HIDDEN_CLASS;

#[inline]
pub fn show(el: &web::HtmlElement) {
    _ = el.class_list().remove_1(HIDDEN_CLASS);
    // for pages without a `.hidden` rule
    _ = el.style().remove_property("display");
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    _ = el.class_list().add_1(HIDDEN_CLASS);
    _ = el.style().set_property("display", "none");
}

#[inline]
pub fn is_hidden(el: &web::HtmlElement) -> bool {
    el.class_list().contains(HIDDEN_CLASS)
        || el
            .style()
            .get_property_value("display")
            .map(|d| d == "none")
            .unwrap_or(false)
}
