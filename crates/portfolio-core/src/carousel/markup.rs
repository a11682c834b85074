use super::ring::{CardAccent, RingSlot};
use std::fmt::Write;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Inner HTML of one carousel card.
pub fn card_markup(slot: &RingSlot<'_>) -> String {
    let p = slot.project;
    let accent = CardAccent::for_index(slot.index).css_class();
    let mut html = String::new();
    // writing into a String cannot fail
    let _ = write!(
        html,
        "<div class=\"card\">\
<div class=\"card-header {accent}\">\
<a class=\"card-link\" href=\"{link}\">View</a>\
</div>\
<h3 class=\"card-title\">{title}</h3>\
<p class=\"card-kind\">{kind}</p>\
<p class=\"card-description\">{description}</p>\
<div class=\"card-tags\">",
        link = escape_html(p.link),
        title = escape_html(p.title),
        kind = escape_html(p.kind),
        description = escape_html(p.description),
    );
    for tag in &p.tags {
        let _ = write!(html, "<span class=\"card-tag\">{}</span>", escape_html(tag));
    }
    html.push_str("</div></div>");
    html
}
