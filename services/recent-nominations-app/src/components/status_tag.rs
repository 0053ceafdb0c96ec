//! Status tag component

use leptos::prelude::*;
use nominations_core::TagColor;

/// A colored tag pinned to the top-right corner of a nomination card
#[component]
pub fn StatusTag(label: String, color: TagColor) -> impl IntoView {
    let (fg, bg) = color.css();

    let style = format!(
        "position: absolute; top: 16px; right: 16px; display: inline-block; \
         padding: 0.1em 0.6em; border-radius: 8px; font-size: 12px; \
         color: {}; background-color: {};",
        fg, bg
    );

    view! {
        <span class=format!("tag tag-{}", color.token()) style=style>{label}</span>
    }
}
