//! Accordion Component

use dioxus::prelude::*;

/// Collapsible section; the parent owns the open flag.
#[component]
pub fn Accordion(
    title: String,
    open: bool,
    /// Called with the header text when the header is clicked
    on_toggle: EventHandler<String>,
    children: Element,
) -> Element {
    let header = title.clone();

    rsx! {
        div { class: if open { "accordion open" } else { "accordion" },
            button {
                class: "accordion__toggle",
                r#type: "button",
                "data-accordion-toggle": "",
                "aria-expanded": if open { "true" } else { "false" },
                onclick: move |_| on_toggle.call(header.clone()),
                span { "{title}" }
                i { class: "fa-solid fa-chevron-down accordion__icon" }
            }
            div { class: "accordion__body", {children} }
        }
    }
}
