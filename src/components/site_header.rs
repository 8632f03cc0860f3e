//! Site Header Component
//!
//! Top bar with the search shortcut, theme toggle and mobile menu.

use dioxus::prelude::*;
use orbitlink_core::{PageEvent, Theme};

#[derive(Props, Clone, PartialEq)]
pub struct SiteHeaderProps {
    pub theme: Theme,
    pub menu_open: bool,
    /// Target of the search shortcut
    pub search_path: String,
    pub on_event: EventHandler<PageEvent>,
}

#[component]
pub fn SiteHeader(props: SiteHeaderProps) -> Element {
    let on_event = props.on_event;

    rsx! {
        header { class: "site-header",
            a { class: "site-header__brand", href: "/",
                span { class: "site-header__logo", "TS" }
                span { class: "site-header__name", "TriplexSolutio" }
            }

            div { class: "site-header__actions",
                a {
                    id: "headerSearchBtn",
                    class: "icon-btn",
                    href: "{props.search_path}",
                    "aria-label": "Buscador anime",
                    onclick: move |_| on_event.call(PageEvent::SearchFromHeader),
                    i { class: "fa-solid fa-magnifying-glass" }
                }
                button {
                    id: "themeToggle",
                    class: "icon-btn",
                    r#type: "button",
                    "aria-label": "Cambiar tema",
                    onclick: move |_| on_event.call(PageEvent::ToggleTheme),
                    i { class: "{props.theme.icon_class()}" }
                }
                button {
                    id: "menuToggle",
                    class: "icon-btn site-header__menu-toggle",
                    r#type: "button",
                    "aria-label": "Abrir menú",
                    "aria-expanded": if props.menu_open { "true" } else { "false" },
                    onclick: move |_| on_event.call(PageEvent::ToggleMenu),
                    i { class: "fa-solid fa-bars" }
                }
            }
        }

        MobileMenu {
            open: props.menu_open,
            search_path: props.search_path.clone(),
            on_event,
        }
    }
}

/// Slide-in menu for small screens
#[component]
fn MobileMenu(open: bool, search_path: String, on_event: EventHandler<PageEvent>) -> Element {
    let links = [
        ("#planetas", "Explorar planetas"),
        (search_path.as_str(), "Buscador anime"),
        ("#newsletter", "Newsletter"),
        ("#faq", "Preguntas frecuentes"),
    ];

    rsx! {
        div {
            id: "mobileMenu",
            class: if open { "mobile-menu open" } else { "mobile-menu" },
            "aria-hidden": if open { "false" } else { "true" },

            div {
                class: "mobile-menu-backdrop",
                onclick: move |_| on_event.call(PageEvent::MenuBackdrop),
            }

            nav { class: "mobile-menu__panel",
                button {
                    id: "mobileMenuClose",
                    class: "icon-btn mobile-menu__close",
                    r#type: "button",
                    "aria-label": "Cerrar menú",
                    onclick: move |_| on_event.call(PageEvent::CloseMenu),
                    i { class: "fa-solid fa-xmark" }
                }
                for (href, label) in links {
                    a {
                        key: "{href}",
                        class: "mobile-menu__link",
                        href: "{href}",
                        "data-menu-link": "",
                        onclick: move |_| on_event.call(PageEvent::MenuLinkFollowed),
                        "{label}"
                    }
                }
            }
        }
    }
}
