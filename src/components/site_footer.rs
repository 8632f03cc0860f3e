//! Site Footer Component

use chrono::Datelike;
use dioxus::prelude::*;
use orbitlink_core::config::SocialLink;
use orbitlink_core::PageEvent;

#[component]
pub fn SiteFooter(links: Vec<SocialLink>, on_event: EventHandler<PageEvent>) -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "site-footer",
            nav { class: "footer-social", "aria-label": "Redes sociales",
                for link in links {
                    a {
                        key: "{link.network}-{link.href}",
                        class: "footer-social__link",
                        href: "{link.href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "data-social": "{link.network}",
                        onclick: {
                            let network = link.network.clone();
                            let href = link.href.clone();
                            move |_| on_event.call(PageEvent::SocialLink {
                                network: network.clone(),
                                href: href.clone(),
                            })
                        },
                        "{link.label}"
                    }
                }
            }
            p { class: "site-footer__copy",
                "© "
                span { id: "year", "{year}" }
                " TriplexSolutio"
            }
        }
    }
}
