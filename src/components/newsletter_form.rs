//! Inline Newsletter Forms
//!
//! The page's own signup forms (body bar and first-visit modal). Unlike the
//! Brevo bar these have no backend: the page reducer reports the
//! submission and thanks the visitor.

use dioxus::prelude::*;
use orbitlink_core::newsletter::NewsletterOrigin;
use orbitlink_core::PageEvent;

#[component]
pub fn NewsletterForm(
    origin: NewsletterOrigin,
    /// Input value; cleared by the page after a successful submit
    email: Signal<String>,
    on_event: EventHandler<PageEvent>,
    #[props(default = "Suscribirme".to_string())]
    button_label: String,
) -> Element {
    let mut email = email;
    let form_id = match origin {
        NewsletterOrigin::Modal => "newsletterModalForm",
        _ => "newsletterBarForm",
    };

    rsx! {
        form {
            id: form_id,
            class: "newsletter-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_event.call(PageEvent::SubmitNewsletter {
                    origin,
                    email: email(),
                });
            },
            input {
                r#type: "email",
                class: "newsletter-form__input",
                placeholder: "tu@email.com",
                "aria-label": "Email",
                value: "{email}",
                oninput: move |evt| email.set(evt.value()),
            }
            button { class: "btn btn-primary", r#type: "submit", "{button_label}" }
        }
    }
}

/// First-visit newsletter modal, driven by the page reducer.
#[component]
pub fn NewsletterModal(
    open: bool,
    email: Signal<String>,
    on_event: EventHandler<PageEvent>,
) -> Element {
    rsx! {
        div {
            id: "newsletterModal",
            class: if open { "newsletter-modal" } else { "newsletter-modal hidden" },
            role: "dialog",
            "aria-modal": "true",
            "aria-hidden": if open { "false" } else { "true" },

            div {
                class: "modal-backdrop",
                onclick: move |_| on_event.call(PageEvent::CloseNewsletterModal),
            }
            div { class: "newsletter-modal__dialog",
                button {
                    id: "newsletterModalClose",
                    class: "icon-btn newsletter-modal__close",
                    r#type: "button",
                    "aria-label": "Cerrar",
                    onclick: move |_| on_event.call(PageEvent::CloseNewsletterModal),
                    i { class: "fa-solid fa-xmark" }
                }
                h2 { "Noticias anime en tu email" }
                p { "Recomendaciones, estrenos y novedades. Sin spam." }
                NewsletterForm {
                    origin: NewsletterOrigin::Modal,
                    email,
                    on_event,
                    button_label: "Quiero enterarme".to_string(),
                }
            }
        }
    }
}
