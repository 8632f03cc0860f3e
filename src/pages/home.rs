//! Home page - the link-in-bio landing.
//!
//! Header, planet system, widgets and footer. Page-level UI events go
//! through the [`HomePage`] reducer; this component performs the effects it
//! returns (analytics, storage, theme, alerts).

use dioxus::prelude::*;
use gloo::timers::future::TimeoutFuture;
use orbitlink_core::newsletter::NewsletterOrigin;
use orbitlink_core::{Effect, HomePage, PageEvent};

use crate::components::{
    Accordion, BubbleModal, NewsletterBar, NewsletterForm, NewsletterModal, PatreonBanner,
    PlanetBubble, PlanetSystem, SiteFooter, SiteHeader, ToastHost,
};
use crate::context::{use_analytics, use_preferences, use_site_config};
use crate::platform::{self, shadow};

/// Frequently asked questions shown under the navigator
const FAQ: &[(&str, &str, &str)] = &[
    (
        "faq-que-es",
        "¿Qué es esto?",
        "Un mapa de todo lo que hago: recomendaciones anime, clips de gaming y proyectos de código. Pulsa un planeta para explorarlo.",
    ),
    (
        "faq-buscador",
        "¿Cómo funciona el buscador?",
        "Reúne todas las recomendaciones publicadas en redes y Patreon y te dice dónde ver cada anime.",
    ),
    (
        "faq-apoyar",
        "¿Cómo puedo apoyar?",
        "Con una membresía en Patreon o compartiendo el contenido. ¡Todo suma!",
    ),
];

/// Nodes featured as bubbles
const FEATURED: &[&str] = &["buscador-anime", "anime-lists", "gaming-clips"];

/// Home page component.
#[component]
pub fn Home() -> Element {
    let analytics = use_analytics();
    let config = use_site_config();
    let preferences = use_preferences();

    let booted = use_hook(|| HomePage::boot(preferences.saved_theme(), preferences.newsletter_seen()));
    let mut page = use_signal(|| booted.0.clone());
    let mut bar_email = use_signal(String::new);
    let mut modal_email = use_signal(String::new);

    let run_effects = use_callback(move |effects: Vec<Effect>| {
        for effect in effects {
            match effect {
                Effect::Track(event) => analytics.track(&event),
                Effect::ApplyTheme(theme) => platform::apply_theme(theme),
                Effect::PersistTheme(theme) => {
                    if let Err(e) = preferences.save_theme(theme) {
                        tracing::warn!("Could not persist theme: {}", e);
                    }
                }
                Effect::MarkNewsletterSeen => {
                    if let Err(e) = preferences.mark_newsletter_seen() {
                        tracing::warn!("Could not store newsletter flag: {}", e);
                    }
                }
                Effect::ClearInput(NewsletterOrigin::Modal) => modal_email.set(String::new()),
                Effect::ClearInput(_) => bar_email.set(String::new()),
                Effect::Alert(message) => platform::alert(message),
            }
        }
    });

    let dispatch = use_callback(move |event: PageEvent| {
        let effects = page.write().handle(event);
        run_effects.call(effects);
    });

    // Boot effects and the first-visit newsletter timer
    let delay_ms = config.newsletter_modal_delay_ms;
    use_hook(move || {
        run_effects.call(booted.1.clone());
        if page.peek().wants_newsletter_modal() {
            spawn(async move {
                TimeoutFuture::new(delay_ms).await;
                dispatch.call(PageEvent::NewsletterDelayElapsed);
            });
        }
    });

    // Escape closes the menu and the newsletter modal
    let escapes = use_escape_channel(dispatch);
    use_hook(move || {
        shadow::listen_document_keys(move |event| {
            if event.key() == "Escape" {
                let _ = escapes.unbounded_send(());
            }
        })
        .map(std::rc::Rc::new)
    });

    let state = page();
    let search_path = config.search_path.clone();
    let support_url = config.patreon.link_url.clone();

    rsx! {
        SiteHeader {
            theme: state.theme(),
            menu_open: state.menu_open(),
            search_path: search_path.clone(),
            on_event: dispatch,
        }

        main { class: "home",
            section { class: "hero",
                h1 { class: "hero__title", "Anime, gaming y código" }
                p { class: "hero__subtitle",
                    "Explora el sistema: cada planeta es un proyecto y sus satélites, los módulos que lo forman."
                }
            }

            section { id: "planetas", class: "home__section",
                PlanetSystem {}
            }

            section { class: "card search-card",
                h2 { "Buscador anime" }
                p { "¿Viste una recomendación y no sabes dónde verla? Búscala aquí." }
                a {
                    id: "goSearchBtn",
                    class: "btn btn-primary",
                    href: "{search_path}",
                    onclick: move |_| dispatch.call(PageEvent::SearchFromHomeCard),
                    "Ir al buscador"
                }
            }

            section { class: "home__section",
                PatreonBanner {}
            }

            section { class: "home__section bubbles",
                for node_id in FEATURED {
                    PlanetBubble { key: "{node_id}", node_id: node_id.to_string() }
                }
            }

            section { id: "newsletter", class: "home__section newsletter",
                NewsletterBar {}
                div { class: "card newsletter-inline",
                    h2 { "Newsletter" }
                    p { "Las novedades anime de la semana, directas a tu email." }
                    NewsletterForm {
                        origin: NewsletterOrigin::Bar,
                        email: bar_email,
                        on_event: dispatch,
                    }
                }
            }

            section { id: "faq", class: "home__section faq",
                h2 { "Preguntas frecuentes" }
                for (id, title, body) in FAQ {
                    Accordion {
                        key: "{id}",
                        title: title.to_string(),
                        open: state.accordion_open(id),
                        on_toggle: move |title: String| dispatch.call(PageEvent::ToggleAccordion {
                            id: id.to_string(),
                            title,
                        }),
                        p { "{body}" }
                    }
                }
            }

            section { class: "card support-card",
                h2 { "Apoya el proyecto" }
                p { "Si te gusta el contenido, invítame a un café o únete en Patreon." }
                a {
                    id: "coffeeBtn",
                    class: "btn btn-outline",
                    href: "{support_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    onclick: move |_| dispatch.call(PageEvent::SupportCoffee),
                    i { class: "fa-solid fa-mug-hot" }
                    " Apóyame"
                }
            }
        }

        SiteFooter {
            links: config.social_links.clone(),
            on_event: dispatch,
        }

        NewsletterModal {
            open: state.newsletter_modal_open(),
            email: modal_email,
            on_event: dispatch,
        }
        BubbleModal {}
        ToastHost {}
    }
}

/// Forward Escape presses from a DOM listener into the page reducer.
fn use_escape_channel(dispatch: Callback<PageEvent>) -> futures::channel::mpsc::UnboundedSender<()> {
    let escapes = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        use futures::StreamExt;
        while rx.next().await.is_some() {
            dispatch.call(PageEvent::Escape);
        }
    });
    escapes.tx()
}
