use dioxus::prelude::*;
use orbitlink_core::widgets::BubbleDetails;

use crate::context::{SiteServices, Toasts};
use crate::pages::{Home, NotFound};
use crate::theme::{root_variables, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - Link-in-bio home with the planet system
/// - anything else - Not found page linking back home
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Loads the site services once, provides them as context and mounts the
/// router. A content tree that fails validation leaves an inline error.
#[component]
pub fn App() -> Element {
    let services = use_hook(|| SiteServices::load().map_err(|e| e.to_string()));

    rsx! {
        style { {root_variables()} }
        style { {GLOBAL_STYLES} }
        match services {
            Ok(services) => rsx! { SiteRoot { services } },
            Err(reason) => {
                tracing::error!("Failed to load site content: {}", reason);
                rsx! {
                    div { class: "site-error",
                        h1 { "No se pudo cargar el contenido" }
                        p { "{reason}" }
                    }
                }
            }
        }
    }
}

/// Provides site context to everything under the router.
#[component]
fn SiteRoot(services: SiteServices) -> Element {
    use_context_provider(|| services);
    use_context_provider(Toasts::new);
    use_context_provider(|| Signal::new(Option::<BubbleDetails>::None));

    rsx! {
        Router::<Route> {}
    }
}
