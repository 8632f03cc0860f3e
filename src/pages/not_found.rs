use dioxus::prelude::*;

use crate::app::Route;

/// Fallback for unknown paths.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("No route for /{}", path);

    rsx! {
        main { class: "not-found",
            div { class: "card not-found__card",
                h1 { "404" }
                p { "No encontramos /{path} en este sistema." }
                Link { class: "btn btn-primary", to: Route::Home {}, "Volver al inicio" }
            }
        }
    }
}
