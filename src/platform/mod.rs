//! Browser adapters.
//!
//! Implementations of the core collaborator traits (template fetching,
//! preference storage, analytics) plus the small amount of direct DOM work
//! the shadow-root widgets need.

pub mod analytics;
pub mod fetch;
pub mod shadow;
pub mod storage;

use orbitlink_core::{SiteError, SiteResult, Theme};
use url::Url;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

/// The document base URL fragment sources are resolved against.
pub fn document_base_url() -> SiteResult<Url> {
    let base = document()
        .and_then(|doc| doc.base_uri().ok().flatten())
        .ok_or_else(|| SiteError::InvalidConfig("document has no base URI".into()))?;
    Ok(Url::parse(&base)?)
}

/// Set `data-theme` on the document element.
pub fn apply_theme(theme: Theme) {
    let Some(root) = document().and_then(|doc| doc.document_element()) else {
        return;
    };
    if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
        tracing::warn!("Could not apply theme {}: {:?}", theme.as_str(), e);
    }
}

/// Blocking browser alert used by the page newsletter forms.
pub fn alert(message: &str) {
    gloo::dialogs::alert(message);
}
