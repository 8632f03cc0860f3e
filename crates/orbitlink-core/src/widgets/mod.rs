//! Template-backed widgets.
//!
//! Modal, newsletter bar, Patreon banner, planet info panel and planet
//! bubble all share one lifecycle: resolve the fragment URL, load it through
//! the [`TemplateRegistry`], check the structural hooks the widget needs, and
//! hand the markup to the rendering adapter which instantiates it inside a
//! shadow root. A failed fetch turns into an inline error fragment; it is
//! never propagated to the page.

pub mod modal;
pub mod planet_bubble;
pub mod planet_info;

use scraper::{Html, Selector};
use url::Url;

use crate::config::TemplatePaths;
use crate::error::FetchError;
use crate::template::{Markup, TemplateRegistry};

pub use modal::{focusable_query, ModalEvent, ModalState, FOCUSABLE_SELECTORS};
pub use planet_bubble::{bubble_fallback, BubbleDetails, BubbleView, BUBBLE_MODAL_ID};
pub use planet_info::{ActionLink, InfoPanelView};

/// Prepended to fragments whose host must always take up space
pub const HOST_BLOCK_STYLE: &str = "<style>:host{display:block}</style>";

/// The widgets backed by an external fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Modal,
    NewsletterBar,
    PatreonBanner,
    PlanetInfo,
    PlanetBubble,
}

impl WidgetKind {
    /// Tag used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Modal => "modal-element",
            WidgetKind::NewsletterBar => "newsletter-bar",
            WidgetKind::PatreonBanner => "patreon-banner",
            WidgetKind::PlanetInfo => "planet-info",
            WidgetKind::PlanetBubble => "planet-bubble",
        }
    }

    /// Default fragment path for this widget, relative to the document base.
    pub fn default_path<'a>(&self, paths: &'a TemplatePaths) -> &'a str {
        match self {
            WidgetKind::Modal => &paths.modal,
            WidgetKind::NewsletterBar => &paths.newsletter_bar,
            WidgetKind::PatreonBanner => &paths.patreon_banner,
            WidgetKind::PlanetInfo => &paths.planet_info,
            WidgetKind::PlanetBubble => &paths.planet_bubble,
        }
    }

    /// Selectors the widget cannot work without.
    pub fn required_hooks(&self) -> &'static [&'static str] {
        match self {
            WidgetKind::Modal => &[".dialog"],
            WidgetKind::NewsletterBar | WidgetKind::PatreonBanner => &[],
            WidgetKind::PlanetInfo => &[
                ".planet-info",
                "[data-role=\"title\"]",
                "[data-role=\"subtitle\"]",
                "[data-role=\"description\"]",
                "[data-role=\"actions\"]",
            ],
            WidgetKind::PlanetBubble => &[
                ".bubble",
                ".bubble__img",
                ".bubble__fallback",
                ".bubble__title",
            ],
        }
    }

    /// Selectors that only enable part of the widget.
    pub fn optional_hooks(&self) -> &'static [&'static str] {
        match self {
            WidgetKind::Modal => &[".backdrop", ".close"],
            WidgetKind::NewsletterBar => &["#sib-form", "#EMAIL"],
            WidgetKind::PatreonBanner => &["#patreon_banner_button"],
            WidgetKind::PlanetInfo => &["[data-action=\"go-back\"]", "[data-role=\"type\"]"],
            WidgetKind::PlanetBubble => &[],
        }
    }

    fn prepends_host_style(&self) -> bool {
        matches!(self, WidgetKind::NewsletterBar | WidgetKind::PatreonBanner)
    }

    /// Inline fragment shown instead of the widget when loading failed.
    pub fn error_fragment(&self, src: &str, reason: &str) -> String {
        let reason = escape_html(reason);
        match self {
            WidgetKind::Modal => format!(
                "<div part=\"error\" style=\"padding:12px;border:1px solid #b91c1c;border-radius:8px;background:#fef2f2;color:#7f1d1d\">No se pudo cargar el modal ({}).</div>",
                reason
            ),
            WidgetKind::NewsletterBar => format!(
                "<style>:host{{display:block;font:14px/1.4 system-ui}}</style><div class=\"error\">No se pudo cargar el formulario de newsletter: {}</div>",
                reason
            ),
            WidgetKind::PatreonBanner | WidgetKind::PlanetInfo | WidgetKind::PlanetBubble => format!(
                "<style>:host{{display:block;font:14px/1.4 system-ui}}</style><div class=\"error\">No se pudo cargar <code>{}</code>: {}</div>",
                escape_html(src),
                reason
            ),
        }
    }
}

/// Resolve an explicit `src` against the document base, or fall back to
/// the widget default.
pub fn resolve_source(base: &Url, src: Option<&str>, default_path: &str) -> Result<Url, url::ParseError> {
    let path = src.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(default_path);
    base.join(path)
}

/// Which hooks a fragment exposes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookReport {
    pub missing_required: Vec<&'static str>,
    pub missing_optional: Vec<&'static str>,
}

impl HookReport {
    /// All required hooks are present.
    pub fn is_operational(&self) -> bool {
        self.missing_required.is_empty()
    }

    pub fn has(&self, selector: &str) -> bool {
        !self.missing_required.contains(&selector) && !self.missing_optional.contains(&selector)
    }
}

/// Parse `markup` and report which of the widget's hooks are missing.
pub fn inspect_hooks(kind: WidgetKind, markup: &str) -> HookReport {
    let document = Html::parse_fragment(markup);
    let missing = |selectors: &'static [&'static str]| -> Vec<&'static str> {
        selectors
            .iter()
            .copied()
            .filter(|selector| !has_match(&document, selector))
            .collect()
    };
    HookReport {
        missing_required: missing(kind.required_hooks()),
        missing_optional: missing(kind.optional_hooks()),
    }
}

fn has_match(document: &Html, selector: &str) -> bool {
    match Selector::parse(selector) {
        Ok(selector) => document.select(&selector).next().is_some(),
        Err(_) => false,
    }
}

/// Minimal text escaping for interpolating into fragment markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Lifecycle of one widget instance
#[derive(Debug, Clone, PartialEq)]
pub enum MountState {
    /// Not attached yet
    Detached,
    /// Fragment requested; mount point stays empty meanwhile
    Loading { src: Url },
    /// Fragment instantiated
    Ready { src: Url, markup: Markup, hooks: HookReport },
    /// Fetch failed; `fragment` is the inline error shown instead
    Failed { src: String, fragment: String },
}

/// One instance of a template-backed widget.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateWidget {
    kind: WidgetKind,
    state: MountState,
}

impl TemplateWidget {
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            state: MountState::Detached,
        }
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn state(&self) -> &MountState {
        &self.state
    }

    /// Start attaching. Returns the URL to load, or `None` when the instance
    /// was already initialised (attach is idempotent) or the source could
    /// not be resolved.
    pub fn begin_attach(&mut self, base: &Url, src: Option<&str>, default_path: &str) -> Option<Url> {
        if self.state != MountState::Detached {
            return None;
        }
        match resolve_source(base, src, default_path) {
            Ok(url) => {
                self.state = MountState::Loading { src: url.clone() };
                Some(url)
            }
            Err(err) => {
                let shown = src.unwrap_or(default_path).to_string();
                tracing::error!("[{}] invalid template source {}: {}", self.kind.name(), shown, err);
                self.state = MountState::Failed {
                    fragment: self.kind.error_fragment(&shown, &err.to_string()),
                    src: shown,
                };
                None
            }
        }
    }

    /// Complete a pending attach with the fetch outcome.
    pub fn finish(&mut self, result: Result<Markup, FetchError>) {
        let src = match &self.state {
            MountState::Loading { src } => src.clone(),
            _ => return,
        };
        self.state = match result {
            Ok(markup) => {
                let hooks = inspect_hooks(self.kind, &markup);
                if !hooks.is_operational() {
                    tracing::warn!(
                        "[{}] template {} is missing hooks {:?}; widget left inert",
                        self.kind.name(),
                        src,
                        hooks.missing_required
                    );
                }
                MountState::Ready { src, markup, hooks }
            }
            Err(err) => {
                tracing::error!("[{}] {}", self.kind.name(), err);
                MountState::Failed {
                    fragment: self.kind.error_fragment(src.as_str(), &err.to_string()),
                    src: src.to_string(),
                }
            }
        };
    }

    /// Finish synchronously when the registry already holds the fragment.
    pub fn finish_from_cache(&mut self, registry: &TemplateRegistry) -> bool {
        let cached = match &self.state {
            MountState::Loading { src } => registry.cached(src),
            _ => None,
        };
        match cached {
            Some(markup) => {
                self.finish(Ok(markup));
                true
            }
            None => false,
        }
    }

    /// Resolve, load (or reuse) and instantiate in one go.
    pub async fn attach(
        &mut self,
        registry: &TemplateRegistry,
        base: &Url,
        src: Option<&str>,
        default_path: &str,
    ) -> &MountState {
        if let Some(url) = self.begin_attach(base, src, default_path) {
            if !self.finish_from_cache(registry) {
                let result = registry.load(&url).await;
                self.finish(result);
            }
        }
        &self.state
    }

    /// Markup to place in the shadow root: the fragment (with host style
    /// where needed) or the inline error.
    pub fn shadow_markup(&self) -> Option<String> {
        match &self.state {
            MountState::Ready { markup, .. } if self.kind.prepends_host_style() => {
                Some(format!("{}{}", HOST_BLOCK_STYLE, markup))
            }
            MountState::Ready { markup, .. } => Some(markup.to_string()),
            MountState::Failed { fragment, .. } => Some(fragment.clone()),
            MountState::Detached | MountState::Loading { .. } => None,
        }
    }

    /// Fragment loaded and every required hook present.
    pub fn is_operational(&self) -> bool {
        matches!(&self.state, MountState::Ready { hooks, .. } if hooks.is_operational())
    }

    /// Whether an optional or required hook is available.
    pub fn has_hook(&self, selector: &str) -> bool {
        matches!(&self.state, MountState::Ready { hooks, .. } if hooks.has(selector))
    }
}
