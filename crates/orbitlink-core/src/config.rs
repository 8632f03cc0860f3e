//! Site configuration.
//!
//! Parsed once from the embedded `data/site.json`. Every field has a default
//! so a partial document still yields a usable config.

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

const BUILTIN_CONFIG: &str = include_str!("../data/site.json");

/// Fragment paths of the template-backed widgets, relative to the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatePaths {
    pub modal: String,
    pub newsletter_bar: String,
    pub patreon_banner: String,
    pub planet_info: String,
    pub planet_bubble: String,
}

impl Default for TemplatePaths {
    fn default() -> Self {
        Self {
            modal: "elements/modal.html".into(),
            newsletter_bar: "elements/newsletterBar.html".into(),
            patreon_banner: "elements/patreonBanner.html".into(),
            planet_info: "elements/planetInfo.html".into(),
            planet_bubble: "elements/planetBubble.html".into(),
        }
    }
}

/// Patreon banner analytics parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatreonConfig {
    pub link_url: String,
    pub banner_location: String,
}

impl Default for PatreonConfig {
    fn default() -> Self {
        Self {
            link_url: "https://www.patreon.com/triplexsolutio/membership".into(),
            banner_location: "anime_search_banner".into(),
        }
    }
}

/// Footer social link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Analytics `network` parameter
    pub network: String,
    pub label: String,
    pub href: String,
}

/// Top-level site configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub templates: TemplatePaths,
    /// Delay before the first-visit newsletter modal opens
    pub newsletter_modal_delay_ms: u32,
    /// Target of the header and home-card search buttons
    pub search_path: String,
    pub patreon: PatreonConfig,
    pub social_links: Vec<SocialLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            templates: TemplatePaths::default(),
            newsletter_modal_delay_ms: 1800,
            search_path: "/buscador-anime".into(),
            patreon: PatreonConfig::default(),
            social_links: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config document.
    pub fn from_json(json: &str) -> SiteResult<Self> {
        serde_json::from_str(json).map_err(|e| SiteError::InvalidConfig(e.to_string()))
    }

    /// The embedded config, or defaults when it cannot be parsed.
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Falling back to default site config: {}", e);
                Self::default()
            }
        }
    }
}
