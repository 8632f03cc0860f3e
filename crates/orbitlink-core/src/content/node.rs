//! Content node record and its display helpers

use serde::{Deserialize, Serialize};

/// Accent color tag carried by a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Orange,
}

impl Accent {
    /// CSS value bound to `--planet-accent` in the navigator.
    pub fn css_var(&self) -> &'static str {
        match self {
            Accent::Blue => "var(--accent-blue)",
            Accent::Orange => "var(--accent-orange)",
        }
    }

    /// CSS value with a hard fallback, for fragments rendered inside a
    /// shadow root where the page variables may be missing.
    pub fn css_var_with_fallback(&self) -> &'static str {
        match self {
            Accent::Blue => "var(--accent-blue, #38bdf8)",
            Accent::Orange => "var(--accent-orange, #fb923c)",
        }
    }
}

/// Call-to-action link attached to a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub label: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub external: bool,
}

/// Visual identity of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Logo {
    /// Image logo; `alt` falls back to `"logo"`
    Image { src: String, alt: String },
    /// Short text or initial
    Text(String),
}

/// One node of the static content tree.
///
/// Field names follow the content document (`logoImage`, `type`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentNode {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_image: Option<String>,
    #[serde(default)]
    pub logo_text: Option<String>,
    #[serde(default)]
    pub accent: Option<Accent>,
    /// Free-text classification label ("Categoría", "Módulo", ...)
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    /// Create a bare node with only an id (used by tests and fixtures).
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            subtitle: None,
            description: None,
            logo_image: None,
            logo_text: None,
            accent: None,
            kind: None,
            actions: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style title setter.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder-style children setter.
    pub fn with_children(mut self, children: Vec<ContentNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Title, or empty string.
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Image logo takes precedence; otherwise `logoText`, then the first
    /// character of the title.
    pub fn logo(&self) -> Logo {
        match non_empty(self.logo_image.as_deref()) {
            Some(src) => Logo::Image {
                src: src.to_string(),
                alt: non_empty(self.title.as_deref()).unwrap_or("logo").to_string(),
            },
            None => Logo::Text(self.initials()),
        }
    }

    fn initials(&self) -> String {
        if let Some(text) = non_empty(self.logo_text.as_deref()) {
            return text.to_string();
        }
        self.title
            .as_deref()
            .and_then(|t| t.chars().next())
            .map(String::from)
            .unwrap_or_default()
    }

    /// Descriptor shown when the node does not carry its own `type`.
    pub fn type_label(&self) -> &str {
        match non_empty(self.kind.as_deref()) {
            Some(kind) => kind,
            None if !self.children.is_empty() => "Planeta",
            None => "Satélite",
        }
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_logo_wins_over_text() {
        let mut node = ContentNode::new("anime").with_title("Anime");
        node.logo_image = Some("img/logo_anime.webp".into());
        node.logo_text = Some("AN".into());

        assert_eq!(
            node.logo(),
            Logo::Image {
                src: "img/logo_anime.webp".into(),
                alt: "Anime".into()
            }
        );
    }

    #[test]
    fn text_logo_falls_back_to_initial() {
        let node = ContentNode::new("gaming").with_title("Gaming");
        assert_eq!(node.logo(), Logo::Text("G".into()));

        let bare = ContentNode::new("bare");
        assert_eq!(bare.logo(), Logo::Text(String::new()));
    }

    #[test]
    fn image_alt_defaults_to_logo() {
        let mut node = ContentNode::new("x");
        node.logo_image = Some("img/x.webp".into());
        assert!(matches!(node.logo(), Logo::Image { alt, .. } if alt == "logo"));
    }

    #[test]
    fn type_label_fallbacks() {
        let leaf = ContentNode::new("leaf");
        assert_eq!(leaf.type_label(), "Satélite");

        let parent = ContentNode::new("parent").with_children(vec![ContentNode::new("c")]);
        assert_eq!(parent.type_label(), "Planeta");

        let mut typed = ContentNode::new("typed");
        typed.kind = Some("Módulo".into());
        assert_eq!(typed.type_label(), "Módulo");
    }

    #[test]
    fn accent_css_values() {
        assert_eq!(Accent::Blue.css_var(), "var(--accent-blue)");
        assert_eq!(
            Accent::Orange.css_var_with_fallback(),
            "var(--accent-orange, #fb923c)"
        );
    }

    #[test]
    fn deserializes_document_field_names() {
        let json = r#"{
            "id": "anime",
            "logoImage": "img/a.webp",
            "type": "Categoría",
            "accent": "blue",
            "actions": [{ "label": "Instagram", "href": "https://example.org", "external": true }]
        }"#;
        let node: ContentNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind.as_deref(), Some("Categoría"));
        assert_eq!(node.accent, Some(Accent::Blue));
        assert!(node.actions[0].external);
        assert!(node.is_leaf());
    }
}
