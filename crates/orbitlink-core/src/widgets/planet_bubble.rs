//! Planet bubble: a single node rendered as a clickable bubble whose
//! details open in a shared modal.

use crate::content::{ContentNode, ContentTree, Logo};
use crate::widgets::planet_info::ActionLink;

/// Element id of the modal shared by every bubble
pub const BUBBLE_MODAL_ID: &str = "planetBubbleModal";

/// What the bubble fragment shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleView {
    pub node_id: String,
    /// Title, or the id when the node has none
    pub title: String,
    /// Image source, when the node has one
    pub image: Option<(String, String)>,
    /// Text shown when there is no image
    pub fallback: String,
    /// Value for `--bubble-accent`
    pub accent: Option<&'static str>,
}

impl BubbleView {
    /// Look up `node_id`; `None` leaves the bubble empty.
    pub fn for_id(tree: &ContentTree, node_id: &str) -> Option<Self> {
        if node_id.is_empty() {
            return None;
        }
        tree.node(node_id).map(Self::for_node)
    }

    pub fn for_node(node: &ContentNode) -> Self {
        let image = match node.logo() {
            Logo::Image { src, alt } => Some((src, alt)),
            Logo::Text(_) => None,
        };
        Self {
            node_id: node.id.clone(),
            title: node.title.clone().filter(|t| !t.is_empty()).unwrap_or_else(|| node.id.clone()),
            image,
            fallback: bubble_fallback(node),
            accent: node.accent.map(|a| a.css_var_with_fallback()),
        }
    }
}

/// `logoText`, else the first three characters of the title uppercased,
/// else `"?"`.
pub fn bubble_fallback(node: &ContentNode) -> String {
    if let Some(text) = node.logo_text.as_deref().filter(|t| !t.is_empty()) {
        return text.to_string();
    }
    let abbreviated: String = node
        .title
        .as_deref()
        .unwrap_or("")
        .chars()
        .take(3)
        .collect::<String>()
        .to_uppercase();
    if abbreviated.is_empty() {
        "?".to_string()
    } else {
        abbreviated
    }
}

/// Node details shown in the bubble modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleDetails {
    /// Type label, or `"Nodo"`
    pub kicker: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub logo: Logo,
    pub actions: Vec<ActionLink>,
}

impl BubbleDetails {
    pub fn for_node(node: &ContentNode) -> Self {
        let logo = match node.logo() {
            Logo::Text(text) if text.is_empty() => Logo::Text("?".into()),
            logo => logo,
        };
        Self {
            kicker: node
                .kind
                .clone()
                .filter(|k| !k.is_empty())
                .unwrap_or_else(|| "Nodo".to_string()),
            title: node.title.clone().filter(|t| !t.is_empty()).unwrap_or_else(|| node.id.clone()),
            subtitle: node.subtitle.clone().filter(|s| !s.is_empty()),
            description: node.description.clone().filter(|d| !d.is_empty()),
            logo,
            actions: node.actions.iter().map(ActionLink::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Accent;

    #[test]
    fn fallback_text_rules() {
        let mut node = ContentNode::new("gaming").with_title("Gaming");
        assert_eq!(bubble_fallback(&node), "GAM");

        node.logo_text = Some("GM".into());
        assert_eq!(bubble_fallback(&node), "GM");

        assert_eq!(bubble_fallback(&ContentNode::new("bare")), "?");
    }

    #[test]
    fn bubble_view_uses_id_when_untitled() {
        let mut node = ContentNode::new("anime");
        node.accent = Some(Accent::Blue);
        let view = BubbleView::for_node(&node);
        assert_eq!(view.title, "anime");
        assert_eq!(view.image, None);
        assert_eq!(view.accent, Some("var(--accent-blue, #38bdf8)"));
    }

    #[test]
    fn bubble_lookup_by_id() {
        let tree = ContentTree::builtin().unwrap();
        let view = BubbleView::for_id(&tree, "anime").unwrap();
        assert_eq!(
            view.image,
            Some(("img/logo_anime.webp".to_string(), "Anime".to_string()))
        );
        assert!(BubbleView::for_id(&tree, "").is_none());
        assert!(BubbleView::for_id(&tree, "missing").is_none());
    }

    #[test]
    fn details_kicker_defaults_to_nodo() {
        let details = BubbleDetails::for_node(&ContentNode::new("x"));
        assert_eq!(details.kicker, "Nodo");
        assert_eq!(details.title, "x");
        assert_eq!(details.logo, Logo::Text("?".into()));
    }
}
