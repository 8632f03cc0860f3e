//! Static content tree: brand → categories → modules.
//!
//! The tree is hand-authored in `data/planet_tree.json` and embedded at
//! compile time. Adding a node means editing that document.

mod node;
mod tree;

pub use node::{Accent, Action, ContentNode, Logo};
pub use tree::{ContentTree, NodeLookup};
