use serde::Deserialize;

use crate::tree::Tree;

/// One node of a JSON tree document.
///
/// A bare string is a leaf, an object carries an optional label and its branches:
///
/// ```json
/// {"label": "Fruit", "branches": ["Lemon", {"label": "Orange", "branches": ["Mandarin"]}]}
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum NodeDocument {
    Leaf(String),
    Branch(BranchDocument),
}

/// Object form of a node. Unknown keys are rejected so a misspelled `label` is not read as
/// an unlabeled root.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BranchDocument {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, alias = "children")]
    pub branches: Vec<NodeDocument>,
}

/// A whole JSON document: a single node, or a top-level array read as a forest
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TreeDocument {
    Forest(Vec<NodeDocument>),
    Node(NodeDocument),
}

impl NodeDocument {
    /// Add this node below `parent` through the regular mutation API
    pub fn attach_to(&self, parent: &mut Tree) {
        match self {
            NodeDocument::Leaf(label) => {
                parent.add_branch(label.as_str());
            }
            NodeDocument::Branch(BranchDocument {
                label: Some(label),
                branches,
            }) => {
                let branch = parent.add_branch(label.as_str());
                for child in branches {
                    child.attach_to(branch);
                }
            }
            // an unlabeled object splices its branches, like grafting a root
            NodeDocument::Branch(BranchDocument {
                label: None,
                branches,
            }) => {
                for child in branches {
                    child.attach_to(parent);
                }
            }
        }
    }
}

impl TreeDocument {
    pub fn into_tree(self) -> Tree {
        let mut tree = Tree::new();
        match &self {
            TreeDocument::Forest(nodes) => {
                for node in nodes {
                    node.attach_to(&mut tree);
                }
            }
            TreeDocument::Node(node) => node.attach_to(&mut tree),
        }
        tree
    }
}

/// Input document formats understood by [`TreeParser`](crate::parser::TreeParser)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Outline,
}

impl InputFormat {
    /// `.json` files are JSON, everything else is read as an outline
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Outline,
        }
    }
}
