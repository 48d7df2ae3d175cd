//! # printtree
//!
//! Render a tree of labeled nodes as text, either with lines that draw the hierarchy or as a
//! bulleted or numbered list.
//!
//! ```
//! use printtree::{StyleId, Tree};
//!
//! let mut tree = Tree::new();
//! let monitors = tree.add_branch("Monitors");
//! let mono = monitors.add_branch("Monochrome");
//! mono.add_branch("Old School").add_branches(["black", "green"]);
//! monitors.add_branch("Color").add_branches(["red", "blue"]);
//!
//! assert_eq!(
//!     tree.render(),
//!     "Monitors\n├── Monochrome\n│   ╰── Old School\n│       ├── black\n│       ╰── green\n╰── Color\n    ├── red\n    ╰── blue\n"
//! );
//!
//! assert_eq!(
//!     tree.render_style(StyleId::ORDERED),
//!     "Monitors\n 1. Monochrome\n     a. Old School\n         i. black\n        ii. green\n 2. Color\n     a. red\n     b. blue\n"
//! );
//! ```
//!
//! Styles live in a [`StyleRegistry`]. [`Tree::render_style`] uses the built-in catalog; create
//! a registry of your own to add custom styles.

pub mod error;
pub mod parser;
pub mod renderer;
pub mod style;
pub mod tree;

pub use error::{ParseError, StyleError};
pub use style::{builtin_style_names, Scaffolding, StyleId, StyleRegistry};
pub use tree::Tree;

#[cfg(test)]
mod tests;
