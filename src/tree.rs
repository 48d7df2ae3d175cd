use std::cmp::Ordering;
use std::fmt;

use crate::style::{StyleId, StyleRegistry};

/// A labeled node together with the branches below it.
///
/// A tree created with [`Tree::new`] has no label and is a root: rendering it prints only its
/// branches, so one root can hold several visual top-level entries.
///
/// ```
/// use printtree::Tree;
///
/// let mut tree = Tree::new();
/// let fruit = tree.add_branch("Fruit");
/// fruit.add_branch("Lemon");
/// fruit.add_branch("Orange").add_branch("Mandarin");
/// fruit.add_branch("Lime");
///
/// assert_eq!(
///     tree.render(),
///     "Fruit\n├── Lemon\n├── Orange\n│   ╰── Mandarin\n╰── Lime\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    label: Option<String>,
    branches: Vec<Tree>,
}

impl Tree {
    /// An unlabeled root
    pub fn new() -> Self {
        Self::default()
    }

    /// A labeled node without branches. Use it to build a subtree for [`Tree::graft`].
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            branches: Vec::new(),
        }
    }

    /// `None` for a root
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.label.is_none()
    }

    pub fn branches(&self) -> &[Tree] {
        &self.branches
    }

    pub fn branches_mut(&mut self) -> &mut [Tree] {
        &mut self.branches
    }

    /// Append a branch and return it so more levels can be chained onto it
    pub fn add_branch(&mut self, label: impl Into<String>) -> &mut Tree {
        self.branches.push(Tree::with_label(label));
        let last = self.branches.len() - 1;
        &mut self.branches[last]
    }

    /// Append several branches in order and return them in the same order
    pub fn add_branches<I, S>(&mut self, labels: I) -> &mut [Tree]
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let start = self.branches.len();
        self.branches.extend(labels.into_iter().map(Tree::with_label));
        &mut self.branches[start..]
    }

    /// Append a branch with a formatted label.
    ///
    /// ```
    /// use printtree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let users = tree.add_branch("/Users (disk space)");
    /// users.add_branch_fmt(format_args!("{:<12} ({:>6}MB)", "lister", 12));
    /// users.add_branch_fmt(format_args!("{:<12} ({:>6}MB)", "rimmer", 876252));
    ///
    /// assert_eq!(
    ///     tree.render(),
    ///     "/Users (disk space)\n├── lister       (    12MB)\n╰── rimmer       (876252MB)\n"
    /// );
    /// ```
    pub fn add_branch_fmt(&mut self, args: fmt::Arguments<'_>) -> &mut Tree {
        self.add_branch(fmt::format(args))
    }

    /// Attach `other` below this node. A root contributes its branches directly, a labeled
    /// node is appended as a single branch.
    pub fn graft(&mut self, other: Tree) {
        match other.label {
            None => self.branches.extend(other.branches),
            Some(_) => self.branches.push(other),
        }
    }

    /// Number of levels below this node: 0 for a leaf
    pub fn depth(&self) -> usize {
        self.branches
            .iter()
            .map(|branch| 1 + branch.depth())
            .max()
            .unwrap_or(0)
    }

    /// Sort the branches of this node by label, keeping the order of equal labels
    pub fn sort(&mut self) {
        self.sort_by(|a, b| a.label.cmp(&b.label));
    }

    /// Sort the branches of this node and of every node below it by label
    pub fn deep_sort(&mut self) {
        self.deep_sort_by(|a, b| a.label.cmp(&b.label));
    }

    /// Stable sort of the branches of this node with a custom comparator
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Tree, &Tree) -> Ordering,
    {
        self.branches.sort_by(compare);
    }

    /// Stable sort of every level of the tree with a custom comparator
    pub fn deep_sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Tree, &Tree) -> Ordering,
    {
        self.deep_sort_with(&mut compare);
    }

    fn deep_sort_with<F>(&mut self, compare: &mut F)
    where
        F: FnMut(&Tree, &Tree) -> Ordering,
    {
        self.branches.sort_by(|a, b| compare(a, b));
        for branch in &mut self.branches {
            branch.deep_sort_with(compare);
        }
    }

    /// Render with the default style ([`StyleId::BOX`])
    pub fn render(&self) -> String {
        self.render_style(StyleId::DEFAULT)
    }

    /// Render with one of the built-in styles. Identifiers past the built-in catalog fall back
    /// to the default style; custom styles are rendered through their [`StyleRegistry`].
    pub fn render_style(&self, style: StyleId) -> String {
        StyleRegistry::builtin().render(self, style)
    }
}

/// Whitespace-indented outline of the tree
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_style(StyleId::WHITE_SPACE))
    }
}
