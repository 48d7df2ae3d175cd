use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::StyleError;
use crate::renderer::TreeRenderer;
use crate::tree::Tree;

/// Identifier of a rendering style inside a [`StyleRegistry`].
///
/// The built-in styles occupy the first fifteen identifiers in a fixed order. Custom styles get
/// the next free identifier when they are registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(pub usize);

impl StyleId {
    pub const ASCII: StyleId = StyleId(0);
    pub const BOX: StyleId = StyleId(1);
    pub const BOX_BOLD: StyleId = StyleId(2);
    pub const ASCII_NARROW: StyleId = StyleId(3);
    pub const BOX_NARROW: StyleId = StyleId(4);
    pub const BOX_BOLD_NARROW: StyleId = StyleId(5);
    pub const WHITE_SPACE: StyleId = StyleId(6);
    pub const ASCII_BULLET: StyleId = StyleId(7);
    pub const BULLET: StyleId = StyleId(8);
    pub const ORDERED: StyleId = StyleId(9);
    pub const NUMBER: StyleId = StyleId(10);
    pub const ALPHA: StyleId = StyleId(11);
    pub const ALPHA_UC: StyleId = StyleId(12);
    pub const ROMAN: StyleId = StyleId(13);
    pub const ROMAN_UC: StyleId = StyleId(14);

    /// Used by [`Tree::render`](crate::Tree::render) and for identifiers nobody registered
    pub const DEFAULT: StyleId = StyleId::BOX;

    /// Look up a built-in style by its kebab-case name (`"box-bold"`, `"roman-uc"`, ...).
    pub fn from_name(name: &str) -> Result<StyleId, StyleError> {
        let wanted = name.trim().to_ascii_lowercase().replace('_', "-");
        BUILTIN_STYLES
            .iter()
            .position(|style| style.name == wanted)
            .map(StyleId)
            .ok_or_else(|| StyleError::UnknownName {
                name: name.to_string(),
                expected: builtin_style_names().join(", "),
            })
    }

    /// Kebab-case name of a built-in style, `None` for custom identifiers
    pub fn name(self) -> Option<&'static str> {
        BUILTIN_STYLES.get(self.0).map(|style| style.name)
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "custom-{}", self.0),
        }
    }
}

/// Markup used to draw one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scaffolding {
    /// Connecting lines that show the tree topology
    Structural {
        /// prefix of a branch that has later siblings
        mid: String,
        /// prefix of the last branch among its siblings
        last: String,
        /// continuation below a branch that has later siblings
        bypass: String,
        /// continuation below the last branch
        blank: String,
    },
    /// Bullets or ordinals, one template per nesting level, cycling when the tree is deeper
    /// than the template list
    List { indent: String, templates: Vec<String> },
}

impl Scaffolding {
    pub fn structural(mid: &str, last: &str, bypass: &str, blank: &str) -> Self {
        Scaffolding::Structural {
            mid: mid.to_string(),
            last: last.to_string(),
            bypass: bypass.to_string(),
            blank: blank.to_string(),
        }
    }

    pub fn list<I, S>(indent: &str, templates: I) -> Result<Self, StyleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let templates: Vec<String> = templates.into_iter().map(Into::into).collect();
        if templates.is_empty() {
            return Err(StyleError::EmptyTemplates);
        }
        Ok(Scaffolding::List {
            indent: indent.to_string(),
            templates,
        })
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Scaffolding::List { .. })
    }
}

struct BuiltinStyle {
    name: &'static str,
    list: bool,
    markup: &'static [&'static str],
}

/// Built-in catalog. For structural styles the markup is mid/last/bypass/blank, for list
/// styles it is the indent followed by the templates.
const BUILTIN_STYLES: [BuiltinStyle; 15] = [
    BuiltinStyle {
        name: "ascii",
        list: false,
        markup: &["|-- ", "'-- ", "|   ", "    "],
    },
    BuiltinStyle {
        name: "box",
        list: false,
        markup: &["├── ", "╰── ", "│   ", "    "],
    },
    BuiltinStyle {
        name: "box-bold",
        list: false,
        markup: &["┣━━ ", "┗━━ ", "┃   ", "    "],
    },
    BuiltinStyle {
        name: "ascii-narrow",
        list: false,
        markup: &["|-", "'-", "| ", "  "],
    },
    BuiltinStyle {
        name: "box-narrow",
        list: false,
        markup: &["├ ", "╰ ", "│ ", "  "],
    },
    BuiltinStyle {
        name: "box-bold-narrow",
        list: false,
        markup: &["┣ ", "┗ ", "┃ ", "  "],
    },
    BuiltinStyle {
        name: "whitespace",
        list: true,
        markup: &["    ", "    "],
    },
    BuiltinStyle {
        name: "ascii-bullet",
        list: true,
        markup: &["  ", "* ", "+ ", "- "],
    },
    BuiltinStyle {
        name: "bullet",
        list: true,
        markup: &["  ", "● ", "○ ", "■ ", "□ "],
    },
    BuiltinStyle {
        name: "ordered",
        list: true,
        markup: &["    ", " 1. ", " a. ", " i. ", " A. ", " I. "],
    },
    BuiltinStyle {
        name: "number",
        list: true,
        markup: &["    ", " 1. "],
    },
    BuiltinStyle {
        name: "alpha",
        list: true,
        markup: &["    ", " a. "],
    },
    BuiltinStyle {
        name: "alpha-uc",
        list: true,
        markup: &["    ", " A. "],
    },
    BuiltinStyle {
        name: "roman",
        list: true,
        markup: &["      ", "   i. "],
    },
    BuiltinStyle {
        name: "roman-uc",
        list: true,
        markup: &["      ", "   I. "],
    },
];

impl BuiltinStyle {
    fn scaffolding(&self) -> Scaffolding {
        if self.list {
            Scaffolding::List {
                indent: self.markup[0].to_string(),
                templates: self.markup[1..].iter().map(|t| t.to_string()).collect(),
            }
        } else {
            Scaffolding::structural(self.markup[0], self.markup[1], self.markup[2], self.markup[3])
        }
    }
}

/// Names of the built-in styles in identifier order
pub fn builtin_style_names() -> Vec<&'static str> {
    BUILTIN_STYLES.iter().map(|style| style.name).collect()
}

/// Catalog of styles a tree can be rendered with.
///
/// A new registry holds the built-in styles. Registration only ever appends, so identifiers
/// handed out earlier stay valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRegistry {
    styles: Vec<Scaffolding>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self {
            styles: BUILTIN_STYLES.iter().map(BuiltinStyle::scaffolding).collect(),
        }
    }

    /// Shared registry holding only the built-in styles
    pub fn builtin() -> &'static StyleRegistry {
        static BUILTIN: OnceLock<StyleRegistry> = OnceLock::new();
        BUILTIN.get_or_init(StyleRegistry::new)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Add a structural style. Best results come from four strings of equal width.
    ///
    /// ```
    /// use printtree::{StyleRegistry, Tree};
    ///
    /// let mut registry = StyleRegistry::new();
    /// let style = registry.register_structural_style(">- ", "*- ", "}  ", "...");
    ///
    /// let mut tree = Tree::new();
    /// let mom = tree.add_branch("Mom");
    /// mom.add_branch("Myself").add_branch("Child");
    /// mom.add_branch("Sister\nBrother");
    ///
    /// assert_eq!(
    ///     registry.render(&tree, style),
    ///     "Mom\n>- Myself\n}  *- Child\n*- Sister\n...Brother\n"
    /// );
    /// ```
    pub fn register_structural_style(
        &mut self,
        mid: &str,
        last: &str,
        bypass: &str,
        blank: &str,
    ) -> StyleId {
        self.push(Scaffolding::structural(mid, last, bypass, blank))
    }

    /// Add a bulleted or ordered list style.
    ///
    /// Each template is used for one nesting level and the list wraps around for deeper trees.
    /// A template holding `1`, `a`, `A`, `i` or `I` is numbered per sibling (decimal, letters,
    /// Roman numerals); spaces left of that character are filled before the number widens the
    /// template. Any other template is a plain bullet.
    ///
    /// ```
    /// use printtree::{StyleRegistry, Tree};
    ///
    /// let mut registry = StyleRegistry::new();
    /// let style = registry.register_list_style("   ", ["(1)", "(•)", "(i)"]).unwrap();
    ///
    /// let mut tree = Tree::new();
    /// let mom = tree.add_branch("Mom");
    /// mom.add_branch("Myself").add_branches(["Child1", "Child2"]);
    /// mom.add_branch("Sister\nBrother");
    ///
    /// assert_eq!(
    ///     registry.render(&tree, style),
    ///     "Mom\n(1)Myself\n   (•)Child1\n   (•)Child2\n(2)Sister\n   Brother\n"
    /// );
    /// ```
    pub fn register_list_style<I, S>(&mut self, indent: &str, templates: I) -> Result<StyleId, StyleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let scaffolding = Scaffolding::list(indent, templates)?;
        Ok(self.push(scaffolding))
    }

    fn push(&mut self, scaffolding: Scaffolding) -> StyleId {
        self.styles.push(scaffolding);
        let id = StyleId(self.styles.len() - 1);
        debug!(style = %id, list = self.styles[id.0].is_list(), "registered style");
        id
    }

    /// Scaffolding for `style`, or the default style when `style` was never registered
    pub fn resolve(&self, style: StyleId) -> &Scaffolding {
        match self.styles.get(style.0) {
            Some(scaffolding) => scaffolding,
            None => {
                debug!(style = style.0, fallback = %StyleId::DEFAULT, "unknown style, using default");
                &self.styles[StyleId::DEFAULT.0]
            }
        }
    }

    /// Render `tree` with one of the styles of this registry
    pub fn render(&self, tree: &Tree, style: StyleId) -> String {
        TreeRenderer::new(self).render(tree, style)
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
