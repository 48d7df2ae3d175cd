use crate::renderer::ordinal::expand_template;
use crate::renderer::traits::RenderContext;
use crate::style::Scaffolding;

/// Position of a branch among its siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiblingPosition {
    pub index: usize,
    pub count: usize,
}

impl SiblingPosition {
    pub fn new(index: usize, count: usize) -> Self {
        Self { index, count }
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.count
    }

    /// 1-based ordinal used by numbered list styles
    pub fn ordinal(&self) -> usize {
        self.index + 1
    }
}

/// Helper for the markup written in front of labels
pub struct ScaffoldRenderer;

impl ScaffoldRenderer {
    /// Prefix of the first line of a label. Top-level branches get none.
    pub fn label_padding(&self, context: &RenderContext<'_>, position: SiblingPosition) -> String {
        if context.depth == 0 {
            return String::new();
        }

        match context.scaffolding {
            Scaffolding::Structural { mid, last, .. } => {
                if position.is_last() {
                    last.clone()
                } else {
                    mid.clone()
                }
            }
            Scaffolding::List { templates, .. } => {
                // registration rejects empty template lists, but the variant is public
                let Some(template) = templates.get((context.depth - 1) % templates.len().max(1))
                else {
                    return String::new();
                };
                expand_template(template, position.ordinal())
            }
        }
    }

    /// Prefix of the continuation lines of a label, also added to the padding of the
    /// branch's own branches
    pub fn flow_padding<'a>(&self, context: &RenderContext<'a>, position: SiblingPosition) -> &'a str {
        if context.depth == 0 {
            return "";
        }

        let scaffolding: &'a Scaffolding = context.scaffolding;
        match scaffolding {
            Scaffolding::Structural { bypass, blank, .. } => {
                if position.is_last() {
                    blank.as_str()
                } else {
                    bypass.as_str()
                }
            }
            Scaffolding::List { indent, .. } => indent.as_str(),
        }
    }
}
