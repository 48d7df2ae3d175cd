use tracing::debug;

use crate::renderer::traits::*;
use crate::style::{StyleId, StyleRegistry};
use crate::tree::Tree;

/// Renders trees with the styles of one registry
pub struct TreeRenderer<'a> {
    registry: &'a StyleRegistry,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(registry: &'a StyleRegistry) -> Self {
        Self { registry }
    }

    pub fn render(&self, tree: &Tree, style: StyleId) -> String {
        let scaffolding = self.registry.resolve(style);
        debug!(
            %style,
            list = scaffolding.is_list(),
            branches = tree.branches().len(),
            "rendering tree"
        );

        let context = RenderContext::new(scaffolding);
        Render::render(tree, &context)
    }
}
