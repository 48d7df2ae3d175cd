use crate::renderer::components::*;
use crate::renderer::traits::*;
use crate::tree::Tree;

impl Render for Tree {
    fn render_into(&self, context: &RenderContext<'_>, output: &mut String) {
        let scaffold_renderer = ScaffoldRenderer;
        let count = self.branches().len();

        for (index, branch) in self.branches().iter().enumerate() {
            let position = SiblingPosition::new(index, count);
            let flow = scaffold_renderer.flow_padding(context, position);

            // an unlabeled node placed below another node prints as an empty line
            let label = branch.label().unwrap_or_default();
            for (line_index, line) in label.split('\n').enumerate() {
                output.push_str(&context.padding);
                if line_index == 0 {
                    output.push_str(&scaffold_renderer.label_padding(context, position));
                } else {
                    output.push_str(flow);
                }
                output.push_str(line);
                output.push('\n');
            }

            branch.render_into(&context.descend(flow), output);
        }
    }
}
