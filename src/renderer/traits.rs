use crate::style::Scaffolding;

/// State threaded through one recursive render
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// 0 while rendering the top-level branches
    pub depth: usize,
    /// Accumulated prefix written before every line at this level
    pub padding: String,
    pub scaffolding: &'a Scaffolding,
}

impl<'a> RenderContext<'a> {
    pub fn new(scaffolding: &'a Scaffolding) -> Self {
        Self {
            depth: 0,
            padding: String::new(),
            scaffolding,
        }
    }

    /// Context for the branches of a node whose continuation prefix is `flow`
    pub fn descend(&self, flow: &str) -> Self {
        Self {
            depth: self.depth + 1,
            padding: format!("{}{}", self.padding, flow),
            scaffolding: self.scaffolding,
        }
    }
}

/// Core rendering trait: append the lines of `self` to `output`
pub trait Render {
    fn render_into(&self, context: &RenderContext<'_>, output: &mut String);

    fn render(&self, context: &RenderContext<'_>) -> String {
        let mut output = String::new();
        self.render_into(context, &mut output);
        output
    }
}
