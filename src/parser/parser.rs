use tracing::debug;

use crate::error::ParseError;
use crate::parser::types::*;
use crate::tree::Tree;

/// Columns a tab counts for when measuring outline indentation
const TAB_WIDTH: usize = 4;

/// Builds a [`Tree`] from a text document
pub struct TreeParser {
    format: InputFormat,
}

impl TreeParser {
    pub fn new(format: InputFormat) -> Self {
        Self { format }
    }

    pub fn parse(&self, input: &str) -> Result<Tree, ParseError> {
        let tree = match self.format {
            InputFormat::Json => self.parse_json(input)?,
            InputFormat::Outline => self.parse_outline(input)?,
        };
        debug!(format = ?self.format, depth = tree.depth(), "parsed tree");
        Ok(tree)
    }

    pub fn parse_json(&self, input: &str) -> Result<Tree, ParseError> {
        let document: TreeDocument = serde_json::from_str(input)?;
        Ok(document.into_tree())
    }

    /// One label per line, nested by indentation.
    ///
    /// A line becomes a branch of the closest preceding line that is indented less. Blank lines
    /// are skipped and the first non-blank line sets the top-level indentation.
    ///
    /// ```
    /// use printtree::parser::{InputFormat, TreeParser};
    ///
    /// let outline = "Fruit\n  Lemon\n  Orange\n    Mandarin\n  Lime\n";
    /// let tree = TreeParser::new(InputFormat::Outline).parse(outline).unwrap();
    /// assert_eq!(tree.depth(), 3);
    /// ```
    pub fn parse_outline(&self, input: &str) -> Result<Tree, ParseError> {
        let mut tree = Tree::new();
        // indentation of each open level, paired with the index path to that node
        let mut open: Vec<(usize, usize)> = Vec::new();
        let mut top_level: Option<usize> = None;

        for (line_number, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let width = indentation(line);
            let top = *top_level.get_or_insert(width);
            if width < top {
                return Err(ParseError::OutlineUnderflow {
                    line: line_number + 1,
                });
            }

            while open.last().is_some_and(|&(indent, _)| indent >= width) {
                open.pop();
            }

            let parent = open
                .iter()
                .fold(&mut tree, |node, &(_, index)| &mut node.branches_mut()[index]);
            parent.add_branch(line.trim());
            let index = parent.branches().len() - 1;
            open.push((width, index));
        }

        Ok(tree)
    }
}

fn indentation(line: &str) -> usize {
    line.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}
