#[cfg(test)]
mod formatting_tests {
    use crate::renderer::{Render, RenderContext};
    use crate::{StyleId, StyleRegistry, Tree};

    fn monitors() -> Tree {
        let mut tree = Tree::new();
        let root = tree.add_branch("Monitors");
        let mono = root.add_branch("Monochrome");
        mono.add_branch("Old School").add_branches(["black", "green"]);
        mono.add_branch("Contemporary").add_branches(["black", "white"]);
        root.add_branch("Color").add_branches(["red", "green", "blue"]);
        tree
    }

    fn every_branch_kind() -> Tree {
        let mut tree = Tree::new();
        let root = tree.add_branch("1");
        root.add_branch("a").add_branch("i");
        root.add_branch("b\nB");
        tree
    }

    #[test]
    fn test_root_branches_are_unindented() {
        let mut tree = Tree::new();
        tree.add_branches(["1", "2", "3"]);
        assert_eq!(tree.render_style(StyleId::ASCII), "1\n2\n3\n");
    }

    #[test]
    fn test_children() {
        let mut tree = Tree::new();
        tree.add_branch("1").add_branches(["a", "b"]);
        assert_eq!(tree.render_style(StyleId::ASCII), "1\n|-- a\n'-- b\n");
    }

    #[test]
    fn test_grandchildren() {
        let mut tree = Tree::new();
        tree.add_branch("1").add_branch("a").add_branches(["i", "ii"]);
        assert_eq!(
            tree.render_style(StyleId::ASCII),
            "1\n'-- a\n    |-- i\n    '-- ii\n"
        );
    }

    #[test]
    fn test_multiple_roots() {
        let mut tree = Tree::new();
        tree.add_branch("1").add_branches(["a", "b"]);
        tree.add_branch("2").add_branches(["a", "b"]);
        assert_eq!(
            tree.render_style(StyleId::ASCII),
            "1\n|-- a\n'-- b\n2\n|-- a\n'-- b\n"
        );
    }

    #[test]
    fn test_nephews() {
        let mut tree = Tree::new();
        let root = tree.add_branch("1");
        root.add_branch("a").add_branches(["i", "ii"]);
        root.add_branch("b").add_branches(["i", "ii"]);

        let expected = "\
1
|-- a
|   |-- i
|   '-- ii
'-- b
    |-- i
    '-- ii
";
        assert_eq!(tree.render_style(StyleId::ASCII), expected);
    }

    #[test]
    fn test_multiline_labels_use_flow_padding() {
        let mut tree = Tree::new();
        let root = tree.add_branch("1");
        root.add_branch("a\nalfa\nalpha\nable");
        root.add_branch("b");

        let expected = "\
1
|-- a
|   alfa
|   alpha
|   able
'-- b
";
        assert_eq!(tree.render_style(StyleId::ASCII), expected);
    }

    #[test]
    fn test_multiline_list_labels_use_indent() {
        let mut tree = Tree::new();
        let root = tree.add_branch("1");
        root.add_branch("a\nalfa");
        root.add_branch("b");

        assert_eq!(
            tree.render_style(StyleId::NUMBER),
            "1\n 1. a\n    alfa\n 2. b\n"
        );
    }

    #[test]
    fn test_structural_styles() {
        let tree = every_branch_kind();
        let cases = [
            (StyleId::ASCII, "1\n|-- a\n|   '-- i\n'-- b\n    B\n"),
            (StyleId::BOX, "1\n├── a\n│   ╰── i\n╰── b\n    B\n"),
            (StyleId::BOX_BOLD, "1\n┣━━ a\n┃   ┗━━ i\n┗━━ b\n    B\n"),
            (StyleId::ASCII_NARROW, "1\n|-a\n| '-i\n'-b\n  B\n"),
            (StyleId::BOX_NARROW, "1\n├ a\n│ ╰ i\n╰ b\n  B\n"),
            (StyleId::BOX_BOLD_NARROW, "1\n┣ a\n┃ ┗ i\n┗ b\n  B\n"),
        ];

        for (style, expected) in cases {
            assert_eq!(tree.render_style(style), expected, "style {}", style);
        }
    }

    #[test]
    fn test_bullet_styles() {
        let tree = monitors();
        let cases = [
            (
                StyleId::WHITE_SPACE,
                "\
Monitors
    Monochrome
        Old School
            black
            green
        Contemporary
            black
            white
    Color
        red
        green
        blue
",
            ),
            (
                StyleId::ASCII_BULLET,
                "\
Monitors
* Monochrome
  + Old School
    - black
    - green
  + Contemporary
    - black
    - white
* Color
  + red
  + green
  + blue
",
            ),
            (
                StyleId::BULLET,
                "\
Monitors
● Monochrome
  ○ Old School
    ■ black
    ■ green
  ○ Contemporary
    ■ black
    ■ white
● Color
  ○ red
  ○ green
  ○ blue
",
            ),
        ];

        for (style, expected) in cases {
            assert_eq!(tree.render_style(style), expected, "style {}", style);
        }
    }

    #[test]
    fn test_numbered_styles() {
        let tree = monitors();
        let cases = [
            (
                StyleId::ORDERED,
                "\
Monitors
 1. Monochrome
     a. Old School
         i. black
        ii. green
     b. Contemporary
         i. black
        ii. white
 2. Color
     a. red
     b. green
     c. blue
",
            ),
            (
                StyleId::NUMBER,
                "\
Monitors
 1. Monochrome
     1. Old School
         1. black
         2. green
     2. Contemporary
         1. black
         2. white
 2. Color
     1. red
     2. green
     3. blue
",
            ),
            (
                StyleId::ALPHA_UC,
                "\
Monitors
 A. Monochrome
     A. Old School
         A. black
         B. green
     B. Contemporary
         A. black
         B. white
 B. Color
     A. red
     B. green
     C. blue
",
            ),
            (
                StyleId::ROMAN,
                "\
Monitors
   i. Monochrome
         i. Old School
               i. black
              ii. green
        ii. Contemporary
               i. black
              ii. white
  ii. Color
         i. red
        ii. green
       iii. blue
",
            ),
            (
                StyleId::ROMAN_UC,
                "\
Monitors
   I. Monochrome
         I. Old School
               I. black
              II. green
        II. Contemporary
               I. black
              II. white
  II. Color
         I. red
        II. green
       III. blue
",
            ),
        ];

        for (style, expected) in cases {
            assert_eq!(tree.render_style(style), expected, "style {}", style);
        }
    }

    #[test]
    fn test_list_bullets_cycle() {
        let mut tree = Tree::new();
        tree.add_branch("One")
            .add_branch("Two")
            .add_branch("Three")
            .add_branch("Four")
            .add_branch("Five")
            .add_branch("Six");

        assert_eq!(tree.depth(), 6);
        assert_eq!(
            tree.render_style(StyleId::ASCII_BULLET),
            "One\n* Two\n  + Three\n    - Four\n      * Five\n        + Six\n"
        );
    }

    #[test]
    fn test_unknown_style_uses_box() {
        let tree = every_branch_kind();
        assert_eq!(
            tree.render_style(StyleId(999_999)),
            "1\n├── a\n│   ╰── i\n╰── b\n    B\n"
        );
    }

    #[test]
    fn test_default_render_is_box() {
        let tree = every_branch_kind();
        assert_eq!(tree.render(), tree.render_style(StyleId::BOX));
    }

    #[test]
    fn test_display_uses_whitespace() {
        let tree = monitors();
        assert_eq!(tree.to_string(), tree.render_style(StyleId::WHITE_SPACE));
    }

    #[test]
    fn test_render_is_repeatable() {
        let tree = monitors();
        let registry = StyleRegistry::new();
        for index in 0..registry.len() {
            let style = StyleId(index);
            assert_eq!(registry.render(&tree, style), registry.render(&tree, style));
        }
    }

    #[test]
    fn test_render_context_on_subtree() {
        // rendering a labeled node directly prints only what is below it
        let tree = monitors();
        let scaffolding = StyleRegistry::builtin().resolve(StyleId::ASCII);
        let color = &tree.branches()[0].branches()[1];

        let output = Render::render(color, &RenderContext::new(scaffolding));
        assert_eq!(output, "red\ngreen\nblue\n");
    }

    #[test]
    fn test_unlabeled_nested_node_is_blank_line() {
        let mut tree = Tree::new();
        let root = tree.add_branch("1");
        root.add_branch("a");
        root.branches_mut()[0] = Tree::new();
        root.add_branch("b");

        assert_eq!(tree.render_style(StyleId::ASCII), "1\n|-- \n'-- b\n");
    }
}
