//! Unit tests for docs module
//!
//! Tree building and YAML rendering are in-memory; splicing tests that touch
//! files use a temporary directory.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::{fs, path::Path};

use serde_json::json;
use tempfile::TempDir;

use crate::{
    config::UserConfig,
    docs::{DocsError, FencedRegion, MarkdownSplicer, Node, build, render},
    schema::{NamingRule, SchemaModel, generate},
};

fn schema(text: &str) -> SchemaModel {
    SchemaModel::from_json(text, "string").unwrap()
}

fn names(nodes: &[Node]) -> Vec<&str> {
    nodes.iter().map(|node| node.name.as_str()).collect()
}

mod tree {
    use super::*;

    #[test]
    fn string_property_without_default_renders_empty_string() {
        let nodes = build(&schema(r#"{"properties": {"foo": {"type": "string"}}}"#)).unwrap();

        assert_eq!(nodes, vec![Node::leaf("foo", "", json!(""))]);
    }

    #[test]
    fn property_without_renderable_default_is_left_out() {
        let nodes = build(&schema(
            r#"{"properties": {"count": {"type": "integer"}, "name": {"type": "string", "default": "x"}}}"#,
        ))
        .unwrap();

        assert_eq!(names(&nodes), vec!["name"]);
    }

    #[test]
    fn sibling_order_follows_schema_at_every_depth() {
        let nodes = build(&schema(
            r##"{
                "properties": {
                    "zeta": {"type": "boolean", "default": true},
                    "alpha": {"$ref": "#/$defs/Inner", "description": "Inner settings"},
                    "mid": {"type": "integer", "default": 1}
                },
                "$defs": {
                    "Inner": {
                        "type": "object",
                        "properties": {
                            "y": {"type": "string"},
                            "b": {"properties": {"second": {"default": 2}, "first": {"default": 1}}}
                        }
                    }
                }
            }"##,
        ))
        .unwrap();

        assert_eq!(names(&nodes), vec!["zeta", "alpha", "mid"]);
        assert_eq!(nodes[1].description, "Inner settings");
        assert_eq!(names(&nodes[1].children), vec!["y", "b"]);
        assert_eq!(names(&nodes[1].children[1].children), vec!["second", "first"]);
    }

    #[test]
    fn default_with_nested_properties_becomes_one_branch() {
        let nodes = build(&schema(
            r#"{"properties": {"paging": {"default": {"pager": "less"}, "properties": {"pager": {"type": "string", "default": "less"}}}}}"#,
        ))
        .unwrap();

        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].is_branch());
        assert_eq!(nodes[0].default, None);
        assert_eq!(nodes[0].children, vec![Node::leaf("pager", "", json!("less"))]);
    }

    #[test]
    fn empty_nested_definition_is_a_structurally_empty_node() {
        let nodes = build(&schema(
            r##"{"properties": {"empty": {"$ref": "#/$defs/Empty"}}, "$defs": {"Empty": {"type": "object", "properties": {}}}}"##,
        ))
        .unwrap();

        assert_eq!(nodes, vec![Node::branch("empty", "")]);
    }

    #[test]
    fn missing_root_properties_is_a_decode_error() {
        let result = build(&schema(r#"{"type": "object"}"#));

        assert!(matches!(result, Err(DocsError::SchemaDecode { .. })));
    }

    #[test]
    fn dangling_reference_is_reported() {
        let result = build(&schema(r##"{"properties": {"gui": {"$ref": "#/$defs/Missing"}}}"##));

        match result {
            Err(DocsError::UnknownDefinition { name }) => assert_eq!(name, "Missing"),
            other => panic!("expected unknown definition, got {other:?}"),
        }
    }

    #[test]
    fn self_referencing_definition_is_reported() {
        let result = build(&schema(
            r##"{"properties": {"node": {"$ref": "#/$defs/Node"}}, "$defs": {"Node": {"properties": {"next": {"$ref": "#/$defs/Node"}}}}}"##,
        ));

        match result {
            Err(DocsError::CyclicDefinition { chain }) => assert_eq!(chain, "Node -> Node"),
            other => panic!("expected cycle, got {other:?}"),
        }
    }
}

mod yaml {
    use super::*;

    #[test]
    fn nested_sequence_default_is_a_block_under_its_key() {
        let mut theme = Node::branch("theme", "");
        theme.children.push(Node::leaf(
            "activeBorderColor",
            "Border color of focused window",
            json!(["green", "bold"]),
        ));
        let mut gui = Node::branch("gui", "Config relating to the UI");
        gui.children.push(theme);

        let rendered = render(&[gui]).unwrap();

        assert_eq!(
            rendered,
            "# Config relating to the UI\n\
             gui:\n\
             \x20 theme:\n\
             \x20   # Border color of focused window\n\
             \x20   activeBorderColor:\n\
             \x20     - green\n\
             \x20     - bold\n"
        );
    }

    #[test]
    fn scalars_share_the_key_line() {
        let mut gui = Node::branch("gui", "");
        gui.children.push(Node::leaf("scrollHeight", "", json!(2)));
        gui.children.push(Node::leaf("mouseEvents", "", json!(true)));
        gui.children.push(Node::leaf("emptyList", "", json!([])));

        let rendered = render(&[gui]).unwrap();

        assert_eq!(
            rendered,
            "gui:\n  scrollHeight: 2\n  mouseEvents: true\n  emptyList: []\n"
        );
    }

    #[test]
    fn multi_line_descriptions_become_comment_lines() {
        let node = Node::leaf(
            "method",
            "How updates happen.\n\nOne of 'prompt' or 'never'.",
            json!("prompt"),
        );

        let rendered = render(&[node]).unwrap();

        assert_eq!(
            rendered,
            "# How updates happen.\n#\n# One of 'prompt' or 'never'.\nmethod: prompt\n"
        );
    }

    #[test]
    fn structurally_empty_node_is_an_empty_mapping() {
        let rendered = render(&[Node::branch("empty", "Nothing here")]).unwrap();

        assert_eq!(rendered, "# Nothing here\nempty: {}\n");
    }

    #[test]
    fn top_level_nodes_are_separate_documents() {
        let rendered = render(&[
            Node::leaf("a", "", json!(1)),
            Node::leaf("b", "", json!(2)),
        ])
        .unwrap();

        assert_eq!(rendered, "a: 1\n---\nb: 2\n");
    }

    #[test]
    fn multi_line_string_default_stays_valid_yaml() {
        let mut os = Node::branch("os", "");
        os.children.push(Node::leaf("edit", "", json!("first line\nsecond line")));

        let block = MarkdownSplicer::prepare_block(&render(&[os]).unwrap());
        let parsed: serde_yaml::Value = serde_yaml::from_str(&block).unwrap();

        assert_eq!(parsed["os"]["edit"].as_str(), Some("first line\nsecond line"));
    }

    #[test]
    fn user_config_renders_to_matching_yaml() {
        let model = generate::<UserConfig>(NamingRule::CamelCase).unwrap();
        let block = MarkdownSplicer::prepare_block(&render(&build(&model).unwrap()).unwrap());

        let parsed: serde_yaml::Value = serde_yaml::from_str(&block).unwrap();

        assert_eq!(parsed["gui"]["scrollHeight"].as_i64(), Some(2));
        assert_eq!(parsed["gui"]["nerdFontsVersion"].as_str(), Some(""));
        assert_eq!(parsed["gui"]["theme"]["activeBorderColor"][0].as_str(), Some("green"));
        assert_eq!(parsed["gui"]["theme"]["activeBorderColor"][1].as_str(), Some("bold"));
        assert_eq!(parsed["git"]["paging"]["colorArg"].as_str(), Some("always"));
        assert_eq!(parsed["git"]["commitPrefix"].as_str(), Some(""));
        assert_eq!(parsed["update"]["method"].as_str(), Some("prompt"));
        assert_eq!(parsed["confirmOnQuit"].as_bool(), Some(false));
        assert!(parsed["gui"].get("branchColorPatterns").is_none());
        assert!(block.contains("# Settings for the user interface.\ngui:\n"));
    }
}

mod splice {
    use super::*;

    const MARKDOWN: &str = "# Configuration\n\nIntro text.\n\n## Default\n\nThe defaults:\n\n```yaml\nold: 1\n```\n\n## Keybindings\n\n```yaml\nkeep: true\n```\n";

    fn write_markdown(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("Config.md");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn prepare_block_drops_separators_and_one_line_break() {
        assert_eq!(MarkdownSplicer::prepare_block("a: 1\n---\nb: 2\n"), "a: 1\nb: 2\n");
        assert_eq!(MarkdownSplicer::prepare_block("a: 1\n  ---  \nb: 2\n"), "a: 1\nb: 2\n");
    }

    #[test]
    fn only_the_fenced_content_changes() {
        let spliced = MarkdownSplicer::default()
            .splice_str(MARKDOWN, "new: 2\nmore: 3\n", Path::new("Config.md"))
            .unwrap();

        assert_eq!(
            spliced,
            "# Configuration\n\nIntro text.\n\n## Default\n\nThe defaults:\n\n```yaml\nnew: 2\nmore: 3\n```\n\n## Keybindings\n\n```yaml\nkeep: true\n```\n"
        );
    }

    #[test]
    fn windows_line_endings_are_kept() {
        let markdown = "## Default\r\n```yaml\r\nold: 1\r\n```\r\nafter\r\n";

        let spliced = MarkdownSplicer::default()
            .splice_str(markdown, "new: 2\n", Path::new("Config.md"))
            .unwrap();

        assert_eq!(spliced, "## Default\r\n```yaml\r\nnew: 2\n```\r\nafter\r\n");
    }

    #[test]
    fn fences_before_the_heading_are_ignored() {
        let markdown = "```yaml\nintro: 0\n```\n## Default\n```yaml\nold: 1\n```\n";

        let spliced = MarkdownSplicer::default()
            .splice_str(markdown, "new: 2\n", Path::new("Config.md"))
            .unwrap();

        assert_eq!(spliced, "```yaml\nintro: 0\n```\n## Default\n```yaml\nnew: 2\n```\n");
    }

    #[test]
    fn custom_markers() {
        let splicer = MarkdownSplicer::new(FencedRegion {
            heading: "### Reference".to_string(),
            fence_open: "~~~yml".to_string(),
            fence_close: "~~~".to_string(),
        });

        let spliced = splicer
            .splice_str("### Reference\n~~~yml\nold\n~~~\n", "new\n", Path::new("x.md"))
            .unwrap();

        assert_eq!(spliced, "### Reference\n~~~yml\nnew\n~~~\n");
    }

    #[test]
    fn each_missing_marker_is_named() {
        let cases = [
            ("# Configuration\n```yaml\nold\n```\n", "## Default"),
            ("## Default\nno fence here\n", "```yaml"),
            ("## Default\n```yaml\nold: 1\n", "```"),
        ];

        for (markdown, expected) in cases {
            match MarkdownSplicer::default().splice_str(markdown, "new\n", Path::new("Config.md")) {
                Err(DocsError::MarkerNotFound { marker, .. }) => assert_eq!(marker, expected),
                other => panic!("expected missing '{expected}', got {other:?}"),
            }
        }
    }

    #[test]
    fn splice_file_rewrites_the_region() {
        let dir = TempDir::new().unwrap();
        let path = write_markdown(&dir, MARKDOWN);
        let splicer = MarkdownSplicer::default();

        splicer.splice_file("new: 2\n---\nnext: 3\n", &path).unwrap();

        let updated = fs::read_to_string(&path).unwrap();
        assert!(updated.contains("```yaml\nnew: 2\nnext: 3\n```\n\n## Keybindings"));
        assert!(splicer.is_current("new: 2\n---\nnext: 3\n", &path).unwrap());
        assert!(!splicer.is_current("new: 4\n", &path).unwrap());
        assert!(!dir.path().join("Config.md.tmp").exists());
    }

    #[test]
    fn failed_splice_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let original = "# Configuration\n\n## Default\n\nNo code block yet.\n";
        let path = write_markdown(&dir, original);

        let result = MarkdownSplicer::default().splice_file("new: 2\n", &path);

        assert!(matches!(result, Err(DocsError::MarkerNotFound { .. })));
        assert_eq!(fs::read(&path).unwrap(), original.as_bytes());
    }

    #[test]
    fn unreadable_file_is_reported() {
        let dir = TempDir::new().unwrap();

        let missing = dir.path().join("missing.md");

        let result = MarkdownSplicer::default().splice_file("new: 2\n", &missing);

        assert!(matches!(result, Err(DocsError::FileRead { .. })));
    }
}
