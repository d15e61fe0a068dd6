//! End-to-end tests: JSON document, configuration, render forest, terminal lines.

use docterm::docterm::ast::Node;
use docterm::docterm::config::{Loader, RenderConfig};
use docterm::docterm::layout::{to_plain_text, Layout, Theme};
use docterm::docterm::render::RenderVisitor;
use rstest::rstest;

const SUM: &str = include_str!("fixtures/sum.json");
const BROKEN_LIST: &str = include_str!("fixtures/broken_list.json");

fn layout_at(width: usize) -> Layout {
    let config = Loader::new()
        .width(width)
        .expect("override to apply")
        .build()
        .expect("config to build");
    Layout::new(&config).expect("layout to build")
}

fn render(layout: &Layout, source: &str) -> String {
    let root = Node::from_json(source).expect("fixture to parse");
    to_plain_text(&layout.render_document(&root).expect("fixture to render"))
}

#[test]
fn test_numpy_style_document_at_forty_columns() {
    let text = render(&layout_at(40), SUM);
    insta::assert_snapshot!(text, @r##"
    numpy.sum(a, axis=None)
    Sum of array elements over a given
    axis.

    Parameters

    a : array_like
      Elements to sum.

    axis : int, optional
      Axis or axes along which a sum is
      performed.

    {"type":"admonition_title","children":[{"type":"text","value":"Note"}]}
    │ Arithmetic is modular when using
    │ integer types.
    │
      - first
      - see :py:func:`numpy.add`
    {"type":"math","value":"x"}
    {"type":"comment","value":"internal note"}
    "##);
}

#[rstest]
#[case(30)]
#[case(40)]
#[case(80)]
fn test_rows_stay_within_width_except_oversized_tokens(#[case] width: usize) {
    let text = render(&layout_at(width), SUM);
    for row in text.lines() {
        let oversized = row.trim_start().starts_with('{');
        assert!(
            oversized || row.chars().count() <= width,
            "row {row:?} is wider than {width}"
        );
    }
}

#[test]
fn test_unknown_kinds_survive_parsing() {
    let root = Node::from_json(SUM).unwrap();
    let unknown: Vec<&Node> = root.children().iter().filter(|n| n.is_unknown()).collect();
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].kind(), "comment");
}

#[test]
fn test_styles_reach_the_terminal_lines() {
    let root = Node::from_json(SUM).unwrap();
    let layout = layout_at(40);
    let lines = layout.render_document(&root).unwrap();
    let theme = Theme::default();

    let style_of = |content: &str| {
        lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .find(|span| span.content == content)
            .map(|span| span.style)
            .unwrap_or_else(|| panic!("no span {content:?}"))
    };
    assert_eq!(style_of(":py:func:`numpy.add`"), theme.directive);
    assert_eq!(style_of("axis"), theme.parameter);
    assert_eq!(style_of("int, optional"), theme.type_annotation);
    assert_eq!(style_of("numpy.sum(a, axis=None)"), theme.signature);
    assert_eq!(style_of(r#"{"type":"math","value":"x"}"#), theme.unimplemented);
}

#[test]
fn test_debug_mode_labels_blocks() {
    let config = Loader::new()
        .set_override("layout.width", 40i64)
        .unwrap()
        .set_override("layout.debug", true)
        .unwrap()
        .build()
        .unwrap();
    let text = render(&Layout::new(&config).unwrap(), SUM);
    let rows: Vec<&str> = text.lines().collect();

    assert_eq!(rows[0], "[root]");
    assert!(rows.contains(&"[admonition]"));
    assert!(rows.contains(&"[list]"));

    let plain = render(&layout_at(40), SUM);
    assert_eq!(rows.len(), plain.lines().count() + 3);
}

#[test]
fn test_same_forest_renders_identically_twice() {
    let root = Node::from_json(SUM).unwrap();
    let first = RenderVisitor.render_document(&root).unwrap();
    let second = RenderVisitor.render_document(&root).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_contract_violation_aborts_layout() {
    let root = Node::from_json(BROKEN_LIST).unwrap();
    let err = layout_at(40).render_document(&root).unwrap_err();
    assert!(err.is_contract_violation());
}

#[rstest]
#[case::parameter_without_type(
    r#"{"type": "parameter", "param": "x", "desc": []}"#,
    "malformed `parameter` node"
)]
#[case::list_item_without_children(
    r#"{"type": "list", "children": [{"type": "list_item"}]}"#,
    "malformed `list_item` node"
)]
#[case::directive_without_value(
    r#"{"type": "paragraph", "children": [{"type": "directive", "role": "func"}]}"#,
    "malformed `directive` node"
)]
fn test_known_kind_with_missing_field_is_an_error(#[case] child: &str, #[case] message: &str) {
    let source = format!(r#"{{"type": "root", "children": [{child}]}}"#);
    let err = Node::from_json(&source).unwrap_err();
    assert!(err.is_contract_violation(), "{err}");
    assert!(err.to_string().contains(message), "{err}");
}

#[test]
fn test_invalid_json_is_reported() {
    let err = Node::from_json("{ not json").unwrap_err();
    assert!(err.to_string().starts_with("invalid document json"));
}

#[test]
fn test_zero_width_config_is_rejected() {
    let err = Layout::new(&RenderConfig::default().with_width(0)).unwrap_err();
    assert!(err.to_string().contains("invalid layout width 0"));
}

#[test]
fn test_one_column_still_lays_out() {
    let text = render(&layout_at(1), SUM);
    assert!(text.lines().any(|row| row.trim_start() == "Parameters"));
}
