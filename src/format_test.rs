// Unit tests for the response formatter

use super::*;
use crate::diagnostics::{build_records, synthesize};
use crate::types::{BoundingBox, NodeFacts, RawAncestor, ScrollMetrics};
use pretty_assertions::assert_eq;

fn raw(tag: &str, styles: &[(&str, &str)]) -> RawAncestor {
    RawAncestor {
        node: NodeFacts {
            tag: tag.to_string(),
            ..Default::default()
        },
        bounds: BoundingBox {
            x: 10.0,
            y: 200.0,
            width: 120.0,
            height: 40.0,
        },
        styles: styles
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        ..Default::default()
    }
}

#[test]
fn test_arrow_notation() {
    assert_eq!(arrows("10px", "20px", "30px", "40px"), "↑10px →20px ↓30px ←40px");
}

#[test]
fn test_directional_margin_renders_arrows() {
    let chain = vec![raw(
        "div",
        &[
            ("margin-top", "10px"),
            ("margin-right", "20px"),
            ("margin-bottom", "30px"),
            ("margin-left", "40px"),
        ],
    )];
    let records = build_records(&chain);
    let out = render_ancestors(".box", "", &records, &synthesize(&chain, &records));
    assert!(out.contains("margin: ↑10px →20px ↓30px ←40px"), "{out}");
}

#[test]
fn test_centered_margin_is_flagged() {
    let chain = vec![raw(
        "div",
        &[
            ("margin-top", "0px"),
            ("margin-right", "auto"),
            ("margin-bottom", "0px"),
            ("margin-left", "auto"),
        ],
    )];
    let records = build_records(&chain);
    let out = render_ancestors(".box", "", &records, &synthesize(&chain, &records));
    assert!(out.contains("margin: ↑0px →auto ↓0px ←auto (centered)"), "{out}");
}

#[test]
fn test_header_and_indexed_entries() {
    let chain = vec![raw("span", &[]), raw("div", &[])];
    let records = build_records(&chain);
    let out = render_ancestors(".target", "", &records, &synthesize(&chain, &records));
    assert!(out.starts_with("Ancestor Chain: .target\n"));
    assert!(out.contains("[0] <span> 120×40 at (10, 200)"));
    assert!(out.contains("[1] <div>"));
}

#[test]
fn test_notes_are_prefixed_after_header() {
    let chain = vec![raw("span", &[])];
    let records = build_records(&chain);
    let notes = "⚠ Found 3 elements matching .target, using element 1 (first visible)\n";
    let out = render_ancestors(".target", notes, &records, &synthesize(&chain, &records));
    let header_pos = out.find("Ancestor Chain:").unwrap();
    let warn_pos = out.find('⚠').unwrap();
    let entry_pos = out.find("[0]").unwrap();
    assert!(header_pos < warn_pos && warn_pos < entry_pos);
}

#[test]
fn test_default_overflow_has_no_line() {
    let chain = vec![raw("div", &[])];
    let records = build_records(&chain);
    let out = render_ancestors(".box", "", &records, &synthesize(&chain, &records));
    assert!(!out.contains("overflow"), "{out}");
}

#[test]
fn test_single_shorthand_overflow_line() {
    let chain = vec![raw("div", &[("overflow-x", "auto"), ("overflow-y", "auto")])];
    let records = build_records(&chain);
    let out = render_ancestors(".box", "", &records, &synthesize(&chain, &records));
    assert!(out.contains("overflow: auto"), "{out}");
    assert!(!out.contains("overflow-x"), "{out}");
}

#[test]
fn test_differing_axes_are_shown_separately() {
    let mut node = raw("div", &[("overflow-x", "scroll"), ("overflow-y", "hidden")]);
    node.scroll = ScrollMetrics {
        scroll_width: 500.0,
        client_width: 300.0,
        scroll_height: 100.0,
        client_height: 100.0,
    };
    let records = build_records(&[node]);
    let out = render_ancestors(".box", "", &records, &ChainDiagnostics::default());
    assert!(
        out.contains("overflow-x: scroll (scrolls horizontally by 200px), overflow-y: hidden"),
        "{out}"
    );
}

#[test]
fn test_flex_context_line() {
    let mut node = raw("button", &[]);
    node.parent = Some(crate::types::ParentContext {
        display: "flex".to_string(),
        flex_direction: Some("row".to_string()),
        justify_content: Some("space-between".to_string()),
        align_items: Some("center".to_string()),
        gap: Some("8px".to_string()),
        ..Default::default()
    });
    let records = build_records(&[node]);
    let out = render_ancestors(".box", "", &records, &ChainDiagnostics::default());
    assert!(
        out.contains("flex: row, justify: space-between, align-items: center, gap: 8px"),
        "{out}"
    );
}

#[test]
fn test_clipping_point_section() {
    let mut viewport = raw("div", &[("overflow-y", "hidden")]);
    viewport.node.classes = vec!["viewport".to_string()];
    viewport.scroll = ScrollMetrics {
        scroll_height: 124.0,
        client_height: 100.0,
        scroll_width: 300.0,
        client_width: 300.0,
    };
    let chain = vec![raw("span", &[]), viewport];
    let records = build_records(&chain);
    let out = render_ancestors(".target", "", &records, &synthesize(&chain, &records));
    assert!(out.contains("CLIPPING POINT: <div .viewport> clips vertically"), "{out}");
    assert!(out.contains("24px overflow"), "{out}");
}

#[test]
fn test_scrollable_container_section() {
    let mut scroller = raw("main", &[("overflow-y", "auto")]);
    scroller.node.id = Some("content".to_string());
    scroller.scroll = ScrollMetrics {
        scroll_height: 848.0,
        client_height: 600.0,
        scroll_width: 300.0,
        client_width: 300.0,
    };
    let chain = vec![raw("span", &[]), scroller];
    let records = build_records(&chain);
    let out = render_ancestors(".target", "", &records, &synthesize(&chain, &records));
    assert!(
        out.contains("SCROLLABLE CONTAINER: <main #content> scrolls vertically (248px overflow)"),
        "{out}"
    );
}

#[test]
fn test_width_constraint_section() {
    let mut inner = raw("article", &[("max-width", "480px")]);
    inner.bounds.width = 480.0;
    let mut outer = raw("main", &[("max-width", "640px")]);
    outer.bounds.width = 640.0;
    let mut root = raw("div", &[]);
    root.bounds.width = 1200.0;

    let chain = vec![raw("span", &[]), inner, outer, root];
    let records = build_records(&chain);
    let out = render_ancestors(".target", "", &records, &synthesize(&chain, &records));
    assert!(out.contains("WIDTH CONSTRAINT:"), "{out}");
    assert!(out.contains("<article> max-width 480px"), "{out}");
    assert!(out.contains("<main> max-width 640px"), "{out}");
}

#[test]
fn test_subtree_rendering() {
    use crate::types::SubtreeNode;

    let tree = SubtreeNode {
        node: NodeFacts {
            tag: "form".to_string(),
            test_id: Some("signup".to_string()),
            ..Default::default()
        },
        visible: true,
        children: vec![
            SubtreeNode {
                node: NodeFacts {
                    tag: "input".to_string(),
                    id: Some("email".to_string()),
                    ..Default::default()
                },
                visible: true,
                ..Default::default()
            },
            SubtreeNode {
                node: NodeFacts {
                    tag: "button".to_string(),
                    ..Default::default()
                },
                text: "Create account".to_string(),
                visible: false,
                ..Default::default()
            },
        ],
        truncated_children: 3,
        hidden_children: 2,
        ..Default::default()
    };

    let out = render_subtree("", &tree);
    assert!(out.starts_with("DOM Inspection: <form data-testid=\"signup\">\n"));
    assert!(out.contains("<form data-testid=\"signup\"> ✓"));
    assert!(out.contains("  <input #email> ✓"));
    assert!(out.contains("  <button> ✗ \"Create account\""));
    assert!(out.contains("  ... and 3 more children"));
    assert!(out.contains("  (2 hidden children not shown)"));
}

#[test]
fn test_position_rendering() {
    let facts = crate::types::MatchFacts {
        node: NodeFacts {
            tag: "button".to_string(),
            test_id: Some("submit".to_string()),
            ..Default::default()
        },
        visible: true,
        bounds: BoundingBox {
            x: 10.0,
            y: 200.0,
            width: 120.0,
            height: 40.0,
        },
        ..Default::default()
    };
    let out = render_position("", &facts);
    assert!(out.contains("Position: <button data-testid=\"submit\">"));
    assert!(out.contains("box: 120×40 at (10, 200)"));
    assert!(out.contains("center: (70, 220)"));
    assert!(out.contains("visible: ✓"));
}
