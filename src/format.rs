//! Fixed-format text rendering of inspection results.
//!
//! The token choices (directional arrows, check marks, the warning glyph,
//! the ALL-CAPS diagnostic section names) are load-bearing: downstream
//! consumers and tests match on the literal substrings.

use crate::describe::describe;
use crate::diagnostics::{
    AncestorRecord, ChainDiagnostics, ContainerContext, MarginInfo, SideValues,
};
use crate::types::{MatchFacts, SubtreeNode};

/// Directional-arrow notation for four-sided values:
/// `↑10px →20px ↓30px ←40px`.
pub fn arrows(top: &str, right: &str, bottom: &str, left: &str) -> String {
    format!("↑{top} →{right} ↓{bottom} ←{left}")
}

fn sides_line(label: &str, sides: &SideValues) -> String {
    if sides.uniform() {
        format!("{label}: {}", sides.top)
    } else if label == "border" {
        // Border widths read better labeled per side.
        format!(
            "{label}: top: {}, right: {}, bottom: {}, left: {}",
            sides.top, sides.right, sides.bottom, sides.left
        )
    } else {
        format!(
            "{label}: {}",
            arrows(&sides.top, &sides.right, &sides.bottom, &sides.left)
        )
    }
}

fn margin_line(margin: &MarginInfo) -> String {
    let mut line = if margin.sides.uniform() {
        format!("margin: {}", margin.sides.top)
    } else {
        sides_line("margin", &margin.sides)
    };
    if margin.centered {
        line.push_str(" (centered)");
    }
    line
}

fn overflow_line(record: &AncestorRecord) -> Option<String> {
    let (x, y) = record.overflow.as_ref()?;

    let annotate = |axis: &crate::diagnostics::OverflowAxis, adverb: &str| -> String {
        if axis.clipped {
            format!("{} (clips {adverb} by {}px)", axis.mode, axis.amount.round())
        } else if axis.scrollable {
            format!(
                "{} (scrolls {adverb} by {}px)",
                axis.mode,
                axis.amount.round()
            )
        } else {
            axis.mode.clone()
        }
    };

    if x.mode == y.mode && !x.clipped && !x.scrollable && !y.clipped && !y.scrollable {
        return Some(format!("overflow: {}", x.mode));
    }
    if x.mode == y.mode && x.amount == y.amount && x.clipped == y.clipped
        && x.scrollable == y.scrollable
    {
        return Some(format!("overflow: {}", annotate(y, "vertically & horizontally")));
    }
    if x.mode == "visible" {
        return Some(format!("overflow-y: {}", annotate(y, "vertically")));
    }
    if y.mode == "visible" {
        return Some(format!("overflow-x: {}", annotate(x, "horizontally")));
    }
    Some(format!(
        "overflow-x: {}, overflow-y: {}",
        annotate(x, "horizontally"),
        annotate(y, "vertically")
    ))
}

fn container_line(container: &ContainerContext) -> String {
    match container {
        ContainerContext::Flex {
            direction,
            justify,
            align_items,
            gap,
        } => format!(
            "flex: {direction}, justify: {justify}, align-items: {align_items}, gap: {gap}"
        ),
        ContainerContext::Grid { columns, rows, gap } => {
            format!("grid: columns {columns}, rows {rows}, gap: {gap}")
        }
    }
}

/// Render one indexed ancestor entry with its indented detail lines.
fn render_record(index: usize, record: &AncestorRecord) -> String {
    let mut out = format!(
        "[{index}] {} {}×{} at ({}, {})\n",
        describe(&record.node),
        record.bounds.width,
        record.bounds.height,
        record.bounds.x,
        record.bounds.y
    );

    let mut width = format!("width: {}", record.width);
    if let Some(max_width) = &record.max_width {
        width.push_str(&format!(", max-width: {max_width}"));
    }
    out.push_str(&format!("    {width}\n"));

    if let Some(margin) = &record.margin {
        out.push_str(&format!("    {}\n", margin_line(margin)));
    }
    if let Some(padding) = &record.padding {
        out.push_str(&format!("    {}\n", sides_line("padding", padding)));
    }
    if let Some(border) = &record.border {
        out.push_str(&format!("    {}\n", sides_line("border", border)));
    }
    if let Some(line) = overflow_line(record) {
        out.push_str(&format!("    {line}\n"));
    }
    if let Some(container) = &record.container {
        out.push_str(&format!("    {}\n", container_line(container)));
    }

    out
}

/// Render the full ancestor-chain response: header, selection notes, indexed
/// entries, then the synthesized diagnostic sections.
pub fn render_ancestors(
    original_selector: &str,
    notes: &str,
    records: &[AncestorRecord],
    diag: &ChainDiagnostics,
) -> String {
    let mut out = format!("Ancestor Chain: {original_selector}\n");
    if !notes.is_empty() {
        out.push_str(notes);
    }
    out.push('\n');

    for (i, record) in records.iter().enumerate() {
        out.push_str(&render_record(i, record));
    }

    let mut sections = Vec::new();

    if let Some(clip) = &diag.clipping_point {
        let record = &records[clip.index];
        sections.push(format!(
            "CLIPPING POINT: {} clips {} ({}: hidden, {}px overflow)",
            describe(&record.node),
            clip.axis.adverb(),
            clip.mode_property,
            clip.amount.round()
        ));
    }

    if !diag.width_constraints.is_empty() {
        let parts: Vec<String> = diag
            .width_constraints
            .iter()
            .map(|c| {
                format!(
                    "{} max-width {} (parent is {}px)",
                    describe(&records[c.index].node),
                    c.max_width,
                    c.parent_width
                )
            })
            .collect();
        sections.push(format!("WIDTH CONSTRAINT: {}", parts.join(", then ")));
    }

    if let Some(scrollable) = &diag.scrollable {
        let record = &records[scrollable.index];
        let (direction, amount) = match (scrollable.vertical, scrollable.horizontal) {
            (Some(v), Some(h)) => (
                "vertically & horizontally",
                format!("{}px vertical, {}px horizontal", v.round(), h.round()),
            ),
            (Some(v), None) => ("vertically", format!("{}px", v.round())),
            (None, Some(h)) => ("horizontally", format!("{}px", h.round())),
            (None, None) => unreachable!("scrollable container without a scrollable axis"),
        };
        sections.push(format!(
            "SCROLLABLE CONTAINER: {} scrolls {direction} ({amount} overflow)",
            describe(&record.node)
        ));
    }

    if !sections.is_empty() {
        out.push('\n');
        for section in sections {
            out.push_str(&section);
            out.push('\n');
        }
    }

    out
}

/// Render a DOM-inspection subtree outline.
pub fn render_subtree(notes: &str, tree: &SubtreeNode) -> String {
    let mut out = format!("DOM Inspection: {}\n", describe(&tree.node));
    if !notes.is_empty() {
        out.push_str(notes);
    }
    out.push('\n');
    render_subtree_node(tree, 0, &mut out);
    out
}

fn render_subtree_node(node: &SubtreeNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let mark = if node.visible { "✓" } else { "✗" };

    let mut line = format!("{indent}{} {mark}", describe(&node.node));
    let text = node.text.trim();
    if !text.is_empty() && node.children.is_empty() {
        let shown: String = text.chars().take(60).collect();
        line.push_str(&format!(" \"{shown}\""));
    }
    out.push_str(&line);
    out.push('\n');

    for child in &node.children {
        render_subtree_node(child, depth + 1, out);
    }

    let child_indent = "  ".repeat(depth + 1);
    if node.truncated_children > 0 {
        out.push_str(&format!(
            "{child_indent}... and {} more children\n",
            node.truncated_children
        ));
    }
    if node.hidden_children > 0 {
        out.push_str(&format!(
            "{child_indent}({} hidden children not shown)\n",
            node.hidden_children
        ));
    }
}

/// Render an element-position response.
pub fn render_position(notes: &str, facts: &MatchFacts) -> String {
    let b = &facts.bounds;
    let mark = if facts.visible { "✓" } else { "✗" };
    let mut out = format!("Position: {}\n", describe(&facts.node));
    if !notes.is_empty() {
        out.push_str(notes);
    }
    out.push_str(&format!(
        "  box: {}×{} at ({}, {})\n",
        b.width.round(),
        b.height.round(),
        b.x.round(),
        b.y.round()
    ));
    out.push_str(&format!(
        "  center: ({}, {})\n",
        (b.x + b.width / 2.0).round(),
        (b.y + b.height / 2.0).round()
    ));
    out.push_str(&format!("  visible: {mark}\n"));
    out
}

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;
