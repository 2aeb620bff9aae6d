//! Layout diagnostics: per-ancestor box classification and chain-level
//! synthesis (clipping point, width constraints, scrollable container).
//!
//! Input is the raw ancestor data gathered by the DOM collaborator (target
//! first, walking up to `<body>`/`<html>` or a caller limit). Everything in
//! here is pure so the whole engine is testable without a browser.

use crate::types::{ParentContext, RawAncestor};

/// Axis of an overflow condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn adverb(&self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontally",
            Axis::Vertical => "vertically",
        }
    }
}

/// Bounding box rounded to whole pixels for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundedBox {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

/// Overflow classification for one axis of one node.
#[derive(Debug, Clone, Default)]
pub struct OverflowAxis {
    /// Computed overflow-x / overflow-y value.
    pub mode: String,
    /// Content box is smaller than the scroll box and the axis can scroll.
    pub scrollable: bool,
    /// Content overflows while the axis is `hidden`.
    pub clipped: bool,
    /// scrollWidth/Height minus clientWidth/Height, 0 when nothing overflows.
    pub amount: f64,
}

/// Four side values plus uniformity, for margin/padding/border rendering.
#[derive(Debug, Clone, Default)]
pub struct SideValues {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
}

impl SideValues {
    pub fn uniform(&self) -> bool {
        self.top == self.right && self.right == self.bottom && self.bottom == self.left
    }

    fn all_zero(&self) -> bool {
        [&self.top, &self.right, &self.bottom, &self.left]
            .iter()
            .all(|v| is_zero_px(v))
    }
}

/// Margin data with the auto-centering flag.
#[derive(Debug, Clone, Default)]
pub struct MarginInfo {
    pub sides: SideValues,
    /// margin-left and margin-right are both `auto`.
    pub centered: bool,
}

/// Flex or grid context supplied by the node's parent.
#[derive(Debug, Clone)]
pub enum ContainerContext {
    Flex {
        direction: String,
        justify: String,
        align_items: String,
        gap: String,
    },
    Grid {
        columns: String,
        rows: String,
        gap: String,
    },
}

/// Display-ready facts for one node of an ancestor chain.
#[derive(Debug, Clone, Default)]
pub struct AncestorRecord {
    pub node: crate::types::NodeFacts,
    pub bounds: RoundedBox,
    pub width: String,
    /// Present when max-width is set and not `none`.
    pub max_width: Option<String>,
    /// None when every margin is zero.
    pub margin: Option<MarginInfo>,
    /// None when padding is the default (0 on all sides).
    pub padding: Option<SideValues>,
    /// Border widths; None when there is no visible border.
    pub border: Option<SideValues>,
    /// None when overflow is `visible` on both axes.
    pub overflow: Option<(OverflowAxis, OverflowAxis)>,
    pub container: Option<ContainerContext>,
}

/// Where the target gets visually truncated.
#[derive(Debug, Clone)]
pub struct ClippingPoint {
    /// Index into the record list.
    pub index: usize,
    pub axis: Axis,
    pub mode_property: &'static str,
    pub amount: f64,
}

/// An ancestor imposing a max-width narrower than its own parent.
#[derive(Debug, Clone)]
pub struct WidthConstraint {
    pub index: usize,
    pub max_width: String,
    pub parent_width: i64,
}

/// Nearest ancestor with actually-scrollable content.
#[derive(Debug, Clone)]
pub struct ScrollableContainer {
    pub index: usize,
    pub horizontal: Option<f64>,
    pub vertical: Option<f64>,
}

/// Chain-level diagnostics appended after the ancestor list.
#[derive(Debug, Clone, Default)]
pub struct ChainDiagnostics {
    pub clipping_point: Option<ClippingPoint>,
    pub width_constraints: Vec<WidthConstraint>,
    pub scrollable: Option<ScrollableContainer>,
}

/// Build display-ready records from the raw chain, target first.
pub fn build_records(raw: &[RawAncestor]) -> Vec<AncestorRecord> {
    raw.iter().map(build_record).collect()
}

fn build_record(raw: &RawAncestor) -> AncestorRecord {
    AncestorRecord {
        node: raw.node.clone(),
        bounds: RoundedBox {
            x: raw.bounds.x.round() as i64,
            y: raw.bounds.y.round() as i64,
            width: raw.bounds.width.round() as i64,
            height: raw.bounds.height.round() as i64,
        },
        width: raw.style_or("width", "auto").to_string(),
        max_width: Some(raw.style_or("max-width", "none"))
            .filter(|v| !v.is_empty() && *v != "none")
            .map(String::from),
        margin: margin_info(raw),
        padding: side_values(raw, "padding").filter(|p| !p.all_zero()),
        border: border_widths(raw),
        overflow: overflow_axes(raw),
        container: container_context(raw.parent.as_ref()),
    }
}

fn side_values(raw: &RawAncestor, property: &str) -> Option<SideValues> {
    Some(SideValues {
        top: raw.style_or(&format!("{property}-top"), "0px").to_string(),
        right: raw.style_or(&format!("{property}-right"), "0px").to_string(),
        bottom: raw.style_or(&format!("{property}-bottom"), "0px").to_string(),
        left: raw.style_or(&format!("{property}-left"), "0px").to_string(),
    })
}

fn margin_info(raw: &RawAncestor) -> Option<MarginInfo> {
    let sides = side_values(raw, "margin")?;
    let centered = sides.left == "auto" && sides.right == "auto";
    if sides.all_zero() && !centered {
        return None;
    }
    Some(MarginInfo { sides, centered })
}

fn border_widths(raw: &RawAncestor) -> Option<SideValues> {
    let sides = SideValues {
        top: raw.style_or("border-top-width", "0px").to_string(),
        right: raw.style_or("border-right-width", "0px").to_string(),
        bottom: raw.style_or("border-bottom-width", "0px").to_string(),
        left: raw.style_or("border-left-width", "0px").to_string(),
    };
    if sides.all_zero() {
        return None;
    }
    Some(sides)
}

fn overflow_axes(raw: &RawAncestor) -> Option<(OverflowAxis, OverflowAxis)> {
    let mode_x = raw.style_or("overflow-x", "visible");
    let mode_y = raw.style_or("overflow-y", "visible");
    if mode_x == "visible" && mode_y == "visible" {
        return None;
    }

    let amount_x = (raw.scroll.scroll_width - raw.scroll.client_width).max(0.0);
    let amount_y = (raw.scroll.scroll_height - raw.scroll.client_height).max(0.0);

    Some((
        classify_axis(mode_x, amount_x),
        classify_axis(mode_y, amount_y),
    ))
}

fn classify_axis(mode: &str, amount: f64) -> OverflowAxis {
    let overflowing = amount > 0.0;
    OverflowAxis {
        mode: mode.to_string(),
        scrollable: overflowing && (mode == "auto" || mode == "scroll"),
        clipped: overflowing && mode == "hidden",
        amount,
    }
}

fn container_context(parent: Option<&ParentContext>) -> Option<ContainerContext> {
    let parent = parent?;
    match parent.display.as_str() {
        "flex" | "inline-flex" => Some(ContainerContext::Flex {
            direction: parent.flex_direction.clone().unwrap_or_default(),
            justify: parent.justify_content.clone().unwrap_or_default(),
            align_items: parent.align_items.clone().unwrap_or_default(),
            gap: parent.gap.clone().unwrap_or_else(|| "normal".to_string()),
        }),
        "grid" | "inline-grid" => Some(ContainerContext::Grid {
            columns: parent.grid_template_columns.clone().unwrap_or_default(),
            rows: parent.grid_template_rows.clone().unwrap_or_default(),
            gap: parent.gap.clone().unwrap_or_else(|| "normal".to_string()),
        }),
        _ => None,
    }
}

/// Synthesize chain-level diagnostics from the raw data and built records.
pub fn synthesize(raw: &[RawAncestor], records: &[AncestorRecord]) -> ChainDiagnostics {
    ChainDiagnostics {
        clipping_point: find_clipping_point(records),
        width_constraints: find_width_constraints(raw, records),
        scrollable: find_scrollable(records),
    }
}

/// Nearest ancestor (scanning from the target outward) with a hidden axis
/// whose content actually overflows. Record [0] is the target itself and is
/// skipped.
fn find_clipping_point(records: &[AncestorRecord]) -> Option<ClippingPoint> {
    for (i, record) in records.iter().enumerate().skip(1) {
        let Some((x, y)) = &record.overflow else {
            continue;
        };
        // Vertical clipping is the common complaint; report it first.
        if y.clipped {
            return Some(ClippingPoint {
                index: i,
                axis: Axis::Vertical,
                mode_property: "overflow-y",
                amount: y.amount,
            });
        }
        if x.clipped {
            return Some(ClippingPoint {
                index: i,
                axis: Axis::Horizontal,
                mode_property: "overflow-x",
                amount: x.amount,
            });
        }
    }
    None
}

/// Ancestors whose max-width is narrower than their own parent's box. Only
/// reported when at least two stack up, which is when the interplay stops
/// being obvious.
fn find_width_constraints(raw: &[RawAncestor], records: &[AncestorRecord]) -> Vec<WidthConstraint> {
    let mut constraints = Vec::new();

    for (i, record) in records.iter().enumerate() {
        let Some(max_width) = &record.max_width else {
            continue;
        };
        let Some(px) = parse_px(max_width) else {
            continue;
        };
        let Some(parent) = raw.get(i + 1) else {
            continue;
        };
        if px < parent.bounds.width {
            constraints.push(WidthConstraint {
                index: i,
                max_width: max_width.clone(),
                parent_width: parent.bounds.width.round() as i64,
            });
        }
    }

    if constraints.len() < 2 {
        constraints.clear();
    }
    constraints
}

/// Nearest ancestor where the scroll box exceeds the client box on a
/// scrollable axis.
fn find_scrollable(records: &[AncestorRecord]) -> Option<ScrollableContainer> {
    for (i, record) in records.iter().enumerate().skip(1) {
        let Some((x, y)) = &record.overflow else {
            continue;
        };
        let horizontal = x.scrollable.then_some(x.amount);
        let vertical = y.scrollable.then_some(y.amount);
        if horizontal.is_some() || vertical.is_some() {
            return Some(ScrollableContainer {
                index: i,
                horizontal,
                vertical,
            });
        }
    }
    None
}

fn is_zero_px(value: &str) -> bool {
    value == "0px" || value == "0"
}

/// Parse a computed pixel length like "640px".
fn parse_px(value: &str) -> Option<f64> {
    value.strip_suffix("px")?.trim().parse().ok()
}

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;
