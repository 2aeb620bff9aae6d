use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bounding box of an element, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Identifying facts about one DOM node, used for descriptors and
/// replacement-selector suggestions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeFacts {
    pub tag: String,
    #[serde(default)]
    pub id: Option<String>,
    /// First of data-testid / data-test / data-cy found on the node.
    #[serde(default)]
    pub test_id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
}

/// One entry of a MatchSet: enough to resolve ambiguity, describe the node,
/// and report its position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchFacts {
    #[serde(flatten)]
    pub node: NodeFacts,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub visible: bool,
    #[serde(default)]
    pub bounds: BoundingBox,
    /// Nearest ancestor carrying an identifying attribute, if any.
    #[serde(default)]
    pub ancestor_hint: Option<AncestorHint>,
}

/// An ancestor attribute worth naming in disambiguation output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AncestorHint {
    pub tag: String,
    pub attr: String,
    pub value: String,
}

/// Scroll vs. client box metrics for overflow classification.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub client_width: f64,
    pub client_height: f64,
}

/// Flex/grid facts about a node's parent, as computed styles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParentContext {
    pub display: String,
    #[serde(default)]
    pub flex_direction: Option<String>,
    #[serde(default)]
    pub justify_content: Option<String>,
    #[serde(default)]
    pub align_items: Option<String>,
    #[serde(default)]
    pub gap: Option<String>,
    /// Computed (pixel) track sizes.
    #[serde(default)]
    pub grid_template_columns: Option<String>,
    #[serde(default)]
    pub grid_template_rows: Option<String>,
}

/// Raw per-node data for one entry of an ancestor chain, as gathered by the
/// DOM collaborator. Entry `[0]` is the target itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAncestor {
    #[serde(flatten)]
    pub node: NodeFacts,
    #[serde(default)]
    pub bounds: BoundingBox,
    /// Computed-style subset keyed by CSS property name.
    #[serde(default)]
    pub styles: HashMap<String, String>,
    #[serde(default)]
    pub scroll: ScrollMetrics,
    #[serde(default)]
    pub parent: Option<ParentContext>,
}

impl RawAncestor {
    /// Computed style lookup with a CSS-default fallback.
    pub fn style_or<'a>(&'a self, property: &str, default: &'a str) -> &'a str {
        self.styles
            .get(property)
            .map(String::as_str)
            .unwrap_or(default)
    }
}

/// One node of a DOM-inspection subtree snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubtreeNode {
    #[serde(flatten)]
    pub node: NodeFacts,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub visible: bool,
    #[serde(default)]
    pub children: Vec<SubtreeNode>,
    /// Children dropped by the max_children cutoff.
    #[serde(default)]
    pub truncated_children: usize,
    /// Hidden children skipped because include_hidden was off.
    #[serde(default)]
    pub hidden_children: usize,
}

/// Cutoffs for subtree snapshots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SubtreeOptions {
    pub max_depth: usize,
    pub max_children: usize,
    pub include_hidden: bool,
}

impl Default for SubtreeOptions {
    fn default() -> Self {
        SubtreeOptions {
            max_depth: 2,
            max_children: 10,
            include_hidden: false,
        }
    }
}
