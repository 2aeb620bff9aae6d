//! Static tool registry and the response envelope.
//!
//! The registry is an explicit table built at startup: tool name to
//! description, input schema, and handler. Dispatch is a plain match, no
//! reflection. Every handler returns through the same envelope shape,
//! success and failure alike; errors never escape as panics.

pub mod ancestors;
pub mod base;
pub mod click;
pub mod inspect;
pub mod navigate;
pub mod position;

use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::dom::DomQuery;
use crate::errors::ProbeError;

/// One content block of a tool response.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

/// The envelope every tool call returns, success or error.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResponse {
    pub content: Vec<ToolContent>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResponse {
    pub fn text(text: String) -> Self {
        ToolResponse {
            content: vec![ToolContent::Text { text }],
            is_error: false,
        }
    }

    pub fn error(err: &ProbeError) -> Self {
        let mut text = format!("Error: {err}");
        if let ProbeError::InvalidSelector(_) = err {
            text.push_str(
                "\nEscaping tips: CSS-special characters need a single backslash \
                 (`.top-\\[36px\\]`); for ids containing ':' use `id=VALUE` or the \
                 `testid:VALUE` shorthand instead.",
            );
        }
        if err.is_retryable() {
            text.push_str("\n(retryable: safe to issue the same call again)");
        }
        ToolResponse {
            content: vec![ToolContent::Text { text }],
            is_error: true,
        }
    }
}

/// Handler identity for static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum ToolKind {
    InspectAncestors,
    InspectDom,
    ElementPosition,
    Click,
    Navigate,
}

/// One row of the registry.
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ToolKind,
    pub input_schema: fn() -> Value,
}

/// The selector parameter documentation shared by every element tool.
const SELECTOR_DOC: &str = "CSS selector; also accepts testid:/data-test:/data-cy: shorthands, \
     id=VALUE, text=VALUE, and a trailing '>> nth=<i>' disambiguation suffix";

fn selector_schema(extra: &[(&str, Value)]) -> Value {
    let mut properties = serde_json::Map::new();
    properties.insert(
        "selector".to_string(),
        json!({ "type": "string", "description": SELECTOR_DOC }),
    );
    properties.insert(
        "elementIndex".to_string(),
        json!({
            "type": "integer",
            "minimum": 1,
            "description": "1-based index into the match set, when the selector matches several elements"
        }),
    );
    for (name, schema) in extra {
        properties.insert(name.to_string(), schema.clone());
    }
    json!({
        "type": "object",
        "properties": properties,
        "required": ["selector"]
    })
}

/// The registry table. Order is the order tools are listed to clients.
pub fn registry() -> &'static [ToolSpec] {
    REGISTRY
}

static REGISTRY: &[ToolSpec] = &[
    ToolSpec {
        name: "inspect_ancestors",
        description: "Walk an element's ancestor chain and report per-ancestor box metrics, \
             overflow/clipping, flex/grid context, plus synthesized diagnostics \
             (clipping point, width constraints, scrollable container). Use this to answer \
             'why is this element cut off / too narrow / not scrolling'.",
        kind: ToolKind::InspectAncestors,
        input_schema: || {
            selector_schema(&[(
                "limit",
                json!({
                    "type": "integer",
                    "minimum": 1,
                    "description": "How many ancestors above the target to include (default 5)"
                }),
            )])
        },
    },
    ToolSpec {
        name: "inspect_dom",
        description: "Outline an element's subtree: descriptors, text, and visibility marks \
             for each node, bounded by depth and child cutoffs.",
        kind: ToolKind::InspectDom,
        input_schema: || {
            selector_schema(&[
                (
                    "maxDepth",
                    json!({ "type": "integer", "minimum": 0, "description": "Levels below the target to include (default 2)" }),
                ),
                (
                    "maxChildren",
                    json!({ "type": "integer", "minimum": 1, "description": "Children shown per node before truncation (default 10)" }),
                ),
                (
                    "includeHidden",
                    json!({ "type": "boolean", "description": "Also list children that are not visible (default false)" }),
                ),
            ])
        },
    },
    ToolSpec {
        name: "element_position",
        description: "Report an element's bounding box, center point, and visibility.",
        kind: ToolKind::ElementPosition,
        input_schema: || selector_schema(&[]),
    },
    ToolSpec {
        name: "click",
        description: "Click an element. Fails with remediation guidance when the selector is \
             ambiguous; pass elementIndex (or an '>> nth=' suffix) to disambiguate, or \
             forceMultiple to click the first visible match.",
        kind: ToolKind::Click,
        input_schema: || {
            selector_schema(&[(
                "forceMultiple",
                json!({ "type": "boolean", "description": "Allow a multi-match selector and click the first visible match (default false)" }),
            )])
        },
    },
    ToolSpec {
        name: "navigate",
        description: "Navigate the page to a URL and wait for the document to settle.",
        kind: ToolKind::Navigate,
        input_schema: || {
            json!({
                "type": "object",
                "properties": {
                    "url": { "type": "string", "description": "Absolute URL to open" }
                },
                "required": ["url"]
            })
        },
    },
];

/// Dispatch one tool call against the given page handle.
pub async fn dispatch(dom: &dyn DomQuery, name: &str, args: Value) -> ToolResponse {
    let Some(spec) = registry().iter().find(|t| t.name == name) else {
        let known: Vec<&str> = registry().iter().map(|t| t.name).collect();
        return ToolResponse {
            content: vec![ToolContent::Text {
                text: format!("Error: unknown tool '{name}'. Known tools: {}", known.join(", ")),
            }],
            is_error: true,
        };
    };

    debug!("Dispatching tool {}", name);
    let result = match spec.kind {
        ToolKind::InspectAncestors => ancestors::run(dom, args).await,
        ToolKind::InspectDom => inspect::run(dom, args).await,
        ToolKind::ElementPosition => position::run(dom, args).await,
        ToolKind::Click => click::run(dom, args).await,
        ToolKind::Navigate => navigate::run(dom, args).await,
    };

    match result {
        Ok(text) => ToolResponse::text(text),
        Err(err) => ToolResponse::error(&err),
    }
}
