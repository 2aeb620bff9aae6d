//! Newline-delimited JSON tool server over stdio.
//!
//! One request per line: `{"tool": "<name>", "args": {...}}`. Every reply is
//! the standard envelope; `{"tool": "tools/list"}` returns the registry so a
//! client can discover schemas. Logs go to stderr, stdout carries only
//! protocol frames.

use anyhow::Result;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use crate::dom::DomQuery;
use crate::tools::{self, ToolContent, ToolResponse};

#[derive(Debug, Deserialize)]
struct Request {
    tool: String,
    #[serde(default)]
    args: Value,
}

/// Serve tool calls until stdin closes.
pub async fn serve(dom: Arc<dyn DomQuery>) -> Result<()> {
    info!("Tool server ready on stdio");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let reply = handle_line(dom.as_ref(), &line).await;
        stdout.write_all(serde_json::to_string(&reply)?.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}

/// Handle one request line. Malformed input gets an error envelope too; the
/// loop itself never dies on bad requests.
pub async fn handle_line(dom: &dyn DomQuery, line: &str) -> Value {
    match serde_json::from_str::<Request>(line) {
        Ok(request) if request.tool == "tools/list" => list_tools(),
        Ok(request) => {
            debug!("Request for tool {}", request.tool);
            let response = tools::dispatch(dom, &request.tool, request.args).await;
            json!(response)
        }
        Err(e) => json!(ToolResponse {
            content: vec![ToolContent::Text {
                text: format!("Error: malformed request: {e}"),
            }],
            is_error: true,
        }),
    }
}

fn list_tools() -> Value {
    let specs: Vec<Value> = tools::registry()
        .iter()
        .map(|spec| {
            json!({
                "name": spec.name,
                "description": spec.description,
                "inputSchema": (spec.input_schema)(),
            })
        })
        .collect();
    json!({ "tools": specs })
}
