#![allow(clippy::uninlined_format_args)]

//! # domprobe
//!
//! Tool-calling server that lets LLMs inspect web page layout through a
//! WebDriver session: resolve ambiguous selectors, walk ancestor chains, and
//! diagnose clipping, width constraints, and scroll overflow.
//!
//! ## Selector forms
//!
//! Every tool takes a `selector` that accepts, besides plain CSS:
//!
//! - `testid:VALUE`, `data-test:VALUE`, `data-cy:VALUE` shorthands, expanded
//!   to the matching attribute selector
//! - `id=VALUE` for ids containing CSS-hostile characters (colons, brackets)
//! - `text=VALUE` for exact-text lookup
//! - a trailing `>> nth=<i>` (or `>> nth=last`) suffix to pick one of
//!   several matches
//!
//! Over-escaped selectors (`.top-\\[36px\\]`) are cleaned up automatically,
//! and bare `#id` selectors with special characters are rewritten to the
//! `id=` form.
//!
//! ## Running
//!
//! ```bash
//! # against a running geckodriver/chromedriver
//! domprobe serve --webdriver-url http://localhost:4444
//!
//! # list tools and their schemas
//! domprobe tools
//! ```
//!
//! The server reads one JSON request per stdin line
//! (`{"tool": "inspect_ancestors", "args": {"selector": "testid:card"}}`)
//! and writes one envelope per line
//! (`{"content": [{"type": "text", "text": "..."}], "isError": false}`).
//!
//! ## Library usage
//!
//! The DOM boundary is the [`dom::DomQuery`] trait; everything above it
//! (normalization, ambiguity resolution, layout diagnostics, formatting) is
//! pure and usable against any implementation.
//!
//! ```no_run
//! use domprobe::dom::{DomQuery, WebDriverDom};
//! use domprobe::tools;
//! use serde_json::json;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let dom = WebDriverDom::connect("http://localhost:4444").await?;
//! let response = tools::dispatch(
//!     &dom,
//!     "inspect_ancestors",
//!     json!({ "selector": "testid:sidebar", "limit": 5 }),
//! )
//! .await;
//! # Ok(())
//! # }
//! ```

/// Element descriptors for consistent labels across tools
pub mod describe;

/// Layout diagnostics: box metrics, overflow classification, chain synthesis
pub mod diagnostics;

/// The DOM collaborator trait and its WebDriver implementation
pub mod dom;

/// Error taxonomy shared by every tool
pub mod errors;

/// Fixed-format text rendering of results
pub mod format;

/// Ambiguity resolution for multi-match selectors
pub mod resolve;

/// Selector normalization and the nth disambiguation suffix
pub mod selector;

/// Stdio tool server
pub mod server;

/// Static tool registry and handlers
pub mod tools;

/// Core data model
pub mod types;

pub use errors::ProbeError;
pub use types::{BoundingBox, MatchFacts, NodeFacts, RawAncestor, SubtreeNode, SubtreeOptions};
