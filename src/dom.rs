//! The DOM collaborator boundary.
//!
//! Every tool talks to the page through [`DomQuery`]; the production
//! implementation drives a WebDriver session and gathers all facts with
//! injected JavaScript returning JSON, deserialized with serde. The core
//! never replaces or closes the session handle it is given.

use anyhow::{Context, Result};
use async_trait::async_trait;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use tracing::{debug, info};

use crate::errors::{ProbeError, classify_backend_error};
use crate::types::{MatchFacts, RawAncestor, SubtreeNode, SubtreeOptions};

/// Read/query-only view of the current page.
#[async_trait]
pub trait DomQuery: Send + Sync {
    /// Query a normalized selector; returns the MatchSet in document order.
    async fn query(&self, selector: &str) -> Result<Vec<MatchFacts>, ProbeError>;

    /// Raw ancestor data for one match: the target itself first, then up to
    /// `limit` ancestors, stopping at `<body>`/`<html>`.
    async fn ancestor_chain(
        &self,
        selector: &str,
        index: usize,
        limit: usize,
    ) -> Result<Vec<RawAncestor>, ProbeError>;

    /// Subtree snapshot of one match, bounded by the given cutoffs.
    async fn subtree(
        &self,
        selector: &str,
        index: usize,
        opts: SubtreeOptions,
    ) -> Result<SubtreeNode, ProbeError>;

    /// Click one match.
    async fn click(&self, selector: &str, index: usize) -> Result<(), ProbeError>;

    /// Navigate the page. Tools never call this implicitly; it backs the
    /// `navigate` tool only.
    async fn goto(&self, url: &str) -> Result<(), ProbeError>;
}

/// Shared JS prelude: selector resolution (including the `id=` and `text=`
/// engine forms), node facts, and the visibility check.
const JS_PRELUDE: &str = r#"
    function resolveMatches(selector) {
        if (selector.startsWith('id=')) {
            const el = document.getElementById(selector.slice(3));
            return el ? [el] : [];
        }
        if (selector.startsWith('text=')) {
            const wanted = selector.slice(5).trim();
            return Array.from(document.querySelectorAll('*'))
                .filter(el => el.children.length === 0 && el.textContent.trim() === wanted);
        }
        return Array.from(document.querySelectorAll(selector));
    }
    function nodeFacts(el) {
        const testId = el.getAttribute('data-testid')
            || el.getAttribute('data-test')
            || el.getAttribute('data-cy');
        return {
            tag: el.tagName.toLowerCase(),
            id: el.id || null,
            test_id: testId,
            classes: Array.from(el.classList)
        };
    }
    function isVisible(el) {
        const rect = el.getBoundingClientRect();
        const styles = window.getComputedStyle(el);
        return rect.width > 0 && rect.height > 0 &&
               styles.display !== 'none' && styles.visibility !== 'hidden';
    }
"#;

const QUERY_SCRIPT_BODY: &str = r#"
    const selector = arguments[0];
    function ancestorHint(el) {
        for (let p = el.parentElement; p && p.tagName !== 'BODY'; p = p.parentElement) {
            for (const attr of ['data-testid', 'data-test', 'data-cy', 'id']) {
                const value = attr === 'id' ? p.id : p.getAttribute(attr);
                if (value) {
                    return { tag: p.tagName.toLowerCase(), attr: attr, value: value };
                }
            }
        }
        return null;
    }
    return resolveMatches(selector).map(el => {
        const rect = el.getBoundingClientRect();
        return Object.assign(nodeFacts(el), {
            text: (el.textContent || '').trim().slice(0, 200),
            visible: isVisible(el),
            bounds: { x: rect.x, y: rect.y, width: rect.width, height: rect.height },
            ancestor_hint: ancestorHint(el)
        });
    });
"#;

const ANCESTOR_SCRIPT_BODY: &str = r#"
    const selector = arguments[0];
    const index = arguments[1];
    const limit = arguments[2];
    const PROPS = [
        'width', 'max-width', 'display',
        'margin-top', 'margin-right', 'margin-bottom', 'margin-left',
        'padding-top', 'padding-right', 'padding-bottom', 'padding-left',
        'border-top-width', 'border-right-width', 'border-bottom-width', 'border-left-width',
        'overflow-x', 'overflow-y'
    ];
    function snapshot(el) {
        const computed = window.getComputedStyle(el);
        const styles = {};
        for (const prop of PROPS) {
            styles[prop] = computed.getPropertyValue(prop);
        }
        const rect = el.getBoundingClientRect();
        let parent = null;
        if (el.parentElement) {
            const ps = window.getComputedStyle(el.parentElement);
            parent = {
                display: ps.display,
                flex_direction: ps.flexDirection,
                justify_content: ps.justifyContent,
                align_items: ps.alignItems,
                gap: ps.gap,
                grid_template_columns: ps.gridTemplateColumns,
                grid_template_rows: ps.gridTemplateRows
            };
        }
        return Object.assign(nodeFacts(el), {
            bounds: { x: rect.x, y: rect.y, width: rect.width, height: rect.height },
            styles: styles,
            scroll: {
                scroll_width: el.scrollWidth,
                scroll_height: el.scrollHeight,
                client_width: el.clientWidth,
                client_height: el.clientHeight
            },
            parent: parent
        });
    }
    const matches = resolveMatches(selector);
    if (index >= matches.length) return [];
    const chain = [snapshot(matches[index])];
    let node = matches[index].parentElement;
    while (node && chain.length <= limit) {
        chain.push(snapshot(node));
        const tag = node.tagName;
        if (tag === 'BODY' || tag === 'HTML') break;
        node = node.parentElement;
    }
    return chain;
"#;

const SUBTREE_SCRIPT_BODY: &str = r#"
    const selector = arguments[0];
    const index = arguments[1];
    const maxDepth = arguments[2];
    const maxChildren = arguments[3];
    const includeHidden = arguments[4];
    function build(el, depth) {
        const result = Object.assign(nodeFacts(el), {
            text: (el.textContent || '').trim().slice(0, 200),
            visible: isVisible(el),
            children: [],
            truncated_children: 0,
            hidden_children: 0
        });
        if (depth >= maxDepth) {
            return result;
        }
        let kept = 0;
        for (const child of el.children) {
            if (!includeHidden && !isVisible(child)) {
                result.hidden_children += 1;
                continue;
            }
            if (kept >= maxChildren) {
                result.truncated_children += 1;
                continue;
            }
            result.children.push(build(child, depth + 1));
            kept += 1;
        }
        return result;
    }
    const matches = resolveMatches(selector);
    if (index >= matches.length) return null;
    return build(matches[index], 0);
"#;

const CLICK_SCRIPT_BODY: &str = r#"
    const selector = arguments[0];
    const index = arguments[1];
    const matches = resolveMatches(selector);
    if (index >= matches.length) return false;
    matches[index].scrollIntoView({ block: 'center' });
    matches[index].click();
    return true;
"#;

/// WebDriver-backed [`DomQuery`] implementation.
pub struct WebDriverDom {
    client: Client,
}

impl WebDriverDom {
    /// Connect to an already-running WebDriver. Browser process lifecycle is
    /// not this crate's business; we only attach a session.
    pub async fn connect(webdriver_url: &str) -> Result<Self> {
        if !Self::is_webdriver_running(webdriver_url).await {
            anyhow::bail!(
                "Cannot reach WebDriver at {webdriver_url}.\n\
                Start one first, e.g.:\n\
                  geckodriver --port 4444\n\
                  chromedriver --port 9515"
            );
        }

        info!("Connecting to WebDriver at {}", webdriver_url);
        let client = ClientBuilder::rustls()
            .connect(webdriver_url)
            .await
            .context("Failed to connect to WebDriver")?;

        Ok(WebDriverDom { client })
    }

    async fn is_webdriver_running(url: &str) -> bool {
        let status_url = format!("{url}/status");
        match reqwest::get(&status_url).await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    async fn execute(
        &self,
        body: &str,
        args: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, ProbeError> {
        let script = format!("{JS_PRELUDE}\n{body}");
        self.client
            .execute(&script, args)
            .await
            .map_err(|e| classify_backend_error(&e.to_string()))
    }
}

#[async_trait]
impl DomQuery for WebDriverDom {
    async fn query(&self, selector: &str) -> Result<Vec<MatchFacts>, ProbeError> {
        debug!("Querying matches for selector: {}", selector);
        let value = self.execute(QUERY_SCRIPT_BODY, vec![json!(selector)]).await?;
        serde_json::from_value(value)
            .map_err(|e| ProbeError::Other(anyhow::anyhow!("Malformed match data: {e}")))
    }

    async fn ancestor_chain(
        &self,
        selector: &str,
        index: usize,
        limit: usize,
    ) -> Result<Vec<RawAncestor>, ProbeError> {
        debug!("Walking ancestors of {} (limit {})", selector, limit);
        let value = self
            .execute(
                ANCESTOR_SCRIPT_BODY,
                vec![json!(selector), json!(index), json!(limit)],
            )
            .await?;
        serde_json::from_value(value)
            .map_err(|e| ProbeError::Other(anyhow::anyhow!("Malformed ancestor data: {e}")))
    }

    async fn subtree(
        &self,
        selector: &str,
        index: usize,
        opts: SubtreeOptions,
    ) -> Result<SubtreeNode, ProbeError> {
        let value = self
            .execute(
                SUBTREE_SCRIPT_BODY,
                vec![
                    json!(selector),
                    json!(index),
                    json!(opts.max_depth),
                    json!(opts.max_children),
                    json!(opts.include_hidden),
                ],
            )
            .await?;
        if value.is_null() {
            return Err(ProbeError::NotFound {
                selector: selector.to_string(),
            });
        }
        serde_json::from_value(value)
            .map_err(|e| ProbeError::Other(anyhow::anyhow!("Malformed subtree data: {e}")))
    }

    async fn click(&self, selector: &str, index: usize) -> Result<(), ProbeError> {
        let value = self
            .execute(CLICK_SCRIPT_BODY, vec![json!(selector), json!(index)])
            .await?;
        if value.as_bool() == Some(true) {
            Ok(())
        } else {
            Err(ProbeError::NotFound {
                selector: selector.to_string(),
            })
        }
    }

    async fn goto(&self, url: &str) -> Result<(), ProbeError> {
        info!("Navigating to {}", url);
        self.client
            .goto(url)
            .await
            .map_err(|e| classify_backend_error(&e.to_string()))?;

        // Bounded wait for the document to settle; avoids stale queries
        // right after navigation.
        for _ in 0..20 {
            match self
                .client
                .execute("return document.readyState === 'complete';", vec![])
                .await
            {
                Ok(value) if value.as_bool().unwrap_or(false) => break,
                _ => tokio::time::sleep(tokio::time::Duration::from_millis(100)).await,
            }
        }
        Ok(())
    }
}
