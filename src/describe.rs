//! Compact human-readable element labels, used identically across every
//! inspection and comparison tool so output stays consistent.

use crate::types::NodeFacts;

/// Build a short stable label for a node: `<button data-testid="submit">`,
/// `<div #main>`, `<li .item.active>`, or bare `<span>`. Attribute
/// preference: test-id family first, then id, then the first two classes.
pub fn describe(node: &NodeFacts) -> String {
    if let Some(test_id) = node.test_id.as_deref().filter(|v| !v.is_empty()) {
        return format!("<{} data-testid=\"{}\">", node.tag, test_id);
    }
    if let Some(id) = node.id.as_deref().filter(|v| !v.is_empty()) {
        return format!("<{} #{}>", node.tag, id);
    }
    if !node.classes.is_empty() {
        let classes: String = node
            .classes
            .iter()
            .take(2)
            .map(|c| format!(".{c}"))
            .collect();
        return format!("<{} {}>", node.tag, classes);
    }
    format!("<{}>", node.tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn facts(tag: &str, id: Option<&str>, test_id: Option<&str>, classes: &[&str]) -> NodeFacts {
        NodeFacts {
            tag: tag.to_string(),
            id: id.map(String::from),
            test_id: test_id.map(String::from),
            classes: classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_test_id_wins() {
        let node = facts("button", Some("b1"), Some("submit"), &["btn"]);
        assert_eq!(describe(&node), "<button data-testid=\"submit\">");
    }

    #[test]
    fn test_id_over_classes() {
        let node = facts("div", Some("main"), None, &["wrap"]);
        assert_eq!(describe(&node), "<div #main>");
    }

    #[test]
    fn test_first_two_classes() {
        let node = facts("li", None, None, &["item", "active", "selected"]);
        assert_eq!(describe(&node), "<li .item.active>");
    }

    #[test]
    fn test_bare_tag() {
        let node = facts("span", None, None, &[]);
        assert_eq!(describe(&node), "<span>");
    }

    #[test]
    fn test_empty_attributes_are_skipped() {
        let node = facts("p", Some(""), Some(""), &[]);
        assert_eq!(describe(&node), "<p>");
    }
}
