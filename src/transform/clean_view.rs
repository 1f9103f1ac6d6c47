//! Rendering of the clean (markup-free) view.

use std::collections::{HashMap, HashSet};

use crate::issue::Issue;
use crate::parser::{Node, NodeKind};

/// Render the clean text for a node sequence.
///
/// Two walks over the nodes: the first collects move/copy sources into a
/// tag table, so targets may appear before their source in the document;
/// the second emits the text. Issues come out in that same order —
/// duplicate-tag warnings, then unresolved-reference errors, then
/// unplaced-source warnings, each in document order.
#[must_use]
pub fn clean_view(nodes: &[Node]) -> (String, Vec<Issue>) {
    let mut issues = Vec::new();
    let sources = collect_sources(nodes, &mut issues);

    let mut out = String::new();
    let mut placed: HashSet<&str> = HashSet::new();

    for node in nodes {
        match &node.kind {
            NodeKind::Text(text) | NodeKind::Insertion(text) | NodeKind::Highlight(text) => {
                out.push_str(text);
            }
            NodeKind::Deletion(_) | NodeKind::Comment(_) | NodeKind::MoveSource { .. } => {}
            NodeKind::CopySource { text, .. } => out.push_str(text),
            NodeKind::MoveTarget { tag } => {
                if let Some(text) = sources.get(tag.as_str()) {
                    out.push_str(text);
                    placed.insert(tag.as_str());
                } else {
                    issues.push(Issue::error(
                        format!("unresolved move reference '{tag}'"),
                        node.line,
                        node.column,
                    ));
                }
            }
            NodeKind::CopyTarget { tag } => {
                if let Some(text) = sources.get(tag.as_str()) {
                    out.push_str(text);
                    placed.insert(tag.as_str());
                } else {
                    issues.push(Issue::error(
                        format!("unresolved copy reference '{tag}'"),
                        node.line,
                        node.column,
                    ));
                }
            }
        }
    }

    // A move source nobody placed means its text silently vanished from the
    // clean view; surface that.
    for node in nodes {
        if let NodeKind::MoveSource { tag, .. } = &node.kind {
            if !placed.contains(tag.as_str()) {
                issues.push(Issue::warning(
                    format!("move source '{tag}' is never placed"),
                    node.line,
                    node.column,
                ));
            }
        }
    }

    (out, issues)
}

/// Build the tag table. A redefined tag warns and the later source wins.
fn collect_sources<'a>(nodes: &'a [Node], issues: &mut Vec<Issue>) -> HashMap<&'a str, &'a str> {
    let mut sources: HashMap<&str, &str> = HashMap::new();
    for node in nodes {
        let (text, tag) = match &node.kind {
            NodeKind::MoveSource { text, tag } | NodeKind::CopySource { text, tag } => (text, tag),
            _ => continue,
        };
        if sources.insert(tag.as_str(), text.as_str()).is_some() {
            issues.push(Issue::warning(
                format!("duplicate tag '{tag}' redefines an earlier source"),
                node.line,
                node.column,
            ));
        }
    }
    sources
}
