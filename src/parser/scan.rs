//! Single-pass EditML scanner.
//!
//! Walks the input once, tracking 1-based line/column positions, and emits
//! positioned [`Node`]s. Problems are reported as issues rather than
//! failures: an unterminated span is an error and the raw remainder is kept
//! as literal text, a malformed directive is a warning and stays in the text
//! verbatim. Any `{` that opens no recognized form is ordinary text.

use crate::issue::Issue;
use crate::parser::nodes::{Node, NodeKind};
use crate::parser::patterns::DIRECTIVE_HEAD_RE;

/// Cursor over the input with position bookkeeping.
struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Scanner {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance past `n` bytes, updating the line/column counters.
    ///
    /// `n` must land on a character boundary.
    fn advance(&mut self, n: usize) {
        for ch in self.src[self.pos..self.pos + n].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += n;
    }
}

/// Parse marked-up text into nodes plus any parse issues.
///
/// Node order follows document order; a text run is flushed as a single
/// node whenever markup (or end of input) interrupts it.
#[must_use]
pub fn parse(input: &str) -> (Vec<Node>, Vec<Issue>) {
    let mut nodes = Vec::new();
    let mut issues = Vec::new();
    let mut s = Scanner::new(input);

    // Plain text accumulates here until markup interrupts it.
    let mut text = String::new();
    let mut text_at = (1, 1);

    while let Some(ch) = s.peek() {
        if ch != '{' {
            if text.is_empty() {
                text_at = (s.line, s.column);
            }
            text.push(ch);
            s.advance(ch.len_utf8());
            continue;
        }

        let open = (s.line, s.column);
        let rest = s.rest();
        let after = &rest[1..];

        // Span forms: {+ +}, {- -}, {> <}, {= =}.
        if let Some(marker) = after
            .chars()
            .next()
            .filter(|c| matches!(c, '+' | '-' | '>' | '='))
        {
            let closer = span_closer(marker);
            flush_text(&mut nodes, &mut text, text_at);
            if let Some(end) = after[1..].find(closer) {
                let content = after[1..1 + end].to_string();
                nodes.push(Node::new(span_kind(marker, content), open.0, open.1));
                s.advance(2 + end + closer.len());
            } else {
                issues.push(Issue::error(
                    format!("unterminated {}", span_name(marker)),
                    open.0,
                    open.1,
                ));
                // Best effort: keep the raw remainder as literal text.
                nodes.push(Node::new(NodeKind::Text(rest.to_string()), open.0, open.1));
                s.advance(rest.len());
            }
            continue;
        }

        // Directive forms: {move~text~tag}, {move:tag} and shorthands.
        if let Some(caps) = DIRECTIVE_HEAD_RE.captures(after) {
            let keyword = caps.get(1).map_or("", |m| m.as_str());
            let sep = caps.get(2).map_or("", |m| m.as_str());
            let body_start = 1 + caps.get(0).map_or(0, |m| m.len());

            let Some(close) = rest[body_start..].find('}') else {
                flush_text(&mut nodes, &mut text, text_at);
                issues.push(Issue::error(
                    format!("unterminated {} directive", verb(keyword)),
                    open.0,
                    open.1,
                ));
                nodes.push(Node::new(NodeKind::Text(rest.to_string()), open.0, open.1));
                s.advance(rest.len());
                continue;
            };

            let body = &rest[body_start..body_start + close];
            let total = body_start + close + 1;
            match directive_kind(keyword, sep, body) {
                Ok(kind) => {
                    flush_text(&mut nodes, &mut text, text_at);
                    nodes.push(Node::new(kind, open.0, open.1));
                }
                Err(problem) => {
                    issues.push(Issue::warning(problem, open.0, open.1));
                    // Malformed directives stay in the text verbatim.
                    if text.is_empty() {
                        text_at = open;
                    }
                    text.push_str(&rest[..total]);
                }
            }
            s.advance(total);
            continue;
        }

        // A lone brace is ordinary text.
        if text.is_empty() {
            text_at = open;
        }
        text.push('{');
        s.advance(1);
    }

    flush_text(&mut nodes, &mut text, text_at);
    (nodes, issues)
}

fn flush_text(nodes: &mut Vec<Node>, text: &mut String, at: (usize, usize)) {
    if !text.is_empty() {
        nodes.push(Node::new(NodeKind::Text(std::mem::take(text)), at.0, at.1));
    }
}

fn span_closer(marker: char) -> &'static str {
    match marker {
        '+' => "+}",
        '-' => "-}",
        '>' => "<}",
        _ => "=}",
    }
}

fn span_name(marker: char) -> &'static str {
    match marker {
        '+' => "insertion",
        '-' => "deletion",
        '>' => "comment",
        _ => "highlight",
    }
}

fn span_kind(marker: char, content: String) -> NodeKind {
    match marker {
        '+' => NodeKind::Insertion(content),
        '-' => NodeKind::Deletion(content),
        '>' => NodeKind::Comment(content),
        _ => NodeKind::Highlight(content),
    }
}

fn verb(keyword: &str) -> &'static str {
    match keyword {
        "move" | "mv" => "move",
        _ => "copy",
    }
}

/// Interpret a directive body.
///
/// Source bodies are `text~tag`, split at the last `~` so the text may
/// itself contain tildes. Tags are trimmed; an empty tag is malformed.
fn directive_kind(keyword: &str, sep: &str, body: &str) -> Result<NodeKind, String> {
    let is_move = matches!(keyword, "move" | "mv");
    let verb = verb(keyword);

    if sep == ":" {
        let tag = body.trim();
        if tag.is_empty() {
            return Err(format!("{verb} target has an empty tag"));
        }
        let tag = tag.to_string();
        return Ok(if is_move {
            NodeKind::MoveTarget { tag }
        } else {
            NodeKind::CopyTarget { tag }
        });
    }

    let Some(split) = body.rfind('~') else {
        return Err(format!("{verb} source is missing a '~tag' suffix"));
    };
    let text = body[..split].to_string();
    let tag = body[split + 1..].trim();
    if tag.is_empty() {
        return Err(format!("{verb} source has an empty tag"));
    }
    let tag = tag.to_string();
    Ok(if is_move {
        NodeKind::MoveSource { text, tag }
    } else {
        NodeKind::CopySource { text, tag }
    })
}
