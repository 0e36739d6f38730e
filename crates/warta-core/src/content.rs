//! Body markup
//!
//! Article bodies use two conventions: a blank line separates paragraphs and
//! `**text**` marks bold. This module parses that into a structure a renderer
//! can walk; how it is drawn is up to the caller.

use serde::{Deserialize, Serialize};

const BOLD: &str = "**";

/// Inline run of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Span {
    Text(String),
    Bold(String),
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Span::Text(text) | Span::Bold(text) => text,
        }
    }
}

/// One paragraph of spans
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub spans: Vec<Span>,
}

impl Paragraph {
    /// Paragraph text without markup
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(Span::text).collect()
    }
}

/// Split `body` into paragraphs of text and bold spans.
///
/// Paragraph breaks are runs of two or more newlines; blank paragraphs are
/// dropped. An opening `**` with no closing partner is kept as literal text.
pub fn parse_body(body: &str) -> Vec<Paragraph> {
    let normalized = body.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(|chunk| chunk.trim_matches('\n'))
        .filter(|chunk| !chunk.trim().is_empty())
        .map(|chunk| Paragraph {
            spans: parse_spans(chunk),
        })
        .collect()
}

/// Body with bold markers removed and paragraphs joined by a blank line
pub fn plain_text(body: &str) -> String {
    parse_body(body)
        .iter()
        .map(Paragraph::plain_text)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn parse_spans(paragraph: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut text = String::new();
    let mut rest = paragraph;

    while let Some(open) = rest.find(BOLD) {
        let after_open = &rest[open + BOLD.len()..];
        let Some(close) = after_open.find(BOLD) else {
            break;
        };

        text.push_str(&rest[..open]);
        let bold = &after_open[..close];
        // "****" carries no text
        if !bold.is_empty() {
            flush(&mut spans, &mut text);
            spans.push(Span::Bold(bold.to_string()));
        }
        rest = &after_open[close + BOLD.len()..];
    }

    text.push_str(rest);
    flush(&mut spans, &mut text);
    spans
}

fn flush(spans: &mut Vec<Span>, text: &mut String) {
    if !text.is_empty() {
        spans.push(Span::Text(std::mem::take(text)));
    }
}
