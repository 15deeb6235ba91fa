//! Inline formatting: YouTube title links, inline code, bold and links.
//!
//! Each line is handled on its own and lines are joined with
//! [`Span::LineBreak`]. Inline code is cut out first, so backtick contents
//! are never scanned for bold or links and `**` never pairs across a code
//! span. Bold contents are scanned for links.

use std::sync::LazyLock;

use regex::Regex;

use crate::block::Span;
use crate::video;

static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]+`").expect("inline code pattern is valid"));

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*.+?\*\*").expect("bold pattern is valid"));

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid")
});

/// Format a run of text into inline spans.
pub fn format(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            spans.push(Span::LineBreak);
        }
        format_line(line, &mut spans);
    }
    spans
}

fn format_line(line: &str, spans: &mut Vec<Span>) {
    // Blank lines contribute only their break.
    if line.trim().is_empty() {
        return;
    }

    if let Some(video) = video::match_title_link(line) {
        spans.push(Span::Video(video));
        return;
    }

    let mut last = 0;
    for m in INLINE_CODE.find_iter(line) {
        push_bold_and_links(&line[last..m.start()], spans);
        let code = &m.as_str()[1..m.len() - 1];
        spans.push(Span::Code(code.to_string()));
        last = m.end();
    }
    push_bold_and_links(&line[last..], spans);
}

fn push_bold_and_links(segment: &str, spans: &mut Vec<Span>) {
    let mut last = 0;
    for m in BOLD.find_iter(segment) {
        push_links(&segment[last..m.start()], spans);
        let mut inner = Vec::new();
        push_links(&m.as_str()[2..m.len() - 2], &mut inner);
        spans.push(Span::Bold(inner));
        last = m.end();
    }
    push_links(&segment[last..], spans);
}

fn push_links(segment: &str, spans: &mut Vec<Span>) {
    let mut last = 0;
    for caps in LINK.captures_iter(segment) {
        let (Some(whole), Some(text), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        push_text(&segment[last..whole.start()], spans);
        let url = url.as_str().trim();
        if video::mentions_youtube(url) {
            // YouTube links that are not whole title lines stay as written.
            push_text(whole.as_str(), spans);
        } else {
            spans.push(Span::Link {
                text: text.as_str().to_string(),
                url: url.to_string(),
            });
        }
        last = whole.end();
    }
    push_text(&segment[last..], spans);
}

/// Append literal text, merging with a preceding text run.
fn push_text(text: &str, spans: &mut Vec<Span>) {
    if text.is_empty() {
        return;
    }
    if let Some(Span::Text(prev)) = spans.last_mut() {
        prev.push_str(text);
    } else {
        spans.push(Span::Text(text.to_string()));
    }
}
