use crate::block::{Block, List, Span};

/// Flatten blocks to plain text, one blank line between blocks.
pub fn blocks_to_text(blocks: &[Block]) -> String {
    let mut parts = Vec::new();
    for block in blocks {
        block_to_text(block, &mut parts);
    }
    parts.join("\n\n")
}

fn block_to_text(block: &Block, parts: &mut Vec<String>) {
    match block {
        Block::Heading { text, children, .. } => {
            parts.push(text.clone());
            for child in children {
                block_to_text(child, parts);
            }
        }
        Block::Paragraph { content } | Block::PlainVideoSection { content } => {
            parts.push(spans_to_text(content));
        }
        Block::CodeBlock { content, .. } => parts.push(content.clone()),
        Block::List(list) => parts.push(list_to_text(list)),
        Block::Video(video) => {
            let mut out = format!("{} ({})", video.title, video.url);
            if let Some(caption) = &video.caption {
                out.push('\n');
                out.push_str(caption);
            }
            parts.push(out);
        }
    }
}

fn list_to_text(list: &List) -> String {
    let mut lines = Vec::with_capacity(list.items.len());
    for (i, item) in list.items.iter().enumerate() {
        let marker = match (&item.icon, list.ordered) {
            (_, true) => format!("{}.", i + 1),
            (Some(icon), false) => icon.clone(),
            (None, false) => "-".to_string(),
        };
        lines.push(format!("{marker} {}", spans_to_text(&item.content)));
    }
    lines.join("\n")
}

/// Flatten spans to plain text; line breaks become `\n`.
pub fn spans_to_text(spans: &[Span]) -> String {
    let mut out = String::new();
    push_spans(spans, &mut out);
    out
}

fn push_spans(spans: &[Span], out: &mut String) {
    for span in spans {
        match span {
            Span::Text(text) | Span::Code(text) => out.push_str(text),
            Span::Bold(inner) => push_spans(inner, out),
            Span::Link { text, .. } => out.push_str(text),
            Span::Video(video) => out.push_str(&video.title),
            Span::LineBreak => out.push('\n'),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::to_plain_text;

    #[test]
    fn strips_inline_markers() {
        assert_eq!(
            to_plain_text("**Be** `terse`, see [docs](https://example.com)"),
            "Be terse, see docs"
        );
    }

    #[test]
    fn heading_and_children() {
        assert_eq!(to_plain_text("## Role\nYou help.\n\nEnd"), "Role\n\nYou help.\n\nEnd");
    }

    #[test]
    fn lists_are_renumbered() {
        assert_eq!(to_plain_text("3. a\n7. b"), "1. a\n2. b");
        assert_eq!(to_plain_text("- a\n🚀 b"), "- a\n🚀 b");
    }

    #[test]
    fn video_with_caption() {
        assert_eq!(
            to_plain_text("[Intro](https://youtu.be/abc)\n*Start here*"),
            "Intro (https://youtu.be/abc)\nStart here"
        );
    }
}
