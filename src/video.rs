use std::sync::LazyLock;

use regex::Regex;

use crate::block::{Block, VideoEmbed};
use crate::inline;

/// A whole line holding one `[title](url)` link to a YouTube watch page or
/// short link, optionally led by `#`/`##` and a 🎯 marker.
static TITLE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:#{1,2}\s*)?(?:🎯\s*)?\[([^\]]+)\]\(\s*((?:https?://)?(?:www\.|m\.)?(?:youtube\.com/watch\?v=|youtu\.be/)[^)\s]*)\s*\)\s*$",
    )
    .expect("title link pattern is valid")
});

/// Whether the text mentions a YouTube domain anywhere.
pub(crate) fn mentions_youtube(text: &str) -> bool {
    text.contains("youtube.com") || text.contains("youtu.be")
}

/// Match a line against the title-link pattern.
pub(crate) fn match_title_link(line: &str) -> Option<VideoEmbed> {
    let caps = TITLE_LINK.captures(line)?;
    let title = caps.get(1)?.as_str().trim();
    let url = caps.get(2)?.as_str();
    Some(VideoEmbed {
        title: title.to_string(),
        video_id: video_id(url),
        url: url.to_string(),
        caption: None,
    })
}

/// Extract the video id from a watch url (`v` parameter) or a short link
/// (first path segment). Returns an empty string when neither is present.
pub(crate) fn video_id(url: &str) -> String {
    if let Some((_, query)) = url.split_once("youtube.com/watch?") {
        query
            .split(['&', '#'])
            .find_map(|param| param.strip_prefix("v="))
            .unwrap_or_default()
            .to_string()
    } else if let Some((_, path)) = url.split_once("youtu.be/") {
        path.split(['?', '&', '#', '/'])
            .next()
            .unwrap_or_default()
            .to_string()
    } else {
        String::new()
    }
}

/// Format a section that mentions YouTube but is neither a list nor code.
pub(crate) fn format_section(section: &str, blocks: &mut Vec<Block>) {
    let mut out = Vec::new();
    let mut matched = false;
    // Set while the previous non-blank line was an embed still lacking a caption.
    let mut awaiting_caption = false;

    for line in section.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(video) = match_title_link(trimmed) {
            matched = true;
            awaiting_caption = true;
            out.push(Block::Video(video));
            continue;
        }

        if awaiting_caption && trimmed.starts_with('*') {
            if let Some(Block::Video(video)) = out.last_mut() {
                video.caption = Some(caption_text(trimmed));
            }
            awaiting_caption = false;
            continue;
        }

        awaiting_caption = false;
        out.push(Block::Paragraph {
            content: inline::format(trimmed),
        });
    }

    if matched {
        blocks.extend(out);
    } else {
        blocks.push(Block::PlainVideoSection {
            content: inline::format(section),
        });
    }
}

/// Caption text of an italic line: one wrapping `*` pair comes off, anything
/// else only loses the leading `*`.
fn caption_text(line: &str) -> String {
    let line = line.trim();
    let inner = line.strip_prefix('*').unwrap_or(line);
    let inner = inner.strip_suffix('*').unwrap_or(inner);
    inner.trim().to_string()
}
