use crate::block::{Block, List, Span, VideoEmbed};
use crate::config::Config;

/// Convert blocks to HTML markup
pub fn blocks_to_html(blocks: &[Block], config: &Config) -> String {
    let mut out = String::new();
    for block in blocks {
        emit_block(block, config, &mut out);
    }
    out
}

fn emit_block(block: &Block, config: &Config, out: &mut String) {
    let prefix = &config.html.class_prefix;
    match block {
        Block::Heading {
            level,
            text,
            children,
        } => {
            out.push_str(&format!("<section class=\"{prefix}-section\">\n"));
            out.push_str(&format!("<h{level}>"));
            escape_into(text, out);
            out.push_str(&format!("</h{level}>\n"));
            for child in children {
                emit_block(child, config, out);
            }
            out.push_str("</section>\n");
        }
        Block::Paragraph { content } => {
            out.push_str("<p>");
            spans_to_html(content, config, out);
            out.push_str("</p>\n");
        }
        Block::CodeBlock { language, content } => {
            out.push_str("<pre><code");
            if let Some(lang) = language {
                out.push_str(" class=\"language-");
                escape_into(lang, out);
                out.push('"');
            }
            out.push('>');
            escape_into(content, out);
            out.push_str("</code></pre>\n");
        }
        Block::List(list) => list_to_html(list, config, out),
        Block::Video(video) => video_to_html(video, config, out),
        Block::PlainVideoSection { content } => {
            out.push_str(&format!("<div class=\"{prefix}-video-section\">"));
            spans_to_html(content, config, out);
            out.push_str("</div>\n");
        }
    }
}

fn spans_to_html(spans: &[Span], config: &Config, out: &mut String) {
    for span in spans {
        span_to_html(span, config, out);
    }
}

fn span_to_html(span: &Span, config: &Config, out: &mut String) {
    match span {
        Span::Text(text) => escape_into(text, out),
        Span::Bold(inner) => {
            out.push_str("<strong>");
            spans_to_html(inner, config, out);
            out.push_str("</strong>");
        }
        Span::Code(code) => {
            out.push_str("<code>");
            escape_into(code, out);
            out.push_str("</code>");
        }
        Span::Link { text, url } => {
            link_to_html(text, url, config, out);
        }
        Span::Video(video) => video_to_html(video, config, out),
        Span::LineBreak => out.push_str("<br>"),
    }
}

fn link_to_html(text: &str, url: &str, config: &Config, out: &mut String) {
    if !is_safe_url(url) {
        escape_into(text, out);
        return;
    }
    out.push_str("<a href=\"");
    escape_into(url, out);
    out.push('"');
    if !config.links.target.is_empty() {
        out.push_str(" target=\"");
        escape_into(&config.links.target, out);
        out.push('"');
    }
    if !config.links.rel.is_empty() {
        out.push_str(" rel=\"");
        escape_into(&config.links.rel, out);
        out.push('"');
    }
    out.push('>');
    escape_into(text, out);
    out.push_str("</a>");
}

fn list_to_html(list: &List, config: &Config, out: &mut String) {
    let tag = if list.ordered { "ol" } else { "ul" };
    let prefix = &config.html.class_prefix;

    out.push_str(&format!("<{tag} class=\"{prefix}-list\">\n"));
    for item in &list.items {
        out.push_str("<li>");
        if let Some(icon) = &item.icon {
            out.push_str(&format!("<span class=\"{prefix}-icon\">"));
            escape_into(icon, out);
            out.push_str("</span> ");
        }
        spans_to_html(&item.content, config, out);
        out.push_str("</li>\n");
    }
    out.push_str(&format!("</{tag}>\n"));
}

fn video_to_html(video: &VideoEmbed, config: &Config, out: &mut String) {
    let prefix = &config.html.class_prefix;
    out.push_str(&format!("<div class=\"{prefix}-video\">\n"));

    out.push_str(&format!("<h4 class=\"{prefix}-video-title\">"));
    escape_into(&video.title, out);
    out.push_str("</h4>\n");

    // No id, no player: the title and link below still render.
    if let Some(embed_url) = video.embed_url() {
        let video_config = &config.video;
        out.push_str("<iframe src=\"");
        escape_into(&embed_url, out);
        out.push_str("\" title=\"");
        escape_into(&video.title, out);
        out.push_str(&format!(
            "\" width=\"{}\" height=\"{}\" frameborder=\"0\" \
             allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture\"",
            video_config.width, video_config.height
        ));
        if video_config.allow_fullscreen {
            out.push_str(" allowfullscreen");
        }
        out.push_str("></iframe>\n");
    }

    out.push_str("<p>");
    link_to_html(&video.url, &video.url, config, out);
    out.push_str("</p>\n");

    if let Some(caption) = &video.caption {
        out.push_str("<p><em>");
        escape_into(caption, out);
        out.push_str("</em></p>\n");
    }

    out.push_str("</div>\n");
}

/// Relative urls and http(s)/mailto are allowed; any other scheme is not.
fn is_safe_url(url: &str) -> bool {
    let url = url.trim();
    let Some(colon) = url.find(':') else {
        return true;
    };
    if url[..colon].contains(['/', '?', '#']) {
        return true;
    }
    let scheme = url[..colon].to_ascii_lowercase();
    matches!(scheme.as_str(), "http" | "https" | "mailto")
}

/// Escape text for use in HTML content and quoted attribute values.
fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
