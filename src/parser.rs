use std::sync::LazyLock;

use regex::Regex;

use crate::block::Block;
use crate::{inline, list, video};

const FENCE: &str = "```";

static SECTION_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("section break pattern is valid"));

/// Parse instruction text into a list of blocks
pub fn parse(text: &str) -> Vec<Block> {
    let text = text.replace("\r\n", "\n");
    let mut blocks = Vec::new();

    for section in segment(&text) {
        classify(section, &mut blocks);
    }

    blocks
}

/// Split text into trimmed, non-empty sections at blank-line boundaries.
fn segment(text: &str) -> Vec<&str> {
    SECTION_BREAK
        .split(text)
        .map(str::trim)
        .filter(|section| !section.is_empty())
        .collect()
}

fn split_first_line(section: &str) -> (&str, &str) {
    section.split_once('\n').unwrap_or((section, ""))
}

fn classify(section: &str, blocks: &mut Vec<Block>) {
    // Leading heading lines each own everything below them in the section.
    let mut headings = Vec::new();
    let mut body = section;
    while body.starts_with('#') {
        let (first, rest) = split_first_line(body);
        headings.push(heading(first));
        body = rest.trim();
    }

    let mut nested = Vec::new();
    if !body.is_empty() {
        classify_body(body, &mut nested);
    }

    for (level, text) in headings.into_iter().rev() {
        log::trace!("heading h{level}: {text}");
        nested = vec![Block::Heading {
            level,
            text,
            children: nested,
        }];
    }
    blocks.append(&mut nested);
}

/// Heading level and text for a `#` line. Levels are clamped into 2..=4.
fn heading(line: &str) -> (u8, String) {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    let level = hashes.clamp(2, 4) as u8;
    let text = line[hashes..].trim();
    (level, text.to_string())
}

fn classify_body(section: &str, blocks: &mut Vec<Block>) {
    if section.contains(FENCE) {
        log::debug!("section classified as code");
        code_section(section, blocks);
    } else if section.lines().any(list::is_item_start) {
        log::debug!("section classified as list");
        blocks.push(Block::List(list::parse_list(section)));
    } else if video::mentions_youtube(section) {
        log::debug!("section classified as video");
        video::format_section(section, blocks);
    } else {
        log::debug!("section classified as paragraph");
        blocks.push(Block::Paragraph {
            content: inline::format(section),
        });
    }
}

/// Alternate text and fenced code. Every odd part is code, its first line
/// naming the language; a missing closing fence leaves the remainder as code.
fn code_section(section: &str, blocks: &mut Vec<Block>) {
    for (i, part) in section.split(FENCE).enumerate() {
        if i % 2 == 0 {
            let text = part.trim();
            if !text.is_empty() {
                blocks.push(Block::Paragraph {
                    content: inline::format(text),
                });
            }
            continue;
        }

        let (language, code) = split_first_line(part);
        let (language, code) = (language.trim(), code.trim());
        blocks.push(Block::CodeBlock {
            language: (!language.is_empty()).then(|| language.to_string()),
            content: code.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{List, ListItem, Span, VideoEmbed};

    fn text(s: &str) -> Vec<Span> {
        vec![Span::Text(s.to_string())]
    }

    fn paragraph(s: &str) -> Block {
        Block::Paragraph { content: text(s) }
    }

    #[test]
    fn empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n\n   \n\n").is_empty());
    }

    #[test]
    fn sections_keep_order() {
        assert_eq!(segment("a\n\n\n\nb\n\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn crlf_is_normalised() {
        assert_eq!(
            parse("one\r\n\r\ntwo"),
            vec![paragraph("one"), paragraph("two")]
        );
    }

    #[test]
    fn heading_then_paragraph() {
        assert_eq!(
            parse("## Title\n\nBody text"),
            vec![
                Block::Heading {
                    level: 2,
                    text: "Title".to_string(),
                    children: vec![],
                },
                paragraph("Body text"),
            ]
        );
    }

    #[test]
    fn heading_levels_are_clamped() {
        assert_eq!(heading("# One"), (2, "One".to_string()));
        assert_eq!(heading("### Three"), (3, "Three".to_string()));
        assert_eq!(heading("###### Six"), (4, "Six".to_string()));
    }

    #[test]
    fn heading_owns_rest_of_section() {
        assert_eq!(
            parse("### Rules\n- be kind\n- be brief"),
            vec![Block::Heading {
                level: 3,
                text: "Rules".to_string(),
                children: vec![Block::List(List {
                    ordered: false,
                    items: vec![
                        ListItem {
                            icon: None,
                            content: text("be kind"),
                        },
                        ListItem {
                            icon: None,
                            content: text("be brief"),
                        },
                    ],
                })],
            }]
        );
    }

    #[test]
    fn stacked_headings_nest() {
        assert_eq!(
            parse("## A\n### B\nbody"),
            vec![Block::Heading {
                level: 2,
                text: "A".to_string(),
                children: vec![Block::Heading {
                    level: 3,
                    text: "B".to_string(),
                    children: vec![paragraph("body")],
                }],
            }]
        );
    }

    #[test]
    fn heading_wins_over_video() {
        let blocks = parse("## [Intro](https://youtu.be/abc)");
        assert!(matches!(&blocks[..], [Block::Heading { level: 2, .. }]));
    }

    #[test]
    fn fenced_code() {
        assert_eq!(
            parse("```js\nconsole.log(1)\n```"),
            vec![Block::CodeBlock {
                language: Some("js".to_string()),
                content: "console.log(1)".to_string(),
            }]
        );
    }

    #[test]
    fn code_with_surrounding_text() {
        assert_eq!(
            parse("Run this:\n```\nmake\n```\nthen **wait**"),
            vec![
                paragraph("Run this:"),
                Block::CodeBlock {
                    language: None,
                    content: "make".to_string(),
                },
                Block::Paragraph {
                    content: vec![
                        Span::Text("then ".to_string()),
                        Span::Bold(text("wait")),
                    ],
                },
            ]
        );
    }

    #[test]
    fn unterminated_fence_is_code() {
        assert_eq!(
            parse("```py\nprint(1)"),
            vec![Block::CodeBlock {
                language: Some("py".to_string()),
                content: "print(1)".to_string(),
            }]
        );
    }

    #[test]
    fn single_line_fence_is_all_language() {
        assert_eq!(
            parse("```ls -la```"),
            vec![Block::CodeBlock {
                language: Some("ls -la".to_string()),
                content: String::new(),
            }]
        );
    }

    #[test]
    fn empty_fence_is_empty_code() {
        assert_eq!(
            parse("```\n```"),
            vec![Block::CodeBlock {
                language: None,
                content: String::new(),
            }]
        );
    }

    #[test]
    fn trailing_open_fence_is_empty_code() {
        assert_eq!(
            parse("Intro:\n```"),
            vec![
                paragraph("Intro:"),
                Block::CodeBlock {
                    language: None,
                    content: String::new(),
                },
            ]
        );
    }

    #[test]
    fn code_wins_over_list() {
        let blocks = parse("```\n- not a list\n```");
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                language: None,
                content: "- not a list".to_string(),
            }]
        );
    }

    #[test]
    fn ordered_list() {
        let blocks = parse("1. First\n2. Second");
        let [Block::List(list)] = &blocks[..] else {
            panic!("expected one list, got {blocks:?}");
        };
        assert!(list.ordered);
        assert_eq!(list.items.len(), 2);
    }

    #[test]
    fn unordered_list() {
        let blocks = parse("- one\n- two");
        let [Block::List(list)] = &blocks[..] else {
            panic!("expected one list, got {blocks:?}");
        };
        assert!(!list.ordered);
        assert_eq!(list.items.len(), 2);
    }

    #[test]
    fn list_wins_over_video() {
        let blocks = parse("- [Intro](https://youtu.be/abc)\n- [Docs](https://example.com)");
        let [Block::List(list)] = &blocks[..] else {
            panic!("expected one list, got {blocks:?}");
        };
        assert!(matches!(&list.items[0].content[..], [Span::Video(_)]));
        assert!(matches!(&list.items[1].content[..], [Span::Link { .. }]));
    }

    #[test]
    fn video_section() {
        assert_eq!(
            parse("[Watch](https://www.youtube.com/watch?v=abc123)"),
            vec![Block::Video(VideoEmbed {
                title: "Watch".to_string(),
                video_id: "abc123".to_string(),
                url: "https://www.youtube.com/watch?v=abc123".to_string(),
                caption: None,
            })]
        );
    }

    #[test]
    fn short_link_video() {
        let blocks = parse("[Watch](https://youtu.be/xyz789?t=5)");
        let [Block::Video(video)] = &blocks[..] else {
            panic!("expected one video, got {blocks:?}");
        };
        assert_eq!(video.video_id, "xyz789");
    }

    #[test]
    fn paragraph_with_link() {
        assert_eq!(
            parse("[Docs](https://example.com)"),
            vec![Block::Paragraph {
                content: vec![Span::Link {
                    text: "Docs".to_string(),
                    url: "https://example.com".to_string(),
                }],
            }]
        );
    }

    #[test]
    fn parse_is_idempotent() {
        let input = "## Guide\n\n1. Step\n2. Step\n\n```sh\nls\n```\n\n[Clip](https://youtu.be/a)";
        assert_eq!(parse(input), parse(input));
    }
}
