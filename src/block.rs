use serde::Serialize;

/// Base address for embeddable YouTube players.
pub const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Span {
    Text(String),
    Bold(Vec<Span>),
    Code(String),
    Link { text: String, url: String },
    Video(VideoEmbed),
    LineBreak,
}

/// A YouTube video referenced from a `[title](url)` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoEmbed {
    pub title: String,
    /// Empty when the id could not be recovered from the url.
    pub video_id: String,
    pub url: String,
    pub caption: Option<String>,
}

impl VideoEmbed {
    /// Player URL for this video, or `None` when there is no id to embed.
    pub fn embed_url(&self) -> Option<String> {
        if self.video_id.is_empty() {
            None
        } else {
            Some(format!("{YOUTUBE_EMBED_BASE}{}", self.video_id))
        }
    }
}

/// A single list item, optionally led by an emoji icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub icon: Option<String>,
    pub content: Vec<Span>,
}

/// A list (ordered or unordered)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

/// Block-level elements parsed from instruction text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    Heading {
        /// Always 2, 3 or 4.
        level: u8,
        text: String,
        children: Vec<Block>,
    },
    Paragraph {
        content: Vec<Span>,
    },
    CodeBlock {
        language: Option<String>,
        content: String,
    },
    List(List),
    Video(VideoEmbed),
    /// Mentions a YouTube domain without any embeddable title link.
    PlainVideoSection {
        content: Vec<Span>,
    },
}
