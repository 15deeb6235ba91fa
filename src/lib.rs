mod block;
mod config;
mod error;
mod html;
mod inline;
mod list;
mod parser;
mod text;
mod video;

pub use block::{Block, List, ListItem, Span, VideoEmbed, YOUTUBE_EMBED_BASE};
pub use config::{Config, HtmlConfig, LinksConfig, VideoConfig};
pub use error::{Error, Result};
pub use list::LIST_ICONS;
pub use text::spans_to_text;

/// Parse instruction text into a vector of blocks.
pub fn parse(instructions: &str) -> Vec<Block> {
    parser::parse(instructions)
}

/// Render blocks to HTML with the given config.
pub fn render_html(blocks: &[Block], config: &Config) -> String {
    html::blocks_to_html(blocks, config)
}

/// Convert instruction text to HTML using default config.
pub fn to_html(instructions: &str) -> String {
    to_html_with_config(instructions, &Config::compiled_default())
}

/// Convert instruction text to HTML with custom config.
pub fn to_html_with_config(instructions: &str, config: &Config) -> String {
    let blocks = parse(instructions);
    html::blocks_to_html(&blocks, config)
}

/// Convert instruction text to plain text with all markup removed.
pub fn to_plain_text(instructions: &str) -> String {
    let blocks = parse(instructions);
    text::blocks_to_text(&blocks)
}

/// Convert instruction text to a pretty-printed JSON block tree.
pub fn to_json(instructions: &str) -> Result<String> {
    let blocks = parse(instructions);
    Ok(serde_json::to_string_pretty(&blocks)?)
}
