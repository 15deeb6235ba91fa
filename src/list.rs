use std::sync::LazyLock;

use regex::Regex;

use crate::block::{List, ListItem};
use crate::inline;

static ORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.(?:\s|$)").expect("ordered marker pattern is valid"));

static UNORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+](?:\s|$)").expect("unordered marker pattern is valid"));

/// Emoji that start an icon list item. The shield is listed with and
/// without its variation selector; the longer form must be tried first.
pub const LIST_ICONS: [&str; 13] = [
    "✅", "❌", "⚡", "🔧", "📝", "💡", "🎯", "🚀", "📊", "🛡️", "🛡", "🎬", "📋",
];

fn leading_icon(line: &str) -> Option<&'static str> {
    LIST_ICONS.iter().copied().find(|icon| line.starts_with(*icon))
}

/// Whether a line opens a list item (leading whitespace ignored).
pub(crate) fn is_item_start(line: &str) -> bool {
    let line = line.trim_start();
    ORDERED_MARKER.is_match(line) || UNORDERED_MARKER.is_match(line) || leading_icon(line).is_some()
}

/// Group a section's lines into list items.
///
/// Lines that do not open an item continue the current one. Any numbered
/// item makes the whole list ordered, and that never reverts.
pub(crate) fn parse_list(section: &str) -> List {
    let mut ordered = false;
    let mut items = Vec::new();
    let mut current = String::new();

    for line in section.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if ORDERED_MARKER.is_match(line) {
            flush(&mut current, &mut items);
            ordered = true;
            current.push_str(line);
        } else if UNORDERED_MARKER.is_match(line) || leading_icon(line).is_some() {
            flush(&mut current, &mut items);
            current.push_str(line);
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    flush(&mut current, &mut items);

    log::trace!("list with {} items (ordered: {ordered})", items.len());
    List { ordered, items }
}

fn flush(current: &mut String, items: &mut Vec<ListItem>) {
    if current.is_empty() {
        return;
    }
    let raw = std::mem::take(current);
    items.push(build_item(&raw));
}

fn build_item(raw: &str) -> ListItem {
    let mut rest = raw;
    if let Some(m) = ORDERED_MARKER
        .find(rest)
        .or_else(|| UNORDERED_MARKER.find(rest))
    {
        rest = rest[m.end()..].trim_start();
    }

    let icon = leading_icon(rest);
    if let Some(icon) = icon {
        rest = rest[icon.len()..]
            .trim_start_matches('\u{FE0F}')
            .trim_start();
    }

    ListItem {
        icon: icon.map(str::to_string),
        content: inline::format(rest),
    }
}
