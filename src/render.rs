//! Terminal rendering of canned replies
//!
//! Replies carry light markup meant for a web page: `**bold**`, `<ul>/<li>`
//! lists and `<a>` links whose `onclick` sends a suggested follow-up message.
//! This module flattens that to plain text and pulls the suggestions out so a
//! terminal UI can offer them as quick replies. [`parse_input`] reads the
//! terminal's command line, where `:N` picks suggestion N.

use regex::Regex;
use std::sync::LazyLock;

static SUGGESTION_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<a\s[^>]*?sendSuggestedMessage\("([^"]*)"\)[^>]*>([^<]*)</a>"#)
        .expect("suggestion link pattern is valid")
});

static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*<li>\s*").expect("list item pattern is valid"));

static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("tag pattern is valid"));

/// A follow-up the reply offers as a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub message: String,
}

/// Flatten reply markup for a terminal.
pub fn to_plain_text(markup: &str) -> String {
    let text = LIST_ITEM.replace_all(markup, "\n  - ");
    let text = text.replace("</ul>", "\n").replace("**", "");
    let text = ANY_TAG.replace_all(&text, "");

    text.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Suggested follow-up messages embedded in a reply, in order of appearance.
pub fn suggestions(markup: &str) -> Vec<Suggestion> {
    SUGGESTION_LINK
        .captures_iter(markup)
        .map(|caps| Suggestion {
            label: caps[2].trim().to_string(),
            message: caps[1].to_string(),
        })
        .collect()
}

/// One line typed into the terminal chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    Quit,
    Reset,
    /// A message to send, typed or taken from a suggestion
    Send(String),
    /// `:N` with no suggestion N on offer
    NoSuggestion(usize),
    Ignore,
}

/// Parse a terminal line against the suggestions currently on offer.
/// Suggestions are numbered from 1.
pub fn parse_input(line: &str, suggestions: &[Suggestion]) -> ChatInput {
    let line = line.trim();
    match line {
        "" => ChatInput::Ignore,
        ":quit" | ":q" => ChatInput::Quit,
        ":reset" => ChatInput::Reset,
        _ => match line.strip_prefix(':').map(str::parse::<usize>) {
            Some(Ok(n)) => match n.checked_sub(1).and_then(|i| suggestions.get(i)) {
                Some(suggestion) => ChatInput::Send(suggestion.message.clone()),
                None => ChatInput::NoSuggestion(n),
            },
            _ => ChatInput::Send(line.to_string()),
        },
    }
}
