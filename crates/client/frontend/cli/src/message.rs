//! Dialogue history and page splitting.
use std::collections::VecDeque;

use game_core::CellId;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// One line of dialogue as it was shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub speaker: CellId,
    pub text: String,
}

/// Circular buffer of past dialogue.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, speaker: CellId, text: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(MessageEntry {
            speaker,
            text: text.into(),
        });
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lines per dialogue page.
pub const PAGE_LINES: usize = 2;

/// Word-wraps `text` to `width` terminal columns and groups the lines into pages.
///
/// Words longer than a line are hard-split. Empty text still yields one
/// empty page so the speaker gets shown.
pub fn paginate(text: &str, width: usize) -> Vec<String> {
    let lines = wrap(text, width.max(1));
    if lines.is_empty() {
        return vec![String::new()];
    }
    lines.chunks(PAGE_LINES).map(|page| page.join("\n")).collect()
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for mut word in text.split_whitespace() {
        while word.width() > width {
            if line_width > 0 {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            let (head, rest) = split_at_width(word, width);
            lines.push(head.to_owned());
            word = rest;
        }

        let word_width = word.width();
        if word_width == 0 {
            continue;
        }
        if line_width > 0 && line_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if line_width > 0 {
            line.push(' ');
            line_width += 1;
        }
        line.push_str(word);
        line_width += word_width;
    }

    if line_width > 0 {
        lines.push(line);
    }
    lines
}

/// Splits off the longest prefix that fits in `width` columns. A single
/// glyph wider than `width` is taken whole so the split always progresses.
fn split_at_width(word: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    for (index, ch) in word.char_indices() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            let index = if index == 0 { ch.len_utf8() } else { index };
            return word.split_at(index);
        }
        used += ch_width;
    }
    (word, "")
}
