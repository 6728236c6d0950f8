//
// Copyright (c) 2024 Jeff Garzik
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the textkit project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::ops::AddAssign;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::code_units;

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Counts describing a block of text.
///
/// `characters` and `characters_no_spaces` are UTF-16 code units,
/// `bytes` is the UTF-8 encoded length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub lines: usize,
    pub bytes: usize,
}

impl AddAssign for TextStats {
    fn add_assign(&mut self, rhs: Self) {
        self.characters += rhs.characters;
        self.characters_no_spaces += rhs.characters_no_spaces;
        self.words += rhs.words;
        self.sentences += rhs.sentences;
        self.paragraphs += rhs.paragraphs;
        self.lines += rhs.lines;
        self.bytes += rhs.bytes;
    }
}

fn count_non_blank<'a>(segments: impl Iterator<Item = &'a str>) -> usize {
    segments.filter(|s| !s.trim().is_empty()).count()
}

/// Computes [`TextStats`] for `text`.
///
/// Empty and whitespace-only text yields all zeroes, including
/// `characters` and `lines`.
pub fn stats(text: &str) -> TextStats {
    if text.trim().is_empty() {
        return TextStats::default();
    }

    TextStats {
        characters: code_units(text),
        characters_no_spaces: text
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(char::len_utf16)
            .sum(),
        words: text.split_whitespace().count(),
        sentences: count_non_blank(SENTENCE_END.split(text)),
        paragraphs: count_non_blank(BLANK_LINES.split(text)),
        lines: text.split('\n').count(),
        bytes: text.len(),
    }
}
