//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the textkit project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// How changed words are marked when a [`WordDiff`] is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum HighlightStyle {
    /// `<mark>word</mark>`, with all text HTML-escaped.
    #[default]
    Html,
    /// `[+word+]`
    Brackets,
    /// Reverse video terminal escape.
    Ansi,
}

/// One token of the newer line and whether it differs from the older line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub changed: bool,
}

/// Token-by-token comparison of two lines, expressed over the newer line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDiff<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> WordDiff<'a> {
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Tokens of the newer line that were marked as changed.
    pub fn changed_tokens(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.segments
            .iter()
            .filter(|segment| segment.changed)
            .map(|segment| segment.text)
    }

    /// Concatenates all segments, wrapping changed ones in the style's marker.
    pub fn render(&self, style: HighlightStyle) -> String {
        let mut output = String::new();

        for segment in &self.segments {
            match (style, segment.changed) {
                (HighlightStyle::Html, false) => push_escaped(&mut output, segment.text),
                (HighlightStyle::Html, true) => {
                    output.push_str("<mark>");
                    push_escaped(&mut output, segment.text);
                    output.push_str("</mark>");
                }
                (HighlightStyle::Brackets, true) => {
                    output.push_str("[+");
                    output.push_str(segment.text);
                    output.push_str("+]");
                }
                (HighlightStyle::Ansi, true) => {
                    output.push_str("\x1b[7m");
                    output.push_str(segment.text);
                    output.push_str("\x1b[27m");
                }
                (_, false) => output.push_str(segment.text),
            }
        }

        output
    }
}

fn push_escaped(output: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            _ => output.push(ch),
        }
    }
}

/// Splits a line into alternating word and whitespace tokens.
///
/// The separators are kept, so concatenating the tokens gives back the
/// line. The first and last tokens are always words, possibly empty:
/// `" a"` splits into `["", " ", "a"]`.
pub fn split_keep_whitespace(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for sep in WHITESPACE_RUN.find_iter(line) {
        tokens.push(&line[last..sep.start()]);
        tokens.push(sep.as_str());
        last = sep.end();
    }
    tokens.push(&line[last..]);

    tokens
}

/// Compares `line1` and `line2` token by token, by position.
///
/// There is no alignment: a word inserted near the start of `line2`
/// shifts every following token, and all of them are reported changed.
/// Tokens that only exist in `line1` leave no trace in the result.
pub fn word_diff<'a>(line1: &str, line2: &'a str) -> WordDiff<'a> {
    let words1 = split_keep_whitespace(line1);
    let words2 = split_keep_whitespace(line2);

    let mut segments = Vec::with_capacity(words2.len());
    for i in 0..words1.len().max(words2.len()) {
        let word1 = words1.get(i).copied().unwrap_or("");
        let word2 = words2.get(i).copied().unwrap_or("");

        if word2.is_empty() {
            continue;
        }
        segments.push(Segment {
            text: word2,
            changed: word1 != word2,
        });
    }

    WordDiff { segments }
}
