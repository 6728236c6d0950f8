//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the textkit project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use super::similarity::similarity;
use super::word::{word_diff, HighlightStyle};
use crate::code_units;

/// Two differing lines scoring above this are reported as one modified line.
pub const MODIFIED_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Normal,
    Add,
    Remove,
}

impl LineKind {
    pub fn marker(&self) -> char {
        match self {
            LineKind::Normal => ' ',
            LineKind::Add => '+',
            LineKind::Remove => '-',
        }
    }
}

/// One row of a diff.
///
/// A modified line is a `Remove` row directly followed by an `Add` row
/// with the same `line_number`; only that `Add` row carries
/// `highlighted_content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub kind: LineKind,
    pub content: String,
    pub highlighted_content: Option<String>,
    pub line_number: usize,
}

/// Counters accumulated while diffing.
///
/// Modified pairs only count towards `lines_modified`; `lines_added` and
/// `lines_removed` cover pure additions, removals and unrelated
/// replacements. Character counters are in UTF-16 code units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub lines_added: usize,
    pub lines_removed: usize,
    pub lines_modified: usize,
    pub characters_added: usize,
    pub characters_removed: usize,
    /// Sum of absolute length differences of modified pairs.
    pub characters_modified: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDiff {
    pub lines: Vec<DiffLine>,
    pub stats: DiffStats,
}

impl TextDiff {
    pub fn has_changes(&self) -> bool {
        self.lines.iter().any(|line| line.kind != LineKind::Normal)
    }

    /// Rebuilds the first text from the `Remove` and `Normal` rows.
    pub fn original(&self) -> String {
        self.rebuild(LineKind::Remove)
    }

    /// Rebuilds the second text from the `Add` and `Normal` rows.
    pub fn modified(&self) -> String {
        self.rebuild(LineKind::Add)
    }

    fn rebuild(&self, side: LineKind) -> String {
        self.lines
            .iter()
            .filter(|line| line.kind == side || line.kind == LineKind::Normal)
            .map(|line| line.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Splits a text into lines on `\n`.
///
/// An empty text has no lines at all; any other text splits exactly like
/// [`str::split`], so a trailing newline yields a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    }
}

struct DiffBuilder {
    style: HighlightStyle,
    lines: Vec<DiffLine>,
    stats: DiffStats,
    line_num: usize,
}

impl DiffBuilder {
    fn new(style: HighlightStyle) -> Self {
        DiffBuilder {
            style,
            lines: Vec::new(),
            stats: DiffStats::default(),
            line_num: 1,
        }
    }

    fn push(&mut self, kind: LineKind, content: &str, highlighted_content: Option<String>) {
        self.lines.push(DiffLine {
            kind,
            content: content.to_string(),
            highlighted_content,
            line_number: self.line_num,
        });
    }

    fn normal(&mut self, line: &str) {
        self.push(LineKind::Normal, line, None);
        self.line_num += 1;
    }

    fn added(&mut self, line: &str) {
        self.push(LineKind::Add, line, None);
        self.stats.lines_added += 1;
        self.stats.characters_added += code_units(line);
        self.line_num += 1;
    }

    fn removed(&mut self, line: &str) {
        self.push(LineKind::Remove, line, None);
        self.stats.lines_removed += 1;
        self.stats.characters_removed += code_units(line);
        self.line_num += 1;
    }

    fn modified(&mut self, old: &str, new: &str) {
        let highlighted = word_diff(old, new).render(self.style);
        self.push(LineKind::Remove, old, None);
        self.push(LineKind::Add, new, Some(highlighted));

        let (old_len, new_len) = (code_units(old), code_units(new));
        self.stats.lines_modified += 1;
        self.stats.characters_removed += old_len;
        self.stats.characters_added += new_len;
        self.stats.characters_modified += old_len.abs_diff(new_len);
        self.line_num += 1;
    }

    fn replaced(&mut self, old: &str, new: &str) {
        self.push(LineKind::Remove, old, None);
        self.push(LineKind::Add, new, None);

        self.stats.lines_removed += 1;
        self.stats.lines_added += 1;
        self.stats.characters_removed += code_units(old);
        self.stats.characters_added += code_units(new);
        self.line_num += 1;
    }

    fn finish(self) -> TextDiff {
        TextDiff {
            lines: self.lines,
            stats: self.stats,
        }
    }
}

/// Diffs two texts line by line, highlighting modified lines as HTML.
pub fn diff(text1: &str, text2: &str) -> TextDiff {
    diff_with_style(text1, text2, HighlightStyle::Html)
}

/// Diffs two texts line by line.
///
/// Lines are walked in lockstep and never realigned, so one inserted
/// line makes every later line differ from its counterpart.
pub fn diff_with_style(text1: &str, text2: &str, style: HighlightStyle) -> TextDiff {
    let lines1 = split_lines(text1);
    let lines2 = split_lines(text2);
    let mut builder = DiffBuilder::new(style);

    let (mut i, mut j) = (0, 0);
    while i < lines1.len() || j < lines2.len() {
        if i >= lines1.len() {
            builder.added(lines2[j]);
            j += 1;
        } else if j >= lines2.len() {
            builder.removed(lines1[i]);
            i += 1;
        } else {
            let (line1, line2) = (lines1[i], lines2[j]);
            if line1 == line2 {
                builder.normal(line1);
            } else if similarity(line1, line2) > MODIFIED_THRESHOLD {
                builder.modified(line1, line2);
            } else {
                builder.replaced(line1, line2);
            }
            i += 1;
            j += 1;
        }
    }

    let diff = builder.finish();
    log::debug!(
        "diffed {} against {} lines: {:?}",
        lines1.len(),
        lines2.len(),
        diff.stats
    );

    diff
}
