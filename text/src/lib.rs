//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the textkit project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Text engine behind the textkit utilities: positional line diff with
//! word highlighting, text statistics, regex testing, line sorting and
//! splitting. Everything here is a pure function of its inputs.

pub mod diff;
pub mod error;
pub mod regex_engine;
pub mod sort;
pub mod split;
pub mod stats;

pub use diff::{DiffLine, DiffStats, HighlightStyle, LineKind, TextDiff};
pub use error::{Error, PatternError};
pub use regex_engine::{test_regex, RegexEngine, RegexFlags, RegexMatch, RegexOutcome};
pub use sort::{SortKind, SortOptions, SortOrder};
pub use split::{Delimiter, SplitOptions};
pub use stats::TextStats;

/// Length of `s` in UTF-16 code units.
pub(crate) fn code_units(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Diffs two texts line by line. See [`diff::diff`].
pub fn compute_text_diff(text1: &str, text2: &str) -> TextDiff {
    diff::diff(text1, text2)
}

pub fn count_text_stats(text: &str) -> TextStats {
    stats::stats(text)
}

/// Sorts the lines of `text`. See [`sort::sort_lines`].
pub fn sort_text(text: &str, sort_type: SortKind, order: SortOrder, case_sensitive: bool) -> String {
    sort::sort_lines(
        text,
        &SortOptions {
            kind: sort_type,
            order,
            case_sensitive,
            unique: false,
        },
    )
}

pub fn split_text(text: &str, options: &SplitOptions) -> Vec<String> {
    split::split(text, options)
}
