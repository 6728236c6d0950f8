//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the textkit project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Positional line diff with word-level highlighting of modified lines.
//!
//! Lines are aligned strictly by position: line `n` of the first text is
//! only ever compared with line `n` of the second. A differing pair is
//! reported either as a modification (when the two lines share enough
//! words, see [`similarity`]) or as an unrelated removal plus addition.

pub mod line;
pub mod similarity;
pub mod word;

pub use line::{diff, diff_with_style, split_lines, DiffLine, DiffStats, LineKind, TextDiff};
pub use similarity::similarity;
pub use word::{word_diff, HighlightStyle, Segment, WordDiff};
