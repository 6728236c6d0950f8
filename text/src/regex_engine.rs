//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the textkit project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Regular expression testing.
//!
//! Patterns are compiled with the `regex` crate; flags use the familiar
//! single-letter ECMAScript spelling (`g`, `i`, `m`, `s`, `u`, `y`).
//! Look-around and backreferences are not supported and are reported as
//! pattern errors. As in ECMAScript, `\d`, `\w` and `\b` only know ASCII
//! digits and word characters.

use std::ops::Range;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};

use crate::error::PatternError;

/// Flags controlling compilation and match iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegexFlags {
    /// `g`: report every match, not just the first.
    pub global: bool,
    /// `i`
    pub ignore_case: bool,
    /// `m`: `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `s`: `.` matches `\n`.
    pub dot_all: bool,
    /// `u`: accepted; patterns always match whole Unicode scalar values.
    pub unicode: bool,
    /// `y`: each match must start exactly where the previous one ended.
    pub sticky: bool,
}

impl FromStr for RegexFlags {
    type Err = PatternError;

    fn from_str(flags: &str) -> Result<Self, Self::Err> {
        let mut parsed = RegexFlags::default();

        for ch in flags.chars() {
            let flag = match ch {
                'g' => &mut parsed.global,
                'i' => &mut parsed.ignore_case,
                'm' => &mut parsed.multi_line,
                's' => &mut parsed.dot_all,
                'u' => &mut parsed.unicode,
                'y' => &mut parsed.sticky,
                _ => return Err(PatternError::InvalidFlags(flags.to_string())),
            };
            if *flag {
                return Err(PatternError::InvalidFlags(flags.to_string()));
            }
            *flag = true;
        }

        Ok(parsed)
    }
}

/// A single match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexMatch {
    pub matched: String,
    /// Start of the match in UTF-16 code units.
    pub index: usize,
    /// The match as a byte range of the searched `&str`.
    pub byte_range: Range<usize>,
    /// Capture groups in declaration order; `None` for a group that did
    /// not take part in the match.
    pub groups: Vec<Option<String>>,
}

/// A compiled pattern together with its flags.
#[derive(Debug, Clone)]
pub struct RegexEngine {
    regex: Regex,
    flags: RegexFlags,
}

impl RegexEngine {
    /// Compiles `pattern` with the flag letters in `flags`.
    pub fn new(pattern: &str, flags: &str) -> Result<Self, PatternError> {
        Self::with_flags(pattern, flags.parse()?)
    }

    pub fn with_flags(pattern: &str, flags: RegexFlags) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(&ascii_perl_classes(pattern))
            .case_insensitive(flags.ignore_case)
            .multi_line(flags.multi_line)
            .dot_matches_new_line(flags.dot_all)
            .build()
            .map_err(|e| {
                log::debug!("rejected pattern {pattern:?}: {e}");
                PatternError::Syntax(e.to_string())
            })?;

        Ok(RegexEngine { regex, flags })
    }

    /// Collects the matches of this pattern in `text`.
    ///
    /// Without the global flag at most one match is returned. With it,
    /// the search resumes where the last match ended; an empty match
    /// moves the cursor one character further so the scan always
    /// terminates.
    pub fn find_matches(&self, text: &str) -> Vec<RegexMatch> {
        let mut matches = Vec::new();
        let mut cursor = 0;
        // running conversion of byte offsets to UTF-16 offsets
        let mut counted = (0, 0);

        while cursor <= text.len() {
            let Some(caps) = self.regex.captures_at(text, cursor) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            if self.flags.sticky && whole.start() != cursor {
                break;
            }

            let (counted_bytes, counted_units) = counted;
            let index = counted_units + crate::code_units(&text[counted_bytes..whole.start()]);
            counted = (whole.start(), index);

            matches.push(RegexMatch {
                matched: whole.as_str().to_string(),
                index,
                byte_range: whole.range(),
                groups: caps
                    .iter()
                    .skip(1)
                    .map(|group| group.map(|m| m.as_str().to_string()))
                    .collect(),
            });

            if !self.flags.global {
                break;
            }

            cursor = if whole.is_empty() {
                next_char_boundary(text, whole.end())
            } else {
                whole.end()
            };
        }

        log::trace!("{} matches for {}", matches.len(), self.regex.as_str());
        matches
    }
}

/// Rewrites `\d`, `\w` and their negations as ASCII classes, and `\b`,
/// `\B` as ASCII word boundaries. Other escapes pass through untouched.
fn ascii_perl_classes(pattern: &str) -> String {
    let mut output = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    let mut in_class = false;

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                let Some(escaped) = chars.next() else {
                    output.push(ch);
                    break;
                };
                let class = match escaped {
                    'd' => Some("[:digit:]"),
                    'D' => Some("[:^digit:]"),
                    'w' => Some("[:word:]"),
                    'W' => Some("[:^word:]"),
                    _ => None,
                };
                match class {
                    Some(class) if in_class => output.push_str(class),
                    Some(class) => {
                        output.push('[');
                        output.push_str(class);
                        output.push(']');
                    }
                    None if !in_class && matches!(escaped, 'b' | 'B') => {
                        output.push_str("(?-u:\\");
                        output.push(escaped);
                        output.push(')');
                    }
                    None => {
                        output.push(ch);
                        output.push(escaped);
                    }
                }
            }
            '[' if !in_class => {
                in_class = true;
                output.push(ch);
            }
            ']' if in_class => {
                in_class = false;
                output.push(ch);
            }
            _ => output.push(ch),
        }
    }

    output
}

/// Byte offset of the character after `pos`, or past the end of `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    match text[pos..].chars().next() {
        Some(ch) => pos + ch.len_utf8(),
        None => pos + 1,
    }
}

/// Compiles `pattern` with `flags` and collects its matches in `text`.
pub fn find_matches(
    pattern: &str,
    text: &str,
    flags: &str,
) -> Result<Vec<RegexMatch>, PatternError> {
    Ok(RegexEngine::new(pattern, flags)?.find_matches(text))
}

/// Result of [`test_regex`]: the matches, or the reason there are none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegexOutcome {
    pub matches: Vec<RegexMatch>,
    pub error: Option<String>,
}

/// Like [`find_matches`], but reports a bad pattern in the result instead
/// of failing.
pub fn test_regex(pattern: &str, text: &str, flags: &str) -> RegexOutcome {
    match find_matches(pattern, text, flags) {
        Ok(matches) => RegexOutcome {
            matches,
            error: None,
        },
        Err(e) => RegexOutcome {
            matches: Vec::new(),
            error: Some(e.to_string()),
        },
    }
}
