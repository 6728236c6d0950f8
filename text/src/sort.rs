//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the textkit project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::borrow::Cow;
use std::cmp::Ordering;
use std::str::FromStr;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::code_units;

/// What lines are compared by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKind {
    #[default]
    Alphabetical,
    Numerical,
    Length,
}

impl FromStr for SortKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alphabetical" => Ok(SortKind::Alphabetical),
            "numerical" | "numeric" => Ok(SortKind::Numerical),
            "length" => Ok(SortKind::Length),
            _ => Err(format!("unknown sort type '{s}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(format!("unknown sort order '{s}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    pub kind: SortKind,
    pub order: SortOrder,
    /// Compare lines as written instead of case-folded.
    pub case_sensitive: bool,
    /// Keep only the first of each run of lines that compare equal.
    pub unique: bool,
}

/// A line together with the values it is compared by.
struct SortLine<'a> {
    original: &'a str,
    key: Cow<'a, str>,
    number: Option<f64>,
    units: usize,
}

impl<'a> SortLine<'a> {
    fn new(original: &'a str, options: &SortOptions) -> Self {
        let key = if options.case_sensitive {
            Cow::Borrowed(original)
        } else {
            Cow::Owned(original.to_lowercase())
        };
        let number = match options.kind {
            SortKind::Numerical => parse_float(&key),
            _ => None,
        };

        SortLine {
            original,
            key,
            number,
            units: code_units(original),
        }
    }
}

fn compare_sort_lines(a: &SortLine, b: &SortLine, options: &SortOptions) -> Ordering {
    let ordering = match options.kind {
        SortKind::Alphabetical => locale_compare(&a.key, &b.key),
        SortKind::Numerical => match (a.number, b.number) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => locale_compare(&a.key, &b.key),
        },
        SortKind::Length => a
            .units
            .cmp(&b.units)
            .then_with(|| locale_compare(&a.key, &b.key)),
    };

    match options.order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    }
}

/// Collation close to a default locale's.
///
/// Letters compare by their base form first, ignoring accents and case,
/// so `éclair` sorts between `apple` and `Zebra`. Remaining ties put
/// unaccented before accented and lowercase before uppercase, and
/// anything still tied falls back to code point order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| compare_case(a, b))
        .then_with(|| a.cmp(b))
}

/// Lowercase letters of `s` with combining marks removed.
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn compare_case(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                _ => {}
            }
        }
    }
    Ordering::Equal
}

/// Parses the longest leading decimal number of `s`.
///
/// Leading whitespace is skipped, an optional sign, `Infinity`, digits
/// with an optional fraction and an optional exponent are accepted, and
/// whatever follows is ignored: `"12px"` parses as 12. Returns `None`
/// when no digits lead the string.
pub fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].replace("Infinity", "inf").parse().ok();
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Stable bottom-up merge sort returning the sorted order of `0..len`.
///
/// Unlike `slice::sort_by`, this tolerates comparators that are not a
/// total order, which the numerical sort is when numbers and words mix.
fn stable_order_by<F>(len: usize, mut cmp: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Ordering,
{
    let mut order: Vec<usize> = (0..len).collect();
    let mut merged = Vec::with_capacity(len);
    let mut width = 1;

    while width < len {
        merged.clear();
        for start in (0..len).step_by(2 * width) {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut i, mut j) = (start, mid);

            while i < mid && j < end {
                if cmp(order[j], order[i]) == Ordering::Less {
                    merged.push(order[j]);
                    j += 1;
                } else {
                    merged.push(order[i]);
                    i += 1;
                }
            }
            merged.extend_from_slice(&order[i..mid]);
            merged.extend_from_slice(&order[j..end]);
        }
        std::mem::swap(&mut order, &mut merged);
        width *= 2;
    }

    order
}

/// Sorts the lines of `text` and joins them back with `\n`.
///
/// Lines keep their original spelling whatever key they were compared
/// by. With the numerical kind, lines that do not start with a number
/// are compared to their neighbours as text, so numbers and words may
/// interleave.
pub fn sort_lines(text: &str, options: &SortOptions) -> String {
    let lines: Vec<SortLine> = text
        .split('\n')
        .map(|line| SortLine::new(line, options))
        .collect();

    let order = stable_order_by(lines.len(), |a, b| {
        compare_sort_lines(&lines[a], &lines[b], options)
    });
    log::debug!("sorted {} lines by {:?}", lines.len(), options.kind);

    let mut sorted: Vec<&SortLine> = Vec::with_capacity(lines.len());
    for idx in order {
        let line = &lines[idx];
        if options.unique {
            if let Some(last) = sorted.last() {
                if compare_sort_lines(last, line, options) == Ordering::Equal {
                    continue;
                }
            }
        }
        sorted.push(line);
    }

    sorted
        .iter()
        .map(|line| line.original)
        .collect::<Vec<_>>()
        .join("\n")
}
