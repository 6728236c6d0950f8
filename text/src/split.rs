//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the textkit project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::convert::Infallible;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Delimiter {
    #[default]
    Newline,
    Comma,
    Tab,
    /// Any run of whitespace.
    Whitespace,
    /// A literal separator string.
    Custom(String),
}

impl FromStr for Delimiter {
    type Err = Infallible;

    /// Named delimiters (`newline`, `comma`, `tab`, `whitespace`) and
    /// their escaped spellings are recognized, anything else is taken
    /// literally.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "newline" | "\\n" => Delimiter::Newline,
            "comma" | "," => Delimiter::Comma,
            "tab" | "\\t" | "\t" => Delimiter::Tab,
            "whitespace" | "space" => Delimiter::Whitespace,
            _ => Delimiter::Custom(s.to_string()),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitOptions {
    pub delimiter: Delimiter,
    /// Strip surrounding whitespace from every item.
    pub trim: bool,
    /// Drop items that are empty, after trimming if that is enabled.
    pub remove_empty: bool,
}

/// Splits `text` into items on the configured delimiter.
pub fn split(text: &str, options: &SplitOptions) -> Vec<String> {
    let pieces: Vec<&str> = match &options.delimiter {
        Delimiter::Newline => text.split('\n').collect(),
        Delimiter::Comma => text.split(',').collect(),
        Delimiter::Tab => text.split('\t').collect(),
        Delimiter::Whitespace => text.split_whitespace().collect(),
        Delimiter::Custom(sep) if sep.is_empty() => vec![text],
        Delimiter::Custom(sep) => text.split(sep.as_str()).collect(),
    };

    pieces
        .into_iter()
        .map(|piece| if options.trim { piece.trim() } else { piece })
        .filter(|piece| !(options.remove_empty && piece.is_empty()))
        .map(str::to_string)
        .collect()
}
