//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the textkit project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Opens `pathname` for reading, or stdin.
///
/// With `dashed_stdin`, the name `-` selects stdin; otherwise an empty
/// path does.
pub fn input_stream(pathname: &Path, dashed_stdin: bool) -> io::Result<Box<dyn Read>> {
    let path_str = pathname.as_os_str();
    let file: Box<dyn Read> =
        if (dashed_stdin && path_str == "-") || (!dashed_stdin && path_str.is_empty()) {
            Box::new(io::stdin().lock())
        } else {
            Box::new(fs::File::open(pathname)?)
        };

    Ok(file)
}

/// Reads the whole of `pathname` (or stdin, see [`input_stream`]) as UTF-8 text.
pub fn read_input(pathname: &Path, dashed_stdin: bool) -> io::Result<String> {
    let mut file = input_stream(pathname, dashed_stdin)?;
    let mut text = String::new();
    file.read_to_string(&mut text)?;

    log::debug!(
        "read {} bytes from {}",
        text.len(),
        if pathname.as_os_str().is_empty() {
            "stdin".into()
        } else {
            pathname.display().to_string()
        }
    );

    Ok(text)
}

/// Like [`read_input`], with `None` meaning stdin.
pub fn read_input_opt(pathname: &Option<PathBuf>) -> io::Result<String> {
    match pathname {
        Some(path) => read_input(path, true),
        None => read_input(Path::new(""), false),
    }
}

/// `text` without one trailing `\n`, so that a newline-terminated file
/// splits into exactly its lines.
pub fn without_final_newline(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_final_newline() {
        assert_eq!(without_final_newline("a\nb\n"), "a\nb");
        assert_eq!(without_final_newline("a\n\n"), "a\n");
        assert_eq!(without_final_newline("a"), "a");
        assert_eq!(without_final_newline(""), "");
    }
}
