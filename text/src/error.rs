//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the textkit project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

/// A regular expression that could not be built from its pattern and flags.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Invalid flags supplied to regular expression: '{0}'")]
    InvalidFlags(String),
    #[error("Invalid regular expression: {0}")]
    Syntax(String),
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error processing io: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type Result<T> = std::result::Result<T, Error>;
