//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the textkit project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::collections::HashSet;

/// Word overlap between two lines (Jaccard index).
///
/// Both lines are lower-cased and split on whitespace runs; the result is
/// the number of distinct words they share divided by the number of
/// distinct words in either. Two blank lines score 0.
pub fn similarity(line1: &str, line2: &str) -> f64 {
    let words1 = word_set(line1);
    let words2 = word_set(line2);

    let union = words1.union(&words2).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = words1.intersection(&words2).count();
    intersection as f64 / union as f64
}

fn word_set(line: &str) -> HashSet<String> {
    line.to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}
