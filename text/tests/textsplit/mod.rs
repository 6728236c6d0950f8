//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the textkit project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use plib::testing::{run_test, TestPlan};

fn textsplit_test(args: &[&str], test_data: &str, expected_output: &str) {
    let str_args: Vec<String> = args.iter().map(|s| String::from(*s)).collect();

    run_test(TestPlan {
        cmd: String::from("textsplit"),
        args: str_args,
        stdin_data: String::from(test_data),
        expected_out: String::from(expected_output),
        expected_err: String::from(""),
        expected_exit_code: 0,
    });
}

#[test]
fn test_split_comma() {
    textsplit_test(&["-d", "comma"], "a, b,,c\n", "a\n b\n\nc\n");
}

#[test]
fn test_split_comma_trim_remove_empty() {
    textsplit_test(&["-d", ",", "-t", "-e"], "a, b,,c\n", "a\nb\nc\n");
}

#[test]
fn test_split_whitespace() {
    textsplit_test(&["--delimiter", "whitespace"], "one  two\tthree\n", "one\ntwo\nthree\n");
}

#[test]
fn test_split_custom() {
    textsplit_test(&["-d", "::", "--trim"], "x :: y::z", "x\ny\nz\n");
}

#[test]
fn test_split_default_newline() {
    textsplit_test(&["--remove-empty"], "a\n\nb\n", "a\nb\n");
}
