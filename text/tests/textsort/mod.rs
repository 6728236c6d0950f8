//
// Copyright (c) 2024 Jeff Garzik
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the textkit project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use plib::testing::{run_test, TestPlan};

fn textsort_test(args: &[&str], test_data: &str, expected_output: &str) {
    let str_args: Vec<String> = args.iter().map(|s| String::from(*s)).collect();

    run_test(TestPlan {
        cmd: String::from("textsort"),
        args: str_args,
        stdin_data: String::from(test_data),
        expected_out: String::from(expected_output),
        expected_err: String::from(""),
        expected_exit_code: 0,
    });
}

#[test]
fn test_alphabetical() {
    textsort_test(&[], "banana\napple\nCherry\n", "apple\nbanana\nCherry\n");
}

#[test]
fn test_alphabetical_reverse() {
    textsort_test(&["-r"], "banana\napple\nCherry\n", "Cherry\nbanana\napple\n");
}

#[test]
fn test_case_sensitive() {
    textsort_test(&["-s"], "B\nb\na\n", "a\nb\nB\n");
    textsort_test(&[], "B\nb\na\n", "a\nB\nb\n");
}

#[test]
fn test_numerical() {
    textsort_test(&["-k", "numerical"], "10\n9\n100\n-2.5\n", "-2.5\n9\n10\n100\n");
    textsort_test(&["--key", "numerical", "-r"], "1\n3\n2\n", "3\n2\n1\n");
}

#[test]
fn test_length() {
    textsort_test(&["-k", "length"], "ccc\nbb\nA\naa\nb\n", "A\nb\naa\nbb\nccc\n");
}

#[test]
fn test_unique() {
    textsort_test(&["-u"], "b\nA\na\nb\n", "A\nb\n");
}

#[test]
fn test_no_final_newline() {
    textsort_test(&[], "b\na", "a\nb\n");
}

#[test]
fn test_empty() {
    textsort_test(&[], "", "");
}

#[test]
fn test_accented_lines() {
    textsort_test(&[], "Zebra\n\u{e9}clair\napple\n", "apple\n\u{e9}clair\nZebra\n");
}
