//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the textkit project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use plib::testing::{run_test, run_test_with_checker, TestPlan};

fn regextest_test(
    args: &[&str],
    test_data: &str,
    expected_output: &str,
    expected_err: &str,
    expected_exit_code: i32,
) {
    let str_args: Vec<String> = args.iter().map(|s| String::from(*s)).collect();

    run_test(TestPlan {
        cmd: String::from("regextest"),
        args: str_args,
        stdin_data: String::from(test_data),
        expected_out: String::from(expected_output),
        expected_err: String::from(expected_err),
        expected_exit_code,
    });
}

#[test]
fn test_regextest_global_digits() {
    regextest_test(&[r"\d+"], "a1 b22 c333", "1: 1\n4: 22\n8: 333\n", "", 0);
}

#[test]
fn test_regextest_first_only() {
    regextest_test(&["-f", "", r"\d+"], "a1 b22 c333", "1: 1\n", "", 0);
}

#[test]
fn test_regextest_zero_width() {
    regextest_test(&["a*"], "bbb", "0: \n1: \n2: \n3: \n", "", 0);
}

#[test]
fn test_regextest_groups() {
    regextest_test(
        &["-f", "", r"(\w)(\d)?"],
        "a1",
        "0: a1\n    $1: a\n    $2: 1\n",
        "",
        0,
    );
    regextest_test(
        &["(a)|(b)"],
        "b",
        "0: b\n    $1: (unmatched)\n    $2: b\n",
        "",
        0,
    );
}

#[test]
fn test_regextest_ignore_case() {
    regextest_test(&["--flags", "gi", "abc"], "ABC abc", "0: ABC\n4: abc\n", "", 0);
}

#[test]
fn test_regextest_no_match() {
    regextest_test(&["z"], "abc", "", "", 1);
}

#[test]
fn test_regextest_bad_flags() {
    regextest_test(
        &["-f", "gx", "a"],
        "a",
        "",
        "regextest: Invalid flags supplied to regular expression: 'gx'\n",
        2,
    );
}

#[test]
fn test_regextest_bad_pattern() {
    run_test_with_checker(
        TestPlan {
            cmd: String::from("regextest"),
            args: vec![String::from("(unclosed")],
            stdin_data: String::from("text"),
            expected_out: String::new(),
            expected_err: String::new(),
            expected_exit_code: 2,
        },
        |plan, output| {
            assert_eq!(output.status.code(), Some(plan.expected_exit_code));
            assert!(output.stdout.is_empty());
            let stderr = String::from_utf8_lossy(&output.stderr);
            assert!(stderr.starts_with("regextest: Invalid regular expression: "));
        },
    );
}

#[test]
fn test_regextest_ascii_digits() {
    regextest_test(&[r"\d+"], "\u{663}\u{664} 12", "3: 12\n", "", 0);
}
