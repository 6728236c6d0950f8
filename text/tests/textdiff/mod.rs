//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the textkit project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use plib::testing::{run_test, run_test_with_checker, TestPlan};

fn textdiff_test(
    args: &[&str],
    stdin_data: &str,
    expected_output: &str,
    expected_exit_code: i32,
) {
    let str_args: Vec<String> = args.iter().map(|s| String::from(*s)).collect();

    run_test(TestPlan {
        cmd: String::from("textdiff"),
        args: str_args,
        stdin_data: String::from(stdin_data),
        expected_out: String::from(expected_output),
        expected_err: String::from(""),
        expected_exit_code,
    });
}

const OLD: &str = "tests/assets/diff_old.txt";
const NEW: &str = "tests/assets/diff_new.txt";

#[test]
fn test_textdiff_modified_line() {
    textdiff_test(
        &[OLD, NEW],
        "",
        "   1   Hello World\n\
         \x20  2 - This is line 2\n\
         \x20  2 + This is line 2[+ +][+modified+]\n\
         \x20  3   Common line\n",
        1,
    );
}

#[test]
fn test_textdiff_html_highlight() {
    textdiff_test(
        &["--highlight", "html", OLD, NEW],
        "",
        "   1   Hello World\n\
         \x20  2 - This is line 2\n\
         \x20  2 + This is line 2<mark> </mark><mark>modified</mark>\n\
         \x20  3   Common line\n",
        1,
    );
}

#[test]
fn test_textdiff_stats() {
    textdiff_test(
        &["-s", OLD, NEW],
        "",
        "   1   Hello World\n\
         \x20  2 - This is line 2\n\
         \x20  2 + This is line 2[+ +][+modified+]\n\
         \x20  3   Common line\n\
         0 added, 0 removed, 1 modified lines\n\
         23 added, 14 removed, 9 modified characters\n",
        1,
    );
}

#[test]
fn test_textdiff_identical_from_stdin() {
    textdiff_test(
        &[OLD, "-"],
        "Hello World\nThis is line 2\nCommon line\n",
        "   1   Hello World\n   2   This is line 2\n   3   Common line\n",
        0,
    );
}

#[test]
fn test_textdiff_unrelated_and_added() {
    textdiff_test(
        &["-", OLD],
        "Goodbye\n",
        "   1 - Goodbye\n\
         \x20  1 + Hello World\n\
         \x20  2 + This is line 2\n\
         \x20  3 + Common line\n",
        1,
    );
}

#[test]
fn test_textdiff_missing_file() {
    run_test_with_checker(
        TestPlan {
            cmd: String::from("textdiff"),
            args: vec![String::from("tests/assets/no_such_file"), String::from(OLD)],
            stdin_data: String::new(),
            expected_out: String::new(),
            expected_err: String::new(),
            expected_exit_code: 2,
        },
        |plan, output| {
            assert_eq!(output.status.code(), Some(plan.expected_exit_code));
            assert!(output.stdout.is_empty());
            let stderr = String::from_utf8_lossy(&output.stderr);
            assert!(stderr.starts_with("textdiff: tests/assets/no_such_file: "));
        },
    );
}
