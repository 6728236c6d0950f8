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

fn textstats_test(args: &[&str], test_data: &str, expected_output: &str) {
    let str_args: Vec<String> = args.iter().map(|s| String::from(*s)).collect();

    run_test(TestPlan {
        cmd: String::from("textstats"),
        args: str_args,
        stdin_data: String::from(test_data),
        expected_out: String::from(expected_output),
        expected_err: String::from(""),
        expected_exit_code: 0,
    });
}

const SAMPLE_STATS: &str = "characters: 28\n\
                            characters (no spaces): 22\n\
                            words: 5\n\
                            sentences: 3\n\
                            paragraphs: 2\n\
                            lines: 4\n\
                            bytes: 28\n";

#[test]
fn textstats_empty() {
    textstats_test(
        &[],
        "",
        "characters: 0\n\
         characters (no spaces): 0\n\
         words: 0\n\
         sentences: 0\n\
         paragraphs: 0\n\
         lines: 0\n\
         bytes: 0\n",
    );
}

#[test]
fn textstats_whitespace_only() {
    textstats_test(
        &[],
        "  \n\t\n",
        "characters: 0\n\
         characters (no spaces): 0\n\
         words: 0\n\
         sentences: 0\n\
         paragraphs: 0\n\
         lines: 0\n\
         bytes: 0\n",
    );
}

#[test]
fn textstats_stdin() {
    textstats_test(&[], "Hello world. Bye!\n\nNew para\n", SAMPLE_STATS);
}

#[test]
fn textstats_file() {
    textstats_test(&["tests/assets/stats_sample.txt"], "", SAMPLE_STATS);
}

#[test]
fn textstats_multibyte() {
    textstats_test(
        &[],
        "h\u{e9} w\u{f6}rld",
        "characters: 8\n\
         characters (no spaces): 7\n\
         words: 2\n\
         sentences: 1\n\
         paragraphs: 1\n\
         lines: 1\n\
         bytes: 10\n",
    );
}

#[test]
fn textstats_multiple_files() {
    textstats_test(
        &[
            "tests/assets/stats_sample.txt",
            "tests/assets/stats_sample.txt",
        ],
        "",
        &format!(
            "==> tests/assets/stats_sample.txt <==\n{SAMPLE_STATS}\n\
             ==> tests/assets/stats_sample.txt <==\n{SAMPLE_STATS}\n\
             ==> total <==\n\
             characters: 56\n\
             characters (no spaces): 44\n\
             words: 10\n\
             sentences: 6\n\
             paragraphs: 4\n\
             lines: 8\n\
             bytes: 56\n"
        ),
    );
}
