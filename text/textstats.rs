//
// Copyright (c) 2024 Jeff Garzik
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the textkit project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::path::{Path, PathBuf};

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use plib::io::read_input;
use plib::PROJECT_NAME;
use textkit::stats::{stats, TextStats};

#[derive(Parser)]
#[command(
    version,
    about = gettext("textstats - count characters, words, sentences, paragraphs, lines and bytes")
)]
struct Args {
    #[arg(help = gettext("Files to read as input."))]
    files: Vec<PathBuf>,
}

fn build_display_str(counts: &TextStats) -> String {
    let rows = [
        ("characters", counts.characters),
        ("characters (no spaces)", counts.characters_no_spaces),
        ("words", counts.words),
        ("sentences", counts.sentences),
        ("paragraphs", counts.paragraphs),
        ("lines", counts.lines),
        ("bytes", counts.bytes),
    ];

    let mut output = String::new();
    for (name, value) in rows {
        output.push_str(&format!("{}: {}\n", name, value));
    }
    output
}

fn stats_file(pathname: &Path) -> std::io::Result<TextStats> {
    let text = read_input(pathname, false)?;
    Ok(stats(&text))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;
    env_logger::init();

    let args = Args::parse();

    let mut exit_code = 0;

    // input via stdin
    if args.files.is_empty() {
        match stats_file(&PathBuf::new()) {
            Ok(counts) => print!("{}", build_display_str(&counts)),
            Err(e) => {
                exit_code = 1;
                eprintln!("stdin: {}", e);
            }
        }

    // input files
    } else {
        let multi_file = args.files.len() > 1;
        let mut totals = TextStats::default();

        for (i, filename) in args.files.iter().enumerate() {
            let counts = match stats_file(filename) {
                Ok(counts) => counts,
                Err(e) => {
                    exit_code = 1;
                    eprintln!("{}: {}", filename.display(), e);
                    continue;
                }
            };

            if multi_file {
                if i > 0 {
                    println!();
                }
                println!("==> {} <==", filename.display());
            }
            print!("{}", build_display_str(&counts));

            totals += counts;
        }

        if multi_file {
            println!();
            println!("==> {} <==", gettext("total"));
            print!("{}", build_display_str(&totals));
        }
    }

    std::process::exit(exit_code)
}
