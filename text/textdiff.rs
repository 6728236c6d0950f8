//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the textkit project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use plib::io::{read_input, without_final_newline};
use plib::PROJECT_NAME;
use textkit::diff::{diff_with_style, DiffStats, HighlightStyle, TextDiff};

/// Exit status when the texts are identical.
const EXIT_SAME: i32 = 0;
/// Exit status when the texts differ.
const EXIT_DIFFERENT: i32 = 1;
/// Exit status when something went wrong.
const EXIT_TROUBLE: i32 = 2;

#[derive(Parser)]
#[command(version, about = gettext("textdiff - compare two texts line by line"))]
struct Args {
    #[arg(
        long,
        value_enum,
        default_value_t = HighlightStyle::Brackets,
        help = gettext("How changed words inside modified lines are marked")
    )]
    highlight: HighlightStyle,

    #[arg(short, long, help = gettext("Print change counts after the diff"))]
    stats: bool,

    #[arg(help = gettext("First text, or - for standard input"))]
    file1: PathBuf,

    #[arg(help = gettext("Second text, or - for standard input"))]
    file2: PathBuf,
}

fn print_diff(out: &mut impl Write, diff: &TextDiff) -> io::Result<()> {
    for line in &diff.lines {
        let text = line
            .highlighted_content
            .as_deref()
            .unwrap_or(&line.content);
        writeln!(out, "{:>4} {} {}", line.line_number, line.kind.marker(), text)?;
    }
    Ok(())
}

fn print_stats(out: &mut impl Write, stats: &DiffStats) -> io::Result<()> {
    writeln!(
        out,
        "{} added, {} removed, {} modified lines",
        stats.lines_added, stats.lines_removed, stats.lines_modified
    )?;
    writeln!(
        out,
        "{} added, {} removed, {} modified characters",
        stats.characters_added, stats.characters_removed, stats.characters_modified
    )
}

fn run(args: &Args) -> io::Result<bool> {
    let dash = PathBuf::from("-");
    if args.file1 == dash && args.file2 == dash {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            gettext("standard input can only be compared once"),
        ));
    }

    let read = |path: &PathBuf| {
        read_input(path, true)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))
    };
    let text1 = read(&args.file1)?;
    let text2 = read(&args.file2)?;

    let diff = diff_with_style(
        without_final_newline(&text1),
        without_final_newline(&text2),
        args.highlight,
    );

    let mut out = BufWriter::new(io::stdout().lock());
    print_diff(&mut out, &diff)?;
    if args.stats {
        print_stats(&mut out, &diff.stats)?;
    }
    out.flush()?;

    Ok(diff.has_changes())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;
    env_logger::init();

    let args = Args::parse();

    let exit_code = match run(&args) {
        Ok(false) => EXIT_SAME,
        Ok(true) => EXIT_DIFFERENT,
        Err(e) => {
            eprintln!("textdiff: {}", e);
            EXIT_TROUBLE
        }
    };

    std::process::exit(exit_code)
}
