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
use plib::io::read_input_opt;
use plib::PROJECT_NAME;
use textkit::error::Result;
use textkit::regex_engine::{RegexEngine, RegexMatch};

#[derive(Parser)]
#[command(
    version,
    about = gettext("regextest - list the matches of a regular expression in a text")
)]
struct Args {
    #[arg(
        short,
        long,
        default_value = "g",
        help = gettext(
            "Flag letters: g (all matches), i (ignore case), m (multi-line), \
             s (dot matches newline), u (unicode), y (sticky)"
        )
    )]
    flags: String,

    #[arg(help = gettext("The regular expression"))]
    pattern: String,

    #[arg(help = gettext("File to search, standard input when omitted or -"))]
    file: Option<PathBuf>,
}

fn print_matches(out: &mut impl Write, matches: &[RegexMatch]) -> io::Result<()> {
    for m in matches {
        writeln!(out, "{}: {}", m.index, m.matched)?;
        for (n, group) in m.groups.iter().enumerate() {
            match group {
                Some(value) => writeln!(out, "    ${}: {}", n + 1, value)?,
                None => writeln!(out, "    ${}: {}", n + 1, gettext("(unmatched)"))?,
            }
        }
    }
    Ok(())
}

fn run(args: &Args) -> Result<usize> {
    // compile before reading so a bad pattern fails fast
    let engine = RegexEngine::new(&args.pattern, &args.flags)?;
    let text = read_input_opt(&args.file)?;

    let matches = engine.find_matches(&text);

    let mut out = BufWriter::new(io::stdout().lock());
    print_matches(&mut out, &matches)?;
    out.flush()?;

    Ok(matches.len())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;
    env_logger::init();

    let args = Args::parse();

    let exit_code = match run(&args) {
        Ok(0) => 1,
        Ok(_) => 0,
        Err(e) => {
            eprintln!("regextest: {}", e);
            2
        }
    };

    std::process::exit(exit_code)
}
