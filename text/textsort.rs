//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the textkit project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::path::PathBuf;

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use plib::io::{read_input_opt, without_final_newline};
use plib::PROJECT_NAME;
use textkit::sort::{sort_lines, SortKind, SortOptions, SortOrder};

#[derive(Parser)]
#[command(
    version,
    about = gettext("textsort - sort lines alphabetically, numerically or by length")
)]
struct Args {
    #[arg(
        short = 'k',
        long = "key",
        value_enum,
        default_value_t = SortKind::Alphabetical,
        help = gettext("What lines are compared by")
    )]
    kind: SortKind,

    #[arg(short = 'r', long, help = gettext("Reverse the sense of comparisons"))]
    reverse: bool,

    #[arg(
        short = 's',
        long,
        help = gettext("Compare lines as written instead of ignoring case")
    )]
    case_sensitive: bool,

    #[arg(
        short = 'u',
        long,
        help = gettext("Unique: suppress all but one in each set of lines that compare equal")
    )]
    unique: bool,

    #[arg(help = gettext("Input file, standard input when omitted or -"))]
    file: Option<PathBuf>,
}

impl From<&Args> for SortOptions {
    fn from(args: &Args) -> Self {
        SortOptions {
            kind: args.kind,
            order: if args.reverse {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            },
            case_sensitive: args.case_sensitive,
            unique: args.unique,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;
    env_logger::init();

    let args = Args::parse();

    let text = match read_input_opt(&args.file) {
        Ok(text) => text,
        Err(e) => {
            let name = match &args.file {
                Some(path) => path.display().to_string(),
                None => gettext("stdin"),
            };
            eprintln!("textsort: {}: {}", name, e);
            std::process::exit(2);
        }
    };

    if !text.is_empty() {
        let sorted = sort_lines(without_final_newline(&text), &SortOptions::from(&args));
        println!("{}", sorted);
    }

    Ok(())
}
