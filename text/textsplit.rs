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
use plib::io::{read_input_opt, without_final_newline};
use plib::PROJECT_NAME;
use textkit::split::{split, Delimiter, SplitOptions};

#[derive(Parser)]
#[command(
    version,
    about = gettext("textsplit - split text on a delimiter, one item per output line")
)]
struct Args {
    #[arg(
        short,
        long,
        default_value = "newline",
        help = gettext("newline, comma, tab, whitespace, or any literal string")
    )]
    delimiter: Delimiter,

    #[arg(short, long, help = gettext("Strip surrounding whitespace from every item"))]
    trim: bool,

    #[arg(short = 'e', long, help = gettext("Drop empty items"))]
    remove_empty: bool,

    #[arg(help = gettext("Input file, standard input when omitted or -"))]
    file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;
    env_logger::init();

    let args = Args::parse();

    let text = read_input_opt(&args.file)?;
    let options = SplitOptions {
        delimiter: args.delimiter,
        trim: args.trim,
        remove_empty: args.remove_empty,
    };

    let mut out = BufWriter::new(io::stdout().lock());
    for item in split(without_final_newline(&text), &options) {
        writeln!(out, "{}", item)?;
    }
    out.flush()?;

    Ok(())
}
