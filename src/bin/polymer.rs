//! The `polymer` executable.
#![deny(missing_docs)]

extern crate clap;
extern crate polymer;

use polymer::{error, trim};
use std::io::{self, Write};
use std::process;

fn main() {
    if let Err(e) = try_main() {
        let stderr = io::stderr();
        let mut stderr = stderr.lock();
        let _ = writeln!(&mut stderr, "Error: {}", e);
        process::exit(1);
    }
}

fn parse_args() -> clap::ArgMatches<'static> {
    clap::App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            clap::Arg::with_name("input")
                .required(true)
                .help("The file containing the polymer to reduce."),
        )
        .arg(
            clap::Arg::with_name("trim")
                .short("t")
                .long("trim")
                .takes_value(true)
                .value_name("POLICY")
                .possible_values(trim::Trim::NAMES)
                .default_value("whitespace")
                .help(
                    "What to strip from the input before reducing it. `none` reduces every \
                     character, including a trailing newline.",
                ),
        )
        .arg(
            clap::Arg::with_name("improve")
                .short("i")
                .long("improve")
                .help(
                    "Also print the length of the shortest polymer obtainable by removing \
                     every unit of a single type.",
                ),
        )
        .arg(
            clap::Arg::with_name("json")
                .short("j")
                .long("json")
                .help("Print the full report as JSON."),
        )
        .arg(
            clap::Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log progress to stderr."),
        )
        .get_matches()
}

fn try_main() -> error::Result<()> {
    let args = parse_args();

    let input = args.value_of("input").unwrap();
    let trim = args.value_of("trim").unwrap().parse::<trim::Trim>()?;

    let report = polymer::Options::new(input)
        .trim(trim)
        .improve(args.is_present("improve"))
        .verbose(args.is_present("verbose"))
        .run()?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    if args.is_present("json") {
        report.write_json(&mut stdout)
    } else {
        report.write_plain(&mut stdout)
    }
}
