#[macro_use]
extern crate clap;

use std::process::exit;

use ansi_term::Colour::Red;
use clap::{App, Arg};

use polyrecover::{poly::lagrange::DivisionPolicy, Config, Method, Recoverer};
use polyrecover_tools::Runner;

fn main() {
    let matches = App::new("polyrecover-cli")
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::with_name("documents")
                .value_name("DOCUMENT")
                .help("JSON documents describing the problem instances")
                .takes_value(true)
                .multiple(true)
                .min_values(2)
                .required(true),
        )
        .arg(
            Arg::with_name("method")
                .long("method")
                .help("Method used to recover the constant term")
                .takes_value(true)
                .possible_values(Method::NAMES)
                .default_value("elimination"),
        )
        .arg(
            Arg::with_name("division")
                .long("division")
                .help("Division policy of the Lagrange method")
                .takes_value(true)
                .possible_values(DivisionPolicy::NAMES)
                .default_value("common-denominator"),
        )
        .arg(
            Arg::with_name("no-verify")
                .long("no-verify")
                .help("Skip checking the points beyond the first k"),
        )
        .get_matches();

    // Decode arguments.
    let method = value_t!(matches, "method", Method).unwrap_or_else(|e| e.exit());
    let division = value_t!(matches, "division", DivisionPolicy).unwrap_or_else(|e| e.exit());
    let config = Config {
        method,
        division,
        verify_remaining: !matches.is_present("no-verify"),
    };
    let paths: Vec<&str> = matches.values_of("documents").into_iter().flatten().collect();

    let runner = Runner::new(Recoverer::new(config));
    let mut failed = false;
    for result in runner.process_all(&paths) {
        match result {
            Ok(constant) => println!("{}", constant),
            Err(error) => {
                eprintln!("{} {:#}", Red.bold().paint("error:"), error);
                failed = true;
            }
        }
    }

    if failed {
        exit(1);
    }
}
