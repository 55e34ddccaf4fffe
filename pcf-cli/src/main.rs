mod convert;

use std::env;

use anyhow::Result;
use clap::{ArgAction, ArgMatches, Command, arg};
use env_logger::Builder;
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "pcf";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("An all-in-one tool for converting protein haplotypes into VCF-style tables.")
        .subcommand_required(true)
        .arg(
            arg!(-v --verbose "Print debug information. RUST_LOG takes precedence.")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(convert::cli::create_convert_cli())
}

fn log_level(matches: &ArgMatches) -> LevelFilter {
    match matches.get_flag("verbose") {
        true => LevelFilter::Debug,
        false => LevelFilter::Info,
    }
}

fn set_log_level(matches: &ArgMatches) {
    let mut builder = Builder::new();
    builder.filter_level(log_level(matches));
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();
    set_log_level(&matches);

    match matches.subcommand() {
        //
        // CONVERT
        //
        Some((convert::cli::CONVERT_CMD, matches)) => {
            convert::handlers::run_convert(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
