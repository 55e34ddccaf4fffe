use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const CONVERT_CMD: &str = "convert";
pub const DEFAULT_INPUT_FORMAT: &str = "jsonl";

pub fn create_convert_cli() -> Command {
    Command::new(CONVERT_CMD)
        .author("Databio")
        .about("Convert Haplosaurus protein haplotype JSON into a VCF-style table.")
        .arg(
            arg!(-p --path <path> "Path to the input file. Use '-' to read stdin.")
                .required(true),
        )
        .arg(
            arg!(-o --output <output> "Path to the output table. Paths ending in .gz are gzip compressed.")
                .required(true),
        )
        .arg(
            arg!(--"input-format" <format> "jsonl: one record per line, json: one record per file.")
                .value_parser(["jsonl", "json"])
                .default_value(DEFAULT_INPUT_FORMAT),
        )
        .arg(
            arg!(--"no-genes" "Skip the Ensembl gene lookup and write haplotype ids instead.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("api")
                .long("api")
                .value_name("url")
                .help("Ensembl REST api base url. Defaults to $ENSEMBL_REST_API or https://rest.ensembl.org."),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("seconds")
                .help("Timeout of each Ensembl request, in seconds.")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            arg!(--quiet "Do not show a progress spinner.")
                .action(ArgAction::SetTrue),
        )
}
