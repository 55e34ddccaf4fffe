use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use pcf_core::utils::{Output, get_dynamic_reader};
use pcf_core::{GeneLookup, InputFormat, PcfWriter, convert_reader};
use pcf_ensembl::EnsemblClient;

use super::cli::DEFAULT_INPUT_FORMAT;

fn create_client(matches: &ArgMatches) -> EnsemblClient {
    let mut builder = EnsemblClient::builder();
    if let Some(api) = matches.get_one::<String>("api") {
        builder = builder.with_api(api.clone());
    }
    if let Some(timeout) = matches.get_one::<u64>("timeout") {
        builder = builder.with_timeout(Duration::from_secs(*timeout));
    }
    builder.finish()
}

fn create_spinner(quiet: bool) -> Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {elapsed} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(120));
    Ok(spinner)
}

pub fn run_convert(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .expect("A path to the input file is required.");

    let output = matches
        .get_one::<String>("output")
        .expect("A path to the output file is required.");

    let default_format = DEFAULT_INPUT_FORMAT.to_string();
    let format = matches
        .get_one::<String>("input-format")
        .unwrap_or(&default_format);
    let format = match InputFormat::from_str(format) {
        Ok(format) => format,
        Err(_err) => anyhow::bail!("Unknown input format supplied: {}", format),
    };

    let client = match matches.get_flag("no-genes") {
        true => None,
        false => Some(create_client(matches)),
    };
    let lookup = client.as_ref().map(|c| c as &dyn GeneLookup);

    info!("Converting {} ({}) to {}", path, format, output);

    let reader = get_dynamic_reader(Path::new(path))
        .with_context(|| format!("Failed to open input: {}", path))?;
    let sink = Output::create(Path::new(output))
        .with_context(|| format!("Failed to create output: {}", output))?;
    let mut writer = PcfWriter::new(sink, lookup.is_some());

    let spinner = create_spinner(matches.get_flag("quiet"))?;
    let summary = convert_reader(reader, format, lookup, &mut writer, |summary| {
        spinner.set_message(format!(
            "{} units, {} rows written",
            summary.units, summary.rows
        ));
    })
    .with_context(|| format!("Error converting {} to a VCF-style table", path))?;
    spinner.finish_and_clear();

    writer
        .into_inner()?
        .finish()
        .with_context(|| format!("Failed to finish writing {}", output))?;

    info!(
        "Wrote {} rows from {} haplotypes in {} units",
        summary.rows, summary.haplotypes, summary.units
    );

    Ok(())
}
