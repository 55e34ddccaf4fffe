//! The per-unit conversion pipeline.
//!
//! A unit is decoded, its haplotypes normalized and folded into rows, the rows
//! finalized and optionally annotated with genes, then written. Units never
//! share rows.
use std::fmt::{self, Display};
use std::io::{BufRead, Write};
use std::str::FromStr;

use fxhash::FxHashSet;
use log::{debug, info};

use crate::aggregate::aggregate;
use crate::errors::{PcfError, Result};
use crate::materialize::finalize;
use crate::models::{AnnotatedItem, GeneMap, Item, SampleIds};
use crate::normalize::{RawUnit, normalize_unit};
use crate::traits::GeneLookup;
use crate::writer::PcfWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// One unit per line.
    #[default]
    JsonLines,
    /// The whole input is one unit.
    Json,
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" | "ndjson" | "json-lines" => Ok(InputFormat::JsonLines),
            "json" => Ok(InputFormat::Json),
            _ => Err(format!("Invalid input format: {}", s)),
        }
    }
}

impl Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::JsonLines => write!(f, "jsonl"),
            InputFormat::Json => write!(f, "json"),
        }
    }
}

/// Rows of one unit, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedUnit {
    pub rows: Vec<AnnotatedItem>,
    pub sample_ids: SampleIds,
    pub haplotypes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionSummary {
    pub units: usize,
    pub haplotypes: usize,
    pub rows: usize,
}

///
/// Attach the gene of each row's protein.
///
/// Fails on the first row whose protein has no gene.
///
pub fn annotate(items: Vec<Item>, genes: &GeneMap) -> Result<Vec<AnnotatedItem>> {
    items
        .into_iter()
        .map(|item| match genes.get(&item.prot) {
            Some(gene) => Ok(AnnotatedItem {
                gene: Some(gene.clone()),
                item,
            }),
            None => Err(PcfError::MissingGene(item.prot.clone())),
        })
        .collect()
}

/// Distinct protein ids of `items`, in row order.
fn protein_ids(items: &[Item]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    items
        .iter()
        .filter(|item| seen.insert(item.prot.as_str()))
        .map(|item| item.prot.clone())
        .collect()
}

///
/// Convert one decoded unit into finalized rows.
///
/// # Arguments
/// - unit: the decoded unit
/// - lookup: gene lookup service; rows are left unannotated when `None`
///
pub fn convert_unit(unit: RawUnit, lookup: Option<&dyn GeneLookup>) -> Result<ConvertedUnit> {
    let (haplotypes, sample_ids) = normalize_unit(unit);
    let rows = aggregate(&haplotypes);
    let items = finalize(rows, &sample_ids);

    let rows = match lookup {
        Some(lookup) if !items.is_empty() => {
            let ids = protein_ids(&items);
            debug!("Looking up genes for {} protein ids", ids.len());
            let genes = lookup.lookup_genes(&ids)?;
            annotate(items, &genes)?
        }
        _ => items.into_iter().map(AnnotatedItem::from).collect(),
    };

    Ok(ConvertedUnit {
        rows,
        sample_ids,
        haplotypes: haplotypes.len(),
    })
}

///
/// Convert every unit read from `reader` and write the rows.
///
/// # Arguments
/// - reader: JSON or JSON-lines input
/// - format: how units are laid out in `reader`
/// - lookup: gene lookup service, `None` to skip annotation
/// - writer: destination of the rows; its header is fixed by the first unit
/// - on_unit: called with the running totals after each unit is written
///
pub fn convert_reader<R, W, F>(
    mut reader: R,
    format: InputFormat,
    lookup: Option<&dyn GeneLookup>,
    writer: &mut PcfWriter<W>,
    mut on_unit: F,
) -> Result<ConversionSummary>
where
    R: BufRead,
    W: Write,
    F: FnMut(&ConversionSummary),
{
    let mut summary = ConversionSummary::default();

    let mut process = |unit: RawUnit, summary: &mut ConversionSummary| -> Result<()> {
        let converted = convert_unit(unit, lookup)?;
        summary.rows += writer.write_unit(&converted.rows, &converted.sample_ids)?;
        summary.haplotypes += converted.haplotypes;
        summary.units += 1;
        on_unit(summary);
        Ok(())
    };

    match format {
        InputFormat::Json => {
            let unit: RawUnit = serde_json::from_reader(reader)?;
            process(unit, &mut summary)?;
        }
        InputFormat::JsonLines => {
            let mut line = String::new();
            let mut line_number = 0;
            loop {
                line.clear();
                if reader.read_line(&mut line)? == 0 {
                    break;
                }
                line_number += 1;

                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let unit: RawUnit =
                    serde_json::from_str(trimmed).map_err(|source| PcfError::RecordDecode {
                        line: line_number,
                        source,
                    })?;
                process(unit, &mut summary)?;
            }
        }
    }

    info!(
        "Converted {} units ({} haplotypes) into {} rows",
        summary.units, summary.haplotypes, summary.rows
    );
    Ok(summary)
}
