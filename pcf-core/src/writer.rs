//! Tab separated output of finalized rows.
//!
//! The header is fixed by the first unit written: sample columns that only
//! show up in later units are not added.
use std::io::Write;

use crate::consts::{ALT_SEPARATOR, FIELD_SEPARATOR, PLOIDY, REFERENCE_GENOTYPE, SAMPLE_SEPARATOR};
use crate::errors::Result;
use crate::models::{AnnotatedItem, SampleIds};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    Gene,
    GeneId,
    Prot,
    Pos,
    HaplotypeId,
    Ref,
    Alt,
    Info,
    Sample(String),
}

impl Column {
    pub fn name(&self) -> &str {
        match self {
            Column::Gene => "GENE",
            Column::GeneId | Column::HaplotypeId => "ID",
            Column::Prot => "PROT",
            Column::Pos => "POS",
            Column::Ref => "REF",
            Column::Alt => "ALT",
            Column::Info => "INFO",
            Column::Sample(id) => id.as_str(),
        }
    }

    fn cell(&self, row: &AnnotatedItem) -> String {
        let item = &row.item;
        match self {
            Column::Gene => row.gene.as_ref().map(|g| g.name.clone()).unwrap_or_default(),
            Column::GeneId => row.gene.as_ref().map(|g| g.id.clone()).unwrap_or_default(),
            Column::Prot => item.prot.clone(),
            Column::Pos => item.pos.to_string(),
            Column::HaplotypeId => item.id.clone(),
            Column::Ref => item.ref_allele.clone(),
            Column::Alt => item.alt.join(ALT_SEPARATOR),
            Column::Info => item.info.clone(),
            Column::Sample(id) => match item.samples.get(id) {
                Some(genotype) => join_genotype(genotype),
                None => join_genotype(&[REFERENCE_GENOTYPE; PLOIDY]),
            },
        }
    }
}

fn join_genotype(genotype: &[u32]) -> String {
    genotype
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(SAMPLE_SEPARATOR)
}

///
/// Ordered output columns.
///
/// With gene annotation the columns are `GENE ID PROT POS REF ALT INFO`, where
/// `ID` is the gene id. Without it they are `PROT POS ID REF ALT INFO`, where
/// `ID` is the haplotype id. One column per sample follows either way.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    columns: Vec<Column>,
}

impl Header {
    pub fn new(with_genes: bool, sample_ids: &SampleIds) -> Self {
        let mut columns = if with_genes {
            vec![
                Column::Gene,
                Column::GeneId,
                Column::Prot,
                Column::Pos,
                Column::Ref,
                Column::Alt,
                Column::Info,
            ]
        } else {
            vec![
                Column::Prot,
                Column::Pos,
                Column::HaplotypeId,
                Column::Ref,
                Column::Alt,
                Column::Info,
            ]
        };
        columns.extend(sample_ids.iter().cloned().map(Column::Sample));
        Header { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn as_string(&self) -> String {
        self.columns
            .iter()
            .map(Column::name)
            .collect::<Vec<_>>()
            .join(FIELD_SEPARATOR)
    }

    pub fn format_row(&self, row: &AnnotatedItem) -> String {
        self.columns
            .iter()
            .map(|column| column.cell(row))
            .collect::<Vec<_>>()
            .join(FIELD_SEPARATOR)
    }
}

///
/// Writes units of rows under a single header.
///
pub struct PcfWriter<W: Write> {
    inner: W,
    with_genes: bool,
    header: Option<Header>,
}

impl<W: Write> PcfWriter<W> {
    pub fn new(inner: W, with_genes: bool) -> Self {
        PcfWriter {
            inner,
            with_genes,
            header: None,
        }
    }

    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    ///
    /// Write the rows of one unit.
    ///
    /// The first call writes the header, taking its sample columns from
    /// `sample_ids`; later calls ignore `sample_ids`.
    ///
    /// # Returns
    /// - the number of rows written
    ///
    pub fn write_unit(&mut self, rows: &[AnnotatedItem], sample_ids: &SampleIds) -> Result<usize> {
        if self.header.is_none() {
            let header = Header::new(self.with_genes, sample_ids);
            writeln!(self.inner, "{}", header.as_string())?;
            self.header = Some(header);
        }

        if let Some(header) = &self.header {
            for row in rows {
                writeln!(self.inner, "{}", header.format_row(row))?;
            }
        }
        Ok(rows.len())
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
