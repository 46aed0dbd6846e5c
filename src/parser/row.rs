//! Validates a single genemap2 line and splits it into its columns
use tracing::{error, trace};

use crate::{Genemap2Error, Genemap2Result};

/// Number of tab-separated columns of a genemap2 data row
pub(crate) const NUM_COLUMNS: usize = 14;

/// The columns of a single genemap2 row, borrowed from the source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RowFields<'a> {
    pub chromosome: &'a str,
    pub genomic_position_start: &'a str,
    pub genomic_position_end: &'a str,
    pub cyto_location: &'a str,
    pub computed_cyto_location: &'a str,
    pub mim_number: &'a str,
    pub gene_symbols: &'a str,
    pub gene_name: &'a str,
    pub approved_gene_symbol: &'a str,
    pub entrez_gene_id: &'a str,
    pub ensembl_gene_id: &'a str,
    pub comments: &'a str,
    pub phenotypes: &'a str,
    pub mouse: &'a str,
}

/// Splits a genemap2 line into its 14 columns
///
/// Returns `Ok(None)` for lines that don't describe a gene with phenotypes:
/// - comments (`#`) and blank lines
/// - lines with fewer than 14 columns
/// - rows with an empty `Phenotypes` column
///
/// Trailing whitespace, including tabs, is removed before splitting.
///
/// # Errors
///
/// [`Genemap2Error::TooManyColumns`] if the line has more than 14 columns
pub(crate) fn split_row(line: &str) -> Genemap2Result<Option<RowFields<'_>>> {
    let line = line.trim_end();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let cols: Vec<&str> = line.split('\t').collect();
    let fields = match cols.as_slice() {
        &[chromosome, genomic_position_start, genomic_position_end, cyto_location, computed_cyto_location, mim_number, gene_symbols, gene_name, approved_gene_symbol, entrez_gene_id, ensembl_gene_id, comments, phenotypes, mouse] => {
            RowFields {
                chromosome,
                genomic_position_start,
                genomic_position_end,
                cyto_location,
                computed_cyto_location,
                mim_number,
                gene_symbols,
                gene_name,
                approved_gene_symbol,
                entrez_gene_id,
                ensembl_gene_id,
                comments,
                phenotypes,
                mouse,
            }
        }
        short if short.len() < NUM_COLUMNS => {
            trace!("Skipping line with {} columns: {}", short.len(), line);
            return Ok(None);
        }
        long => {
            error!("Line has {} columns: {}", long.len(), line);
            return Err(Genemap2Error::TooManyColumns {
                columns: long.len(),
                line: line.to_string(),
            });
        }
    };

    if fields.phenotypes.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(fields))
}
