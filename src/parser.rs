//! Parsing the OMIM `genemap2.txt` file
//!
//! Each data line is handled independently:
//! 1. `row` validates the line and splits it into its columns
//! 2. `phenotype` parses the `Phenotypes` column
//! 3. both are combined into a [`GeneRecord`]
use tracing::trace;

use crate::{GeneRecord, Genemap2Result};

pub(crate) mod phenotype;
pub(crate) mod row;

pub use phenotype::parse_phenotypes;

/// Parses a single line of `genemap2.txt`
///
/// ```text
/// chr1  2228318  2310118  1p36.33  1p36.33  164780  SKI  SKI proto-oncogene  SKI  6497  ENSG00000157933    Shprintzen-Goldberg syndrome, 182212 (3), Autosomal dominant  Ski (MGI:98310)
/// ```
///
/// Returns `Ok(None)` if the line does not describe a gene with phenotypes
/// (comments, blank lines, rows with less than 14 columns or with an
/// empty `Phenotypes` column).
///
/// # Errors
///
/// [`Genemap2Error::TooManyColumns`](`crate::Genemap2Error::TooManyColumns`)
/// if the line has more than 14 columns
///
/// # Examples
///
/// ```
/// use genemap2::parser::parse_line;
///
/// let line = "chr1\t1\t2\t1p36\t1p36.33\t164780\tSKI\tSKI proto-oncogene\tSKI\t6497\tENSG00000157933\t\tShprintzen-Goldberg syndrome, 182212 (3), Autosomal dominant\tSki (MGI:98310)";
/// let record = parse_line(line).unwrap().unwrap();
/// assert_eq!(record.approved_gene_symbol(), "SKI");
/// assert_eq!(record.phenotypes()[0].name(), "Shprintzen-Goldberg syndrome");
///
/// assert!(parse_line("# Copyright (c) 1966-2024 Johns Hopkins University").unwrap().is_none());
/// ```
pub fn parse_line(line: &str) -> Genemap2Result<Option<GeneRecord>> {
    let Some(fields) = row::split_row(line)? else {
        trace!("Skipping line: {}", line);
        return Ok(None);
    };
    let phenotypes = parse_phenotypes(fields.phenotypes);
    Ok(Some(GeneRecord::new(&fields, phenotypes)))
}

#[cfg(test)]
mod test_line_parsing {
    use super::*;
    use crate::Genemap2Error;

    const SKI: &str = "chr1\t2228318\t2310118\t1p36.33\t1p36.33\t164780\tSKI, SGS\tSKI proto-oncogene\tSKI\t6497\tENSG00000157933\t\tShprintzen-Goldberg syndrome, 182212 (3), Autosomal dominant\tSki (MGI:98310)";

    #[test]
    fn complete_record() {
        let record = parse_line(SKI)
            .expect("the line has the correct format")
            .expect("the line describes a gene");
        assert_eq!(record.chromosome(), "chr1");
        assert_eq!(record.genomic_position_start(), "2228318");
        assert_eq!(record.genomic_position_end(), "2310118");
        assert_eq!(record.cyto_location(), "1p36.33");
        assert_eq!(record.computed_cyto_location(), "1p36.33");
        assert_eq!(record.mim_number(), "164780");
        assert_eq!(record.gene_symbols(), "SKI, SGS");
        assert_eq!(record.gene_name(), "SKI proto-oncogene");
        assert_eq!(record.approved_gene_symbol(), "SKI");
        assert_eq!(record.entrez_gene_id(), "6497");
        assert_eq!(record.ensembl_gene_id(), "ENSG00000157933");
        assert_eq!(record.comments(), "");
        assert_eq!(record.mouse(), "Ski (MGI:98310)");

        assert_eq!(record.phenotypes().len(), 1);
        let pheno = &record.phenotypes()[0];
        assert_eq!(pheno.name(), "Shprintzen-Goldberg syndrome");
        assert_eq!(pheno.mim_number().unwrap(), "182212");
        assert_eq!(pheno.inheritance(), ["Autosomal dominant"]);
    }

    #[test]
    fn unparseable_phenotypes_still_create_record() {
        let line = SKI.replace(
            "Shprintzen-Goldberg syndrome, 182212 (3), Autosomal dominant",
            "malformed entry without parens",
        );
        let record = parse_line(&line)
            .expect("the line has the correct format")
            .expect("the line has phenotype text");
        assert!(record.phenotypes().is_empty());
    }

    #[test]
    fn empty_phenotypes_are_skipped() {
        let line = SKI.replace(
            "Shprintzen-Goldberg syndrome, 182212 (3), Autosomal dominant",
            " ",
        );
        assert!(parse_line(&line).unwrap().is_none());
    }

    #[test]
    fn too_many_columns() {
        let line = format!("{SKI}\tfoo");
        assert!(matches!(
            parse_line(&line),
            Err(Genemap2Error::TooManyColumns { columns: 15, .. })
        ));
    }
}
