use serde::Serialize;

use crate::parser::row::RowFields;
use crate::PhenotypeAnnotation;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// A single gene row of the genemap2 file
///
/// All columns are kept verbatim as text, only the `Phenotypes` column
/// is parsed into a list of [`PhenotypeAnnotation`]s.
///
/// A `GeneRecord` is only created for rows that list at least some
/// phenotype text. The list of parsed phenotypes can still be empty if
/// none of the entries follow the phenotype format.
///
/// ```mermaid
/// erDiagram
///     GENERECORD ||--o{ PHENOTYPE : phenotypes
///     GENERECORD {
///         str chromosome
///         str mim_number
///         str gene_symbols
///         str approved_gene_symbol
///     }
///     PHENOTYPE {
///         str name
///         MimNumber mim_number
///         MappingKey mapping_key
///         str[] inheritance
///     }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneRecord {
    chromosome: String,
    genomic_position_start: String,
    genomic_position_end: String,
    cyto_location: String,
    computed_cyto_location: String,
    mim_number: String,
    gene_symbols: String,
    gene_name: String,
    approved_gene_symbol: String,
    entrez_gene_id: String,
    ensembl_gene_id: String,
    comments: String,
    mouse: String,
    phenotypes: Vec<PhenotypeAnnotation>,
}

impl GeneRecord {
    /// Combines the columns of a row with its parsed phenotypes
    pub(crate) fn new(fields: &RowFields<'_>, phenotypes: Vec<PhenotypeAnnotation>) -> Self {
        Self {
            chromosome: fields.chromosome.to_string(),
            genomic_position_start: fields.genomic_position_start.to_string(),
            genomic_position_end: fields.genomic_position_end.to_string(),
            cyto_location: fields.cyto_location.to_string(),
            computed_cyto_location: fields.computed_cyto_location.to_string(),
            mim_number: fields.mim_number.to_string(),
            gene_symbols: fields.gene_symbols.to_string(),
            gene_name: fields.gene_name.to_string(),
            approved_gene_symbol: fields.approved_gene_symbol.to_string(),
            entrez_gene_id: fields.entrez_gene_id.to_string(),
            ensembl_gene_id: fields.ensembl_gene_id.to_string(),
            comments: fields.comments.to_string(),
            mouse: fields.mouse.to_string(),
            phenotypes,
        }
    }

    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    pub fn genomic_position_start(&self) -> &str {
        &self.genomic_position_start
    }

    pub fn genomic_position_end(&self) -> &str {
        &self.genomic_position_end
    }

    pub fn cyto_location(&self) -> &str {
        &self.cyto_location
    }

    pub fn computed_cyto_location(&self) -> &str {
        &self.computed_cyto_location
    }

    /// The MIM number of the gene (not of the phenotypes)
    pub fn mim_number(&self) -> &str {
        &self.mim_number
    }

    /// All gene symbols as a single, comma-delimited string
    pub fn gene_symbols(&self) -> &str {
        &self.gene_symbols
    }

    pub fn gene_name(&self) -> &str {
        &self.gene_name
    }

    /// The HGNC approved gene symbol
    pub fn approved_gene_symbol(&self) -> &str {
        &self.approved_gene_symbol
    }

    pub fn entrez_gene_id(&self) -> &str {
        &self.entrez_gene_id
    }

    pub fn ensembl_gene_id(&self) -> &str {
        &self.ensembl_gene_id
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }

    /// The mouse gene symbol and MGI ID
    pub fn mouse(&self) -> &str {
        &self.mouse
    }

    /// The parsed phenotypes, in the order they appear in the file
    pub fn phenotypes(&self) -> &[PhenotypeAnnotation] {
        &self.phenotypes
    }
}
