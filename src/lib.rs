//! This library parses the [OMIM](https://omim.org/) `genemap2.txt` file.
//!
//! `genemap2.txt` lists all genes with their chromosomal location and the
//! phenotypes that are associated with them. It can be downloaded from
//! <https://omim.org/downloads> (registration required).
//!
//! The file is read completely into memory and all lines are then parsed
//! in parallel. Every gene row that lists phenotypes becomes one
//! [`GeneRecord`]. The phenotypes are parsed into [`PhenotypeAnnotation`]s.
//!
//! # Examples
//!
//! ```
//! use genemap2::Genemap2;
//!
//! let genemap = Genemap2::from_file("tests/genemap2.txt").unwrap();
//!
//! for gene in &genemap {
//!     for phenotype in gene.phenotypes() {
//!         println!("{}\t{}", gene.approved_gene_symbol(), phenotype.name());
//!     }
//! }
//! ```
use std::fs;
use std::io::ErrorKind;
use std::num::ParseIntError;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

mod dispatch;
pub mod parser;
pub mod paths;
mod phenotype;
mod record;
pub mod sink;

pub use dispatch::{parse_lines, Dispatcher};
pub use phenotype::{Inheritance, MappingKey, MimNumber, PhenotypeAnnotation};
pub use record::GeneRecord;
pub use sink::{JsonSink, RecordSink};

/// Main Error type for this crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Genemap2Error {
    /// The input file does not exist or cannot be read
    #[error("cannot open file {0}")]
    CannotOpenFile(String),
    /// A line has more than 14 tab-separated columns
    #[error("unexpected number of columns ({columns}) in line: {line}")]
    TooManyColumns { columns: usize, line: String },
    /// Some input data is invalid
    #[error("invalid input data: {0}")]
    InvalidInput(String),
    /// Failed to parse an integer
    #[error("unable to parse Integer")]
    ParseIntError,
    /// The worker pool for parallel parsing could not be created
    #[error("unable to create thread pool: {0}")]
    ThreadPool(String),
    /// The parsed records cannot be written
    #[error("cannot write output {0}")]
    CannotWriteOutput(String),
}

impl From<ParseIntError> for Genemap2Error {
    fn from(_: ParseIntError) -> Self {
        Genemap2Error::ParseIntError
    }
}

/// Shortcut for `Result<T, Genemap2Error>`
pub type Genemap2Result<T> = Result<T, Genemap2Error>;

/// All [`GeneRecord`]s of a genemap2 file, in file order
#[derive(Debug, Clone, Default)]
pub struct Genemap2 {
    records: Vec<GeneRecord>,
}

impl Genemap2 {
    /// Reads and parses a `genemap2.txt` file
    ///
    /// # Errors
    ///
    /// - [`Genemap2Error::CannotOpenFile`]: The file does not exist or cannot be read
    /// - [`Genemap2Error::InvalidInput`]: The file is not valid UTF-8
    /// - [`Genemap2Error::TooManyColumns`]: A line has more than 14 columns
    pub fn from_file<P: AsRef<Path>>(path: P) -> Genemap2Result<Self> {
        Self::from_file_with(path, Dispatcher::default())
    }

    /// Reads and parses a `genemap2.txt` file with a custom [`Dispatcher`]
    ///
    /// # Errors
    ///
    /// See [`Genemap2::from_file`]
    pub fn from_file_with<P: AsRef<Path>>(path: P, dispatcher: Dispatcher) -> Genemap2Result<Self> {
        let filename = path.as_ref().display().to_string();
        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::InvalidData => {
                Genemap2Error::InvalidInput(format!("{filename} is not valid UTF-8"))
            }
            _ => Genemap2Error::CannotOpenFile(filename.clone()),
        })?;
        debug!("Read {} bytes from {}", content.len(), filename);
        Self::parse_str_with(&content, dispatcher)
    }

    /// Parses the content of a `genemap2.txt` file
    ///
    /// # Errors
    ///
    /// [`Genemap2Error::TooManyColumns`]: A line has more than 14 columns
    ///
    /// # Examples
    ///
    /// ```
    /// use genemap2::Genemap2;
    ///
    /// let content = "# genemap2\nchr1\t1\t2\t1p36\t1p36\t100100\tFOO\tFoo gene\tFOO\t1\tENSG1\t\tFoo syndrome, 200200 (3)\tFoo\n";
    /// let genemap = Genemap2::parse_str(content).unwrap();
    /// assert_eq!(genemap.len(), 1);
    /// assert_eq!(genemap.gene("100100").unwrap().gene_name(), "Foo gene");
    /// ```
    pub fn parse_str(content: &str) -> Genemap2Result<Self> {
        Self::parse_str_with(content, Dispatcher::default())
    }

    /// Parses the content of a `genemap2.txt` file with a custom [`Dispatcher`]
    ///
    /// # Errors
    ///
    /// See [`Genemap2::parse_str`]
    pub fn parse_str_with(content: &str, dispatcher: Dispatcher) -> Genemap2Result<Self> {
        let lines: Vec<&str> = content.lines().collect();
        let records = dispatcher.run(&lines)?;
        Ok(Self { records })
    }

    /// Returns the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator of all records
    pub fn iter(&self) -> std::slice::Iter<'_, GeneRecord> {
        self.records.iter()
    }

    /// Returns all records
    pub fn records(&self) -> &[GeneRecord] {
        &self.records
    }

    /// Consumes `self` and returns all records
    pub fn into_records(self) -> Vec<GeneRecord> {
        self.records
    }

    /// Returns the first record with the gene MIM number `mim_number`
    pub fn gene(&self, mim_number: &str) -> Option<&GeneRecord> {
        self.records
            .iter()
            .find(|record| record.mim_number() == mim_number)
    }
}

impl<'a> IntoIterator for &'a Genemap2 {
    type Item = &'a GeneRecord;
    type IntoIter = std::slice::Iter<'a, GeneRecord>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Genemap2 {
    type Item = GeneRecord;
    type IntoIter = std::vec::IntoIter<GeneRecord>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
