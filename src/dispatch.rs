//! Parallel parsing of all lines of a genemap2 file
use rayon::prelude::*;
use tracing::debug;

use crate::parser::parse_line;
use crate::{GeneRecord, Genemap2Error, Genemap2Result};

/// Parses lines of a genemap2 file on a dedicated thread pool
///
/// The pool is created for every call to [`Dispatcher::run`] and
/// dropped once all lines are parsed.
///
/// # Examples
///
/// ```
/// use genemap2::Dispatcher;
///
/// let lines = [
///     "# Chromosome\tGenomic Position Start",
///     "chr1\t1\t2\t1p36\t1p36\t100100\tFOO\tFoo gene\tFOO\t1\tENSG1\t\tFoo syndrome, 200200 (3)\tFoo",
///     "",
///     "chr2\t1\t2\t2p11\t2p11\t300300\tBAR\tBar gene\tBAR\t2\tENSG2\t\tBar syndrome(2)\tBar",
/// ];
///
/// let records = Dispatcher::new().threads(2).run(&lines).unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].approved_gene_symbol(), "FOO");
/// assert_eq!(records[1].approved_gene_symbol(), "BAR");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    threads: usize,
}

impl Dispatcher {
    /// Creates a `Dispatcher` that uses one thread per logical CPU
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of worker threads
    ///
    /// `0` uses one thread per logical CPU.
    #[must_use]
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Parses all `lines` and returns the records in input order
    ///
    /// Lines that don't describe a gene with phenotypes are skipped.
    ///
    /// # Errors
    ///
    /// - [`Genemap2Error::TooManyColumns`]: Any line has more than 14 columns.
    ///   No records are returned in this case.
    /// - [`Genemap2Error::ThreadPool`]: The worker pool could not be created
    pub fn run<S: AsRef<str> + Sync>(&self, lines: &[S]) -> Genemap2Result<Vec<GeneRecord>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|err| Genemap2Error::ThreadPool(err.to_string()))?;

        let mut parsed: Vec<(usize, Option<GeneRecord>)> = pool.install(|| {
            lines
                .par_iter()
                .enumerate()
                .map(|(idx, line)| parse_line(line.as_ref()).map(|record| (idx, record)))
                .collect::<Genemap2Result<Vec<_>>>()
        })?;

        // restore input order independent of how rayon collected the results
        parsed.sort_unstable_by_key(|(idx, _)| *idx);

        let records: Vec<GeneRecord> = parsed
            .into_iter()
            .filter_map(|(_, record)| record)
            .collect();

        debug!(
            "Parsed {} records from {} lines using {} threads",
            records.len(),
            lines.len(),
            pool.current_num_threads()
        );
        Ok(records)
    }
}

/// Parses all `lines` using the default [`Dispatcher`]
///
/// # Errors
///
/// See [`Dispatcher::run`]
pub fn parse_lines<S: AsRef<str> + Sync>(lines: &[S]) -> Genemap2Result<Vec<GeneRecord>> {
    Dispatcher::default().run(lines)
}

#[cfg(test)]
mod test_dispatch {
    use super::*;

    fn gene_line(symbol: &str, phenotypes: &str) -> String {
        format!("chr1\t1\t2\t1p36\t1p36\t100100\t{symbol}\t{symbol} gene\t{symbol}\t1\tENSG1\t\t{phenotypes}\tmouse")
    }

    #[test]
    fn keeps_input_order() {
        let mut lines = vec!["# header".to_string(), String::new()];
        for i in 0..500 {
            lines.push(gene_line(&format!("GENE{i}"), "Foo(1)"));
            if i % 7 == 0 {
                lines.push(format!("# comment {i}"));
                lines.push("   ".to_string());
            }
            if i % 11 == 0 {
                lines.push(gene_line("EMPTY", ""));
            }
        }

        let records = Dispatcher::new().threads(4).run(&lines).unwrap();
        assert_eq!(records.len(), 500);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.approved_gene_symbol(), format!("GENE{i}"));
        }
    }

    #[test]
    fn skips_short_lines() {
        let lines = [
            gene_line("A", "Foo(1)"),
            "a\tb\tc\td\te\tf\tg\th\ti\tj\tk\tl\tFoo(1)".to_string(),
            gene_line("B", "Bar(2)"),
        ];
        let records = parse_lines(&lines).unwrap();
        let symbols: Vec<&str> = records.iter().map(|r| r.approved_gene_symbol()).collect();
        assert_eq!(symbols, ["A", "B"]);
    }

    #[test]
    fn overflowing_line_aborts_batch() {
        let mut lines: Vec<String> = (0..100)
            .map(|i| gene_line(&format!("GENE{i}"), "Foo(1)"))
            .collect();
        lines.insert(50, format!("{}\textra", gene_line("BAD", "Foo(1)")));

        match Dispatcher::new().threads(3).run(&lines) {
            Err(Genemap2Error::TooManyColumns { columns, line }) => {
                assert_eq!(columns, 15);
                assert!(line.contains("BAD"));
            }
            other => panic!("expected TooManyColumns, got {other:?}"),
        }
    }

    #[test]
    fn empty_input() {
        let lines: [&str; 0] = [];
        assert!(parse_lines(&lines).unwrap().is_empty());
    }

    #[test]
    fn single_thread() {
        let lines = [gene_line("A", "Foo(1)"), gene_line("B", "Bar(2)")];
        let records = Dispatcher::new().threads(1).run(&lines).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].phenotypes()[0].name(), "Bar");
    }
}
