//! Writing parsed records to disk
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{GeneRecord, Genemap2Error, Genemap2Result};

/// Default filename of the serialized records
pub const OUTPUT_FILENAME: &str = "output.json";

/// Receives the complete, ordered list of parsed records
pub trait RecordSink {
    /// Stores all `records`
    ///
    /// # Errors
    ///
    /// [`Genemap2Error::CannotWriteOutput`] if the records cannot be stored
    fn write(&mut self, records: &[GeneRecord]) -> Genemap2Result<()>;
}

/// Serializes all records as a JSON array into `<dir>/output.json`
///
/// The records are first written to a temporary file which is renamed
/// once serialization succeeded, so a failed run never leaves a partial
/// output file behind.
#[derive(Debug, Clone)]
pub struct JsonSink {
    path: PathBuf,
}

impl JsonSink {
    /// Creates a sink that writes to `output.json` inside `dir`
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            path: dir.as_ref().join(OUTPUT_FILENAME),
        }
    }

    /// The full path of the output file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_tmp(&self, tmp: &Path, records: &[GeneRecord]) -> Genemap2Result<()> {
        let file = File::create(tmp).map_err(|err| self.error(err))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, records).map_err(|err| self.error(err))?;
        writer.flush().map_err(|err| self.error(err))?;
        Ok(())
    }

    fn error<E: std::fmt::Display>(&self, err: E) -> Genemap2Error {
        Genemap2Error::CannotWriteOutput(format!("{}: {err}", self.path.display()))
    }
}

impl RecordSink for JsonSink {
    fn write(&mut self, records: &[GeneRecord]) -> Genemap2Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        debug!("Writing {} records to {}", records.len(), tmp.display());

        if let Err(err) = self.write_tmp(&tmp, records) {
            // the temp file is incomplete, removing it is best effort
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        fs::rename(&tmp, &self.path).map_err(|err| self.error(err))?;

        info!("Saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}
