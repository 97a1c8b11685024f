use anyhow::Context;
use generator_common::Edge;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Side output of every generated edge as `edge_i,edge_j,weight` rows.
pub struct EdgeCsvWriter {
    writer: csv::Writer<File>,
    path: PathBuf,
    written: u64,
}

impl EdgeCsvWriter {
    pub fn new<P: AsRef<Path>>(p: P) -> anyhow::Result<Self> {
        let path = p.as_ref().to_path_buf();
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("creating edge csv {}", path.display()))?;
        writer.write_record(&["edge_i", "edge_j", "weight"])?;
        Ok(Self {
            writer,
            path,
            written: 0,
        })
    }

    pub fn write_edge(&mut self, (i, j): Edge, weight: u32) -> csv::Result<()> {
        self.writer
            .write_record(&[i.to_string(), j.to_string(), weight.to_string()])?;
        self.written += 1;
        Ok(())
    }

    /// Flush the remaining rows and return how many edges were written.
    ///
    /// The file is removed if the flush fails.
    pub fn close(mut self) -> anyhow::Result<u64> {
        if let Err(e) = self.writer.flush() {
            self.discard();
            return Err(e).context("flushing edge csv");
        }
        info!("Wrote {} edges to csv file.", self.written);
        Ok(self.written)
    }

    /// Close the file and remove it. Used when the generated input it mirrors is incomplete.
    pub fn discard(self) {
        let EdgeCsvWriter { writer, path, .. } = self;
        drop(writer);
        if let Err(e) = fs::remove_file(&path) {
            warn!("Unable to remove partial edge csv {}: {}", path.display(), e);
        }
    }
}
