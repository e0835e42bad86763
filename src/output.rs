use anyhow::{Context, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Where confirmed ordinals go.
pub trait ResultSink {
    fn write_ordinals(&mut self, ordinals: &[u32]) -> Result<()>;
}

/// Writes one ordinal per line to a file. Without a path the selection is
/// dropped on purpose: the caller did not ask for it.
#[derive(Debug, Clone, Default)]
pub struct FileSink {
    path: Option<PathBuf>,
}

impl FileSink {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl ResultSink for FileSink {
    fn write_ordinals(&mut self, ordinals: &[u32]) -> Result<()> {
        let Some(path) = &self.path else {
            tracing::debug!(
                count = ordinals.len(),
                "no result file configured, selection discarded"
            );
            return Ok(());
        };
        let file = fs::File::create(path)
            .with_context(|| format!("creating result file {}", path.display()))?;
        let mut out = BufWriter::new(file);
        for ordinal in ordinals {
            writeln!(out, "{ordinal}")
                .with_context(|| format!("writing {}", path.display()))?;
        }
        out.flush().with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), count = ordinals.len(), "wrote selection");
        Ok(())
    }
}

/// Collects ordinals in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink {
    pub writes: Vec<Vec<u32>>,
}

#[cfg(test)]
impl ResultSink for MemorySink {
    fn write_ordinals(&mut self, ordinals: &[u32]) -> Result<()> {
        self.writes.push(ordinals.to_vec());
        Ok(())
    }
}
