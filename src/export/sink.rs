//! Delivery targets for exported files.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config;
use crate::error::{DashboardError, Result};

/// A finished export: file name, MIME type and contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Where exported files go once serialized.
pub trait ExportSink {
    fn deliver(&mut self, file: ExportFile) -> Result<()>;
}

impl<S: ExportSink + ?Sized> ExportSink for &mut S {
    fn deliver(&mut self, file: ExportFile) -> Result<()> {
        (**self).deliver(file)
    }
}

// ---------------------------------------------------------------------------
// DirectorySink
// ---------------------------------------------------------------------------

/// Writes each delivered file into a directory, replacing any file of the
/// same name.
///
/// Contents go to a temp file in the target directory first and are renamed
/// into place, so an interrupted write never leaves a partial export behind.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink writing into `dir`, creating it if it does not exist.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Sink writing into the user's download directory (or the working
    /// directory when the platform has none).
    pub fn downloads() -> Result<Self> {
        Self::new(config::default_export_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for DirectorySink {
    fn deliver(&mut self, file: ExportFile) -> Result<()> {
        if Path::new(&file.file_name).file_name().and_then(|n| n.to_str()) != Some(file.file_name.as_str()) {
            return Err(DashboardError::InvalidArgument(format!(
                "export file name must not contain a path: {}",
                file.file_name
            )));
        }

        let dest = self.dir.join(&file.file_name);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(&file.bytes)?;
        tmp.flush()?;
        // An unpersisted temp file is removed when dropped.
        tmp.persist(&dest).map_err(|e| DashboardError::Io(e.error))?;

        tracing::info!(path = %dest.display(), bytes = file.bytes.len(), "export written");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemorySink
// ---------------------------------------------------------------------------

/// Keeps delivered files in memory, in delivery order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: Vec<ExportFile>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[ExportFile] {
        &self.files
    }

    pub fn into_files(self) -> Vec<ExportFile> {
        self.files
    }
}

impl ExportSink for MemorySink {
    fn deliver(&mut self, file: ExportFile) -> Result<()> {
        self.files.push(file);
        Ok(())
    }
}
