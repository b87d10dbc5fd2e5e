use super::assembly::StackedGeometry;
use super::error::EngineError;
use crate::core::io::traits::GeometryFile;
use crate::core::io::xyz::{XyzError, XyzFile, XyzMetadata};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const PROVENANCE_TAG: &str = "molstack";

/// Comment line written into every artifact.
pub fn artifact_comment(order_label: &str) -> String {
    format!("Stack: {} | Generated by {}", order_label, PROVENANCE_TAG)
}

/// Writes complete stacked geometries below an output root.
///
/// Parent directories are created on demand; the last created directory is
/// remembered so a run over one order group creates it only once.
#[derive(Debug)]
pub struct ArtifactWriter {
    root: PathBuf,
    last_dir: Option<PathBuf>,
    written: u64,
}

impl ArtifactWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            last_dir: None,
            written: 0,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    /// Creates the output root itself.
    pub fn prepare_root(&self) -> Result<(), EngineError> {
        fs::create_dir_all(&self.root).map_err(|source| EngineError::ArtifactWrite {
            path: self.root.clone(),
            source,
        })
    }

    /// Writes `geometry` to `relative_path` under the root.
    pub fn write(
        &mut self,
        relative_path: &Path,
        geometry: &StackedGeometry,
        order_label: &str,
    ) -> Result<PathBuf, EngineError> {
        let path = self.root.join(relative_path);

        if let Some(parent) = path.parent() {
            if self.last_dir.as_deref() != Some(parent) {
                fs::create_dir_all(parent).map_err(|source| EngineError::ArtifactWrite {
                    path: parent.to_path_buf(),
                    source,
                })?;
                debug!("Created output directory {:?}", parent);
                self.last_dir = Some(parent.to_path_buf());
            }
        }

        let metadata = XyzMetadata::with_comment(artifact_comment(order_label));
        XyzFile::write_to_path(&geometry.atoms, &metadata, &path).map_err(|e| {
            let source = match e {
                XyzError::Io(io) => io,
                other => std::io::Error::other(other.to_string()),
            };
            EngineError::ArtifactWrite {
                path: path.clone(),
                source,
            }
        })?;

        self.written += 1;
        Ok(path)
    }
}
