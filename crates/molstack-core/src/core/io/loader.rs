use crate::core::io::traits::GeometryFile;
use crate::core::io::xyz::{XyzError, XyzFile};
use crate::core::models::molecule::Molecule;
use std::path::{Path, PathBuf};
use thiserror::Error;

const GEOMETRY_EXTENSION: &str = ".xyz";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found at {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: XyzError,
    },
    #[error("No atoms found in {name}")]
    NoAtoms { name: String },
}

/// Library name for a geometry file: its base name with the `.xyz` suffix removed.
pub fn molecule_name(path: &Path) -> String {
    let base = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match base.strip_suffix(GEOMETRY_EXTENSION) {
        Some(stem) => stem.to_string(),
        None => base,
    }
}

/// Reads and centers a single molecule from an XYZ file.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] for a missing path, [`LoadError::Read`] when the
/// file is too short or holds a non-numeric coordinate, and [`LoadError::NoAtoms`]
/// when no atom line could be parsed.
pub fn load_molecule(path: &Path) -> Result<Molecule, LoadError> {
    let abs_path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let name = molecule_name(&abs_path);

    if !abs_path.exists() {
        return Err(LoadError::NotFound { path: abs_path });
    }

    let (atoms, _) = XyzFile::read_from_path(&abs_path).map_err(|source| LoadError::Read {
        path: abs_path.clone(),
        source,
    })?;

    Molecule::new(name.clone(), atoms).ok_or(LoadError::NoAtoms { name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn molecule_name_strips_xyz_extension() {
        assert_eq!(molecule_name(Path::new("/data/benzene.xyz")), "benzene");
        assert_eq!(molecule_name(Path::new("pyrene")), "pyrene");
        assert_eq!(molecule_name(Path::new("dir/naph.pdb")), "naph.pdb");
    }

    #[test]
    fn load_molecule_centers_coordinates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("h2.xyz");
        fs::write(&path, "2\n\nH 2.0 2.0 2.0\nH 2.0 2.0 2.74\n").unwrap();

        let molecule = load_molecule(&path).unwrap();
        assert_eq!(molecule.name(), "h2");
        assert_eq!(molecule.atom_count(), 2);
        assert!(molecule.centroid().coords.norm() < 1e-12);
        assert!((molecule.atoms()[0].position.z + 0.37).abs() < 1e-12);
    }

    #[test]
    fn load_molecule_reports_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_molecule(&dir.path().join("nope.xyz"));
        assert!(matches!(result, Err(LoadError::NotFound { .. })));
    }

    #[test]
    fn load_molecule_rejects_too_short_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.xyz");
        fs::write(&path, "1\n").unwrap();
        let result = load_molecule(&path);
        assert!(matches!(
            result,
            Err(LoadError::Read {
                source: XyzError::TooShort { .. },
                ..
            })
        ));
    }

    #[test]
    fn load_molecule_rejects_file_without_atoms() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.xyz");
        fs::write(&path, "0\ncomment\nnot an atom\n").unwrap();
        let result = load_molecule(&path);
        assert!(matches!(result, Err(LoadError::NoAtoms { name }) if name == "empty"));
    }

    #[test]
    fn load_molecule_propagates_coordinate_parse_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.xyz");
        fs::write(&path, "1\n\nC 0.0 0.0 zz\n").unwrap();
        let result = load_molecule(&path);
        assert!(matches!(
            result,
            Err(LoadError::Read {
                source: XyzError::InvalidCoordinate { axis: 'z', .. },
                ..
            })
        ));
    }
}
