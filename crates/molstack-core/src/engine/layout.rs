//! Naming of output artifacts.
//!
//! Paths are a pure function of the molecule order and rotation set: one
//! directory per order (`A-B-A`) and one file per rotation set
//! (`rot_0_30_60.xyz`) inside it.

use super::error::EngineError;
use crate::core::models::library::MoleculeLibrary;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "stacked_geometries";
pub const ARTIFACT_EXTENSION: &str = "xyz";

const ORDER_SEPARATOR: &str = "-";
const ROTATION_SEPARATOR: &str = "_";
const ROTATION_PREFIX: &str = "rot_";

/// Molecule names joined bottom to top, e.g. `benzene-pyrene`.
pub fn order_label(library: &MoleculeLibrary, order: &[usize]) -> Result<String, EngineError> {
    let names = order
        .iter()
        .map(|&index| {
            library
                .get(index)
                .map(|m| m.name())
                .ok_or(EngineError::IndexOutOfRange {
                    index,
                    len: library.len(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names.join(ORDER_SEPARATOR))
}

/// Angles joined bottom to top, e.g. `0_30_60`.
pub fn rotation_label(rotations: &[u32]) -> String {
    rotations
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(ROTATION_SEPARATOR)
}

pub fn artifact_file_name(rotations: &[u32]) -> String {
    format!(
        "{}{}.{}",
        ROTATION_PREFIX,
        rotation_label(rotations),
        ARTIFACT_EXTENSION
    )
}

/// Path of an artifact relative to the output root.
pub fn artifact_relative_path(
    library: &MoleculeLibrary,
    order: &[usize],
    rotations: &[u32],
) -> Result<PathBuf, EngineError> {
    let mut path = PathBuf::from(order_label(library, order)?);
    path.push(artifact_file_name(rotations));
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::molecule::{Atom, Molecule};
    use nalgebra::Point3;
    use std::path::Path;

    fn library(names: &[&str]) -> MoleculeLibrary {
        names
            .iter()
            .map(|n| Molecule::new(*n, vec![Atom::new("C", Point3::origin())]).unwrap())
            .collect()
    }

    #[test]
    fn order_label_joins_names_with_hyphen() {
        let lib = library(&["A", "B"]);
        assert_eq!(order_label(&lib, &[0, 1, 0]).unwrap(), "A-B-A");
        assert_eq!(order_label(&lib, &[1]).unwrap(), "B");
    }

    #[test]
    fn order_label_rejects_unknown_index() {
        let lib = library(&["A"]);
        assert!(matches!(
            order_label(&lib, &[0, 2]),
            Err(EngineError::IndexOutOfRange { index: 2, len: 1 })
        ));
    }

    #[test]
    fn rotation_label_joins_angles_with_underscore() {
        assert_eq!(rotation_label(&[0, 30, 60]), "0_30_60");
        assert_eq!(rotation_label(&[180]), "180");
    }

    #[test]
    fn artifact_relative_path_nests_file_under_order_directory() {
        let lib = library(&["benzene", "pyrene"]);
        let path = artifact_relative_path(&lib, &[1, 0], &[90, 0]).unwrap();
        assert_eq!(path, Path::new("pyrene-benzene").join("rot_90_0.xyz"));
    }

    #[test]
    fn duplicate_names_produce_identical_labels() {
        let lib = library(&["A", "A"]);
        assert_eq!(
            order_label(&lib, &[0, 1]).unwrap(),
            order_label(&lib, &[1, 0]).unwrap()
        );
    }
}
