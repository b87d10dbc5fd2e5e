use crate::core::utils::geometry::centroid;
use nalgebra::Point3;

/// A single labelled position within a molecule.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The element label as read from the geometry file (e.g., "C", "H1").
    pub label: String,
    /// Cartesian coordinates in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    pub fn new(label: impl Into<String>, position: Point3<f64>) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }
}

/// A small molecule held by the library, centered on its centroid.
///
/// Positions are translated at construction so that their arithmetic mean is the
/// origin. The type exposes no mutable access, so this holds for the lifetime of
/// the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    name: String,
    atoms: Vec<Atom>,
}

impl Molecule {
    /// Builds a centered molecule from raw atoms.
    ///
    /// # Return
    ///
    /// Returns `None` when `atoms` is empty, since an empty molecule has no
    /// centroid and contributes nothing to a stack.
    pub fn new(name: impl Into<String>, mut atoms: Vec<Atom>) -> Option<Self> {
        let positions: Vec<Point3<f64>> = atoms.iter().map(|a| a.position).collect();
        let center = centroid(&positions)?;
        for atom in &mut atoms {
            atom.position -= center.coords;
        }
        Some(Self {
            name: name.into(),
            atoms,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn positions(&self) -> impl Iterator<Item = Point3<f64>> + '_ {
        self.atoms.iter().map(|a| a.position)
    }

    /// Mean position of the stored atoms; the origin up to rounding.
    pub fn centroid(&self) -> Point3<f64> {
        let positions: Vec<Point3<f64>> = self.positions().collect();
        centroid(&positions).unwrap_or_else(Point3::origin)
    }
}
