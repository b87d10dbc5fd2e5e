use super::config::StackParameters;
use super::error::EngineError;
use crate::core::models::library::MoleculeLibrary;
use crate::core::models::molecule::Atom;
use crate::core::utils::geometry::{layer_translation, stacking_rotation};

/// The concatenated, transformed atoms of one (order, rotation) pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackedGeometry {
    pub atoms: Vec<Atom>,
    /// Number of atoms contributed by each layer, bottom to top.
    pub layer_sizes: Vec<usize>,
}

impl StackedGeometry {
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Atoms belonging to layer `index`, or an empty slice if out of range.
    pub fn layer(&self, index: usize) -> &[Atom] {
        let Some(&size) = self.layer_sizes.get(index) else {
            return &[];
        };
        let start: usize = self.layer_sizes[..index].iter().sum();
        &self.atoms[start..start + size]
    }
}

/// Builds the stacked geometry for one molecule order and one rotation set.
///
/// Layer `i` takes molecule `order[i]`, rotates it by `rotations[i]` degrees about
/// the stacking axis, then shifts it by `(x_spacing * i, 0, z_spacing * i)`.
pub fn assemble_stack(
    library: &MoleculeLibrary,
    order: &[usize],
    rotations: &[u32],
    params: &StackParameters,
) -> Result<StackedGeometry, EngineError> {
    if order.len() != rotations.len() {
        return Err(EngineError::Internal(format!(
            "order tuple has {} layers but rotation tuple has {}",
            order.len(),
            rotations.len()
        )));
    }

    let mut stack = StackedGeometry::default();
    for (layer_idx, (&lib_index, &angle)) in order.iter().zip(rotations).enumerate() {
        let molecule = library
            .get(lib_index)
            .ok_or(EngineError::IndexOutOfRange {
                index: lib_index,
                len: library.len(),
            })?;

        let rotation = stacking_rotation(f64::from(angle));
        let offset = layer_translation(layer_idx, params.x_spacing, params.z_spacing);

        stack.atoms.extend(
            molecule
                .atoms()
                .iter()
                .map(|atom| Atom::new(atom.label.clone(), rotation * atom.position + offset)),
        );
        stack.layer_sizes.push(molecule.atom_count());
    }

    Ok(stack)
}
