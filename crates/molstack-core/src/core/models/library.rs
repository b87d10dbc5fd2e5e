use super::molecule::Molecule;
use std::ops::Index;

/// Ordered, index-addressable collection of centered molecules.
///
/// Insertion order follows input-file order. Once built the library is never
/// mutated; generation borrows it immutably.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoleculeLibrary {
    molecules: Vec<Molecule>,
}

impl MoleculeLibrary {
    pub fn new(molecules: Vec<Molecule>) -> Self {
        Self { molecules }
    }

    pub fn len(&self) -> usize {
        self.molecules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.molecules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Molecule> {
        self.molecules.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Molecule> {
        self.molecules.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.molecules.iter().map(Molecule::name).collect()
    }
}

impl Index<usize> for MoleculeLibrary {
    type Output = Molecule;

    fn index(&self, index: usize) -> &Self::Output {
        &self.molecules[index]
    }
}

impl FromIterator<Molecule> for MoleculeLibrary {
    fn from_iter<I: IntoIterator<Item = Molecule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::molecule::Atom;
    use nalgebra::Point3;

    fn single_atom(name: &str, label: &str) -> Molecule {
        Molecule::new(name, vec![Atom::new(label, Point3::origin())]).unwrap()
    }

    #[test]
    fn library_preserves_insertion_order() {
        let library: MoleculeLibrary = ["B", "A", "C"]
            .into_iter()
            .map(|n| single_atom(n, "X"))
            .collect();
        assert_eq!(library.names(), vec!["B", "A", "C"]);
        assert_eq!(library[1].name(), "A");
        assert_eq!(library.len(), 3);
    }

    #[test]
    fn duplicate_names_are_kept_as_distinct_entries() {
        let library = MoleculeLibrary::new(vec![single_atom("A", "H"), single_atom("A", "O")]);
        assert_eq!(library.len(), 2);
        assert_eq!(library[0].atoms()[0].label, "H");
        assert_eq!(library[1].atoms()[0].label, "O");
    }

    #[test]
    fn get_out_of_range_returns_none() {
        let library = MoleculeLibrary::default();
        assert!(library.is_empty());
        assert!(library.get(0).is_none());
    }
}
