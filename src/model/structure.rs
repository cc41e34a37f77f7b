use super::atom::Atom;
use serde::{Deserialize, Serialize};

/// Read-only view of an atomic configuration, as consumed by the cube writer.
///
/// All lengths are in Angstrom. Atomic numbers, charges and positions are
/// iterated in lock-step; an implementation that yields sequences of
/// different lengths gets its atom records truncated to the shortest one.
pub trait AtomicConfiguration {
    fn atom_count(&self) -> usize;

    fn atomic_numbers(&self) -> impl Iterator<Item = u32> + '_;

    /// Initial partial charges. Configurations without charges report zeros.
    fn initial_charges(&self) -> impl Iterator<Item = f64> + '_ {
        std::iter::repeat_n(0.0, self.atom_count())
    }

    fn positions(&self) -> impl Iterator<Item = [f64; 3]> + '_;

    /// Cell vectors, one per row.
    fn cell(&self) -> [[f64; 3]; 3];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    #[serde(default)]
    pub cell: [[f64; 3]; 3],
    pub atoms: Vec<Atom>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cell(cell: [[f64; 3]; 3]) -> Self {
        Self {
            atoms: Vec::new(),
            cell,
        }
    }

    /// Orthorhombic cell with the given edge lengths along x, y and z.
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self {
        Self::with_cell([[a, 0.0, 0.0], [0.0, b, 0.0], [0.0, 0.0, c]])
    }

    pub fn push(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

impl FromIterator<Atom> for Structure {
    fn from_iter<I: IntoIterator<Item = Atom>>(iter: I) -> Self {
        Self {
            atoms: iter.into_iter().collect(),
            cell: [[0.0; 3]; 3],
        }
    }
}

impl AtomicConfiguration for Structure {
    fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    fn atomic_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.atoms.iter().map(|a| a.atomic_number)
    }

    fn initial_charges(&self) -> impl Iterator<Item = f64> + '_ {
        self.atoms.iter().map(|a| a.charge)
    }

    fn positions(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.atoms.iter().map(|a| a.position)
    }

    fn cell(&self) -> [[f64; 3]; 3] {
        self.cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Uncharged {
        numbers: Vec<u32>,
        positions: Vec<[f64; 3]>,
    }

    impl AtomicConfiguration for Uncharged {
        fn atom_count(&self) -> usize {
            self.numbers.len()
        }

        fn atomic_numbers(&self) -> impl Iterator<Item = u32> + '_ {
            self.numbers.iter().copied()
        }

        fn positions(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
            self.positions.iter().copied()
        }

        fn cell(&self) -> [[f64; 3]; 3] {
            [[0.0; 3]; 3]
        }
    }

    #[test]
    fn structure_exposes_atoms_in_order() {
        let mut s = Structure::orthorhombic(4.0, 5.0, 6.0);
        s.push(Atom::with_charge(8, -0.8, [0.0, 0.0, 0.0]));
        s.push(Atom::with_charge(1, 0.4, [0.96, 0.0, 0.0]));

        assert_eq!(AtomicConfiguration::atom_count(&s), 2);
        assert_eq!(s.atomic_numbers().collect::<Vec<_>>(), vec![8, 1]);
        assert_eq!(s.initial_charges().collect::<Vec<_>>(), vec![-0.8, 0.4]);
        assert_eq!(s.positions().nth(1), Some([0.96, 0.0, 0.0]));
        assert_eq!(s.cell()[1], [0.0, 5.0, 0.0]);
    }

    #[test]
    fn charges_default_to_zero() {
        let config = Uncharged {
            numbers: vec![1, 1, 8],
            positions: vec![[0.0; 3]; 3],
        };
        let charges: Vec<f64> = config.initial_charges().collect();
        assert_eq!(charges, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn collects_from_atoms_with_zero_cell() {
        let s: Structure = [Atom::new(6, [0.0; 3]), Atom::new(6, [1.4, 0.0, 0.0])]
            .into_iter()
            .collect();
        assert_eq!(s.atom_count(), 2);
        assert!(!s.is_empty());
        assert_eq!(s.cell, [[0.0; 3]; 3]);
    }

    #[test]
    fn structure_survives_toml_round_trip() {
        let mut s = Structure::with_cell([[4.0, 0.0, 0.0], [2.0, 6.0, 0.0], [0.0, 0.0, 8.5]]);
        s.push(Atom::with_charge(8, -0.834, [0.0, 0.0, 0.0]));
        s.push(Atom::new(1, [0.9572, 0.0, 0.0]));

        let text = toml::to_string(&s).expect("serialize structure");
        let parsed: Structure = toml::from_str(&text).expect("parse structure");
        assert_eq!(parsed, s);
    }

    #[test]
    fn structure_cell_defaults_to_zero() {
        let text = "[[atoms]]\natomic_number = 6\nposition = [0.0, 0.0, 0.0]\n";
        let parsed: Structure = toml::from_str(text).expect("parse structure");
        assert_eq!(parsed.cell, [[0.0; 3]; 3]);
        assert_eq!(parsed.atoms, vec![Atom::new(6, [0.0; 3])]);
    }
}
