use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub atomic_number: u32,
    #[serde(default)]
    pub charge: f64,
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(atomic_number: u32, position: [f64; 3]) -> Self {
        Self {
            atomic_number,
            charge: 0.0,
            position,
        }
    }

    pub fn with_charge(atomic_number: u32, charge: f64, position: [f64; 3]) -> Self {
        Self {
            atomic_number,
            charge,
            position,
        }
    }
}
