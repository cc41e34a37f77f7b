//! Length units.
//!
//! Inputs are taken in Angstrom; cube files store every length in bohr.

/// Angstrom per bohr (CODATA 2014).
pub const BOHR: f64 = 0.529_177_210_67;

#[inline]
pub fn angstrom_to_bohr(value: f64) -> f64 {
    value / BOHR
}

#[inline]
pub fn vec_to_bohr(v: [f64; 3]) -> [f64; 3] {
    v.map(angstrom_to_bohr)
}
