//! Data consumed by the cube writer.
//!
//! - [`atom`] – Atomic number, initial charge and Cartesian position.
//! - [`structure`] – Ordered atoms plus cell vectors, and the
//!   [`AtomicConfiguration`](structure::AtomicConfiguration) trait the writer reads through.
//! - [`grid`] – Dense volumetric samples on an `(x, y, z)` grid.
//!
//! All lengths are in Angstrom; conversion to bohr happens only when writing.

pub mod atom;
pub mod grid;
pub mod structure;
