//! A small, pure Rust writer for Gaussian cube files: atomic geometry together
//! with a volumetric scalar field such as an electron density or a wavefunction.
//!
//! # Features
//!
//! - **Exact layout** — fixed-width header columns (`%5d`, `%12.6f`) and C-style
//!   `%e` samples, so fixed-column cube readers parse the output unchanged
//! - **Unit handling** — geometry is supplied in Angstrom and written in bohr
//! - **Real or complex grids** — any `ndarray` 3-D array of real or complex
//!   samples; complex values are written as their magnitude
//! - **Any sink** — writes into whatever [`std::io::Write`] the caller owns
//!
//! # Quick Start
//!
//! ```
//! use cube_forge::{Atom, CubeConfig, Structure, VolumetricGrid, write_cube};
//!
//! // Water in a 10 Å box
//! let mut water = Structure::orthorhombic(10.0, 10.0, 10.0);
//! water.push(Atom::with_charge(8, -0.834, [5.000, 5.000, 5.0]));
//! water.push(Atom::with_charge(1, 0.417, [5.957, 5.000, 5.0]));
//! water.push(Atom::with_charge(1, 0.417, [4.760, 5.927, 5.0]));
//!
//! let density = VolumetricGrid::ones([5, 5, 5]);
//! let config = CubeConfig::new().with_comment("water density");
//!
//! let mut out = Vec::new();
//! write_cube(&mut out, &water, Some(&density), &config)?;
//!
//! let text = String::from_utf8(out).unwrap();
//! let lines: Vec<&str> = text.lines().collect();
//! assert_eq!(lines[0], "water density");
//! assert_eq!(lines[1], "OUTER LOOP: X, MIDDLE LOOP: Y, INNER LOOP: Z");
//! assert_eq!(lines[2], "    3    0.000000    0.000000    0.000000");
//! assert_eq!(lines[3], "    5    3.779452    0.000000    0.000000");
//! assert_eq!(lines[6], "    8   -0.834000    9.448631    9.448631    9.448631");
//! assert_eq!(lines.len(), 6 + 3 + 125);
//! # Ok::<(), cube_forge::CubeError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — The cube writer, its configuration and error type
//! - [`units`] — Angstrom/bohr conversion
//!
//! # Data Types
//!
//! - [`Structure`] — Ordered atoms plus cell vectors
//! - [`Atom`] — Atomic number, initial charge and position
//! - [`AtomicConfiguration`] — Read-only view the writer consumes; implement
//!   it to write from your own structure type
//! - [`VolumetricGrid`] — Dense `(x, y, z)` grid of samples
//! - [`GridSample`] — Scalars accepted as grid samples (real or complex)
//! - [`CubeConfig`] — Optional origin and comment line

mod model;

pub mod io;
pub mod units;

pub use model::atom::Atom;
pub use model::grid::{GridSample, RaggedGridError, VolumetricGrid};
pub use model::structure::{AtomicConfiguration, Structure};

pub use io::cube::{CubeConfig, write as write_cube};

pub use io::Error as CubeError;
