//! File output for volumetric data.
//!
//! Writers take any [`std::io::Write`] sink and never open, buffer, flush or
//! close it themselves.

pub mod cube;
pub mod error;

mod util;

pub use cube::CubeConfig;
pub use error::Error;
