use super::CubeConfig;
use crate::io::error::Error;
use crate::io::util::{Fixed, Scientific};
use crate::model::grid::VolumetricGrid;
use crate::model::structure::AtomicConfiguration;
use crate::units::{angstrom_to_bohr, vec_to_bohr};
use log::{debug, warn};
use std::io::Write;

const LOOP_ORDER: &str = "OUTER LOOP: X, MIDDLE LOOP: Y, INNER LOOP: Z";

/// Writes `structure` and `grid` to `writer` in cube format.
///
/// A missing grid is replaced by a 2×2×2 grid of ones. The writer is neither
/// buffered nor flushed here; that is left to the caller.
///
/// # Errors
///
/// Only failures of `writer` itself, as [`Error::Io`].
pub fn write<W, C>(
    mut writer: W,
    structure: &C,
    grid: Option<&VolumetricGrid>,
    config: &CubeConfig,
) -> Result<(), Error>
where
    W: Write,
    C: AtomicConfiguration,
{
    let default_grid;
    let grid = match grid {
        Some(grid) => grid,
        None => {
            default_grid = VolumetricGrid::default();
            &default_grid
        }
    };
    let shape = grid.shape();

    debug!(
        "writing cube file: {} atoms, grid {}x{}x{}",
        structure.atom_count(),
        shape[0],
        shape[1],
        shape[2]
    );
    for (axis, &n) in shape.iter().enumerate() {
        if n == 0 {
            warn!("cube grid axis {axis} has no samples; its voxel step is not finite");
        }
    }

    writeln!(writer, "{}", config.comment_line())?;
    writeln!(writer, "{}", LOOP_ORDER)?;

    let origin = config.origin.map(vec_to_bohr).unwrap_or([0.0; 3]);
    writeln!(
        writer,
        "{:5}{}{}{}",
        structure.atom_count(),
        Fixed(origin[0]),
        Fixed(origin[1]),
        Fixed(origin[2])
    )?;

    let cell = structure.cell();
    for (vector, &n) in cell.iter().zip(shape.iter()) {
        let step = vector.map(|c| angstrom_to_bohr(c / n as f64));
        writeln!(
            writer,
            "{:5}{}{}{}",
            n,
            Fixed(step[0]),
            Fixed(step[1]),
            Fixed(step[2])
        )?;
    }

    let records = structure
        .atomic_numbers()
        .zip(structure.initial_charges())
        .zip(structure.positions());
    for ((number, charge), position) in records {
        let [x, y, z] = vec_to_bohr(position);
        writeln!(
            writer,
            "{:5}{}{}{}{}",
            number,
            Fixed(charge),
            Fixed(x),
            Fixed(y),
            Fixed(z)
        )?;
    }

    for (i, value) in grid.values().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        write!(writer, "{}", Scientific(value))?;
    }

    Ok(())
}
