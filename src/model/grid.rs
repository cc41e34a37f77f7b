//! Dense volumetric data sampled on a regular grid spanning the cell.
//!
//! The grid is indexed `(x, y, z)`; iteration always runs with `x` slowest and
//! `z` fastest, independent of the memory layout of the array it was built from.

use ndarray::{Array3, ArrayBase, ArrayView3, Data, Ix3};
use num_complex::Complex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ragged grid: axis {axis} expected {expected} entries but a row has {found}")]
pub struct RaggedGridError {
    pub axis: usize,
    pub expected: usize,
    pub found: usize,
}

mod sealed {
    pub trait Sealed {}
}

/// A scalar that can be stored as a grid sample.
///
/// Real values are kept as they are (signed); complex values collapse to their
/// magnitude, since cube files have no complex representation.
pub trait GridSample: Copy + sealed::Sealed {
    fn to_sample(self) -> f64;
}

macro_rules! impl_real_sample {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl GridSample for $t {
                #[inline]
                fn to_sample(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_real_sample!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64);

impl sealed::Sealed for Complex<f64> {}
impl GridSample for Complex<f64> {
    #[inline]
    fn to_sample(self) -> f64 {
        self.norm()
    }
}

impl sealed::Sealed for Complex<f32> {}
impl GridSample for Complex<f32> {
    #[inline]
    fn to_sample(self) -> f64 {
        self.norm() as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumetricGrid {
    data: Array3<f64>,
}

impl VolumetricGrid {
    pub fn ones(shape: [usize; 3]) -> Self {
        Self {
            data: Array3::ones((shape[0], shape[1], shape[2])),
        }
    }

    /// Materializes any 3-D array of real or complex samples.
    pub fn from_array<S, T>(array: ArrayBase<S, Ix3>) -> Self
    where
        S: Data<Elem = T>,
        T: GridSample,
    {
        Self {
            data: array.mapv(T::to_sample),
        }
    }

    pub fn shape(&self) -> [usize; 3] {
        let (nx, ny, nz) = self.data.dim();
        [nx, ny, nz]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Samples with `x` varying slowest and `z` fastest.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }

    pub fn as_array(&self) -> &Array3<f64> {
        &self.data
    }

    pub fn into_array(self) -> Array3<f64> {
        self.data
    }
}

impl Default for VolumetricGrid {
    fn default() -> Self {
        Self::ones([2, 2, 2])
    }
}

impl<T: GridSample> From<Array3<T>> for VolumetricGrid {
    fn from(array: Array3<T>) -> Self {
        Self::from_array(array)
    }
}

impl<T: GridSample> From<ArrayView3<'_, T>> for VolumetricGrid {
    fn from(view: ArrayView3<'_, T>) -> Self {
        Self::from_array(view)
    }
}

impl<T: GridSample> TryFrom<Vec<Vec<Vec<T>>>> for VolumetricGrid {
    type Error = RaggedGridError;

    fn try_from(rows: Vec<Vec<Vec<T>>>) -> Result<Self, Self::Error> {
        let nx = rows.len();
        let ny = rows.first().map_or(0, Vec::len);
        let nz = rows
            .first()
            .and_then(|plane| plane.first())
            .map_or(0, Vec::len);

        for plane in &rows {
            if plane.len() != ny {
                return Err(RaggedGridError {
                    axis: 1,
                    expected: ny,
                    found: plane.len(),
                });
            }
            if let Some(line) = plane.iter().find(|line| line.len() != nz) {
                return Err(RaggedGridError {
                    axis: 2,
                    expected: nz,
                    found: line.len(),
                });
            }
        }

        let data = Array3::from_shape_fn((nx, ny, nz), |(i, j, k)| rows[i][j][k].to_sample());
        Ok(Self { data })
    }
}
