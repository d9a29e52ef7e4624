// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use std::path::Path;

use npyz::{self, WriterBuilder};

use crate::error::PerimetryError;
use crate::im::OccupancyGrid;

/// Write a numpy file from a vector of specified shape
///
/// # Arguments
///
/// * `path` - Path to output numpy file
/// * `data` - Vector of numeric type
/// * `shape` - Shape of the vector (shape product must equal length of data)
pub fn write_numpy<T, P: AsRef<Path>>(
    path: P,
    data: &[T],
    shape: &[u64],
) -> Result<(), PerimetryError>
where
    T: npyz::Serialize + npyz::AutoSerialize,
{
    if shape.iter().product::<u64>() != data.len() as u64 {
        return Err(PerimetryError::ShapeDimensionError(format!(
            "Array shape {:?} does not match {} elements.",
            shape,
            data.len()
        )));
    }

    let mut buffer = vec![];
    let mut writer = npyz::WriteOptions::<T>::new()
        .default_dtype()
        .shape(shape)
        .writer(&mut buffer)
        .begin_nd()
        .map_err(|_| PerimetryError::NumpyWriteError)?;

    for d in data {
        writer
            .push(d)
            .map_err(|_| PerimetryError::NumpyWriteError)?;
    }

    writer.finish().map_err(|_| PerimetryError::NumpyWriteError)?;
    std::fs::write(path, buffer).map_err(|_| PerimetryError::NumpyWriteError)?;
    Ok(())
}

/// Write an occupancy grid as a square u8 numpy array
///
/// The array is indexed `[x, y]`, matching `OccupancyGrid::get`.
///
/// ```no_run
/// use perimetry_core::im::OccupancyGrid;
/// use perimetry_core::io::write_grid_numpy;
///
/// let grid = OccupancyGrid::ones(16);
/// write_grid_numpy("grid.npy", &grid).unwrap();
/// ```
pub fn write_grid_numpy<P: AsRef<Path>>(path: P, grid: &OccupancyGrid) -> Result<(), PerimetryError> {
    let n = grid.dimension() as u64;
    write_numpy(path, &grid.buffer, &[n, n])
}
