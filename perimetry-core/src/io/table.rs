// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::constant;
use crate::error::PerimetryError;
use crate::mp::TrialMeasurement;

/// Build a table with one row per trial
///
/// The first column holds the trial index, followed by one column per
/// entry of `constant::TRIAL_MEASUREMENT_NAMES`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use perimetry_core::config::RatioConfig;
/// use perimetry_core::io::measurements_table;
/// use perimetry_core::mp::measure_trial;
///
/// let config = RatioConfig { pixel_dimension: 24, ..RatioConfig::default() };
/// let mut rng = StdRng::seed_from_u64(1);
/// let measurements = vec![measure_trial(&mut rng, &config).unwrap()];
///
/// let df = measurements_table(&measurements).unwrap();
/// assert_eq!(df.shape(), (1, 14));
/// ```
pub fn measurements_table(measurements: &[TrialMeasurement]) -> Result<DataFrame, PerimetryError> {
    let trial: Vec<u32> = (0..measurements.len() as u32).collect();

    let mut column_data: Vec<Vec<f64>> =
        vec![Vec::with_capacity(measurements.len()); constant::TRIAL_MEASUREMENT_NAMES.len()];

    for measurement in measurements {
        for (idx, value) in measurement.to_row().into_iter().enumerate() {
            column_data[idx].push(value);
        }
    }

    let mut columns = vec![Column::new("trial".into(), trial)];

    for (name, values) in constant::TRIAL_MEASUREMENT_NAMES.iter().zip(column_data) {
        columns.push(Column::new((*name).into(), values));
    }

    DataFrame::new(columns).map_err(|err| PerimetryError::TableWriteError(err.to_string()))
}

/// Write a table to a CSV file
///
/// # Arguments
///
/// * `df` - A DataFrame
/// * `path` - Output file path
/// * `header` - Whether the output file should contain a header
pub fn write_table_csv<P: AsRef<Path>>(
    df: &mut DataFrame,
    path: P,
    header: bool,
) -> Result<(), PerimetryError> {
    let mut output: File = File::create(&path).map_err(|_| {
        PerimetryError::TableWriteError(format!(
            "Failed to create CSV file: {}",
            path.as_ref().display()
        ))
    })?;

    CsvWriter::new(&mut output)
        .include_header(header)
        .finish(df)
        .map_err(|_| PerimetryError::TableWriteError("Failed to write CSV file".to_string()))
}

/// Write a table to a TSV file
///
/// # Arguments
///
/// * `df` - A DataFrame
/// * `path` - Output file path
/// * `header` - Whether the output file should contain a header
pub fn write_table_tsv<P: AsRef<Path>>(
    df: &mut DataFrame,
    path: P,
    header: bool,
) -> Result<(), PerimetryError> {
    let mut output: File = File::create(&path).map_err(|_| {
        PerimetryError::TableWriteError(format!(
            "Failed to create TSV file: {}",
            path.as_ref().display()
        ))
    })?;

    CsvWriter::new(&mut output)
        .include_header(header)
        .with_separator(b'\t')
        .finish(df)
        .map_err(|_| PerimetryError::TableWriteError("Failed to write TSV file".to_string()))
}

/// Write a table to a parquet file
///
/// # Arguments
///
/// * `df` - A DataFrame
/// * `path` - Output file path
pub fn write_table_pq<P: AsRef<Path>>(df: &mut DataFrame, path: P) -> Result<(), PerimetryError> {
    let mut output: File = File::create(&path).map_err(|_| {
        PerimetryError::TableWriteError(format!(
            "Failed to create parquet file: {}",
            path.as_ref().display()
        ))
    })?;

    ParquetWriter::new(&mut output)
        .finish(df)
        .map(|_| ())
        .map_err(|_| PerimetryError::TableWriteError("Failed to write parquet file".to_string()))
}

/// Write a DataFrame to disk with a format chosen by file extension
///
/// # Arguments
///
/// * `df` - A DataFrame
/// * `path` - Output path ending in csv, tsv, txt, parquet, or pq
///
/// # Examples
///
/// ```no_run
/// use polars::prelude::*;
/// use perimetry_core::io::write_table;
///
/// let column = vec![Column::new("ratio_order0".into(), [0.78, 0.81, 0.80])];
/// let mut df: DataFrame = DataFrame::new(column).unwrap();
///
/// write_table(&mut df, "ratios.csv").unwrap()
/// ```
pub fn write_table<P: AsRef<Path>>(df: &mut DataFrame, path: P) -> Result<(), PerimetryError> {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());

    match extension.as_deref() {
        Some("csv") => write_table_csv(df, path, true),
        Some("tsv") | Some("txt") => write_table_tsv(df, path, true),
        Some("parquet") | Some("pq") => write_table_pq(df, path),
        _ => Err(PerimetryError::TableWriteError(format!(
            "Table path has an invalid extension. Must be one of: {}",
            constant::SUPPORTED_TABLE_FORMATS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::RatioConfig;
    use crate::mp::measure_trial;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn measurements(n: usize) -> Vec<TrialMeasurement> {
        let config = RatioConfig {
            pixel_dimension: 24,
            ..RatioConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(12);
        (0..n)
            .map(|_| measure_trial(&mut rng, &config).unwrap())
            .collect()
    }

    #[test]
    fn test_measurements_table_columns() {
        let df = measurements_table(&measurements(3)).unwrap();

        assert_eq!(df.height(), 3);
        assert_eq!(df.get_column_names()[0].as_str(), "trial");
        assert_eq!(df.get_column_names()[13].as_str(), "ratio_order2");
    }

    #[test]
    fn test_write_table_csv() {
        let mut df = measurements_table(&measurements(4)).unwrap();
        let path = std::env::temp_dir().join("perimetry_test_write_table.csv");

        write_table(&mut df, &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(contents.lines().count(), 5);
        assert!(contents.starts_with("trial,area,perimeter"));
    }

    #[test]
    fn test_write_table_invalid_extension() {
        let mut df = measurements_table(&measurements(1)).unwrap();
        let path = std::env::temp_dir().join("perimetry_test_write_table.json");
        assert!(write_table(&mut df, path).is_err());
    }
}
