// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

// Table formats accepted when writing ratio tables
pub const SUPPORTED_TABLE_FORMATS: [&str; 5] = ["csv", "tsv", "txt", "parquet", "pq"];

// Padding applied to the largest radius when building the raster bounding square
pub const BOUNDING_RADIUS_SCALE: f64 = 1.1;

// Neighbourhood sizes used by the discrete boundary estimators
pub const ORDER1_NEIGHBOURHOOD_SIZE: usize = 8;
pub const ORDER2_NEIGHBOURHOOD_SIZE: usize = 20;

// Moore neighbourhood offsets as (dx, dy)
pub const MOORE_OFFSETS: [[i64; 2]; ORDER1_NEIGHBOURHOOD_SIZE] = [
    [-1, 0],
    [1, 0],
    [0, -1],
    [0, 1],
    [-1, -1],
    [-1, 1],
    [1, -1],
    [1, 1],
];

// Column names for per-trial measurement tables
pub const TRIAL_MEASUREMENT_NAMES: [&str; 13] = [
    "area",
    "perimeter",
    "area_pixels",
    "boundary_pixels_order0",
    "boundary_pixels_order1",
    "boundary_pixels_order2",
    "shape_index",
    "shape_index_order0",
    "shape_index_order1",
    "shape_index_order2",
    "ratio_order0",
    "ratio_order1",
    "ratio_order2",
];

// Default experiment settings
pub const DEFAULT_FOURIER_ORDER: usize = 6;
pub const DEFAULT_POINTS_PER_SHAPE: usize = 200;
pub const DEFAULT_SPIKEYNESS: f64 = 1.5;
pub const DEFAULT_PIXEL_DIMENSION: usize = 128;
pub const DEFAULT_SAMPLES: usize = 50;
