// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

//! Continuous versus discrete boundary length of random star-shaped shapes.
//!
//! A trial generates a random radial outline (`sh`), fits a cubic spline
//! and integrates its true area and perimeter (`nm`, `mp`), rasterizes it
//! onto a square grid (`im`), and counts boundary pixels with three
//! neighbourhood conventions (`cv`). The ratio of the continuous shape
//! index to each discrete shape index is accumulated across trials (`mp`).

pub mod config;
pub mod constant;
pub mod cv;
pub mod error;
pub mod im;
pub mod io;
pub mod mp;
pub mod nm;
pub mod sh;
pub mod ut;
