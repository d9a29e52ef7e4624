// Copyright (c) 2025, Tom Ouellette
// Licensed under the BSD 3-Clause License

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PerimetryError {
    ShapeDimensionError(String),
    ParameterError(String),
    SplineError(&'static str),
    ConfigReadError(String),
    TableWriteError(String),
    NumpyWriteError,
    OtherError(String),
}

impl fmt::Display for PerimetryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PerimetryError::ShapeDimensionError(message) => {
                write!(
                    f,
                    "[perimetry::ShapeDimensionError] Invalid array dimensions. {}",
                    message
                )
            }
            PerimetryError::ParameterError(message) => {
                write!(
                    f,
                    "[perimetry::ParameterError] Invalid parameter. {}",
                    message
                )
            }
            PerimetryError::SplineError(message) => {
                write!(
                    f,
                    "[perimetry::SplineError] Failed to fit cubic spline. {}",
                    message
                )
            }
            PerimetryError::ConfigReadError(message) => {
                write!(
                    f,
                    "[perimetry::ConfigReadError] Configuration could not be read. {}.",
                    message
                )
            }
            PerimetryError::TableWriteError(message) => {
                write!(
                    f,
                    "[perimetry::TableWriteError] Failed to write table. {}.",
                    message
                )
            }
            PerimetryError::NumpyWriteError => {
                write!(
                    f,
                    "[perimetry::NumpyWriteError] Failed to write numpy array."
                )
            }
            PerimetryError::OtherError(message) => {
                write!(f, "[perimetry::OtherError] Error: {}.", message)
            }
        }
    }
}

impl std::error::Error for PerimetryError {}
