pub mod boundary;
pub mod neighbourhood;

pub use boundary::{DiscreteBoundary, compute_discrete_boundary, compute_discrete_boundary_with};
pub use neighbourhood::{EdgeMode, extended_offsets};
