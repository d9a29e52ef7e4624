mod npy;
mod table;

pub use npy::write_grid_numpy;
pub use npy::write_numpy;

pub use table::measurements_table;
pub use table::write_table;
pub use table::write_table_csv;
pub use table::write_table_pq;
pub use table::write_table_tsv;
