pub mod cpi_csv;

pub use cpi_csv::{load_cpi_table, parse_cpi_csv};
