pub mod cpi_table;
pub mod inflation;

pub use cpi_table::CpiTable;
pub use inflation::{BASE_CPI, adjust_for_inflation};
