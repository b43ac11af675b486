pub mod dataset;
pub mod display;
pub mod filter;
pub mod load;
pub mod records;
pub mod sort;
pub mod state;
