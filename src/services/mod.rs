pub mod comparison;
pub mod filter_engine;
pub mod listing;
pub mod sort_engine;
