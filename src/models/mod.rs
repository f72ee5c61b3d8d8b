pub mod category;
pub mod comparison;
pub mod dish;
pub mod filter;
pub mod lookup;
pub mod restaurant;
pub mod tags;
