pub mod core;
pub mod catalog;
pub mod lists;
pub mod products;
pub mod utils;
