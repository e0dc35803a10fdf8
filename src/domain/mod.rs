pub mod models;
pub mod vault;
