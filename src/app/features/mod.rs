pub mod search;
pub mod ui;
pub mod vault;
