pub mod details;
pub mod manager;
