pub mod analysis;
pub mod commands;
pub mod error;
pub mod models;
