pub mod catalog;
pub mod common;
pub mod config;
pub mod frontend;
pub mod types;
