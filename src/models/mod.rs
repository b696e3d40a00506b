pub mod config;
pub mod translation;
