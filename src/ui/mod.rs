pub mod prompt;
pub mod summary;
