pub mod colors;
pub mod constants;
pub mod logger;
