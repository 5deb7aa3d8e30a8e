pub mod assets;
pub mod catchers;
pub mod error;
pub mod headers;
