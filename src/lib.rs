pub mod assets;
pub mod config;
pub mod errors;
pub mod uploader;
