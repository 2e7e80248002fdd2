// Main uploader module - orchestrates all upload functionality
//
// This module is responsible for pushing matched local files to the
// release upload endpoint

pub mod batch;
pub mod client;

pub use batch::run;
pub use client::ReleaseClient;
