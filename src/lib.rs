pub mod cli;
pub mod config;
pub mod error;
pub mod header;
pub mod javah;
pub mod javap;
pub mod jdk;
pub mod logging;
pub mod manifest;
pub mod utils;
