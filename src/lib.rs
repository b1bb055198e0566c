// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

#[cfg(not(unix))]
compile_error!("lsdir reads unix inode metadata and only builds on unix-like targets");

pub mod app;
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod file_kind;
pub mod filesystem;
pub mod filter;
pub mod parsers;
pub mod presentation;

pub use app::run;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
