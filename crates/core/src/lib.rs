#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod document;
pub mod toc;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
