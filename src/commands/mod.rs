//! Command implementations for tmplguard CLI

pub mod bundles;
pub mod completions;
mod helpers;
pub mod managed;
pub mod version;
