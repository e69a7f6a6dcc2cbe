//! Command implementations for ontodoc CLI

pub mod build;
pub mod completions;
pub mod helpers;
pub mod index;
pub mod latest;
pub mod list;
pub mod version;
