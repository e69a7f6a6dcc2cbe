//! Operations module for building ontology documentation
//!
//! This module provides high-level operations that coordinate:
//! - BuildOperation: the local WIDOCO build workflow
//!
//! The operations coordinate with:
//! - Scanner: ontology file discovery (from scanner module)
//! - Widoco: external tool invocation (from widoco module)
//! - Latest: `latest` folder materialization (from latest module)
//! - Index: landing page rendering (from index module)

pub mod build;

pub use build::{BuildOperation, BuildReport, IndexOutcome};
