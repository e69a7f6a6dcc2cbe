//! Domain models for ontodoc
//!
//! This module contains pure domain objects representing ontology sources
//! and the aggregated sets built from them.

pub mod ontology;

pub use ontology::{OntologySet, SourceEntry, SourceKind};
