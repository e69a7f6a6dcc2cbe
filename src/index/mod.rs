//! Index page aggregation
//!
//! Scans `modules/` then `demo/`, accumulates versions per ontology name and
//! partitions the resulting sets into the buckets the landing page shows:
//! - `core` / `other` for modules, decided by the core table
//! - `demo` for everything under `demo/`
//! - `actor`, `process`, `resource`, `observation`, `supplementary` as
//!   secondary tags on core modules
//!
//! Every bucket is sorted ascending by name before rendering.

pub mod render;

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::config::CategoryTables;
use crate::domain::{OntologySet, SourceKind};
use crate::error::Result;
use crate::scanner;

pub use render::create_index_file;

/// Secondary classification applied to core modules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Actor,
    Process,
    Resource,
    Observation,
    Supplementary,
}

impl Tag {
    pub const ALL: [Tag; 5] = [
        Tag::Actor,
        Tag::Process,
        Tag::Resource,
        Tag::Observation,
        Tag::Supplementary,
    ];

    fn members(self, tables: &CategoryTables) -> &[String] {
        match self {
            Tag::Actor => &tables.actor,
            Tag::Process => &tables.process,
            Tag::Resource => &tables.resource,
            Tag::Observation => &tables.observation,
            Tag::Supplementary => &tables.supplementary,
        }
    }
}

/// Name-keyed accumulation of versions, in first-seen order
#[derive(Debug, Default)]
pub struct Accumulator {
    sets: Vec<OntologySet>,
    positions: HashMap<String, usize>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one `(name, version)` pair
    pub fn add(&mut self, name: &str, version: &str) {
        let index = match self.positions.get(name) {
            Some(&index) => index,
            None => {
                self.sets.push(OntologySet::new(name));
                self.positions.insert(name.to_string(), self.sets.len() - 1);
                self.sets.len() - 1
            }
        };
        if let Some(set) = self.sets.get_mut(index) {
            set.add_version(version);
        }
    }

    pub fn into_sets(self) -> Vec<OntologySet> {
        self.sets
    }
}

/// Template context for the index page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexData {
    pub core: Vec<OntologySet>,
    pub other: Vec<OntologySet>,
    pub demo: Vec<OntologySet>,
    pub actor: Vec<OntologySet>,
    pub observation: Vec<OntologySet>,
    pub process: Vec<OntologySet>,
    pub resource: Vec<OntologySet>,
    pub supplementary: Vec<OntologySet>,
}

impl IndexData {
    fn tag_bucket_mut(&mut self, tag: Tag) -> &mut Vec<OntologySet> {
        match tag {
            Tag::Actor => &mut self.actor,
            Tag::Process => &mut self.process,
            Tag::Resource => &mut self.resource,
            Tag::Observation => &mut self.observation,
            Tag::Supplementary => &mut self.supplementary,
        }
    }

    /// Place an aggregated set into its primary bucket and any tag buckets
    pub fn place(&mut self, kind: SourceKind, set: OntologySet, tables: &CategoryTables) {
        match kind {
            SourceKind::Demo => self.demo.push(set),
            SourceKind::Modules if tables.core.contains(&set.name) => {
                for tag in Tag::ALL {
                    if tag.members(tables).contains(&set.name) {
                        self.tag_bucket_mut(tag).push(set.clone());
                    }
                }
                self.core.push(set);
            }
            SourceKind::Modules => self.other.push(set),
        }
    }

    /// Sort every bucket ascending by name (stable)
    pub fn sort(&mut self) {
        for bucket in [
            &mut self.core,
            &mut self.other,
            &mut self.demo,
            &mut self.actor,
            &mut self.observation,
            &mut self.process,
            &mut self.resource,
            &mut self.supplementary,
        ] {
            bucket.sort_by(|a, b| a.name.cmp(&b.name));
        }
    }

    /// Buckets with their context names, in display order
    pub fn buckets(&self) -> [(&'static str, &[OntologySet]); 8] {
        [
            ("core", self.core.as_slice()),
            ("actor", self.actor.as_slice()),
            ("process", self.process.as_slice()),
            ("resource", self.resource.as_slice()),
            ("observation", self.observation.as_slice()),
            ("supplementary", self.supplementary.as_slice()),
            ("other", self.other.as_slice()),
            ("demo", self.demo.as_slice()),
        ]
    }

    /// Number of distinct ontology sets (tag buckets are not counted twice)
    pub fn total_sets(&self) -> usize {
        self.core.len() + self.other.len() + self.demo.len()
    }
}

/// Build the index context from the files currently under `ontology_dir`
pub fn build_index_data(ontology_dir: &Path, tables: &CategoryTables) -> Result<IndexData> {
    let mut data = IndexData::default();

    for kind in SourceKind::ALL {
        let mut accumulator = Accumulator::new();
        for entry in scanner::scan_kind(ontology_dir, kind)? {
            tracing::debug!(
                "Indexing {kind} {} {} from {}",
                entry.name,
                entry.version,
                entry.path.display()
            );
            accumulator.add(&entry.name, &entry.version);
        }

        for set in accumulator.into_sets() {
            data.place(kind, set, tables);
        }
    }

    data.sort();
    Ok(data)
}
