//! Tree builder: folds relationship triplets into a topology.

use tracing::debug;

use crate::domain::entities::{Topology, Triplet};
use crate::domain::error::DomainResult;
use crate::domain::parser;

/// Constructs a topology one triplet at a time.
///
/// Each triplet resolves (find-or-create) its root, then its parent one level
/// below the root, then its child under the parent. A parent named like its
/// root is the root itself. Lookups are linear scans over siblings, so a
/// build is O(n * k) for n triplets and k siblings per level; that is fine for
/// topology files and keeps first-seen order without an index.
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    topology: Topology,
    triplets: usize,
}

impl TopologyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one relationship. Repeating a triplet is a no-op.
    pub fn insert(&mut self, triplet: Triplet<'_>) {
        self.triplets += 1;
        let root = self.topology.root_or_insert(triplet.root);
        let parent = if triplet.parent == triplet.root {
            root
        } else {
            root.child_or_insert(triplet.parent)
        };
        parent.child_or_insert(triplet.child);
    }

    /// Consume triplets in order, aborting on the first error.
    pub fn extend<'a, I>(&mut self, triplets: I) -> DomainResult<()>
    where
        I: IntoIterator<Item = DomainResult<Triplet<'a>>>,
    {
        for triplet in triplets {
            self.insert(triplet?);
        }
        Ok(())
    }

    pub fn finish(self) -> Topology {
        debug!(
            "built topology: {} triplets, {} roots, {} items",
            self.triplets,
            self.topology.roots.len(),
            self.topology.item_count()
        );
        self.topology
    }

    /// Build a topology from already parsed triplets.
    pub fn build<'a, I>(triplets: I) -> DomainResult<Topology>
    where
        I: IntoIterator<Item = DomainResult<Triplet<'a>>>,
    {
        let mut builder = Self::new();
        builder.extend(triplets)?;
        Ok(builder.finish())
    }
}

impl Topology {
    /// Parse a relationship list and build its topology in one pass.
    pub fn parse(text: &str) -> DomainResult<Topology> {
        TopologyBuilder::build(parser::triplets(text))
    }
}
