//! Domain entities: configuration items and the topology that owns them

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use termtree::Tree;

use crate::domain::error::{DomainError, DomainResult};

/// Name used for the topology itself when reporting validation errors on roots.
const TOPOLOGY_LABEL: &str = "<topology>";

/// A configuration item: one named entity at one position in the hierarchy.
///
/// The type is recursive so that any depth can be represented, even though
/// the builder only ever produces root → parent → child.
///
/// Decoding also accepts the capitalised `Name`/`Child` keys of older exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigItem {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Child", deserialize_with = "null_as_empty")]
    pub children: Vec<ConfigItem>,
}

impl ConfigItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&ConfigItem> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Find a direct child by name, appending a new one if absent.
    ///
    /// Linear scan: O(number of siblings). First-seen order falls out of
    /// appending, so no separate ordering bookkeeping is needed.
    pub fn child_or_insert(&mut self, name: &str) -> &mut ConfigItem {
        find_or_append(&mut self.children, name)
    }

    /// Number of items in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(ConfigItem::count).sum::<usize>()
    }

    fn validate(&self) -> DomainResult<()> {
        validate_siblings(&self.name, &self.children)?;
        self.children.iter().try_for_each(ConfigItem::validate)
    }

    fn to_tree(&self) -> Tree<String> {
        Tree::new(self.name.clone()).with_leaves(self.children.iter().map(ConfigItem::to_tree))
    }
}

/// The whole forest of configuration items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Topology {
    #[serde(alias = "Roots", deserialize_with = "null_as_empty")]
    pub roots: Vec<ConfigItem>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self, name: &str) -> Option<&ConfigItem> {
        self.roots.iter().find(|r| r.name == name)
    }

    /// Find a root by name, appending a new one if absent.
    pub fn root_or_insert(&mut self, name: &str) -> &mut ConfigItem {
        find_or_append(&mut self.roots, name)
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of configuration items in the forest.
    pub fn item_count(&self) -> usize {
        self.roots.iter().map(ConfigItem::count).sum()
    }

    /// Check the invariants a decoded topology must satisfy:
    /// every name non-empty, sibling names unique.
    pub fn validate(&self) -> DomainResult<()> {
        validate_siblings(TOPOLOGY_LABEL, &self.roots)?;
        self.roots.iter().try_for_each(ConfigItem::validate)
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = Tree::new(TOPOLOGY_LABEL.to_string())
            .with_leaves(self.roots.iter().map(ConfigItem::to_tree));
        write!(f, "{}", tree)
    }
}

/// Older exports write `null` for an empty list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ConfigItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ConfigItem>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One parsed `root;parent;child` record, borrowed from the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triplet<'a> {
    pub root: &'a str,
    pub parent: &'a str,
    pub child: &'a str,
}

impl<'a> Triplet<'a> {
    pub fn new(root: &'a str, parent: &'a str, child: &'a str) -> Self {
        Self {
            root,
            parent,
            child,
        }
    }
}

fn find_or_append<'a>(items: &'a mut Vec<ConfigItem>, name: &str) -> &'a mut ConfigItem {
    match items.iter().position(|i| i.name == name) {
        Some(idx) => &mut items[idx],
        None => {
            tracing::trace!("creating configuration item {:?}", name);
            items.push(ConfigItem::new(name));
            let last = items.len() - 1;
            &mut items[last]
        }
    }
}

fn validate_siblings(parent: &str, items: &[ConfigItem]) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if item.name.is_empty() {
            return Err(DomainError::EmptyName {
                parent: parent.to_string(),
            });
        }
        if !seen.insert(item.name.as_str()) {
            return Err(DomainError::DuplicateSibling {
                parent: parent.to_string(),
                name: item.name.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> ConfigItem {
        ConfigItem::new(name)
    }

    #[test]
    fn given_existing_child_when_child_or_insert_then_reuses_it() {
        let mut item = ConfigItem::new("root");
        item.child_or_insert("a");
        item.child_or_insert("b");
        item.child_or_insert("a");

        let names: Vec<_> = item.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn given_nested_items_when_counting_then_includes_all_levels() {
        let mut topology = Topology::new();
        topology
            .root_or_insert("r")
            .child_or_insert("p")
            .child_or_insert("c");
        topology.root_or_insert("s");

        assert_eq!(topology.item_count(), 4);
    }

    #[test]
    fn given_duplicate_siblings_when_validating_then_errors() {
        let topology = Topology {
            roots: vec![ConfigItem {
                name: "r".into(),
                children: vec![leaf("x"), leaf("x")],
            }],
        };

        assert_eq!(
            topology.validate(),
            Err(DomainError::DuplicateSibling {
                parent: "r".into(),
                name: "x".into()
            })
        );
    }

    #[test]
    fn given_empty_root_name_when_validating_then_errors() {
        let topology = Topology {
            roots: vec![leaf("")],
        };

        assert!(matches!(
            topology.validate(),
            Err(DomainError::EmptyName { .. })
        ));
    }

    #[test]
    fn given_topology_when_displayed_then_renders_tree() {
        let mut topology = Topology::new();
        topology.root_or_insert("r").child_or_insert("p");

        let shown = topology.to_string();
        assert!(shown.starts_with(TOPOLOGY_LABEL));
        assert!(shown.contains("r"));
        assert!(shown.contains("p"));
    }
}
