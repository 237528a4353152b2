//! Classification of materials into tools, logs and leaves

use crate::{Catalog, Material};
use std::collections::HashSet;

/// One classification list: configured order plus a membership index
#[derive(Debug, Clone, Default)]
struct MaterialSet {
    ordered: Vec<Material>,
    index: HashSet<Material>,
}

impl MaterialSet {
    fn resolve<S: AsRef<str>>(catalog: &Catalog, names: &[S], key: &str) -> Self {
        let mut set = MaterialSet::default();
        for name in names {
            let name = name.as_ref();
            match catalog.resolve(name) {
                Some(material) => set.push(material),
                None => tracing::warn!(key, name, "Ignoring unknown material"),
            }
        }
        set
    }

    fn push(&mut self, material: Material) {
        if self.index.insert(material.clone()) {
            self.ordered.push(material);
        }
    }

    fn contains(&self, material: &Material) -> bool {
        self.index.contains(material)
    }
}

/// The three material categories the engine reasons about
///
/// Built once at startup and read-only afterwards. Names the catalog does not
/// know are dropped, so a misspelled entry simply never matches.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    tools: MaterialSet,
    logs: MaterialSet,
    leaves: MaterialSet,
}

impl Classification {
    /// Resolve the configured name lists against a catalog
    pub fn resolve<S: AsRef<str>>(
        catalog: &Catalog,
        axe_types: &[S],
        log_types: &[S],
        leaves_types: &[S],
    ) -> Self {
        Classification {
            tools: MaterialSet::resolve(catalog, axe_types, "axe-types"),
            logs: MaterialSet::resolve(catalog, log_types, "log-types"),
            leaves: MaterialSet::resolve(catalog, leaves_types, "leaves-types"),
        }
    }

    /// Check if a material qualifies as a felling tool
    pub fn is_tool(&self, material: &Material) -> bool {
        self.tools.contains(material)
    }

    /// Check if a material is a log
    pub fn is_log(&self, material: &Material) -> bool {
        self.logs.contains(material)
    }

    /// Check if a material is a leaf block
    pub fn is_leaf(&self, material: &Material) -> bool {
        self.leaves.contains(material)
    }

    /// Tool materials in configured order
    pub fn tools(&self) -> &[Material] {
        &self.tools.ordered
    }

    /// Log materials in configured order
    pub fn logs(&self) -> &[Material] {
        &self.logs.ordered
    }

    /// Leaf materials in configured order
    pub fn leaves(&self) -> &[Material] {
        &self.leaves.ordered
    }
}
