//! Material identifiers and the catalog of materials a host knows about

use std::collections::HashMap;
use std::fmt;

/// Normalized material identifier, e.g. `OAK_LOG`
///
/// Names are compared after normalization, so `oak_log`, `minecraft:oak_log`
/// and `Oak Log` all denote the same material.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Material(String);

impl Material {
    /// Create a material from any spelling of its name
    pub fn new(name: &str) -> Self {
        Material(normalize(name))
    }

    /// The empty block
    pub fn air() -> Self {
        Material("AIR".to_string())
    }

    /// Get the normalized name
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Check if this is the empty block
    pub fn is_air(&self) -> bool {
        self.0 == "AIR"
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize(name: &str) -> String {
    let trimmed = name.trim();
    let bare = match trimmed.get(..10) {
        Some(prefix) if prefix.eq_ignore_ascii_case("minecraft:") => &trimmed[10..],
        _ => trimmed,
    };
    bare.chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

const VANILLA_AXES: [(&str, u32); 6] = [
    ("WOODEN_AXE", 59),
    ("STONE_AXE", 131),
    ("IRON_AXE", 250),
    ("GOLDEN_AXE", 32),
    ("DIAMOND_AXE", 1561),
    ("NETHERITE_AXE", 2031),
];

const VANILLA_SPECIES: [&str; 8] = [
    "OAK", "SPRUCE", "BIRCH", "JUNGLE", "ACACIA", "DARK_OAK", "MANGROVE", "CHERRY",
];

const VANILLA_BLOCKS: [&str; 13] = [
    "AIR",
    "STONE",
    "DIRT",
    "GRASS_BLOCK",
    "PODZOL",
    "COARSE_DIRT",
    "MANGROVE_ROOTS",
    "VINE",
    "BEE_NEST",
    "COCOA",
    "AZALEA_LEAVES",
    "FLOWERING_AZALEA_LEAVES",
    "SHROOMLIGHT",
];

/// Set of materials a host recognizes, with tool durability ceilings
///
/// Configured names are resolved against the catalog; names it does not know
/// resolve to nothing.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Material -> maximum durability (0 for materials that never wear)
    entries: HashMap<Material, u32>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Catalog of the vanilla axes, tree blocks and ground blocks
    pub fn vanilla() -> Self {
        let mut catalog = Catalog::new();
        for (name, durability) in VANILLA_AXES {
            catalog.insert(Material::new(name), durability);
        }
        for species in VANILLA_SPECIES {
            for suffix in ["LOG", "WOOD", "LEAVES", "SAPLING"] {
                catalog.insert(Material::new(&format!("{species}_{suffix}")), 0);
                if suffix == "LOG" || suffix == "WOOD" {
                    catalog.insert(Material::new(&format!("STRIPPED_{species}_{suffix}")), 0);
                }
            }
        }
        for fungus in ["CRIMSON", "WARPED"] {
            for suffix in ["STEM", "HYPHAE"] {
                catalog.insert(Material::new(&format!("{fungus}_{suffix}")), 0);
            }
        }
        catalog.insert(Material::new("NETHER_WART_BLOCK"), 0);
        catalog.insert(Material::new("WARPED_WART_BLOCK"), 0);
        for name in VANILLA_BLOCKS {
            catalog.insert(Material::new(name), 0);
        }
        catalog
    }

    /// Builder-style insert
    pub fn with(mut self, name: &str, max_durability: u32) -> Self {
        self.insert(Material::new(name), max_durability);
        self
    }

    /// Register a material
    pub fn insert(&mut self, material: Material, max_durability: u32) {
        self.entries.insert(material, max_durability);
    }

    /// Resolve a configured name, or `None` if the catalog doesn't know it
    pub fn resolve(&self, name: &str) -> Option<Material> {
        let material = Material::new(name);
        self.entries.contains_key(&material).then_some(material)
    }

    /// Check if a material is known
    pub fn contains(&self, material: &Material) -> bool {
        self.entries.contains_key(material)
    }

    /// Maximum durability of a material (0 if unknown or not damageable)
    pub fn max_durability(&self, material: &Material) -> u32 {
        self.entries.get(material).copied().unwrap_or(0)
    }

    /// Get the number of known materials
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
