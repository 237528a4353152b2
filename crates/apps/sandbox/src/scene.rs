//! Tree scenes for the sandbox world

use glam::IVec3;
use timber::{Material, MemoryWorld};

/// A single straight tree: a trunk with a round canopy around its top log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeSpec {
    /// Wood species, e.g. `oak` or `dark_oak`
    pub species: String,
    /// Position of the lowest trunk log
    pub base: IVec3,
    /// Number of trunk logs (at least one is planted)
    pub trunk_height: i32,
    /// Canopy radius around the top log
    pub canopy_radius: i32,
}

/// Blocks written by [`TreeSpec::plant`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Planted {
    /// Trunk logs written
    pub logs: usize,
    /// Leaf blocks written
    pub leaves: usize,
}

impl Default for TreeSpec {
    fn default() -> Self {
        TreeSpec {
            species: "oak".to_string(),
            base: IVec3::ZERO,
            trunk_height: 6,
            canopy_radius: 2,
        }
    }
}

impl TreeSpec {
    pub fn log(&self) -> Material {
        Material::new(&format!("{}_log", self.species))
    }

    pub fn leaves(&self) -> Material {
        Material::new(&format!("{}_leaves", self.species))
    }

    /// Top trunk log, the center of the canopy
    pub fn crown(&self) -> IVec3 {
        self.base + IVec3::Y * (self.trunk_height.max(1) - 1)
    }

    /// Trunk positions from the base upward
    pub fn trunk(&self) -> impl Iterator<Item = IVec3> + '_ {
        (0..self.trunk_height.max(1)).map(move |y| self.base + IVec3::Y * y)
    }

    /// Write the tree into `world`, on a single dirt block
    ///
    /// Leaves fill every position within the canopy radius of the crown
    /// (rounded out by one) that is not part of the trunk.
    pub fn plant(&self, world: &mut MemoryWorld) -> Planted {
        let mut planted = Planted::default();
        let log = self.log();
        let leaves = self.leaves();

        world.set(self.base - IVec3::Y, Material::new("DIRT"));
        for position in self.trunk() {
            world.set(position, log.clone());
            planted.logs += 1;
        }

        let r = self.canopy_radius.max(0);
        let crown = self.crown();
        for x in -r..=r {
            for y in -r..=r {
                for z in -r..=r {
                    let offset = IVec3::new(x, y, z);
                    if !in_canopy(offset, r) {
                        continue;
                    }
                    let position = crown + offset;
                    if world.get(position).is_some() {
                        continue;
                    }
                    world.set(position, leaves.clone());
                    planted.leaves += 1;
                }
            }
        }

        planted
    }
}

/// Check if an offset from the crown lies inside a canopy of radius `r`
fn in_canopy(offset: IVec3, r: i32) -> bool {
    let limit = i64::from(r) * i64::from(r) + 1;
    offset.as_i64vec3().length_squared() <= limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_trunk() {
        let tree = TreeSpec {
            trunk_height: 5,
            canopy_radius: 0,
            ..TreeSpec::default()
        };
        let mut world = MemoryWorld::new();
        let planted = tree.plant(&mut world);

        // radius zero only covers the crown, which is already a log
        assert_eq!(planted, Planted { logs: 5, leaves: 0 });
        assert_eq!(world.count(&Material::new("OAK_LOG")), 5);
        assert_eq!(world.get(IVec3::NEG_Y), Some(&Material::new("DIRT")));
        assert_eq!(tree.crown(), IVec3::new(0, 4, 0));
    }

    #[test]
    fn test_canopy_surrounds_crown() {
        let tree = TreeSpec {
            species: "birch".into(),
            base: IVec3::new(10, 64, -3),
            trunk_height: 4,
            canopy_radius: 1,
        };
        let mut world = MemoryWorld::new();
        let planted = tree.plant(&mut world);

        // 3x3x3 cube without its 8 corners, minus the crown and the log below it
        assert_eq!(planted.logs, 4);
        assert_eq!(planted.leaves, 17);
        assert_eq!(
            world.get(tree.crown() + IVec3::X),
            Some(&Material::new("BIRCH_LEAVES"))
        );
        assert_eq!(world.get(tree.crown() + IVec3::ONE), None);
        assert_eq!(world.len(), 1 + 4 + 17);
    }

    #[test]
    fn test_canopy_bound_with_large_radius() {
        // r * r and the offset length both exceed i32 here
        let r = 50_000;
        assert!(in_canopy(IVec3::new(r, 0, 0), r));
        assert!(in_canopy(IVec3::new(r, 1, 0), r));
        assert!(!in_canopy(IVec3::new(r, 1, 1), r));
        assert!(!in_canopy(IVec3::splat(r), r));
        assert!(in_canopy(IVec3::ZERO, 0));
        assert!(!in_canopy(IVec3::ONE, 0));
    }

    #[test]
    fn test_zero_height_still_plants_one_log() {
        let tree = TreeSpec {
            trunk_height: 0,
            canopy_radius: 0,
            ..TreeSpec::default()
        };
        assert_eq!(tree.trunk().count(), 1);
        assert_eq!(tree.plant(&mut MemoryWorld::new()).logs, 1);
    }
}
