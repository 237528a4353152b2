//! Neighbor expansion tables keyed by operating mode

use crate::Error;
use glam::IVec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which classification a probed neighbor must belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Neighbor must be a log
    Log,
    /// Neighbor must be a leaf block
    Leaves,
}

/// One neighbor probe: where to look and what to accept there
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// Displacement from the block being processed
    pub offset: IVec3,
    /// Classification the neighbor must have
    pub filter: Filter,
}

impl Probe {
    /// Candidate position for a probe around `origin`
    pub fn target(&self, origin: IVec3) -> IVec3 {
        origin + self.offset
    }
}

/// The 26 neighbors of a voxel (3x3x3 cube minus the center), x-major
pub const CUBE_OFFSETS: [IVec3; 26] = cube_offsets();

const fn cube_offsets() -> [IVec3; 26] {
    let mut offsets = [IVec3::ZERO; 26];
    let mut i = 0;
    let mut x = -1;
    while x <= 1 {
        let mut y = -1;
        while y <= 1 {
            let mut z = -1;
            while z <= 1 {
                if !(x == 0 && y == 0 && z == 0) {
                    offsets[i] = IVec3::new(x, y, z);
                    i += 1;
                }
                z += 1;
            }
            y += 1;
        }
        x += 1;
    }
    offsets
}

const fn table<const N: usize>(trunk_up: bool, cube_filters: &[Filter]) -> [Probe; N] {
    let mut probes = [Probe {
        offset: IVec3::ZERO,
        filter: Filter::Log,
    }; N];
    let mut i = 0;
    if trunk_up {
        probes[0] = Probe {
            offset: IVec3::Y,
            filter: Filter::Log,
        };
        i = 1;
    }
    let mut f = 0;
    while f < cube_filters.len() {
        let mut o = 0;
        while o < CUBE_OFFSETS.len() {
            probes[i] = Probe {
                offset: CUBE_OFFSETS[o],
                filter: cube_filters[f],
            };
            i += 1;
            o += 1;
        }
        f += 1;
    }
    assert!(i == N);
    probes
}

const CLASSIC: [Probe; 1] = table(true, &[]);
const CLASSIC_WITH_LEAVES: [Probe; 27] = table(true, &[Filter::Leaves]);
const FULL: [Probe; 52] = table(false, &[Filter::Log, Filter::Leaves]);
const FULL_WITHOUT_LEAVES: [Probe; 26] = table(false, &[Filter::Log]);

/// How far a chain spreads from each removed block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OperatingMode {
    /// Follow the trunk straight up
    #[default]
    Classic,
    /// Follow the trunk up and sweep leaves around every removed block
    ClassicWithLeaves,
    /// Spread to any touching log or leaf block
    Full,
    /// Spread to any touching log
    FullWithoutLeaves,
}

impl OperatingMode {
    /// All modes in declaration order
    pub const ALL: [OperatingMode; 4] = [
        OperatingMode::Classic,
        OperatingMode::ClassicWithLeaves,
        OperatingMode::Full,
        OperatingMode::FullWithoutLeaves,
    ];

    /// Probes to run around each removed block, in order
    pub fn probes(self) -> &'static [Probe] {
        match self {
            OperatingMode::Classic => &CLASSIC,
            OperatingMode::ClassicWithLeaves => &CLASSIC_WITH_LEAVES,
            OperatingMode::Full => &FULL,
            OperatingMode::FullWithoutLeaves => &FULL_WITHOUT_LEAVES,
        }
    }

    /// Configuration spelling of the mode
    pub fn as_str(self) -> &'static str {
        match self {
            OperatingMode::Classic => "classic",
            OperatingMode::ClassicWithLeaves => "classic_with_leaves",
            OperatingMode::Full => "full",
            OperatingMode::FullWithoutLeaves => "full_without_leaves",
        }
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        OperatingMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == key)
            .ok_or_else(|| Error::UnknownMode(s.to_string()))
    }
}

impl TryFrom<String> for OperatingMode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OperatingMode> for String {
    fn from(mode: OperatingMode) -> Self {
        mode.as_str().to_string()
    }
}
