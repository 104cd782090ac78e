//! Deterministic RNG hierarchy.
//!
//! A master seed generates a deterministic sub-seed for each roster, so a
//! game replayed with the same seed and the same participants draws the same
//! ladder. Sub-seeds are derived via BLAKE3 hashing of the master seed and the
//! ordered participant names.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::Roster;
use crate::ladder::RandomRungs;

/// Separator fed between names so `["ab", "c"]` and `["a", "bc"]` hash apart.
const NAME_SEPARATOR: u8 = 0x1f;

/// Deterministic RNG hierarchy.
#[derive(Debug, Clone)]
pub struct RngHierarchy {
    master_seed: u64,
}

impl RngHierarchy {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive a deterministic sub-seed for a roster.
    ///
    /// Participant order matters: the same names in a different order sit on
    /// different verticals and get a different ladder.
    pub fn sub_seed(&self, roster: &Roster) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        for name in roster {
            hasher.update(name.as_str().as_bytes());
            hasher.update(&[NAME_SEPARATOR]);
        }
        let hash = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }

    /// Create a seeded StdRng for a roster.
    pub fn rng_for(&self, roster: &Roster) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(roster))
    }

    /// Rung source for generating this roster's ladder.
    pub fn rungs_for(&self, roster: &Roster) -> RandomRungs<StdRng> {
        RandomRungs::new(self.rng_for(roster))
    }
}
