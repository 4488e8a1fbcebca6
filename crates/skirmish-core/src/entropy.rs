//! Local entropy source for procedural-content seeds.
//!
//! This is the guaranteed half of the seed pipeline: whatever happens to the
//! optional quantum collaborator, a seed of the requested width can always be
//! produced locally. Width handling lives here so both paths agree on what
//! "n bits" means.
//!
//! Functions are generic over [`rand::Rng`] so tests can drive them with a
//! seeded `ChaCha8Rng`; production uses `thread_rng`.

use rand::Rng;

/// Widest seed a response can carry (the wire type is `u64`).
pub const MAX_SEED_BITS: u32 = 64;

#[derive(Debug, thiserror::Error)]
pub enum EntropyError {
    /// Requested width outside 1..=64.
    #[error("seed width must be between 1 and 64 bits, got {0}")]
    InvalidWidth(u32),
}

/// A validated seed bit-width in 1..=64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedWidth(u32);

impl SeedWidth {
    /// The default width when the client does not ask for one.
    pub const DEFAULT: SeedWidth = SeedWidth(MAX_SEED_BITS);

    pub fn new(bits: u32) -> Result<Self, EntropyError> {
        if bits == 0 || bits > MAX_SEED_BITS {
            return Err(EntropyError::InvalidWidth(bits));
        }
        Ok(SeedWidth(bits))
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Truncates a value to this width.
    pub fn mask(self, value: u64) -> u64 {
        if self.0 == MAX_SEED_BITS {
            value
        } else {
            value & ((1u64 << self.0) - 1)
        }
    }
}

impl Default for SeedWidth {
    fn default() -> Self {
        SeedWidth::DEFAULT
    }
}

/// Draws a uniform seed of the given width from the thread-local PRNG.
pub fn local_seed(width: SeedWidth) -> u64 {
    seed_from_rng(&mut rand::thread_rng(), width)
}

/// Draws a uniform seed of the given width from the provided RNG.
pub fn seed_from_rng<R: Rng>(rng: &mut R, width: SeedWidth) -> u64 {
    width.mask(rng.gen::<u64>())
}
