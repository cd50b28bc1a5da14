//! Short random ids for new lists and todos

use rand::Rng;
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

/// Number of hex characters in a generated id
pub const ID_LENGTH: usize = 8;

/// Candidates to try before giving up on finding a free id
pub const MAX_ATTEMPTS: u32 = 16;

/// Produces candidate ids derived from a seed (usually the title).
///
/// Each candidate mixes in the current time and a random salt, so two
/// generators with the same seed do not collide. Callers check each
/// candidate against the database and ask for the next one on a clash.
pub struct IdGenerator {
    seed: String,
    attempts: u32,
}

impl IdGenerator {
    /// Create a generator for the given seed
    pub fn new(seed: &str) -> Self {
        Self {
            seed: seed.to_string(),
            attempts: 0,
        }
    }

    /// Next candidate id, or `None` once the attempt budget is spent
    pub fn next_id(&mut self) -> Option<String> {
        if self.attempts >= MAX_ATTEMPTS {
            return None;
        }
        self.attempts += 1;

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let salt: u64 = rand::rng().random();

        let mut hasher = Sha256::new();
        hasher.update(self.seed.as_bytes());
        hasher.update(nanos.to_le_bytes());
        hasher.update(salt.to_le_bytes());
        hasher.update(self.attempts.to_le_bytes());
        let digest = format!("{:x}", hasher.finalize());

        Some(digest[..ID_LENGTH].to_string())
    }
}
