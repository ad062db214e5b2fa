//! Squadron ledger - the single mutation point for squadron state
//!
//! All state changes flow through [`SquadronLedger`] commands. Each command
//! validates before it mutates, so a returned error always leaves the
//! squadron exactly as it was.

pub mod campaign;
pub mod hangar;
pub mod roster;

pub use campaign::{MissionCompletion, TaskForce};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::error::{Result, SquadronError};
use crate::model::squadron::Squadron;

/// Owns the squadron plus the rng every randomized command draws from.
pub struct SquadronLedger {
    squadron: Squadron,
    rng: ChaCha8Rng,
}

impl SquadronLedger {
    /// Fresh squadron with a random seed
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Fresh squadron with a fixed seed for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self::from_squadron(Squadron::default(), seed)
    }

    /// Wrap an existing squadron, e.g. one restored from a save
    pub fn from_squadron(squadron: Squadron, seed: u64) -> Self {
        Self {
            squadron,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Read-only view of the squadron
    pub fn squadron(&self) -> &Squadron {
        &self.squadron
    }

    /// Charge credits, rejecting the whole command if they cannot be covered
    fn debit(&mut self, amount: i64) -> Result<()> {
        if self.squadron.credits < amount {
            return Err(SquadronError::InsufficientCredits {
                needed: amount,
                available: self.squadron.credits,
            });
        }
        self.squadron.credits -= amount;
        Ok(())
    }
}

impl Default for SquadronLedger {
    fn default() -> Self {
        Self::new()
    }
}
