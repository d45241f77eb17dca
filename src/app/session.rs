//! The accumulator session aggregate.

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{
    rank_by_provider, Comparison, Fixture, FixtureId, Outcome, Slip, SlipError, Stake,
};

/// One user's accumulator-building session: the slip plus the stake.
///
/// This is the single owner of all mutable state in the subsystem. Mutations
/// are synchronous; comparisons are recomputed from scratch on each read,
/// which is linear in the leg count and cheap enough to run on every change.
#[derive(Debug, Clone)]
pub struct AccaSession {
    slip: Slip,
    stake: Stake,
}

impl AccaSession {
    /// Create a session with the given stake.
    #[must_use]
    pub fn new(stake: Stake) -> Self {
        Self {
            slip: Slip::new(),
            stake,
        }
    }

    /// Add a fixture to the slip (defaults to the home outcome).
    ///
    /// # Errors
    ///
    /// Propagates [`SlipError`] when the slip is full or already carries the
    /// fixture.
    pub fn add_fixture(&mut self, fixture: &Fixture) -> Result<(), SlipError> {
        self.slip.add_fixture(fixture)?;
        debug!(fixture = %fixture.id(), legs = self.slip.len(), "leg added");
        Ok(())
    }

    /// Remove a fixture's leg; no-op when absent.
    pub fn remove_fixture(&mut self, fixture_id: FixtureId) {
        self.slip.remove(fixture_id);
        debug!(fixture = %fixture_id, legs = self.slip.len(), "leg removed");
    }

    /// Change a leg's chosen outcome. Returns false when the fixture has no
    /// leg.
    pub fn set_outcome(&mut self, fixture_id: FixtureId, outcome: Outcome) -> bool {
        let changed = self.slip.set_outcome(fixture_id, outcome);
        if changed {
            debug!(fixture = %fixture_id, %outcome, "outcome changed");
        }
        changed
    }

    /// Replace the stake.
    pub fn set_stake(&mut self, stake: Stake) {
        self.stake = stake;
    }

    /// Empty the slip.
    pub fn clear(&mut self) {
        self.slip.clear();
    }

    /// Current stake.
    #[must_use]
    pub fn stake(&self) -> Stake {
        self.stake
    }

    /// Read access to the slip.
    #[must_use]
    pub fn slip(&self) -> &Slip {
        &self.slip
    }

    /// True once enough legs are on the slip for totals.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.slip.is_ready()
    }

    /// Ranked per-provider comparisons for the current legs and stake.
    ///
    /// Empty until the slip is ready.
    #[must_use]
    pub fn comparisons(&self) -> Vec<Comparison> {
        rank_by_provider(self.slip.legs(), self.stake)
    }
}

impl Default for AccaSession {
    /// A session with the customary starting stake of 10.
    fn default() -> Self {
        Self::new(Decimal::TEN)
    }
}
