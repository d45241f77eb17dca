//! Fixture and team types.

use chrono::{DateTime, Utc};

use super::ids::FixtureId;
use super::quote::Quote;

/// A football team, as named by the quote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: u64,
    name: String,
}

impl Team {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Coarse fixture lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureStatus {
    Upcoming,
    InPlay,
    Finished,
}

/// One scheduled match together with its raw quote list.
#[derive(Debug, Clone)]
pub struct Fixture {
    id: FixtureId,
    home: Team,
    away: Team,
    kickoff: DateTime<Utc>,
    status: FixtureStatus,
    quotes: Vec<Quote>,
}

impl Fixture {
    /// Create a new fixture.
    pub fn new(
        id: FixtureId,
        home: Team,
        away: Team,
        kickoff: DateTime<Utc>,
        status: FixtureStatus,
        quotes: Vec<Quote>,
    ) -> Self {
        Self {
            id,
            home,
            away,
            kickoff,
            status,
            quotes,
        }
    }

    /// Get the fixture ID.
    #[must_use]
    pub fn id(&self) -> FixtureId {
        self.id
    }

    /// Get the home team.
    #[must_use]
    pub fn home(&self) -> &Team {
        &self.home
    }

    /// Get the away team.
    #[must_use]
    pub fn away(&self) -> &Team {
        &self.away
    }

    /// Get the scheduled kickoff time.
    #[must_use]
    pub fn kickoff(&self) -> DateTime<Utc> {
        self.kickoff
    }

    /// Get the lifecycle status.
    #[must_use]
    pub fn status(&self) -> FixtureStatus {
        self.status
    }

    /// Get the raw quote list.
    #[must_use]
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Display name in "Home v Away" form.
    #[must_use]
    pub fn name(&self) -> String {
        format!("{} v {}", self.home.name(), self.away.name())
    }

    /// Whether the fixture may still be added to an accumulator.
    ///
    /// Finished fixtures and fixtures whose kickoff has passed are not
    /// selectable. The clock instant is an argument so callers (and tests)
    /// control "now".
    #[must_use]
    pub fn is_selectable(&self, now: DateTime<Utc>) -> bool {
        self.status != FixtureStatus::Finished && self.kickoff > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn fixture_at(kickoff: DateTime<Utc>, status: FixtureStatus) -> Fixture {
        Fixture::new(
            FixtureId::new(1001),
            Team::new(1, "Arsenal"),
            Team::new(2, "Chelsea"),
            kickoff,
            status,
            vec![],
        )
    }

    #[test]
    fn name_is_home_v_away() {
        let now = Utc::now();
        let fixture = fixture_at(now, FixtureStatus::Upcoming);
        assert_eq!(fixture.name(), "Arsenal v Chelsea");
    }

    #[test]
    fn upcoming_fixture_is_selectable() {
        let now = Utc::now();
        let fixture = fixture_at(now + Duration::hours(2), FixtureStatus::Upcoming);
        assert!(fixture.is_selectable(now));
    }

    #[test]
    fn past_kickoff_is_not_selectable() {
        let now = Utc::now();
        let fixture = fixture_at(now - Duration::minutes(5), FixtureStatus::InPlay);
        assert!(!fixture.is_selectable(now));
    }

    #[test]
    fn finished_fixture_is_not_selectable() {
        let now = Utc::now();
        // Finished wins even if the store still reports a future kickoff.
        let fixture = fixture_at(now + Duration::hours(1), FixtureStatus::Finished);
        assert!(!fixture.is_selectable(now));
    }
}
