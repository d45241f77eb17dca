//! Application-level state for an accumulator-building session.

mod session;

pub use session::AccaSession;
