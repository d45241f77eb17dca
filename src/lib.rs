//! Oddsfold - Football odds aggregation and accumulator price comparison.
//!
//! This crate takes raw per-bookmaker price quotes for football fixtures and
//! reduces them into the three views a price-comparison surface needs:
//!
//! - **`domain::BestPrices`** - the best quoted price per 1X2 outcome,
//!   with the bookmaker that offers it
//! - **`domain::provider_rows`** - the full market grid, one row per
//!   bookmaker with whatever outcomes it quoted
//! - **`domain::rank_by_provider`** - ranked bookmaker comparisons for a
//!   multi-fixture accumulator slip
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Quote normalization, aggregation, slip and totalizer logic
//! - [`error`] - Error types for the crate
//! - [`store`] - Quote store boundary: hosted REST API and local file
//! - [`app`] - Accumulator session state container
//! - [`cli`] - Operator CLI over the outbound views
//!
//! # Example
//!
//! ```no_run
//! use oddsfold::app::AccaSession;
//! use oddsfold::domain::Outcome;
//! use rust_decimal_macros::dec;
//!
//! let mut session = AccaSession::new(dec!(10));
//! // session.add_fixture(&fixture)? for each chosen fixture, then:
//! for comparison in session.comparisons() {
//!     println!("#{} {}", comparison.rank(), comparison.provider().name());
//! }
//! # let _ = Outcome::Home;
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod store;

#[cfg(feature = "testkit")]
pub mod testkit;
