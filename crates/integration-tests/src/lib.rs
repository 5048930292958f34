//! Integration tests for Tamarind Market.
//!
//! # Running Tests
//!
//! ```bash
//! # Start PostgreSQL and run migrations
//! cargo run -p tamarind-cli -- migrate market
//!
//! # Start the market server
//! cargo run -p tamarind-market
//!
//! # Run the ignored integration tests
//! cargo test -p tamarind-integration-tests -- --ignored
//! ```
//!
//! Tests live in `tests/` and are `#[ignore]`-gated so the default test run
//! stays hermetic. They talk to a running server over HTTP via reqwest and
//! inspect the database directly via sqlx where the API surface is not
//! enough (keyword counters).
