//! Shared test fixtures for the bookstore API.
//!
//! Provides helpers that let unit tests run without a live MongoDB server or a
//! real process environment:
//!
//! - `db` - lazy database handles (the driver defers all I/O until the first
//!   operation, so handlers and repositories can be constructed freely)
//! - `env` - a process-wide lock plus scoped guards for environment variable
//!   tests, which would otherwise race across the parallel test harness
//! - `fatal` - a recorder standing in for process termination so the fail-fast
//!   path can be asserted on instead of killing the test runner

pub mod db;
pub mod env;
pub mod fatal;
