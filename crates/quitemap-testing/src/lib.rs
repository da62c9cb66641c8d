//! Test fixtures for the QuiteMap services.
//!
//! Account and pending-registration builders shared by the web and bot
//! integration tests. Import in `#[cfg(test)]` / `tests/` only, never in
//! production code.

pub mod fixture;
