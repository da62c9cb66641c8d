//! Domain types shared by the web service and the registration bot.
//!
//! This crate contains only pure types and capabilities with no framework
//! dependencies. Import in `usecase/` and `domain/` layers; never in
//! `infra/` or `handlers/`.

pub mod account;
pub mod password;
pub mod registration;
pub mod token;
