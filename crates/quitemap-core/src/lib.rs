//! Shared service plumbing: tracing setup, health endpoints, request ids.

pub mod health;
pub mod middleware;
pub mod tracing;
