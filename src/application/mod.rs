//! Application layer
//!
//! Use cases that orchestrate the domain ports to implement
//! application-specific workflows.

pub mod account;
