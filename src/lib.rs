//! Account registration service.
//!
//! The crate follows a hexagonal layout: `domain` holds the account model,
//! the error taxonomy and the capability ports, `application` the
//! account-creation use case, `adapters` the HTTP surface, and
//! `infrastructure` the concrete hashing, validation, persistence and
//! configuration adapters.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
