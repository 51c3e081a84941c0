//! Task persistence and board CRUD for Corkboard.
//!
//! This module owns the single `Task` entity and everything between it and
//! the relational store: create forces new tasks into the `To Do` column,
//! listing groups tasks into the three board columns ordered by creation
//! time, update applies an arbitrary subset of title/description/status,
//! and delete removes the record outright. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
