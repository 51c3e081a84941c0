//! Corkboard: a Kanban task board.
//!
//! This crate provides both halves of a three-column task board: the
//! server-side CRUD API persisting tasks in `PostgreSQL`, and the
//! client-side cache and drag reconciliation that keep a board UI in step
//! with the server through optimistic mutations.
//!
//! # Architecture
//!
//! Corkboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP)
//!
//! # Modules
//!
//! - [`task`]: Task entity, persistence, and board CRUD orchestration
//! - [`api`]: HTTP surface over the board service
//! - [`board`]: Client task cache and drag-gesture reconciliation
//! - [`config`]: Environment-derived settings

pub mod api;
pub mod board;
pub mod config;
pub mod task;
