//! Client-side board state for Corkboard.
//!
//! Mirrors the server board in memory and keeps the two in sync: a full
//! refresh replaces the cache wholesale, while updates and deletes apply
//! optimistically and roll back to a snapshot when the server disagrees.
//! Drag gestures are reconciled at a single normalization boundary before
//! they ever touch cache state. Layout follows the rest of the crate:
//!
//! - Port contract in [`ports`]
//! - HTTP and in-process adapters in [`adapters`]
//! - The cache container in [`cache`]
//! - Gesture reconciliation in [`drag`]

pub mod adapters;
pub mod cache;
pub mod drag;
pub mod ports;

pub use cache::{MutationOutcome, TaskCache};
pub use drag::{DragController, DragState, DropOutcome};
