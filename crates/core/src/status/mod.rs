//! Generic entity status lifecycle.
//!
//! This module implements the six-state status machine records use to move
//! from draft through active use to archival or deletion.
//!
//! # Modules
//!
//! - `types` - `EntityStatus` and its transition table
//! - `error` - Rejected transition error
//! - `workflow` - The owned `StatusWorkflow` component and its transport view

pub mod error;
pub mod types;
pub mod workflow;

#[cfg(test)]
mod workflow_props;

pub use error::IllegalStatusTransition;
pub use types::EntityStatus;
pub use workflow::{StatusChange, StatusView, StatusWorkflow};
