//! Execution engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: the interpreter state and the fetch-execute-advance loop
//! - [`ops`]: per-category instruction handlers
//! - [`errors`]: runtime error types
//!
//! # Execution Model
//!
//! The engine fetches the cell under the program counter, classifies it,
//! dispatches, then advances the pc along the direction vector with
//! toroidal wraparound at the grid's current extents. There is no step
//! limit; a run ends only at `;` or on a fatal error.

pub mod engine;
pub mod errors;
pub mod ops;
