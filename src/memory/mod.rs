//! Engine memory model
//!
//! This module provides the mutable state the instructions operate on:
//! - [`value`]: the tagged numeric type (arbitrary-precision integer or
//!   exact rational, collapsed to integer whenever integer-valued)
//! - [`stack`]: the value stack, the single-slot register, and the saved
//!   frames that implement nested sub-stacks
//!
//! There is no heap and no variable namespace — all program state outside
//! the grid itself lives on the stack hierarchy.

pub mod stack;
pub mod value;
