//! Program text parsing
//!
//! This module turns raw source text into an executable program grid:
//! - [`grid`]: the sparse code-point grid with wrap extents
//! - [`symbols`]: classification of code points into instruction categories
//!
//! There is no token stream and no AST — the program *is* the grid, one cell
//! per character, and instruction meaning is resolved per fetch. Parsing
//! cannot fail: any character is a legal cell, and unrecognized instructions
//! only become errors if the instruction pointer reaches them.

pub mod grid;
pub mod symbols;
